// ─────────────────────────────────────────────────────────────────────────────
//  Shashin smoke client
//
//  Drives the real form controllers against a running backend, the same way
//  the browser forms do, and reports the state each flow ends in.
// ─────────────────────────────────────────────────────────────────────────────

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use clap::Subcommand;
use shashin::Navigator;
use shashin::SubmissionController;
use shashin::SubmitOutcome;
use shashin::config::load_config_or_default;
use shashin::constants::INVALID_RESET_LINK;
use shashin::controller::LoggingNavigator;
use shashin::error::Result;
use shashin::error::anyhow;
use shashin::err_with_loc;
use shashin::form::FormFields;
use shashin::form::LoginFields;
use shashin::form::ResetPasswordPage;
use shashin::form::ResetRequestFields;
use shashin::form::SignupFields;
use shashin::logging::setup_tracing;
use shashin::transport::HttpClient;
use shashin::transport::ReqwestHttpClient;
use shashin::transport::TransportAdapter;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "shashin-smoke", about = "Submit the auth forms against a running backend")]
struct Cli {
    #[arg(long, default_value = "Config.toml")]
    config: PathBuf,

    /// Overrides api.base_url from the config file
    #[arg(long)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Ask for a password reset email
    ResetRequest {
        #[arg(long)]
        email: String,
    },
    /// Set a new password using the link from the reset email
    ResetPassword {
        #[arg(long)]
        link: url::Url,
        #[arg(long)]
        password: String,
        #[arg(long)]
        confirm: String,
    },
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    Signup {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        confirm: String,
    },
}

async fn submit<F: FormFields>(
    fields: F,
    adapter: TransportAdapter,
    navigator: Arc<dyn Navigator>,
) -> Result<()> {
    let controller = SubmissionController::new(fields, adapter, navigator);
    let outcome = controller.submit().await;
    let message = controller.message().map(|message| message.text().to_string()).unwrap_or_default();

    info!("smoke::{}::{:?}", controller.flow().name, controller.state());
    println!("{}", message);

    match outcome {
        SubmitOutcome::Succeeded => Ok(()),
        other => Err(anyhow!("{} did not succeed: {:?}", controller.flow().name, other)),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = load_config_or_default(&cli.config)?;
    if let Some(base_url) = cli.base_url {
        config.api.base_url = base_url;
    }

    let _guard = setup_tracing("smoke", &config.logging)?;
    info!("smoke::config::api::{}", config.api.base_url);

    let client: Arc<dyn HttpClient> = Arc::new(ReqwestHttpClient::new(&config.api));
    let adapter = TransportAdapter::new(client, config.api.base_url.clone());
    let navigator: Arc<dyn Navigator> = Arc::new(LoggingNavigator);

    match cli.command {
        Command::ResetRequest { email } => {
            let fields = ResetRequestFields::new();
            fields.email.set(email);
            submit(fields, adapter, navigator).await
        },
        Command::ResetPassword { link, password, confirm } => match ResetPasswordPage::from_url(&link) {
            ResetPasswordPage::Ready(fields) => {
                fields.new_password.set(password);
                fields.confirm_password.set(confirm);
                submit(fields, adapter, navigator).await
            },
            ResetPasswordPage::InvalidLink => {
                println!("{}", INVALID_RESET_LINK);
                Err(err_with_loc!("reset link has no token"))
            },
        },
        Command::Login { email, password } => {
            let fields = LoginFields::new();
            fields.email.set(email);
            fields.password.set(password);
            submit(fields, adapter, navigator).await
        },
        Command::Signup { email, password, confirm } => {
            let fields = SignupFields::new();
            fields.email.set(email);
            fields.password.set(password);
            fields.confirm_password.set(confirm);
            submit(fields, adapter, navigator).await
        },
    }
}
