mod filter;
mod format;

use std::path::Path;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_appender::rolling::Rotation;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Layer;
use tracing_subscriber::prelude::*;

pub use filter::ErrorFileFilter;
pub use format::ShashinFormat;

use crate::config::LoggingConfig;

/// Terminal output filtered by `RUST_LOG` (falling back to `config.level`),
/// plus a daily error/warn file under `<directory>/error/` when a directory is set.
///
/// Keep the returned guard alive for as long as file logging should flush.
pub fn setup_tracing(engine_name: &str, config: &LoggingConfig) -> crate::Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let format = ShashinFormat {
        engine_name: engine_name.to_string(),
    };

    let terminal = tracing_subscriber::fmt::Layer::default()
        .with_ansi(true)
        .event_format(format.clone())
        .with_filter(env_filter);

    let (error_file, guard) = match config.directory.as_deref() {
        Some(directory) => {
            let error_dir = Path::new(directory).join("error");
            std::fs::create_dir_all(&error_dir)
                .with_context(|| format!("Failed to create logs directory: {}", error_dir.display()))?;

            let appender = RollingFileAppender::new(Rotation::DAILY, &error_dir, format!("{}.log", engine_name));
            let (non_blocking_error, guard) = tracing_appender::non_blocking(appender);

            let layer = tracing_subscriber::fmt::Layer::default()
                .with_ansi(false)
                .event_format(format.clone())
                .with_writer(non_blocking_error)
                .with_filter(ErrorFileFilter);
            (Some(layer), Some(guard))
        },
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(terminal)
        .with(error_file)
        .try_init()
        .context("Error setting up logging")?;

    tracing::info!("{}_logging_started::level::{}", engine_name, config.level);
    Ok(guard)
}
