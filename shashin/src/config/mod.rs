pub mod api;
pub mod log;

use std::path::Path;

use serde::Deserialize;
use serde::Serialize;
use tracing::debug;

pub use api::ApiConfig;
pub use log::LoggingConfig;

use crate::error::ConfigError;

pub const API_BASE_URL_ENV: &str = "SHASHIN_API_BASE_URL";
pub const API_TIMEOUT_SECS_ENV: &str = "SHASHIN_API_TIMEOUT_SECS";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Applies `SHASHIN_API_*` variables on top of whatever the file said.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(base_url) = std::env::var(API_BASE_URL_ENV) {
            debug!("config::override::{}", API_BASE_URL_ENV);
            self.api.base_url = base_url;
        }

        if let Ok(timeout) = std::env::var(API_TIMEOUT_SECS_ENV) {
            self.api.timeout_secs = timeout.trim().parse().map_err(|_| ConfigError::InvalidOverride {
                key: API_TIMEOUT_SECS_ENV,
                value: timeout.clone(),
            })?;
        }

        Ok(())
    }
}

pub fn parse_config(config_str: &str) -> Result<Config, ConfigError> {
    toml::from_str(config_str).map_err(|e| ConfigError::ParseError(e.to_string()))
}

/// Reads a TOML config file, then `.env` and the `SHASHIN_API_*` overrides.
pub fn load_config(path: impl AsRef<Path>) -> crate::Result<Config> {
    let path = path.as_ref();
    let config_str = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::OpenFileError(format!("{}: {}", path.display(), e)))?;
    let mut config = parse_config(&config_str)?;

    dotenvy::dotenv().ok();
    config.apply_env_overrides()?;
    Ok(config)
}

/// Like [`load_config`], but a missing file means defaults plus env overrides.
pub fn load_config_or_default(path: impl AsRef<Path>) -> crate::Result<Config> {
    if path.as_ref().exists() {
        return load_config(path);
    }

    dotenvy::dotenv().ok();
    let mut config = Config::default();
    config.apply_env_overrides()?;
    Ok(config)
}
