use std::io::Write;
use std::time::Duration;

use pretty_assertions::assert_eq;
use serial_test::serial;

use shashin::config::API_BASE_URL_ENV;
use shashin::config::API_TIMEOUT_SECS_ENV;
use shashin::config::ApiConfig;
use shashin::config::Config;
use shashin::config::LoggingConfig;
use shashin::config::load_config;
use shashin::config::load_config_or_default;
use shashin::config::parse_config;
use shashin::error::ConfigError;

const SAMPLE: &str = r#"
[api]
base_url = "https://api.shashin.example"
timeout_secs = 5

[logging]
directory = "/var/log/shashin"
level = "debug"
"#;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_parse_full_config() {
    let config = parse_config(SAMPLE).unwrap();

    assert_eq!(
        config,
        Config {
            api: ApiConfig {
                base_url: "https://api.shashin.example".to_string(),
                timeout_secs: 5,
            },
            logging: LoggingConfig {
                directory: Some("/var/log/shashin".to_string()),
                level: "debug".to_string(),
            },
        }
    );
    assert_eq!(config.api.timeout(), Some(Duration::from_secs(5)));
}

#[test]
fn test_missing_sections_fall_back_to_defaults() {
    let config = parse_config("[api]\ntimeout_secs = 0\n").unwrap();

    assert_eq!(config.api.base_url, ApiConfig::default().base_url);
    assert_eq!(config.api.timeout(), None);
    assert_eq!(config.logging, LoggingConfig::default());
}

#[test]
fn test_logging_section_without_directory_keeps_file_logging() {
    let config = parse_config("[logging]\nlevel = \"debug\"\n").unwrap();

    assert_eq!(config.logging.directory, LoggingConfig::default().directory);
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_empty_directory_turns_file_logging_off() {
    let config = parse_config("[logging]\ndirectory = \"\"\n").unwrap();

    assert_eq!(config.logging.directory, None);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_malformed_toml_is_a_parse_error() {
    let result = parse_config("[api\nbase_url = ");
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
#[serial]
fn test_load_config_from_file() {
    let file = write_config(SAMPLE);

    temp_env::with_vars_unset([API_BASE_URL_ENV, API_TIMEOUT_SECS_ENV], || {
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.api.base_url, "https://api.shashin.example");
        assert_eq!(config.logging.level, "debug");
    });
}

#[test]
#[serial]
fn test_missing_file_is_an_open_error() {
    let dir = tempfile::tempdir().unwrap();
    let error = load_config(dir.path().join("absent.toml")).unwrap_err();

    assert!(matches!(
        error.downcast_ref::<ConfigError>(),
        Some(ConfigError::OpenFileError(_))
    ));
}

#[test]
#[serial]
fn test_env_overrides_file_values() {
    let file = write_config(SAMPLE);

    temp_env::with_vars(
        [
            (API_BASE_URL_ENV, Some("http://127.0.0.1:9000")),
            (API_TIMEOUT_SECS_ENV, Some(" 30 ")),
        ],
        || {
            let config = load_config(file.path()).unwrap();
            assert_eq!(config.api.base_url, "http://127.0.0.1:9000");
            assert_eq!(config.api.timeout_secs, 30);
        },
    );
}

#[test]
#[serial]
fn test_invalid_timeout_override_is_rejected() {
    temp_env::with_var(API_TIMEOUT_SECS_ENV, Some("soon"), || {
        let mut config = Config::default();
        let error = config.apply_env_overrides().unwrap_err();

        assert!(matches!(
            error,
            ConfigError::InvalidOverride { key, ref value } if key == API_TIMEOUT_SECS_ENV && value == "soon"
        ));
    });
}

#[test]
#[serial]
fn test_missing_file_uses_defaults_plus_env() {
    let dir = tempfile::tempdir().unwrap();

    temp_env::with_vars(
        [
            (API_BASE_URL_ENV, Some("http://override.test")),
            (API_TIMEOUT_SECS_ENV, None),
        ],
        || {
            let config = load_config_or_default(dir.path().join("Config.toml")).unwrap();
            assert_eq!(config.api.base_url, "http://override.test");
            assert_eq!(config.api.timeout_secs, ApiConfig::default().timeout_secs);
        },
    );
}
