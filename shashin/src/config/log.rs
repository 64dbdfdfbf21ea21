use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LoggingConfig {
    // Directory where error logs will be stored; an explicit empty string turns file logging off
    #[serde(default = "default_directory", deserialize_with = "deserialize_directory")]
    pub directory: Option<String>,
    // Default filter when RUST_LOG is unset
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_directory() -> Option<String> {
    Some(".logs".to_string())
}

fn deserialize_directory<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let directory = String::deserialize(deserializer)?;
    Ok((!directory.trim().is_empty()).then_some(directory))
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            level: default_level(),
        }
    }
}
