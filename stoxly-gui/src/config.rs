use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing_subscriber::filter::LevelFilter;

pub const DEFAULT_FILE_NAME: &str = "gui.toml";

/// Base URL of the inventory API used when the configuration file does not
/// provide one.
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api/v1";

/// Configuration of the GUI, stored as TOML in the data directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the remote inventory API.
    pub api_base_url: String,
    /// log level, can be "info", "debug", "trace".
    pub log_level: Option<String>,
    /// Use iced debug feature if true.
    pub debug: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            log_level: None,
            debug: None,
        }
    }
}

impl Config {
    pub fn file_path(datadir: &Path) -> PathBuf {
        datadir.join(DEFAULT_FILE_NAME)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let config = std::fs::read_to_string(path)
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => ConfigError::NotFound,
                _ => ConfigError::ReadingFile(format!("Reading configuration file: {}", e)),
            })
            .and_then(|file_content| {
                toml::from_str::<Config>(&file_content).map_err(|e| {
                    ConfigError::ReadingFile(format!("Parsing configuration file: {}", e))
                })
            })?;
        Ok(config)
    }

    pub fn to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::WritingFile(format!("Serializing configuration: {}", e)))?;
        std::fs::write(path, content)
            .map_err(|e| ConfigError::WritingFile(format!("Writing configuration file: {}", e)))
    }

    /// log level from the configuration, defaults to INFO.
    pub fn log_level(&self) -> Result<LevelFilter, ConfigError> {
        if let Some(level_str) = &self.log_level {
            match level_str.as_str() {
                "info" => Ok(LevelFilter::INFO),
                "debug" => Ok(LevelFilter::DEBUG),
                "trace" => Ok(LevelFilter::TRACE),
                _ => Err(ConfigError::InvalidField(
                    "log_level",
                    format!("Invalid value '{}'", level_str),
                )),
            }
        } else if let Some(true) = self.debug {
            Ok(LevelFilter::DEBUG)
        } else {
            Ok(LevelFilter::INFO)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidField(&'static str, String),
    NotFound,
    ReadingFile(String),
    WritingFile(String),
    Unexpected(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::InvalidField(field, message) => {
                write!(f, "Invalid field '{}': {}", field, message)
            }
            Self::NotFound => write!(f, "Configuration file not found"),
            Self::ReadingFile(e) => write!(f, "Error while reading file: {}", e),
            Self::WritingFile(e) => write!(f, "Error while writing file: {}", e),
            Self::Unexpected(e) => write!(f, "Unexpected error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_from_toml() {
        let config: Config = toml::from_str(
            r#"
            api_base_url = "https://stock.example.com/api/v1"
            log_level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.api_base_url, "https://stock.example.com/api/v1");
        assert_eq!(config.log_level(), Ok(LevelFilter::DEBUG));

        let config: Config = toml::from_str(
            r#"
            api_base_url = "https://stock.example.com/api/v1"
            "#,
        )
        .unwrap();
        assert_eq!(config.log_level(), Ok(LevelFilter::INFO));

        let config: Config = toml::from_str(
            r#"
            api_base_url = "https://stock.example.com/api/v1"
            log_level = "warning"
            "#,
        )
        .unwrap();
        assert!(config.log_level().is_err());
    }

    #[test]
    fn config_roundtrip_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = Config::file_path(dir.path());
        assert_eq!(
            Config::from_file(&path),
            Err(ConfigError::NotFound),
            "missing file must be reported as NotFound"
        );

        let config = Config {
            api_base_url: "http://127.0.0.1:3000".to_string(),
            log_level: Some("trace".to_string()),
            debug: None,
        };
        config.to_file(&path).unwrap();
        let read = Config::from_file(&path).unwrap();
        assert_eq!(read.api_base_url, config.api_base_url);
        assert_eq!(read.log_level, config.log_level);
    }
}
