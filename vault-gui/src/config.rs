use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use tracing_subscriber::filter;

use crate::unlock::UnlockDialogConfig;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// log level, can be "info", "debug", "trace".
    pub log_level: Option<String>,
    /// Use debug log level if true and log_level is not set.
    pub debug: Option<bool>,
    /// Argon2 hash of the unlock password, in PHC string format.
    pub password_hash: Option<String>,
    /// Display the unlock dialog over the whole window.
    #[serde(default)]
    pub fullscreen: bool,
    /// Title of the unlock dialog.
    pub title: Option<String>,
    /// Label of the unlock button.
    pub unlock_text: Option<String>,
}

pub const DEFAULT_FILE_NAME: &str = "gui.toml";

impl Config {
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

        // check if log_level field is valid
        config.log_level()?;
        Ok(config)
    }

    pub fn to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string(&self)
            .map_err(|e| ConfigError::WritingFile(format!("Failed to serialize config: {}", e)))?;

        let mut config_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .map_err(|e| ConfigError::WritingFile(e.to_string()))?;

        config_file.write_all(content.as_bytes()).map_err(|e| {
            tracing::warn!("failed to write to file: {:?}", e);
            ConfigError::WritingFile(e.to_string())
        })?;

        tracing::info!("Done writing gui configuration file");
        Ok(())
    }

    pub fn log_level(&self) -> Result<filter::LevelFilter, ConfigError> {
        if let Some(level) = &self.log_level {
            match level.as_ref() {
                "info" => Ok(filter::LevelFilter::INFO),
                "debug" => Ok(filter::LevelFilter::DEBUG),
                "trace" => Ok(filter::LevelFilter::TRACE),
                _ => Err(ConfigError::InvalidField(
                    "log_level",
                    format!("Unknown value '{}'", level),
                )),
            }
        } else if let Some(true) = self.debug {
            Ok(filter::LevelFilter::DEBUG)
        } else {
            Ok(filter::LevelFilter::INFO)
        }
    }

    pub fn dialog_config(&self) -> UnlockDialogConfig {
        UnlockDialogConfig::new(self.title.clone(), self.unlock_text.clone())
            .fullscreen(self.fullscreen)
    }
}

#[derive(PartialEq, Eq, Debug, Clone)]
pub enum ConfigError {
    InvalidField(&'static str, String),
    NotFound,
    ReadingFile(String),
    WritingFile(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(f, "Config file not found"),
            Self::InvalidField(field, message) => {
                write!(f, "Config field {} is invalid: {}", field, message)
            }
            Self::ReadingFile(e) => write!(f, "Error while reading file: {}", e),
            Self::WritingFile(e) => write!(f, "Error while writing file: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unlock::{DEFAULT_TITLE, DEFAULT_UNLOCK_TEXT};

    #[test]
    fn parse_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_FILE_NAME);
        std::fs::write(
            &path,
            r#"
log_level = "debug"
password_hash = "$argon2id$v=19$m=19456,t=2,p=1$c2FsdHNhbHQ$aGFzaA"
fullscreen = true
title = "Unlock Vault"
"#,
        )
        .unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.log_level(), Ok(filter::LevelFilter::DEBUG));
        assert!(config.fullscreen);

        let dialog = config.dialog_config();
        assert_eq!(dialog.title, "Unlock Vault");
        assert_eq!(dialog.unlock_text, DEFAULT_UNLOCK_TEXT);
        assert!(dialog.fullscreen);
    }

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.log_level(), Ok(filter::LevelFilter::INFO));
        let dialog = config.dialog_config();
        assert_eq!(dialog.title, DEFAULT_TITLE);
        assert!(!dialog.fullscreen);

        let config = Config {
            debug: Some(true),
            ..Default::default()
        };
        assert_eq!(config.log_level(), Ok(filter::LevelFilter::DEBUG));
    }

    #[test]
    fn invalid_log_level() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_FILE_NAME);
        std::fs::write(&path, "log_level = \"loud\"\n").unwrap();
        assert!(matches!(
            Config::from_file(&path),
            Err(ConfigError::InvalidField("log_level", _))
        ));
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            Config::from_file(&dir.path().join(DEFAULT_FILE_NAME)),
            Err(ConfigError::NotFound)
        );
    }

    #[test]
    fn write_and_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_FILE_NAME);
        let config = Config {
            log_level: Some("trace".to_string()),
            password_hash: Some("$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string()),
            unlock_text: Some("Open".to_string()),
            ..Default::default()
        };
        config.to_file(&path).unwrap();
        assert_eq!(Config::from_file(&path).unwrap(), config);
    }
}
