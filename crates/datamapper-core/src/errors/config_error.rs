//! Configuration loading errors.

use super::error_code::{self, DataMapperErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {message}")]
    Io { path: String, message: String },

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl DataMapperErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIG_INVALID
    }
}
