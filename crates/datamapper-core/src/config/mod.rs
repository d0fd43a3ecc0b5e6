pub mod database_config;
pub mod observability_config;
pub mod profiler_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

pub use database_config::DatabaseConfig;
pub use observability_config::ObservabilityConfig;
pub use profiler_config::ProfilerConfig;

/// Top-level configuration aggregating all subsystem configs.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DataMapperConfig {
    pub database: DatabaseConfig,
    pub profiler: ProfilerConfig,
    pub observability: ObservabilityConfig,
}

impl DataMapperConfig {
    /// Load config from a TOML string, falling back to defaults for missing fields.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Read and parse a TOML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let config = Self::from_toml(&contents)?;
        ::tracing::debug!(path = %path.display(), "loaded datamapper config");
        Ok(config)
    }
}
