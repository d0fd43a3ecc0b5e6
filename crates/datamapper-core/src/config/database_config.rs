//! Database connection configuration.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for the SQLite connection owned by a relational store.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Database file. `None` opens an in-memory database.
    pub path: Option<PathBuf>,
    /// How long to wait on a locked database, in milliseconds. Default: 5000.
    pub busy_timeout_ms: Option<u64>,
    /// Enforce foreign key constraints. Default: true.
    pub foreign_keys: Option<bool>,
    /// Journal mode for file-backed databases. Default: "WAL".
    pub journal_mode: Option<String>,
}

impl DatabaseConfig {
    /// Config for a file-backed database with default pragmas.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            ..Self::default()
        }
    }

    pub fn effective_busy_timeout(&self) -> Duration {
        Duration::from_millis(self.busy_timeout_ms.unwrap_or(5000))
    }

    pub fn effective_foreign_keys(&self) -> bool {
        self.foreign_keys.unwrap_or(true)
    }

    pub fn effective_journal_mode(&self) -> &str {
        self.journal_mode.as_deref().unwrap_or("WAL")
    }
}
