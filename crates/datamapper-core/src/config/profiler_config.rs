//! Query profiler configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ProfilerConfig {
    /// Record every statement the store dispatches. Default: false.
    pub enabled: bool,
}
