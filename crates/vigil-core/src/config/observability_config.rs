use serde::{Deserialize, Serialize};

use super::defaults;

/// Logging output for every Vigil crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Level applied to all `vigil_*` targets when `VIGIL_LOG` is unset.
    pub log_level: String,
    /// JSON lines instead of human-readable output.
    pub json_logs: bool,
}

impl ObservabilityConfig {
    /// `EnvFilter` directive covering every `vigil_*` target. Filter targets
    /// match by prefix, so `vigil` reaches `vigil_pipeline`, `vigil_privacy`
    /// and the rest.
    pub fn fallback_directive(&self) -> String {
        format!("vigil={}", self.log_level.trim())
    }
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: defaults::DEFAULT_LOG_LEVEL.to_string(),
            json_logs: defaults::DEFAULT_JSON_LOGS,
        }
    }
}
