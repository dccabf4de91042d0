use serde::{Deserialize, Serialize};

use super::defaults;

/// Signal/noise gate configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    /// Events with relevance at or above this are signal.
    pub threshold: f64,
    /// Relevance added per severity term.
    pub severity_weight: f64,
    /// Relevance added per urgency marker.
    pub urgency_weight: f64,
    /// Maximum urgency markers counted per event.
    pub urgency_cap: usize,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            threshold: defaults::DEFAULT_GATE_THRESHOLD,
            severity_weight: defaults::DEFAULT_SEVERITY_WEIGHT,
            urgency_weight: defaults::DEFAULT_URGENCY_WEIGHT,
            urgency_cap: defaults::DEFAULT_URGENCY_CAP,
        }
    }
}
