use serde::{Deserialize, Serialize};

use super::defaults;

/// Weights combining sub-scores into the total risk score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub severity_share: f64,
    pub velocity_share: f64,
    pub reach_share: f64,
    pub credibility_share: f64,
}

impl ScoringConfig {
    pub fn total_share(&self) -> f64 {
        self.severity_share + self.velocity_share + self.reach_share + self.credibility_share
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            severity_share: defaults::DEFAULT_SEVERITY_SHARE,
            velocity_share: defaults::DEFAULT_VELOCITY_SHARE,
            reach_share: defaults::DEFAULT_REACH_SHARE,
            credibility_share: defaults::DEFAULT_CREDIBILITY_SHARE,
        }
    }
}
