use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{CRITICAL_RISK_FLOOR, HIGH_RISK_FLOOR, MEDIUM_RISK_FLOOR};

/// Named factors that make up a risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskFactor {
    Severity,
    Velocity,
    Reach,
    Credibility,
}

impl RiskFactor {
    pub const ALL: [RiskFactor; 4] = [
        Self::Severity,
        Self::Velocity,
        Self::Reach,
        Self::Credibility,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Severity => "severity",
            Self::Velocity => "velocity",
            Self::Reach => "reach",
            Self::Credibility => "credibility",
        }
    }
}

impl fmt::Display for RiskFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Composite 0-10 risk rating for a cluster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskScore {
    /// 0.0 - 10.0, a deterministic function of `sub_scores` and cluster shape.
    pub total_score: f64,
    /// Each factor in 0.0 - 10.0.
    pub sub_scores: BTreeMap<RiskFactor, f64>,
    /// 0.0 - 100.0.
    pub confidence_percentage: f64,
}

impl RiskScore {
    pub fn sub_score(&self, factor: RiskFactor) -> f64 {
        self.sub_scores.get(&factor).copied().unwrap_or(0.0)
    }

    pub fn tier(&self) -> RiskTier {
        RiskTier::from_score(self.total_score)
    }
}

/// Display tier derived from the total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskTier {
    pub fn from_score(score: f64) -> Self {
        if score >= CRITICAL_RISK_FLOOR {
            Self::Critical
        } else if score >= HIGH_RISK_FLOOR {
            Self::High
        } else if score >= MEDIUM_RISK_FLOOR {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_use_inclusive_floors() {
        assert_eq!(RiskTier::from_score(8.0), RiskTier::Critical);
        assert_eq!(RiskTier::from_score(7.99), RiskTier::High);
        assert_eq!(RiskTier::from_score(6.0), RiskTier::High);
        assert_eq!(RiskTier::from_score(4.0), RiskTier::Medium);
        assert_eq!(RiskTier::from_score(3.9), RiskTier::Low);
        assert_eq!(RiskTier::from_score(0.0), RiskTier::Low);
    }
}
