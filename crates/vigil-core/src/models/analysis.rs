use serde::{Deserialize, Serialize};

use super::{Category, Cluster, RiskScore, RiskTier};

/// Machine-generated narrative attached to a cluster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rationale {
    pub what_signal: String,
    pub why_it_matters: String,
    /// Verbalized confidence tier; always consistent with the score's confidence.
    pub uncertainty_wording: String,
}

/// Immutable bundle of one cluster and everything derived from it.
///
/// Created once per cluster per run. Analyst actions are recorded in an
/// external audit log, never by mutating this value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterAnalysis {
    pub cluster: Cluster,
    pub risk_score: RiskScore,
    pub category: Category,
    pub title: String,
    pub rationale: Rationale,
    pub suggested_queue: String,
    pub action_plan: Vec<String>,
}

impl ClusterAnalysis {
    pub fn cluster_id(&self) -> &str {
        &self.cluster.cluster_id
    }

    pub fn total_score(&self) -> f64 {
        self.risk_score.total_score
    }

    /// Flatten into the presentation record consumed by the review surface.
    pub fn to_analyst_card(&self) -> AnalystCard {
        AnalystCard {
            cluster_id: self.cluster.cluster_id.clone(),
            title: self.title.clone(),
            risk_score: (self.risk_score.total_score * 10.0).round() / 10.0,
            confidence_percentage: self.risk_score.confidence_percentage,
            category: self.category,
            rationale: self.rationale.clone(),
            uncertainty_wording: self.rationale.uncertainty_wording.clone(),
            suggested_queue: self.suggested_queue.clone(),
            risk_tier: self.risk_score.tier(),
        }
    }
}

/// Flattened presentation record; the sole contract of the review layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalystCard {
    pub cluster_id: String,
    pub title: String,
    /// Rounded to one decimal place.
    pub risk_score: f64,
    pub confidence_percentage: f64,
    pub category: Category,
    pub rationale: Rationale,
    pub uncertainty_wording: String,
    pub suggested_queue: String,
    pub risk_tier: RiskTier,
}
