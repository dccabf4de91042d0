use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Category, ClusterAnalysis};

/// Conceptual pipeline stages, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStage {
    Validation,
    Redaction,
    Gating,
    Clustering,
    Scoring,
    Rationale,
}

impl PipelineStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Redaction => "redaction",
            Self::Gating => "gating",
            Self::Clustering => "clustering",
            Self::Scoring => "scoring",
            Self::Rationale => "rationale",
        }
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of the signal/noise gate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatingResult {
    pub signal_count: usize,
    pub noise_count: usize,
    pub threshold: f64,
}

impl GatingResult {
    pub fn total(&self) -> usize {
        self.signal_count + self.noise_count
    }
}

/// Outcome of clustering. Every cluster's category is counted exactly once.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClusteringResult {
    pub cluster_count: usize,
    pub category_distribution: BTreeMap<Category, usize>,
}

/// An input record excluded from processing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RejectedRecord {
    pub index: usize,
    pub id: Option<String>,
    pub reason: String,
}

/// Immutable output of one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineResult {
    /// Wall-clock duration; the only non-deterministic field.
    pub processing_time_ms: u64,
    pub events_received: usize,
    pub rejected: Vec<RejectedRecord>,
    pub gating_result: GatingResult,
    pub clustering_result: ClusteringResult,
    pub analyses: Vec<ClusterAnalysis>,
}

impl PipelineResult {
    pub fn malformed_count(&self) -> usize {
        self.rejected.len()
    }

    /// Copy of this result with timing zeroed, for determinism comparisons.
    pub fn without_timing(&self) -> Self {
        Self {
            processing_time_ms: 0,
            ..self.clone()
        }
    }

    pub fn analysis(&self, cluster_id: &str) -> Option<&ClusterAnalysis> {
        self.analyses.iter().find(|a| a.cluster_id() == cluster_id)
    }
}
