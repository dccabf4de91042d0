//! Fatal pipeline stage errors.

use super::error_code::{self, VigilErrorCode};
use crate::models::PipelineStage;

/// A failure inside one pipeline stage. Fatal to the run: the orchestrator
/// never returns a partially populated result.
#[derive(Debug, thiserror::Error)]
pub enum StageError {
    #[error("redaction of event {event_id} failed: {reason}")]
    RedactionFailed { event_id: String, reason: String },

    #[error("gate partition mismatch: {signals} signals + {noise} noise != {total} events")]
    PartitionMismatch {
        signals: usize,
        noise: usize,
        total: usize,
    },

    #[error("cluster coverage violated: {assigned} assignments for {expected} signals")]
    CoverageViolated { assigned: usize, expected: usize },

    #[error("cannot score empty cluster {cluster_id}")]
    EmptyCluster { cluster_id: String },

    #[error("rationale for cluster {cluster_id} failed: {reason}")]
    RationaleFailed { cluster_id: String, reason: String },
}

impl StageError {
    /// The stage that raised this error.
    pub fn stage(&self) -> PipelineStage {
        match self {
            Self::RedactionFailed { .. } => PipelineStage::Redaction,
            Self::PartitionMismatch { .. } => PipelineStage::Gating,
            Self::CoverageViolated { .. } => PipelineStage::Clustering,
            Self::EmptyCluster { .. } => PipelineStage::Scoring,
            Self::RationaleFailed { .. } => PipelineStage::Rationale,
        }
    }
}

impl VigilErrorCode for StageError {
    fn error_code(&self) -> &'static str {
        error_code::STAGE_ERROR
    }
}
