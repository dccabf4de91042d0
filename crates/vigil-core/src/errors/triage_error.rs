//! Review-desk errors.

use super::error_code::{self, VigilErrorCode};

/// Rejected analyst actions on the triage desk. The audit log is left
/// untouched when one of these is returned.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TriageError {
    #[error("no cluster {cluster_id} on the desk")]
    UnknownCluster { cluster_id: String },

    #[error("cluster {cluster_id} was already {resolution}")]
    AlreadyResolved {
        cluster_id: String,
        resolution: &'static str,
    },

    #[error("cluster {cluster_id} must be escalated before routing")]
    NotEscalated { cluster_id: String },
}

impl VigilErrorCode for TriageError {
    fn error_code(&self) -> &'static str {
        error_code::TRIAGE_ERROR
    }
}
