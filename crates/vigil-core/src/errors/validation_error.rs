//! Event record validation errors.

use super::error_code::{self, VigilErrorCode};

/// Reasons an incoming event record cannot be ingested.
///
/// These never abort a pipeline run; the orchestrator excludes the record
/// and reports it as a diagnostic.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("record {index}: missing required field `{field}`")]
    MissingField { index: usize, field: &'static str },

    #[error("record {index}: field `{field}` is empty")]
    EmptyField { index: usize, field: &'static str },

    #[error("record {index}: invalid `{field}`: {reason}")]
    InvalidField {
        index: usize,
        field: &'static str,
        reason: String,
    },
}

impl ValidationError {
    /// Index of the offending record in the input sequence.
    pub fn index(&self) -> usize {
        match self {
            Self::MissingField { index, .. }
            | Self::EmptyField { index, .. }
            | Self::InvalidField { index, .. } => *index,
        }
    }
}

impl VigilErrorCode for ValidationError {
    fn error_code(&self) -> &'static str {
        error_code::VALIDATION_ERROR
    }
}
