use super::error_code::{self, VigilErrorCode};
use super::{ConfigError, ParameterError, StageError, TriageError, ValidationError};

/// Top-level error type. Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum VigilError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("pipeline stage failed: {0}")]
    Stage(#[from] StageError),

    #[error("parameter error: {0}")]
    Parameter(#[from] ParameterError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("triage error: {0}")]
    Triage(#[from] TriageError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl VigilErrorCode for VigilError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(e) => e.error_code(),
            Self::Stage(e) => e.error_code(),
            Self::Parameter(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Triage(e) => e.error_code(),
            Self::SerializationError(_) => error_code::SERIALIZATION_ERROR,
        }
    }
}

/// Convenience alias used throughout the workspace.
pub type VigilResult<T> = Result<T, VigilError>;
