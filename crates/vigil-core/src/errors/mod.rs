//! Error handling for Vigil.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod parameter_error;
pub mod stage_error;
pub mod triage_error;
pub mod validation_error;
pub mod vigil_error;

pub use config_error::ConfigError;
pub use error_code::VigilErrorCode;
pub use parameter_error::ParameterError;
pub use stage_error::StageError;
pub use triage_error::TriageError;
pub use validation_error::ValidationError;
pub use vigil_error::{VigilError, VigilResult};
