//! VigilErrorCode trait for classifying failures at the caller boundary.

/// Every error enum implements this so callers can branch on a stable
/// classification string instead of matching on variants.
pub trait VigilErrorCode {
    /// Returns the classification code (e.g., "STAGE_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
pub const STAGE_ERROR: &str = "STAGE_ERROR";
pub const PARAMETER_ERROR: &str = "PARAMETER_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const TRIAGE_ERROR: &str = "TRIAGE_ERROR";
pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";
