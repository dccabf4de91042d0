//! Simulation parameter errors.

use super::error_code::{self, VigilErrorCode};

/// Rejected simulation inputs. Raised before any draw is made.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParameterError {
    #[error("parameter `{parameter}` = {value} is outside [{min}, {max}]")]
    OutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("parameter `{parameter}` is not a finite number")]
    NotFinite { parameter: &'static str },

    #[error("iterations must be positive")]
    NonPositiveIterations,

    #[error("iterations {requested} exceeds the maximum of {max}")]
    TooManyIterations { requested: usize, max: usize },
}

impl VigilErrorCode for ParameterError {
    fn error_code(&self) -> &'static str {
        error_code::PARAMETER_ERROR
    }
}
