//! Configuration errors.

use super::error_code::{self, VigilErrorCode};

/// Failures loading `vigil.toml` or applying `VIGIL_*` overrides.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}")]
    FileNotFound { path: String },

    #[error("invalid TOML in {path}: {message}")]
    ParseError { path: String, message: String },

    /// `field` is a dotted config path or the name of an environment variable.
    #[error("{field}: {message}")]
    ValidationFailed { field: String, message: String },
}

impl VigilErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIG_ERROR
    }
}
