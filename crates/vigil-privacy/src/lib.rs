//! # vigil-privacy
//!
//! PII redaction engine.
//! Regex pattern tables for phone numbers, email addresses, IBAN-like
//! account numbers, and social handles. Replacement runs to a fixed point,
//! so redaction is idempotent.

pub mod degradation;
pub mod engine;
pub mod patterns;

pub use engine::{pseudonymize_author, RedactionEngine};
