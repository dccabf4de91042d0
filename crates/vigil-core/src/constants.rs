//! Fixed constants shared across crates.

/// Crate version.
pub const VIGIL_VERSION: &str = env!("CARGO_PKG_VERSION");

// --- Redaction placeholders ---
pub const PHONE_PLACEHOLDER: &str = "[PHONE]";
pub const EMAIL_PLACEHOLDER: &str = "[EMAIL]";
pub const IBAN_PLACEHOLDER: &str = "[IBAN]";
pub const HANDLE_PLACEHOLDER: &str = "[HANDLE]";

/// All placeholder tokens the redactor can emit.
pub const PLACEHOLDERS: [&str; 4] = [
    PHONE_PLACEHOLDER,
    EMAIL_PLACEHOLDER,
    IBAN_PLACEHOLDER,
    HANDLE_PLACEHOLDER,
];

// --- Score bounds ---
pub const MIN_RISK_SCORE: f64 = 0.0;
pub const MAX_RISK_SCORE: f64 = 10.0;
pub const MIN_CONFIDENCE: f64 = 0.0;
pub const MAX_CONFIDENCE: f64 = 100.0;

// --- Risk tiers (lower bounds, inclusive) ---
pub const CRITICAL_RISK_FLOOR: f64 = 8.0;
pub const HIGH_RISK_FLOOR: f64 = 6.0;
pub const MEDIUM_RISK_FLOOR: f64 = 4.0;

/// Clusters at or above this score require analyst review.
pub const REVIEW_RISK_FLOOR: f64 = MEDIUM_RISK_FLOOR;

// --- Confidence tiers ---
/// Confidence strictly above this is "high".
pub const HIGH_CONFIDENCE_FLOOR: f64 = 80.0;
/// Confidence at or above this (and not high) is "moderate".
pub const MODERATE_CONFIDENCE_FLOOR: f64 = 50.0;

// --- Simulation ---
/// Upper bound on Monte Carlo iterations per invocation.
pub const MAX_SIMULATION_ITERATIONS: usize = 1_000_000;
/// Draws per deterministic work chunk.
pub const SIMULATION_CHUNK_SIZE: usize = 1_024;
