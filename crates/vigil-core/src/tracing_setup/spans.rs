//! Span definitions for the two long-running operations.

/// Create a pipeline run span.
#[macro_export]
macro_rules! pipeline_span {
    ($event_count:expr) => {
        tracing::info_span!("vigil.pipeline", event_count = $event_count)
    };
}

/// Create a Monte Carlo simulation span.
#[macro_export]
macro_rules! simulation_span {
    ($iterations:expr, $seed:expr) => {
        tracing::info_span!("vigil.simulation", iterations = $iterations, seed = $seed)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const PIPELINE: &str = "vigil.pipeline";
    pub const SIMULATION: &str = "vigil.simulation";
}
