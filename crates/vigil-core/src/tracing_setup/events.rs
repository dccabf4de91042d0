//! Structured log events for key system operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log a completed pipeline run.
pub fn pipeline_completed(
    events_received: usize,
    signal_count: usize,
    noise_count: usize,
    cluster_count: usize,
    processing_time_ms: u64,
) {
    tracing::info!(
        event = "pipeline_completed",
        events_received = events_received,
        signal_count = signal_count,
        noise_count = noise_count,
        cluster_count = cluster_count,
        processing_time_ms = processing_time_ms,
        "pipeline completed"
    );
}

/// Log a stage failure. The whole invocation fails after this.
pub fn stage_failed(stage: &str, error: &str) {
    tracing::error!(
        event = "stage_failed",
        stage = %stage,
        error = %error,
        "pipeline stage failed"
    );
}

/// Log malformed input records that were dropped before redaction.
pub fn records_rejected(rejected: usize, received: usize) {
    tracing::warn!(
        event = "records_rejected",
        rejected = rejected,
        received = received,
        "malformed records rejected"
    );
}

/// Log a completed simulation.
pub fn simulation_completed(iterations: usize, seed: u64, breach_probability: f64, is_breach: bool) {
    tracing::info!(
        event = "simulation_completed",
        iterations = iterations,
        seed = seed,
        breach_probability = breach_probability,
        is_breach = is_breach,
        "simulation completed"
    );
}
