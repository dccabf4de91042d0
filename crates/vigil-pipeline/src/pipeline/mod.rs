//! 6-stage triage pipeline orchestrator.
//!
//! Stage 1: Validation → Stage 2: Redaction → Stage 3: Gate →
//! Stage 4: Clustering → Stage 5: Scoring → Stage 6: Rationale

pub mod stage1_validation;
pub mod stage2_redaction;
pub mod stage3_gate;
pub mod stage4_clustering;
pub mod stage5_scoring;
pub mod stage6_rationale;

use std::time::Instant;

use tracing::{debug, info};
use vigil_core::config::VigilConfig;
use vigil_core::errors::{StageError, VigilError, VigilResult};
use vigil_core::models::{
    ClusterAnalysis, EventRecord, PipelineResult, RawEvent, RejectedRecord,
};
use vigil_core::tracing_setup::events;
use vigil_core::traits::IRedactor;

/// Run the pipeline over loose records, rejecting malformed ones first.
pub fn run_pipeline_on_records(
    records: &[EventRecord],
    config: &VigilConfig,
    redactor: &dyn IRedactor,
) -> VigilResult<PipelineResult> {
    let started = Instant::now();

    // Stage 1: Validation.
    let batch = stage1_validation::validate_records(records);
    info!(
        valid = batch.events.len(),
        rejected = batch.rejected.len(),
        "Stage 1: validated records"
    );
    if !batch.rejected.is_empty() {
        events::records_rejected(batch.rejected.len(), records.len());
    }

    execute(
        started,
        &batch.events,
        records.len(),
        batch.rejected,
        config,
        redactor,
    )
}

/// Run the pipeline over already-typed events.
///
/// Returns a `PipelineResult` or, if any stage fails, the stage error.
/// Never a partial result.
pub fn run_pipeline(
    raw_events: &[RawEvent],
    config: &VigilConfig,
    redactor: &dyn IRedactor,
) -> VigilResult<PipelineResult> {
    execute(
        Instant::now(),
        raw_events,
        raw_events.len(),
        Vec::new(),
        config,
        redactor,
    )
}

fn execute(
    started: Instant,
    raw_events: &[RawEvent],
    events_received: usize,
    rejected: Vec<RejectedRecord>,
    config: &VigilConfig,
    redactor: &dyn IRedactor,
) -> VigilResult<PipelineResult> {
    let span = vigil_core::pipeline_span!(raw_events.len());
    let _guard = span.enter();

    // Stage 2: Redaction.
    let redacted = stage2_redaction::redact_events(raw_events, redactor).map_err(fail)?;
    info!(
        events = redacted.len(),
        redactions = stage2_redaction::redaction_total(&redacted),
        "Stage 2: redacted PII"
    );

    // Stage 3: Gate.
    let (signals, gating_result) =
        stage3_gate::classify(&redacted, &config.gate).map_err(fail)?;
    info!(
        signals = gating_result.signal_count,
        noise = gating_result.noise_count,
        threshold = gating_result.threshold,
        "Stage 3: gated events"
    );

    // Stage 4: Clustering.
    let (clusters, clustering_result) =
        stage4_clustering::cluster(&signals, &config.clustering).map_err(fail)?;
    info!(
        clusters = clustering_result.cluster_count,
        "Stage 4: clustered signals"
    );

    // Stages 5-6 per cluster.
    let mut analyses = Vec::with_capacity(clusters.len());
    for cluster in clusters {
        let risk_score = stage5_scoring::score(&cluster, &config.scoring).map_err(fail)?;
        let explanation = stage6_rationale::explain(&cluster, &risk_score).map_err(fail)?;
        debug!(
            cluster_id = %cluster.cluster_id,
            members = cluster.len(),
            category = %explanation.category,
            score = risk_score.total_score,
            confidence = risk_score.confidence_percentage,
            "Stages 5-6: scored and explained cluster"
        );
        analyses.push(ClusterAnalysis {
            cluster,
            risk_score,
            category: explanation.category,
            title: explanation.title,
            rationale: explanation.rationale,
            suggested_queue: explanation.suggested_queue,
            action_plan: explanation.action_plan,
        });
    }

    let processing_time_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    events::pipeline_completed(
        events_received,
        gating_result.signal_count,
        gating_result.noise_count,
        clustering_result.cluster_count,
        processing_time_ms,
    );

    Ok(PipelineResult {
        processing_time_ms,
        events_received,
        rejected,
        gating_result,
        clustering_result,
        analyses,
    })
}

fn fail(err: StageError) -> VigilError {
    events::stage_failed(err.stage().as_str(), &err.to_string());
    VigilError::Stage(err)
}
