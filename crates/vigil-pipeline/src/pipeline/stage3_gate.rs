//! Stage 3: signal/noise gate.

use vigil_core::config::GateConfig;
use vigil_core::errors::StageError;
use vigil_core::models::{GatingResult, RedactedEvent};

use crate::algorithms::features::EventFeatures;

/// Relevance of one event: category term weights plus weighted severity
/// hits plus weighted (capped) urgency markers.
pub fn relevance(features: &EventFeatures, config: &GateConfig) -> f64 {
    features.term_weight()
        + config.severity_weight * features.severity_hits as f64
        + config.urgency_weight * features.urgency_markers.min(config.urgency_cap) as f64
}

/// Whether an event clears the gate. Ties go to signal.
pub fn is_signal(event: &RedactedEvent, config: &GateConfig) -> bool {
    let features = EventFeatures::extract(&event.redacted_text);
    relevance(&features, config) >= config.threshold
}

/// Split events into signals (input order kept) and a noise count.
pub fn classify(
    events: &[RedactedEvent],
    config: &GateConfig,
) -> Result<(Vec<RedactedEvent>, GatingResult), StageError> {
    let mut signals = Vec::new();
    let mut noise_count = 0usize;
    for event in events {
        if is_signal(event, config) {
            signals.push(event.clone());
        } else {
            noise_count += 1;
        }
    }

    if signals.len() + noise_count != events.len() {
        return Err(StageError::PartitionMismatch {
            signals: signals.len(),
            noise: noise_count,
            total: events.len(),
        });
    }

    let result = GatingResult {
        signal_count: signals.len(),
        noise_count,
        threshold: config.threshold,
    };
    Ok((signals, result))
}
