//! Stage 2: mask PII in every event.

use vigil_core::errors::StageError;
use vigil_core::models::{RawEvent, RedactedEvent};
use vigil_core::traits::IRedactor;
use vigil_privacy::patterns::contains_pii;

/// Redact every event in order. A redactor error, or PII still matching
/// after redaction, fails the stage.
pub fn redact_events(
    events: &[RawEvent],
    redactor: &dyn IRedactor,
) -> Result<Vec<RedactedEvent>, StageError> {
    events
        .iter()
        .map(|event| {
            let redacted = redactor
                .redact(event)
                .map_err(|err| StageError::RedactionFailed {
                    event_id: event.id.clone(),
                    reason: err.to_string(),
                })?;
            if contains_pii(&redacted.redacted_text) {
                return Err(StageError::RedactionFailed {
                    event_id: event.id.clone(),
                    reason: "PII pattern still matches redacted text".to_string(),
                });
            }
            Ok(redacted)
        })
        .collect()
}

/// Total replacements made across a batch.
pub fn redaction_total(events: &[RedactedEvent]) -> usize {
    events.iter().map(RedactedEvent::redaction_count).sum()
}
