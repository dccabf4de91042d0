//! Stage 1: turn loose input records into typed events, setting aside the
//! malformed ones as diagnostics.

use vigil_core::models::{EventRecord, RawEvent, RejectedRecord};

/// Valid events in input order plus one diagnostic per rejected record.
#[derive(Debug, Clone, Default)]
pub struct ValidatedBatch {
    pub events: Vec<RawEvent>,
    pub rejected: Vec<RejectedRecord>,
}

/// Validate every record. Never fails: a bad record is excluded, not fatal.
pub fn validate_records(records: &[EventRecord]) -> ValidatedBatch {
    let mut batch = ValidatedBatch::default();
    for (index, record) in records.iter().enumerate() {
        match RawEvent::from_record(index, record) {
            Ok(event) => batch.events.push(event),
            Err(err) => batch.rejected.push(RejectedRecord {
                index,
                id: record
                    .id
                    .as_deref()
                    .map(str::trim)
                    .filter(|id| !id.is_empty())
                    .map(str::to_string),
                reason: err.to_string(),
            }),
        }
    }
    batch
}
