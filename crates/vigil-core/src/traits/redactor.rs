use crate::errors::VigilResult;
use crate::models::{RawEvent, RedactedEvent};

/// Replaces PII in an event's text with category placeholders.
///
/// Implementations must be idempotent: redacting already-redacted text
/// yields the same text.
pub trait IRedactor: Send + Sync {
    fn redact(&self, event: &RawEvent) -> VigilResult<RedactedEvent>;

    /// Redact a batch, failing on the first event that cannot be redacted.
    fn redact_all(&self, events: &[RawEvent]) -> VigilResult<Vec<RedactedEvent>> {
        events.iter().map(|e| self.redact(e)).collect()
    }
}
