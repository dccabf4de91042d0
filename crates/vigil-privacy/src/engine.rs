use vigil_core::errors::VigilResult;
use vigil_core::models::{RawEvent, RedactedEvent, Redaction};
use vigil_core::traits::IRedactor;

use crate::degradation::DegradationTracker;
use crate::patterns::{self, RawMatch};

/// Length of the hex pseudonym derived from an author handle.
const AUTHOR_KEY_LEN: usize = 16;

/// Redaction engine that masks phone numbers, emails, IBANs and social
/// handles with fixed category placeholders.
///
/// Implements `IRedactor` from vigil-core. Each pass replaces every
/// non-overlapping match; passes repeat until nothing matches. Every match
/// contains a digit or `@` and no placeholder does, so the loop terminates
/// and a second application is a no-op.
#[derive(Debug, Clone, Copy, Default)]
pub struct RedactionEngine;

impl RedactionEngine {
    pub fn new() -> Self {
        Self
    }

    /// Redact free text, returning the masked text and every replacement made.
    pub fn redact_text(&self, text: &str) -> (String, Vec<Redaction>) {
        let (redacted, redactions, _tracker) = self.redact_text_with_tracking(text);
        (redacted, redactions)
    }

    /// Redact with degradation tracking so callers can audit pattern gaps.
    pub fn redact_text_with_tracking(
        &self,
        text: &str,
    ) -> (String, Vec<Redaction>, DegradationTracker) {
        let mut tracker = DegradationTracker::new();
        self.check_pattern_health(&mut tracker);

        let mut current = text.to_string();
        let mut redactions = Vec::new();
        loop {
            let matches = patterns::scan_all(&current);
            if matches.is_empty() {
                break;
            }
            redactions.extend(patterns::to_redactions(&matches));
            current = apply_replacements(&current, &matches);
        }

        (current, redactions, tracker)
    }

    /// Check which patterns failed to compile and record in the tracker.
    fn check_pattern_health(&self, tracker: &mut DegradationTracker) {
        for pat in patterns::pii::all_patterns() {
            if pat.regex.is_none() {
                tracker.record_failure(pat.name, pat.category, "regex compilation failed");
            }
        }
    }
}

impl IRedactor for RedactionEngine {
    fn redact(&self, event: &RawEvent) -> VigilResult<RedactedEvent> {
        let (redacted_text, redactions) = self.redact_text(&event.text);
        if !redactions.is_empty() {
            tracing::debug!(
                event_id = %event.id,
                redactions = redactions.len(),
                "pii redacted"
            );
        }
        Ok(RedactedEvent {
            event: event.clone(),
            redacted_text,
            author_key: pseudonymize_author(&event.author_handle),
            redactions,
        })
    }
}

/// Stable pseudonym for an author handle. Case and a leading `@` are ignored,
/// so `@Alice` and `alice` map to the same key.
pub fn pseudonymize_author(handle: &str) -> String {
    let normalized = handle.trim().trim_start_matches('@').to_lowercase();
    let hash = blake3::hash(normalized.as_bytes());
    let hex = hash.to_hex();
    hex.as_str()[..AUTHOR_KEY_LEN].to_string()
}

/// Apply placeholder replacements. Matches must be non-overlapping and
/// sorted descending by start so earlier offsets stay valid.
fn apply_replacements(text: &str, matches: &[RawMatch]) -> String {
    let mut result = text.to_string();
    for m in matches {
        result.replace_range(m.start..m.end, m.category.placeholder());
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_each_category() {
        let engine = RedactionEngine::new();
        let (text, redactions) = engine.redact_text(
            "ping @ops_team or jane@bank.com, IBAN AE07 0331 2345 6789 0123 456, tel +971-50-1234567",
        );
        assert_eq!(
            text,
            "ping [HANDLE] or [EMAIL], IBAN [IBAN], tel [PHONE]"
        );
        assert_eq!(redactions.len(), 4);
    }

    #[test]
    fn stray_at_sign_is_stable() {
        let engine = RedactionEngine::new();
        let (text, _) = engine.redact_text("a@b@cc.com");
        assert_eq!(text, "a@[EMAIL]");
        let (again, more) = engine.redact_text(&text);
        assert_eq!(text, again);
        assert!(more.is_empty());
    }

    #[test]
    fn empty_text_passes_through() {
        let (text, redactions) = RedactionEngine::new().redact_text("");
        assert!(text.is_empty());
        assert!(redactions.is_empty());
    }

    #[test]
    fn author_key_ignores_case_and_at_sign() {
        assert_eq!(pseudonymize_author("@Alice"), pseudonymize_author("alice"));
        assert_ne!(pseudonymize_author("alice"), pseudonymize_author("bob"));
        assert_eq!(pseudonymize_author("alice").len(), AUTHOR_KEY_LEN);
    }
}
