//! Graceful degradation for the redaction engine.
//!
//! If a regex pattern fails to compile, we skip it, log a warning,
//! and continue with the remaining patterns.

use vigil_core::models::PiiCategory;

/// Record of a pattern that failed to compile.
#[derive(Debug, Clone)]
pub struct PatternFailure {
    pub pattern_name: String,
    pub category: PiiCategory,
    pub error: String,
}

/// Accumulates failures during a redaction pass.
#[derive(Debug, Default)]
pub struct DegradationTracker {
    failures: Vec<PatternFailure>,
}

impl DegradationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pattern failure. The engine continues with remaining patterns.
    pub fn record_failure(&mut self, pattern_name: &str, category: PiiCategory, error: &str) {
        tracing::warn!(
            pattern = pattern_name,
            category = ?category,
            error = error,
            "redaction pattern unavailable"
        );
        self.failures.push(PatternFailure {
            pattern_name: pattern_name.to_string(),
            category,
            error: error.to_string(),
        });
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    pub fn failures(&self) -> &[PatternFailure] {
        &self.failures
    }

    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    /// Categories left with no working pattern at all.
    pub fn uncovered_categories(&self) -> Vec<PiiCategory> {
        let mut uncovered: Vec<PiiCategory> = [
            PiiCategory::Phone,
            PiiCategory::Email,
            PiiCategory::Iban,
            PiiCategory::SocialHandle,
        ]
        .into_iter()
        .filter(|cat| {
            let total = crate::patterns::pii::all_patterns()
                .iter()
                .filter(|p| p.category == *cat)
                .count();
            let failed = self.failures.iter().filter(|f| f.category == *cat).count();
            total > 0 && failed >= total
        })
        .collect();
        uncovered.dedup();
        uncovered
    }
}
