pub mod pii;

use regex::Regex;
use std::sync::LazyLock;

use vigil_core::models::{PiiCategory, Redaction};

/// A single pattern hit in one pass over the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMatch {
    pub category: PiiCategory,
    pub pattern_name: &'static str,
    pub start: usize,
    pub end: usize,
    /// Position of the pattern in `pii::all_patterns()`, used for tie-breaks.
    pub priority: usize,
}

impl RawMatch {
    fn len(&self) -> usize {
        self.end - self.start
    }

    fn overlaps(&self, other: &RawMatch) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Run every pattern against the input text, returning non-overlapping
/// matches sorted by start position (descending) for safe replacement.
pub fn scan_all(text: &str) -> Vec<RawMatch> {
    let mut matches = Vec::new();
    for (priority, pat) in pii::all_patterns().iter().enumerate() {
        collect_matches(
            text,
            pat.regex,
            pat.group,
            pat.category,
            pat.name,
            priority,
            &mut matches,
        );
    }

    let mut kept = resolve_overlaps(matches);
    kept.sort_by(|a, b| b.start.cmp(&a.start));
    kept
}

/// Whether any PII pattern still matches the text.
pub fn contains_pii(text: &str) -> bool {
    pii::all_patterns().iter().any(|pat| {
        pat.regex
            .as_ref()
            .is_some_and(|re| re.captures_iter(text).any(|c| c.get(pat.group).is_some()))
    })
}

fn collect_matches(
    text: &str,
    regex: &LazyLock<Option<Regex>>,
    group: usize,
    category: PiiCategory,
    name: &'static str,
    priority: usize,
    out: &mut Vec<RawMatch>,
) {
    let Some(re) = regex.as_ref() else { return };
    for caps in re.captures_iter(text) {
        if let Some(m) = caps.get(group) {
            out.push(RawMatch {
                category,
                pattern_name: name,
                start: m.start(),
                end: m.end(),
                priority,
            });
        }
    }
}

/// Keep a maximal set of non-overlapping matches, preferring the longer
/// match, then the earlier one, then the higher-priority pattern.
fn resolve_overlaps(mut candidates: Vec<RawMatch>) -> Vec<RawMatch> {
    candidates.sort_by(|a, b| {
        b.len()
            .cmp(&a.len())
            .then(a.start.cmp(&b.start))
            .then(a.priority.cmp(&b.priority))
    });

    let mut kept: Vec<RawMatch> = Vec::with_capacity(candidates.len());
    for m in candidates {
        if !kept.iter().any(|k| k.overlaps(&m)) {
            kept.push(m);
        }
    }
    kept
}

/// Convert raw matches to the model's `Redaction` records, in text order.
pub fn to_redactions(matches: &[RawMatch]) -> Vec<Redaction> {
    let mut redactions: Vec<Redaction> = matches
        .iter()
        .map(|m| Redaction {
            category: m.category,
            pattern_name: m.pattern_name.to_string(),
            placeholder: m.category.placeholder().to_string(),
            start: m.start,
            end: m.end,
        })
        .collect();
    redactions.sort_by_key(|r| r.start);
    redactions
}
