use regex::Regex;
use std::sync::LazyLock;

use vigil_core::models::PiiCategory;

/// A compiled PII detection pattern.
pub struct PiiPattern {
    pub name: &'static str,
    pub category: PiiCategory,
    pub regex: &'static LazyLock<Option<Regex>>,
    /// Capture group holding the PII span (0 = whole match).
    pub group: usize,
}

macro_rules! pii_pattern {
    ($name:ident, $regex_str:expr) => {
        pub static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

// ── Phone numbers ──────────────────────────────────────────────────────────
// International: +CC, optional (area), digit groups, e.g. +971-50-1234567, +1 (555) 123-4567
pii_pattern!(
    RE_PHONE_INTERNATIONAL,
    r"\+\d{1,3}[\s.\-]?(?:\(\d{1,4}\)|\d{1,4})(?:[\s.\-]?\d{2,4}){1,4}\b"
);

// Local trunk-prefixed: 050 123 4567, 020-7946-0958
pii_pattern!(
    RE_PHONE_LOCAL,
    r"\b0\d{1,4}[\s.\-]?\d{3,4}[\s.\-]?\d{3,4}\b"
);

// Grouped 3-3-4: (555) 123-4567, 555.123.4567
pii_pattern!(
    RE_PHONE_GROUPED,
    r"\(?\b\d{3}\)?[\s.\-]\d{3}[\s.\-]\d{4}\b"
);

// ── Email ──────────────────────────────────────────────────────────────────
pii_pattern!(
    RE_EMAIL,
    r"[A-Za-z0-9._%+\-]+@[A-Za-z0-9\-]+(?:\.[A-Za-z0-9\-]+)*\.[A-Za-z]{2,}"
);

// ── IBAN, any case: country code, check digits, 12-31 alphanumerics, optional 4-char spacing ──
pii_pattern!(
    RE_IBAN,
    r"(?i)\b[A-Z]{2}\d{2}(?:[ ]?[A-Z0-9]{4}){3,7}(?:[ ]?[A-Z0-9]{1,3})?\b"
);

// ── Social handle: not preceded by a word char, `.` or `@` ─────────────────
pii_pattern!(
    RE_SOCIAL_HANDLE,
    r"(?:^|[^A-Za-z0-9_.@])(@[A-Za-z0-9_]{2,30})"
);

static ALL_PATTERNS: [PiiPattern; 6] = [
    PiiPattern {
        name: "phone_international",
        category: PiiCategory::Phone,
        regex: &RE_PHONE_INTERNATIONAL,
        group: 0,
    },
    PiiPattern {
        name: "phone_local",
        category: PiiCategory::Phone,
        regex: &RE_PHONE_LOCAL,
        group: 0,
    },
    PiiPattern {
        name: "phone_grouped",
        category: PiiCategory::Phone,
        regex: &RE_PHONE_GROUPED,
        group: 0,
    },
    PiiPattern {
        name: "email",
        category: PiiCategory::Email,
        regex: &RE_EMAIL,
        group: 0,
    },
    PiiPattern {
        name: "iban",
        category: PiiCategory::Iban,
        regex: &RE_IBAN,
        group: 0,
    },
    PiiPattern {
        name: "social_handle",
        category: PiiCategory::SocialHandle,
        regex: &RE_SOCIAL_HANDLE,
        group: 1,
    },
];

/// All PII patterns, in tie-break priority order.
pub fn all_patterns() -> &'static [PiiPattern] {
    &ALL_PATTERNS
}
