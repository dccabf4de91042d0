//! Keyword tables driving the gate, category detection and severity.
//!
//! Terms are lowercase; multi-word terms match consecutive tokens. Every
//! occurrence of a term adds its weight, so a phrase and its own words both
//! count.

use vigil_core::models::Category;

/// A weighted lexicon entry.
pub type Term = (&'static str, f64);

pub const FRAUD_TERMS: &[Term] = &[
    ("fraud", 1.5),
    ("scam", 1.5),
    ("scammer", 1.5),
    ("scammers", 1.5),
    ("phishing", 1.5),
    ("smishing", 1.5),
    ("hacked", 1.5),
    ("unauthorized", 1.2),
    ("unauthorised", 1.2),
    ("stolen", 1.2),
    ("impersonating", 1.2),
    ("otp", 1.0),
    ("suspicious", 0.8),
    ("fake", 0.6),
    ("unauthorized transaction", 1.5),
    ("verify your account", 1.2),
];

pub const SERVICE_TERMS: &[Term] = &[
    ("outage", 1.5),
    ("down", 1.0),
    ("crash", 1.0),
    ("crashed", 1.0),
    ("crashing", 1.0),
    ("unavailable", 1.0),
    ("offline", 1.0),
    ("login", 0.8),
    ("error", 0.8),
    ("failed", 0.8),
    ("failing", 0.8),
    ("timeout", 0.8),
    ("glitch", 0.8),
    ("slow", 0.5),
    ("atm", 0.5),
    ("app", 0.3),
    ("system down", 1.5),
    ("unable to login", 1.5),
    ("cannot login", 1.5),
    ("not working", 1.2),
];

pub const MISINFORMATION_TERMS: &[Term] = &[
    ("rumor", 1.2),
    ("rumors", 1.2),
    ("rumour", 1.2),
    ("rumours", 1.2),
    ("hoax", 1.5),
    ("misleading", 1.0),
    ("bankrupt", 1.2),
    ("collapse", 1.0),
    ("collapsing", 1.0),
    ("viral", 0.8),
    ("false", 0.8),
    ("claims", 0.6),
    ("fake news", 1.5),
    ("going bankrupt", 1.5),
];

pub const RISK_TERMS: &[Term] = &[
    ("liquidity", 1.5),
    ("insolvency", 1.5),
    ("insolvent", 1.5),
    ("downgrade", 1.2),
    ("downgraded", 1.2),
    ("withdrawals", 1.0),
    ("withdraw", 0.8),
    ("volatility", 1.0),
    ("exposure", 0.8),
    ("losses", 0.8),
    ("panic", 1.0),
    ("bank run", 1.5),
];

pub const COMPLIANCE_TERMS: &[Term] = &[
    ("regulator", 1.2),
    ("regulatory", 1.2),
    ("lawsuit", 1.2),
    ("gdpr", 1.5),
    ("kyc", 1.2),
    ("aml", 1.2),
    ("sanctions", 1.2),
    ("investigation", 0.8),
    ("audit", 0.8),
    ("penalty", 0.8),
    ("data breach", 1.5),
    ("money laundering", 1.5),
];

pub const CUSTOMER_EXPERIENCE_TERMS: &[Term] = &[
    ("rude", 1.0),
    ("terrible", 0.8),
    ("worst", 0.8),
    ("disappointed", 0.8),
    ("complaint", 0.8),
    ("refund", 0.8),
    ("fees", 0.8),
    ("charged", 0.8),
    ("waiting", 0.6),
    ("queue", 0.5),
    ("support", 0.5),
    ("customer service", 1.0),
    ("on hold", 0.8),
];

/// Terms signalling material harm, counted per occurrence.
pub const SEVERITY_TERMS: &[&str] = &[
    "urgent",
    "emergency",
    "critical",
    "severe",
    "stolen",
    "hacked",
    "lost",
    "losing",
    "lawsuit",
    "everyone",
    "nationwide",
    "bankrupt",
    "massive",
    "major",
    "all my money",
];

/// Words that mark a post as time-pressured.
pub const URGENCY_WORDS: &[&str] = &["asap", "immediately", "help", "now", "hurry"];

/// Lexicon for one category. `Other` has none: it is the fallback.
pub fn category_terms(category: Category) -> &'static [Term] {
    match category {
        Category::Fraud => FRAUD_TERMS,
        Category::Service => SERVICE_TERMS,
        Category::Misinformation => MISINFORMATION_TERMS,
        Category::Risk => RISK_TERMS,
        Category::Compliance => COMPLIANCE_TERMS,
        Category::CustomerExperience => CUSTOMER_EXPERIENCE_TERMS,
        Category::Other => &[],
    }
}

/// Occurrences of a (possibly multi-word) term in a token stream.
pub fn count_term(tokens: &[String], term: &str) -> usize {
    let words: Vec<&str> = term.split_whitespace().collect();
    if words.is_empty() || words.len() > tokens.len() {
        return 0;
    }
    tokens
        .windows(words.len())
        .filter(|window| window.iter().zip(&words).all(|(t, w)| t == w))
        .count()
}
