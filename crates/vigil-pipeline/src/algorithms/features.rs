//! Per-event lexical features: keywords, category profile, severity and
//! urgency counts.

use std::collections::BTreeSet;

use vigil_core::models::Category;

use super::lexicon::{self, SEVERITY_TERMS, URGENCY_WORDS};
use super::similarity::cosine_similarity;
use super::tokenize::{content_tokens, exclamation_runs, shouted_words, tokenize};

const CATEGORY_COUNT: usize = Category::PRIORITY.len();

/// Summed lexicon weight per category, indexed by priority rank.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CategoryProfile([f64; CATEGORY_COUNT]);

impl CategoryProfile {
    pub fn weight(&self, category: Category) -> f64 {
        self.0[category.priority_rank()]
    }

    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() <= 0.0
    }

    pub fn add(&mut self, other: &CategoryProfile) {
        for (mine, theirs) in self.0.iter_mut().zip(other.0.iter()) {
            *mine += theirs;
        }
    }

    /// Heaviest category; equal weights go to the higher-priority category.
    /// An empty profile is `Other`.
    pub fn dominant(&self) -> Category {
        let mut best = Category::Other;
        let mut best_weight = 0.0;
        for category in Category::PRIORITY {
            let weight = self.weight(category);
            if weight > best_weight {
                best = category;
                best_weight = weight;
            }
        }
        best
    }

    /// Share of total weight held by the dominant category; 1.0 when empty.
    pub fn dominant_share(&self) -> f64 {
        let total = self.total();
        if total <= 0.0 {
            return 1.0;
        }
        self.weight(self.dominant()) / total
    }

    pub fn similarity(&self, other: &CategoryProfile) -> f64 {
        cosine_similarity(&self.0, &other.0)
    }
}

/// Lexical features of one redacted text.
#[derive(Debug, Clone, PartialEq)]
pub struct EventFeatures {
    pub keywords: BTreeSet<String>,
    pub profile: CategoryProfile,
    pub severity_hits: usize,
    /// `!` runs, all-caps words, and urgency words.
    pub urgency_markers: usize,
}

impl EventFeatures {
    pub fn extract(redacted_text: &str) -> Self {
        let tokens = tokenize(redacted_text);

        let mut profile = CategoryProfile::default();
        for category in Category::PRIORITY {
            let weight: f64 = lexicon::category_terms(category)
                .iter()
                .map(|(term, w)| lexicon::count_term(&tokens, term) as f64 * w)
                .sum();
            profile.0[category.priority_rank()] = weight;
        }

        let severity_hits = SEVERITY_TERMS
            .iter()
            .map(|term| lexicon::count_term(&tokens, term))
            .sum();

        let urgency_words: usize = URGENCY_WORDS
            .iter()
            .map(|term| lexicon::count_term(&tokens, term))
            .sum();
        let urgency_markers =
            exclamation_runs(redacted_text) + shouted_words(redacted_text) + urgency_words;

        Self {
            keywords: content_tokens(&tokens).into_iter().collect(),
            profile,
            severity_hits,
            urgency_markers,
        }
    }

    /// Sum of category term weights.
    pub fn term_weight(&self) -> f64 {
        self.profile.total()
    }
}

/// Combined profile of a group of events.
pub fn combined_profile<'a>(features: impl IntoIterator<Item = &'a EventFeatures>) -> CategoryProfile {
    let mut profile = CategoryProfile::default();
    for f in features {
        profile.add(&f.profile);
    }
    profile
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_text_has_service_profile() {
        let f = EventFeatures::extract("Major outage, app down since 9am!!!");
        assert_eq!(f.profile.dominant(), Category::Service);
        assert_eq!(f.severity_hits, 1);
        assert_eq!(f.urgency_markers, 1);
        assert!(f.keywords.contains("outage"));
    }

    #[test]
    fn ties_break_by_priority() {
        // "fraud" (1.5, FRAUD) vs "outage" (1.5, SERVICE)
        let f = EventFeatures::extract("fraud outage");
        assert_eq!(f.profile.weight(Category::Fraud), f.profile.weight(Category::Service));
        assert_eq!(f.profile.dominant(), Category::Fraud);
        assert!((f.profile.dominant_share() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn plain_text_is_other() {
        let f = EventFeatures::extract("lovely weather at the beach");
        assert!(f.profile.is_empty());
        assert_eq!(f.profile.dominant(), Category::Other);
        assert_eq!(f.profile.dominant_share(), 1.0);
        assert_eq!(f.term_weight(), 0.0);
    }

    #[test]
    fn combined_profile_sums_members() {
        let a = EventFeatures::extract("outage");
        let b = EventFeatures::extract("scam");
        let p = combined_profile([&a, &b]);
        assert_eq!(p.weight(Category::Service), 1.5);
        assert_eq!(p.weight(Category::Fraud), 1.5);
    }
}
