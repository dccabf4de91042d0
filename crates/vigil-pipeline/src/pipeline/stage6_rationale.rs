//! Stage 6: category, title, narrative, queue and action plan per cluster.

use std::collections::BTreeSet;

use vigil_core::constants::{HIGH_CONFIDENCE_FLOOR, MODERATE_CONFIDENCE_FLOOR};
use vigil_core::errors::StageError;
use vigil_core::models::{Category, Cluster, Rationale, RiskScore, SourceChannel};

use super::stage4_clustering::cluster_category;
use crate::playbook;

/// Keywords named in a title.
const TITLE_KEYWORDS: usize = 3;
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Verbal confidence tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UncertaintyTier {
    High,
    Moderate,
    Low,
}

impl UncertaintyTier {
    /// Above 80 is high, 50 through 80 moderate, below 50 low.
    pub fn from_confidence(confidence_percentage: f64) -> Self {
        if confidence_percentage > HIGH_CONFIDENCE_FLOOR {
            Self::High
        } else if confidence_percentage >= MODERATE_CONFIDENCE_FLOOR {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    pub fn wording(&self) -> &'static str {
        match self {
            Self::High => {
                "High confidence: consistent reports from several sources support this assessment."
            }
            Self::Moderate => {
                "Moderate confidence: the pattern is plausible but analyst verification is advised."
            }
            Self::Low => {
                "Low confidence: limited or mixed evidence; treat as an early indicator only."
            }
        }
    }
}

/// Everything the rationale stage derives for one cluster.
#[derive(Debug, Clone, PartialEq)]
pub struct Explanation {
    pub category: Category,
    pub title: String,
    pub rationale: Rationale,
    pub suggested_queue: String,
    pub action_plan: Vec<String>,
}

/// Explain a scored cluster. Pure text derivation from the cluster and score.
pub fn explain(cluster: &Cluster, score: &RiskScore) -> Result<Explanation, StageError> {
    let (first, last) = cluster.time_span().ok_or_else(|| StageError::RationaleFailed {
        cluster_id: cluster.cluster_id.clone(),
        reason: "cluster has no members".to_string(),
    })?;

    let category = cluster_category(&cluster.members);
    let entry = playbook::entry(category);

    let title = if cluster.representative_keywords.is_empty() {
        entry.label.to_string()
    } else {
        let top: Vec<&str> = cluster
            .representative_keywords
            .iter()
            .take(TITLE_KEYWORDS)
            .map(String::as_str)
            .collect();
        format!("{}: {}", entry.label, top.join(", "))
    };

    let n = cluster.len();
    let authors: BTreeSet<&str> = cluster.members.iter().map(|m| m.author_key.as_str()).collect();
    let channels: BTreeSet<SourceChannel> = cluster.members.iter().map(|m| m.channel()).collect();
    let channel_list: Vec<&str> = channels.iter().map(SourceChannel::as_str).collect();
    let window = if first == last {
        format!("at {} UTC", first.format(TIMESTAMP_FORMAT))
    } else {
        format!(
            "between {} and {} UTC",
            first.format(TIMESTAMP_FORMAT),
            last.format(TIMESTAMP_FORMAT)
        )
    };
    let terms = if cluster.representative_keywords.is_empty() {
        "no recurring terms".to_string()
    } else {
        format!("recurring terms: {}", cluster.representative_keywords.join(", "))
    };
    let what_signal = format!(
        "{} {} from {} distinct {} on {} {}; {}.",
        n,
        plural(n, "event", "events"),
        authors.len(),
        plural(authors.len(), "author", "authors"),
        channel_list.join(", "),
        window,
        terms,
    );

    let why_it_matters = format!(
        "{} Risk is {} at {:.1}/10.",
        entry.why_it_matters,
        score.tier(),
        score.total_score
    );

    let uncertainty_wording = UncertaintyTier::from_confidence(score.confidence_percentage)
        .wording()
        .to_string();

    Ok(Explanation {
        category,
        title,
        rationale: Rationale {
            what_signal,
            why_it_matters,
            uncertainty_wording,
        },
        suggested_queue: entry.queue.to_string(),
        action_plan: entry.action_plan.iter().map(|s| s.to_string()).collect(),
    })
}

fn plural(n: usize, one: &'static str, many: &'static str) -> &'static str {
    if n == 1 {
        one
    } else {
        many
    }
}
