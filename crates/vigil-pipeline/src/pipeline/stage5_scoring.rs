//! Stage 5: composite risk score and confidence per cluster.

use std::collections::{BTreeMap, BTreeSet};

use vigil_core::config::ScoringConfig;
use vigil_core::constants::{MAX_CONFIDENCE, MAX_RISK_SCORE, MIN_CONFIDENCE, MIN_RISK_SCORE};
use vigil_core::errors::StageError;
use vigil_core::models::{Cluster, RiskFactor, RiskScore, SourceChannel};

use crate::algorithms::features::{combined_profile, EventFeatures};
use crate::playbook;

/// Editorial credibility of a channel, 0-10.
pub fn channel_credibility(channel: SourceChannel) -> f64 {
    match channel {
        SourceChannel::News => 8.0,
        SourceChannel::Social => 6.0,
        SourceChannel::Review => 6.0,
        SourceChannel::Forum => 5.0,
        SourceChannel::Blog => 4.0,
        SourceChannel::Other => 3.0,
    }
}

/// `10 * (1 - e^(-x / scale))`: 0 at zero, approaching 10.
fn saturate(x: f64, scale: f64) -> f64 {
    MAX_RISK_SCORE * (1.0 - (-x / scale).exp())
}

fn clamp_score(value: f64) -> f64 {
    value.clamp(MIN_RISK_SCORE, MAX_RISK_SCORE)
}

/// Score one cluster. Deterministic in the cluster's contents.
pub fn score(cluster: &Cluster, config: &ScoringConfig) -> Result<RiskScore, StageError> {
    let (first, last) = cluster.time_span().ok_or_else(|| StageError::EmptyCluster {
        cluster_id: cluster.cluster_id.clone(),
    })?;

    let features: Vec<EventFeatures> = cluster
        .members
        .iter()
        .map(|m| EventFeatures::extract(&m.redacted_text))
        .collect();
    let n = features.len() as f64;
    let profile = combined_profile(&features);
    let category = profile.dominant();

    let mean_severity_hits = features.iter().map(|f| f.severity_hits as f64).sum::<f64>() / n;
    let mean_urgency = features.iter().map(|f| f.urgency_markers as f64).sum::<f64>() / n;
    let severity = clamp_score(
        playbook::entry(category).base_severity + 1.5 * mean_severity_hits + 1.0 * mean_urgency,
    );

    let span_hours = ((last - first).num_seconds() as f64 / 3600.0).max(1.0);
    let rate = n / span_hours;
    let velocity = clamp_score(0.6 * saturate(n, 4.0) + 0.4 * saturate(rate, 3.0));

    let authors: BTreeSet<&str> = cluster.members.iter().map(|m| m.author_key.as_str()).collect();
    let reach = clamp_score(saturate(authors.len() as f64, 3.0));

    let credibility = clamp_score(
        cluster
            .members
            .iter()
            .map(|m| channel_credibility(m.channel()))
            .sum::<f64>()
            / n,
    );

    let total_score = clamp_score(
        config.severity_share * severity
            + config.velocity_share * velocity
            + config.reach_share * reach
            + config.credibility_share * credibility,
    );

    let consistency = keyword_consistency(cluster, &features);
    let confidence_percentage = (40.0
        + 30.0 * (1.0 - (-(n - 1.0) / 3.0).exp())
        + 30.0 * consistency
        - 20.0 * (1.0 - profile.dominant_share()))
    .clamp(MIN_CONFIDENCE, MAX_CONFIDENCE);

    let sub_scores = BTreeMap::from([
        (RiskFactor::Severity, severity),
        (RiskFactor::Velocity, velocity),
        (RiskFactor::Reach, reach),
        (RiskFactor::Credibility, credibility),
    ]);

    Ok(RiskScore {
        total_score,
        sub_scores,
        confidence_percentage,
    })
}

/// Mean share of the representative keywords each member uses, in [0, 1].
fn keyword_consistency(cluster: &Cluster, features: &[EventFeatures]) -> f64 {
    if cluster.representative_keywords.is_empty() || features.is_empty() {
        return 1.0;
    }
    let wanted = cluster.representative_keywords.len() as f64;
    let total: f64 = features
        .iter()
        .map(|f| {
            cluster
                .representative_keywords
                .iter()
                .filter(|k| f.keywords.contains(k.as_str()))
                .count() as f64
                / wanted
        })
        .sum();
    total / features.len() as f64
}
