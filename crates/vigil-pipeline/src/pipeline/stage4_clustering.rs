//! Stage 4: greedy leader clustering of signal events.
//!
//! Each unassigned event, in input order, seeds a cluster; every later
//! unassigned event similar enough to the seed joins it. No randomness, so
//! assignment is fixed for a given input order and threshold.

use std::collections::{BTreeMap, HashSet};

use vigil_core::config::ClusteringConfig;
use vigil_core::errors::StageError;
use vigil_core::models::{Category, Cluster, ClusteringResult, RedactedEvent};

use crate::algorithms::features::{combined_profile, EventFeatures};
use crate::algorithms::similarity::{jaccard, time_proximity};

/// Weighted similarity between two events.
pub fn event_similarity(
    a: (&RedactedEvent, &EventFeatures),
    b: (&RedactedEvent, &EventFeatures),
    config: &ClusteringConfig,
) -> f64 {
    config.category_weight * a.1.profile.similarity(&b.1.profile)
        + config.keyword_weight * jaccard(&a.1.keywords, &b.1.keywords)
        + config.proximity_weight
            * time_proximity(a.0.timestamp(), b.0.timestamp(), config.proximity_window_hours)
}

/// Group signals into clusters and summarize the category mix.
pub fn cluster(
    signals: &[RedactedEvent],
    config: &ClusteringConfig,
) -> Result<(Vec<Cluster>, ClusteringResult), StageError> {
    let features: Vec<EventFeatures> = signals
        .iter()
        .map(|e| EventFeatures::extract(&e.redacted_text))
        .collect();

    let mut assigned = vec![false; signals.len()];
    let mut groups: Vec<Vec<usize>> = Vec::new();
    for seed in 0..signals.len() {
        if assigned[seed] {
            continue;
        }
        assigned[seed] = true;
        let mut members = vec![seed];
        for candidate in (seed + 1)..signals.len() {
            if assigned[candidate] {
                continue;
            }
            let similarity = event_similarity(
                (&signals[seed], &features[seed]),
                (&signals[candidate], &features[candidate]),
                config,
            );
            if similarity >= config.similarity_threshold {
                assigned[candidate] = true;
                members.push(candidate);
            }
        }
        groups.push(members);
    }

    check_coverage(&groups, signals.len())?;

    let mut clusters = Vec::with_capacity(groups.len());
    let mut category_distribution: BTreeMap<Category, usize> = BTreeMap::new();
    for (i, group) in groups.iter().enumerate() {
        let member_features: Vec<&EventFeatures> = group.iter().map(|&m| &features[m]).collect();
        let category = combined_profile(member_features.iter().copied()).dominant();
        *category_distribution.entry(category).or_insert(0) += 1;

        clusters.push(Cluster {
            cluster_id: format_cluster_id(i + 1),
            members: group.iter().map(|&m| signals[m].clone()).collect(),
            representative_keywords: representative_keywords(
                &member_features,
                config.max_keywords,
            ),
        });
    }

    let result = ClusteringResult {
        cluster_count: clusters.len(),
        category_distribution,
    };
    Ok((clusters, result))
}

/// Dominant category of a cluster's members.
pub fn cluster_category(members: &[RedactedEvent]) -> Category {
    let features: Vec<EventFeatures> = members
        .iter()
        .map(|e| EventFeatures::extract(&e.redacted_text))
        .collect();
    combined_profile(&features).dominant()
}

/// Top keywords by the number of members using them; ties alphabetical.
pub fn representative_keywords(features: &[&EventFeatures], limit: usize) -> Vec<String> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for f in features {
        for keyword in &f.keywords {
            *counts.entry(keyword.as_str()).or_insert(0) += 1;
        }
    }
    let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
    // Stable sort over alphabetical input keeps ties alphabetical.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
        .into_iter()
        .take(limit)
        .map(|(k, _)| k.to_string())
        .collect()
}

fn format_cluster_id(ordinal: usize) -> String {
    format!("CL-{ordinal:04}")
}

fn check_coverage(groups: &[Vec<usize>], expected: usize) -> Result<(), StageError> {
    let assigned: usize = groups.iter().map(Vec::len).sum();
    let distinct: HashSet<usize> = groups.iter().flatten().copied().collect();
    if assigned != expected || distinct.len() != expected {
        return Err(StageError::CoverageViolated { assigned, expected });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cluster_ids_are_zero_padded_ordinals() {
        assert_eq!(format_cluster_id(1), "CL-0001");
        assert_eq!(format_cluster_id(42), "CL-0042");
    }

    #[test]
    fn keywords_rank_by_member_count_then_alphabet() {
        let a = EventFeatures::extract("outage login banking");
        let b = EventFeatures::extract("outage login mobile");
        let c = EventFeatures::extract("outage zebra");
        let ranked = representative_keywords(&[&a, &b, &c], 4);
        assert_eq!(ranked, vec!["outage", "login", "banking", "mobile"]);
    }

    #[test]
    fn coverage_detects_double_assignment() {
        assert!(check_coverage(&[vec![0, 1], vec![2]], 3).is_ok());
        assert!(check_coverage(&[vec![0, 1], vec![1]], 3).is_err());
        assert!(check_coverage(&[vec![0]], 2).is_err());
    }
}
