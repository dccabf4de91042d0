use serde::{Deserialize, Serialize};

use super::defaults;

/// Clusterer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusteringConfig {
    /// Minimum similarity to the cluster seed for an event to join.
    pub similarity_threshold: f64,
    /// Weight of category-profile cosine similarity.
    pub category_weight: f64,
    /// Weight of keyword Jaccard overlap.
    pub keyword_weight: f64,
    /// Weight of temporal proximity.
    pub proximity_weight: f64,
    /// Time window over which proximity decays to zero.
    pub proximity_window_hours: f64,
    /// Representative keywords kept per cluster.
    pub max_keywords: usize,
}

impl Default for ClusteringConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: defaults::DEFAULT_SIMILARITY_THRESHOLD,
            category_weight: defaults::DEFAULT_CATEGORY_WEIGHT,
            keyword_weight: defaults::DEFAULT_KEYWORD_WEIGHT,
            proximity_weight: defaults::DEFAULT_PROXIMITY_WEIGHT,
            proximity_window_hours: defaults::DEFAULT_PROXIMITY_WINDOW_HOURS,
            max_keywords: defaults::DEFAULT_MAX_KEYWORDS,
        }
    }
}
