//! Similarity helpers: cosine over category profiles, keyword Jaccard,
//! temporal proximity.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

/// Cosine similarity between two weight vectors. Two all-zero vectors are
/// identical (1.0); one all-zero vector against a non-zero one is 0.0.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() {
        return 0.0;
    }
    let (mut dot, mut mag_a, mut mag_b) = (0.0f64, 0.0f64, 0.0f64);
    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        mag_a += x * x;
        mag_b += y * y;
    }
    match (mag_a < f64::EPSILON, mag_b < f64::EPSILON) {
        (true, true) => 1.0,
        (true, false) | (false, true) => 0.0,
        (false, false) => (dot / (mag_a.sqrt() * mag_b.sqrt())).clamp(-1.0, 1.0),
    }
}

/// Jaccard overlap of two keyword sets. Two empty sets are identical.
pub fn jaccard(a: &BTreeSet<String>, b: &BTreeSet<String>) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    let intersection = a.intersection(b).count() as f64;
    let union = a.union(b).count() as f64;
    intersection / union
}

/// Linear decay from 1.0 at the same instant to 0.0 at `window_hours` apart.
pub fn time_proximity(a: DateTime<Utc>, b: DateTime<Utc>, window_hours: f64) -> f64 {
    if window_hours <= 0.0 {
        return 0.0;
    }
    let delta_hours = (a - b).num_seconds().unsigned_abs() as f64 / 3600.0;
    (1.0 - delta_hours / window_hours).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn set(words: &[&str]) -> BTreeSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn identical_vectors_have_similarity_one() {
        let v = vec![1.0, 2.0, 3.0];
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn orthogonal_vectors_have_similarity_zero() {
        assert!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]).abs() < 1e-9);
    }

    #[test]
    fn zero_profiles() {
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[0.0, 0.0]), 1.0);
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 0.0]), 0.0);
    }

    #[test]
    fn jaccard_overlap() {
        assert_eq!(jaccard(&set(&[]), &set(&[])), 1.0);
        assert_eq!(jaccard(&set(&["a", "b"]), &set(&["b", "c"])), 1.0 / 3.0);
        assert_eq!(jaccard(&set(&["a"]), &set(&[])), 0.0);
    }

    #[test]
    fn proximity_decays_linearly() {
        let t = Utc::now();
        assert_eq!(time_proximity(t, t, 24.0), 1.0);
        assert!((time_proximity(t, t + Duration::hours(12), 24.0) - 0.5).abs() < 1e-9);
        assert_eq!(time_proximity(t + Duration::hours(30), t, 24.0), 0.0);
    }
}
