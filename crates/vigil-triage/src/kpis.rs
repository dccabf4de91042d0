use serde::{Deserialize, Serialize};
use vigil_core::constants::{CRITICAL_RISK_FLOOR, REVIEW_RISK_FLOOR};
use vigil_core::models::PipelineResult;

/// Headline counts for the review dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardKpis {
    pub events_processed: usize,
    /// Clusters scoring at or above the review floor.
    pub requiring_review: usize,
    /// Clusters scoring at or above the critical floor.
    pub critical_alerts: usize,
    pub noise_filtered: usize,
    pub cluster_count: usize,
}

impl DashboardKpis {
    pub fn from_result(result: &PipelineResult) -> Self {
        let at_least = |floor: f64| {
            result
                .analyses
                .iter()
                .filter(|a| a.total_score() >= floor)
                .count()
        };
        Self {
            events_processed: result.events_received,
            requiring_review: at_least(REVIEW_RISK_FLOOR),
            critical_alerts: at_least(CRITICAL_RISK_FLOOR),
            noise_filtered: result.gating_result.noise_count,
            cluster_count: result.clustering_result.cluster_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::analysis;
    use vigil_core::models::{ClusteringResult, GatingResult};

    #[test]
    fn counts_review_and_critical_floors() {
        let result = PipelineResult {
            processing_time_ms: 3,
            events_received: 12,
            rejected: Vec::new(),
            gating_result: GatingResult {
                signal_count: 8,
                noise_count: 4,
                threshold: 1.0,
            },
            clustering_result: ClusteringResult {
                cluster_count: 4,
                ..Default::default()
            },
            analyses: vec![
                analysis("CL-0001", 8.0),
                analysis("CL-0002", 6.5),
                analysis("CL-0003", 4.0),
                analysis("CL-0004", 3.99),
            ],
        };
        let kpis = DashboardKpis::from_result(&result);
        assert_eq!(kpis.events_processed, 12);
        assert_eq!(kpis.requiring_review, 3);
        assert_eq!(kpis.critical_alerts, 1);
        assert_eq!(kpis.noise_filtered, 4);
        assert_eq!(kpis.cluster_count, 4);
    }
}
