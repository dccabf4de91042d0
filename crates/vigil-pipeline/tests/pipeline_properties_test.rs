//! Property tests: gate partition, cluster coverage, score bounds,
//! determinism.

use std::collections::BTreeMap;

use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;
use vigil_core::models::{RawEvent, SourceChannel};
use vigil_pipeline::PipelineEngine;

const TEXTS: &[&str] = &[
    "The system down again, nothing works",
    "Unable to login to the mobile app!!",
    "Major outage reported across branches",
    "Phishing scam impersonating the bank, call +971-50-1234567",
    "My account was hacked, unauthorized transaction of all my money",
    "Rumor says the bank is going bankrupt, fake news?",
    "Liquidity worries, people planning withdrawals, bank run?",
    "Regulator opens investigation into KYC failures",
    "Worst customer service ever, on hold for an hour",
    "Lovely new branch design downtown",
    "Staff were friendly today",
    "Email me at jane@mail.com about the refund @bank_help",
    "URGENT HELP NOW!!!",
    "",
];

const AUTHORS: &[&str] = &["@ana", "@ben", "@cho", "@dev"];

fn arb_events() -> impl Strategy<Value = Vec<RawEvent>> {
    prop::collection::vec(
        (0..TEXTS.len(), 0..SourceChannel::ALL.len(), 0..AUTHORS.len(), 0i64..2_880),
        0..30,
    )
    .prop_map(|specs| {
        let base = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (text, channel, author, minutes))| {
                RawEvent::new(
                    format!("evt-{i}"),
                    base + Duration::minutes(minutes),
                    SourceChannel::ALL[channel],
                    AUTHORS[author],
                    TEXTS[text],
                )
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn gate_partitions_every_event(events in arb_events()) {
        let result = PipelineEngine::default().process(&events).unwrap();
        prop_assert_eq!(
            result.gating_result.signal_count + result.gating_result.noise_count,
            events.len()
        );
    }

    #[test]
    fn every_signal_lands_in_exactly_one_cluster(events in arb_events()) {
        let result = PipelineEngine::default().process(&events).unwrap();

        let mut seen: BTreeMap<&str, usize> = BTreeMap::new();
        for analysis in &result.analyses {
            prop_assert!(!analysis.cluster.is_empty());
            for id in analysis.cluster.member_ids() {
                *seen.entry(id).or_insert(0) += 1;
            }
        }
        prop_assert_eq!(seen.len(), result.gating_result.signal_count);
        prop_assert!(seen.values().all(|&count| count == 1));

        let distributed: usize = result.clustering_result.category_distribution.values().sum();
        prop_assert_eq!(distributed, result.clustering_result.cluster_count);
        prop_assert_eq!(result.analyses.len(), result.clustering_result.cluster_count);
    }

    #[test]
    fn scores_stay_in_bounds(events in arb_events()) {
        let result = PipelineEngine::default().process(&events).unwrap();
        for analysis in &result.analyses {
            let score = &analysis.risk_score;
            prop_assert!((0.0..=10.0).contains(&score.total_score));
            prop_assert!((0.0..=100.0).contains(&score.confidence_percentage));
            for sub in score.sub_scores.values() {
                prop_assert!((0.0..=10.0).contains(sub));
            }
        }
    }

    #[test]
    fn processing_is_deterministic(events in arb_events()) {
        let engine = PipelineEngine::default();
        let first = engine.process(&events).unwrap().without_timing();
        let second = engine.process(&events).unwrap().without_timing();
        prop_assert_eq!(first, second);
    }
}
