//! End-to-end pipeline behaviour through `PipelineEngine`.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, TimeZone, Utc};
use vigil_core::config::VigilConfig;
use vigil_core::errors::{StageError, VigilError, VigilResult};
use vigil_core::models::*;
use vigil_core::traits::IRedactor;
use vigil_pipeline::PipelineEngine;

fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap()
}

fn event(id: &str, minutes: i64, channel: SourceChannel, author: &str, text: &str) -> RawEvent {
    RawEvent::new(id, base_time() + Duration::minutes(minutes), channel, author, text)
}

fn outage_events() -> Vec<RawEvent> {
    vec![
        event("e1", 0, SourceChannel::Social, "@user1", "The system down again, nothing works"),
        event("e2", 5, SourceChannel::Social, "@user2", "Unable to login to the mobile app"),
        event("e3", 10, SourceChannel::News, "@wire", "Major outage reported across branches"),
    ]
}

#[test]
fn outage_reports_form_one_service_cluster() {
    let engine = PipelineEngine::default();
    let result = engine.process(&outage_events()).unwrap();

    assert_eq!(result.gating_result.signal_count, 3);
    assert_eq!(result.gating_result.noise_count, 0);
    assert_eq!(result.clustering_result.cluster_count, 1);

    let analysis = &result.analyses[0];
    assert_eq!(analysis.cluster_id(), "CL-0001");
    assert_eq!(analysis.cluster.len(), 3);
    assert_eq!(analysis.category, Category::Service);
    assert_eq!(analysis.suggested_queue, "IT Operations");
    assert_eq!(analysis.action_plan.len(), 4);
    assert!(analysis.rationale.what_signal.starts_with("3 events from 3 distinct authors"));
}

#[test]
fn empty_input_yields_empty_result() {
    let result = PipelineEngine::default().process(&[]).unwrap();
    assert_eq!(result.events_received, 0);
    assert_eq!(result.gating_result.signal_count, 0);
    assert_eq!(result.gating_result.noise_count, 0);
    assert_eq!(result.clustering_result.cluster_count, 0);
    assert!(result.clustering_result.category_distribution.is_empty());
    assert!(result.analyses.is_empty());
}

#[test]
fn chatter_is_gated_as_noise() {
    let events = vec![
        event("n1", 0, SourceChannel::Blog, "@fan", "Lovely new branch design downtown"),
        event("n2", 1, SourceChannel::Review, "@fan2", "Staff were friendly today"),
    ];
    let result = PipelineEngine::default().process(&events).unwrap();
    assert_eq!(result.gating_result.signal_count, 0);
    assert_eq!(result.gating_result.noise_count, 2);
    assert!(result.analyses.is_empty());
}

#[test]
fn fraud_and_outage_stay_apart() {
    let mut events = outage_events();
    events.push(event(
        "f1",
        12,
        SourceChannel::Social,
        "@victim",
        "Phishing scam impersonating the bank, my account was hacked",
    ));
    let result = PipelineEngine::default().process(&events).unwrap();

    assert_eq!(result.clustering_result.cluster_count, 2);
    let fraud = result.analysis("CL-0002").unwrap();
    assert_eq!(fraud.category, Category::Fraud);
    assert_eq!(fraud.suggested_queue, "Fraud Prevention");
    assert_eq!(
        result.clustering_result.category_distribution,
        BTreeMap::from([(Category::Fraud, 1), (Category::Service, 1)])
    );
}

#[test]
fn same_category_weeks_apart_stays_separate() {
    let events = vec![
        event("a", 0, SourceChannel::Social, "@marina", "ATM offline in Dubai Marina"),
        event(
            "b",
            60 * 24 * 60,
            SourceChannel::Social,
            "@payday",
            "Mobile banking crashed during salary week",
        ),
    ];
    let result = PipelineEngine::default().process(&events).unwrap();

    assert_eq!(result.gating_result.signal_count, 2);
    assert_eq!(result.clustering_result.cluster_count, 2);
    for analysis in &result.analyses {
        assert_eq!(analysis.cluster.len(), 1);
        assert_eq!(analysis.category, Category::Service);
    }
}

#[test]
fn same_category_minutes_apart_clusters() {
    let events = vec![
        event("a", 0, SourceChannel::Social, "@marina", "ATM offline in Dubai Marina"),
        event("b", 20, SourceChannel::Social, "@payday", "Mobile banking crashed during salary week"),
    ];
    let result = PipelineEngine::default().process(&events).unwrap();
    assert_eq!(result.clustering_result.cluster_count, 1);
    assert_eq!(
        result.analyses[0].cluster.member_ids().collect::<Vec<_>>(),
        vec!["a", "b"]
    );
}

#[test]
fn identical_runs_are_identical() {
    let engine = PipelineEngine::default();
    let events = outage_events();
    let first = engine.process(&events).unwrap();
    let second = engine.process(&events).unwrap();
    assert_eq!(first.without_timing(), second.without_timing());
}

#[test]
fn pii_never_reaches_the_result() {
    let events = vec![event(
        "p1",
        0,
        SourceChannel::Social,
        "@caller",
        "App outage, call me on +971-50-1234567 or mail me at caller@mail.com",
    )];
    let result = PipelineEngine::default().process(&events).unwrap();
    let member = &result.analyses[0].cluster.members[0];
    assert!(!member.redacted_text.contains("+971-50-1234567"));
    assert!(!member.redacted_text.contains("caller@mail.com"));
    assert_eq!(member.redaction_count(), 2);
    let card = result.analyses[0].to_analyst_card();
    assert!(!card.rationale.what_signal.contains("971"));
}

#[test]
fn malformed_records_are_reported_not_fatal() {
    let records = vec![
        EventRecord {
            id: Some("ok".into()),
            timestamp: Some("2024-03-01T10:00:00Z".into()),
            source_channel: Some("social".into()),
            author_handle: Some("@a".into()),
            text: Some("total outage, app down".into()),
        },
        EventRecord {
            id: Some("bad".into()),
            timestamp: Some("2024-03-01T10:00:00Z".into()),
            ..Default::default()
        },
    ];
    let result = PipelineEngine::default().process_records(&records).unwrap();
    assert_eq!(result.events_received, 2);
    assert_eq!(result.malformed_count(), 1);
    assert_eq!(result.rejected[0].index, 1);
    assert_eq!(result.rejected[0].id.as_deref(), Some("bad"));
    assert_eq!(result.gating_result.total(), 1);
}

struct LeakyRedactor;

impl IRedactor for LeakyRedactor {
    fn redact(&self, event: &RawEvent) -> VigilResult<RedactedEvent> {
        Ok(RedactedEvent {
            event: event.clone(),
            redacted_text: event.text.clone(),
            author_key: event.author_handle.clone(),
            redactions: vec![],
        })
    }
}

#[test]
fn leaked_pii_aborts_the_run_at_redaction() {
    let engine = PipelineEngine::with_redactor(VigilConfig::default(), Box::new(LeakyRedactor));
    let events = vec![event("x1", 0, SourceChannel::Social, "@a", "outage, call +971-50-1234567")];
    let err = engine.process(&events).unwrap_err();
    match err {
        VigilError::Stage(stage_err) => {
            assert_eq!(stage_err.stage(), PipelineStage::Redaction);
            assert!(matches!(stage_err, StageError::RedactionFailed { ref event_id, .. } if event_id == "x1"));
        }
        other => panic!("expected stage error, got {other:?}"),
    }
}

#[test]
fn raising_the_gate_threshold_filters_more() {
    let mut config = VigilConfig::default();
    config.gate.threshold = 3.0;
    let result = PipelineEngine::new(config).process(&outage_events()).unwrap();
    // e1 weighs 2.5 and e2 2.6; only e3 (outage + major) clears 3.0
    assert_eq!(result.gating_result.signal_count, 1);
    assert_eq!(result.gating_result.noise_count, 2);
}

#[test]
fn cache_key_tracks_input_and_config() {
    let engine = PipelineEngine::default();
    let events = outage_events();
    let key = engine.cache_key(&events).unwrap();
    assert_eq!(key, engine.cache_key(&events).unwrap());
    assert_ne!(key, engine.cache_key(&events[..2]).unwrap());

    let mut config = VigilConfig::default();
    config.gate.threshold = 2.0;
    assert_ne!(key, PipelineEngine::new(config).cache_key(&events).unwrap());
}

#[test]
fn uncertainty_wording_matches_confidence() {
    let result = PipelineEngine::default().process(&outage_events()).unwrap();
    for analysis in &result.analyses {
        let confidence = analysis.risk_score.confidence_percentage;
        let wording = &analysis.rationale.uncertainty_wording;
        let expected = if confidence > 80.0 {
            "High"
        } else if confidence >= 50.0 {
            "Moderate"
        } else {
            "Low"
        };
        assert!(wording.starts_with(expected), "{confidence} -> {wording}");
    }
}
