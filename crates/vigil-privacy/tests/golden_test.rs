//! Golden dataset tests for vigil-privacy.
//!
//! Loads the privacy golden file, runs redaction on every sample, and checks
//! exact output plus replacement counts.

use vigil_privacy::RedactionEngine;
use test_fixtures::load_fixture_value;

#[test]
fn golden_pii_samples() {
    let fixture = load_fixture_value("golden/privacy/pii_samples.json");
    let engine = RedactionEngine::new();
    let samples = fixture["input"]["samples"].as_array().unwrap();
    assert!(!samples.is_empty());

    for sample in samples {
        let id = sample["id"].as_str().unwrap_or("?");
        let text = sample["text"].as_str().unwrap();
        let (redacted, redactions) = engine.redact_text(text);

        assert_eq!(
            redacted,
            sample["expected_output"].as_str().unwrap(),
            "Sample '{}': output mismatch",
            id
        );
        assert_eq!(
            redactions.len() as u64,
            sample["expected_redactions"].as_u64().unwrap(),
            "Sample '{}': redaction count mismatch",
            id
        );
    }
}
