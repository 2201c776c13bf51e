use std::sync::Arc;

use proofseq_core::config::{ObservabilityConfig, ProofSeqConfig};
use proofseq_core::models::MismatchEvent;
use proofseq_core::traits::IDiagnosticSink;
use proofseq_validation::diagnostics::{init_tracing, NoopSink, RecordingSink, TracingSink};
use proofseq_validation::Validator;
use test_fixtures::load_puzzle;

fn event(puzzle_id: &str) -> MismatchEvent {
    MismatchEvent {
        puzzle_id: puzzle_id.to_string(),
        invalid_ids: vec!["zz".into()],
        submitted_order: vec!["a".into(), "zz".into()],
    }
}

#[test]
fn recording_sink_keeps_events_in_order() {
    let sink = RecordingSink::new();
    assert!(sink.is_empty());
    sink.puzzle_mismatch(&event("p1"));
    sink.puzzle_mismatch(&event("p2"));
    let recorded = sink.mismatches();
    assert_eq!(sink.len(), 2);
    assert_eq!(recorded[0].puzzle_id, "p1");
    assert_eq!(recorded[1].puzzle_id, "p2");
}

#[test]
fn tracing_and_noop_sinks_accept_events() {
    init_tracing(&ObservabilityConfig::default());
    TracingSink.puzzle_mismatch(&event("p1"));
    NoopSink.puzzle_mismatch(&event("p1"));
}

#[test]
fn init_tracing_is_idempotent() {
    let config = ObservabilityConfig::default();
    init_tracing(&config);
    assert!(!init_tracing(&config), "second init must not replace the subscriber");
}

#[test]
fn mismatch_on_shared_sink_is_recorded_once_per_call() {
    let sink = Arc::new(RecordingSink::new());
    let v = Validator::new(load_puzzle("abcd"))
        .unwrap()
        .with_sink(sink.clone());

    let order = vec!["a".to_string(), "other-puzzle-step".to_string()];
    v.validate(&order);
    v.validate(&order);
    assert_eq!(sink.len(), 2);
    assert_eq!(sink.mismatches()[0].invalid_ids, vec!["other-puzzle-step"]);
}

#[test]
fn disabling_mismatch_logging_still_returns_mismatch_result() {
    let mut config = ProofSeqConfig::default();
    config.observability.log_mismatches = false;
    let v = Validator::with_config(load_puzzle("abcd"), config).unwrap();
    let result = v.validate(&["ghost".to_string()]);
    assert_eq!(result.score, 0);
    assert_eq!(result.hints.len(), 1);
}
