//! Tests for the Validator: construction, guards, analysis, scoring,
//! feedback, hints, and the sequential assembly helpers.

use std::sync::Arc;

use proofseq_core::config::ProofSeqConfig;
use proofseq_core::errors::{ProofSeqError, PuzzleError};
use proofseq_core::models::{DuplicateBlock, Fragment, HintKind, MisplacedBlock, Puzzle};
use proofseq_core::traits::ISequenceValidator;
use proofseq_validation::diagnostics::RecordingSink;
use proofseq_validation::{feedback, outcomes, Validator};

fn ids(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn abcd() -> Puzzle {
    let fragments = ["a", "b", "c", "d"]
        .iter()
        .map(|id| Fragment::new(*id, format!("Step {}", id.to_uppercase())))
        .collect();
    Puzzle::new("abcd", fragments, ids(&["a", "b", "c", "d"]))
}

fn validator() -> Validator {
    Validator::new(abcd()).unwrap()
}

// ─── Construction ───

#[test]
fn construction_rejects_broken_bijection() {
    let mut puzzle = abcd();
    puzzle.canonical_order.pop();
    assert_eq!(
        Validator::new(puzzle).unwrap_err(),
        PuzzleError::UnplacedFragment { id: "d".into() }
    );
}

#[test]
fn construction_rejects_duplicate_canonical_ids() {
    let mut puzzle = abcd();
    puzzle.canonical_order = ids(&["a", "b", "b", "d"]);
    assert!(matches!(
        Validator::new(puzzle),
        Err(PuzzleError::DuplicateCanonicalId { .. })
    ));
}

#[test]
fn construction_rejects_empty_puzzle() {
    let puzzle = Puzzle::new("empty", vec![], vec![]);
    assert!(matches!(
        Validator::new(puzzle),
        Err(PuzzleError::Empty { .. })
    ));
}

#[test]
fn construction_rejects_invalid_config() {
    let mut config = ProofSeqConfig::default();
    config.hints.max_hints = 0;
    let err = Validator::with_config(abcd(), config).unwrap_err();
    assert!(matches!(err, ProofSeqError::Config(_)));
}

#[test]
fn validator_knows_its_puzzle() {
    let v = validator();
    assert!(v.is_bound_to("abcd"));
    assert!(!v.is_bound_to("other"));
    assert_eq!(ISequenceValidator::puzzle_id(&v), "abcd");
    assert_eq!(v.fragment("c").unwrap().content, "Step C");
    assert!(v.fragment("zz").is_none());
}

// ─── Guards ───

#[test]
fn empty_order_yields_fixed_prompt() {
    let result = validator().validate(&[]);
    assert!(!result.is_correct);
    assert_eq!(result.score, 0);
    assert_eq!(result.feedback_text, outcomes::EMPTY_ORDER_FEEDBACK);
    assert!(result.hints.is_empty());
    assert_eq!(result.details.total_blocks, 4);
    assert_eq!(result.details.user_blocks, 0);
}

#[test]
fn block_ids_are_partitioned_in_order() {
    let check = validator().validate_block_ids(&ids(&["a", "x", "b", "x"]));
    assert!(!check.is_valid);
    assert_eq!(check.valid_ids, ids(&["a", "b"]));
    assert_eq!(check.invalid_ids, ids(&["x", "x"]));

    let clean = validator().validate_block_ids(&ids(&["d", "a"]));
    assert!(clean.is_valid);
    assert!(clean.invalid_ids.is_empty());
}

#[test]
fn foreign_ids_short_circuit_and_are_reported() {
    let sink = Arc::new(RecordingSink::new());
    let v = validator().with_sink(sink.clone());

    let submitted = ids(&["a", "b", "c", "d", "q"]);
    let result = v.validate(&submitted);

    assert!(!result.is_correct);
    assert_eq!(result.score, 0);
    assert_eq!(result.feedback_text, outcomes::MISMATCH_FEEDBACK);
    assert_eq!(result.hints.len(), 1);
    assert_eq!(result.hints[0].kind, HintKind::Error);
    assert!(result.hints[0].payload.is_empty());
    assert!(result.details.correctly_positioned.is_empty());

    let events = sink.mismatches();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].puzzle_id, "abcd");
    assert_eq!(events[0].invalid_ids, ids(&["q"]));
    assert_eq!(events[0].submitted_order, submitted);
}

#[test]
fn valid_orders_emit_no_diagnostics() {
    let sink = Arc::new(RecordingSink::new());
    let v = validator().with_sink(sink.clone());
    v.validate(&ids(&["a", "c"]));
    v.validate(&[]);
    v.validate(&ids(&["a", "b", "c", "d"]));
    assert!(sink.is_empty());
}

// ─── Analysis, scoring, feedback ───

#[test]
fn correct_order_scores_full_marks() {
    let result = validator().validate(&ids(&["a", "b", "c", "d"]));
    assert!(result.is_correct);
    assert_eq!(result.score, 100);
    assert_eq!(result.feedback_text, feedback::CORRECT_FEEDBACK);
    assert!(result.hints.is_empty());
    assert!(result.details.is_complete);
    assert!(result.details.correct_sequence);
}

#[test]
fn swapped_pair_is_classified_per_position() {
    let result = validator().validate(&ids(&["a", "c", "b", "d"]));
    assert_eq!(result.score, 70);
    assert_eq!(
        result.details.incorrectly_positioned,
        vec![
            MisplacedBlock {
                id: "c".into(),
                position: 1,
                expected_id: "b".into()
            },
            MisplacedBlock {
                id: "b".into(),
                position: 2,
                expected_id: "c".into()
            },
        ]
    );
    let hint = &result.hints[0];
    assert_eq!(hint.kind, HintKind::Position);
    assert_eq!(hint.position, Some(2));
    assert_eq!(hint.related_fragment_id.as_deref(), Some("b"));
    assert_eq!(hint.payload, "Step B");
    assert!(hint.message.contains("Position 2"));
}

#[test]
fn duplicates_feed_text_not_score() {
    let result = validator().validate(&ids(&["a", "b", "c", "d", "a"]));
    assert_eq!(
        result.details.duplicates,
        vec![DuplicateBlock {
            id: "a".into(),
            position: 4
        }]
    );
    assert!(!result.details.is_complete);
    assert!(!result.is_correct);
    assert_eq!(result.details.correctly_positioned.len(), 4);
    assert!(result.feedback_text.contains("more than once"));
}

#[test]
fn prefix_next_hint_is_dropped_when_already_covered() {
    let result = validator().validate(&ids(&["a", "b"]));
    assert_eq!(result.score, 50);
    let kinds: Vec<HintKind> = result.hints.iter().map(|h| h.kind).collect();
    assert_eq!(kinds, vec![HintKind::Missing, HintKind::Missing]);
    assert!(result.hints.iter().all(|h| h.kind != HintKind::Next));
}

#[test]
fn next_pass_never_repeats_an_earlier_subject() {
    let v = validator();
    // A correct prefix points at the first missing id; a broken prefix points
    // at the first misplaced slot. Both subjects are taken by earlier passes.
    for order in [
        ids(&["a", "b", "c"]),
        ids(&["a", "b", "d"]),
        ids(&["a", "a"]),
        ids(&["c"]),
    ] {
        let result = v.validate(&order);
        assert!(
            result.hints.iter().all(|h| h.kind != HintKind::Next),
            "unexpected next hint for {order:?}"
        );
        let next = v.get_next_expected_block(&order).unwrap();
        assert!(result
            .hints
            .iter()
            .any(|h| h.related_fragment_id.as_deref() == Some(next)));
    }
}

#[test]
fn hint_cap_follows_config() {
    let mut config = ProofSeqConfig::default();
    config.hints.max_hints = 1;
    let v = Validator::with_config(abcd(), config).unwrap();
    let result = v.validate(&ids(&["b"]));
    assert_eq!(result.hints.len(), 1);
    assert_eq!(result.hints[0].kind, HintKind::Position);
}

#[test]
fn hint_cap_above_three_is_rejected() {
    let mut config = ProofSeqConfig::default();
    config.hints.max_hints = 6;
    let err = Validator::with_config(test_fixtures::synthetic_puzzle(10), config).unwrap_err();
    assert!(matches!(err, ProofSeqError::Config(_)));

    let v = Validator::new(test_fixtures::synthetic_puzzle(10)).unwrap();
    let result = v.validate(&ids(&["s9"]));
    assert!(result.hints.len() <= 3);
}

#[test]
fn scoring_weights_follow_config() {
    let mut config = ProofSeqConfig::default();
    config.scoring.position_weight = 100.0;
    config.scoring.presence_weight = 0.0;
    let v = Validator::with_config(abcd(), config).unwrap();
    assert_eq!(v.validate(&ids(&["a", "c", "b", "d"])).score, 50);
    assert_eq!(v.validate(&ids(&["d", "c", "b", "a"])).score, 0);
}

#[test]
fn extra_blocks_are_penalised_with_a_cap() {
    let v = validator();

    // Full correct order plus one foreign block: 60 + 40 - 5.
    let details = v.analyze(&ids(&["a", "b", "c", "d", "x"]));
    assert_eq!(details.extra_blocks, 1);
    assert!(!details.is_complete);
    assert_eq!(v.score(&details), 95);

    // Five foreign blocks: penalty capped at 20.
    let details = v.analyze(&ids(&["a", "b", "c", "d", "v", "w", "x", "y", "z"]));
    assert_eq!(details.extra_blocks, 5);
    assert_eq!(v.score(&details), 80);

    // Penalty never drives the score below zero.
    let details = v.analyze(&ids(&["v", "w", "x", "y", "z"]));
    assert_eq!(v.score(&details), 0);
}

#[test]
fn extra_clause_is_part_of_feedback() {
    let v = validator();
    let details = v.analyze(&ids(&["a", "x"]));
    let text = feedback::generate_feedback(&details);
    assert_eq!(
        text,
        "You are missing 3 blocks. You have 1 block that does not belong to this proof. \
         1 block is in the wrong position. 1 block is correctly positioned."
    );
}

#[test]
fn feedback_falls_back_to_keep_working() {
    let v = validator();
    let details = v.analyze(&[]);
    // Only the missing clause applies to an empty analysis.
    assert_eq!(feedback::generate_feedback(&details), "You are missing 4 blocks.");

    let mut bare = details.clone();
    bare.missing_blocks = 0;
    assert_eq!(
        feedback::generate_feedback(&bare),
        feedback::KEEP_WORKING_FEEDBACK
    );
}

#[test]
fn validate_is_idempotent() {
    let v = validator();
    let order = ids(&["c", "a", "b"]);
    assert_eq!(v.validate(&order), v.validate(&order));
}

// ─── Sequential assembly ───

#[test]
fn next_expected_block_follows_prefix() {
    let v = validator();
    assert_eq!(v.get_next_expected_block(&[]), Some("a"));
    assert_eq!(v.get_next_expected_block(&ids(&["a", "b"])), Some("c"));
    assert_eq!(v.get_next_expected_block(&ids(&["a", "c"])), Some("b"));
    assert_eq!(v.get_next_expected_block(&ids(&["a", "b", "c", "d"])), None);
    assert_eq!(v.get_next_expected_block(&ids(&["d", "c", "b", "a"])), None);
}

#[test]
fn can_place_block_requires_solved_prefix() {
    let v = validator();
    assert!(v.can_place_block("a", 0, &[]));
    assert!(!v.can_place_block("b", 0, &[]));
    assert!(v.can_place_block("c", 2, &ids(&["a", "b"])));
    assert!(!v.can_place_block("c", 2, &ids(&["b", "a"])));
    assert!(!v.can_place_block("c", 2, &ids(&["a"])));
    assert!(!v.can_place_block("d", 4, &ids(&["a", "b", "c", "d"])));
}

#[test]
fn partial_validation_reports_progress() {
    let v = validator();

    let partial = v.validate_partial(&ids(&["a", "b"]));
    assert!(partial.is_valid);
    assert_eq!(partial.correct_so_far, 2);
    assert_eq!(partial.next_expected.as_deref(), Some("c"));
    assert!((partial.progress - 50.0).abs() < f64::EPSILON);

    let off_track = v.validate_partial(&ids(&["a", "c", "b"]));
    assert!(!off_track.is_valid);
    assert_eq!(off_track.correct_so_far, 1);
    assert_eq!(off_track.next_expected.as_deref(), Some("b"));
    assert!((off_track.progress - 75.0).abs() < f64::EPSILON);

    let done = v.validate_partial(&ids(&["a", "b", "c", "d"]));
    assert!(done.is_valid);
    assert!(done.next_expected.is_none());
    assert!((done.progress - 100.0).abs() < f64::EPSILON);

    let empty = v.validate_partial(&[]);
    assert!(empty.is_valid);
    assert_eq!(empty.correct_so_far, 0);
    assert_eq!(empty.progress, 0.0);
}

#[test]
fn validator_can_be_shared_across_threads() {
    let v = Arc::new(validator());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let v = Arc::clone(&v);
            std::thread::spawn(move || v.validate(&ids(&["a", "c", "b", "d"])).score)
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), 70);
    }
}

#[test]
fn trait_object_delegates_to_validator() {
    let v: Box<dyn ISequenceValidator> = Box::new(validator());
    assert_eq!(v.validate(&ids(&["a", "b", "c", "d"])).score, 100);
    assert_eq!(v.get_next_expected_block(&ids(&["a"])), Some("b"));
    assert!(v.can_place_block("b", 1, &ids(&["a"])));
    assert!(v.validate_partial(&ids(&["a"])).is_valid);
    assert!(!v.validate_block_ids(&ids(&["nope"])).is_valid);
}
