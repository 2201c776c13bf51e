use std::collections::HashSet;
use std::sync::Arc;

use proofseq_core::models::HintKind;
use proofseq_validation::diagnostics::NoopSink;
use proofseq_validation::Validator;
use proptest::prelude::*;
use test_fixtures::synthetic_puzzle;

fn validator(n: usize) -> Validator {
    Validator::new(synthetic_puzzle(n))
        .unwrap()
        .with_sink(Arc::new(NoopSink))
}

fn canonical(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("s{i}")).collect()
}

/// Arbitrary learner order over the puzzle's own ids: any length, repeats allowed.
fn arb_order(n: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec((0..n).prop_map(|i| format!("s{i}")), 0..(n + 4))
}

// ── Identity: the canonical order is always correct ──────────────────────

proptest! {
    #[test]
    fn canonical_order_is_correct(n in 1usize..40) {
        let result = validator(n).validate(&canonical(n));
        prop_assert!(result.is_correct);
        prop_assert_eq!(result.score, 100);
        prop_assert!(result.hints.is_empty());
    }
}

// ── Empty input never errors ─────────────────────────────────────────────

proptest! {
    #[test]
    fn empty_order_scores_zero(n in 1usize..40) {
        let result = validator(n).validate(&[]);
        prop_assert!(!result.is_correct);
        prop_assert_eq!(result.score, 0);
        prop_assert!(result.hints.is_empty());
    }
}

// ── Idempotence ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn validate_is_pure(order in arb_order(8)) {
        let v = validator(8);
        prop_assert_eq!(v.validate(&order), v.validate(&order));
    }
}

// ── Adjacent swap breaks a perfect score ─────────────────────────────────

proptest! {
    #[test]
    fn adjacent_swap_drops_below_full_marks(n in 2usize..40, at in 0usize..39) {
        let i = at % (n - 1);
        let mut order = canonical(n);
        order.swap(i, i + 1);
        let result = validator(n).validate(&order);
        prop_assert!(!result.is_correct);
        prop_assert!(result.score < 100, "score {} for swap at {}", result.score, i);
    }
}

// ── Foreign ids always short-circuit ─────────────────────────────────────

proptest! {
    #[test]
    fn foreign_id_yields_single_error_hint(
        order in arb_order(6),
        foreign in "[a-z]{1,6}",
        insert_at in 0usize..12,
    ) {
        let mut order = order;
        let at = insert_at.min(order.len());
        order.insert(at, format!("x-{foreign}"));

        let result = validator(6).validate(&order);
        prop_assert!(!result.is_correct);
        prop_assert_eq!(result.score, 0);
        prop_assert_eq!(result.hints.len(), 1);
        prop_assert_eq!(result.hints[0].kind, HintKind::Error);
    }
}

// ── Hint cap and uniqueness ──────────────────────────────────────────────

proptest! {
    #[test]
    fn hints_are_capped_and_distinct(order in arb_order(10)) {
        let result = validator(10).validate(&order);
        prop_assert!(result.hints.len() <= 3);

        let mut seen = HashSet::new();
        for hint in &result.hints {
            if let Some(id) = &hint.related_fragment_id {
                prop_assert!(seen.insert(id.clone()), "fragment {} hinted twice", id);
            }
        }
    }

    #[test]
    fn score_stays_in_range(order in arb_order(10)) {
        let result = validator(10).validate(&order);
        prop_assert!(result.score <= 100);
        prop_assert_eq!(result.is_correct, result.details.correct_sequence);
        if result.is_correct {
            prop_assert_eq!(result.score, 100);
        }
    }
}

// ── Sequential helpers agree with each other ─────────────────────────────

proptest! {
    #[test]
    fn next_expected_block_is_always_placeable_on_a_correct_prefix(n in 1usize..30, len in 0usize..30) {
        let len = len % n;
        let v = validator(n);
        let prefix: Vec<String> = canonical(n).into_iter().take(len).collect();
        let want = format!("s{len}");
        prop_assert_eq!(v.get_next_expected_block(&prefix), Some(want.as_str()));
        prop_assert!(v.can_place_block(&want, len, &prefix));
        let partial = v.validate_partial(&prefix);
        prop_assert!(partial.is_valid);
        prop_assert_eq!(partial.correct_so_far, len);
    }
}
