//! Sequential assembly helpers: next expected fragment, strict placement,
//! and prefix progress.

use proofseq_core::models::PartialValidation;

/// Length of the leading run of `current` that matches `canonical`.
pub fn matching_prefix_len(canonical: &[String], current: &[String]) -> usize {
    current
        .iter()
        .zip(canonical)
        .take_while(|(found, expected)| found == expected)
        .count()
}

/// The canonical id that should be placed next.
///
/// `None` once `current` is at least as long as `canonical`. A fully
/// correct prefix yields the id right after it; otherwise the id at the
/// first divergence.
pub fn next_expected_block<'a>(canonical: &'a [String], current: &[String]) -> Option<&'a str> {
    if current.len() >= canonical.len() {
        return None;
    }
    let index = matching_prefix_len(canonical, current);
    canonical.get(index).map(String::as_str)
}

/// Strict left-to-right placement: `id` belongs at `position` and every
/// earlier slot of `current` already holds its canonical fragment.
pub fn can_place_block(canonical: &[String], id: &str, position: usize, current: &[String]) -> bool {
    match canonical.get(position) {
        Some(expected) if expected == id => canonical[..position]
            .iter()
            .enumerate()
            .all(|(i, want)| current.get(i) == Some(want)),
        _ => false,
    }
}

/// Prefix check for live feedback.
pub fn validate_partial(canonical: &[String], current: &[String]) -> PartialValidation {
    let correct_so_far = matching_prefix_len(canonical, current);
    let progress = if canonical.is_empty() {
        0.0
    } else {
        current.len() as f64 / canonical.len() as f64 * 100.0
    };

    PartialValidation {
        is_valid: current.len() <= canonical.len() && correct_so_far == current.len(),
        correct_so_far,
        next_expected: next_expected_block(canonical, current).map(str::to_string),
        progress,
    }
}
