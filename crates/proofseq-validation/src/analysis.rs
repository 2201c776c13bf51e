//! Sequence analysis: compares a learner order against the canonical order.
//!
//! Presence counts are set-based (distinct ids); positional classification
//! covers `min(|learner|, |canonical|)` indices.

use std::collections::HashSet;

use proofseq_core::models::{AnalysisDetails, DuplicateBlock, MisplacedBlock, PositionedBlock};

/// Analyse `learner_order` against `canonical`.
///
/// Foreign ids are tolerated here and counted as extra blocks; the
/// validator filters them out before this point.
pub fn analyze(canonical: &[String], learner_order: &[String]) -> AnalysisDetails {
    let canonical_ids: HashSet<&str> = canonical.iter().map(String::as_str).collect();
    let learner_ids: HashSet<&str> = learner_order.iter().map(String::as_str).collect();

    let correct_blocks = learner_ids
        .iter()
        .filter(|id| canonical_ids.contains(*id))
        .count();

    let mut seen_extra: HashSet<&str> = HashSet::new();
    let extra_ids: Vec<String> = learner_order
        .iter()
        .filter(|id| !canonical_ids.contains(id.as_str()) && seen_extra.insert(id.as_str()))
        .cloned()
        .collect();

    let missing_ids: Vec<String> = canonical
        .iter()
        .filter(|id| !learner_ids.contains(id.as_str()))
        .cloned()
        .collect();

    let is_complete =
        learner_order.len() == canonical.len() && missing_ids.is_empty() && extra_ids.is_empty();

    let mut correctly_positioned = Vec::new();
    let mut incorrectly_positioned = Vec::new();
    for (position, (found, expected)) in learner_order.iter().zip(canonical).enumerate() {
        if found == expected {
            correctly_positioned.push(PositionedBlock {
                id: found.clone(),
                position,
            });
        } else {
            incorrectly_positioned.push(MisplacedBlock {
                id: found.clone(),
                position,
                expected_id: expected.clone(),
            });
        }
    }

    // Complete implies equal lengths, so the zip above covered every index.
    let correct_sequence = is_complete && incorrectly_positioned.is_empty();

    AnalysisDetails {
        total_blocks: canonical.len(),
        user_blocks: learner_order.len(),
        correct_blocks,
        extra_blocks: extra_ids.len(),
        missing_blocks: missing_ids.len(),
        is_complete,
        correct_sequence,
        correctly_positioned,
        incorrectly_positioned,
        duplicates: find_duplicates(learner_order),
        missing_ids,
        extra_ids,
    }
}

/// Every occurrence of an id after its first, with its position.
fn find_duplicates(learner_order: &[String]) -> Vec<DuplicateBlock> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(learner_order.len());
    learner_order
        .iter()
        .enumerate()
        .filter(|(_, id)| !seen.insert(id.as_str()))
        .map(|(position, id)| DuplicateBlock {
            id: id.clone(),
            position,
        })
        .collect()
}
