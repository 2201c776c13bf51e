//! Fragment-id membership guard.

use std::collections::HashMap;

use proofseq_core::models::BlockIdValidation;

/// Partition `learner_order` by membership in `known_ids`, preserving order
/// and duplicates.
pub fn partition<V>(known_ids: &HashMap<String, V>, learner_order: &[String]) -> BlockIdValidation {
    let (valid_ids, invalid_ids): (Vec<String>, Vec<String>) = learner_order
        .iter()
        .cloned()
        .partition(|id| known_ids.contains_key(id));

    BlockIdValidation {
        is_valid: invalid_ids.is_empty(),
        invalid_ids,
        valid_ids,
    }
}
