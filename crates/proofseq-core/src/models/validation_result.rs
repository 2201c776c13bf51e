use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::Hint;

/// Outcome of validating one learner order. Immutable once returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// The order is complete and every position matches the canonical order.
    pub is_correct: bool,
    /// Partial-credit score, 0..=100.
    pub score: u8,
    pub feedback_text: String,
    pub details: AnalysisDetails,
    /// Ranked hints; never more than the configured cap, never two for the
    /// same fragment.
    pub hints: Vec<Hint>,
}

/// Counts and per-position classification derived from a learner order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisDetails {
    /// Length of the canonical order.
    pub total_blocks: usize,
    /// Length of the learner order.
    pub user_blocks: usize,
    /// Distinct learner ids that belong to the canonical order.
    pub correct_blocks: usize,
    /// Distinct learner ids that do not belong to the canonical order.
    pub extra_blocks: usize,
    /// Canonical ids absent from the learner order.
    pub missing_blocks: usize,
    pub is_complete: bool,
    pub correct_sequence: bool,
    pub correctly_positioned: Vec<PositionedBlock>,
    pub incorrectly_positioned: Vec<MisplacedBlock>,
    pub duplicates: Vec<DuplicateBlock>,
    /// Missing ids, in canonical order.
    pub missing_ids: Vec<String>,
    /// Extra ids, in first-seen order.
    pub extra_ids: Vec<String>,
}

impl AnalysisDetails {
    /// Details for a submission that was not analysed (empty or mismatched).
    pub fn unanalysed(total_blocks: usize, user_blocks: usize) -> Self {
        Self {
            total_blocks,
            user_blocks,
            ..Self::default()
        }
    }
}

/// A fragment sitting at its canonical index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PositionedBlock {
    pub id: String,
    /// 0-indexed.
    pub position: usize,
}

/// A fragment at an index that canonically holds a different fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct MisplacedBlock {
    pub id: String,
    /// 0-indexed.
    pub position: usize,
    pub expected_id: String,
}

/// A repeated occurrence of a fragment already placed earlier in the order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DuplicateBlock {
    pub id: String,
    /// 0-indexed position of the repeat.
    pub position: usize,
}
