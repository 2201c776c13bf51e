use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Partition of a learner order by membership in the puzzle's fragment set.
///
/// Both lists preserve submission order and keep duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BlockIdValidation {
    /// True when no id is foreign to the puzzle.
    pub is_valid: bool,
    pub invalid_ids: Vec<String>,
    pub valid_ids: Vec<String>,
}
