use serde::{Deserialize, Serialize};

/// Diagnostic record emitted when a learner order carries ids foreign to
/// the bound puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MismatchEvent {
    pub puzzle_id: String,
    pub invalid_ids: Vec<String>,
    pub submitted_order: Vec<String>,
}
