use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Live, incremental feedback for an in-progress arrangement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PartialValidation {
    /// The order exactly matches the canonical prefix of the same length.
    pub is_valid: bool,
    /// Length of the leading run that matches the canonical order.
    pub correct_so_far: usize,
    /// Next canonical id to place, or `None` once the order is full length.
    pub next_expected: Option<String>,
    /// Placed fragments as a percentage of the canonical length.
    pub progress: f64,
}
