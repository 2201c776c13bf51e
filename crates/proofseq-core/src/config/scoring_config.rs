use serde::{Deserialize, Serialize};

use super::defaults;

/// Partial-credit scoring weights.
///
/// Position accuracy and fragment presence are weighted separately. Their
/// sum is capped at 100 so the score stays within 0..=100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Points available for fragments at their canonical index.
    pub position_weight: f64,
    /// Points available for fragments present anywhere in the order.
    pub presence_weight: f64,
    /// Points deducted per fragment foreign to the canonical order.
    pub extra_penalty_per_block: f64,
    /// Upper bound on the total extra-fragment deduction.
    pub extra_penalty_cap: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            position_weight: defaults::DEFAULT_POSITION_WEIGHT,
            presence_weight: defaults::DEFAULT_PRESENCE_WEIGHT,
            extra_penalty_per_block: defaults::DEFAULT_EXTRA_PENALTY_PER_BLOCK,
            extra_penalty_cap: defaults::DEFAULT_EXTRA_PENALTY_CAP,
        }
    }
}
