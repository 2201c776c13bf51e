//! Fixed results for submissions that are not analysed.

use proofseq_core::constants::MIN_SCORE;
use proofseq_core::models::{AnalysisDetails, Hint, ValidationResult};

pub const EMPTY_ORDER_FEEDBACK: &str = "Please arrange the blocks to build your proof.";
pub const MISMATCH_FEEDBACK: &str =
    "These blocks do not belong to the current puzzle. Please reload the puzzle and try again.";
pub const MISMATCH_HINT: &str =
    "Some blocks are from a different puzzle. Refresh the workspace to continue.";

/// Nothing has been placed yet.
pub fn empty_order(total_blocks: usize) -> ValidationResult {
    ValidationResult {
        is_correct: false,
        score: MIN_SCORE,
        feedback_text: EMPTY_ORDER_FEEDBACK.to_string(),
        details: AnalysisDetails::unanalysed(total_blocks, 0),
        hints: Vec::new(),
    }
}

/// The order references fragments foreign to the bound puzzle.
pub fn puzzle_mismatch(total_blocks: usize, user_blocks: usize) -> ValidationResult {
    ValidationResult {
        is_correct: false,
        score: MIN_SCORE,
        feedback_text: MISMATCH_FEEDBACK.to_string(),
        details: AnalysisDetails::unanalysed(total_blocks, user_blocks),
        hints: vec![Hint::error(MISMATCH_HINT)],
    }
}
