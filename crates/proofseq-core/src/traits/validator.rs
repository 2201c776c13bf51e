use crate::models::{BlockIdValidation, PartialValidation, ValidationResult};

/// Proof-sequence validation bound to a single puzzle.
///
/// Every method is a pure function of the bound puzzle and its argument.
pub trait ISequenceValidator: Send + Sync {
    /// Id of the puzzle this validator is bound to.
    fn puzzle_id(&self) -> &str;

    /// Full validation: correctness, score, feedback text, and hints.
    fn validate(&self, learner_order: &[String]) -> ValidationResult;

    /// Partition an order by membership in the puzzle's fragment set.
    fn validate_block_ids(&self, learner_order: &[String]) -> BlockIdValidation;

    /// Prefix check for live feedback while the learner is still arranging.
    fn validate_partial(&self, current_order: &[String]) -> PartialValidation;

    /// The canonical id the learner should place next, if any.
    fn get_next_expected_block(&self, current_order: &[String]) -> Option<&str>;

    /// Whether `id` may be placed at `position` in strict left-to-right assembly.
    fn can_place_block(&self, id: &str, position: usize, current_order: &[String]) -> bool;
}
