//! Data model: puzzle reference data in, validation results out.

mod block_id_validation;
mod fragment;
mod hint;
mod mismatch_event;
mod partial_validation;
mod puzzle;
mod validation_result;

pub use block_id_validation::BlockIdValidation;
pub use fragment::Fragment;
pub use hint::{Hint, HintKind};
pub use mismatch_event::MismatchEvent;
pub use partial_validation::PartialValidation;
pub use puzzle::Puzzle;
pub use validation_result::{
    AnalysisDetails, DuplicateBlock, MisplacedBlock, PositionedBlock, ValidationResult,
};
