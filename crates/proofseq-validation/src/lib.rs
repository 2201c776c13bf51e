//! # proofseq-validation
//!
//! Proof-sequence validation and feedback. A [`Validator`] is bound to one
//! puzzle and turns a learner's arrangement of proof fragments into a
//! [`ValidationResult`](proofseq_core::ValidationResult).
//!
//! ## Pipeline
//! 1. **Guard** — empty orders and orders with foreign ids short-circuit to
//!    fixed outcomes
//! 2. **Analysis** — counts, per-position classification, duplicates
//! 3. **Scoring** — position and presence weighted partial credit
//! 4. **Feedback** — clauses composed in fixed precedence
//! 5. **Hints** — ranked, capped, never repeating a fragment
//!
//! Sequential assembly helpers (`can_place_block`, `get_next_expected_block`,
//! `validate_partial`) sit beside the pipeline and share no state with it.

pub mod analysis;
pub mod catalog;
pub mod diagnostics;
pub mod engine;
pub mod feedback;
pub mod hints;
pub mod membership;
pub mod outcomes;
pub mod scoring;
pub mod sequencing;

pub use catalog::PuzzleCatalog;
pub use engine::Validator;
