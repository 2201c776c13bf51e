//! # proofseq-core
//!
//! Foundation crate for the proofseq proof-ordering engine.
//! Defines the puzzle data model, validation result types, traits, errors,
//! config, and constants. The validation engine depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::ProofSeqConfig;
pub use errors::{ProofSeqError, ProofSeqResult, PuzzleError};
pub use models::{Fragment, Hint, HintKind, Puzzle, ValidationResult};
