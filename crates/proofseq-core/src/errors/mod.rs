//! Error types.
//!
//! Each subsystem has its own error enum; all of them convert into
//! [`ProofSeqError`] via `From`.

mod config_error;
mod puzzle_error;

pub use config_error::ConfigError;
pub use puzzle_error::PuzzleError;

/// Top-level error for every fallible proofseq operation.
#[derive(Debug, thiserror::Error)]
pub enum ProofSeqError {
    #[error("invalid puzzle: {0}")]
    Puzzle(#[from] PuzzleError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("toml deserialization error: {0}")]
    TomlDeserialization(#[from] toml::de::Error),
}

pub type ProofSeqResult<T> = Result<T, ProofSeqError>;
