/// Malformed puzzle reference data.
///
/// Raised at construction time only. A validator is never built from a
/// puzzle that fails these checks.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PuzzleError {
    #[error("puzzle {puzzle_id} has no fragments or an empty canonical order")]
    Empty { puzzle_id: String },

    #[error("puzzle {puzzle_id} contains a fragment with an empty id")]
    EmptyFragmentId { puzzle_id: String },

    #[error("canonical order lists {id} more than once")]
    DuplicateCanonicalId { id: String },

    #[error("fragment {id} is defined more than once")]
    DuplicateFragmentId { id: String },

    #[error("canonical order references unknown fragment {id}")]
    UnknownCanonicalId { id: String },

    #[error("fragment {id} does not appear in the canonical order")]
    UnplacedFragment { id: String },

    #[error("puzzle id {id} is used by more than one puzzle")]
    DuplicatePuzzleId { id: String },

    #[error("puzzle not found: {id}")]
    PuzzleNotFound { id: String },
}
