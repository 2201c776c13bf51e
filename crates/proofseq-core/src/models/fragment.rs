use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One atomic, orderable unit of a proof: a step, premise, or justification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Fragment {
    /// Unique within its puzzle.
    pub id: String,
    /// Displayable payload. Opaque to the engine.
    pub content: String,
}

impl Fragment {
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
        }
    }
}
