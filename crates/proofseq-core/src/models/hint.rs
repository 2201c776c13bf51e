use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// What a hint is pointing the learner at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum HintKind {
    /// A position holds the wrong fragment; shows the one that belongs there.
    Position,
    /// A canonical fragment is absent from the learner's order.
    Missing,
    /// The fragment that should come next.
    Next,
    /// The submission could not be analysed.
    Error,
}

impl HintKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            HintKind::Position => "position",
            HintKind::Missing => "missing",
            HintKind::Next => "next",
            HintKind::Error => "error",
        }
    }
}

/// A single remediation hint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Hint {
    pub kind: HintKind,
    pub message: String,
    /// Content of the target fragment, or empty for `Error` hints.
    pub payload: String,
    pub related_fragment_id: Option<String>,
    /// 1-indexed display position, set on `Position` hints.
    pub position: Option<usize>,
}

impl Hint {
    /// Hint that carries no fragment.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: HintKind::Error,
            message: message.into(),
            payload: String::new(),
            related_fragment_id: None,
            position: None,
        }
    }
}
