use serde::{Deserialize, Serialize};

use super::defaults;

/// Hint generation configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HintConfig {
    /// Maximum number of hints returned per validation, at most
    /// [`MAX_HINTS`](crate::constants::MAX_HINTS).
    pub max_hints: usize,
}

impl Default for HintConfig {
    fn default() -> Self {
        Self {
            max_hints: defaults::DEFAULT_MAX_HINTS,
        }
    }
}
