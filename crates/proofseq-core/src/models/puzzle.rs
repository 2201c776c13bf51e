use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::{ProofSeqResult, PuzzleError};
use crate::models::Fragment;

/// Immutable puzzle reference data: a fragment catalog and the single
/// correct ordering of it.
///
/// Invariant (checked by [`Puzzle::validate`]): `canonical_order` and the
/// fragment ids are a bijection, with no duplicates and no empty ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Puzzle {
    pub id: String,
    /// Display metadata, opaque to the engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub description: Option<String>,
    pub fragments: Vec<Fragment>,
    pub canonical_order: Vec<String>,
}

impl Puzzle {
    pub fn new(
        id: impl Into<String>,
        fragments: Vec<Fragment>,
        canonical_order: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: None,
            description: None,
            fragments,
            canonical_order,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Parse a single puzzle from JSON and check its invariants.
    pub fn from_json(input: &str) -> ProofSeqResult<Self> {
        let puzzle: Self = serde_json::from_str(input)?;
        puzzle.validate()?;
        Ok(puzzle)
    }

    /// Number of fragments in the canonical order.
    pub fn len(&self) -> usize {
        self.canonical_order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.canonical_order.is_empty()
    }

    /// Look up a fragment by id.
    pub fn fragment(&self, id: &str) -> Option<&Fragment> {
        self.fragments.iter().find(|f| f.id == id)
    }

    /// Check the bijection between the fragment catalog and the canonical order.
    pub fn validate(&self) -> Result<(), PuzzleError> {
        if self.fragments.is_empty() || self.canonical_order.is_empty() {
            return Err(PuzzleError::Empty {
                puzzle_id: self.id.clone(),
            });
        }

        let mut fragment_ids: HashSet<&str> = HashSet::with_capacity(self.fragments.len());
        for fragment in &self.fragments {
            if fragment.id.is_empty() {
                return Err(PuzzleError::EmptyFragmentId {
                    puzzle_id: self.id.clone(),
                });
            }
            if !fragment_ids.insert(fragment.id.as_str()) {
                return Err(PuzzleError::DuplicateFragmentId {
                    id: fragment.id.clone(),
                });
            }
        }

        let mut placed: HashSet<&str> = HashSet::with_capacity(self.canonical_order.len());
        for id in &self.canonical_order {
            if !placed.insert(id.as_str()) {
                return Err(PuzzleError::DuplicateCanonicalId { id: id.clone() });
            }
            if !fragment_ids.contains(id.as_str()) {
                return Err(PuzzleError::UnknownCanonicalId { id: id.clone() });
            }
        }

        if let Some(unplaced) = self
            .fragments
            .iter()
            .find(|f| !placed.contains(f.id.as_str()))
        {
            return Err(PuzzleError::UnplacedFragment {
                id: unplaced.id.clone(),
            });
        }

        Ok(())
    }
}
