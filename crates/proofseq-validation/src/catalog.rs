//! PuzzleCatalog — immutable, id-keyed puzzle reference data.
//!
//! Every puzzle is checked at load time, so a catalog only ever hands out
//! validators for well-formed puzzles.

use std::collections::HashMap;

use serde::Deserialize;

use proofseq_core::config::ProofSeqConfig;
use proofseq_core::errors::{ProofSeqResult, PuzzleError};
use proofseq_core::models::Puzzle;

use crate::diagnostics::events;
use crate::engine::Validator;

/// On-disk layout: `{ "puzzles": [...] }` in JSON, `[[puzzles]]` in TOML.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    puzzles: Vec<Puzzle>,
}

/// A set of puzzles keyed by id, in load order.
#[derive(Debug, Clone, Default)]
pub struct PuzzleCatalog {
    puzzles: Vec<Puzzle>,
    index: HashMap<String, usize>,
}

impl PuzzleCatalog {
    /// Build a catalog, rejecting malformed puzzles and duplicate ids.
    pub fn from_puzzles(puzzles: Vec<Puzzle>) -> Result<Self, PuzzleError> {
        let mut index = HashMap::with_capacity(puzzles.len());
        for (i, puzzle) in puzzles.iter().enumerate() {
            puzzle.validate()?;
            if index.insert(puzzle.id.clone(), i).is_some() {
                return Err(PuzzleError::DuplicatePuzzleId {
                    id: puzzle.id.clone(),
                });
            }
        }
        events::catalog_loaded(puzzles.len());
        Ok(Self { puzzles, index })
    }

    pub fn from_json(input: &str) -> ProofSeqResult<Self> {
        let file: CatalogFile = serde_json::from_str(input)?;
        Ok(Self::from_puzzles(file.puzzles)?)
    }

    pub fn from_toml(input: &str) -> ProofSeqResult<Self> {
        let file: CatalogFile = toml::from_str(input)?;
        Ok(Self::from_puzzles(file.puzzles)?)
    }

    pub fn get(&self, id: &str) -> Option<&Puzzle> {
        self.index.get(id).and_then(|&i| self.puzzles.get(i))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Puzzle ids in load order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.puzzles.iter().map(|p| p.id.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Puzzle> {
        self.puzzles.iter()
    }

    pub fn len(&self) -> usize {
        self.puzzles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.puzzles.is_empty()
    }

    /// Build a fresh validator for the puzzle with `id`.
    pub fn validator_for(&self, id: &str, config: &ProofSeqConfig) -> ProofSeqResult<Validator> {
        let puzzle = self
            .get(id)
            .ok_or_else(|| PuzzleError::PuzzleNotFound { id: id.to_string() })?;
        Validator::with_config(puzzle.clone(), config.clone())
    }
}
