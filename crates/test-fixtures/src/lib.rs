//! Test fixture loader for proofseq puzzles and golden validation scenarios.
//!
//! Provides typed deserialization of the fixture JSON files and helper
//! functions for loading them in tests across crates.

use proofseq_core::models::{Fragment, Puzzle};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = load_fixture_text(relative_path);
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as raw text.
pub fn load_fixture_text(relative_path: &str) -> String {
    let path = fixtures_root().join(relative_path);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// List all JSON files in a fixture subdirectory.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                Some(path)
            } else {
                None
            }
        })
        .collect();
    files.sort();
    files
}

/// Load a single puzzle from `puzzles/`.
pub fn load_puzzle(name: &str) -> Puzzle {
    load_fixture(&format!("puzzles/{name}.json"))
}

/// A golden file: one puzzle and the expected outcome of several learner orders.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoldenScenario {
    pub description: String,
    /// Name of a file in `puzzles/`, without extension.
    pub puzzle: String,
    pub cases: Vec<GoldenCase>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoldenCase {
    pub name: String,
    pub learner_order: Vec<String>,
    pub expected: ExpectedOutcome,
}

/// Fields a golden case pins down. Absent optional fields are not checked.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpectedOutcome {
    pub is_correct: bool,
    pub score: u8,
    #[serde(default)]
    pub correctly_positioned: Option<usize>,
    #[serde(default)]
    pub incorrectly_positioned: Option<usize>,
    #[serde(default)]
    pub missing_blocks: Option<usize>,
    #[serde(default)]
    pub duplicates: Option<Vec<ExpectedDuplicate>>,
    /// `[kind, fragment id]` pairs, in rank order. Empty id for error hints.
    pub hints: Vec<(String, String)>,
    #[serde(default)]
    pub feedback_text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExpectedDuplicate {
    pub id: String,
    pub position: usize,
}

/// Load a golden scenario from `golden/`.
pub fn load_golden(name: &str) -> GoldenScenario {
    load_fixture(&format!("golden/{name}.json"))
}

/// A well-formed puzzle of `n` fragments `s0..s{n-1}` in canonical order.
pub fn synthetic_puzzle(n: usize) -> Puzzle {
    let ids: Vec<String> = (0..n).map(|i| format!("s{i}")).collect();
    let fragments = ids
        .iter()
        .enumerate()
        .map(|(i, id)| Fragment::new(id.clone(), format!("Step {}", i + 1)))
        .collect();
    Puzzle::new(format!("synthetic-{n}"), fragments, ids)
}
