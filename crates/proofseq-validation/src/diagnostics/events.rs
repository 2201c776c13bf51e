//! Structured log events.
//!
//! Each function emits a `tracing` event with structured fields.

use proofseq_core::models::MismatchEvent;

/// Log a learner order that referenced fragments from another puzzle.
pub fn puzzle_mismatch(event: &MismatchEvent) {
    tracing::warn!(
        event = "puzzle_mismatch",
        puzzle_id = %event.puzzle_id,
        invalid_ids = ?event.invalid_ids,
        submitted_order = ?event.submitted_order,
        "learner order does not match the bound puzzle"
    );
}

/// Log a catalog load.
pub fn catalog_loaded(puzzle_count: usize) {
    tracing::debug!(
        event = "catalog_loaded",
        puzzle_count = puzzle_count,
        "puzzle catalog loaded"
    );
}
