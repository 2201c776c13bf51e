use std::sync::{Mutex, PoisonError};

use proofseq_core::models::MismatchEvent;
use proofseq_core::traits::IDiagnosticSink;

use super::events;

/// Forwards diagnostics to `tracing`. The default sink.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl IDiagnosticSink for TracingSink {
    fn puzzle_mismatch(&self, event: &MismatchEvent) {
        events::puzzle_mismatch(event);
    }
}

/// Discards diagnostics.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl IDiagnosticSink for NoopSink {
    fn puzzle_mismatch(&self, _event: &MismatchEvent) {}
}

/// Keeps every mismatch event in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    mismatches: Mutex<Vec<MismatchEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded events, oldest first.
    pub fn mismatches(&self) -> Vec<MismatchEvent> {
        self.mismatches
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.mismatches
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl IDiagnosticSink for RecordingSink {
    fn puzzle_mismatch(&self, event: &MismatchEvent) {
        self.mismatches
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event.clone());
    }
}
