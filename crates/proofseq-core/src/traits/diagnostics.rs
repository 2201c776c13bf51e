use crate::models::MismatchEvent;

/// Receives diagnostic events from the validator.
///
/// Injected at construction so the engine itself stays free of side
/// effects; tests swap in a recording sink.
pub trait IDiagnosticSink: Send + Sync {
    /// A learner order referenced fragments foreign to the bound puzzle.
    fn puzzle_mismatch(&self, event: &MismatchEvent);
}
