//! Validator — implements ISequenceValidator for one puzzle: guards the
//! input, runs analysis, scores, composes feedback, and ranks hints.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use proofseq_core::config::ProofSeqConfig;
use proofseq_core::errors::{ProofSeqResult, PuzzleError};
use proofseq_core::models::{
    AnalysisDetails, BlockIdValidation, Fragment, MismatchEvent, PartialValidation, Puzzle,
    ValidationResult,
};
use proofseq_core::traits::{IDiagnosticSink, ISequenceValidator};

use crate::diagnostics::{NoopSink, TracingSink};
use crate::hints::HintContext;
use crate::{analysis, feedback, hints, membership, outcomes, scoring, sequencing};

/// Proof-sequence validator bound to a single, immutable puzzle.
///
/// Holds no per-call state, so one instance can serve concurrent callers.
/// When the learner switches puzzles the caller builds a new validator;
/// use [`Validator::is_bound_to`] to decide.
pub struct Validator {
    puzzle: Puzzle,
    /// Fragment id → index into `puzzle.fragments`.
    fragment_index: HashMap<String, usize>,
    config: ProofSeqConfig,
    sink: Arc<dyn IDiagnosticSink>,
}

impl Validator {
    /// Bind a validator to `puzzle` with the default configuration.
    pub fn new(puzzle: Puzzle) -> Result<Self, PuzzleError> {
        puzzle.validate()?;
        Ok(Self::bind(puzzle, ProofSeqConfig::default()))
    }

    /// Bind a validator to `puzzle` with a custom configuration.
    ///
    /// Mismatch diagnostics go to `tracing` unless
    /// `observability.log_mismatches` is off.
    pub fn with_config(puzzle: Puzzle, config: ProofSeqConfig) -> ProofSeqResult<Self> {
        config.validate()?;
        puzzle.validate()?;
        Ok(Self::bind(puzzle, config))
    }

    /// Replace the diagnostic sink.
    pub fn with_sink(mut self, sink: Arc<dyn IDiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    fn bind(puzzle: Puzzle, config: ProofSeqConfig) -> Self {
        let fragment_index = puzzle
            .fragments
            .iter()
            .enumerate()
            .map(|(i, f)| (f.id.clone(), i))
            .collect();
        let sink: Arc<dyn IDiagnosticSink> = if config.observability.log_mismatches {
            Arc::new(TracingSink)
        } else {
            Arc::new(NoopSink)
        };
        Self {
            puzzle,
            fragment_index,
            config,
            sink,
        }
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    pub fn config(&self) -> &ProofSeqConfig {
        &self.config
    }

    /// Whether this validator serves the puzzle with the given id.
    pub fn is_bound_to(&self, puzzle_id: &str) -> bool {
        self.puzzle.id == puzzle_id
    }

    pub fn fragment(&self, id: &str) -> Option<&Fragment> {
        self.fragment_index
            .get(id)
            .and_then(|&i| self.puzzle.fragments.get(i))
    }

    fn fragment_content(&self, id: &str) -> Option<&str> {
        self.fragment(id).map(|f| f.content.as_str())
    }

    /// Sequence analysis without the foreign-id guard.
    ///
    /// Foreign ids are reported as extra blocks instead of short-circuiting.
    pub fn analyze(&self, learner_order: &[String]) -> AnalysisDetails {
        analysis::analyze(&self.puzzle.canonical_order, learner_order)
    }

    /// Score an analysis with this validator's weights.
    pub fn score(&self, details: &AnalysisDetails) -> u8 {
        scoring::calculate_score(details, &self.config.scoring)
    }

    /// Full validation of a learner order.
    pub fn validate(&self, learner_order: &[String]) -> ValidationResult {
        let total_blocks = self.puzzle.len();
        if learner_order.is_empty() {
            return outcomes::empty_order(total_blocks);
        }

        let check = self.validate_block_ids(learner_order);
        if !check.is_valid {
            self.sink.puzzle_mismatch(&MismatchEvent {
                puzzle_id: self.puzzle.id.clone(),
                invalid_ids: check.invalid_ids,
                submitted_order: learner_order.to_vec(),
            });
            return outcomes::puzzle_mismatch(total_blocks, learner_order.len());
        }

        let details = self.analyze(learner_order);
        let score = self.score(&details);
        let feedback_text = feedback::generate_feedback(&details);

        let content = |id: &str| self.fragment_content(id);
        let hints = hints::generate_hints(&HintContext {
            canonical: &self.puzzle.canonical_order,
            learner_order,
            details: &details,
            fragment_content: &content,
            max_hints: self.config.hints.max_hints,
        });

        ValidationResult {
            is_correct: details.correct_sequence,
            score,
            feedback_text,
            details,
            hints,
        }
    }

    /// Partition an order by membership in the puzzle's fragment set.
    pub fn validate_block_ids(&self, learner_order: &[String]) -> BlockIdValidation {
        membership::partition(&self.fragment_index, learner_order)
    }

    pub fn validate_partial(&self, current_order: &[String]) -> PartialValidation {
        sequencing::validate_partial(&self.puzzle.canonical_order, current_order)
    }

    pub fn get_next_expected_block(&self, current_order: &[String]) -> Option<&str> {
        sequencing::next_expected_block(&self.puzzle.canonical_order, current_order)
    }

    pub fn can_place_block(&self, id: &str, position: usize, current_order: &[String]) -> bool {
        sequencing::can_place_block(&self.puzzle.canonical_order, id, position, current_order)
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("puzzle_id", &self.puzzle.id)
            .field("total_blocks", &self.puzzle.len())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ISequenceValidator for Validator {
    fn puzzle_id(&self) -> &str {
        &self.puzzle.id
    }

    fn validate(&self, learner_order: &[String]) -> ValidationResult {
        Validator::validate(self, learner_order)
    }

    fn validate_block_ids(&self, learner_order: &[String]) -> BlockIdValidation {
        Validator::validate_block_ids(self, learner_order)
    }

    fn validate_partial(&self, current_order: &[String]) -> PartialValidation {
        Validator::validate_partial(self, current_order)
    }

    fn get_next_expected_block(&self, current_order: &[String]) -> Option<&str> {
        Validator::get_next_expected_block(self, current_order)
    }

    fn can_place_block(&self, id: &str, position: usize, current_order: &[String]) -> bool {
        Validator::can_place_block(self, id, position, current_order)
    }
}
