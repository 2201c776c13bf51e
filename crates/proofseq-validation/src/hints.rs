//! Hint generation.
//!
//! Hints are produced by four passes in priority order, all sharing one
//! [`HintAccumulator`] owned by the caller of [`generate_hints`]:
//!
//! 1. **Position** — the first misplaced index and the fragment that belongs there
//! 2. **Missing** — the first canonical fragment absent from the order
//! 3. **Next** — the next expected fragment, when the order is short
//! 4. **Fill** — further missing fragments until the cap is reached
//!
//! A fragment id is never the subject of two hints in one result. A pass
//! whose subject is already taken is skipped rather than substituted.

use std::collections::HashSet;

use proofseq_core::constants::MAX_HINTS;
use proofseq_core::models::{AnalysisDetails, Hint, HintKind};

use crate::sequencing;

/// Inputs needed for hint generation.
pub struct HintContext<'a> {
    pub canonical: &'a [String],
    pub learner_order: &'a [String],
    pub details: &'a AnalysisDetails,
    /// Resolves a fragment id to its displayable content.
    pub fragment_content: &'a dyn Fn(&str) -> Option<&'a str>,
    pub max_hints: usize,
}

/// Hints gathered so far and the fragment ids they reference.
#[derive(Debug, Default)]
pub struct HintAccumulator {
    hints: Vec<Hint>,
    used_ids: HashSet<String>,
    cap: usize,
}

impl HintAccumulator {
    /// Caps above [`MAX_HINTS`] are lowered to it.
    pub fn with_cap(cap: usize) -> Self {
        let cap = cap.min(MAX_HINTS);
        Self {
            hints: Vec::with_capacity(cap),
            used_ids: HashSet::with_capacity(cap),
            cap,
        }
    }

    pub fn is_full(&self) -> bool {
        self.hints.len() >= self.cap
    }

    pub fn has_used(&self, fragment_id: &str) -> bool {
        self.used_ids.contains(fragment_id)
    }

    /// Record a hint unless the cap is reached or its fragment was already used.
    /// Returns whether the hint was kept.
    pub fn offer(&mut self, hint: Hint) -> bool {
        if self.is_full() {
            return false;
        }
        if let Some(id) = &hint.related_fragment_id {
            if !self.used_ids.insert(id.clone()) {
                return false;
            }
        }
        self.hints.push(hint);
        true
    }

    pub fn into_hints(self) -> Vec<Hint> {
        self.hints
    }
}

/// Run every pass and return the ranked hints.
pub fn generate_hints(ctx: &HintContext<'_>) -> Vec<Hint> {
    if ctx.details.correct_sequence {
        return Vec::new();
    }

    let mut acc = HintAccumulator::with_cap(ctx.max_hints);
    position_pass(ctx, &mut acc);
    missing_pass(ctx, &mut acc);
    next_pass(ctx, &mut acc);
    fill_pass(ctx, &mut acc);
    acc.into_hints()
}

fn position_pass(ctx: &HintContext<'_>, acc: &mut HintAccumulator) {
    let Some(first) = ctx.details.incorrectly_positioned.first() else {
        return;
    };
    let display_position = first.position + 1;
    acc.offer(Hint {
        kind: HintKind::Position,
        message: format!("Position {display_position} should contain this step:"),
        payload: payload_for(ctx, &first.expected_id),
        related_fragment_id: Some(first.expected_id.clone()),
        position: Some(display_position),
    });
}

fn missing_pass(ctx: &HintContext<'_>, acc: &mut HintAccumulator) {
    if ctx.details.missing_blocks == 0 || acc.is_full() {
        return;
    }
    if let Some(id) = ctx.details.missing_ids.iter().find(|id| !acc.has_used(id)) {
        acc.offer(missing_hint(ctx, id));
    }
}

fn next_pass(ctx: &HintContext<'_>, acc: &mut HintAccumulator) {
    if ctx.learner_order.len() >= ctx.canonical.len() || acc.is_full() {
        return;
    }
    let Some(id) = sequencing::next_expected_block(ctx.canonical, ctx.learner_order) else {
        return;
    };
    // Already covered by an earlier pass: dropped, not replaced.
    if acc.has_used(id) {
        return;
    }
    acc.offer(Hint {
        kind: HintKind::Next,
        message: "The next step should be:".to_string(),
        payload: payload_for(ctx, id),
        related_fragment_id: Some(id.to_string()),
        position: None,
    });
}

fn fill_pass(ctx: &HintContext<'_>, acc: &mut HintAccumulator) {
    if ctx.details.missing_blocks == 0 {
        return;
    }
    for id in &ctx.details.missing_ids {
        if acc.is_full() {
            break;
        }
        if !acc.has_used(id) {
            acc.offer(missing_hint(ctx, id));
        }
    }
}

fn missing_hint(ctx: &HintContext<'_>, id: &str) -> Hint {
    Hint {
        kind: HintKind::Missing,
        message: "You are missing this step:".to_string(),
        payload: payload_for(ctx, id),
        related_fragment_id: Some(id.to_string()),
        position: None,
    }
}

fn payload_for(ctx: &HintContext<'_>, id: &str) -> String {
    (ctx.fragment_content)(id).unwrap_or_default().to_string()
}
