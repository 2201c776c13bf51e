//! Partial-credit scoring.
//!
//! `score = round(max(0, positioned/total * position_weight
//!                      + present/total * presence_weight
//!                      - min(extra * penalty, cap)))`
//!
//! A correct sequence always scores the maximum.

use proofseq_core::config::ScoringConfig;
use proofseq_core::constants::{MAX_SCORE, MIN_SCORE};
use proofseq_core::models::AnalysisDetails;

/// Compute the 0..=100 score for an analysed order.
pub fn calculate_score(details: &AnalysisDetails, weights: &ScoringConfig) -> u8 {
    if details.correct_sequence {
        return MAX_SCORE;
    }
    if details.total_blocks == 0 {
        return MIN_SCORE;
    }

    let total = details.total_blocks as f64;
    let position_score =
        (details.correctly_positioned.len() as f64 / total) * weights.position_weight;
    let presence_score = (details.correct_blocks as f64 / total) * weights.presence_weight;
    let extra_penalty = (details.extra_blocks as f64 * weights.extra_penalty_per_block)
        .min(weights.extra_penalty_cap);

    let raw = (position_score + presence_score - extra_penalty)
        .max(0.0)
        .round();
    raw.min(f64::from(MAX_SCORE)) as u8
}
