//! Feedback text composition.
//!
//! Clauses are emitted in fixed precedence (missing, extra, duplicate,
//! misplaced, correctly placed) and joined with single spaces.

use proofseq_core::models::AnalysisDetails;

pub const CORRECT_FEEDBACK: &str = "Excellent! Your proof is complete and every step is in the right order.";
pub const KEEP_WORKING_FEEDBACK: &str = "Keep working on your proof.";

/// Compose the feedback sentence(s) for an analysed order.
pub fn generate_feedback(details: &AnalysisDetails) -> String {
    if details.correct_sequence {
        return CORRECT_FEEDBACK.to_string();
    }

    let mut clauses: Vec<String> = Vec::with_capacity(5);

    if details.missing_blocks > 0 {
        clauses.push(format!("You are missing {}.", blocks(details.missing_blocks)));
    }
    if details.extra_blocks > 0 {
        clauses.push(format!(
            "You have {} that {} not belong to this proof.",
            blocks(details.extra_blocks),
            verb(details.extra_blocks, "does", "do")
        ));
    }
    if !details.duplicates.is_empty() {
        clauses.push(format!(
            "You have placed {} more than once.",
            blocks(details.duplicates.len())
        ));
    }
    let misplaced = details.incorrectly_positioned.len();
    if misplaced > 0 {
        clauses.push(format!(
            "{} {} in the wrong position.",
            blocks(misplaced),
            verb(misplaced, "is", "are")
        ));
    }
    let placed = details.correctly_positioned.len();
    if placed > 0 {
        clauses.push(format!(
            "{} {} correctly positioned.",
            blocks(placed),
            verb(placed, "is", "are")
        ));
    }

    if clauses.is_empty() {
        return KEEP_WORKING_FEEDBACK.to_string();
    }
    clauses.join(" ")
}

fn blocks(count: usize) -> String {
    if count == 1 {
        "1 block".to_string()
    } else {
        format!("{count} blocks")
    }
}

fn verb(count: usize, singular: &'static str, plural: &'static str) -> &'static str {
    if count == 1 {
        singular
    } else {
        plural
    }
}
