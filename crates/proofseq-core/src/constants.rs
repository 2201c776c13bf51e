/// Score awarded to a fully correct sequence.
pub const MAX_SCORE: u8 = 100;

/// Score awarded to empty or mismatched submissions.
pub const MIN_SCORE: u8 = 0;

/// Upper bound on hints returned by a single validation.
pub const MAX_HINTS: usize = 3;

/// Environment variable consulted for the tracing filter.
pub const LOG_ENV_VAR: &str = "PROOFSEQ_LOG";
