// Single source of truth for all default values.

// --- Scoring ---
pub const DEFAULT_POSITION_WEIGHT: f64 = 60.0;
pub const DEFAULT_PRESENCE_WEIGHT: f64 = 40.0;
pub const DEFAULT_EXTRA_PENALTY_PER_BLOCK: f64 = 5.0;
pub const DEFAULT_EXTRA_PENALTY_CAP: f64 = 20.0;

// --- Hints ---
pub const DEFAULT_MAX_HINTS: usize = 3;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_OUTPUT: bool = false;
pub const DEFAULT_LOG_MISMATCHES: bool = true;
