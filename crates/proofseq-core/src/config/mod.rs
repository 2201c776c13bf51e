//! Configuration.
//!
//! Every section is optional in TOML; missing fields fall back to
//! [`defaults`].
//!
//! # Examples
//!
//! ```
//! use proofseq_core::config::ProofSeqConfig;
//!
//! let config = ProofSeqConfig::from_toml("[hints]\nmax_hints = 2").unwrap();
//! assert_eq!(config.hints.max_hints, 2);
//! assert!((config.scoring.position_weight - 60.0).abs() < f64::EPSILON);
//! ```

pub mod defaults;
mod hint_config;
mod observability_config;
mod scoring_config;

pub use hint_config::HintConfig;
pub use observability_config::ObservabilityConfig;
pub use scoring_config::ScoringConfig;

use serde::{Deserialize, Serialize};

use crate::constants::MAX_HINTS;
use crate::errors::ConfigError;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProofSeqConfig {
    pub scoring: ScoringConfig,
    pub hints: HintConfig,
    pub observability: ObservabilityConfig,
}

impl ProofSeqConfig {
    /// Parse a TOML document, filling unspecified fields with defaults,
    /// then validate the result.
    pub fn from_toml(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every value is usable by the engine.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let weights = [
            ("scoring.position_weight", self.scoring.position_weight),
            ("scoring.presence_weight", self.scoring.presence_weight),
            (
                "scoring.extra_penalty_per_block",
                self.scoring.extra_penalty_per_block,
            ),
            ("scoring.extra_penalty_cap", self.scoring.extra_penalty_cap),
        ];
        for (field, value) in weights {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    reason: format!("must be a finite non-negative number, got {value}"),
                });
            }
        }

        let total = self.scoring.position_weight + self.scoring.presence_weight;
        if total > 100.0 {
            return Err(ConfigError::InvalidValue {
                field: "scoring".to_string(),
                reason: format!("position and presence weights sum to {total}, above 100"),
            });
        }

        if !(1..=MAX_HINTS).contains(&self.hints.max_hints) {
            return Err(ConfigError::InvalidValue {
                field: "hints.max_hints".to_string(),
                reason: format!(
                    "must be between 1 and {MAX_HINTS}, got {}",
                    self.hints.max_hints
                ),
            });
        }

        let level = self.observability.log_level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "observability.log_level".to_string(),
                reason: format!("unknown level {:?}", self.observability.log_level),
            });
        }

        Ok(())
    }
}
