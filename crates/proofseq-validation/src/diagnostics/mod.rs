//! Diagnostics: structured log events, injectable sinks, and tracing setup.

pub mod events;
mod sinks;

pub use sinks::{NoopSink, RecordingSink, TracingSink};

use proofseq_core::config::ObservabilityConfig;
use proofseq_core::constants::LOG_ENV_VAR;
use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// Respects the `PROOFSEQ_LOG` environment variable for filtering and falls
/// back to the configured level. Returns `false` if a subscriber was
/// already installed.
pub fn init_tracing(config: &ObservabilityConfig) -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    if config.json_output {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .try_init()
            .is_ok()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .try_init()
            .is_ok()
    }
}
