// src/logging/mod.rs
//
// Logging setup
//
// Library code logs through the `log` facade. The desktop shell installs
// a tracing-subscriber fmt subscriber, which also picks up `log` records.

use tracing_subscriber::EnvFilter;

use crate::error::{AppError, AppResult};

/// Install the global subscriber
///
/// `RUST_LOG` wins over `default_level` when set. Fails if a global
/// subscriber or logger is already installed.
pub fn init_logging(default_level: &str) -> AppResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| AppError::Other(format!("Failed to initialize logging: {}", e)))
}
