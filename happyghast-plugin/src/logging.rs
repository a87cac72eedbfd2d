//! Logging bootstrap for hosts that do not install their own subscriber.

use happyghast_core::config::GeneralConfig;
use happyghast_core::error::{HappyGhastError, Result};
use tracing_subscriber::EnvFilter;

/// Install a global fmt subscriber.
///
/// `RUST_LOG` wins over `general.log_level` when set.
///
/// # Errors
/// Returns `HappyGhastError::Logging` if the level is invalid or a global
/// subscriber is already installed.
pub fn init(general: &GeneralConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&general.log_level))
        .map_err(|e| HappyGhastError::Logging(e.to_string()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| HappyGhastError::Logging(e.to_string()))
}
