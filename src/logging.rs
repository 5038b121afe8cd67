//! Tracing subscriber setup for the command line tool.

use std::io;

use thiserror::Error;
use tracing_subscriber::{EnvFilter, util::TryInitError};

/// Errors that can occur when installing the subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// A global subscriber is already installed.
    #[error("failed to initialize logging: {0}")]
    Init(#[from] TryInitError),
}

/// Build the event filter; `RUST_LOG` takes precedence over `log_level`.
pub fn env_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level))
}

/// Install a compact subscriber writing to stderr, keeping stdout for reports.
///
/// # Errors
///
/// Returns [`LoggingError::Init`] if a global subscriber is already set.
pub fn init(log_level: &str) -> Result<(), LoggingError> {
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::fmt()
        .compact()
        .with_target(true)
        .with_writer(io::stderr)
        .with_env_filter(env_filter(log_level))
        .finish()
        .try_init()?;

    Ok(())
}
