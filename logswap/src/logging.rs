//! Diagnostics for the crate itself.
//!
//! Connection failures and fallback decisions are reported through
//! `tracing`. Binaries that have no subscriber of their own can install a
//! stderr one here. The same subscriber also serves [`TracingLogger`].
//!
//! [`TracingLogger`]: crate::log::TracingLogger

use std::io;
use tracing_subscriber::EnvFilter;

use crate::error::LogError;

/// Default filter when `RUST_LOG` is not set.
pub fn default_filter() -> &'static str {
    "info"
}

/// Build the filter: `RUST_LOG` wins, otherwise `fallback`.
pub fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Install a global stderr subscriber.
///
/// # Errors
///
/// Returns [`LogError::Subscriber`] if a global subscriber is already set.
pub fn init_tracing(fallback_filter: &str) -> Result<(), LogError> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(fallback_filter))
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| LogError::Subscriber(e.to_string()))
}
