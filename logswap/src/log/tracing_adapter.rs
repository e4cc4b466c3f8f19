//! Tracing library adapter implementation.

use crate::error::LogError;
use crate::log::r#trait::render_line;
use crate::log::{LogLevel, Logger};
use std::fmt::Arguments;

/// Logger implementation that delegates to the `tracing` crate.
///
/// This adapter bridges the `Logger` trait to the `tracing` ecosystem, so an
/// application that already runs a subscriber (file output, JSON, spans) can
/// route these lines through it. The line keeps its level prefix; `Notice`
/// has no tracing counterpart and is emitted at info level.
///
/// Delivery never fails: tracing has no error path back to the caller.
///
/// # Example
///
/// ```ignore
/// use logswap::log::{Logger, TracingLogger};
/// use std::sync::Arc;
///
/// // Assumes tracing subscriber is already initialized
/// let logger: Arc<dyn Logger> = Arc::new(TracingLogger);
/// logger.info(format_args!("Using tracing backend"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl TracingLogger {
    /// Create a new tracing logger adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Logger for TracingLogger {
    fn log(&self, level: LogLevel, args: Arguments<'_>) -> Result<(), LogError> {
        let line = render_line(level, args);
        match level {
            LogLevel::Debug => tracing::debug!("{}", line),
            LogLevel::Info => tracing::info!("{}", line),
            LogLevel::Notice => tracing::info!(notice = true, "{}", line),
            LogLevel::Warning => tracing::warn!("{}", line),
            LogLevel::Error => tracing::error!("{}", line),
        }
        Ok(())
    }
}
