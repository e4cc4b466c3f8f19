//! No-operation logger implementation.

use crate::error::LogError;
use crate::log::{LogLevel, Logger};
use std::fmt::Arguments;

/// A logger that discards all messages.
///
/// Useful for:
/// - Unit tests where log output would be noise
/// - Components built before a real backend is configured
/// - Silent operation modes (`backend = none`)
///
/// # Example
///
/// ```
/// use logswap::log::{Logger, NoOpLogger};
/// use std::sync::Arc;
///
/// let logger: Arc<dyn Logger> = Arc::new(NoOpLogger);
/// assert!(logger.info(format_args!("This message is discarded")).is_ok());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLogger;

impl Logger for NoOpLogger {
    #[inline]
    fn log(&self, _level: LogLevel, _args: Arguments<'_>) -> Result<(), LogError> {
        Ok(())
    }
}
