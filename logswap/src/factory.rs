//! Logger factory for building the configured backend.
//!
//! Call sites receive an `Arc<dyn Logger>` and never see which backend was
//! chosen.

use std::sync::Arc;

use crate::config::{BackendKind, LoggingSettings};
use crate::error::LogError;
use crate::log::{ConsoleLogger, Logger, NoOpLogger, TracingLogger};

/// Creates loggers from [`LoggingSettings`].
///
/// # Example
///
/// ```
/// use logswap::config::LoggingSettings;
/// use logswap::factory::LoggerFactory;
/// use logswap::log::Logger;
/// use logswap::log_notice;
///
/// let logger = LoggerFactory::create(&LoggingSettings::console(false)).unwrap();
/// log_notice!(logger, "configured").unwrap();
/// ```
pub struct LoggerFactory;

impl LoggerFactory {
    /// Build the backend named by `settings.backend`.
    ///
    /// A syslog connection failure is returned as-is unless
    /// `settings.fallback` is set, in which case a console logger with the
    /// same debug flag is returned instead.
    pub fn create(settings: &LoggingSettings) -> Result<Arc<dyn Logger>, LogError> {
        match settings.backend {
            BackendKind::Console => Ok(Self::console(settings.debug)),
            BackendKind::Tracing => Ok(Arc::new(TracingLogger::new())),
            BackendKind::None => Ok(Arc::new(NoOpLogger)),
            BackendKind::Syslog => match Self::syslog(settings) {
                Ok(logger) => Ok(logger),
                Err(e) if settings.fallback && e.is_construction_failure() => {
                    tracing::warn!(
                        label = %settings.label,
                        address = %settings.address,
                        error = %e,
                        "syslog unavailable, falling back to console logging"
                    );
                    Ok(Self::console(settings.debug))
                }
                Err(e) => Err(e),
            },
        }
    }

    fn console(debug: bool) -> Arc<dyn Logger> {
        if debug {
            Arc::new(ConsoleLogger::with_debug())
        } else {
            Arc::new(ConsoleLogger::new())
        }
    }

    #[cfg(unix)]
    fn syslog(settings: &LoggingSettings) -> Result<Arc<dyn Logger>, LogError> {
        let logger = crate::log::SyslogLogger::builder(settings.label.clone())
            .facility(settings.facility)
            .severity(settings.severity)
            .address(settings.address.clone())
            .connect()?;
        Ok(Arc::new(logger))
    }

    #[cfg(not(unix))]
    fn syslog(settings: &LoggingSettings) -> Result<Arc<dyn Logger>, LogError> {
        Err(LogError::Unavailable {
            label: settings.label.clone(),
        })
    }
}
