//! Logger trait definition.

use std::fmt::{self, Arguments, Write as _};

use super::priority::Severity;
use crate::error::LogError;

/// Log level of a message, in ascending order of importance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    /// Debugging information, suppressible on the console backend
    Debug,
    /// General information
    Info,
    /// Normal but significant conditions
    Notice,
    /// Warning messages
    Warning,
    /// Error messages
    Error,
}

impl LogLevel {
    /// All levels, lowest first.
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Notice,
        LogLevel::Warning,
        LogLevel::Error,
    ];

    /// Uppercase label used as the line prefix.
    pub fn label(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Notice => "NOTICE",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
        }
    }

    /// Syslog severity this level is delivered at.
    pub fn severity(&self) -> Severity {
        match self {
            LogLevel::Debug => Severity::Debug,
            LogLevel::Info => Severity::Info,
            LogLevel::Notice => Severity::Notice,
            LogLevel::Warning => Severity::Warning,
            LogLevel::Error => Severity::Error,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Render `"<LABEL>: <message>"` for a leveled call.
///
/// A `Display` impl that returns an error leaves whatever it wrote so far in
/// the line; rendering itself never fails.
pub fn render_line(level: LogLevel, args: Arguments<'_>) -> String {
    render_with_label(level.label(), args)
}

pub(crate) fn render_with_label(label: &str, args: Arguments<'_>) -> String {
    let mut line = String::with_capacity(label.len() + 2 + args.as_str().map_or(64, str::len));
    line.push_str(label);
    line.push_str(": ");
    let _ = line.write_fmt(args);
    line
}

/// Logging interface for application components.
///
/// Components hold an `Arc<dyn Logger>` and never name a concrete backend.
/// Each leveled method prefixes the formatted message with the uppercase
/// level label and hands it to the backend's sink.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow sharing across threads.
/// Whether concurrent lines interleave depends on the sink.
///
/// # Example
///
/// ```
/// use logswap::log::{Logger, NoOpLogger};
/// use logswap::{log_info, log_debug};
/// use std::sync::Arc;
///
/// let logger: Arc<dyn Logger> = Arc::new(NoOpLogger);
/// log_info!(logger, "Application started").unwrap();
/// log_debug!(logger, "x={}", 5).unwrap();
/// ```
pub trait Logger: Send + Sync {
    /// Deliver a message at the specified level.
    ///
    /// This is the core method that implementations must provide. The
    /// leveled methods delegate to it. An error means the sink failed to
    /// accept the line; callers usually treat it as non-fatal.
    fn log(&self, level: LogLevel, args: Arguments<'_>) -> Result<(), LogError>;

    /// Log a debug-level message.
    fn debug(&self, args: Arguments<'_>) -> Result<(), LogError> {
        self.log(LogLevel::Debug, args)
    }

    /// Log an info-level message.
    fn info(&self, args: Arguments<'_>) -> Result<(), LogError> {
        self.log(LogLevel::Info, args)
    }

    /// Log a notice-level message.
    fn notice(&self, args: Arguments<'_>) -> Result<(), LogError> {
        self.log(LogLevel::Notice, args)
    }

    /// Log a warning-level message.
    fn warning(&self, args: Arguments<'_>) -> Result<(), LogError> {
        self.log(LogLevel::Warning, args)
    }

    /// Log an error-level message.
    fn error(&self, args: Arguments<'_>) -> Result<(), LogError> {
        self.log(LogLevel::Error, args)
    }

    /// Release whatever the backend holds. Safe to call more than once.
    fn close(&self) {}
}

/// Convenience macros for logging with format strings.
///
/// Each expands to the matching trait method with `format_args!`, so the
/// result is the backend's `Result<(), LogError>`.
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {
        $logger.debug(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        $logger.info(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_notice {
    ($logger:expr, $($arg:tt)*) => {
        $logger.notice(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warning {
    ($logger:expr, $($arg:tt)*) => {
        $logger.warning(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {
        $logger.error(format_args!($($arg)*))
    };
}
