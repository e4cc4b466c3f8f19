//! Console logger writing one line per message to standard output.

use std::fmt::Arguments;
use std::io::{self, Stdout, Write};

use parking_lot::Mutex;

use crate::error::LogError;
use crate::log::r#trait::render_line;
use crate::log::{LogLevel, Logger};

/// Logger that writes `"<LABEL>: <message>\n"` lines to standard output.
///
/// Debug lines are dropped unless the logger was built with
/// [`ConsoleLogger::with_debug`]. Every other level always produces exactly
/// one line. Write failures are swallowed, so every call returns `Ok(())`.
///
/// The sink is generic so tests and embedders can capture the output:
///
/// ```
/// use logswap::log::{ConsoleLogger, Logger};
/// use logswap::log_error;
///
/// let logger = ConsoleLogger::with_writer(Vec::new(), false);
/// log_error!(logger, "boom: {}", "oops").unwrap();
/// assert_eq!(logger.into_inner(), b"ERROR: boom: oops\n");
/// ```
pub struct ConsoleLogger<W: Write + Send = Stdout> {
    show_debug: bool,
    sink: Mutex<W>,
}

impl ConsoleLogger<Stdout> {
    /// Console logger with debug lines suppressed.
    pub fn new() -> Self {
        Self::with_writer(io::stdout(), false)
    }

    /// Console logger that also emits debug lines.
    pub fn with_debug() -> Self {
        Self::with_writer(io::stdout(), true)
    }
}

impl Default for ConsoleLogger<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write + Send> ConsoleLogger<W> {
    /// Console logger writing to an arbitrary sink.
    pub fn with_writer(writer: W, show_debug: bool) -> Self {
        Self {
            show_debug,
            sink: Mutex::new(writer),
        }
    }

    /// Whether debug lines are emitted.
    pub fn show_debug(&self) -> bool {
        self.show_debug
    }

    /// Consume the logger and return its sink.
    pub fn into_inner(self) -> W {
        self.sink.into_inner()
    }

    fn emit(&self, level: LogLevel, args: Arguments<'_>) {
        let mut line = render_line(level, args);
        line.push('\n');

        let mut sink = self.sink.lock();
        // Console delivery is best-effort; stdout errors never reach the caller.
        let _ = sink.write_all(line.as_bytes());
        let _ = sink.flush();
    }
}

impl<W: Write + Send> Logger for ConsoleLogger<W> {
    fn log(&self, level: LogLevel, args: Arguments<'_>) -> Result<(), LogError> {
        if level == LogLevel::Debug && !self.show_debug {
            return Ok(());
        }
        self.emit(level, args);
        Ok(())
    }
}

impl<W: Write + Send> std::fmt::Debug for ConsoleLogger<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleLogger")
            .field("show_debug", &self.show_debug)
            .finish_non_exhaustive()
    }
}
