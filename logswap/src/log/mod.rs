//! Logging abstraction layer.
//!
//! This module provides the logging interface that decouples application
//! code from the concrete sink. Call sites depend on the [`Logger`] trait;
//! which backend sits behind it is decided once, at construction time.
//!
//! # Architecture
//!
//! - `Logger` trait: the interface every component logs through
//! - `ConsoleLogger`: one line per message on stdout, debug optional
//! - `SyslogLogger`: forwards to the host syslog daemon (Unix only)
//! - `TracingLogger`: adapter onto the `tracing` crate
//! - `NoOpLogger`: silent logger for testing
//!
//! # Usage
//!
//! Components that need logging should accept an `Arc<dyn Logger>` and use
//! the provided macros:
//!
//! ```
//! use logswap::log::{Logger, NoOpLogger};
//! use logswap::{log_info, log_debug};
//! use std::sync::Arc;
//!
//! struct MyComponent {
//!     logger: Arc<dyn Logger>,
//! }
//!
//! impl MyComponent {
//!     fn new(logger: Arc<dyn Logger>) -> Self {
//!         Self { logger }
//!     }
//!
//!     fn do_work(&self) {
//!         let _ = log_info!(self.logger, "Starting work");
//!         let _ = log_debug!(self.logger, "Work completed in {} ms", 12);
//!     }
//! }
//!
//! MyComponent::new(Arc::new(NoOpLogger)).do_work();
//! ```

mod console;
mod noop;
mod priority;
mod syslog;
mod tracing_adapter;
mod r#trait;

pub use console::ConsoleLogger;
pub use noop::NoOpLogger;
pub use priority::{Facility, Priority, Severity};
pub use syslog::{SyslogAddress, LOCAL_SOCKET_PATHS};
#[cfg(unix)]
pub use syslog::{SyslogBuilder, SyslogLogger};
pub use r#trait::{render_line, LogLevel, Logger};
pub use tracing_adapter::TracingLogger;
