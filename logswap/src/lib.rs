//! logswap - leveled logging behind a swappable interface
//!
//! Application code depends on the [`log::Logger`] trait and holds an
//! `Arc<dyn Logger>`; the concrete backend (console, syslog, tracing or a
//! silent one) is chosen once at construction time and can be replaced
//! without touching call sites.
//!
//! # Quick Start
//!
//! ```
//! use logswap::log::{ConsoleLogger, Logger};
//! use logswap::log_error;
//! use std::sync::Arc;
//!
//! let logger: Arc<dyn Logger> = Arc::new(ConsoleLogger::new());
//! let name = "logswap";
//! log_error!(logger, "My name is: {}", name).ok();
//! ```
//!
//! Using the host syslog daemon:
//!
//! ```no_run
//! use logswap::log::{Logger, SyslogLogger};
//! use logswap::log_info;
//!
//! let logger = match SyslogLogger::new("myapp") {
//!     Ok(logger) => logger,
//!     Err(e) => {
//!         eprintln!("Failure to setup syslog logging: {}", e);
//!         std::process::exit(1);
//!     }
//! };
//! log_info!(logger, "started with pid {}", std::process::id()).ok();
//! logger.close();
//! ```

pub mod config;
pub mod error;
pub mod factory;
pub mod log;
pub mod logging;

pub use error::LogError;

/// Version of the logswap library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
