//! Syslog backend.
//!
//! Frames are written straight to the daemon's socket (local Unix socket by
//! default, optionally UDP or TCP), so no `openlog` global state is touched
//! and several loggers with different labels can coexist.

mod address;
#[cfg(unix)]
mod format;
#[cfg(unix)]
mod logger;
#[cfg(unix)]
mod transport;

pub use address::{SyslogAddress, LOCAL_SOCKET_PATHS};
#[cfg(unix)]
pub use logger::{SyslogBuilder, SyslogLogger};
