//! Error types shared by all logger backends.

use std::io;
use thiserror::Error;

/// Errors reported by logger construction and delivery.
///
/// Formatting never produces an error; only the sink does.
#[derive(Debug, Error)]
pub enum LogError {
    /// No local syslog socket accepted a connection.
    #[error("syslog delivery unavailable for '{label}': no local syslog socket accepted a connection")]
    Unavailable { label: String },

    /// Connecting to an explicit syslog address failed.
    #[error("failed to connect to syslog at {address}: {source}")]
    Connect {
        address: String,
        #[source]
        source: io::Error,
    },

    /// The sink rejected a log line (broken pipe, permission denied, ...).
    #[error("log delivery failed: {0}")]
    Delivery(#[from] io::Error),

    /// The logger was used after `close`.
    #[error("logger has been closed")]
    Closed,

    /// A global tracing subscriber could not be installed.
    #[error("failed to install tracing subscriber: {0}")]
    Subscriber(String),
}

impl LogError {
    /// Whether this error happened while establishing a connection.
    pub fn is_construction_failure(&self) -> bool {
        matches!(self, LogError::Unavailable { .. } | LogError::Connect { .. })
    }
}
