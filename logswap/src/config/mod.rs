//! Logger configuration.
//!
//! Backend selection lives in an INI file so the backend can change without
//! touching call sites:
//!
//! ```ini
//! [logging]
//! backend = syslog
//! label = myapp
//! facility = local0
//! fallback = true
//! ```
//!
//! Settings structs live in [`settings`], parsing in `parser` and file
//! handling in [`file`].

pub mod file;
mod parser;
pub mod settings;

pub use file::ConfigFileError;
pub use settings::{BackendKind, LoggingSettings};
