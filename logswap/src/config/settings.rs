//! Logging settings and their defaults.

use std::fmt;
use std::str::FromStr;

use crate::log::{Facility, Severity, SyslogAddress};

/// Which backend the factory builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendKind {
    /// Lines on standard output
    #[default]
    Console,
    /// Host syslog daemon
    Syslog,
    /// Forward to the `tracing` crate
    Tracing,
    /// Discard everything
    None,
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BackendKind::Console => "console",
            BackendKind::Syslog => "syslog",
            BackendKind::Tracing => "tracing",
            BackendKind::None => "none",
        };
        f.write_str(s)
    }
}

impl FromStr for BackendKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "console" | "stdout" => Ok(BackendKind::Console),
            "syslog" => Ok(BackendKind::Syslog),
            "tracing" => Ok(BackendKind::Tracing),
            "none" | "off" => Ok(BackendKind::None),
            other => Err(format!("unknown backend '{}'", other)),
        }
    }
}

/// Settings of the `[logging]` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingSettings {
    pub backend: BackendKind,
    /// Emit debug lines on the console backend.
    pub debug: bool,
    /// Syslog label; empty means the executable name.
    pub label: String,
    pub facility: Facility,
    /// Severity for raw syslog writes.
    pub severity: Severity,
    pub address: SyslogAddress,
    /// Use the console when syslog cannot be reached.
    pub fallback: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            backend: BackendKind::Console,
            debug: false,
            label: String::new(),
            facility: Facility::Kern,
            severity: Severity::Error,
            address: SyslogAddress::Local,
            fallback: true,
        }
    }
}

impl LoggingSettings {
    /// Console settings with the given debug flag.
    pub fn console(debug: bool) -> Self {
        Self {
            debug,
            ..Self::default()
        }
    }

    /// Syslog settings for `label` with default facility and address.
    pub fn syslog(label: impl Into<String>) -> Self {
        Self {
            backend: BackendKind::Syslog,
            label: label.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = LoggingSettings::default();
        assert_eq!(settings.backend, BackendKind::Console);
        assert!(!settings.debug);
        assert!(settings.label.is_empty());
        assert_eq!(settings.facility, Facility::Kern);
        assert_eq!(settings.severity, Severity::Error);
        assert_eq!(settings.address, SyslogAddress::Local);
        assert!(settings.fallback);
    }

    #[test]
    fn test_constructors() {
        assert!(LoggingSettings::console(true).debug);
        let syslog = LoggingSettings::syslog("myapp");
        assert_eq!(syslog.backend, BackendKind::Syslog);
        assert_eq!(syslog.label, "myapp");
    }

    #[test]
    fn test_backend_kind_parse() {
        assert_eq!("Syslog".parse::<BackendKind>().unwrap(), BackendKind::Syslog);
        assert_eq!("stdout".parse::<BackendKind>().unwrap(), BackendKind::Console);
        assert_eq!("off".parse::<BackendKind>().unwrap(), BackendKind::None);
        assert!("journald".parse::<BackendKind>().is_err());
        assert_eq!(BackendKind::Tracing.to_string(), "tracing");
    }
}
