//! Syslog severities, facilities and the combined priority value.

use std::fmt;
use std::str::FromStr;

/// Syslog severity, most severe first (RFC 5424 numeric codes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Severity {
    Emergency = 0,
    Alert = 1,
    Critical = 2,
    Error = 3,
    Warning = 4,
    Notice = 5,
    Info = 6,
    Debug = 7,
}

impl Severity {
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Short keyword as used in syslog.conf.
    pub fn keyword(self) -> &'static str {
        match self {
            Severity::Emergency => "emerg",
            Severity::Alert => "alert",
            Severity::Critical => "crit",
            Severity::Error => "err",
            Severity::Warning => "warning",
            Severity::Notice => "notice",
            Severity::Info => "info",
            Severity::Debug => "debug",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "emerg" | "emergency" | "panic" => Ok(Severity::Emergency),
            "alert" => Ok(Severity::Alert),
            "crit" | "critical" => Ok(Severity::Critical),
            "err" | "error" => Ok(Severity::Error),
            "warning" | "warn" => Ok(Severity::Warning),
            "notice" => Ok(Severity::Notice),
            "info" => Ok(Severity::Info),
            "debug" => Ok(Severity::Debug),
            other => Err(format!("unknown syslog severity '{}'", other)),
        }
    }
}

/// Syslog facility. The numeric code occupies the bits above the severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Facility {
    Kern = 0,
    User = 1,
    Mail = 2,
    Daemon = 3,
    Auth = 4,
    Syslog = 5,
    Lpr = 6,
    News = 7,
    Uucp = 8,
    Cron = 9,
    AuthPriv = 10,
    Ftp = 11,
    Local0 = 16,
    Local1 = 17,
    Local2 = 18,
    Local3 = 19,
    Local4 = 20,
    Local5 = 21,
    Local6 = 22,
    Local7 = 23,
}

impl Facility {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn keyword(self) -> &'static str {
        match self {
            Facility::Kern => "kern",
            Facility::User => "user",
            Facility::Mail => "mail",
            Facility::Daemon => "daemon",
            Facility::Auth => "auth",
            Facility::Syslog => "syslog",
            Facility::Lpr => "lpr",
            Facility::News => "news",
            Facility::Uucp => "uucp",
            Facility::Cron => "cron",
            Facility::AuthPriv => "authpriv",
            Facility::Ftp => "ftp",
            Facility::Local0 => "local0",
            Facility::Local1 => "local1",
            Facility::Local2 => "local2",
            Facility::Local3 => "local3",
            Facility::Local4 => "local4",
            Facility::Local5 => "local5",
            Facility::Local6 => "local6",
            Facility::Local7 => "local7",
        }
    }
}

impl fmt::Display for Facility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for Facility {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let facility = match s.trim().to_lowercase().as_str() {
            "kern" => Facility::Kern,
            "user" => Facility::User,
            "mail" => Facility::Mail,
            "daemon" => Facility::Daemon,
            "auth" => Facility::Auth,
            "syslog" => Facility::Syslog,
            "lpr" => Facility::Lpr,
            "news" => Facility::News,
            "uucp" => Facility::Uucp,
            "cron" => Facility::Cron,
            "authpriv" => Facility::AuthPriv,
            "ftp" => Facility::Ftp,
            "local0" => Facility::Local0,
            "local1" => Facility::Local1,
            "local2" => Facility::Local2,
            "local3" => Facility::Local3,
            "local4" => Facility::Local4,
            "local5" => Facility::Local5,
            "local6" => Facility::Local6,
            "local7" => Facility::Local7,
            other => return Err(format!("unknown syslog facility '{}'", other)),
        };
        Ok(facility)
    }
}

/// Facility and severity packed the way the `<PRI>` header expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Priority {
    facility: Facility,
    severity: Severity,
}

impl Priority {
    pub fn new(facility: Facility, severity: Severity) -> Self {
        Self { facility, severity }
    }

    pub fn facility(&self) -> Facility {
        self.facility
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Same facility, different severity.
    pub fn with_severity(self, severity: Severity) -> Self {
        Self { severity, ..self }
    }

    /// Numeric value written between the angle brackets.
    pub fn value(&self) -> u8 {
        (self.facility.code() << 3) | self.severity.code()
    }
}

impl Default for Priority {
    /// Kernel facility at error severity.
    fn default() -> Self {
        Self::new(Facility::Kern, Severity::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_priority_value() {
        assert_eq!(Priority::default().value(), 3);
    }

    #[test]
    fn test_priority_packs_facility_and_severity() {
        let priority = Priority::new(Facility::Local7, Severity::Debug);
        assert_eq!(priority.value(), 191);
        assert_eq!(Priority::new(Facility::User, Severity::Notice).value(), 13);
    }

    #[test]
    fn test_with_severity_keeps_facility() {
        let priority = Priority::new(Facility::Daemon, Severity::Error).with_severity(Severity::Info);
        assert_eq!(priority.facility(), Facility::Daemon);
        assert_eq!(priority.severity(), Severity::Info);
        assert_eq!(priority.value(), 30);
    }

    #[test]
    fn test_severity_parse() {
        assert_eq!("err".parse::<Severity>().unwrap(), Severity::Error);
        assert_eq!(" WARNING ".parse::<Severity>().unwrap(), Severity::Warning);
        assert_eq!("crit".parse::<Severity>().unwrap(), Severity::Critical);
        assert!("loud".parse::<Severity>().is_err());
    }

    #[test]
    fn test_facility_parse_and_display() {
        assert_eq!("local3".parse::<Facility>().unwrap(), Facility::Local3);
        assert_eq!(Facility::AuthPriv.to_string(), "authpriv");
        assert!("local9".parse::<Facility>().is_err());
    }

    #[test]
    fn test_severity_ordering_most_severe_first() {
        assert!(Severity::Emergency < Severity::Error);
        assert!(Severity::Error < Severity::Debug);
    }
}
