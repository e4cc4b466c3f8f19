//! Syslog destination addresses.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Well-known local syslog sockets, tried in order.
pub const LOCAL_SOCKET_PATHS: [&str; 3] = ["/dev/log", "/var/run/syslog", "/var/run/log"];

/// Where a syslog logger delivers its frames.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SyslogAddress {
    /// The host daemon, found through [`LOCAL_SOCKET_PATHS`].
    #[default]
    Local,
    /// A specific Unix socket (datagram or stream).
    Unix(PathBuf),
    /// A remote daemon over UDP, `host:port`.
    Udp(String),
    /// A remote daemon over TCP, `host:port`.
    Tcp(String),
}

impl SyslogAddress {
    /// Local addresses use the short header without hostname.
    pub fn is_local(&self) -> bool {
        matches!(self, SyslogAddress::Local | SyslogAddress::Unix(_))
    }
}

impl fmt::Display for SyslogAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyslogAddress::Local => f.write_str("local"),
            SyslogAddress::Unix(path) => write!(f, "unix:{}", path.display()),
            SyslogAddress::Udp(addr) => write!(f, "udp:{}", addr),
            SyslogAddress::Tcp(addr) => write!(f, "tcp:{}", addr),
        }
    }
}

impl FromStr for SyslogAddress {
    type Err = String;

    /// Parses `local`, `unix:/path`, `udp:host:port` or `tcp:host:port`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("local") {
            return Ok(SyslogAddress::Local);
        }
        let (scheme, rest) = s
            .split_once(':')
            .ok_or_else(|| format!("expected <scheme>:<target>, got '{}'", s))?;
        if rest.is_empty() {
            return Err(format!("missing target in '{}'", s));
        }
        match scheme.to_lowercase().as_str() {
            "unix" => Ok(SyslogAddress::Unix(PathBuf::from(rest))),
            "udp" => Ok(SyslogAddress::Udp(rest.to_string())),
            "tcp" => Ok(SyslogAddress::Tcp(rest.to_string())),
            other => Err(format!("unknown scheme '{}', expected unix, udp or tcp", other)),
        }
    }
}
