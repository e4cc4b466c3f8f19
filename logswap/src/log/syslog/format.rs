//! Syslog frame layout.
//!
//! Local sockets get the short BSD header, remote daemons also need the
//! hostname and a full timestamp:
//!
//! ```text
//! <3>Mar  5 09:04:05 myapp[4242]: ERROR: boom
//! <3>2024-03-05T09:04:05+01:00 host myapp[4242]: ERROR: boom
//! ```

use chrono::{DateTime, SecondsFormat, TimeZone};
use std::fmt::Display;

use crate::log::priority::Priority;

/// Header variant, chosen by the kind of address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Header {
    Local { timestamp: String },
    Network { timestamp: String, hostname: String },
}

impl Header {
    pub(crate) fn local<Tz: TimeZone>(now: &DateTime<Tz>) -> Self
    where
        Tz::Offset: Display,
    {
        Header::Local {
            timestamp: now.format("%b %e %H:%M:%S").to_string(),
        }
    }

    pub(crate) fn network<Tz: TimeZone>(now: &DateTime<Tz>, hostname: &str) -> Self
    where
        Tz::Offset: Display,
    {
        Header::Network {
            timestamp: now.to_rfc3339_opts(SecondsFormat::Secs, true),
            hostname: hostname.to_string(),
        }
    }
}

/// Assemble one frame. A trailing newline is added unless `msg` has one.
pub(crate) fn frame(
    priority: Priority,
    header: &Header,
    label: &str,
    pid: u32,
    msg: &str,
) -> String {
    let nl = if msg.ends_with('\n') { "" } else { "\n" };
    match header {
        Header::Local { timestamp } => {
            format!("<{}>{} {}[{}]: {}{}", priority.value(), timestamp, label, pid, msg, nl)
        }
        Header::Network {
            timestamp,
            hostname,
        } => format!(
            "<{}>{} {} {}[{}]: {}{}",
            priority.value(),
            timestamp,
            hostname,
            label,
            pid,
            msg,
            nl
        ),
    }
}

/// Host name for network headers, `localhost` when it cannot be read.
pub(crate) fn hostname() -> String {
    let mut buf = [0u8; 256];
    // SAFETY: buf is valid for buf.len() bytes and gethostname NUL-terminates on success.
    let rc = unsafe { libc::gethostname(buf.as_mut_ptr().cast(), buf.len()) };
    if rc != 0 {
        return "localhost".to_string();
    }
    let len = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    match std::str::from_utf8(&buf[..len]) {
        Ok(name) if !name.is_empty() => name.to_string(),
        _ => "localhost".to_string(),
    }
}

/// Executable file name, used when the caller gives an empty label.
pub(crate) fn default_label() -> String {
    std::env::args_os()
        .next()
        .and_then(|arg0| {
            std::path::Path::new(&arg0)
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| "logswap".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::priority::{Facility, Severity};
    use chrono::{FixedOffset, Utc};

    fn march_fifth() -> DateTime<FixedOffset> {
        FixedOffset::east_opt(3600)
            .unwrap()
            .with_ymd_and_hms(2024, 3, 5, 9, 4, 5)
            .unwrap()
    }

    #[test]
    fn test_local_header_pads_day_with_space() {
        let header = Header::local(&march_fifth());
        assert_eq!(
            header,
            Header::Local {
                timestamp: "Mar  5 09:04:05".to_string()
            }
        );
    }

    #[test]
    fn test_local_frame() {
        let header = Header::local(&march_fifth());
        let line = frame(Priority::default(), &header, "myapp", 4242, "ERROR: boom");
        assert_eq!(line, "<3>Mar  5 09:04:05 myapp[4242]: ERROR: boom\n");
    }

    #[test]
    fn test_network_frame() {
        let header = Header::network(&march_fifth(), "host");
        let priority = Priority::new(Facility::User, Severity::Warning);
        let line = frame(priority, &header, "myapp", 7, "WARNING: disk");
        assert_eq!(line, "<12>2024-03-05T09:04:05+01:00 host myapp[7]: WARNING: disk\n");
    }

    #[test]
    fn test_network_timestamp_utc_uses_z() {
        let now = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap();
        let header = Header::network(&now, "h");
        assert_eq!(
            header,
            Header::Network {
                timestamp: "2024-12-31T23:59:59Z".to_string(),
                hostname: "h".to_string()
            }
        );
    }

    #[test]
    fn test_frame_keeps_existing_newline() {
        let header = Header::local(&march_fifth());
        let line = frame(Priority::default(), &header, "a", 1, "raw\n");
        assert!(line.ends_with(": raw\n"));
        assert!(!line.ends_with("\n\n"));
    }

    #[test]
    fn test_hostname_not_empty() {
        assert!(!hostname().is_empty());
    }

    #[test]
    fn test_default_label_not_empty() {
        assert!(!default_label().is_empty());
    }
}
