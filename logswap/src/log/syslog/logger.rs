//! Logger backed by a syslog daemon.

use std::fmt::{self, Arguments, Write as _};
use std::io;
use std::path::{Path, PathBuf};

use chrono::Local;
use parking_lot::Mutex;

use super::address::SyslogAddress;
use super::format::{default_label, frame, hostname, Header};
use super::transport::Transport;
use crate::error::LogError;
use crate::log::priority::{Facility, Priority, Severity};
use crate::log::r#trait::{render_line, render_with_label};
use crate::log::{LogLevel, Logger};

/// Builder for [`SyslogLogger`].
///
/// # Example
///
/// ```no_run
/// use logswap::log::{Facility, Severity, SyslogAddress, SyslogLogger};
///
/// let logger = SyslogLogger::builder("myapp")
///     .facility(Facility::Local0)
///     .severity(Severity::Notice)
///     .address(SyslogAddress::Udp("logs.example.com:514".to_string()))
///     .connect()?;
/// # Ok::<(), logswap::LogError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SyslogBuilder {
    label: String,
    priority: Priority,
    address: SyslogAddress,
    local_paths: Option<Vec<PathBuf>>,
}

impl SyslogBuilder {
    /// Facility bits carried by every frame.
    pub fn facility(mut self, facility: Facility) -> Self {
        self.priority = Priority::new(facility, self.priority.severity());
        self
    }

    /// Severity for raw writes through `io::Write`.
    pub fn severity(mut self, severity: Severity) -> Self {
        self.priority = self.priority.with_severity(severity);
        self
    }

    /// Destination of the frames; the local daemon unless set.
    pub fn address(mut self, address: SyslogAddress) -> Self {
        self.address = address;
        self
    }

    /// Replace the well-known sockets tried for `SyslogAddress::Local`.
    #[cfg(test)]
    pub(crate) fn local_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.local_paths = Some(paths);
        self
    }

    /// Open the connection.
    ///
    /// Fails with [`LogError::Unavailable`] when no local socket answers and
    /// with [`LogError::Connect`] when an explicit address cannot be reached.
    pub fn connect(self) -> Result<SyslogLogger, LogError> {
        let label = if self.label.is_empty() {
            default_label()
        } else {
            self.label
        };

        let transport = match &self.address {
            SyslogAddress::Local => {
                let transport = match &self.local_paths {
                    Some(paths) => {
                        let paths: Vec<&Path> = paths.iter().map(PathBuf::as_path).collect();
                        Transport::first_local(&paths)
                    }
                    None => Transport::local(),
                };
                transport.ok_or_else(|| LogError::Unavailable {
                    label: label.clone(),
                })
            }
            SyslogAddress::Unix(path) => Transport::unix(path).map_err(|source| LogError::Connect {
                address: self.address.to_string(),
                source,
            }),
            SyslogAddress::Udp(addr) => Transport::udp(addr).map_err(|source| LogError::Connect {
                address: self.address.to_string(),
                source,
            }),
            SyslogAddress::Tcp(addr) => Transport::tcp(addr).map_err(|source| LogError::Connect {
                address: self.address.to_string(),
                source,
            }),
        };

        let transport = match transport {
            Ok(transport) => transport,
            Err(e) => {
                tracing::error!(
                    label = %label,
                    address = %self.address,
                    error = %e,
                    "Error establishing syslog"
                );
                return Err(e);
            }
        };

        tracing::debug!(label = %label, address = %self.address, "syslog connection opened");

        let hostname = if self.address.is_local() {
            String::new()
        } else {
            hostname()
        };

        Ok(SyslogLogger {
            label,
            hostname,
            priority: self.priority,
            address: self.address,
            pid: std::process::id(),
            transport: Mutex::new(Some(transport)),
        })
    }
}

/// Logger that forwards each line to the host's syslog daemon.
///
/// Every leveled call is delivered at the severity of its level
/// (debug, info, notice, warning, err) under the configured facility, and the
/// text carries the same `"<LABEL>: "` prefix as the console backend. The
/// daemon adds its own timestamp, host and process framing.
///
/// The connection is opened by [`SyslogLogger::new`] and released by
/// [`Logger::close`]; calls made after that return [`LogError::Closed`].
/// Failed writes are reported once and never retried.
#[derive(Debug)]
pub struct SyslogLogger {
    label: String,
    hostname: String,
    priority: Priority,
    address: SyslogAddress,
    pid: u32,
    transport: Mutex<Option<Transport>>,
}

impl SyslogLogger {
    /// Connect to the local syslog daemon under `label`.
    ///
    /// Uses the kernel facility with error as the default severity.
    pub fn new(label: &str) -> Result<Self, LogError> {
        Self::builder(label).connect()
    }

    /// Builder with the default priority and the local daemon as address.
    pub fn builder(label: impl Into<String>) -> SyslogBuilder {
        SyslogBuilder {
            label: label.into(),
            priority: Priority::default(),
            address: SyslogAddress::Local,
            local_paths: None,
        }
    }

    /// Tag written before `[pid]` in every frame.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Facility plus the default severity used for raw writes.
    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// Where the frames are delivered.
    pub fn address(&self) -> &SyslogAddress {
        &self.address
    }

    /// Whether the connection is still held.
    pub fn is_open(&self) -> bool {
        self.transport.lock().is_some()
    }

    /// Log at emergency severity with an `EMERG` prefix.
    pub fn emergency(&self, args: Arguments<'_>) -> Result<(), LogError> {
        self.send(Severity::Emergency, &render_with_label("EMERG", args))
    }

    /// Log at alert severity with an `ALERT` prefix.
    pub fn alert(&self, args: Arguments<'_>) -> Result<(), LogError> {
        self.send(Severity::Alert, &render_with_label("ALERT", args))
    }

    /// Log at critical severity with a `CRIT` prefix.
    pub fn critical(&self, args: Arguments<'_>) -> Result<(), LogError> {
        self.send(Severity::Critical, &render_with_label("CRIT", args))
    }

    /// Deliver `msg` unchanged at `severity`, keeping the configured facility.
    pub fn send(&self, severity: Severity, msg: &str) -> Result<(), LogError> {
        let header = if self.address.is_local() {
            Header::local(&Local::now())
        } else {
            Header::network(&Local::now(), &self.hostname)
        };
        let line = frame(
            self.priority.with_severity(severity),
            &header,
            &self.label,
            self.pid,
            msg,
        );

        let mut guard = self.transport.lock();
        let transport = guard.as_mut().ok_or(LogError::Closed)?;
        transport.send(line.as_bytes()).map_err(LogError::Delivery)
    }
}

impl Logger for SyslogLogger {
    fn log(&self, level: LogLevel, args: Arguments<'_>) -> Result<(), LogError> {
        self.send(level.severity(), &render_line(level, args))
    }

    fn close(&self) {
        if self.transport.lock().take().is_some() {
            tracing::debug!(label = %self.label, "syslog connection closed");
        }
    }
}

impl SyslogLogger {
    fn send_raw(&self, msg: &str) -> io::Result<()> {
        match self.send(self.priority.severity(), msg) {
            Ok(()) => Ok(()),
            Err(LogError::Delivery(e)) => Err(e),
            Err(e) => Err(io::Error::new(io::ErrorKind::NotConnected, e.to_string())),
        }
    }
}

/// Raw bytes go out unprefixed at the builder's default severity.
///
/// Each `write` call is one frame. `write!`/`writeln!` render the whole
/// message first, so a formatted line is never split across frames.
impl io::Write for SyslogLogger {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.send_raw(&String::from_utf8_lossy(buf))?;
        Ok(buf.len())
    }

    fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> io::Result<()> {
        let mut msg = String::new();
        let _ = msg.write_fmt(args);
        self.send_raw(&msg)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{log_debug, log_error, log_info, log_notice, log_warning};
    use std::os::unix::net::UnixDatagram;
    use std::path::PathBuf;
    use tempfile::TempDir;

    struct Daemon {
        _dir: TempDir,
        path: PathBuf,
        socket: UnixDatagram,
    }

    impl Daemon {
        fn start() -> Self {
            let dir = TempDir::new().unwrap();
            let path = dir.path().join("log.sock");
            let socket = UnixDatagram::bind(&path).unwrap();
            socket
                .set_read_timeout(Some(std::time::Duration::from_secs(5)))
                .unwrap();
            Self {
                _dir: dir,
                path,
                socket,
            }
        }

        fn logger(&self, label: &str) -> SyslogLogger {
            SyslogLogger::builder(label)
                .address(SyslogAddress::Unix(self.path.clone()))
                .connect()
                .unwrap()
        }

        fn recv(&self) -> String {
            let mut buf = [0u8; 2048];
            let n = self.socket.recv(&mut buf).unwrap();
            String::from_utf8(buf[..n].to_vec()).unwrap()
        }
    }

    #[test]
    fn test_leveled_calls_use_mapped_severity() {
        let daemon = Daemon::start();
        let logger = daemon.logger("myapp");

        log_debug!(logger, "x={}", 5).unwrap();
        log_info!(logger, "i").unwrap();
        log_notice!(logger, "n").unwrap();
        log_warning!(logger, "w").unwrap();
        log_error!(logger, "boom: {}", "oops").unwrap();

        // Kernel facility, so the priority equals the severity code.
        assert!(daemon.recv().starts_with("<7>"));
        assert!(daemon.recv().starts_with("<6>"));
        assert!(daemon.recv().starts_with("<5>"));
        assert!(daemon.recv().starts_with("<4>"));
        let last = daemon.recv();
        assert!(last.starts_with("<3>"));
        let pid = std::process::id();
        assert!(last.ends_with(&format!(" myapp[{}]: ERROR: boom: oops\n", pid)));
    }

    #[test]
    fn test_facility_bits_are_kept() {
        let daemon = Daemon::start();
        let logger = SyslogLogger::builder("svc")
            .facility(Facility::Local0)
            .address(SyslogAddress::Unix(daemon.path.clone()))
            .connect()
            .unwrap();

        log_info!(logger, "hello").unwrap();
        assert!(daemon.recv().starts_with("<134>"));
    }

    #[test]
    fn test_debug_is_never_suppressed() {
        let daemon = Daemon::start();
        let logger = daemon.logger("myapp");
        log_debug!(logger, "verbose").unwrap();
        assert!(daemon.recv().contains("DEBUG: verbose"));
    }

    #[test]
    fn test_close_releases_connection() {
        let daemon = Daemon::start();
        let logger = daemon.logger("myapp");
        assert!(logger.is_open());

        logger.close();
        assert!(!logger.is_open());
        assert!(matches!(log_info!(logger, "late"), Err(LogError::Closed)));

        // second close is harmless
        logger.close();
    }

    #[test]
    fn test_delivery_failure_when_daemon_goes_away() {
        let daemon = Daemon::start();
        let logger = daemon.logger("myapp");
        drop(daemon);

        let result = log_error!(logger, "nobody listens");
        assert!(matches!(result, Err(LogError::Delivery(_))));
    }

    #[test]
    fn test_unreachable_socket_is_construction_failure() {
        let dir = TempDir::new().unwrap();
        let result = SyslogLogger::builder("myapp")
            .address(SyslogAddress::Unix(dir.path().join("nothing.sock")))
            .connect();
        match result {
            Err(e) => assert!(e.is_construction_failure()),
            Ok(_) => panic!("connect should fail without a listener"),
        }
    }

    #[test]
    fn test_extra_severities() {
        let daemon = Daemon::start();
        let logger = daemon.logger("myapp");
        logger.emergency(format_args!("e")).unwrap();
        logger.alert(format_args!("a")).unwrap();
        logger.critical(format_args!("c={}", 1)).unwrap();

        assert!(daemon.recv().starts_with("<0>"));
        assert!(daemon.recv().contains("]: ALERT: a\n"));
        let crit = daemon.recv();
        assert!(crit.starts_with("<2>"));
        assert!(crit.contains("]: CRIT: c=1\n"));
    }

    #[test]
    fn test_raw_write_uses_default_severity() {
        use std::io::Write;

        let daemon = Daemon::start();
        let mut logger = SyslogLogger::builder("raw")
            .severity(Severity::Notice)
            .address(SyslogAddress::Unix(daemon.path.clone()))
            .connect()
            .unwrap();

        logger.write_all(b"plain text\n").unwrap();
        let line = daemon.recv();
        assert!(line.starts_with("<5>"));
        assert!(line.ends_with("]: plain text\n"));
    }

    #[test]
    fn test_formatted_raw_write_is_one_frame() {
        use std::io::Write;

        let daemon = Daemon::start();
        let mut logger = daemon.logger("raw");
        let pct = std::hint::black_box(91u32);

        writeln!(logger, "disk at {}%", pct).unwrap();
        logger.close();

        let line = daemon.recv();
        assert!(line.starts_with("<3>"));
        assert!(line.ends_with("]: disk at 91%\n"));
        daemon
            .socket
            .set_read_timeout(Some(std::time::Duration::from_millis(100)))
            .unwrap();
        let mut buf = [0u8; 256];
        assert!(daemon.socket.recv(&mut buf).is_err(), "line was split into several frames");
    }

    #[test]
    fn test_no_local_socket_is_unavailable() {
        let dir = TempDir::new().unwrap();
        let result = SyslogLogger::builder("myapp")
            .local_paths(vec![dir.path().join("log"), dir.path().join("syslog")])
            .connect();
        match result {
            Err(LogError::Unavailable { label }) => assert_eq!(label, "myapp"),
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("no logger expected without a local socket"),
        }
    }

    #[test]
    fn test_local_lookup_connects_to_first_live_socket() {
        let daemon = Daemon::start();
        let dir = TempDir::new().unwrap();
        let logger = SyslogLogger::builder("lookup")
            .local_paths(vec![dir.path().join("missing"), daemon.path.clone()])
            .connect()
            .unwrap();
        assert_eq!(logger.address(), &SyslogAddress::Local);

        log_notice!(logger, "found it").unwrap();
        assert!(daemon.recv().ends_with("]: NOTICE: found it\n"));
    }

    #[test]
    fn test_empty_label_uses_executable_name() {
        let daemon = Daemon::start();
        let logger = daemon.logger("");
        assert_eq!(logger.label(), default_label());
    }

    #[test]
    fn test_local_frame_has_no_hostname() {
        let daemon = Daemon::start();
        let logger = daemon.logger("myapp");
        log_info!(logger, "hi").unwrap();
        let line = daemon.recv();
        // "<6>Mmm dd hh:mm:ss myapp[pid]: INFO: hi\n"
        let after_pri = &line[3..];
        assert_eq!(&after_pri[15..22], " myapp[");
    }
}
