//! Connections to a syslog daemon.

use std::io::{self, Write};
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr, TcpStream, ToSocketAddrs, UdpSocket};
use std::os::unix::net::{UnixDatagram, UnixStream};
use std::path::Path;

use super::address::LOCAL_SOCKET_PATHS;

/// An open connection to the daemon.
#[derive(Debug)]
pub(crate) enum Transport {
    UnixDatagram(UnixDatagram),
    UnixStream(UnixStream),
    Udp(UdpSocket),
    Tcp(TcpStream),
}

impl Transport {
    /// Connect to a Unix socket, preferring datagrams.
    pub(crate) fn unix(path: &Path) -> io::Result<Self> {
        let datagram = UnixDatagram::unbound().and_then(|socket| {
            socket.connect(path)?;
            Ok(socket)
        });
        match datagram {
            Ok(socket) => Ok(Transport::UnixDatagram(socket)),
            Err(_) => UnixStream::connect(path).map(Transport::UnixStream),
        }
    }

    /// Try the well-known sockets, datagram kind first across all paths.
    pub(crate) fn local() -> Option<Self> {
        Self::first_local(&LOCAL_SOCKET_PATHS.map(|p| Path::new(p)))
    }

    pub(crate) fn first_local(paths: &[&Path]) -> Option<Self> {
        for path in paths {
            if let Ok(socket) = UnixDatagram::unbound().and_then(|s| s.connect(path).map(|_| s)) {
                return Some(Transport::UnixDatagram(socket));
            }
        }
        for path in paths {
            if let Ok(stream) = UnixStream::connect(path) {
                return Some(Transport::UnixStream(stream));
            }
        }
        None
    }

    pub(crate) fn udp(addr: &str) -> io::Result<Self> {
        let target = addr.to_socket_addrs()?.next().ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, format!("'{}' did not resolve", addr))
        })?;
        let local: SocketAddr = if target.is_ipv4() {
            (Ipv4Addr::UNSPECIFIED, 0).into()
        } else {
            (Ipv6Addr::UNSPECIFIED, 0).into()
        };
        let socket = UdpSocket::bind(local)?;
        socket.connect(target)?;
        Ok(Transport::Udp(socket))
    }

    pub(crate) fn tcp(addr: &str) -> io::Result<Self> {
        TcpStream::connect(addr).map(Transport::Tcp)
    }

    /// Send one complete frame.
    pub(crate) fn send(&mut self, frame: &[u8]) -> io::Result<()> {
        match self {
            Transport::UnixDatagram(socket) => socket.send(frame).map(|_| ()),
            Transport::Udp(socket) => socket.send(frame).map(|_| ()),
            Transport::UnixStream(stream) => stream.write_all(frame),
            Transport::Tcp(stream) => stream.write_all(frame),
        }
    }
}
