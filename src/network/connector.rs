//! Connector: resolve, connect, dan transmit request buffer
//!
//! Receive timeout di-set di socket SEBELUM transfer apapun; gagal set
//! option bukan fatal (warning saja), exchange jalan terus tanpa
//! guaranteed timeout.

use std::io::Write;
use std::net::{SocketAddr, TcpStream, ToSocketAddrs};
use std::time::Duration;

use crate::error::{GelosError, Result};

/// Receive timeout default
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

/// Mode transmisi request buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransmitMode {
    /// Blocking connect dulu, lalu send sebagai write terpisah
    Standard,
    /// Buffer dikirim sebagai bagian dari connection establishment
    /// (`MSG_FASTOPEN`). Hanya Linux; platform lain fallback ke Standard.
    FastOpen,
}

/// Konfigurasi satu exchange
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Batas blocking untuk setiap receive attempt
    pub recv_timeout: Duration,
    /// Mode transmisi request
    pub transmit: TransmitMode,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            recv_timeout: DEFAULT_TIMEOUT,
            transmit: TransmitMode::Standard,
        }
    }
}

/// Resolve host/port, buka stream socket, dan kirim `payload`.
///
/// Kandidat pertama dari resolver yang dipakai. Ownership socket pindah
/// ke caller; semua error path menutup socket sebelum return.
pub fn connect_and_send(
    host: &str,
    port: u16,
    payload: &[u8],
    config: &ClientConfig,
) -> Result<TcpStream> {
    let mut addrs = (host, port)
        .to_socket_addrs()
        .map_err(|e| GelosError::Resolution(e.to_string()))?;
    let addr = addrs
        .next()
        .ok_or_else(|| GelosError::Resolution(format!("no addresses found for {}", host)))?;

    match config.transmit {
        TransmitMode::Standard => standard_send(&addr, payload, config),
        TransmitMode::FastOpen => fast_open_send(&addr, payload, config),
    }
}

/// Blocking connect, lalu payload sebagai write terpisah
fn standard_send(addr: &SocketAddr, payload: &[u8], config: &ClientConfig) -> Result<TcpStream> {
    let mut stream = TcpStream::connect(addr).map_err(GelosError::Connect)?;

    if let Err(e) = stream.set_read_timeout(Some(config.recv_timeout)) {
        tracing::warn!("socket option was not set: {}", e);
    }
    stream.set_nodelay(true).ok();

    // write_all menyelesaikan partial send dengan loop
    stream.write_all(payload).map_err(GelosError::Send)?;
    Ok(stream)
}

/// Payload ikut SYN lewat `sendto` + `MSG_FASTOPEN` pada raw fd
#[cfg(target_os = "linux")]
fn fast_open_send(addr: &SocketAddr, payload: &[u8], config: &ClientConfig) -> Result<TcpStream> {
    use std::os::unix::io::FromRawFd;

    let (storage, addr_len, family) = sockaddr_of(addr);

    let fd = unsafe { libc::socket(family, libc::SOCK_STREAM, 0) };
    if fd < 0 {
        return Err(GelosError::SocketCreate(std::io::Error::last_os_error()));
    }

    // SO_RCVTIMEO sebelum transfer; gagal set hanya warning
    let timeout = libc::timeval {
        tv_sec: config.recv_timeout.as_secs() as libc::time_t,
        tv_usec: config.recv_timeout.subsec_micros() as libc::suseconds_t,
    };
    let rc = unsafe {
        libc::setsockopt(
            fd,
            libc::SOL_SOCKET,
            libc::SO_RCVTIMEO,
            &timeout as *const _ as *const libc::c_void,
            std::mem::size_of::<libc::timeval>() as libc::socklen_t,
        )
    };
    if rc != 0 {
        tracing::warn!(
            "socket option was not set: {}",
            std::io::Error::last_os_error()
        );
    }

    let sent = unsafe {
        libc::sendto(
            fd,
            payload.as_ptr() as *const libc::c_void,
            payload.len(),
            libc::MSG_FASTOPEN,
            &storage as *const _ as *const libc::sockaddr,
            addr_len,
        )
    };
    if sent <= 0 {
        let err = std::io::Error::last_os_error();
        unsafe { libc::close(fd) };
        return Err(GelosError::Send(err));
    }

    // fd sekarang connected stream; ownership pindah ke TcpStream
    let mut stream = unsafe { TcpStream::from_raw_fd(fd) };

    // sendto bisa partial; sisanya lewat write biasa
    let sent = sent as usize;
    if sent < payload.len() {
        stream.write_all(&payload[sent..]).map_err(GelosError::Send)?;
    }
    Ok(stream)
}

/// `MSG_FASTOPEN` tidak tersedia di luar Linux
#[cfg(not(target_os = "linux"))]
fn fast_open_send(addr: &SocketAddr, payload: &[u8], config: &ClientConfig) -> Result<TcpStream> {
    standard_send(addr, payload, config)
}

/// Konversi `SocketAddr` ke sockaddr storage untuk syscall
#[cfg(target_os = "linux")]
fn sockaddr_of(addr: &SocketAddr) -> (libc::sockaddr_storage, libc::socklen_t, libc::c_int) {
    let mut storage: libc::sockaddr_storage = unsafe { std::mem::zeroed() };

    match addr {
        SocketAddr::V4(v4) => {
            let sin = libc::sockaddr_in {
                sin_family: libc::AF_INET as libc::sa_family_t,
                sin_port: v4.port().to_be(),
                sin_addr: libc::in_addr {
                    s_addr: u32::from_ne_bytes(v4.ip().octets()),
                },
                sin_zero: [0; 8],
            };
            unsafe {
                std::ptr::write(&mut storage as *mut _ as *mut libc::sockaddr_in, sin);
            }
            (
                storage,
                std::mem::size_of::<libc::sockaddr_in>() as libc::socklen_t,
                libc::AF_INET,
            )
        }
        SocketAddr::V6(v6) => {
            let sin6 = libc::sockaddr_in6 {
                sin6_family: libc::AF_INET6 as libc::sa_family_t,
                sin6_port: v6.port().to_be(),
                sin6_flowinfo: v6.flowinfo(),
                sin6_addr: libc::in6_addr {
                    s6_addr: v6.ip().octets(),
                },
                sin6_scope_id: v6.scope_id(),
            };
            unsafe {
                std::ptr::write(&mut storage as *mut _ as *mut libc::sockaddr_in6, sin6);
            }
            (
                storage,
                std::mem::size_of::<libc::sockaddr_in6>() as libc::socklen_t,
                libc::AF_INET6,
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.recv_timeout, Duration::from_secs(3));
        assert_eq!(config.transmit, TransmitMode::Standard);
    }

    #[test]
    fn test_resolution_error_no_connect() {
        // Host kosong gagal di resolver, bukan di connect
        let err = connect_and_send("", 2345, b"x", &ClientConfig::default()).unwrap_err();
        assert!(matches!(err, GelosError::Resolution(_)));
    }
}
