//! Framed Reader: timeout-aware receive + response processing
//!
//! Readiness wait lewat mio poll, dengan timeout yang DIBACA BALIK dari
//! socket option - bukan diasumsikan sama dengan konfigurasi awal.
//! Partial reads normal: caller loop sampai target length terpenuhi.

use std::io::{self, Read};
use std::net::TcpStream;

use mio::{Events, Interest, Poll, Token};

use crate::error::{GelosError, Result};
use crate::protocol::{ResponseHeader, JOKE_BUFFER_SIZE, RESPONSE_HEADER_SIZE};

const STREAM_TOKEN: Token = Token(0);
const EVENTS_CAPACITY: usize = 4;

/// Joke hasil satu exchange yang sukses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Joke {
    /// Payload sebagai text, panjangnya target length hasil clamping
    pub text: String,
}

/// Reader untuk satu framed response
///
/// Mengambil ownership dari connected stream; socket tertutup lewat
/// drop di SEMUA exit path - sukses, protocol error, timeout, I/O error.
pub struct FramedReader {
    stream: TcpStream,
    // Clone fd yang ter-register; harus hidup selama poll dipakai
    _registration: mio::net::TcpStream,
    poll: Poll,
    events: Events,
}

impl FramedReader {
    /// Wrap stream yang sudah connected dan daftarkan untuk readiness
    pub fn new(stream: TcpStream) -> Result<Self> {
        stream.set_nonblocking(true).map_err(GelosError::Io)?;

        let poll = Poll::new().map_err(GelosError::Io)?;
        let mut registration =
            mio::net::TcpStream::from_std(stream.try_clone().map_err(GelosError::Io)?);
        poll.registry()
            .register(&mut registration, STREAM_TOKEN, Interest::READABLE)
            .map_err(GelosError::Io)?;

        Ok(Self {
            stream,
            _registration: registration,
            poll,
            events: Events::with_capacity(EVENTS_CAPACITY),
        })
    }

    /// Satu receive attempt, dibatasi timeout yang sedang ter-configure
    /// di socket.
    ///
    /// Returns jumlah bytes yang benar-benar terbaca (bisa kurang dari
    /// kapasitas `buf` - partial read BUKAN completion). Zero-byte read
    /// pada socket yang ready berarti peer menutup koneksi, dibedakan
    /// dari timeout.
    pub fn recv_timeout(&mut self, buf: &mut [u8]) -> Result<usize> {
        let timeout = self.stream.read_timeout().map_err(GelosError::GetOption)?;

        loop {
            // Drain dulu: data yang sudah buffered tidak memicu
            // readiness event baru pada edge-triggered poll
            match self.stream.read(buf) {
                Ok(0) => return Err(GelosError::Closed),
                Ok(n) => return Ok(n),
                Err(ref e) if e.kind() == io::ErrorKind::WouldBlock => {}
                Err(e) => return Err(GelosError::Io(e)),
            }

            // timeout None berarti option tidak ter-set: tunggu tanpa batas
            self.poll
                .poll(&mut self.events, timeout)
                .map_err(GelosError::Io)?;

            if self.events.is_empty() {
                return Err(GelosError::Timeout);
            }
        }
    }

    /// Baca satu framed response: header, validasi, lalu payload loop.
    ///
    /// Header yang pendek atau ber-type tag salah tidak pernah di-retry.
    /// `joke_length` di-clamp ke kapasitas buffer minus terminator slot
    /// sebelum jadi target length.
    pub fn process_response(mut self) -> Result<Joke> {
        let mut header_buf = [0u8; RESPONSE_HEADER_SIZE];
        let header_bytes = self.recv_timeout(&mut header_buf)?;

        let header = match ResponseHeader::from_bytes(&header_buf[..header_bytes]) {
            Some(h) if h.is_valid() => h,
            _ => return Err(GelosError::MalformedHeader),
        };

        let target_len = header.clamped_length();
        tracing::debug!(
            declared = header.joke_length,
            target = target_len,
            "response header ok"
        );

        let mut joke_buf = vec![0u8; JOKE_BUFFER_SIZE].into_boxed_slice();
        let mut received = 0usize;

        while received < target_len {
            // Receive ke region yang belum terisi, maju sebesar hasil read
            let n = self.recv_timeout(&mut joke_buf[received..target_len])?;
            received += n;
            tracing::debug!(received, target = target_len, "payload chunk");
        }

        Ok(Joke {
            text: String::from_utf8_lossy(&joke_buf[..target_len]).into_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    // Receive path memerlukan actual socket; lihat tests/joke_exchange.rs
}
