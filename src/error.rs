//! Error taxonomy untuk satu exchange lifecycle.
//!
//! Setiap kind punya diagnostic message yang berbeda, supaya caller
//! bisa membedakan "peer menjawab tapi salah" dari plain I/O failure.

use std::io;

use thiserror::Error;

/// Semua failure kinds dari connect-and-send dan framed receive.
#[derive(Debug, Error)]
pub enum GelosError {
    /// Host/port resolution failed; carries the resolver diagnostic.
    #[error("error occured while calling the resolver: {0}")]
    Resolution(String),

    /// Stream socket could not be created (fast-open path).
    #[error("socket not created: {0}")]
    SocketCreate(io::Error),

    /// Blocking connect to the resolved address failed.
    #[error("error on connection: {0}")]
    Connect(io::Error),

    /// The request buffer could not be transmitted.
    #[error("no bytes have been sent: {0}")]
    Send(io::Error),

    /// The configured receive timeout could not be read back.
    #[error("could not get the socket option: {0}")]
    GetOption(io::Error),

    /// No data arrived within the configured receive timeout.
    #[error("timeout when receiving response")]
    Timeout,

    /// The receive call itself failed.
    #[error("error during data receive: {0}")]
    Io(io::Error),

    /// Zero-length receive on a ready socket - peer closed the connection.
    #[error("connection was closed")]
    Closed,

    /// Header too short atau type tag tidak sesuai dengan response tag.
    #[error("server did not respond with the proper header")]
    MalformedHeader,
}

/// Result alias dengan [`GelosError`].
pub type Result<T> = std::result::Result<T, GelosError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distinct_diagnostics() {
        // Timeout dan Closed harus menghasilkan pesan yang berbeda
        assert_ne!(GelosError::Timeout.to_string(), GelosError::Closed.to_string());
        assert_eq!(
            GelosError::Timeout.to_string(),
            "timeout when receiving response"
        );
        assert_eq!(GelosError::Closed.to_string(), "connection was closed");
    }

    #[test]
    fn test_malformed_header_message() {
        assert_eq!(
            GelosError::MalformedHeader.to_string(),
            "server did not respond with the proper header"
        );
    }
}
