//! Gelos - Length-Prefixed Joke Retrieval Client
//!
//! Arsitektur:
//! - Framing: fixed header + variable payload, length field authoritative
//! - Bounded receive: readiness poll dengan timeout dari socket option
//! - Single connection: satu socket per exchange, tertutup di semua path
//! - No retry: kebijakan retry milik caller, bukan library

pub mod error;
pub mod network;
pub mod protocol;

pub use error::{GelosError, Result};
pub use network::{
    connect_and_send, fetch_joke, read_response, ClientConfig, FramedReader, Joke, TransmitMode,
    DEFAULT_TIMEOUT,
};
pub use protocol::RequestEncoder;
