//! Network Layer: Synchronous Framed I/O
//!
//! Dua komponen, dikomposisi linear untuk satu connection lifecycle:
//! - Connector: resolve + connect + transmit, receive timeout di-set
//!   sebelum transfer apapun
//! - Framed Reader: bounded receive lewat mio poll, header dulu,
//!   lalu payload loop dengan clamping
//!
//! Single-threaded dan blocking: satu socket handle per exchange,
//! tidak pernah shared, tertutup tepat sekali lewat ownership.

mod connector;
mod exchange;
mod receiver;

pub use connector::{connect_and_send, ClientConfig, TransmitMode, DEFAULT_TIMEOUT};
pub use exchange::{fetch_joke, read_response};
pub use receiver::{FramedReader, Joke};
