//! Protocol Layer: Length-Prefixed Binary Framing
//!
//! Prinsip desain:
//! - Fixed-size headers: type tag dulu, baru length field
//! - Network byte order untuk semua multi-byte integers
//! - Bounds-checked: explicit write cursor, tidak ada pointer cast

mod encoder;
mod message;

pub use encoder::{RequestEncoder, REQUEST_BUFFER_SIZE};
pub use message::{
    RequestFrame, RequestHeader, ResponseHeader, JOKE_BUFFER_SIZE, JOKE_REQUEST_TYPE,
    JOKE_RESPONSE_TYPE, MAX_NAME_BYTES, NAME_MAX_LENGTH, REQUEST_HEADER_SIZE,
    RESPONSE_HEADER_SIZE,
};
