//! Request Encoder dengan pre-allocated buffer
//!
//! Serialize request ke buffer internal dengan explicit write cursor.
//! Tidak ada alokasi setelah inisialisasi, tidak ada pointer arithmetic.

use super::message::{RequestHeader, MAX_NAME_BYTES, REQUEST_HEADER_SIZE};

/// Kapasitas default: header + dua nama pada panjang maksimum
pub const REQUEST_BUFFER_SIZE: usize = REQUEST_HEADER_SIZE + 2 * MAX_NAME_BYTES;

/// Pre-allocated encoder untuk satu request frame
///
/// Nama yang lebih panjang dari [`MAX_NAME_BYTES`] dipotong SEBELUM
/// length fields dihitung, jadi length di wire tidak pernah melebihi
/// kapasitas field.
pub struct RequestEncoder {
    buffer: Box<[u8]>,
    write_pos: usize,
}

impl RequestEncoder {
    /// Membuat encoder dengan kapasitas default
    pub fn new() -> Self {
        Self {
            buffer: vec![0u8; REQUEST_BUFFER_SIZE].into_boxed_slice(),
            write_pos: 0,
        }
    }

    /// Reset encoder untuk reuse
    #[inline(always)]
    pub fn reset(&mut self) {
        self.write_pos = 0;
    }

    /// Encode satu request frame ke buffer.
    ///
    /// Returns slice ke encoded frame: `[type][len_first][len_last]`
    /// diikuti name bytes tanpa separator.
    pub fn encode(&mut self, first_name: &str, last_name: &str) -> &[u8] {
        self.reset();

        let first = truncate_name(first_name);
        let last = truncate_name(last_name);

        let header = RequestHeader::new(first.len() as u8, last.len() as u8);
        header.encode_into(&mut self.buffer[..REQUEST_HEADER_SIZE]);
        self.write_pos = REQUEST_HEADER_SIZE;

        self.buffer[self.write_pos..self.write_pos + first.len()].copy_from_slice(first);
        self.write_pos += first.len();

        self.buffer[self.write_pos..self.write_pos + last.len()].copy_from_slice(last);
        self.write_pos += last.len();

        &self.buffer[..self.write_pos]
    }

    /// Encoded frame saat ini
    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer[..self.write_pos]
    }
}

impl Default for RequestEncoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Potong name ke kapasitas field, pada UTF-8 boundary
#[inline]
fn truncate_name(name: &str) -> &[u8] {
    if name.len() <= MAX_NAME_BYTES {
        return name.as_bytes();
    }
    let mut end = MAX_NAME_BYTES;
    while !name.is_char_boundary(end) {
        end -= 1;
    }
    name[..end].as_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::message::{RequestFrame, JOKE_REQUEST_TYPE};

    #[test]
    fn test_encode_ann_lee() {
        let mut encoder = RequestEncoder::new();
        let frame = encoder.encode("Ann", "Lee");

        assert_eq!(frame, &[JOKE_REQUEST_TYPE, 3, 3, b'A', b'n', b'n', b'L', b'e', b'e']);
    }

    #[test]
    fn test_frame_length_is_header_plus_names() {
        let mut encoder = RequestEncoder::new();
        let frame = encoder.encode("Katherine", "Johnson");

        assert_eq!(frame.len(), REQUEST_HEADER_SIZE + 9 + 7);
        assert_eq!(frame[1], 9);
        assert_eq!(frame[2], 7);
    }

    #[test]
    fn test_decode_recovers_names() {
        let mut encoder = RequestEncoder::new();
        let frame = encoder.encode("Grace", "Hopper").to_vec();

        let parsed = RequestFrame::from_bytes(&frame).unwrap();
        assert_eq!(parsed.first_name, b"Grace");
        assert_eq!(parsed.last_name, b"Hopper");
    }

    #[test]
    fn test_long_names_truncated_before_length() {
        let long = "abcdefghijklmnopqrstuvwxyz"; // 26 bytes
        let mut encoder = RequestEncoder::new();
        let frame = encoder.encode(long, long);

        assert_eq!(frame[1] as usize, MAX_NAME_BYTES);
        assert_eq!(frame[2] as usize, MAX_NAME_BYTES);
        assert_eq!(frame.len(), REQUEST_HEADER_SIZE + 2 * MAX_NAME_BYTES);

        let parsed = RequestFrame::from_bytes(frame).unwrap();
        assert_eq!(parsed.first_name, &long.as_bytes()[..MAX_NAME_BYTES]);
    }

    #[test]
    fn test_truncation_respects_utf8_boundary() {
        // 10x "é" = 20 bytes; potong di boundary, bukan di tengah char
        let name = "éééééééééé";
        let mut encoder = RequestEncoder::new();
        let frame = encoder.encode(name, "x");

        assert_eq!(frame[1], 18);
        let parsed = RequestFrame::from_bytes(frame).unwrap();
        assert!(std::str::from_utf8(parsed.first_name).is_ok());
    }

    #[test]
    fn test_empty_names() {
        let mut encoder = RequestEncoder::new();
        let frame = encoder.encode("", "");
        assert_eq!(frame, &[JOKE_REQUEST_TYPE, 0, 0]);
    }

    #[test]
    fn test_encoder_reuse() {
        let mut encoder = RequestEncoder::new();
        encoder.encode("First", "Run");
        let frame = encoder.encode("Ann", "Lee").to_vec();

        assert_eq!(frame.len(), REQUEST_HEADER_SIZE + 6);
        assert_eq!(encoder.as_bytes(), frame.as_slice());
    }
}
