//! Satu connection lifecycle: connect-and-send → framed read → close

use std::net::TcpStream;

use crate::error::Result;
use crate::network::connector::{connect_and_send, ClientConfig};
use crate::network::receiver::{FramedReader, Joke};
use crate::protocol::RequestEncoder;

/// Kirim satu joke request dan terima payload-nya.
///
/// Komposisi linear: encode → connect-and-send → read-header →
/// read-payload-loop → close. Tidak ada retry di layer ini; caller yang
/// memutuskan mengulang exchange dari awal. Socket tertutup di semua
/// exit path lewat ownership.
pub fn fetch_joke(
    host: &str,
    port: u16,
    first_name: &str,
    last_name: &str,
    config: &ClientConfig,
) -> Result<Joke> {
    let mut encoder = RequestEncoder::new();
    let request = encoder.encode(first_name, last_name);

    let stream = connect_and_send(host, port, request, config)?;
    read_response(stream)
}

/// Framed read dari stream yang sudah connected
pub fn read_response(stream: TcpStream) -> Result<Joke> {
    let reader = FramedReader::new(stream)?;
    reader.process_response()
}
