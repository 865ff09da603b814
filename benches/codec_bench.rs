//! Criterion benchmark untuk request/response codec
//!
//! Run dengan: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use gelos::protocol::{RequestFrame, ResponseHeader};
use gelos::RequestEncoder;

fn bench_request_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("request_codec");
    group.throughput(Throughput::Elements(1));

    // Encode ke pre-allocated buffer, tanpa alokasi per iterasi
    group.bench_function("encode", |b| {
        let mut encoder = RequestEncoder::new();
        b.iter(|| {
            let frame = encoder.encode(black_box("Ann"), black_box("Lee"));
            black_box(frame.len())
        });
    });

    group.bench_function("decode", |b| {
        let mut encoder = RequestEncoder::new();
        let frame = encoder.encode("Katherine", "Johnson").to_vec();
        b.iter(|| {
            let parsed = RequestFrame::from_bytes(black_box(&frame)).unwrap();
            black_box(parsed.first_name.len())
        });
    });

    group.finish();
}

fn bench_response_header(c: &mut Criterion) {
    let mut group = c.benchmark_group("response_header");
    group.throughput(Throughput::Elements(1));

    group.bench_function("encode", |b| {
        b.iter(|| black_box(ResponseHeader::new(black_box(512)).encode()));
    });

    group.bench_function("decode", |b| {
        let bytes = ResponseHeader::new(512).encode();
        b.iter(|| {
            let header = ResponseHeader::from_bytes(black_box(&bytes)).unwrap();
            black_box(header.clamped_length())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_request_encode, bench_response_header);
criterion_main!(benches);
