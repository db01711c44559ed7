//! Frame codec benchmarks
//!
//! Measures header and frame encode/decode throughput across payload sizes.
//!
//! Run with: cargo bench --bench frame_codec

use bytes::Bytes;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use h2wire::codec::FrameCodec;
use h2wire::frames::{DataFrame, Frame, FrameFlags, FrameHeader, FrameType, SettingsFrame};
use h2wire::settings::Setting;

fn bench_header_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame_header");

    let header = FrameHeader::new(
        16384,
        FrameType::Data.as_u8(),
        FrameFlags::from_u8(FrameFlags::END_STREAM),
        1,
    );

    group.bench_function("encode", |b| {
        b.iter(|| black_box(FrameCodec::encode_header(black_box(&header))));
    });

    let wire = FrameCodec::encode_header(&header);
    group.bench_function("decode", |b| {
        b.iter(|| black_box(FrameCodec::decode_header(black_box(&wire))));
    });

    group.finish();
}

fn bench_data_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("data_frame");

    for size in [64usize, 1024, 16384] {
        let frame = Frame::Data(DataFrame::new(1, Bytes::from(vec![0xAB; size]), true));
        let wire = FrameCodec::encode_frame(&frame).unwrap();

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("encode", size), &frame, |b, frame| {
            b.iter(|| black_box(FrameCodec::encode_frame(black_box(frame)).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("decode", size), &wire, |b, wire| {
            b.iter(|| black_box(FrameCodec::read_frame(&mut wire.as_ref()).unwrap()));
        });
    }

    group.finish();
}

fn bench_settings_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("settings_frame");

    let frame = Frame::Settings(SettingsFrame::new(vec![
        Setting::new(0x1, 4096),
        Setting::new(0x3, 100),
        Setting::new(0x4, 65535),
        Setting::new(0x5, 16384),
    ]));
    let wire = FrameCodec::encode_frame(&frame).unwrap();

    group.bench_function("encode", |b| {
        b.iter(|| black_box(FrameCodec::encode_frame(black_box(&frame)).unwrap()));
    });
    group.bench_function("decode", |b| {
        b.iter(|| black_box(FrameCodec::read_frame(&mut wire.as_ref()).unwrap()));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_header_codec,
    bench_data_frame,
    bench_settings_frame
);
criterion_main!(benches);
