//! Decode throughput benchmarks.
//!
//! Run with:
//! ```bash
//! cargo bench --bench decode
//! ```

#![allow(clippy::expect_used)]

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use pdata_formats::archive::MemoryArchive;
use pdata_formats::procs::{ByteOrder, DecodeSettings, ElementType, ParameterSet};
use pdata_formats::reader::{ReadOptions, read_processed_data};
use pdata_formats::series::decode_samples;
use std::hint::black_box;

/// Typical 1D spectrum sizes (SI)
const SIZES: [usize; 3] = [16 * 1024, 64 * 1024, 256 * 1024];

fn payload(count: usize) -> Vec<u8> {
    (0..count as i32)
        .flat_map(|i| i.wrapping_mul(7919).wrapping_sub(1_000_000).to_le_bytes())
        .collect()
}

fn bench_decode_samples(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_samples");

    for &count in &SIZES {
        let data = payload(count);
        group.throughput(Throughput::Bytes(data.len() as u64));

        for (label, element_type, byte_order, scale_exponent) in [
            ("int32_le_unscaled", ElementType::Int32, ByteOrder::Little, 0),
            ("int32_be_scaled", ElementType::Int32, ByteOrder::Big, -3),
            ("float32_le_scaled", ElementType::Float32, ByteOrder::Little, 2),
        ] {
            let settings = DecodeSettings {
                scale_exponent,
                byte_order,
                element_type,
            };
            group.bench_with_input(BenchmarkId::new(label, count), &data, |b, data| {
                b.iter(|| decode_samples(black_box(data), &settings, true));
            });
        }
    }

    group.finish();
}

fn bench_parse_procs(c: &mut Criterion) {
    let mut text = String::from("##TITLE= Parameter file\n##JCAMPDX= 5.0\n");
    for i in 0..200 {
        text.push_str(&format!("##$PARAM{i}= {i}\n"));
    }
    text.push_str("##$NC_proc= -2\n##$BYTORDP= 0\n##$DTYPP= 0\n##END=\n");

    c.bench_function("parse_procs", |b| {
        b.iter(|| ParameterSet::parse(Some(black_box(&text))));
    });
}

fn bench_read_processed_data(c: &mut Criterion) {
    let archive = MemoryArchive::new()
        .with_member("procs", "##$NC_proc= -2\n##$BYTORDP= 0\n##$DTYPP= 0\n")
        .with_member("1r", payload(64 * 1024))
        .with_member("1i", payload(64 * 1024));
    let options = ReadOptions::new().binary_members(["1r", "1i"]);

    c.bench_function("read_processed_data_1r_1i", |b| {
        b.iter(|| read_processed_data(black_box(&archive), &options).expect("read pdata"));
    });
}

criterion_group!(
    benches,
    bench_decode_samples,
    bench_parse_procs,
    bench_read_processed_data
);
criterion_main!(benches);
