//! Criterion benchmarks for the decoder pipeline.
//!
//! Measures full decodes across buffer sizes and composition strategies,
//! plus the two CDF approximations in isolation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use decoder_core::cdf::{norm_cdf_erf, norm_cdf_rational};
use decoder_core::config::DecodeConfig;
use decoder_core::decode::decode;

/// Deterministic pseudo-entropy for benchmarking.
fn bench_bytes(len: usize) -> Vec<u8> {
    (0..len).map(|j| ((j * 131 + 17) % 256) as u8).collect()
}

/// Benchmark full decodes for each composition strategy.
fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for size in [1024usize, 8192, 65536] {
        let bytes = bench_bytes(size);

        group.bench_with_input(BenchmarkId::new("direct", size), &bytes, |b, bytes| {
            let config = DecodeConfig::direct(1024);
            b.iter(|| decode(black_box(bytes), &config).unwrap());
        });

        group.bench_with_input(
            BenchmarkId::new("coarse_fine", size),
            &bytes,
            |b, bytes| {
                let config = DecodeConfig::coarse_fine(32);
                b.iter(|| decode(black_box(bytes), &config).unwrap());
            },
        );

        group.bench_with_input(
            BenchmarkId::new("mixed_radix", size),
            &bytes,
            |b, bytes| {
                let config = DecodeConfig::mixed_radix(8, 9, 3_401_286_407);
                b.iter(|| decode(black_box(bytes), &config).unwrap());
            },
        );
    }

    group.finish();
}

/// Benchmark the two CDF approximations over a z-score sweep.
fn bench_cdf(c: &mut Criterion) {
    let mut group = c.benchmark_group("norm_cdf");
    let zs: Vec<f64> = (-600..=600).map(|i| i as f64 * 0.01).collect();

    group.bench_function("rational", |b| {
        b.iter(|| {
            for &z in &zs {
                black_box(norm_cdf_rational(black_box(z)));
            }
        });
    });

    group.bench_function("erf_polynomial", |b| {
        b.iter(|| {
            for &z in &zs {
                black_box(norm_cdf_erf(black_box(z)));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_decode, bench_cdf);
criterion_main!(benches);
