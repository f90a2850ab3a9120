// ============================================================================
// Errorbar Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Compress - value + error -> compact string, across error magnitudes
// 2. Expand - compact string -> measurement
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use errorbar::prelude::*;
use std::hint::black_box;

fn benchmark_compress(c: &mut Criterion) {
    let mut group = c.benchmark_group("compress");

    let cases = [
        ("fractional", 1.23456, 0.0067),
        ("carry", 9.996, 0.0996),
        ("integer", 12345.0, 350.0),
        ("tiny", 1.5e-10, 2e-12),
    ];

    for (name, value, error) in cases {
        for digits in [1u32, 2, 6] {
            group.bench_with_input(
                BenchmarkId::new(name, digits),
                &(value, error, digits),
                |b, &(value, error, digits)| {
                    b.iter(|| black_box(compress(black_box(value), black_box(error), digits)));
                },
            );
        }
    }

    group.finish();
}

fn benchmark_expand(c: &mut Criterion) {
    let mut group = c.benchmark_group("expand");

    group.bench_function("parse_compact", |b| {
        b.iter(|| black_box(parse_compact(black_box("1.2346(67)e-3"))));
    });

    let row = "T=300 1.2346(67) -5.0(5) 12350(35) 0.25";
    group.bench_function("expand_line", |b| {
        b.iter(|| black_box(errorbar::compress::expand_line(black_box(row), false)));
    });

    group.finish();
}

criterion_group!(benches, benchmark_compress, benchmark_expand);
criterion_main!(benches);
