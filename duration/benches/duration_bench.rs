//! Benchmarks for duration parsing and formatting.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use giztoy_duration::{format, parse};

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("duration_parse");

    for input in ["30", "300ms", "-1.5h", "2h45m", "7d8.9h17.78m1ns", "1001µs589ns"] {
        group.bench_with_input(BenchmarkId::from_parameter(input), input, |b, input| {
            b.iter(|| parse(black_box(input)).unwrap());
        });
    }

    group.finish();
}

fn bench_parse_invalid(c: &mut Criterion) {
    c.bench_function("duration_parse_invalid", |b| {
        b.iter(|| parse(black_box("1hm45mss")).unwrap_err());
    });
}

fn bench_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("duration_format");

    for nanos in [0i64, 999, 1_001, 300_000_000, 9_900_000_000_000, i64::MIN] {
        group.bench_with_input(BenchmarkId::from_parameter(nanos), &nanos, |b, &nanos| {
            b.iter(|| format(black_box(nanos)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse, bench_parse_invalid, bench_format);
criterion_main!(benches);
