//! Criterion benchmarks for bloomwire
//!
//! Run with: cargo bench

use bloomwire::{decode, encode, Filter};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_add(c: &mut Criterion) {
    let mut filter = Filter::new(100_000, 0.01).unwrap();

    c.bench_function("filter_add", |b| {
        let mut i = 0u64;
        b.iter(|| {
            filter.add(black_box(&i.to_le_bytes()));
            i = i.wrapping_add(1);
        });
    });
}

fn bench_contains(c: &mut Criterion) {
    let mut filter = Filter::new(100_000, 0.01).unwrap();
    for i in 0..50_000u64 {
        filter.add(&i.to_le_bytes());
    }

    c.bench_function("filter_contains_hit", |b| {
        b.iter(|| black_box(filter.contains(black_box(b"\x39\x30\x00\x00\x00\x00\x00\x00"))));
    });

    c.bench_function("filter_contains_miss", |b| {
        b.iter(|| black_box(filter.contains(black_box(b"definitely-not-a-member"))));
    });
}

fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");

    for capacity in [1_000u32, 10_000, 100_000] {
        let mut filter = Filter::new(capacity, 0.01).unwrap();
        for i in 0..capacity as u64 / 2 {
            filter.add(&i.to_le_bytes());
        }
        let payload = filter.dump();

        group.bench_with_input(BenchmarkId::new("encode", capacity), &filter, |b, f| {
            b.iter(|| black_box(f.dump()));
        });

        group.bench_with_input(BenchmarkId::new("decode", capacity), &payload, |b, p| {
            b.iter(|| black_box(decode(black_box(p)).unwrap()));
        });
    }

    group.finish();

    // Zero-copy export for contrast with the owning dump path
    let filter = Filter::new(100_000, 0.01).unwrap();
    c.bench_function("filter_view", |b| {
        b.iter(|| black_box(filter.view().bits.len()));
    });

    let state = decode(&filter.dump()).unwrap();
    c.bench_function("state_encode", |b| {
        b.iter(|| black_box(encode(black_box(&state))));
    });
}

criterion_group!(benches, bench_add, bench_contains, bench_codec);
criterion_main!(benches);
