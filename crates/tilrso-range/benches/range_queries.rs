//! Benchmarks for the hot addressing paths.
//!
//! Ordinal computation, containment, element lookup, and iterator stepping
//! sit on the critical path of communication planning, so they are expected
//! to stay allocation-free and flat in rank.
//!
//! Run with:
//! ```bash
//! cargo bench --bench range_queries
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use tilrso_range::{AxisRange, DimOrder, ElementIndex, TileIndex, TiledRange};

fn matrix_range(matrix_size: usize, block_size: usize) -> TiledRange {
    let axis = AxisRange::uniform(matrix_size, block_size).unwrap();
    TiledRange::new(vec![axis.clone(), axis], DimOrder::RowMajor).unwrap()
}

/// Benchmark tile and element ordinal computation
fn bench_ordinal(c: &mut Criterion) {
    let mut group = c.benchmark_group("ordinal");

    for (name, matrix_size, block_size) in [
        ("1024x1024_b64", 1024, 64),
        ("4096x4096_b128", 4096, 128),
    ] {
        let range = matrix_range(matrix_size, block_size);
        let tile = TileIndex::from([matrix_size / block_size - 1, 1]);
        let element = ElementIndex::from([matrix_size - 1, block_size + 1]);

        group.bench_with_input(BenchmarkId::new("tile", name), &range, |b, range| {
            b.iter(|| range.tile_ordinal(black_box(&tile)).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("element", name), &range, |b, range| {
            b.iter(|| range.element_ordinal(black_box(&element)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark element to owning-tile lookup (per-axis binary search)
fn bench_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("find");

    for (name, matrix_size, block_size) in [("1024x1024_b16", 1024, 16), ("8192x8192_b32", 8192, 32)]
    {
        let range = matrix_range(matrix_size, block_size);
        let element = ElementIndex::from([matrix_size / 2 + 3, matrix_size - 5]);

        group.bench_with_input(BenchmarkId::from_parameter(name), &range, |b, range| {
            b.iter(|| range.find(black_box(&element)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark full tile traversal (carry-increment stepping)
fn bench_tile_iteration(c: &mut Criterion) {
    let mut group = c.benchmark_group("tile_iteration");

    for (name, matrix_size, block_size) in [("256_tiles", 1024, 64), ("4096_tiles", 4096, 64)] {
        let range = matrix_range(matrix_size, block_size);
        group.throughput(Throughput::Elements(range.ntiles() as u64));

        group.bench_with_input(BenchmarkId::from_parameter(name), &range, |b, range| {
            b.iter(|| {
                let mut visited = 0usize;
                for t in range.tiles() {
                    visited += black_box(&t).rank();
                }
                visited
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_ordinal, bench_find, bench_tile_iteration);
criterion_main!(benches);
