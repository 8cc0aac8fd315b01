//! Criterion micro-benchmarks for grid operations.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use toroid_bench::seeded_grid;
use toroid_core::Cell;

/// Benchmark: one generation on a 50x50 grid (2.5K cells).
fn bench_advance_50(c: &mut Criterion) {
    let mut grid = seeded_grid(50, 50, 42);
    c.bench_function("advance_50x50", |b| {
        b.iter(|| black_box(grid.advance()));
    });
}

/// Benchmark: one generation on a 100x100 grid (10K cells).
fn bench_advance_100(c: &mut Criterion) {
    let mut grid = seeded_grid(100, 100, 42);
    c.bench_function("advance_100x100", |b| {
        b.iter(|| black_box(grid.advance()));
    });
}

/// Benchmark: count live neighbours for every cell of a 100x100 torus.
fn bench_live_neighbours_100(c: &mut Criterion) {
    let grid = seeded_grid(100, 100, 7);
    let torus = toroid_grid::Torus::new(grid.dimensions());
    c.bench_function("live_neighbours_100x100", |b| {
        b.iter(|| {
            let mut total = 0u32;
            for y in 0..100 {
                for x in 0..100 {
                    total += u32::from(torus.live_neighbours(grid.cells(), x, y));
                }
            }
            black_box(total)
        });
    });
}

/// Benchmark: toggle every cell once (point-edit throughput).
fn bench_toggle_all_100(c: &mut Criterion) {
    let mut grid = seeded_grid(100, 100, 3);
    c.bench_function("toggle_all_100x100", |b| {
        b.iter(|| {
            for y in 0..100 {
                for x in 0..100 {
                    black_box(grid.toggle(x, y).unwrap_or(Cell::Dead));
                }
            }
        });
    });
}

/// Benchmark: snapshot copy of a 100x100 grid.
fn bench_snapshot_100(c: &mut Criterion) {
    let grid = seeded_grid(100, 100, 5);
    c.bench_function("snapshot_100x100", |b| {
        b.iter(|| black_box(grid.snapshot()));
    });
}

criterion_group!(
    benches,
    bench_advance_50,
    bench_advance_100,
    bench_live_neighbours_100,
    bench_toggle_all_100,
    bench_snapshot_100,
);
criterion_main!(benches);
