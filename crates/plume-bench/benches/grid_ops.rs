//! Criterion micro-benchmarks for grid storage operations.

use criterion::{criterion_group, criterion_main, Criterion};
use plume_bench::reference_engine;
use plume_grid::Grid;
use plume_test_utils::random_grid;
use std::hint::black_box;

/// Benchmark: write then read every cell of a 100x100 grid.
fn bench_set_get_sweep_10k(c: &mut Criterion) {
    let mut grid = Grid::<f32>::new(100, 100);

    c.bench_function("set_get_sweep_10k", |b| {
        b.iter(|| {
            let mut acc = 0.0f32;
            for r in 0..100 {
                for col in 0..100 {
                    grid.set(r, col, (r + col) as f32);
                    acc += grid.get(r, col);
                }
            }
            black_box(acc);
        });
    });
}

/// Benchmark: grow 100x100 to 150x150 and shrink back.
fn bench_resize_grow_shrink(c: &mut Criterion) {
    let base = random_grid::<f32>(100, 100, 3);

    c.bench_function("resize_grow_shrink_10k", |b| {
        b.iter(|| {
            let mut grid = base.clone();
            grid.resize(150, 150);
            grid.resize(100, 100);
            black_box(grid);
        });
    });
}

/// Benchmark: deep copy of a 100x100 engine.
fn bench_engine_clone_10k(c: &mut Criterion) {
    let mut engine = reference_engine(42);
    for i in 0..64 {
        engine.add_source(i as f32);
    }

    c.bench_function("engine_clone_10k", |b| {
        b.iter(|| black_box(engine.clone()));
    });
}

criterion_group!(
    benches,
    bench_set_get_sweep_10k,
    bench_resize_grow_shrink,
    bench_engine_clone_10k,
);
criterion_main!(benches);
