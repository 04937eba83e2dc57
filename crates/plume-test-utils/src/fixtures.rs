//! Reusable grid and engine fixtures.
//!
//! - [`golden_grid`] / [`golden_engine`] — 5x5 zero field with
//!   `(2,2) = 100` and `(4,0) = 50`.
//! - [`random_grid`] — seeded, integer-valued cells in `[-1000, 1000]`.
//! - [`engine_from_grid`] — wrap an existing grid in a default engine.

use plume_core::Scalar;
use plume_engine::FieldEngine;
use plume_grid::Grid;
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// The 5x5 scenario: all zero except `(2,2) = 100` and `(4,0) = 50`.
///
/// After one neighbour-average step, `(4,0)` stays 50, `(2,2)` drops to 0
/// and its four neighbours become 25.
pub fn golden_grid() -> Grid<f32> {
    let mut grid = Grid::new(5, 5);
    grid.set(2, 2, 100.0);
    grid.set(4, 0, 50.0);
    grid
}

/// [`golden_grid`] inside a default engine.
pub fn golden_engine() -> FieldEngine<f32> {
    engine_from_grid(golden_grid())
}

/// A grid filled from a ChaCha8 stream seeded with `seed`.
///
/// Values are whole numbers in `[-1000, 1000]` converted through
/// [`Scalar::from_f64`], so the same seed yields the same grid for every
/// element type (unsigned types saturate negatives to zero).
pub fn random_grid<T: Scalar>(rows: i32, cols: i32, seed: u64) -> Grid<T> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut grid = Grid::new(rows, cols);
    for cell in grid.as_mut_slice() {
        let v = (rng.next_u32() % 2001) as f64 - 1000.0;
        *cell = T::from_f64(v);
    }
    grid
}

/// Build a default engine with the extent and contents of `grid`.
pub fn engine_from_grid<T: Scalar>(grid: Grid<T>) -> FieldEngine<T> {
    let mut engine = FieldEngine::new(grid.rows() as i32, grid.cols() as i32);
    for (r, row) in grid.rows_iter().enumerate() {
        for (c, &v) in row.iter().enumerate() {
            engine.set(r as i32, c as i32, v);
        }
    }
    engine
}
