//! Unweighted 4-neighbour average.

use plume_core::Scalar;
use plume_grid::Grid;

/// Compute one neighbour-average step and return the successor grid.
///
/// ```text
/// next[i][j] = (prev[i-1][j] + prev[i+1][j] + prev[i][j-1] + prev[i][j+1]) / 4
/// ```
///
/// for every interior cell; boundary cells are copied from `prev`. Grids
/// with fewer than three rows or columns have no interior, so the result
/// is a plain copy.
///
/// ```
/// use plume_grid::Grid;
/// use plume_stencil::step_average;
///
/// let mut g = Grid::<f32>::new(3, 3);
/// g.set(0, 1, 8.0);
/// let next = step_average(&g);
/// assert_eq!(next.get(1, 1), 2.0);
/// assert_eq!(next.get(0, 1), 8.0);
/// ```
pub fn step_average<T: Scalar>(prev: &Grid<T>) -> Grid<T> {
    // Starting from a full copy covers every boundary cell.
    let mut next = prev.clone();
    if prev.interior_count() == 0 {
        return next;
    }

    let rows = prev.rows() as usize;
    let cols = prev.cols() as usize;
    let src = prev.as_slice();
    let dst = next.as_mut_slice();

    for r in 1..rows - 1 {
        for c in 1..cols - 1 {
            let i = r * cols + c;
            let north = src[i - cols];
            let south = src[i + cols];
            let west = src[i - 1];
            let east = src[i + 1];
            dst[i] = T::mean4(north, south, west, east);
        }
    }

    next
}
