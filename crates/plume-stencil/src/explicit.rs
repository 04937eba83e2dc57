//! Forward-Euler (FTCS) diffusion on the five-point Laplacian.

use plume_core::{Constants, Scalar};
use plume_grid::Grid;

/// Compute one explicit diffusion step and return the successor grid.
///
/// Each interior cell is updated as
///
/// ```text
/// next = prev + r * (north + south + west + east - 4 * prev)
/// r    = diffusivity * time_step / spatial_step²
/// ```
///
/// with the arithmetic carried out in `f64` and narrowed back through
/// [`Scalar::from_f64`]. Boundary cells are copied unchanged, exactly as in
/// [`step_average`](crate::step_average).
///
/// With `r = 0.25` the update reduces to the plain neighbour average. Larger
/// values are unstable (see [`Constants::is_stable`]) but are applied as
/// given.
pub fn step_explicit<T: Scalar>(prev: &Grid<T>, constants: &Constants) -> Grid<T> {
    let mut next = prev.clone();
    if prev.interior_count() == 0 {
        return next;
    }

    let weight = constants.diffusion_number();
    let rows = prev.rows() as usize;
    let cols = prev.cols() as usize;
    let src = prev.as_slice();
    let dst = next.as_mut_slice();

    for r in 1..rows - 1 {
        for c in 1..cols - 1 {
            let i = r * cols + c;
            let here = src[i].to_f64();
            let laplacian = src[i - cols].to_f64()
                + src[i + cols].to_f64()
                + src[i - 1].to_f64()
                + src[i + 1].to_f64()
                - 4.0 * here;
            dst[i] = T::from_f64(here + weight * laplacian);
        }
    }

    next
}
