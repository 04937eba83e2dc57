//! Physical constants carried alongside a field.

/// The `(diffusivity, spatial_step, time_step)` triple.
///
/// Stored verbatim: no range or sign validation happens on construction or
/// assignment. The default neighbour-average update ignores these values;
/// only the explicit diffusion rule reads them, through
/// [`diffusion_number`](Constants::diffusion_number).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Constants {
    /// Diffusion coefficient `D`.
    pub diffusivity: f64,
    /// Grid spacing `dx`.
    pub spatial_step: f64,
    /// Timestep `dt`.
    pub time_step: f64,
}

impl Default for Constants {
    fn default() -> Self {
        Self {
            diffusivity: 1.0,
            spatial_step: 1.0,
            time_step: 1.0,
        }
    }
}

impl Constants {
    /// Stability bound on the diffusion number for the 2D explicit
    /// five-point scheme.
    pub const STABILITY_LIMIT: f64 = 0.25;

    /// Build a constants triple from its three components.
    pub fn new(diffusivity: f64, spatial_step: f64, time_step: f64) -> Self {
        Self {
            diffusivity,
            spatial_step,
            time_step,
        }
    }

    /// `D * dt / dx²`, the weight applied to the discrete Laplacian.
    pub fn diffusion_number(&self) -> f64 {
        self.diffusivity * self.time_step / (self.spatial_step * self.spatial_step)
    }

    /// Returns `true` if all three components are finite.
    pub fn is_finite(&self) -> bool {
        self.diffusivity.is_finite() && self.spatial_step.is_finite() && self.time_step.is_finite()
    }

    /// Returns `true` if the explicit update is stable with these constants.
    ///
    /// Informational only; nothing in the workspace refuses to step when
    /// this is `false`.
    pub fn is_stable(&self) -> bool {
        self.diffusion_number() <= Self::STABILITY_LIMIT
    }

    /// Largest `dt` keeping the explicit update stable: `dx² / (4 * D)`.
    ///
    /// Infinite when the diffusivity is zero.
    pub fn max_stable_dt(&self) -> f64 {
        if self.diffusivity == 0.0 {
            return f64::INFINITY;
        }
        self.spatial_step * self.spatial_step / (4.0 * self.diffusivity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_all_ones() {
        let k = Constants::default();
        assert_eq!(k.diffusivity, 1.0);
        assert_eq!(k.spatial_step, 1.0);
        assert_eq!(k.time_step, 1.0);
        assert_eq!(k.diffusion_number(), 1.0);
    }

    #[test]
    fn diffusion_number_scales_with_inverse_square_of_dx() {
        let k = Constants::new(0.5, 2.0, 1.0);
        assert_eq!(k.diffusion_number(), 0.125);
    }

    #[test]
    fn stability_threshold() {
        assert!(Constants::new(0.25, 1.0, 1.0).is_stable());
        assert!(!Constants::new(0.3, 1.0, 1.0).is_stable());
        assert!(!Constants::default().is_stable());
    }

    #[test]
    fn max_stable_dt() {
        assert_eq!(Constants::new(0.25, 1.0, 1.0).max_stable_dt(), 1.0);
        assert_eq!(Constants::new(1.0, 2.0, 1.0).max_stable_dt(), 1.0);
        assert_eq!(Constants::new(0.0, 1.0, 1.0).max_stable_dt(), f64::INFINITY);
    }

    #[test]
    fn negative_and_non_finite_values_are_stored_verbatim() {
        let k = Constants::new(-1.0, f64::NAN, f64::INFINITY);
        assert_eq!(k.diffusivity, -1.0);
        assert!(k.spatial_step.is_nan());
        assert!(!k.is_finite());
    }
}
