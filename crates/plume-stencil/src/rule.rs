//! Runtime selection of the update rule.

use crate::{step_average, step_explicit};
use plume_core::{Constants, Scalar};
use plume_grid::Grid;

/// Which update a field engine applies on `step()`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StepRule {
    /// Unweighted mean of the four cardinal neighbours. Ignores the
    /// constants entirely.
    #[default]
    NeighbourAverage,
    /// Forward-Euler diffusion weighted by the constants'
    /// [`diffusion_number`](Constants::diffusion_number).
    ExplicitDiffusion,
}

impl StepRule {
    /// Stable lowercase label, used in logs and metrics.
    pub fn name(&self) -> &'static str {
        match self {
            Self::NeighbourAverage => "neighbour_average",
            Self::ExplicitDiffusion => "explicit_diffusion",
        }
    }

    /// Returns `true` if this rule reads the constants.
    pub fn uses_constants(&self) -> bool {
        matches!(self, Self::ExplicitDiffusion)
    }

    /// Apply the rule to `prev`, returning a fresh successor grid.
    pub fn apply<T: Scalar>(&self, prev: &Grid<T>, constants: &Constants) -> Grid<T> {
        match self {
            Self::NeighbourAverage => step_average(prev),
            Self::ExplicitDiffusion => step_explicit(prev, constants),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plume_test_utils::golden_grid;

    #[test]
    fn default_is_neighbour_average() {
        assert_eq!(StepRule::default(), StepRule::NeighbourAverage);
        assert!(!StepRule::default().uses_constants());
        assert!(StepRule::ExplicitDiffusion.uses_constants());
    }

    #[test]
    fn names_are_distinct() {
        assert_ne!(
            StepRule::NeighbourAverage.name(),
            StepRule::ExplicitDiffusion.name()
        );
    }

    #[test]
    fn average_ignores_constants() {
        let g = golden_grid();
        let a = StepRule::NeighbourAverage.apply(&g, &Constants::default());
        let b = StepRule::NeighbourAverage.apply(&g, &Constants::new(9.0, 0.1, 3.0));
        assert_eq!(a, b);
    }

    #[test]
    fn explicit_dispatch_reads_constants() {
        let g = golden_grid();
        let still = StepRule::ExplicitDiffusion.apply(&g, &Constants::new(0.0, 1.0, 1.0));
        assert_eq!(still, g);
    }
}
