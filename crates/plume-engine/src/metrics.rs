//! Per-step metrics for the field engine.

/// Timing and workload figures for the most recent `step()`.
///
/// Populated by the engine after every step; all zero (and an empty rule
/// label) before the first one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StepMetrics {
    /// Wall-clock time for the step, in microseconds.
    pub total_us: u64,
    /// Number of interior cells recomputed.
    pub interior_cells: usize,
    /// Label of the rule that ran (see `StepRule::name`).
    pub rule: &'static str,
}
