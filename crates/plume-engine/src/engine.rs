//! The [`FieldEngine`] façade.

use std::time::Instant;

use plume_core::{Constants, GridError, Scalar};
use plume_grid::Grid;
use plume_stencil::StepRule;
use tracing::{debug, trace, warn};

use crate::config::EngineConfig;
use crate::metrics::StepMetrics;
use crate::sources::SourceRegistry;

/// A 2D scalar field with its sources, constants and update rule.
///
/// The engine exclusively owns its grid and source storage; callers only
/// ever borrow them. [`Clone`] produces a fully independent deep copy, so
/// mutating one engine never affects another.
///
/// Nothing here fails on bad input:
/// - extents below 1 are clamped to 1,
/// - out-of-bounds writes are ignored and reads return zero,
/// - shrinking discards cells outside the new extent.
///
/// # Examples
///
/// ```
/// use plume_engine::FieldEngine;
///
/// let mut engine = FieldEngine::<f32>::new(5, 5);
/// engine.add_source(100.0);
/// engine.set(2, 2, 100.0);
/// engine.set(4, 0, 50.0);
///
/// engine.step();
///
/// assert_eq!(engine.get(4, 0), 50.0); // boundary: held fixed
/// assert_eq!(engine.get(2, 2), 0.0); // all four neighbours were zero
/// assert_eq!(engine.get(1, 2), 25.0); // one neighbour was 100
/// assert_eq!(engine.generation(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct FieldEngine<T> {
    grid: Grid<T>,
    sources: SourceRegistry<T>,
    constants: Constants,
    step_rule: StepRule,
    generation: u64,
    last_metrics: StepMetrics,
}

impl<T: Scalar> FieldEngine<T> {
    /// Create a zero-filled `rows x cols` engine with default constants,
    /// the neighbour-average rule and no sources.
    pub fn new(rows: i32, cols: i32) -> Self {
        Self::from_config(&EngineConfig::with_extent(rows, cols))
    }

    /// Create an engine from a configuration. Never fails; extents are
    /// clamped.
    pub fn from_config(config: &EngineConfig) -> Self {
        let grid = Grid::new(config.rows, config.cols);
        debug!(
            rows = grid.rows(),
            cols = grid.cols(),
            rule = config.step_rule.name(),
            "field engine created"
        );
        Self {
            grid,
            sources: SourceRegistry::new(),
            constants: config.constants,
            step_rule: config.step_rule,
            generation: 0,
            last_metrics: StepMetrics::default(),
        }
    }

    // ── Extents ────────────────────────────────────────────────────

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.grid.rows()
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.grid.cols()
    }

    /// Change the grid extent, keeping the overlapping cells.
    ///
    /// See [`Grid::resize`] for the exact copy rule.
    pub fn resize(&mut self, rows: i32, cols: i32) {
        let (old_rows, old_cols) = (self.grid.rows(), self.grid.cols());
        self.grid.resize(rows, cols);
        debug!(
            old_rows,
            old_cols,
            rows = self.grid.rows(),
            cols = self.grid.cols(),
            "grid resized"
        );
    }

    // ── Cells ──────────────────────────────────────────────────────

    /// Read a cell; zero when out of bounds.
    pub fn get(&self, row: i32, col: i32) -> T {
        self.grid.get(row, col)
    }

    /// Write a cell; ignored when out of bounds.
    pub fn set(&mut self, row: i32, col: i32, value: T) {
        self.grid.set(row, col, value);
    }

    /// Read a cell, reporting out-of-bounds access.
    pub fn try_get(&self, row: i32, col: i32) -> Result<T, GridError> {
        self.grid.try_get(row, col)
    }

    /// Write a cell, reporting out-of-bounds access.
    pub fn try_set(&mut self, row: i32, col: i32, value: T) -> Result<(), GridError> {
        self.grid.try_set(row, col, value)
    }

    /// Read-only view of the grid, for rendering.
    pub fn grid(&self) -> &Grid<T> {
        &self.grid
    }

    // ── Sources ────────────────────────────────────────────────────

    /// Append a source value.
    pub fn add_source(&mut self, value: T) {
        self.sources.push(value);
    }

    /// The registered sources, in insertion order.
    pub fn sources(&self) -> &SourceRegistry<T> {
        &self.sources
    }

    // ── Constants and rule ─────────────────────────────────────────

    /// Overwrite the constants. No validation is performed.
    pub fn set_constants(&mut self, diffusivity: f64, spatial_step: f64, time_step: f64) {
        self.constants = Constants::new(diffusivity, spatial_step, time_step);
        debug!(
            diffusivity,
            spatial_step,
            time_step,
            diffusion_number = self.constants.diffusion_number(),
            "constants updated"
        );
    }

    /// Current constants.
    pub fn constants(&self) -> Constants {
        self.constants
    }

    /// Current update rule.
    pub fn step_rule(&self) -> StepRule {
        self.step_rule
    }

    /// Select the update rule used by subsequent steps.
    pub fn set_step_rule(&mut self, rule: StepRule) {
        debug!(from = self.step_rule.name(), to = rule.name(), "step rule changed");
        self.step_rule = rule;
    }

    // ── Stepping ───────────────────────────────────────────────────

    /// Advance the field by one update.
    ///
    /// The successor grid is computed in full from the current one and
    /// then swapped in, so no caller ever observes a half-updated field.
    pub fn step(&mut self) {
        let start = Instant::now();

        if self.step_rule.uses_constants() && !self.constants.is_stable() {
            warn!(
                diffusion_number = self.constants.diffusion_number(),
                limit = Constants::STABILITY_LIMIT,
                "explicit diffusion step with unstable constants"
            );
        }

        let next = self.step_rule.apply(&self.grid, &self.constants);
        self.grid = next;
        self.generation += 1;

        self.last_metrics = StepMetrics {
            total_us: start.elapsed().as_micros() as u64,
            interior_cells: self.grid.interior_count(),
            rule: self.step_rule.name(),
        };
        trace!(
            generation = self.generation,
            rule = self.last_metrics.rule,
            elapsed_us = self.last_metrics.total_us,
            "step complete"
        );
    }

    /// Number of completed steps.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Metrics from the most recent step.
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }
}
