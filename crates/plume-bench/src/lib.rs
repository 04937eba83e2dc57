//! Benchmark profiles for the Plume field engine.
//!
//! Provides pre-built engines for benchmarking and examples:
//!
//! - [`reference_engine`]: 100x100 grid (10K cells), seeded contents
//! - [`stress_engine`]: 316x316 grid (~100K cells) for stress testing
//! - [`explicit_profile`]: the reference extent with the explicit rule and
//!   stable constants

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use plume_core::Constants;
use plume_engine::{EngineConfig, FieldEngine};
use plume_stencil::StepRule;
use plume_test_utils::{engine_from_grid, random_grid};

/// Side length of the reference profile.
pub const REFERENCE_SIDE: i32 = 100;

/// Side length of the stress profile.
pub const STRESS_SIDE: i32 = 316;

/// 100x100 `f32` engine with seeded contents and the default rule.
pub fn reference_engine(seed: u64) -> FieldEngine<f32> {
    engine_from_grid(random_grid(REFERENCE_SIDE, REFERENCE_SIDE, seed))
}

/// 316x316 `f32` engine with seeded contents and the default rule.
pub fn stress_engine(seed: u64) -> FieldEngine<f32> {
    engine_from_grid(random_grid(STRESS_SIDE, STRESS_SIDE, seed))
}

/// Reference extent, explicit rule, `D = 0.1, dx = 1, dt = 1`
/// (diffusion number 0.1, within the 0.25 stability limit).
pub fn explicit_profile() -> EngineConfig {
    EngineConfig {
        rows: REFERENCE_SIDE,
        cols: REFERENCE_SIDE,
        constants: Constants::new(0.1, 1.0, 1.0),
        step_rule: StepRule::ExplicitDiffusion,
    }
}
