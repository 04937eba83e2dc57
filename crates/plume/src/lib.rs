//! Plume: a generic 2D scalar-field engine with a fixed-boundary
//! diffusion stencil.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Plume sub-crates. For most users, adding `plume` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use plume::prelude::*;
//!
//! let mut engine = FieldEngine::<f32>::new(5, 5);
//! engine.add_source(100.0);
//! engine.set(2, 2, 100.0);
//! engine.set(4, 0, 50.0);
//!
//! engine.step();
//! assert_eq!(engine.get(1, 2), 25.0);
//! assert_eq!(engine.get(4, 0), 50.0);
//!
//! // Independent deep copy.
//! let mut copy = engine.clone();
//! copy.resize(6, 6);
//! assert_eq!(copy.get(1, 2), 25.0);
//! assert_eq!(engine.rows(), 5);
//!
//! // Opt-in: weight the update by the constants.
//! engine.set_step_rule(StepRule::ExplicitDiffusion);
//! engine.set_constants(0.1, 1.0, 1.0);
//! engine.step();
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `plume-core` | `Scalar`, `Constants`, `GridError` |
//! | [`grid`] | `plume-grid` | `Grid` storage |
//! | [`stencil`] | `plume-stencil` | Update rules |
//! | [`engine`] | `plume-engine` | `FieldEngine`, sources, config, metrics |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types (`plume-core`).
pub use plume_core as types;

/// Dense grid storage (`plume-grid`).
pub use plume_grid as grid;

/// Update rules (`plume-stencil`).
///
/// [`stencil::step_average`] is the default rule;
/// [`stencil::step_explicit`] weights the update by the constants.
pub use plume_stencil as stencil;

/// The field engine (`plume-engine`).
pub use plume_engine as engine;

/// Common imports for typical Plume usage.
///
/// ```rust
/// use plume::prelude::*;
/// ```
pub mod prelude {
    pub use plume_core::{Constants, GridError, Scalar};
    pub use plume_engine::{ConfigError, EngineConfig, FieldEngine, SourceRegistry, StepMetrics};
    pub use plume_grid::Grid;
    pub use plume_stencil::StepRule;
}
