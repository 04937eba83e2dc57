//! Update rules for Plume fields.
//!
//! Every rule here is a pure function from the current grid to a freshly
//! allocated successor of the same extent. Boundary rows and columns are
//! copied unchanged (a fixed, Dirichlet-style boundary); interior cells are
//! recomputed from the four cardinal neighbours of the **pre-step** grid,
//! so the result does not depend on traversal order.
//!
//! - [`step_average`]: unweighted mean of the four neighbours (the default).
//! - [`step_explicit`]: forward-Euler diffusion weighted by
//!   [`Constants::diffusion_number`](plume_core::Constants::diffusion_number).
//!
//! [`StepRule`] selects between them at runtime.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod average;
pub mod explicit;
pub mod rule;

pub use average::step_average;
pub use explicit::step_explicit;
pub use rule::StepRule;
