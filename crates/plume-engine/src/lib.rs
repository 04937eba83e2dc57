//! Field engine for Plume.
//!
//! [`FieldEngine`] owns a [`Grid`](plume_grid::Grid), a
//! [`SourceRegistry`], a [`Constants`](plume_core::Constants) triple and the
//! selected [`StepRule`](plume_stencil::StepRule), and exposes them through a
//! single value-semantic façade. Cloning an engine deep-copies all of it.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod engine;
pub mod metrics;
pub mod sources;

pub use config::{ConfigError, EngineConfig};
pub use engine::FieldEngine;
pub use metrics::StepMetrics;
pub use sources::SourceRegistry;
