//! Test utilities for Plume development.
//!
//! Provides the canonical 5x5 scenario used across the workspace
//! ([`golden_grid`], [`golden_engine`]) and deterministic, seeded grid
//! generators ([`random_grid`]) for property tests and benchmarks.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{engine_from_grid, golden_engine, golden_grid, random_grid};
