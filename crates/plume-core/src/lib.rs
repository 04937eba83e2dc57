//! Core types and traits for the Plume field engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the Plume workspace:
//! the [`Scalar`] element trait, the physical [`Constants`] triple, and
//! the error types shared by the grid and engine crates.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod constants;
pub mod error;
pub mod scalar;

pub use constants::Constants;
pub use error::GridError;
pub use scalar::Scalar;
