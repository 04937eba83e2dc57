//! Dense 2D field storage for Plume.
//!
//! [`Grid`] is the owning, row-major store behind every field engine. It
//! supports bounds-checked point access that never fails, fallible
//! `try_*` variants for callers that want an explicit signal, and
//! resize with best-effort data preservation.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod grid;

pub use grid::{Grid, RowsIter};
