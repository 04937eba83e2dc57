//! Error types for the Plume field engine.
//!
//! The default grid API never fails: out-of-bounds writes are ignored and
//! out-of-bounds reads return zero. These errors back the opt-in fallible
//! variants (`try_get`, `try_set`) and buffer-based construction.

use std::error::Error;
use std::fmt;

/// Errors from fallible grid access and construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A cell index lies outside `[0, rows) x [0, cols)`.
    OutOfBounds {
        /// Requested row.
        row: i32,
        /// Requested column.
        col: i32,
        /// Current row extent.
        rows: u32,
        /// Current column extent.
        cols: u32,
    },
    /// A flat cell buffer does not match the requested extents.
    ShapeMismatch {
        /// `rows * cols` after clamping.
        expected: usize,
        /// Length of the supplied buffer.
        actual: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds {
                row,
                col,
                rows,
                cols,
            } => {
                write!(
                    f,
                    "cell ({row}, {col}) out of bounds: [0, {rows}) x [0, {cols})"
                )
            }
            Self::ShapeMismatch { expected, actual } => {
                write!(f, "expected {expected} cells, got {actual}")
            }
        }
    }
}

impl Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_message_names_extents() {
        let e = GridError::OutOfBounds {
            row: -1,
            col: 3,
            rows: 5,
            cols: 4,
        };
        assert_eq!(e.to_string(), "cell (-1, 3) out of bounds: [0, 5) x [0, 4)");
    }

    #[test]
    fn shape_mismatch_message() {
        let e = GridError::ShapeMismatch {
            expected: 25,
            actual: 24,
        };
        assert_eq!(e.to_string(), "expected 25 cells, got 24");
    }
}
