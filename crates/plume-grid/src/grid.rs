//! Row-major 2D grid with clamp-and-ignore access semantics.

use plume_core::{GridError, Scalar};
use smallvec::SmallVec;

/// Iterator over the rows of a [`Grid`], top to bottom.
pub type RowsIter<'a, T> = std::slice::ChunksExact<'a, T>;

/// Clamp a requested extent up to at least one cell.
#[inline]
fn clamp_dim(requested: i32) -> u32 {
    requested.max(1) as u32
}

/// A dense, owned, rectangular grid of scalar values.
///
/// Cells are addressed by `(row, col)` with `0 <= row < rows` and
/// `0 <= col < cols`, stored contiguously at `row * cols + col`. Both
/// extents are always at least 1; requests below 1 are clamped, never
/// rejected.
///
/// The plain accessors never fail:
/// - [`set`](Grid::set) outside the grid is a silent no-op,
/// - [`get`](Grid::get) outside the grid returns [`Scalar::ZERO`].
///
/// [`try_get`](Grid::try_get) and [`try_set`](Grid::try_set) report the
/// same situations as [`GridError::OutOfBounds`] instead.
///
/// Cloning a grid deep-copies every cell.
///
/// # Examples
///
/// ```
/// use plume_grid::Grid;
///
/// let mut grid = Grid::<f32>::new(3, 4);
/// grid.set(1, 2, 7.5);
/// assert_eq!(grid.get(1, 2), 7.5);
///
/// // Out of bounds: ignored on write, zero on read.
/// grid.set(-1, 0, 9.0);
/// assert_eq!(grid.get(-1, 0), 0.0);
/// assert_eq!(grid.get(3, 0), 0.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T> {
    rows: u32,
    cols: u32,
    cells: Vec<T>,
}

impl<T: Scalar> Grid<T> {
    /// Create a zero-filled grid. Extents below 1 are clamped to 1.
    pub fn new(rows: i32, cols: i32) -> Self {
        let rows = clamp_dim(rows);
        let cols = clamp_dim(cols);
        Self {
            rows,
            cols,
            cells: vec![T::ZERO; rows as usize * cols as usize],
        }
    }

    /// Build a grid from a row-major cell buffer.
    ///
    /// Extents are clamped exactly as in [`new`](Grid::new); the buffer
    /// must then hold exactly `rows * cols` values.
    pub fn from_rows_vec(rows: i32, cols: i32, cells: Vec<T>) -> Result<Self, GridError> {
        let rows = clamp_dim(rows);
        let cols = clamp_dim(cols);
        let expected = rows as usize * cols as usize;
        if cells.len() != expected {
            return Err(GridError::ShapeMismatch {
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self { rows, cols, cells })
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Total number of cells (`rows * cols`).
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Flat row-major index of `(row, col)`, or `None` if out of bounds.
    #[inline]
    pub fn index_of(&self, row: i32, col: i32) -> Option<usize> {
        if row < 0 || col < 0 || row as u32 >= self.rows || col as u32 >= self.cols {
            return None;
        }
        Some(row as usize * self.cols as usize + col as usize)
    }

    /// Read a cell. Out-of-bounds reads return [`Scalar::ZERO`].
    #[inline]
    pub fn get(&self, row: i32, col: i32) -> T {
        match self.index_of(row, col) {
            Some(i) => self.cells[i],
            None => T::ZERO,
        }
    }

    /// Write a cell. Out-of-bounds writes are ignored.
    #[inline]
    pub fn set(&mut self, row: i32, col: i32, value: T) {
        if let Some(i) = self.index_of(row, col) {
            self.cells[i] = value;
        }
    }

    /// Read a cell, reporting out-of-bounds access as an error.
    pub fn try_get(&self, row: i32, col: i32) -> Result<T, GridError> {
        self.index_of(row, col)
            .map(|i| self.cells[i])
            .ok_or_else(|| self.out_of_bounds(row, col))
    }

    /// Write a cell, reporting out-of-bounds access as an error.
    ///
    /// On error the grid is left untouched.
    pub fn try_set(&mut self, row: i32, col: i32, value: T) -> Result<(), GridError> {
        let i = self
            .index_of(row, col)
            .ok_or_else(|| self.out_of_bounds(row, col))?;
        self.cells[i] = value;
        Ok(())
    }

    fn out_of_bounds(&self, row: i32, col: i32) -> GridError {
        GridError::OutOfBounds {
            row,
            col,
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Returns `true` if `(row, col)` lies on the first or last row or
    /// column. Out-of-bounds cells are not boundary cells.
    pub fn is_boundary(&self, row: i32, col: i32) -> bool {
        if self.index_of(row, col).is_none() {
            return false;
        }
        let (r, c) = (row as u32, col as u32);
        r == 0 || c == 0 || r == self.rows - 1 || c == self.cols - 1
    }

    /// Number of interior cells: `(rows - 2) * (cols - 2)`, or 0 when
    /// either extent is below 3.
    pub fn interior_count(&self) -> usize {
        if self.rows < 3 || self.cols < 3 {
            return 0;
        }
        (self.rows as usize - 2) * (self.cols as usize - 2)
    }

    /// Flat indices of the in-bounds 4-connected neighbours of
    /// `(row, col)`, in north, south, west, east order.
    ///
    /// Edge cells have fewer neighbours (corners have 2). Returns an empty
    /// list when `(row, col)` itself is out of bounds.
    pub fn neighbours(&self, row: i32, col: i32) -> SmallVec<[usize; 4]> {
        let mut out = SmallVec::new();
        if self.index_of(row, col).is_none() {
            return out;
        }
        let offsets: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
        for (dr, dc) in offsets {
            if let Some(i) = self.index_of(row + dr, col + dc) {
                out.push(i);
            }
        }
        out
    }

    /// Change the extents, preserving the overlapping region.
    ///
    /// A fresh zero grid of the new extent is allocated, every cell
    /// `(i, j)` with `i < min(old_rows, new_rows)` and
    /// `j < min(old_cols, new_cols)` is copied across, and the old storage
    /// is dropped. Growing never loses data; shrinking silently discards
    /// cells outside the new extent.
    pub fn resize(&mut self, new_rows: i32, new_cols: i32) {
        let new_rows = clamp_dim(new_rows);
        let new_cols = clamp_dim(new_cols);
        if new_rows == self.rows && new_cols == self.cols {
            return;
        }

        let mut cells = vec![T::ZERO; new_rows as usize * new_cols as usize];
        let keep_rows = self.rows.min(new_rows) as usize;
        let keep_cols = self.cols.min(new_cols) as usize;
        let old_stride = self.cols as usize;
        let new_stride = new_cols as usize;
        for r in 0..keep_rows {
            let src = &self.cells[r * old_stride..r * old_stride + keep_cols];
            cells[r * new_stride..r * new_stride + keep_cols].copy_from_slice(src);
        }

        self.cells = cells;
        self.rows = new_rows;
        self.cols = new_cols;
    }

    /// All cells in row-major order.
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    /// All cells in row-major order, mutably. The extent cannot change
    /// through this view.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.cells
    }

    /// Iterate over rows top to bottom, each as a `cols`-long slice.
    pub fn rows_iter(&self) -> RowsIter<'_, T> {
        self.cells.chunks_exact(self.cols as usize)
    }
}
