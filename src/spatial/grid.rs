//! Fixed-size cell grid shared by the carver, classifier, and exporter
//!
//! A [`Grid`] is a square `Array2<u32>` where 0 is wall and any non-zero value is
//! an open, traversable cell. The carver writes a single open marker everywhere;
//! the classifier rewrites open cells to tile ids. All access is bounds checked.

use ndarray::Array2;

use crate::spatial::coords::Physical;

/// Square integer grid, 0 = wall, non-zero = open tile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Array2<u32>,
    dimension: usize,
}

impl Grid {
    /// Create a grid of `dimension` × `dimension` wall cells
    pub fn new(dimension: usize) -> Self {
        Self {
            cells: Array2::zeros((dimension, dimension)),
            dimension,
        }
    }

    /// Side length of the grid
    pub const fn dimension(&self) -> usize {
        self.dimension
    }

    /// Value at (`row`, `col`), or `None` outside the grid
    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        self.cells.get([row, col]).copied()
    }

    /// Whether the cell at (`row`, `col`) is open; out-of-bounds reads as wall
    pub fn is_open(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some_and(|value| value != 0)
    }

    /// Write `value` at (`row`, `col`)
    ///
    /// Writing outside the grid is a contract violation by the caller; it is
    /// asserted in debug builds and ignored in release builds rather than
    /// corrupting neighboring state.
    pub fn set(&mut self, row: usize, col: usize, value: u32) {
        debug_assert!(
            row < self.dimension && col < self.dimension,
            "write at ({row}, {col}) outside {0}x{0} grid",
            self.dimension
        );
        if let Some(cell) = self.cells.get_mut([row, col]) {
            *cell = value;
        }
    }

    /// Write `value` at a physical coordinate
    pub fn mark(&mut self, position: Physical, value: u32) {
        self.set(position.row, position.col, value);
    }

    /// Value at a physical coordinate
    pub fn at(&self, position: Physical) -> Option<u32> {
        self.get(position.row, position.col)
    }

    /// Row-major iteration over every cell value
    ///
    /// This is the export order: the TMX layer is this sequence joined by commas.
    pub fn values(&self) -> impl Iterator<Item = u32> + '_ {
        self.cells.iter().copied()
    }

    /// Number of open (non-zero) cells
    pub fn open_count(&self) -> usize {
        self.cells.iter().filter(|&&value| value != 0).count()
    }
}
