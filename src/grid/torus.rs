//! Boolean cell grid with toroidal adjacency.
//!
//! One `Grid` holds a single player's live cells. The board pairs two grids
//! of identical dimensions; neighbor counting treats the edges as wrapping,
//! so row 0 is adjacent to the last row and column 0 to the last column.

use serde::{Deserialize, Serialize};

use super::cell::Coord;

/// Offsets to the 8 neighbors of a cell.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A 2D boolean grid with wraparound neighbor lookup.
///
/// Cells are stored row-major. All accessors take `(row, col)` and panic on
/// out-of-bounds indices; wrapping happens only inside neighbor counting.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Create an all-dead grid.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0, "Grid must have at least 1 row");
        assert!(cols > 0, "Grid must have at least 1 column");

        Self {
            rows,
            cols,
            cells: vec![false; rows * cols],
        }
    }

    /// Build a grid from nested rows of booleans.
    ///
    /// All rows must have the same length; use `Board::load` for validated
    /// pattern input.
    #[must_use]
    pub fn from_rows(rows: &[Vec<bool>]) -> Self {
        assert!(!rows.is_empty(), "Grid must have at least 1 row");
        let cols = rows[0].len();
        assert!(cols > 0, "Grid must have at least 1 column");
        assert!(
            rows.iter().all(|row| row.len() == cols),
            "All rows must have the same length"
        );

        Self {
            rows: rows.len(),
            cols,
            cells: rows.iter().flatten().copied().collect(),
        }
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({}, {}) out of bounds for {}x{} grid",
            row,
            col,
            self.rows,
            self.cols
        );
        row * self.cols + col
    }

    /// Check whether a cell is live.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells[self.index(row, col)]
    }

    /// Set a cell live or dead.
    pub fn set(&mut self, row: usize, col: usize, alive: bool) {
        let idx = self.index(row, col);
        self.cells[idx] = alive;
    }

    /// Count live cells among the 8 wraparound neighbors.
    #[must_use]
    pub fn live_neighbors(&self, row: usize, col: usize) -> u8 {
        debug_assert!(row < self.rows && col < self.cols);

        let mut count = 0;
        for (dr, dc) in NEIGHBOR_OFFSETS {
            let r = (row as isize + dr).rem_euclid(self.rows as isize) as usize;
            let c = (col as isize + dc).rem_euclid(self.cols as isize) as usize;
            if self.cells[r * self.cols + c] {
                count += 1;
            }
        }
        count
    }

    /// Total live-cell count.
    #[must_use]
    pub fn population(&self) -> u32 {
        self.cells.iter().filter(|&&alive| alive).count() as u32
    }

    /// Check whether no cells are live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.cells.iter().any(|&alive| alive)
    }

    /// Kill every cell.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Iterate over the coordinates of all live cells, row-major.
    pub fn live_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &alive)| alive)
            .map(move |(idx, _)| Coord::new(idx / self.cols, idx % self.cols))
    }

    /// Copy `source` into this grid with its top-left corner at
    /// `(0, col_offset)`. Used to install a half-board pattern.
    ///
    /// `source` must fit: `source.rows() == self.rows()` and
    /// `col_offset + source.cols() <= self.cols()`.
    pub fn install(&mut self, source: &Grid, col_offset: usize) {
        assert_eq!(source.rows, self.rows, "pattern height must match board");
        assert!(
            col_offset + source.cols <= self.cols,
            "pattern must fit within the board"
        );

        for row in 0..source.rows {
            for col in 0..source.cols {
                let alive = source.cells[row * source.cols + col];
                self.cells[row * self.cols + col + col_offset] = alive;
            }
        }
    }
}
