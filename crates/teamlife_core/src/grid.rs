//! Bounded, immutable board of [`Cell`] values.
//!
//! A grid is built once from its dimensions and a fill function and is never
//! mutated afterwards. Edits go through [`Grid::with_cell`], which returns a new
//! grid, and generations are produced wholesale by the engine.

use std::fmt;

use serde::Serialize;
use sha2::{Digest, Sha256};
use teamlife_data::{Cell, TeamCounts};

use crate::error::{GridError, Result};

/// Row-major rectangular board with `rows > 0` and `cols > 0`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Builds a grid by asking `fill` for the value of every position in
    /// row-major order.
    ///
    /// # Errors
    /// [`GridError::InvalidDimensions`] when `rows` or `cols` is zero or the
    /// cell count overflows `usize`.
    pub fn from_fn<F>(rows: usize, cols: usize, mut fill: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> Cell,
    {
        let len = rows
            .checked_mul(cols)
            .filter(|len| *len > 0)
            .ok_or_else(|| GridError::invalid_dimensions(rows, cols))?;
        let mut cells = Vec::with_capacity(len);
        for row in 0..rows {
            for col in 0..cols {
                cells.push(fill(row, col));
            }
        }
        Ok(Self { rows, cols, cells })
    }

    /// All-dead grid.
    pub fn dead(rows: usize, cols: usize) -> Result<Self> {
        Self::from_fn(rows, cols, |_, _| Cell::Dead)
    }

    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[must_use]
    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Cell at `(row, col)`.
    ///
    /// # Errors
    /// [`GridError::OutOfBounds`] when the position is outside the board.
    pub fn get(&self, row: usize, col: usize) -> Result<Cell> {
        if !self.contains(row, col) {
            return Err(GridError::out_of_bounds(row, col, self.rows, self.cols));
        }
        Ok(self.cells[self.index(row, col)])
    }

    /// Unchecked read for callers that already iterate inside the bounds.
    #[inline]
    pub(crate) fn cell_at(&self, row: usize, col: usize) -> Cell {
        debug_assert!(
            self.contains(row, col),
            "cell ({row}, {col}) outside {}x{} grid",
            self.rows,
            self.cols
        );
        self.cells[self.index(row, col)]
    }

    /// Copy of this grid with `(row, col)` set to `value`.
    ///
    /// # Errors
    /// [`GridError::OutOfBounds`] when the position is outside the board.
    pub fn with_cell(&self, row: usize, col: usize, value: Cell) -> Result<Self> {
        if !self.contains(row, col) {
            return Err(GridError::out_of_bounds(row, col, self.rows, self.cols));
        }
        let mut cells = self.cells.clone();
        cells[self.index(row, col)] = value;
        Ok(Self {
            rows: self.rows,
            cols: self.cols,
            cells,
        })
    }

    /// New grid of the same size whose cells come from `f(row, col, old)`.
    pub(crate) fn map_cells<F>(&self, mut f: F) -> Self
    where
        F: FnMut(usize, usize, Cell) -> Cell,
    {
        let cells = self.iter().map(|(row, col, cell)| f(row, col, cell)).collect();
        Self {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }

    /// Rows of the board, top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(self.cols)
    }

    /// Every cell with its position, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (i / cols, i % cols, cell))
    }

    /// Live cells per team.
    #[must_use]
    pub fn census(&self) -> TeamCounts {
        let mut counts = TeamCounts::default();
        for &cell in &self.cells {
            counts.add(cell);
        }
        counts
    }

    /// True when no live cell remains.
    #[must_use]
    pub fn is_extinct(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_alive())
    }

    /// Hex SHA-256 over the dimensions and cell codes.
    ///
    /// Equal fingerprints mean bit-identical boards.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update((self.rows as u64).to_le_bytes());
        hasher.update((self.cols as u64).to_le_bytes());
        let codes: Vec<u8> = self.cells.iter().map(|cell| cell.code()).collect();
        hasher.update(&codes);
        hex::encode(hasher.finalize())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.iter_rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}
