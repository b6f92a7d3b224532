//! Error types for grid access and board seeding.

use thiserror::Error;

/// Errors raised by [`Grid`](crate::grid::Grid) construction and access.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Position outside the board. Always a caller bug.
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// A board needs at least one row and one column, and a cell count that
    /// fits in `usize`.
    #[error("invalid grid dimensions {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },
}

/// Result type alias for grid operations.
pub type Result<T> = std::result::Result<T, GridError>;

impl GridError {
    #[must_use]
    pub const fn out_of_bounds(row: usize, col: usize, rows: usize, cols: usize) -> Self {
        Self::OutOfBounds {
            row,
            col,
            rows,
            cols,
        }
    }

    #[must_use]
    pub const fn invalid_dimensions(rows: usize, cols: usize) -> Self {
        Self::InvalidDimensions { rows, cols }
    }
}

/// Errors raised while producing an initial board.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeedingError {
    /// A team region reaches past the last row of the board.
    #[error("region rows {start}..{end} of {label} do not fit a board with {rows} rows")]
    RegionOutOfBounds {
        label: String,
        start: usize,
        end: usize,
        rows: usize,
    },

    /// Two team regions claim the same rows.
    #[error("regions {first} and {second} overlap")]
    OverlappingRegions { first: String, second: String },

    /// A solid formation row lies outside its team's region.
    #[error("row {row} of {label} lies outside its region {band}")]
    RowOutsideRegion {
        label: String,
        row: usize,
        band: String,
    },

    #[error(transparent)]
    Grid(#[from] GridError),
}
