//! Moore-neighborhood tallies.
//!
//! The board is bounded: positions past an edge count as dead and there is
//! no wraparound.

use teamlife_data::NeighborStats;

use crate::error::{GridError, Result};
use crate::grid::Grid;

/// Offsets of the eight Moore neighbors.
pub const MOORE_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Live-neighbor tally for `(row, col)`.
///
/// # Errors
/// [`GridError::OutOfBounds`] when the centre itself is outside the board.
pub fn count_around(grid: &Grid, row: usize, col: usize) -> Result<NeighborStats> {
    if !grid.contains(row, col) {
        return Err(GridError::out_of_bounds(
            row,
            col,
            grid.rows(),
            grid.cols(),
        ));
    }
    Ok(tally(grid, row, col))
}

/// Tally for a centre already known to be inside the board.
pub(crate) fn tally(grid: &Grid, row: usize, col: usize) -> NeighborStats {
    let mut stats = NeighborStats::default();
    for (dr, dc) in MOORE_OFFSETS {
        let (Some(r), Some(c)) = (row.checked_add_signed(dr), col.checked_add_signed(dc)) else {
            continue;
        };
        if grid.contains(r, c) {
            stats.record(grid.cell_at(r, c));
        }
    }
    stats
}
