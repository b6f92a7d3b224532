//! Two-team Life transition rule.
//!
//! | current | condition                                   | next            |
//! |---------|---------------------------------------------|-----------------|
//! | dead    | exactly 3 of one team, fewer than 3 of other | that team       |
//! | dead    | otherwise (3 vs 3 included)                 | dead            |
//! | live    | total < 2 or total > 3                      | dead            |
//! | live    | 2..=3 and the opposing team outnumbers own  | opposing team   |
//! | live    | 2..=3 otherwise                             | unchanged       |
//!
//! Classic single-team Life is the special case where team B never appears.

use std::ops::RangeInclusive;

use teamlife_data::{Cell, NeighborStats, Team};

/// Live-neighbor counts inside which a live cell does not die.
pub const SURVIVAL_BAND: RangeInclusive<u8> = 2..=3;

/// Same-team neighbors required for a birth.
pub const BIRTH_COUNT: u8 = 3;

/// Maps a cell and its pre-step neighbor tally to the cell's next value.
pub trait TransitionRule {
    fn next(&self, current: Cell, stats: NeighborStats) -> Cell;
}

/// The rule used by every engine unless a caller supplies another one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TeamLife;

impl TransitionRule for TeamLife {
    fn next(&self, current: Cell, stats: NeighborStats) -> Cell {
        next_cell(current, stats)
    }
}

/// Next value of `current` given its neighbor tally.
#[must_use]
pub fn next_cell(current: Cell, stats: NeighborStats) -> Cell {
    match current.team() {
        None => birth(stats),
        Some(own) => survive(own, stats),
    }
}

fn birth(stats: NeighborStats) -> Cell {
    let (a, b) = (stats.team_a(), stats.team_b());
    if a == BIRTH_COUNT && b < BIRTH_COUNT {
        Cell::TeamA
    } else if b == BIRTH_COUNT && a < BIRTH_COUNT {
        Cell::TeamB
    } else {
        Cell::Dead
    }
}

fn survive(own: Team, stats: NeighborStats) -> Cell {
    if !SURVIVAL_BAND.contains(&stats.total()) {
        return Cell::Dead;
    }
    let rival = own.opponent();
    if stats.of(rival) > stats.of(own) {
        rival.cell()
    } else {
        own.cell()
    }
}
