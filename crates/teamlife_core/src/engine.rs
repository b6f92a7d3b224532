//! Generation stepping.
//!
//! The engine owns the current board and a generation counter. A step reads
//! only the current board, assembles the whole successor, then swaps it in, so
//! no reader ever sees a half-updated generation.

use teamlife_data::TeamCounts;

use crate::grid::Grid;
use crate::neighbors;
use crate::rule::{TeamLife, TransitionRule};
use crate::seeding::{self, BoardInitializer};

/// Computes the successor of `grid` under `rule`.
///
/// Pure: every cell sees neighbor tallies taken from `grid` itself.
#[must_use]
pub fn next_generation<R: TransitionRule + ?Sized>(grid: &Grid, rule: &R) -> Grid {
    grid.map_cells(|row, col, cell| rule.next(cell, neighbors::tally(grid, row, col)))
}

/// Current board plus the generation it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub grid: Grid,
    pub generation: u64,
}

/// Owns the live board and advances it one generation per [`step`](Self::step).
///
/// `step` needs `&mut self` and `current_state` needs `&self`, so sharing an
/// engine across threads already gets the required discipline from the
/// borrow checker or from whatever lock wraps it.
#[derive(Debug, Clone)]
pub struct SimulationEngine<R: TransitionRule = TeamLife> {
    current: Grid,
    generation: u64,
    seeded: TeamCounts,
    rule: R,
}

impl SimulationEngine<TeamLife> {
    /// Seeds a `rows` x `cols` board with `initializer` and starts at generation 0.
    ///
    /// # Errors
    /// Whatever the initializer reports, including invalid dimensions.
    pub fn new<I>(initializer: &mut I, rows: usize, cols: usize) -> seeding::Result<Self>
    where
        I: BoardInitializer + ?Sized,
    {
        let seeded = initializer.produce(rows, cols)?;
        tracing::info!(
            initializer = initializer.name(),
            rows,
            cols,
            team_a = seeded.counts.team_a,
            team_b = seeded.counts.team_b,
            "Initial cells count per team"
        );
        Ok(Self::from_parts(seeded.grid, seeded.counts, TeamLife))
    }

    /// Starts from an existing board at generation 0.
    #[must_use]
    pub fn from_grid(grid: Grid) -> Self {
        Self::with_rule(grid, TeamLife)
    }
}

impl<R: TransitionRule> SimulationEngine<R> {
    /// Starts from an existing board under a caller-supplied rule.
    #[must_use]
    pub fn with_rule(grid: Grid, rule: R) -> Self {
        let counts = grid.census();
        Self::from_parts(grid, counts, rule)
    }

    fn from_parts(grid: Grid, seeded: TeamCounts, rule: R) -> Self {
        Self {
            current: grid,
            generation: 0,
            seeded,
            rule,
        }
    }

    /// Advances one generation and returns the new board.
    pub fn step(&mut self) -> &Grid {
        let next = next_generation(&self.current, &self.rule);
        self.current = next;
        self.generation += 1;
        if tracing::enabled!(tracing::Level::TRACE) {
            let census = self.current.census();
            tracing::trace!(
                generation = self.generation,
                team_a = census.team_a,
                team_b = census.team_b,
                "Generation stepped"
            );
        }
        &self.current
    }

    /// Calls [`step`](Self::step) `n` times and returns the final board.
    pub fn advance(&mut self, n: u64) -> &Grid {
        for _ in 0..n {
            self.step();
        }
        &self.current
    }

    /// Read-only view of the board and its generation.
    #[must_use]
    pub fn current_state(&self) -> (&Grid, u64) {
        (&self.current, self.generation)
    }

    /// Owned copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            grid: self.current.clone(),
            generation: self.generation,
        }
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.current
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Live cells per team at generation 0.
    #[must_use]
    pub fn seed_summary(&self) -> TeamCounts {
        self.seeded
    }

    #[must_use]
    pub fn rule(&self) -> &R {
        &self.rule
    }
}
