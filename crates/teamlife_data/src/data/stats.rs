use serde::{Deserialize, Serialize};

use super::cell::{Cell, Team};

/// Live-neighbor tally over the Moore neighborhood of one cell.
///
/// `total` always equals `team_a + team_b` and never exceeds 8. The fields are
/// private so the only way to build a tally is through [`NeighborStats::record`]
/// or [`NeighborStats::from_counts`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct NeighborStats {
    team_a: u8,
    team_b: u8,
}

impl NeighborStats {
    /// Builds a tally from per-team counts.
    ///
    /// Returns `None` when the counts cannot come from eight neighbors.
    #[must_use]
    pub const fn from_counts(team_a: u8, team_b: u8) -> Option<Self> {
        if team_a as u16 + team_b as u16 > 8 {
            return None;
        }
        Some(Self { team_a, team_b })
    }

    /// Adds one neighbor to the tally. Dead neighbors contribute nothing.
    pub fn record(&mut self, neighbor: Cell) {
        match neighbor.team() {
            Some(Team::A) => self.team_a += 1,
            Some(Team::B) => self.team_b += 1,
            None => {}
        }
        debug_assert!(self.total() <= 8, "more than eight live neighbors");
    }

    #[must_use]
    pub const fn total(&self) -> u8 {
        self.team_a + self.team_b
    }

    #[must_use]
    pub const fn team_a(&self) -> u8 {
        self.team_a
    }

    #[must_use]
    pub const fn team_b(&self) -> u8 {
        self.team_b
    }

    /// Live neighbors owned by `team`.
    #[must_use]
    pub const fn of(&self, team: Team) -> u8 {
        match team {
            Team::A => self.team_a,
            Team::B => self.team_b,
        }
    }
}

/// Live-cell count per team, used for seeding summaries and census logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TeamCounts {
    pub team_a: usize,
    pub team_b: usize,
}

impl TeamCounts {
    pub fn add(&mut self, cell: Cell) {
        match cell.team() {
            Some(Team::A) => self.team_a += 1,
            Some(Team::B) => self.team_b += 1,
            None => {}
        }
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.team_a + self.team_b
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_ignores_dead() {
        let mut stats = NeighborStats::default();
        stats.record(Cell::Dead);
        stats.record(Cell::TeamA);
        stats.record(Cell::TeamB);
        stats.record(Cell::TeamB);
        assert_eq!(stats.team_a(), 1);
        assert_eq!(stats.team_b(), 2);
        assert_eq!(stats.total(), 3);
    }

    #[test]
    fn test_from_counts_rejects_more_than_eight() {
        assert!(NeighborStats::from_counts(5, 4).is_none());
        assert_eq!(NeighborStats::from_counts(4, 4).map(|s| s.total()), Some(8));
    }

    #[test]
    fn test_team_counts_add() {
        let mut counts = TeamCounts::default();
        for cell in [Cell::TeamA, Cell::Dead, Cell::TeamA, Cell::TeamB] {
            counts.add(cell);
        }
        assert_eq!(counts, TeamCounts { team_a: 2, team_b: 1 });
        assert_eq!(counts.total(), 3);
    }
}
