use serde::{Deserialize, Serialize};

/// Owning team of a live cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    A,
    B,
}

impl Team {
    /// The other team.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Team::A => Team::B,
            Team::B => Team::A,
        }
    }

    /// Live cell owned by this team.
    #[must_use]
    pub const fn cell(self) -> Cell {
        match self {
            Team::A => Cell::TeamA,
            Team::B => Cell::TeamB,
        }
    }
}

/// State of a single board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty position.
    #[default]
    Dead,
    /// Live cell owned by team A.
    TeamA,
    /// Live cell owned by team B.
    TeamB,
}

impl Cell {
    #[must_use]
    pub const fn is_alive(self) -> bool {
        !matches!(self, Cell::Dead)
    }

    /// Owning team, `None` for dead cells.
    #[must_use]
    pub const fn team(self) -> Option<Team> {
        match self {
            Cell::Dead => None,
            Cell::TeamA => Some(Team::A),
            Cell::TeamB => Some(Team::B),
        }
    }

    /// Character used by text frame sinks.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Cell::Dead => '.',
            Cell::TeamA => 'A',
            Cell::TeamB => 'B',
        }
    }

    /// Numeric code: 0 dead, 1 team A, 2 team B.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Cell::Dead => 0,
            Cell::TeamA => 1,
            Cell::TeamB => 2,
        }
    }
}

impl From<Team> for Cell {
    fn from(team: Team) -> Self {
        team.cell()
    }
}
