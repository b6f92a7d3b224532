//! Board seeding strategies.
//!
//! Every strategy implements [`BoardInitializer`] and builds its board through
//! [`Grid::from_fn`], so uniform noise, split bands and hand-placed formations
//! differ only in the fill function they supply.
//!
//! Randomized strategies draw from a [`ChaCha8Rng`]; passing the same seed
//! yields the same board.

use std::collections::BTreeSet;
use std::fmt;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use teamlife_data::{Cell, Team, TeamCounts};

use crate::error::SeedingError;
use crate::grid::Grid;

pub type Result<T> = std::result::Result<T, SeedingError>;

/// Board produced by an initializer, with its per-team seed summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seeded {
    pub grid: Grid,
    pub counts: TeamCounts,
}

impl Seeded {
    fn new(grid: Grid) -> Self {
        let counts = grid.census();
        Self { grid, counts }
    }
}

/// Produces the generation-0 board for a given size.
pub trait BoardInitializer {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    fn produce(&mut self, rows: usize, cols: usize) -> Result<Seeded>;
}

/// Seeded generator, or one drawn from OS entropy when `seed` is `None`.
#[must_use]
pub fn rng_from(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// Whether a randomized board uses one team or two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedingMode {
    /// Dead or team A with equal probability: standard Game of Life.
    Classic,
    /// Dead, team A or team B with equal probability.
    #[default]
    Teams,
}

/// Half-open row range `start..end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowBand {
    pub start: usize,
    pub end: usize,
}

impl RowBand {
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub const fn contains(&self, row: usize) -> bool {
        self.start <= row && row < self.end
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    const fn overlaps(&self, other: &RowBand) -> bool {
        !self.is_empty() && !other.is_empty() && self.start < other.end && other.start < self.end
    }
}

impl fmt::Display for RowBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Rows a team may seed, resolved once the board height is known.
///
/// The default halves leave a neutral strip in the middle: the upper band is
/// every row `r < rows / 2 - 1` and the lower band every row `r > rows / 2 + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    UpperHalf,
    LowerHalf,
    Rows(RowBand),
}

impl Region {
    /// Concrete band for a board with `rows` rows.
    #[must_use]
    pub const fn resolve(&self, rows: usize) -> RowBand {
        match *self {
            // r < rows/2 - 1  <=>  2r + 2 < rows
            Region::UpperHalf => RowBand::new(0, rows.saturating_sub(1) / 2),
            // r > rows/2 + 1  <=>  2r > rows + 2
            Region::LowerHalf => {
                let start = (rows + 2) / 2 + 1;
                RowBand::new(if start < rows { start } else { rows }, rows)
            }
            Region::Rows(band) => band,
        }
    }

    fn checked(&self, label: &str, rows: usize) -> Result<RowBand> {
        let band = self.resolve(rows);
        if band.end > rows || band.start > band.end {
            return Err(SeedingError::RegionOutOfBounds {
                label: label.to_string(),
                start: band.start,
                end: band.end,
                rows,
            });
        }
        Ok(band)
    }
}

/// Every cell drawn independently.
pub struct UniformRandom {
    mode: SeedingMode,
    rng: ChaCha8Rng,
}

impl UniformRandom {
    #[must_use]
    pub fn new(mode: SeedingMode, seed: Option<u64>) -> Self {
        Self {
            mode,
            rng: rng_from(seed),
        }
    }
}

impl BoardInitializer for UniformRandom {
    fn name(&self) -> &'static str {
        match self.mode {
            SeedingMode::Classic => "uniform-classic",
            SeedingMode::Teams => "uniform-teams",
        }
    }

    fn produce(&mut self, rows: usize, cols: usize) -> Result<Seeded> {
        let mode = self.mode;
        let rng = &mut self.rng;
        let grid = Grid::from_fn(rows, cols, |_, _| match mode {
            SeedingMode::Classic => {
                if rng.gen_bool(0.5) {
                    Cell::TeamA
                } else {
                    Cell::Dead
                }
            }
            SeedingMode::Teams => match rng.gen_range(0..3) {
                1 => Cell::TeamA,
                2 => Cell::TeamB,
                _ => Cell::Dead,
            },
        })?;
        Ok(Seeded::new(grid))
    }
}

/// Team A seeds the upper band, team B the lower band, each cell alive with
/// probability `density`. Rows outside both bands stay dead.
pub struct SplitHalf {
    team_a: Region,
    team_b: Region,
    density: f64,
    rng: ChaCha8Rng,
}

impl SplitHalf {
    /// Default halves with a fair coin per cell.
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            team_a: Region::UpperHalf,
            team_b: Region::LowerHalf,
            density: 0.5,
            rng: rng_from(seed),
        }
    }

    /// Overrides the team regions.
    #[must_use]
    pub fn with_regions(mut self, team_a: Region, team_b: Region) -> Self {
        self.team_a = team_a;
        self.team_b = team_b;
        self
    }

    /// Alive probability inside a band, clamped to `[0, 1]`.
    #[must_use]
    pub fn with_density(mut self, density: f64) -> Self {
        self.density = if density.is_nan() {
            0.0
        } else {
            density.clamp(0.0, 1.0)
        };
        self
    }
}

impl BoardInitializer for SplitHalf {
    fn name(&self) -> &'static str {
        "split-half"
    }

    fn produce(&mut self, rows: usize, cols: usize) -> Result<Seeded> {
        let a = self.team_a.checked("team A", rows)?;
        let b = self.team_b.checked("team B", rows)?;
        if a.overlaps(&b) {
            return Err(SeedingError::OverlappingRegions {
                first: a.to_string(),
                second: b.to_string(),
            });
        }
        let density = self.density;
        let rng = &mut self.rng;
        let grid = Grid::from_fn(rows, cols, |row, _| {
            let owner = if a.contains(row) {
                Team::A
            } else if b.contains(row) {
                Team::B
            } else {
                return Cell::Dead;
            };
            if rng.gen_bool(density) {
                owner.cell()
            } else {
                Cell::Dead
            }
        })?;
        Ok(Seeded::new(grid))
    }
}

/// Placement function for one team's region, called with absolute coordinates.
pub type Placement = Box<dyn FnMut(usize, usize) -> Cell>;

struct TeamRegion {
    team: Team,
    region: Region,
    place: Placement,
    /// Rows that must fall inside `region`.
    required: Vec<usize>,
}

/// Each team places its own cells inside its own region.
///
/// Regions may not overlap; cells outside every region stay dead. A live cell
/// returned by a placement is always seeded for the region's team.
#[derive(Default)]
pub struct CustomPerTeam {
    regions: Vec<TeamRegion>,
}

impl CustomPerTeam {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a region seeded by `place`.
    #[must_use]
    pub fn region<F>(mut self, team: Team, region: Region, place: F) -> Self
    where
        F: FnMut(usize, usize) -> Cell + 'static,
    {
        self.regions.push(TeamRegion {
            team,
            region,
            place: Box::new(place),
            required: Vec::new(),
        });
        self
    }

    /// Adds a region whose listed rows are filled solid.
    ///
    /// [`produce`](BoardInitializer::produce) fails with
    /// [`SeedingError::RowOutsideRegion`] if a listed row is not inside
    /// `region`.
    #[must_use]
    pub fn solid(mut self, team: Team, region: Region, rows: &[usize]) -> Self {
        self.regions.push(TeamRegion {
            team,
            region,
            place: Box::new(solid_rows(team, rows)),
            required: rows.to_vec(),
        });
        self
    }

    /// Starting formation: the listed rows of each team's default half are
    /// filled solid, everything else is dead.
    #[must_use]
    pub fn formation(team_a_rows: &[usize], team_b_rows: &[usize]) -> Self {
        Self::new()
            .solid(Team::A, Region::UpperHalf, team_a_rows)
            .solid(Team::B, Region::LowerHalf, team_b_rows)
    }
}

fn solid_rows(team: Team, rows: &[usize]) -> impl FnMut(usize, usize) -> Cell + 'static {
    let rows: BTreeSet<usize> = rows.iter().copied().collect();
    move |row, _| {
        if rows.contains(&row) {
            team.cell()
        } else {
            Cell::Dead
        }
    }
}

impl BoardInitializer for CustomPerTeam {
    fn name(&self) -> &'static str {
        "custom-per-team"
    }

    fn produce(&mut self, rows: usize, cols: usize) -> Result<Seeded> {
        let mut bands = Vec::with_capacity(self.regions.len());
        for entry in &self.regions {
            let label = format!("team {:?}", entry.team);
            let band = entry.region.checked(&label, rows)?;
            if let Some(&row) = entry.required.iter().find(|row| !band.contains(**row)) {
                return Err(SeedingError::RowOutsideRegion {
                    label,
                    row,
                    band: band.to_string(),
                });
            }
            if let Some(other) = bands.iter().find(|other: &&RowBand| other.overlaps(&band)) {
                return Err(SeedingError::OverlappingRegions {
                    first: other.to_string(),
                    second: band.to_string(),
                });
            }
            bands.push(band);
        }
        let regions = &mut self.regions;
        let grid = Grid::from_fn(rows, cols, |row, col| {
            match bands.iter().position(|band| band.contains(row)) {
                Some(i) => {
                    let entry = &mut regions[i];
                    if (entry.place)(row, col).is_alive() {
                        entry.team.cell()
                    } else {
                        Cell::Dead
                    }
                }
                None => Cell::Dead,
            }
        })?;
        Ok(Seeded::new(grid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bands_match_canvas_board() {
        // 600px canvas with 10px cells.
        assert_eq!(Region::UpperHalf.resolve(60), RowBand::new(0, 29));
        assert_eq!(Region::LowerHalf.resolve(60), RowBand::new(32, 60));
        // Odd heights keep the real-valued midpoint.
        assert_eq!(Region::UpperHalf.resolve(7), RowBand::new(0, 3));
        assert_eq!(Region::LowerHalf.resolve(7), RowBand::new(5, 7));
    }

    #[test]
    fn test_default_bands_tiny_boards() {
        for rows in 1..=2 {
            assert!(Region::UpperHalf.resolve(rows).is_empty(), "rows={rows}");
            assert!(Region::LowerHalf.resolve(rows).is_empty(), "rows={rows}");
        }
        assert_eq!(Region::UpperHalf.resolve(4), RowBand::new(0, 1));
        assert!(Region::LowerHalf.resolve(4).is_empty());
        assert_eq!(Region::LowerHalf.resolve(5), RowBand::new(4, 5));
    }

    #[test]
    fn test_uniform_classic_has_no_team_b() {
        let seeded = UniformRandom::new(SeedingMode::Classic, Some(7))
            .produce(20, 20)
            .unwrap();
        assert_eq!(seeded.counts.team_b, 0);
        assert!(seeded.counts.team_a > 0);
    }

    #[test]
    fn test_uniform_same_seed_same_board() {
        let a = UniformRandom::new(SeedingMode::Teams, Some(99)).produce(16, 24).unwrap();
        let b = UniformRandom::new(SeedingMode::Teams, Some(99)).produce(16, 24).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_split_half_respects_bands() {
        let seeded = SplitHalf::new(Some(3)).produce(12, 10).unwrap();
        for (row, _, cell) in seeded.grid.iter() {
            match cell {
                Cell::TeamA => assert!(row < 5),
                Cell::TeamB => assert!(row > 7),
                Cell::Dead => {}
            }
        }
        assert_eq!(seeded.counts, seeded.grid.census());
    }

    #[test]
    fn test_split_half_full_density() {
        let seeded = SplitHalf::new(Some(1))
            .with_density(1.0)
            .produce(10, 4)
            .unwrap();
        // Upper band 0..4, lower band 7..10.
        assert_eq!(seeded.counts.team_a, 4 * 4);
        assert_eq!(seeded.counts.team_b, 3 * 4);
    }

    #[test]
    fn test_split_half_rejects_overlap_and_overflow() {
        let overlap = SplitHalf::new(Some(1))
            .with_regions(Region::Rows(RowBand::new(0, 5)), Region::Rows(RowBand::new(4, 8)))
            .produce(10, 4);
        assert!(matches!(overlap, Err(SeedingError::OverlappingRegions { .. })));

        let overflow = SplitHalf::new(Some(1))
            .with_regions(Region::UpperHalf, Region::Rows(RowBand::new(8, 12)))
            .produce(10, 4);
        assert!(matches!(overflow, Err(SeedingError::RegionOutOfBounds { .. })));
    }

    #[test]
    fn test_formation_rows() {
        let seeded = CustomPerTeam::formation(&[1], &[8]).produce(10, 6).unwrap();
        assert_eq!(seeded.counts.team_a, 6);
        assert_eq!(seeded.counts.team_b, 6);
        assert_eq!(seeded.grid.get(1, 3), Ok(Cell::TeamA));
        assert_eq!(seeded.grid.get(8, 0), Ok(Cell::TeamB));
    }

    #[test]
    fn test_formation_row_outside_own_half_is_rejected() {
        // Row 8 lies in team B's half, so team A cannot claim it.
        let err = CustomPerTeam::formation(&[8], &[]).produce(10, 6).unwrap_err();
        assert_eq!(
            err,
            SeedingError::RowOutsideRegion {
                label: "team A".to_string(),
                row: 8,
                band: "0..4".to_string(),
            }
        );
        // Neutral strip.
        let err = CustomPerTeam::formation(&[], &[5]).produce(10, 6).unwrap_err();
        assert!(matches!(err, SeedingError::RowOutsideRegion { row: 5, .. }));
    }

    #[test]
    fn test_solid_uses_given_region() {
        let seeded = CustomPerTeam::new()
            .solid(Team::A, Region::Rows(RowBand::new(4, 6)), &[5])
            .solid(Team::B, Region::Rows(RowBand::new(0, 2)), &[0])
            .produce(10, 3)
            .unwrap();
        assert_eq!(seeded.grid.get(5, 1), Ok(Cell::TeamA));
        assert_eq!(seeded.grid.get(0, 2), Ok(Cell::TeamB));
        assert_eq!(seeded.counts, TeamCounts { team_a: 3, team_b: 3 });
    }

    #[test]
    fn test_placement_seeds_only_its_own_team() {
        let seeded = CustomPerTeam::new()
            .region(Team::A, Region::Rows(RowBand::new(0, 2)), |_, _| Cell::TeamB)
            .produce(4, 4)
            .unwrap();
        assert_eq!(seeded.counts, TeamCounts { team_a: 8, team_b: 0 });
        assert_eq!(seeded.grid.get(1, 3), Ok(Cell::TeamA));
    }

    #[test]
    fn test_custom_regions_are_independent() {
        let seeded = CustomPerTeam::new()
            .region(Team::A, Region::Rows(RowBand::new(0, 2)), |_, col| {
                if col % 2 == 0 {
                    Cell::TeamA
                } else {
                    Cell::Dead
                }
            })
            .region(Team::B, Region::Rows(RowBand::new(4, 5)), |_, _| Cell::TeamB)
            .produce(6, 4)
            .unwrap();
        assert_eq!(seeded.counts, TeamCounts { team_a: 4, team_b: 4 });
        assert_eq!(seeded.grid.get(3, 0), Ok(Cell::Dead));
    }

    #[test]
    fn test_invalid_dimensions_propagate() {
        let err = SplitHalf::new(Some(1)).produce(0, 3).unwrap_err();
        assert!(matches!(err, SeedingError::Grid(_)));
    }
}
