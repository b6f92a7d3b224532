//! Configuration management for board, seeding and driver parameters.
//!
//! This module provides strongly-typed configuration structures that map to
//! the `config.toml` file.
//!
//! ## Configuration Hierarchy
//!
//! 1. Default values (hardcoded in `Default` impls)
//! 2. `config.toml` file (overrides defaults, missing sections fall back)
//! 3. Command-line flags (applied by the binary)
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [board]
//! rows = 60
//! cols = 80
//!
//! [seeding]
//! strategy = "split_half"
//! seed = 42
//! density = 0.5
//!
//! [driver]
//! max_generations = 1000
//! step_interval_ms = 5
//! ```

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use teamlife_data::Team;

use crate::seeding::{
    BoardInitializer, CustomPerTeam, Region, SeedingMode, SplitHalf, UniformRandom,
};

/// Largest accepted board side.
pub const MAX_SIDE: usize = 4096;

/// Board dimensions. The defaults match an 800x600 canvas with 10px cells.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self { rows: 60, cols: 80 }
    }
}

/// Which seeding strategy builds generation 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedingStrategy {
    Uniform,
    #[default]
    SplitHalf,
    Formation,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SeedingConfig {
    pub strategy: SeedingStrategy,
    /// Uniform seeding only: one team or two.
    pub mode: SeedingMode,
    /// `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Alive probability inside a team band (split-half only).
    pub density: f64,
    /// Split-half region overrides.
    pub team_a_region: Region,
    pub team_b_region: Region,
    /// Rows filled solid by the formation strategy.
    pub team_a_rows: Vec<usize>,
    pub team_b_rows: Vec<usize>,
}

impl Default for SeedingConfig {
    fn default() -> Self {
        Self {
            strategy: SeedingStrategy::SplitHalf,
            mode: SeedingMode::Teams,
            seed: None,
            density: 0.5,
            team_a_region: Region::UpperHalf,
            team_b_region: Region::LowerHalf,
            team_a_rows: Vec::new(),
            team_b_rows: Vec::new(),
        }
    }
}

/// Settings for the loop that calls `step()`; none of them reach the engine.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct DriverConfig {
    /// `None` runs until interrupted or stagnant.
    pub max_generations: Option<u64>,
    pub step_interval_ms: u64,
    /// Generations between census log lines.
    pub log_interval: u64,
    pub stop_on_stagnation: bool,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            max_generations: Some(1000),
            step_interval_ms: 5,
            log_interval: 100,
            stop_on_stagnation: false,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub seeding: SeedingConfig,
    pub driver: DriverConfig,
}

impl AppConfig {
    /// Validates all configuration parameters.
    ///
    /// # Validation Rules
    /// - Board sides must be positive and at most [`MAX_SIDE`]
    /// - Density must lie in `[0.0, 1.0]`
    /// - Team regions must fit the board
    /// - Formation rows must lie inside their team's region
    /// - Log interval must be positive
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.board.rows > 0, "Board rows must be positive");
        anyhow::ensure!(self.board.cols > 0, "Board cols must be positive");
        anyhow::ensure!(
            self.board.rows <= MAX_SIDE,
            "Board rows too large (max {MAX_SIDE})"
        );
        anyhow::ensure!(
            self.board.cols <= MAX_SIDE,
            "Board cols too large (max {MAX_SIDE})"
        );

        anyhow::ensure!(
            (0.0..=1.0).contains(&self.seeding.density),
            "Seeding density must be in [0.0, 1.0]"
        );
        for (label, region) in [
            ("team_a_region", self.seeding.team_a_region),
            ("team_b_region", self.seeding.team_b_region),
        ] {
            let band = region.resolve(self.board.rows);
            anyhow::ensure!(
                band.start <= band.end && band.end <= self.board.rows,
                "Seeding {label} {band} does not fit {} rows",
                self.board.rows
            );
        }
        for (label, region, rows) in [
            ("team_a_rows", self.seeding.team_a_region, &self.seeding.team_a_rows),
            ("team_b_rows", self.seeding.team_b_region, &self.seeding.team_b_rows),
        ] {
            let band = region.resolve(self.board.rows);
            for row in rows {
                anyhow::ensure!(
                    *row < self.board.rows,
                    "Formation row {row} outside board with {} rows",
                    self.board.rows
                );
                anyhow::ensure!(
                    band.contains(*row),
                    "Formation {label} entry {row} outside its region {band}"
                );
            }
        }

        anyhow::ensure!(self.driver.log_interval > 0, "Log interval must be positive");

        Ok(())
    }

    /// Parses and validates a TOML document.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from `path`.
    ///
    /// A missing file yields the defaults; an unreadable or invalid file is an
    /// error.
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::warn!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("parsing {}", path.display()))
    }

    /// Serializes back to TOML.
    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Builds the initializer selected by the `[seeding]` section.
    #[must_use]
    pub fn initializer(&self) -> Box<dyn BoardInitializer> {
        let seeding = &self.seeding;
        match seeding.strategy {
            SeedingStrategy::Uniform => Box::new(UniformRandom::new(seeding.mode, seeding.seed)),
            SeedingStrategy::SplitHalf => Box::new(
                SplitHalf::new(seeding.seed)
                    .with_regions(seeding.team_a_region, seeding.team_b_region)
                    .with_density(seeding.density),
            ),
            SeedingStrategy::Formation => Box::new(
                CustomPerTeam::new()
                    .solid(Team::A, seeding.team_a_region, &seeding.team_a_rows)
                    .solid(Team::B, seeding.team_b_region, &seeding.team_b_rows),
            ),
        }
    }

    /// Hex SHA-256 of the sections that decide the board's evolution.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.board).as_bytes());
        hasher.update(format!("{:?}", self.seeding).as_bytes());
        hex::encode(hasher.finalize())
    }
}
