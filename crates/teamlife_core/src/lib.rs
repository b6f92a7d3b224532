//! # Teamlife Core
//!
//! The deterministic engine for a two-team variant of Conway's Game of Life.
//!
//! This crate contains:
//! - The bounded, immutable [`Grid`]
//! - Moore-neighborhood tallies split by team
//! - The transition rule (birth, death, survival and conversion)
//! - Pluggable board seeding strategies
//! - The double-buffered [`SimulationEngine`]
//! - Configuration, metrics and logging setup
//!
//! ## Example
//!
//! ```
//! use teamlife_core::seeding::SplitHalf;
//! use teamlife_core::SimulationEngine;
//!
//! let mut seeding = SplitHalf::new(Some(42));
//! let mut engine = SimulationEngine::new(&mut seeding, 30, 40).unwrap();
//! engine.step();
//! let (grid, generation) = engine.current_state();
//! assert_eq!(generation, 1);
//! assert_eq!(grid.dimensions(), (30, 40));
//! ```

/// Configuration management for board, seeding and driver parameters
pub mod config;
/// Generation stepping and the simulation engine
pub mod engine;
/// Grid and seeding error types
pub mod error;
/// Bounded immutable board
pub mod grid;
/// Step metrics and structured logging
pub mod metrics;
/// Moore-neighborhood tallies
pub mod neighbors;
/// Transition rule
pub mod rule;
/// Board seeding strategies
pub mod seeding;

pub use engine::{next_generation, SimulationEngine, Snapshot};
pub use error::{GridError, SeedingError};
pub use grid::Grid;
pub use metrics::{init_logging, Metrics};
pub use neighbors::count_around;
pub use rule::{next_cell, TeamLife, TransitionRule};
pub use seeding::{BoardInitializer, Seeded};
pub use teamlife_data::{Cell, NeighborStats, Team, TeamCounts};
