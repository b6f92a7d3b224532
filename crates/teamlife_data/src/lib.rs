//! Core data structures for the teamlife automaton.

pub mod data;

pub use data::cell::{Cell, Team};
pub use data::stats::{NeighborStats, TeamCounts};
