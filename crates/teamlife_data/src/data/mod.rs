//! Plain data shared by the engine, the seeding strategies and the driver.

pub mod cell;
pub mod stats;
