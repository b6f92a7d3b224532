//! # Teamlife
//!
//! Two-team Conway's Game of Life: the engine lives in `teamlife_core`, this
//! crate adds the driver loop, frame sinks and the command-line entry point.

pub mod app;
pub mod model;

use anyhow::Context;

use crate::app::{Driver, FrameSink};
use crate::model::config::AppConfig;
use crate::model::engine::SimulationEngine;

/// Seeds an engine from `config` using the configured strategy.
pub fn build_engine(config: &AppConfig) -> anyhow::Result<SimulationEngine> {
    config.validate()?;
    let mut initializer = config.initializer();
    SimulationEngine::new(initializer.as_mut(), config.board.rows, config.board.cols)
        .context("seeding initial board")
}

/// Seeds an engine from `config` and wraps it in a driver writing to `sink`.
pub fn build_driver<S: FrameSink>(config: &AppConfig, sink: S) -> anyhow::Result<Driver<S>> {
    let engine = build_engine(config)?;
    Ok(Driver::new(engine, config.driver.clone(), sink))
}
