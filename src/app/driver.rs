//! Paces the engine and decides when a run ends.

use std::thread;
use std::time::{Duration, Instant};

use crate::app::sink::FrameSink;
use crate::app::stagnation::StagnationDetector;
use crate::model::config::DriverConfig;
use crate::model::engine::SimulationEngine;
use crate::model::metrics::Metrics;
use crate::model::state::TeamCounts;

/// Why [`Driver::run`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// `max_generations` steps were taken.
    GenerationLimit,
    /// The board repeated with the given period.
    Stagnant { period: usize },
}

/// Outcome of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Steps taken by this run.
    pub steps: u64,
    pub final_generation: u64,
    pub final_census: TeamCounts,
    pub reason: StopReason,
}

/// Calls `step()` sequentially and feeds every board to a [`FrameSink`].
///
/// The driver owns the engine outright, so steps can never overlap.
pub struct Driver<S: FrameSink> {
    engine: SimulationEngine,
    config: DriverConfig,
    sink: S,
    metrics: Metrics,
    /// Present only when `stop_on_stagnation` is set.
    stagnation: Option<StagnationDetector>,
}

impl<S: FrameSink> Driver<S> {
    pub fn new(engine: SimulationEngine, config: DriverConfig, sink: S) -> Self {
        let metrics = Metrics::new(config.log_interval);
        let stagnation = config.stop_on_stagnation.then(StagnationDetector::new);
        Self {
            engine,
            config,
            sink,
            metrics,
            stagnation,
        }
    }

    /// Emits the current board, then steps until a stop condition holds.
    ///
    /// With no generation limit and stagnation detection off, this only
    /// returns on a sink error.
    pub fn run(&mut self) -> anyhow::Result<RunSummary> {
        let interval = Duration::from_millis(self.config.step_interval_ms);
        let start_generation = self.engine.generation();
        if let Some(detector) = &mut self.stagnation {
            detector.reset();
        }

        {
            let (grid, generation) = self.engine.current_state();
            self.sink.frame(grid, generation)?;
            if let Some(detector) = &mut self.stagnation {
                detector.observe(grid);
            }
        }

        let reason = loop {
            let steps = self.engine.generation() - start_generation;
            if self.config.max_generations.is_some_and(|max| steps >= max) {
                break StopReason::GenerationLimit;
            }
            if steps > 0 && !interval.is_zero() {
                thread::sleep(interval);
            }

            let started = Instant::now();
            self.engine.step();
            let elapsed = started.elapsed();
            let generation = self.engine.generation();
            let grid = self.engine.grid();
            self.metrics.record_step(generation, elapsed, grid.census());
            self.sink.frame(grid, generation)?;

            if let Some(period) = self.stagnation.as_mut().and_then(|d| d.observe(grid)) {
                tracing::info!(generation, period, "Board stagnated");
                break StopReason::Stagnant { period };
            }
        };

        let (grid, generation) = self.engine.current_state();
        let summary = RunSummary {
            steps: generation - start_generation,
            final_generation: generation,
            final_census: grid.census(),
            reason,
        };
        self.sink.finish(&summary)?;
        Ok(summary)
    }

    #[must_use]
    pub fn engine(&self) -> &SimulationEngine {
        &self.engine
    }

    #[must_use]
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
