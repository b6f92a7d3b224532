//! Frame sinks: where each generation goes once the engine has produced it.

use std::io::Write;

use anyhow::Context;
use serde::Serialize;

use crate::app::driver::RunSummary;
use crate::model::grid::Grid;

/// Consumer of the board after every step.
pub trait FrameSink {
    fn frame(&mut self, grid: &Grid, generation: u64) -> anyhow::Result<()>;

    /// Called once after the last frame.
    fn finish(&mut self, _summary: &RunSummary) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Logs a census per frame at debug level and the run summary at info.
#[derive(Debug, Default)]
pub struct LogSink;

impl FrameSink for LogSink {
    fn frame(&mut self, grid: &Grid, generation: u64) -> anyhow::Result<()> {
        let census = grid.census();
        tracing::debug!(
            generation,
            team_a = census.team_a,
            team_b = census.team_b,
            "Frame"
        );
        Ok(())
    }

    fn finish(&mut self, summary: &RunSummary) -> anyhow::Result<()> {
        tracing::info!(
            generation = summary.final_generation,
            steps = summary.steps,
            team_a = summary.final_census.team_a,
            team_b = summary.final_census.team_b,
            reason = ?summary.reason,
            "Simulation finished"
        );
        Ok(())
    }
}

/// Writes boards as text, `.` for dead and `A`/`B` for the teams.
pub struct TextSink<W: Write> {
    out: W,
}

impl<W: Write> TextSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> FrameSink for TextSink<W> {
    fn frame(&mut self, grid: &Grid, generation: u64) -> anyhow::Result<()> {
        writeln!(self.out, "generation {generation}\n{grid}\n").context("writing text frame")?;
        Ok(())
    }

    fn finish(&mut self, _summary: &RunSummary) -> anyhow::Result<()> {
        self.out.flush().context("flushing text frames")
    }
}

#[derive(Serialize)]
struct Frame<'a> {
    generation: u64,
    rows: usize,
    cols: usize,
    cells: Vec<&'a [crate::model::state::Cell]>,
}

/// Writes one JSON object per line:
/// `{"generation":…,"rows":…,"cols":…,"cells":[["Dead","TeamA",…],…]}`.
pub struct JsonSink<W: Write> {
    out: W,
}

impl<W: Write> JsonSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> FrameSink for JsonSink<W> {
    fn frame(&mut self, grid: &Grid, generation: u64) -> anyhow::Result<()> {
        let frame = Frame {
            generation,
            rows: grid.rows(),
            cols: grid.cols(),
            cells: grid.iter_rows().collect(),
        };
        serde_json::to_writer(&mut self.out, &frame).context("encoding json frame")?;
        writeln!(self.out).context("writing json frame")?;
        Ok(())
    }

    fn finish(&mut self, _summary: &RunSummary) -> anyhow::Result<()> {
        self.out.flush().context("flushing json frames")
    }
}
