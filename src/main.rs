use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use teamlife_lib::app::{FrameSink, JsonSink, LogSink, TextSink};
use teamlife_lib::model::config::{AppConfig, SeedingStrategy};
use teamlife_lib::model::metrics::init_logging;
use teamlife_lib::model::seeding::SeedingMode;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Stop after this many generations
    #[arg(short, long)]
    generations: Option<u64>,

    /// Ignore any generation limit and run until stagnation or Ctrl+C
    #[arg(long, conflicts_with = "generations")]
    unbounded: bool,

    /// RNG seed for the initial board
    #[arg(short, long)]
    seed: Option<u64>,

    /// Seeding strategy
    #[arg(long, value_enum)]
    strategy: Option<Strategy>,

    /// Seed a single team only (standard Game of Life); implies uniform seeding
    #[arg(long)]
    classic: bool,

    #[arg(long)]
    rows: Option<usize>,

    #[arg(long)]
    cols: Option<usize>,

    /// Delay between generations in milliseconds
    #[arg(long)]
    interval_ms: Option<u64>,

    /// Stop once the board repeats
    #[arg(long)]
    stop_on_stagnation: bool,

    /// Where frames go
    #[arg(short, long, value_enum, default_value = "log")]
    output: Output,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum Strategy {
    Uniform,
    SplitHalf,
    Formation,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum Output {
    Log,
    Text,
    Json,
}

impl Args {
    fn apply(&self, config: &mut AppConfig) {
        if let Some(rows) = self.rows {
            config.board.rows = rows;
        }
        if let Some(cols) = self.cols {
            config.board.cols = cols;
        }
        if self.seed.is_some() {
            config.seeding.seed = self.seed;
        }
        if let Some(strategy) = self.strategy {
            config.seeding.strategy = match strategy {
                Strategy::Uniform => SeedingStrategy::Uniform,
                Strategy::SplitHalf => SeedingStrategy::SplitHalf,
                Strategy::Formation => SeedingStrategy::Formation,
            };
        }
        if self.classic {
            config.seeding.strategy = SeedingStrategy::Uniform;
            config.seeding.mode = SeedingMode::Classic;
        }
        if self.generations.is_some() {
            config.driver.max_generations = self.generations;
        }
        if self.unbounded {
            config.driver.max_generations = None;
        }
        if let Some(ms) = self.interval_ms {
            config.driver.step_interval_ms = ms;
        }
        if self.stop_on_stagnation {
            config.driver.stop_on_stagnation = true;
        }
    }
}

fn run<S: FrameSink>(config: &AppConfig, sink: S) -> Result<()> {
    let mut driver = teamlife_lib::build_driver(config, sink)?;
    let summary = driver.run()?;
    tracing::info!(
        steps = summary.steps,
        mean_step_us = driver.metrics().mean_step_time().as_micros() as u64,
        elapsed_ms = driver.metrics().elapsed().as_millis() as u64,
        "Run complete"
    );
    Ok(())
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let mut config = AppConfig::load(&args.config)?;
    args.apply(&mut config);
    config.validate()?;
    tracing::info!(fingerprint = %config.fingerprint(), "Configuration loaded");

    match args.output {
        Output::Log => run(&config, LogSink),
        Output::Text => run(&config, TextSink::new(io::stdout().lock())),
        Output::Json => run(&config, JsonSink::new(io::stdout().lock())),
    }
}
