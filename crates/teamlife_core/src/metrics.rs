//! Step metrics and logging setup.
//!
//! Provides structured logging and counters for monitoring a running
//! simulation.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use teamlife_data::TeamCounts;

/// Collector for per-step statistics.
pub struct Metrics {
    steps: AtomicU64,
    team_a: AtomicU64,
    team_b: AtomicU64,
    busy_nanos: AtomicU64,
    log_interval: u64,
    start_time: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new(100)
    }
}

impl Metrics {
    /// Creates a collector that logs a census line every `log_interval` steps.
    #[must_use]
    pub fn new(log_interval: u64) -> Self {
        Self {
            steps: AtomicU64::new(0),
            team_a: AtomicU64::new(0),
            team_b: AtomicU64::new(0),
            busy_nanos: AtomicU64::new(0),
            log_interval: log_interval.max(1),
            start_time: Instant::now(),
        }
    }

    /// Records a completed step with its duration and resulting census.
    pub fn record_step(&self, generation: u64, duration: Duration, census: TeamCounts) {
        self.steps.fetch_add(1, Ordering::Relaxed);
        self.team_a.store(census.team_a as u64, Ordering::Relaxed);
        self.team_b.store(census.team_b as u64, Ordering::Relaxed);
        let nanos = u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX);
        self.busy_nanos.fetch_add(nanos, Ordering::Relaxed);

        if generation % self.log_interval == 0 {
            tracing::info!(
                generation,
                team_a = census.team_a,
                team_b = census.team_b,
                step_us = duration.as_micros() as u64,
                "Generation census"
            );
        }
    }

    #[must_use]
    pub fn steps(&self) -> u64 {
        self.steps.load(Ordering::Relaxed)
    }

    /// Census recorded by the latest step.
    #[must_use]
    pub fn last_census(&self) -> TeamCounts {
        TeamCounts {
            team_a: self.team_a.load(Ordering::Relaxed) as usize,
            team_b: self.team_b.load(Ordering::Relaxed) as usize,
        }
    }

    /// Mean time spent inside `step()`, zero before the first step.
    #[must_use]
    pub fn mean_step_time(&self) -> Duration {
        let steps = self.steps();
        if steps == 0 {
            return Duration::ZERO;
        }
        Duration::from_nanos(self.busy_nanos.load(Ordering::Relaxed) / steps)
    }

    /// Gets elapsed time since metrics creation.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Initialize tracing subscriber for logging.
///
/// Honors `RUST_LOG`; defaults to `info`. Safe to call more than once.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .finish(),
    )
    .ok();
}
