//! The driver side of the simulation: the loop that calls `step()`, paces it,
//! and hands every generation to a frame sink.

pub mod driver;
pub mod sink;
pub mod stagnation;

pub use driver::{Driver, RunSummary, StopReason};
pub use sink::{FrameSink, JsonSink, LogSink, TextSink};
pub use stagnation::StagnationDetector;
