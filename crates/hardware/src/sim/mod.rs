//! Simulation utilities and program loading.
//!
//! Provides the machine-code loader, the run loop, the cache trace, and the
//! final-state report.

/// Machine-code listing parser.
pub mod loader;

/// Final-state dump.
pub mod report;

/// Run loop and halt detection.
pub mod simulator;

/// Cache access events and sinks.
pub mod trace;

pub use self::loader::ProgramImage;
pub use self::simulator::{RunSummary, Simulator, StepOutcome};
pub use self::trace::{AccessEvent, NullSink, TraceSink, WriterSink};
