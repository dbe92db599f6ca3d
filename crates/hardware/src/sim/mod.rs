//! Simulation driver and file I/O.
//!
//! Loads memory images from an IO directory, runs the engine to completion,
//! and writes the per-cycle traces and end-of-run results.

/// Text memory image parsing and binary formatting.
pub mod loader;
/// End-of-run data memory and metrics files.
pub mod output;
/// Top-level driver owning the engine and a trace sink.
pub mod simulator;
/// Per-cycle trace sinks.
pub mod trace;

pub use simulator::Simulator;
pub use trace::{FileTrace, MemoryTrace, NullTrace, TraceSink};
