//! Single-cycle RV32 subset simulator library.
//!
//! This crate implements a cycle-accurate single-cycle datapath for a minimal
//! RV32 load/store subset with the following:
//! 1. **Core:** Datapath engine running fetch, decode, execute, memory and writeback in one cycle.
//! 2. **Memory:** Bounds-checked, big-endian 1000-byte instruction and data windows.
//! 3. **ISA:** Decoding and disassembly of `lw`, `addi`, `sw`, `add`/`sub` and `halt`.
//! 4. **Simulation:** Image loader, per-cycle trace sinks, result persistence and statistics.

/// Common types and constants (window size, errors, register file).
pub mod common;
/// Simulator configuration.
pub mod config;
/// Datapath engine (CPU, stages, ALU).
pub mod core;
/// Instruction set (opcodes, bitfields, decode, disassembly).
pub mod isa;
/// Image loading, tracing and the top-level driver.
pub mod sim;
/// Instruction and data memories.
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Datapath engine; owns the register file, memories and counters.
pub use crate::core::Cpu;
/// Top-level driver; owns a `Cpu` and a trace sink.
pub use crate::sim::Simulator;
