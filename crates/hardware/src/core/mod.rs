//! Core processor implementation.
//!
//! This module contains the datapath engine, its per-stage logic and the
//! execution units it uses.

/// CPU core implementation and execution orchestration.
pub mod cpu;

/// Datapath stages, inter-stage records and control signals.
pub mod pipeline;

/// Execution units (ALU).
pub mod units;

pub use self::cpu::Cpu;
