//! Execution units.
//!
//! The single-cycle datapath needs only the integer ALU.

/// Arithmetic Logic Unit for integer operations.
pub mod alu;
