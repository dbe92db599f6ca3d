//! Storage side of the machine.
//!
//! The datapath reads instructions from one window and data from another;
//! both live here, separated from the engine that drives them.

/// Instruction and data memories.
pub mod memory;

pub use memory::{DataMemory, InstructionMemory};
