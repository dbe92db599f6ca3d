//! Common types and constants shared across the simulator.
//!
//! This module provides the building blocks used by every other component:
//! 1. **Constants:** Window size, word geometry and register count.
//! 2. **Error Handling:** Memory, load and simulation error types.
//! 3. **Register Management:** The general-purpose register file.

/// Machine-wide constants.
pub mod constants;

/// Error types for storage, loading and simulation.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use constants::{MEM_SIZE, NUM_REGS, WORD_BYTES};
pub use error::{AccessKind, LoadError, MemoryError, SimError};
pub use reg::RegisterFile;
