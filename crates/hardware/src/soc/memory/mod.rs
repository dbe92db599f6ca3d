//! Instruction and data memories.
//!
//! This module implements the two storage windows the datapath operates on. It provides:
//! 1. **Buffer:** Bounds-checked, big-endian backing storage (`WindowBuffer`).
//! 2. **Instruction Memory:** Read-only window serving 32-bit fetches.
//! 3. **Data Memory:** Read/write window serving loads, stores and snapshots.

/// Fixed-size byte window with checked big-endian word access.
pub mod buffer;

/// Data memory (loads, stores, snapshot).
pub mod dmem;

/// Instruction memory (fetch only).
pub mod imem;

pub use buffer::WindowBuffer;
pub use dmem::DataMemory;
pub use imem::InstructionMemory;
