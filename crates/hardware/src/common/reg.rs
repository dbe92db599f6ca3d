//! Register File.
//!
//! This module provides the `RegisterFile` struct holding the 32 general-purpose
//! registers. It provides:
//! 1. **Storage:** Thirty-two 32-bit registers, zero-initialized.
//! 2. **Invariant Enforcement:** Register `x0` always reads as zero and ignores writes.
//! 3. **Observability:** Snapshots for trace persistence and a debug dump.

use super::constants::NUM_REGS;

/// General-purpose register file.
///
/// Register `x0` is hardwired to zero; its storage slot is never written.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [u32; NUM_REGS],
}

impl RegisterFile {
    /// Creates a register file with every register set to zero.
    pub const fn new() -> Self {
        Self {
            regs: [0; NUM_REGS],
        }
    }

    /// Reads a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). Register `x0` always returns 0.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is not a valid register index.
    pub fn read(&self, idx: usize) -> u32 {
        if idx == 0 { 0 } else { self.regs[idx] }
    }

    /// Writes a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). Writes to `x0` are discarded.
    /// * `val` - The 32-bit value to store.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is not a valid register index.
    pub fn write(&mut self, idx: usize, val: u32) {
        if idx != 0 {
            self.regs[idx] = val;
        }
    }

    /// Returns the architectural view of all registers, in index order.
    ///
    /// Entry 0 is always zero.
    pub fn snapshot(&self) -> [u32; NUM_REGS] {
        let mut out = self.regs;
        out[0] = 0;
        out
    }

    /// Logs every register at debug level, two per line.
    pub fn dump(&self) {
        let regs = self.snapshot();
        for i in (0..NUM_REGS).step_by(2) {
            tracing::debug!(
                "x{:<2}={:#010x} x{:<2}={:#010x}",
                i,
                regs[i],
                i + 1,
                regs[i + 1]
            );
        }
    }
}
