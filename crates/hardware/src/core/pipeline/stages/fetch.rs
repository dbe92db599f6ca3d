//! Instruction Fetch (IF) Stage.
//!
//! Reads the 32-bit word at the current program counter from instruction memory.

use crate::common::error::MemoryError;
use crate::core::pipeline::latches::IfIdEntry;
use crate::soc::memory::InstructionMemory;

/// Executes the instruction fetch stage.
///
/// # Arguments
///
/// * `imem` - Instruction memory to read from.
/// * `pc` - Address of the instruction.
///
/// # Errors
///
/// Returns `MemoryError::OutOfWindow` if the word at `pc` is not backed by
/// the instruction window.
pub fn fetch_stage(imem: &InstructionMemory, pc: u32) -> Result<IfIdEntry, MemoryError> {
    let inst = imem.fetch(pc)?;
    Ok(IfIdEntry { pc, inst })
}
