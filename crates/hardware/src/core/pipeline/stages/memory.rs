//! Memory Access (MEM) Stage.
//!
//! Performs the data-memory read of a load or the write of a store at the
//! address computed by the execute stage. Other instructions pass the ALU
//! result through unchanged.

use crate::common::error::MemoryError;
use crate::core::pipeline::latches::{ExMemEntry, MemWbEntry};
use crate::soc::memory::DataMemory;

/// Executes the memory access stage.
///
/// # Arguments
///
/// * `dmem` - Data memory to read from or write to.
/// * `ex_mem` - Output of the execute stage.
///
/// # Errors
///
/// Returns `MemoryError::OutOfWindow` if a load or store address is not
/// backed by the data window. A faulting store leaves memory untouched.
pub fn mem_stage(dmem: &mut DataMemory, ex_mem: &ExMemEntry) -> Result<MemWbEntry, MemoryError> {
    let wb_data = if ex_mem.ctrl.mem_read {
        dmem.read(ex_mem.alu)?
    } else {
        if ex_mem.ctrl.mem_write {
            dmem.write(ex_mem.alu, ex_mem.store_data)?;
        }
        ex_mem.alu
    };

    Ok(MemWbEntry {
        pc: ex_mem.pc,
        inst: ex_mem.inst,
        rd: ex_mem.rd,
        wb_data,
        ctrl: ex_mem.ctrl,
    })
}
