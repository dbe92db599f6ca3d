//! Writeback (WB) Stage.
//!
//! Commits the result to the destination register when register write is
//! enabled. The halt word is excluded even if its signals were to enable a write.

use crate::common::RegisterFile;
use crate::core::pipeline::latches::MemWbEntry;

/// Executes the writeback stage.
///
/// # Arguments
///
/// * `regs` - Register file to commit to.
/// * `mem_wb` - Output of the memory stage.
///
/// # Returns
///
/// `true` if a register write was performed (writes to `x0` count, though
/// they are discarded by the register file).
pub fn wb_stage(regs: &mut RegisterFile, mem_wb: &MemWbEntry) -> bool {
    if mem_wb.ctrl.reg_write && !mem_wb.ctrl.halt {
        regs.write(mem_wb.rd, mem_wb.wb_data);
        true
    } else {
        false
    }
}
