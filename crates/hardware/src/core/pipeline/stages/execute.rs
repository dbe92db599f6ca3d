//! Execute (EX) Stage.
//!
//! Runs the ALU on `rs1` and the selected operand B. For loads and stores the
//! result is the effective address; for arithmetic it is the value to write back.

use crate::core::pipeline::latches::{ExMemEntry, IdExEntry};
use crate::core::pipeline::signals::OpBSrc;
use crate::core::units::alu::Alu;

/// Executes the execute stage.
///
/// # Arguments
///
/// * `id_ex` - Output of the decode stage.
pub fn execute_stage(id_ex: &IdExEntry) -> ExMemEntry {
    let op_b = match id_ex.ctrl.b_src {
        OpBSrc::Imm => id_ex.imm as u32,
        OpBSrc::Reg2 => id_ex.rv2,
    };

    ExMemEntry {
        pc: id_ex.pc,
        inst: id_ex.inst,
        rd: id_ex.rd,
        alu: Alu::execute(id_ex.ctrl.alu, id_ex.rv1, op_b),
        store_data: id_ex.rv2,
        ctrl: id_ex.ctrl,
    }
}
