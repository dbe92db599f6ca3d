//! Instruction Decode (ID) Stage.
//!
//! This module implements the second stage of the datapath. It performs the following:
//! 1. **Decoding:** Converts raw instruction bits into fields using the ISA decoder.
//! 2. **Control Generation:** Derives ALU, memory and register-write signals from the opcode.
//! 3. **Register Read:** Reads the source operands `rs1` and `rs2` from the register file.

use crate::common::RegisterFile;
use crate::core::pipeline::latches::{IdExEntry, IfIdEntry};
use crate::core::pipeline::signals::{AluOp, ControlSignals, OpBSrc};
use crate::isa::decode::decode as instruction_decode;
use crate::isa::instruction::Decoded;
use crate::isa::rv32i::{funct7, opcodes};

/// Derives the control signals for a decoded instruction.
///
/// Opcodes outside the subset yield a no-op with `unknown` set. The halt
/// word never enables a register write.
pub fn control_signals(d: &Decoded) -> ControlSignals {
    let mut c = ControlSignals::default();

    match d.opcode {
        opcodes::OP_LOAD => {
            c.reg_write = true;
            c.mem_read = true;
        }
        opcodes::OP_IMM => {
            c.reg_write = true;
        }
        opcodes::OP_STORE => {
            c.mem_write = true;
        }
        opcodes::OP_REG => {
            c.reg_write = true;
            c.b_src = OpBSrc::Reg2;
            c.alu = if d.funct7 == funct7::SUB {
                AluOp::Sub
            } else {
                AluOp::Add
            };
        }
        opcodes::OP_HALT => {
            c.halt = true;
        }
        _ => {
            c.unknown = true;
        }
    }

    c
}

/// Executes the instruction decode stage.
///
/// # Arguments
///
/// * `regs` - Register file to read the source operands from.
/// * `if_id` - Output of the fetch stage.
pub fn decode_stage(regs: &RegisterFile, if_id: &IfIdEntry) -> IdExEntry {
    let d = instruction_decode(if_id.inst);

    IdExEntry {
        pc: if_id.pc,
        inst: if_id.inst,
        opcode: d.opcode,
        rd: d.rd,
        rs1: d.rs1,
        rs2: d.rs2,
        imm: d.imm,
        rv1: regs.read(d.rs1),
        rv2: regs.read(d.rs2),
        ctrl: control_signals(&d),
    }
}
