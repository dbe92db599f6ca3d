//! Inter-stage records.
//!
//! This module defines the values handed from one stage to the next within a
//! cycle: Fetch → Decode → Execute → Memory → Writeback. The single-cycle
//! datapath builds each record once and consumes it immediately; nothing is
//! carried over into the following cycle.

use crate::core::pipeline::signals::ControlSignals;

/// Output of the fetch stage.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct IfIdEntry {
    /// Program counter of the instruction.
    pub pc: u32,
    /// 32-bit instruction encoding.
    pub inst: u32,
}

/// Output of the decode stage.
///
/// Contains the decoded fields, the source operand values and the control signals.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct IdExEntry {
    /// Program counter of the instruction.
    pub pc: u32,
    /// 32-bit instruction encoding.
    pub inst: u32,
    /// Extracted opcode field.
    pub opcode: u32,
    /// Destination register index (rd).
    pub rd: usize,
    /// First source register index (rs1).
    pub rs1: usize,
    /// Second source register index (rs2).
    pub rs2: usize,
    /// Sign-extended immediate value.
    pub imm: i32,
    /// Value read from rs1.
    pub rv1: u32,
    /// Value read from rs2.
    pub rv2: u32,
    /// Control signals for the remaining stages.
    pub ctrl: ControlSignals,
}

/// Output of the execute stage.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct ExMemEntry {
    /// Program counter of the instruction.
    pub pc: u32,
    /// 32-bit instruction encoding.
    pub inst: u32,
    /// Destination register index.
    pub rd: usize,
    /// ALU result (also the effective address of loads and stores).
    pub alu: u32,
    /// Value to store for store instructions.
    pub store_data: u32,
    /// Control signals for the remaining stages.
    pub ctrl: ControlSignals,
}

/// Output of the memory stage.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct MemWbEntry {
    /// Program counter of the instruction.
    pub pc: u32,
    /// 32-bit instruction encoding.
    pub inst: u32,
    /// Destination register index.
    pub rd: usize,
    /// Value to write back (loaded word or ALU result).
    pub wb_data: u32,
    /// Control signals for writeback.
    pub ctrl: ControlSignals,
}
