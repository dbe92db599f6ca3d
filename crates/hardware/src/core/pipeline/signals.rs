//! Datapath control signals and operation types.
//!
//! This module defines the signals produced by decode that steer the rest of
//! the cycle. It performs:
//! 1. **Operation Classification:** Selects the ALU operation.
//! 2. **Operand Selection:** Chooses between the immediate and `rs2` for ALU input B.
//! 3. **Memory Control:** Enables the data-memory read or write.
//! 4. **Machine Control:** Marks the halt word and opcodes outside the subset.

/// ALU operation types.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AluOp {
    /// Wrapping addition (also address generation).
    #[default]
    Add,

    /// Wrapping subtraction.
    Sub,
}

/// Source for ALU operand B. Operand A is always `rs1`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OpBSrc {
    /// Sign-extended immediate.
    #[default]
    Imm,

    /// Value read from `rs2`.
    Reg2,
}

/// Control signals for one instruction.
///
/// The default value describes a no-op: nothing is read, written or stored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlSignals {
    /// Enable write to the destination register.
    pub reg_write: bool,
    /// Enable data-memory read (load).
    pub mem_read: bool,
    /// Enable data-memory write (store).
    pub mem_write: bool,
    /// Instruction is the halt word.
    pub halt: bool,
    /// Opcode is outside the supported subset.
    pub unknown: bool,
    /// ALU operation to perform.
    pub alu: AluOp,
    /// Source selection for ALU operand B.
    pub b_src: OpBSrc,
}
