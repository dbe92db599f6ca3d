//! Major opcodes (bits 6-0) of the supported subset.

/// Word load (LW).
pub const OP_LOAD: u32 = 0b000_0011;

/// Immediate arithmetic (ADDI).
pub const OP_IMM: u32 = 0b001_0011;

/// Word store (SW).
pub const OP_STORE: u32 = 0b010_0011;

/// Register-register arithmetic (ADD, SUB).
pub const OP_REG: u32 = 0b011_0011;

/// Simulator halt. Freezes the PC and drains the machine.
pub const OP_HALT: u32 = 0b111_1111;
