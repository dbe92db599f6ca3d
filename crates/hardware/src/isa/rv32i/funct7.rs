//! Register-register function codes (funct7).
//!
//! The `funct7` field (bits 31-25) selects the arithmetic variant for `OP_REG`.
//! Only `SUB` is recognised; every other value performs an add.

/// Default operation (ADD).
pub const DEFAULT: u32 = 0b000_0000;

/// Alternate operation (SUB).
pub const SUB: u32 = 0b010_0000;
