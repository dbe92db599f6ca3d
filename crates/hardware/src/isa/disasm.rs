//! Instruction Disassembler.
//!
//! Converts a 32-bit instruction encoding into a human-readable mnemonic
//! string for debug tracing, logging, and test diagnostics.
//!
//! # Usage
//!
//! ```
//! use rvss_core::isa::disasm::disassemble;
//! let text = disassemble(0x00500093); // ADDI x1, x0, 5
//! assert_eq!(text, "addi x1, x0, 5");
//! ```

use crate::isa::decode::decode;
use crate::isa::rv32i::{funct7, opcodes};

/// Disassembles a 32-bit instruction into a human-readable string.
///
/// Returns a mnemonic like `"add x3, x1, x2"` or `"unknown (0x...)"` for
/// encodings outside the supported subset. Registers use numeric `xN` names.
///
/// # Arguments
///
/// * `inst` - The raw 32-bit instruction encoding.
pub fn disassemble(inst: u32) -> String {
    let d = decode(inst);

    match d.opcode {
        opcodes::OP_LOAD => format!("lw x{}, {}(x{})", d.rd, d.imm, d.rs1),
        opcodes::OP_IMM => format!("addi x{}, x{}, {}", d.rd, d.rs1, d.imm),
        opcodes::OP_STORE => format!("sw x{}, {}(x{})", d.rs2, d.imm, d.rs1),
        opcodes::OP_REG => {
            let mnemonic = if d.funct7 == funct7::SUB { "sub" } else { "add" };
            format!("{mnemonic} x{}, x{}, x{}", d.rd, d.rs1, d.rs2)
        }
        opcodes::OP_HALT => "halt".to_string(),
        _ => format!("unknown ({inst:#010x})"),
    }
}
