//! Instruction encoders for the supported subset.
//!
//! Each helper returns the raw 32-bit word; `image` lays words out
//! big-endian the way the instruction memory expects them.

use rvss_core::isa::rv32i::{funct7, opcodes};

/// The halt encoding (all ones; opcode field `0x7F`).
pub const HALT: u32 = 0xFFFF_FFFF;

/// Encode an I-type instruction.
pub fn i_type(opcode: u32, rd: u32, rs1: u32, imm: i32) -> u32 {
    let imm_bits = (imm as u32) & 0xFFF;
    imm_bits << 20 | (rs1 & 0x1F) << 15 | (rd & 0x1F) << 7 | (opcode & 0x7F)
}

/// Encode an S-type instruction.
pub fn s_type(opcode: u32, rs1: u32, rs2: u32, imm: i32) -> u32 {
    let v = imm as u32;
    let hi = (v >> 5) & 0x7F;
    let lo = v & 0x1F;
    hi << 25 | (rs2 & 0x1F) << 20 | (rs1 & 0x1F) << 15 | lo << 7 | (opcode & 0x7F)
}

/// Encode an R-type instruction.
pub fn r_type(opcode: u32, rd: u32, rs1: u32, rs2: u32, f7: u32) -> u32 {
    (f7 & 0x7F) << 25 | (rs2 & 0x1F) << 20 | (rs1 & 0x1F) << 15 | (rd & 0x1F) << 7 | (opcode & 0x7F)
}

/// `addi rd, rs1, imm`
pub fn addi(rd: u32, rs1: u32, imm: i32) -> u32 {
    i_type(opcodes::OP_IMM, rd, rs1, imm)
}

/// `lw rd, imm(rs1)`
pub fn lw(rd: u32, rs1: u32, imm: i32) -> u32 {
    i_type(opcodes::OP_LOAD, rd, rs1, imm)
}

/// `sw rs2, imm(rs1)`
pub fn sw(rs2: u32, rs1: u32, imm: i32) -> u32 {
    s_type(opcodes::OP_STORE, rs1, rs2, imm)
}

/// `add rd, rs1, rs2`
pub fn add(rd: u32, rs1: u32, rs2: u32) -> u32 {
    r_type(opcodes::OP_REG, rd, rs1, rs2, funct7::DEFAULT)
}

/// `sub rd, rs1, rs2`
pub fn sub(rd: u32, rs1: u32, rs2: u32) -> u32 {
    r_type(opcodes::OP_REG, rd, rs1, rs2, funct7::SUB)
}

/// Lays out `words` big-endian starting at address 0.
pub fn image(words: &[u32]) -> Vec<u8> {
    words.iter().flat_map(|w| w.to_be_bytes()).collect()
}

/// Renders bytes in the text image format, one 8-digit line per byte.
pub fn image_text(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:08b}\n")).collect()
}
