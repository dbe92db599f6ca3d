//! Instruction Decoder.
//!
//! This module turns a 32-bit instruction word into a `Decoded` record. It
//! extracts the opcode and register indices and sign-extends the immediate
//! of the I-type or S-type format, depending on the opcode. Decoding is a
//! pure, total function: unknown opcodes decode with a zero immediate.

use crate::isa::instruction::{Decoded, InstructionBits};
use crate::isa::rv32i::opcodes;

/// Total width of an instruction in bits.
const INSTRUCTION_WIDTH: u32 = 32;

/// Bit shift for extracting the I-Type immediate field (bits 20-31).
///
/// I-Type format: `imm[11:0] | rs1 | funct3 | rd | opcode`
const I_IMM_SHIFT: u32 = 20;

/// Bit shift for extracting the S-Type immediate low field (bits 7-11).
///
/// S-Type format: `imm[11:5] | rs2 | rs1 | funct3 | imm[4:0] | opcode`
const S_IMM_LOW_SHIFT: u32 = 7;

/// Bit mask for the S-Type immediate low field (imm[4:0]).
const S_IMM_LOW_MASK: u32 = 0x1F;

/// Bit shift for extracting the S-Type immediate high field (bits 25-31).
const S_IMM_HIGH_SHIFT: u32 = 25;

/// Bit mask for the S-Type immediate high field (imm[11:5]).
const S_IMM_HIGH_MASK: u32 = 0x7F;

/// Position of imm[11:5] in the reassembled S-Type immediate.
const S_IMM_COMBINED_SHIFT: u32 = 5;

/// Width of both the I-Type and S-Type immediates.
pub const IMM_BITS: u32 = 12;

/// Decodes an instruction into its component fields.
///
/// # Arguments
///
/// * `inst` - The 32-bit instruction encoding to decode.
///
/// # Returns
///
/// A `Decoded` structure containing all extracted instruction fields.
pub fn decode(inst: u32) -> Decoded {
    let opcode = inst.opcode();

    let imm = match opcode {
        opcodes::OP_LOAD | opcodes::OP_IMM => decode_i_type_imm(inst),
        opcodes::OP_STORE => decode_s_type_imm(inst),
        _ => 0,
    };

    Decoded {
        raw: inst,
        opcode,
        rd: inst.rd(),
        rs1: inst.rs1(),
        rs2: inst.rs2(),
        funct7: inst.funct7(),
        imm,
    }
}

/// Decodes the immediate value for I-Type instructions.
///
/// Used by the load and immediate-arithmetic opcodes.
pub const fn decode_i_type_imm(inst: u32) -> i32 {
    (inst as i32) >> I_IMM_SHIFT
}

/// Decodes the immediate value for S-Type instructions.
///
/// The low five bits come from bits 7-11 and the high seven from bits 25-31.
pub const fn decode_s_type_imm(inst: u32) -> i32 {
    let low = (inst >> S_IMM_LOW_SHIFT) & S_IMM_LOW_MASK;
    let high = (inst >> S_IMM_HIGH_SHIFT) & S_IMM_HIGH_MASK;
    let combined = (high << S_IMM_COMBINED_SHIFT) | low;
    sign_extend(combined, IMM_BITS)
}

/// Sign extends the low `bits` of `val` to a 32-bit signed integer.
///
/// # Arguments
///
/// * `val` - The value to extend.
/// * `bits` - The number of valid bits in `val` (1-32).
pub const fn sign_extend(val: u32, bits: u32) -> i32 {
    let shift = INSTRUCTION_WIDTH - bits;
    ((val << shift) as i32) >> shift
}
