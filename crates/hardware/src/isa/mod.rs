//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the opcodes, function codes, field extraction and decoding logic
//! for the supported RV32 load/store subset.

/// Instruction decoding and immediate sign extension.
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Instruction encoding structures and bit extraction utilities.
pub mod instruction;

/// Opcode and funct7 constants of the supported subset.
pub mod rv32i;
