//! RV32 load/store subset.
//!
//! Defines the encodings understood by the datapath: one load, one
//! immediate add, one store, one register-register add/sub, and the
//! simulator-specific halt word.
//!
//! # Structure
//!
//! - `opcodes`: Major opcodes (Load, OpImm, Store, OpReg, Halt).
//! - `funct7`: Discriminator selecting SUB within the register-register opcode.

/// Function code 7 definitions for register-register arithmetic.
pub mod funct7;

/// Supported major opcodes.
pub mod opcodes;
