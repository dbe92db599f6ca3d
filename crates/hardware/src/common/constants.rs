//! System-wide constants.
//!
//! This module defines the fixed parameters of the simulated machine. It includes:
//! 1. **Memory Window:** Size of the instruction and data address windows.
//! 2. **Word Geometry:** Byte width of a word and the PC increment.
//! 3. **Register File:** Number of architectural registers.
//! 4. **Text Formats:** Field widths used by the byte-per-line image format.

/// Size in bytes of both the instruction and the data window.
///
/// The machine is 32-bit addressable, but only this many bytes are backed by storage.
pub const MEM_SIZE: usize = 1000;

/// Width of a machine word in bytes.
pub const WORD_BYTES: usize = 4;

/// Amount the program counter advances after a non-halting cycle.
pub const PC_STEP: u32 = WORD_BYTES as u32;

/// Number of general-purpose registers.
pub const NUM_REGS: usize = 32;

/// Characters per line in a memory image (one byte, MSB first).
pub const BYTE_TEXT_WIDTH: usize = 8;

/// Characters per line in a register snapshot (one word, MSB first).
pub const WORD_TEXT_WIDTH: usize = 32;
