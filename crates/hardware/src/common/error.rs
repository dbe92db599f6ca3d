//! Error taxonomy.
//!
//! This module defines every failure the simulator can report. It provides:
//! 1. **Memory Errors:** Accesses that fall outside the backed address window.
//! 2. **Load Errors:** Missing or malformed memory image sources.
//! 3. **Simulation Errors:** Run-aborting conditions raised by the datapath engine.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Kind of memory access that produced a fault.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccessKind {
    /// Instruction fetch from the instruction window.
    Fetch,
    /// Word read from the data window.
    Load,
    /// Word write to the data window.
    Store,
}

impl fmt::Display for AccessKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fetch => write!(f, "fetch"),
            Self::Load => write!(f, "load"),
            Self::Store => write!(f, "store"),
        }
    }
}

/// Fault raised by a storage component.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MemoryError {
    /// A 4-byte access at `addr` does not fit inside the window.
    #[error("{kind} at address {addr:#010x} is outside the {size}-byte window")]
    OutOfWindow {
        /// Access that faulted.
        kind: AccessKind,
        /// First byte address of the access.
        addr: u32,
        /// Size of the window that was accessed.
        size: usize,
    },
}

impl MemoryError {
    /// Returns the address that caused the fault.
    pub const fn addr(&self) -> u32 {
        match self {
            Self::OutOfWindow { addr, .. } => *addr,
        }
    }
}

/// Failure while reading a memory image.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The image file could not be read.
    #[error("unable to read memory image '{}': {source}", .path.display())]
    Io {
        /// Path that was opened.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// A line is not exactly eight `0`/`1` characters.
    #[error("line {line}: expected 8 binary digits, found {content:?}")]
    Malformed {
        /// One-based line number.
        line: usize,
        /// Offending line text.
        content: String,
    },

    /// The image holds more bytes than the window can store.
    #[error("image holds {bytes} bytes but the window holds only {capacity}")]
    ImageTooLarge {
        /// Number of bytes in the image.
        bytes: usize,
        /// Window capacity in bytes.
        capacity: usize,
    },
}

/// Condition that aborts a simulation run.
#[derive(Debug, Error)]
pub enum SimError {
    /// A fetch, load or store left the backed window.
    #[error("cycle {cycle}: {source} (pc {pc:#010x}, {instructions} instructions retired)")]
    Memory {
        /// Cycle during which the access was attempted.
        cycle: u64,
        /// Program counter of the faulting instruction.
        pc: u32,
        /// Instructions retired before the fault.
        instructions: u64,
        /// Storage fault.
        #[source]
        source: MemoryError,
    },

    /// An opcode outside the supported subset was decoded while unknown opcodes fault.
    #[error("illegal instruction {inst:#010x} (opcode {opcode:#04x}) at pc {pc:#010x}")]
    IllegalInstruction {
        /// Program counter of the instruction.
        pc: u32,
        /// Raw instruction word.
        inst: u32,
        /// Extracted opcode field.
        opcode: u32,
    },

    /// The configured cycle budget ran out before the machine halted.
    #[error("machine did not halt within {limit} cycles")]
    CycleLimit {
        /// Configured limit.
        limit: u64,
    },

    /// A memory image could not be loaded.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// Trace or result persistence failed.
    #[error("failed to write simulation output: {0}")]
    Trace(#[from] io::Error),
}
