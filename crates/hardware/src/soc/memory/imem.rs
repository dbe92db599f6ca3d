//! Instruction Memory.
//!
//! Read-only window populated once from an instruction image. Instructions
//! are never self-modifying, so no write path is exposed after construction.

use super::buffer::WindowBuffer;
use crate::common::constants::MEM_SIZE;
use crate::common::error::{AccessKind, LoadError, MemoryError};

/// Read-only instruction store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InstructionMemory {
    buffer: WindowBuffer,
}

impl InstructionMemory {
    /// Builds the instruction window from `image`, byte `i` landing at address `i`.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::ImageTooLarge` if the image exceeds the window.
    pub fn load(image: &[u8]) -> Result<Self, LoadError> {
        Ok(Self {
            buffer: WindowBuffer::with_image(MEM_SIZE, image)?,
        })
    }

    /// Fetches the big-endian instruction word at `addr`.
    ///
    /// # Errors
    ///
    /// Returns `MemoryError::OutOfWindow` with `AccessKind::Fetch` if the word
    /// does not fit in the window.
    pub fn fetch(&self, addr: u32) -> Result<u32, MemoryError> {
        self.buffer.read_u32_be(addr, AccessKind::Fetch)
    }

    /// Returns the size of the window in bytes.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns `true` if the window has no backing bytes.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}
