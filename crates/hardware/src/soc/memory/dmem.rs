//! Data Memory.
//!
//! Read/write window populated once from a data image. Word accesses are
//! big-endian and byte-granular: no alignment is enforced, so a word may
//! start at any address as long as all four bytes lie inside the window.

use super::buffer::WindowBuffer;
use crate::common::constants::MEM_SIZE;
use crate::common::error::{AccessKind, LoadError, MemoryError};

/// Read/write data store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataMemory {
    buffer: WindowBuffer,
}

impl DataMemory {
    /// Builds the data window from `image`, byte `i` landing at address `i`.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::ImageTooLarge` if the image exceeds the window.
    pub fn load(image: &[u8]) -> Result<Self, LoadError> {
        Ok(Self {
            buffer: WindowBuffer::with_image(MEM_SIZE, image)?,
        })
    }

    /// Reads the big-endian word at `addr`.
    ///
    /// # Errors
    ///
    /// Returns `MemoryError::OutOfWindow` with `AccessKind::Load` if the word
    /// does not fit in the window.
    pub fn read(&self, addr: u32) -> Result<u32, MemoryError> {
        self.buffer.read_u32_be(addr, AccessKind::Load)
    }

    /// Writes `val` big-endian at `addr..addr + 4`.
    ///
    /// # Errors
    ///
    /// Returns `MemoryError::OutOfWindow` with `AccessKind::Store` if the word
    /// does not fit in the window. Nothing is written in that case.
    pub fn write(&mut self, addr: u32, val: u32) -> Result<(), MemoryError> {
        self.buffer.write_u32_be(addr, val)
    }

    /// Returns the full window, one byte per address, for persistence.
    pub fn snapshot(&self) -> &[u8] {
        self.buffer.as_slice()
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
