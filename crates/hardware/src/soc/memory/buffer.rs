//! Memory Window Buffer.
//!
//! This module provides the fixed-size byte store behind both memories. It provides:
//! 1. **Loading:** One-shot population from a byte image starting at address 0.
//! 2. **Word Access:** Big-endian 4-byte reads and writes at any byte offset.
//! 3. **Bounds Checking:** Every access is checked against the window and faults
//!    with a `MemoryError` instead of touching storage.

use std::ops::{Index, Range};

use crate::common::constants::WORD_BYTES;
use crate::common::error::{AccessKind, LoadError, MemoryError};

/// A fixed-size, zero-initialized byte window.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WindowBuffer {
    bytes: Vec<u8>,
}

impl WindowBuffer {
    /// Creates a zero-filled buffer of `size` bytes.
    pub fn new(size: usize) -> Self {
        Self {
            bytes: vec![0; size],
        }
    }

    /// Creates a buffer of `size` bytes whose prefix is `image`.
    ///
    /// Bytes past the end of `image` stay zero.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::ImageTooLarge` if `image` is longer than `size`.
    pub fn with_image(size: usize, image: &[u8]) -> Result<Self, LoadError> {
        if image.len() > size {
            return Err(LoadError::ImageTooLarge {
                bytes: image.len(),
                capacity: size,
            });
        }
        let mut buf = Self::new(size);
        buf.bytes[..image.len()].copy_from_slice(image);
        Ok(buf)
    }

    /// Returns the size of the window in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if the window has no backing bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns the byte range `addr..addr + 4` if it lies inside the window.
    fn word_range(&self, addr: u32, kind: AccessKind) -> Result<Range<usize>, MemoryError> {
        let start = addr as usize;
        match start.checked_add(WORD_BYTES) {
            Some(end) if end <= self.bytes.len() => Ok(start..end),
            _ => Err(MemoryError::OutOfWindow {
                kind,
                addr,
                size: self.bytes.len(),
            }),
        }
    }

    /// Reads four bytes at `addr` and composes them most-significant first.
    ///
    /// # Errors
    ///
    /// Returns `MemoryError::OutOfWindow` tagged with `kind` if `addr + 3` is outside the window.
    pub fn read_u32_be(&self, addr: u32, kind: AccessKind) -> Result<u32, MemoryError> {
        let range = self.word_range(addr, kind)?;
        let mut word = [0u8; WORD_BYTES];
        word.copy_from_slice(&self.bytes[range]);
        Ok(u32::from_be_bytes(word))
    }

    /// Splits `val` most-significant first and stores it at `addr..addr + 4`.
    ///
    /// # Errors
    ///
    /// Returns `MemoryError::OutOfWindow` if `addr + 3` is outside the window;
    /// the buffer is left untouched.
    pub fn write_u32_be(&mut self, addr: u32, val: u32) -> Result<(), MemoryError> {
        let range = self.word_range(addr, AccessKind::Store)?;
        self.bytes[range].copy_from_slice(&val.to_be_bytes());
        Ok(())
    }

    /// Returns the whole window in address order.
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }
}

impl Index<usize> for WindowBuffer {
    type Output = u8;

    fn index(&self, index: usize) -> &Self::Output {
        &self.bytes[index]
    }
}
