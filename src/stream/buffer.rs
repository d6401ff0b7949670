//! Owned backing storage for a binary stream.
//!
//! [`ByteBuffer`] pairs a growable byte vector with an internal read position. It is the
//! minimal capability surface the cursor builds on: allocate, wrap existing bytes, append
//! at the end, and consume bytes from the read position with bounds checking. Growth on
//! append is `Vec`'s own strategy and is not part of the contract.

use crate::{Error::BufferUnderrun, Result};

/// Growable byte storage with an internal read position.
///
/// Reads consume from the position; writes always append at the logical end and never
/// touch the position. All reads are atomic: bounds are validated before the position
/// advances, so a failed read leaves the buffer exactly as it was.
#[derive(Debug, Default, Clone)]
pub struct ByteBuffer {
    data: Vec<u8>,
    position: usize,
}

impl ByteBuffer {
    /// Create an empty buffer with the given pre-reserved capacity.
    #[must_use]
    pub fn alloc(capacity: usize) -> ByteBuffer {
        ByteBuffer {
            data: Vec::with_capacity(capacity),
            position: 0,
        }
    }

    /// Create a buffer wrapping existing bytes, with the read position at 0.
    #[must_use]
    pub fn from_bytes(data: Vec<u8>) -> ByteBuffer {
        ByteBuffer { data, position: 0 }
    }

    /// The full byte contents, regardless of the read position.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        self.data.as_slice()
    }

    /// Consume the buffer and return its bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// The current read position.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Move the read position.
    ///
    /// No validation happens here; a position past the end becomes observable as
    /// [`crate::Error::BufferUnderrun`] on the next read.
    pub fn set_position(&mut self, position: usize) {
        self.position = position;
    }

    /// Total number of bytes used by the buffer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the buffer holds no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Consume exactly `len` bytes from the read position.
    ///
    /// # Errors
    /// Returns [`crate::Error::BufferUnderrun`] if fewer than `len` bytes remain (or the
    /// position is already past the end). The position does not move on failure.
    pub fn read(&mut self, len: usize) -> Result<&[u8]> {
        let Some(end) = self.position.checked_add(len) else {
            return Err(BufferUnderrun);
        };

        if end > self.data.len() {
            return Err(BufferUnderrun);
        }

        let bytes = &self.data[self.position..end];
        self.position = end;
        Ok(bytes)
    }

    /// Consume every byte from the read position to the end.
    ///
    /// Returns an empty slice when the position is already at (or past) the end; this is
    /// never an error.
    pub fn read_remaining(&mut self) -> &[u8] {
        let start = self.position.min(self.data.len());
        self.position = self.data.len();
        &self.data[start..]
    }

    /// Append bytes at the logical end of the buffer. The read position is untouched.
    pub fn write(&mut self, bytes: &[u8]) {
        self.data.extend_from_slice(bytes);
    }
}
