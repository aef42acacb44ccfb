//! Argument buffer for accumulating an operation's payload bytes.
//!
//! Value packets arrive one byte at a time; this buffer collects them until
//! a trigger packet interprets the accumulated run as a typed value.
//!
//! The buffer keeps a single index that serves as both the write position
//! and the read cursor: [`ArgBuffer::validate_len`] rewinds it so the
//! validated bytes can be read back from the start, and bytes are never
//! physically erased, only logically discarded. Callers must read only
//! after a successful validation, and must read exactly the validated
//! count before the next [`ArgBuffer::clear`].
//!
//! # Example
//!
//! ```
//! use bytewire::engine::ArgBuffer;
//! use bytewire::protocol::encode_f32;
//!
//! let mut buffer = ArgBuffer::new();
//! for byte in encode_f32(2.45) {
//!     buffer.push(byte).unwrap();
//! }
//!
//! buffer.validate_len(4).unwrap();
//! assert_eq!(buffer.read_f32().unwrap(), 2.45);
//! ```

use bytes::BytesMut;

use crate::error::{ProtocolError, Result};
use crate::protocol::{decode_f32, decode_i32, VALUE_WIDTH};

/// Default argument buffer capacity in bytes.
pub const DEFAULT_ARG_CAPACITY: usize = 64;

/// Fixed-capacity accumulator for one operation's argument bytes.
///
/// Never grows; pushing past capacity drops the byte and reports
/// [`ProtocolError::BufferOverflow`].
#[derive(Debug)]
pub struct ArgBuffer {
    /// Backing storage, zero-filled to capacity at construction.
    buf: BytesMut,
    /// Combined write position and read cursor.
    cursor: usize,
}

impl ArgBuffer {
    /// Create a buffer with the default capacity (64 bytes).
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_ARG_CAPACITY)
    }

    /// Create a buffer with a custom fixed capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: BytesMut::zeroed(capacity),
            cursor: 0,
        }
    }

    /// Reset the cursor to the start, logically emptying the buffer.
    #[inline]
    pub fn clear(&mut self) {
        self.cursor = 0;
    }

    /// Append one argument byte.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::BufferOverflow`] when the buffer is at
    /// capacity; the byte is dropped, never overwritten over older data.
    pub fn push(&mut self, byte: u8) -> Result<()> {
        if self.cursor >= self.buf.len() {
            return Err(ProtocolError::BufferOverflow {
                capacity: self.buf.len(),
            });
        }
        self.buf[self.cursor] = byte;
        self.cursor += 1;
        Ok(())
    }

    /// Check that exactly `expected` bytes have been accumulated.
    ///
    /// Always rewinds the cursor, pass or fail: a successful validation
    /// positions the cursor for reading the bytes back, and a failed one
    /// consumes the malformed accumulation so it cannot leak into the
    /// next operation.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::TooFewArguments`] or
    /// [`ProtocolError::TooManyArguments`] on a count mismatch.
    pub fn validate_len(&mut self, expected: usize) -> Result<()> {
        let actual = self.cursor;
        self.cursor = 0;

        if actual < expected {
            Err(ProtocolError::TooFewArguments { expected, actual })
        } else if actual > expected {
            Err(ProtocolError::TooManyArguments { expected, actual })
        } else {
            Ok(())
        }
    }

    /// Read the byte at the cursor and advance.
    ///
    /// The bound is the buffer's capacity, not the count of bytes written:
    /// reading past the written count but under capacity yields whatever
    /// the buffer holds (zeroed at construction). Valid reads therefore
    /// require a prior successful [`ArgBuffer::validate_len`].
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::OutOfBounds`] when the cursor has reached
    /// capacity.
    pub fn read_byte(&mut self) -> Result<u8> {
        if self.cursor >= self.buf.len() {
            return Err(ProtocolError::OutOfBounds {
                cursor: self.cursor,
                capacity: self.buf.len(),
            });
        }
        let byte = self.buf[self.cursor];
        self.cursor += 1;
        Ok(byte)
    }

    /// Read 4 bytes in emission order and decode them as an `i32`.
    pub fn read_i32(&mut self) -> Result<i32> {
        Ok(decode_i32(self.read_raw()?))
    }

    /// Read 4 bytes in emission order and decode them as an `f32`.
    pub fn read_f32(&mut self) -> Result<f32> {
        Ok(decode_f32(self.read_raw()?))
    }

    fn read_raw(&mut self) -> Result<[u8; VALUE_WIDTH]> {
        let mut raw = [0u8; VALUE_WIDTH];
        for byte in &mut raw {
            *byte = self.read_byte()?;
        }
        Ok(raw)
    }

    /// Get the count of bytes accumulated since the last clear or rewind.
    #[inline]
    pub fn len(&self) -> usize {
        self.cursor
    }

    /// Check if the buffer is logically empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cursor == 0
    }

    /// Get the fixed capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }
}

impl Default for ArgBuffer {
    fn default() -> Self {
        Self::new()
    }
}
