//! Error types for bytewire.

use thiserror::Error;

/// Main error type for all engine operations.
///
/// Every condition here is non-fatal: the offending byte or packet is
/// dropped and processing continues. The dispatcher recovers locally and
/// emits a diagnostic; callers of the encoder entry points receive these
/// as explicit results and may choose to escalate.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ProtocolError {
    /// Argument buffer is at capacity; the byte was dropped.
    #[error("argument buffer overflow (capacity {capacity})")]
    BufferOverflow {
        /// Fixed capacity of the argument buffer.
        capacity: usize,
    },

    /// Packet queue is at capacity; the packet was dropped.
    #[error("packet queue overflow (capacity {capacity})")]
    QueueOverflow {
        /// Fixed capacity of the packet queue.
        capacity: usize,
    },

    /// Read cursor ran past the end of the argument buffer.
    #[error("read cursor {cursor} out of bounds (capacity {capacity})")]
    OutOfBounds {
        /// Cursor position at the time of the failed read.
        cursor: usize,
        /// Fixed capacity of the argument buffer.
        capacity: usize,
    },

    /// Fewer argument bytes were accumulated than the operation expects.
    #[error("too few arguments: expected {expected}, got {actual}")]
    TooFewArguments {
        /// Byte count the operation requires.
        expected: usize,
        /// Byte count actually accumulated.
        actual: usize,
    },

    /// More argument bytes were accumulated than the operation expects.
    #[error("too many arguments: expected {expected}, got {actual}")]
    TooManyArguments {
        /// Byte count the operation requires.
        expected: usize,
        /// Byte count actually accumulated.
        actual: usize,
    },
}

/// Result type alias using ProtocolError.
pub type Result<T> = std::result::Result<T, ProtocolError>;
