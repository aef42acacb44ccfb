//! Operation codes - the tag identifying what a packet means.
//!
//! `Value` marks a packet whose payload byte is one argument byte of a
//! larger value being reassembled. Every other code is a signal: it carries
//! no payload of its own and instead triggers interpretation of the bytes
//! accumulated so far. Each trigger code has an associated expected
//! argument byte count and result type.

use super::value::VALUE_WIDTH;

/// Closed enumeration of packet operation codes.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpCode {
    /// Unused placeholder; computing it is a no-op.
    Null = 0,
    /// Payload byte is an argument to be buffered.
    Value = 1,
    /// Interpret 4 buffered bytes as a 32-bit float voltage reading.
    VoltageRead = 2,
    /// Interpret 4 buffered bytes as a 32-bit signed device ID.
    IdGet = 3,
}

impl OpCode {
    /// Convert a raw byte into an opcode.
    ///
    /// Returns `None` for bytes outside the closed enumeration.
    #[inline]
    pub fn from_u8(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::Null),
            1 => Some(Self::Value),
            2 => Some(Self::VoltageRead),
            3 => Some(Self::IdGet),
            _ => None,
        }
    }

    /// Whether this packet carries one argument byte of a larger value.
    #[inline]
    pub fn is_value(self) -> bool {
        self == Self::Value
    }

    /// Expected argument byte count for trigger codes.
    ///
    /// `None` for `Value` and `Null`, which do not interpret the buffer.
    #[inline]
    pub fn arg_len(self) -> Option<usize> {
        match self {
            Self::VoltageRead | Self::IdGet => Some(VALUE_WIDTH),
            Self::Null | Self::Value => None,
        }
    }
}
