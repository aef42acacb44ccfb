//! Packet struct with typed accessors.
//!
//! A packet is one opcode plus one payload byte. The payload is meaningful
//! only for [`OpCode::Value`]; signal packets carry zero and ignore it.
//!
//! # Example
//!
//! ```
//! use bytewire::protocol::{OpCode, Packet};
//!
//! let value = Packet::value(0xAB);
//! assert!(value.opcode().is_value());
//! assert_eq!(value.payload(), 0xAB);
//!
//! let signal = Packet::signal(OpCode::VoltageRead);
//! assert_eq!(signal.payload(), 0);
//! ```

use super::opcode::OpCode;

/// A single protocol packet: operation code plus one payload byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Packet {
    opcode: OpCode,
    payload: u8,
}

impl Packet {
    /// Create a signal packet with a zero payload.
    #[inline]
    pub fn signal(opcode: OpCode) -> Self {
        Self { opcode, payload: 0 }
    }

    /// Create a value packet carrying one argument byte.
    #[inline]
    pub fn value(payload: u8) -> Self {
        Self {
            opcode: OpCode::Value,
            payload,
        }
    }

    /// Get the operation code.
    #[inline]
    pub fn opcode(self) -> OpCode {
        self.opcode
    }

    /// Get the payload byte.
    #[inline]
    pub fn payload(self) -> u8 {
        self.payload
    }
}
