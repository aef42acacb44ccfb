//! Protocol module - operation codes, packets, and the value codec.
//!
//! This module defines the in-memory wire format:
//! - Operation codes tagging each packet
//! - The packet record itself (opcode + one payload byte)
//! - Little-endian byte decomposition for 32-bit values

mod opcode;
mod packet;
mod value;

pub use opcode::OpCode;
pub use packet::Packet;
pub use value::{decode_f32, decode_i32, encode_f32, encode_i32, VALUE_WIDTH};
