//! Value codec - byte decomposition for multi-byte values.
//!
//! Values wider than one byte travel as a run of single-byte value packets,
//! so the codec's only job is splitting a 32-bit value into its raw bytes
//! and reassembling them on the far side. The byte order is explicitly
//! little-endian: it is part of the format, not an artifact of the host's
//! memory layout, so encode and decode agree across architectures.
//!
//! All functions are pure and stateless. Float round trips are bit-exact,
//! including NaN and infinity bit patterns.
//!
//! # Example
//!
//! ```
//! use bytewire::protocol::{decode_f32, encode_f32};
//!
//! let bytes = encode_f32(2.45);
//! assert_eq!(decode_f32(bytes), 2.45);
//! ```

/// Width in bytes of every multi-byte value the protocol carries.
pub const VALUE_WIDTH: usize = 4;

/// Decompose a 32-bit signed integer into its 4 bytes, little-endian.
#[inline]
pub fn encode_i32(value: i32) -> [u8; VALUE_WIDTH] {
    value.to_le_bytes()
}

/// Reassemble 4 bytes (in emission order) into a 32-bit signed integer.
#[inline]
pub fn decode_i32(bytes: [u8; VALUE_WIDTH]) -> i32 {
    i32::from_le_bytes(bytes)
}

/// Decompose a 32-bit float into its 4 bytes, little-endian.
#[inline]
pub fn encode_f32(value: f32) -> [u8; VALUE_WIDTH] {
    value.to_le_bytes()
}

/// Reassemble 4 bytes (in emission order) into a 32-bit float.
///
/// The round trip through [`encode_f32`] preserves the exact bit pattern,
/// so NaN payloads and signed zeros survive unchanged.
#[inline]
pub fn decode_f32(bytes: [u8; VALUE_WIDTH]) -> f32 {
    f32::from_le_bytes(bytes)
}
