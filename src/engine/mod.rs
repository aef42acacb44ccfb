//! Engine module - fixed-capacity buffers backing the codec engine.
//!
//! - [`ArgBuffer`] accumulates one operation's argument bytes during decode
//! - [`PacketQueue`] holds the outbound batch awaiting dispatch

mod arg_buffer;
mod queue;

pub use arg_buffer::{ArgBuffer, DEFAULT_ARG_CAPACITY};
pub use queue::{PacketQueue, DEFAULT_QUEUE_CAPACITY};
