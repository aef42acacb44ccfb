//! # bytewire
//!
//! Byte-oriented packet protocol engine: 32-bit values are split into
//! single-byte value packets, queued into an outbound batch, and on the
//! receiving side reassembled byte-by-byte into typed values before being
//! dispatched to an operation handler.
//!
//! ## Architecture
//!
//! - **Encoder** ([`Session`] `enqueue_*` methods): wraps bytes and the
//!   little-endian decomposition of 32-bit values into packets on the
//!   fixed-capacity packet queue.
//! - **Dispatcher** ([`Session::send`]): consumes the queue in enqueue
//!   order, accumulating value bytes in the argument buffer and triggering
//!   interpretation on non-value opcodes, with size validation first.
//!
//! There is no transport and no framing: the "wire" is the in-memory
//! packet queue, and a send hands packets straight to the decode step. All
//! error conditions are non-fatal; the engine drops, diagnoses via
//! `tracing`, and keeps processing.
//!
//! ## Example
//!
//! ```
//! use bytewire::handler::{CollectHandler, Reading};
//! use bytewire::protocol::OpCode;
//! use bytewire::Session;
//!
//! let mut session = Session::new();
//!
//! // 4 value packets carrying the float's bytes, then the trigger.
//! session.enqueue_f32(2.45).unwrap();
//! session.enqueue_signal(OpCode::VoltageRead).unwrap();
//!
//! let mut handler = CollectHandler::new();
//! let report = session.send(&mut handler);
//!
//! assert_eq!(report.packets, 5);
//! assert_eq!(handler.readings(), &[Reading::Voltage(2.45)]);
//! ```

pub mod engine;
pub mod error;
pub mod handler;
pub mod protocol;

mod session;

pub use error::{ProtocolError, Result};
pub use session::{DispatchReport, Session, SessionConfig};
