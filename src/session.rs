//! Session - encoder entry points and the send/compute dispatcher.
//!
//! A [`Session`] owns one argument buffer and one packet queue, so multiple
//! independent sessions can coexist without shared state. The caller builds
//! a batch with the `enqueue_*` methods, then [`Session::send`] processes
//! every packet in strict enqueue order and empties the queue.
//!
//! There is no transport: "sending" hands each packet directly to the
//! decode step, which accumulates value bytes and dispatches trigger
//! opcodes to the supplied [`OperationHandler`].

use tracing::{debug, trace, warn};

use crate::engine::{ArgBuffer, PacketQueue, DEFAULT_ARG_CAPACITY, DEFAULT_QUEUE_CAPACITY};
use crate::error::Result;
use crate::handler::OperationHandler;
use crate::protocol::{encode_f32, encode_i32, OpCode, Packet, VALUE_WIDTH};

/// Buffer capacities for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Argument buffer capacity in bytes (default 64).
    pub arg_capacity: usize,
    /// Packet queue capacity in packets (default 1024).
    pub queue_capacity: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            arg_capacity: DEFAULT_ARG_CAPACITY,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
        }
    }
}

/// Outcome summary of one [`Session::send`].
///
/// A send never fails as a whole; per-packet failures are diagnosed,
/// counted here, and skipped.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DispatchReport {
    /// Packets processed (the batch size).
    pub packets: usize,
    /// Values successfully decoded and handed to the handler.
    pub values_emitted: usize,
    /// Non-fatal errors encountered (overflow, size mismatch, bad read).
    pub errors: usize,
}

/// A packet protocol session: outbound encoder plus inbound dispatcher.
///
/// # Example
///
/// ```
/// use bytewire::handler::{CollectHandler, Reading};
/// use bytewire::protocol::OpCode;
/// use bytewire::Session;
///
/// let mut session = Session::new();
/// session.enqueue_f32(2.45).unwrap();
/// session.enqueue_signal(OpCode::VoltageRead).unwrap();
///
/// let mut handler = CollectHandler::new();
/// let report = session.send(&mut handler);
///
/// assert_eq!(report.values_emitted, 1);
/// assert_eq!(handler.readings(), &[Reading::Voltage(2.45)]);
/// ```
#[derive(Debug, Default)]
pub struct Session {
    args: ArgBuffer,
    queue: PacketQueue,
}

impl Session {
    /// Create a session with default capacities (64-byte argument buffer,
    /// 1024-packet queue).
    pub fn new() -> Self {
        Self::with_config(SessionConfig::default())
    }

    /// Create a session with custom buffer capacities.
    pub fn with_config(config: SessionConfig) -> Self {
        Self {
            args: ArgBuffer::with_capacity(config.arg_capacity),
            queue: PacketQueue::with_capacity(config.queue_capacity),
        }
    }

    /// Enqueue a signal packet (zero payload) for the given opcode.
    pub fn enqueue_signal(&mut self, opcode: OpCode) -> Result<()> {
        self.queue.push(Packet::signal(opcode))
    }

    /// Enqueue a single value packet carrying one argument byte.
    pub fn enqueue_value(&mut self, byte: u8) -> Result<()> {
        self.queue.push(Packet::value(byte))
    }

    /// Enqueue one value packet per byte, in slice order.
    ///
    /// Stops at the first queue overflow; bytes already enqueued stay in
    /// the batch.
    pub fn enqueue_value_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        for &byte in bytes {
            self.enqueue_value(byte)?;
        }
        Ok(())
    }

    /// Enqueue a 32-bit signed integer as 4 consecutive value packets.
    pub fn enqueue_i32(&mut self, value: i32) -> Result<()> {
        self.enqueue_value_bytes(&encode_i32(value))
    }

    /// Enqueue a 32-bit float as 4 consecutive value packets.
    pub fn enqueue_f32(&mut self, value: f32) -> Result<()> {
        self.enqueue_value_bytes(&encode_f32(value))
    }

    /// Get the number of packets currently queued.
    #[inline]
    pub fn queued_packets(&self) -> usize {
        self.queue.len()
    }

    /// Get the number of argument bytes currently buffered.
    #[inline]
    pub fn buffered_args(&self) -> usize {
        self.args.len()
    }

    /// Process every queued packet in enqueue order, then empty the queue.
    ///
    /// Per-packet failures (buffer overflow, size mismatch) are emitted as
    /// `tracing` diagnostics and counted in the report; they never abort
    /// the batch.
    pub fn send<H: OperationHandler>(&mut self, handler: &mut H) -> DispatchReport {
        let batch = self.queue.take_batch();
        debug!(packets = batch.len(), "sending packet batch");

        let mut report = DispatchReport {
            packets: batch.len(),
            ..DispatchReport::default()
        };

        for (index, packet) in batch.into_iter().enumerate() {
            trace!(
                index,
                opcode = ?packet.opcode(),
                payload = packet.payload(),
                "computing packet"
            );
            self.compute(packet, handler, &mut report);
        }

        report
    }

    /// Process a single packet against the argument buffer.
    ///
    /// Value packets accumulate; trigger packets validate the accumulated
    /// count, decode on success, and always leave the buffer empty so no
    /// stale bytes leak into the next operation.
    fn compute<H: OperationHandler>(
        &mut self,
        packet: Packet,
        handler: &mut H,
        report: &mut DispatchReport,
    ) {
        match packet.opcode() {
            OpCode::Value => {
                if let Err(err) = self.args.push(packet.payload()) {
                    warn!(%err, "argument byte dropped");
                    report.errors += 1;
                }
            }

            OpCode::VoltageRead => {
                match self
                    .args
                    .validate_len(VALUE_WIDTH)
                    .and_then(|()| self.args.read_f32())
                {
                    Ok(volts) => {
                        handler.on_voltage_read(volts);
                        report.values_emitted += 1;
                    }
                    Err(err) => {
                        warn!(%err, "voltage read discarded");
                        report.errors += 1;
                    }
                }
            }

            OpCode::IdGet => {
                match self
                    .args
                    .validate_len(VALUE_WIDTH)
                    .and_then(|()| self.args.read_i32())
                {
                    Ok(id) => {
                        handler.on_id_get(id);
                        report.values_emitted += 1;
                    }
                    Err(err) => {
                        warn!(%err, "id get discarded");
                        report.errors += 1;
                    }
                }
            }

            OpCode::Null => {}
        }

        // Any non-value opcode consumes the accumulation, pass or fail.
        if !packet.opcode().is_value() {
            self.args.clear();
        }
    }
}
