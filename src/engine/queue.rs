//! Packet queue - the ordered outbound batch awaiting dispatch.
//!
//! The queue is built up by the encoder entry points across one or more
//! logical values, then consumed and emptied atomically by a single send.
//! Capacity is fixed: enqueueing past it drops the packet and reports
//! [`ProtocolError::QueueOverflow`], it never grows or overwrites.

use crate::error::{ProtocolError, Result};
use crate::protocol::Packet;

/// Default packet queue capacity.
pub const DEFAULT_QUEUE_CAPACITY: usize = 1024;

/// Fixed-capacity ordered sequence of packets.
#[derive(Debug)]
pub struct PacketQueue {
    packets: Vec<Packet>,
    capacity: usize,
}

impl PacketQueue {
    /// Create a queue with the default capacity (1024 packets).
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_QUEUE_CAPACITY)
    }

    /// Create a queue with a custom fixed capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            packets: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Remove all queued packets.
    #[inline]
    pub fn clear(&mut self) {
        self.packets.clear();
    }

    /// Append a packet to the batch.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::QueueOverflow`] when the queue is at
    /// capacity; the packet is dropped.
    pub fn push(&mut self, packet: Packet) -> Result<()> {
        if self.packets.len() >= self.capacity {
            return Err(ProtocolError::QueueOverflow {
                capacity: self.capacity,
            });
        }
        self.packets.push(packet);
        Ok(())
    }

    /// Take the whole batch out, leaving the queue empty.
    ///
    /// The dispatcher uses this to consume and reset the queue in one
    /// step, so a batch is never processed twice.
    pub fn take_batch(&mut self) -> Vec<Packet> {
        std::mem::replace(&mut self.packets, Vec::with_capacity(self.capacity))
    }

    /// Iterate the queued packets in enqueue order.
    pub fn iter(&self) -> impl Iterator<Item = &Packet> {
        self.packets.iter()
    }

    /// Get the number of queued packets.
    #[inline]
    pub fn len(&self) -> usize {
        self.packets.len()
    }

    /// Check if the queue is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.packets.is_empty()
    }

    /// Get the fixed capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for PacketQueue {
    fn default() -> Self {
        Self::new()
    }
}
