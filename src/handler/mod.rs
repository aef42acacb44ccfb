//! Operation handlers - the dispatcher's output seam.
//!
//! The engine itself never prints or formats anything; decoded values are
//! handed to an [`OperationHandler`]. Two implementations are provided:
//! [`LogHandler`] emits readings as `tracing` events, [`CollectHandler`]
//! records them for inspection (the form most tests want).
//!
//! # Example
//!
//! ```
//! use bytewire::handler::{CollectHandler, OperationHandler, Reading};
//!
//! let mut handler = CollectHandler::new();
//! handler.on_id_get(689);
//! assert_eq!(handler.readings(), &[Reading::Id(689)]);
//! ```

/// Receiver for values decoded by the dispatcher.
///
/// One method per trigger opcode. Implementations must not assume any
/// particular call order beyond the enqueue order of the batch.
pub trait OperationHandler {
    /// A `VoltageRead` operation decoded 4 buffered bytes as a float.
    fn on_voltage_read(&mut self, volts: f32);

    /// An `IdGet` operation decoded 4 buffered bytes as a signed integer.
    fn on_id_get(&mut self, id: i32);
}

/// A value decoded from a packet batch, tagged with its kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reading {
    /// Voltage reading in volts.
    Voltage(f32),
    /// Device identifier.
    Id(i32),
}

/// Handler that emits each decoded value as a `tracing` event.
///
/// Voltages are formatted to two decimal places.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogHandler;

impl OperationHandler for LogHandler {
    fn on_voltage_read(&mut self, volts: f32) {
        tracing::info!("voltage read: {:.2}", volts);
    }

    fn on_id_get(&mut self, id: i32) {
        tracing::info!("id get: {}", id);
    }
}

/// Handler that records decoded values in order.
#[derive(Debug, Default)]
pub struct CollectHandler {
    readings: Vec<Reading>,
}

impl CollectHandler {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the readings collected so far, in dispatch order.
    pub fn readings(&self) -> &[Reading] {
        &self.readings
    }

    /// Consume the collector, returning its readings.
    pub fn into_readings(self) -> Vec<Reading> {
        self.readings
    }
}

impl OperationHandler for CollectHandler {
    fn on_voltage_read(&mut self, volts: f32) {
        self.readings.push(Reading::Voltage(volts));
    }

    fn on_id_get(&mut self, id: i32) {
        self.readings.push(Reading::Id(id));
    }
}
