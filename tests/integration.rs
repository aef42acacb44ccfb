//! Integration tests for bytewire.
//!
//! These tests drive full encode → queue → send → decode cycles through
//! the public API.

use bytewire::handler::{CollectHandler, LogHandler, Reading};
use bytewire::protocol::OpCode;
use bytewire::{ProtocolError, Session, SessionConfig};

/// Two voltage reads in one batch: encode, send, decode.
#[test]
fn test_voltage_read_batch() {
    let mut session = Session::new();

    session.enqueue_f32(2.45).unwrap();
    session.enqueue_signal(OpCode::VoltageRead).unwrap();
    session.enqueue_f32(24.53).unwrap();
    session.enqueue_signal(OpCode::VoltageRead).unwrap();

    // 2 values x (4 value packets + 1 trigger)
    assert_eq!(session.queued_packets(), 10);

    let mut handler = CollectHandler::new();
    let report = session.send(&mut handler);

    assert_eq!(report.packets, 10);
    assert_eq!(report.values_emitted, 2);
    assert_eq!(report.errors, 0);
    assert_eq!(
        handler.readings(),
        &[Reading::Voltage(2.45), Reading::Voltage(24.53)]
    );
    assert_eq!(session.queued_packets(), 0);
}

/// Integer id read: encode, send, decode.
#[test]
fn test_id_get_batch() {
    let mut session = Session::new();

    session.enqueue_i32(689).unwrap();
    session.enqueue_signal(OpCode::IdGet).unwrap();

    let mut handler = CollectHandler::new();
    let report = session.send(&mut handler);

    assert_eq!(report.packets, 5);
    assert_eq!(report.values_emitted, 1);
    assert_eq!(handler.readings(), &[Reading::Id(689)]);
    assert_eq!(session.queued_packets(), 0);
}

/// Mixed batch: a float read followed by an id read in the same send.
#[test]
fn test_mixed_batch_in_one_send() {
    let mut session = Session::new();

    session.enqueue_f32(-0.5).unwrap();
    session.enqueue_signal(OpCode::VoltageRead).unwrap();
    session.enqueue_i32(i32::MIN).unwrap();
    session.enqueue_signal(OpCode::IdGet).unwrap();

    let mut handler = CollectHandler::new();
    session.send(&mut handler);

    assert_eq!(
        handler.readings(),
        &[Reading::Voltage(-0.5), Reading::Id(i32::MIN)]
    );
}

/// Interleaving two values' bytes before a trigger corrupts the
/// accumulation; size validation catches it and no value is produced.
#[test]
fn test_interleaved_values_detected_by_size_validation() {
    let mut session = Session::new();

    // 8 bytes accumulate before the first trigger.
    session.enqueue_f32(2.45).unwrap();
    session.enqueue_i32(689).unwrap();
    session.enqueue_signal(OpCode::VoltageRead).unwrap();
    // Buffer was cleared by the failed trigger; this one has 0 bytes.
    session.enqueue_signal(OpCode::IdGet).unwrap();

    let mut handler = CollectHandler::new();
    let report = session.send(&mut handler);

    assert!(handler.readings().is_empty());
    assert_eq!(report.values_emitted, 0);
    assert_eq!(report.errors, 2); // too many, then too few
}

/// Packets are computed in strict enqueue order.
#[test]
fn test_dispatch_order_matches_enqueue_order() {
    let mut session = Session::new();

    session.enqueue_i32(1).unwrap();
    session.enqueue_signal(OpCode::IdGet).unwrap();
    session.enqueue_i32(2).unwrap();
    session.enqueue_signal(OpCode::IdGet).unwrap();
    session.enqueue_i32(3).unwrap();
    session.enqueue_signal(OpCode::IdGet).unwrap();

    let mut handler = CollectHandler::new();
    session.send(&mut handler);

    assert_eq!(
        handler.readings(),
        &[Reading::Id(1), Reading::Id(2), Reading::Id(3)]
    );
}

/// A batch survives one send untouched by the next: state never leaks
/// between sends or between sessions.
#[test]
fn test_sessions_are_independent() {
    let mut a = Session::new();
    let mut b = Session::new();

    a.enqueue_i32(1).unwrap();
    b.enqueue_i32(2).unwrap();
    a.enqueue_signal(OpCode::IdGet).unwrap();
    b.enqueue_signal(OpCode::IdGet).unwrap();

    let mut handler_a = CollectHandler::new();
    let mut handler_b = CollectHandler::new();
    a.send(&mut handler_a);
    b.send(&mut handler_b);

    assert_eq!(handler_a.readings(), &[Reading::Id(1)]);
    assert_eq!(handler_b.readings(), &[Reading::Id(2)]);
}

/// Filling the queue to capacity is fine; one more packet is dropped and
/// the batch still dispatches what was accepted.
#[test]
fn test_queue_overflow_drops_excess_then_dispatches() {
    let mut session = Session::with_config(SessionConfig {
        arg_capacity: 64,
        queue_capacity: 5,
    });

    session.enqueue_i32(689).unwrap();
    session.enqueue_signal(OpCode::IdGet).unwrap();

    // Queue is full now; this value byte is dropped.
    assert_eq!(
        session.enqueue_value(0xFF),
        Err(ProtocolError::QueueOverflow { capacity: 5 })
    );
    assert_eq!(session.queued_packets(), 5);

    let mut handler = CollectHandler::new();
    let report = session.send(&mut handler);

    assert_eq!(report.values_emitted, 1);
    assert_eq!(handler.readings(), &[Reading::Id(689)]);
}

/// NaN bit patterns survive the full packet round trip.
#[test]
fn test_nan_survives_full_round_trip() {
    let nan = f32::from_bits(0x7FC0_0123);

    let mut session = Session::new();
    session.enqueue_f32(nan).unwrap();
    session.enqueue_signal(OpCode::VoltageRead).unwrap();

    let mut handler = CollectHandler::new();
    session.send(&mut handler);

    match handler.readings() {
        [Reading::Voltage(v)] => assert_eq!(v.to_bits(), nan.to_bits()),
        other => panic!("expected one voltage reading, got {:?}", other),
    }
}

/// The logging handler works end to end with a subscriber installed.
#[test]
fn test_log_handler_batch() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("bytewire=debug")
        .with_test_writer()
        .try_init();

    let mut session = Session::new();
    session.enqueue_f32(2.45).unwrap();
    session.enqueue_signal(OpCode::VoltageRead).unwrap();
    session.enqueue_i32(689).unwrap();
    session.enqueue_signal(OpCode::IdGet).unwrap();

    let report = session.send(&mut LogHandler);

    assert_eq!(report.values_emitted, 2);
    assert_eq!(report.errors, 0);
}

/// An empty send is a no-op.
#[test]
fn test_empty_send() {
    let mut session = Session::new();
    let report = session.send(&mut CollectHandler::new());

    assert_eq!(report.packets, 0);
    assert_eq!(report.values_emitted, 0);
    assert_eq!(report.errors, 0);
}
