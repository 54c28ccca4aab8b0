//! End-to-end flow: raw frames through the queued transport and engine
//! into the reconciliation service.

use duodim::app::events::AppEvent;
use duodim::app::service::AppService;
use duodim::config::SystemConfig;
use duodim::rpc::engine::SetPointEngine;
use duodim::rpc::transport::QueuedTransport;
use duodim::CHANNEL_COUNT;

use crate::mock_bus::{CollectingSink, MockBus};

#[test]
fn frames_flow_from_queue_to_applied_levels() {
    let (tx, rx) = QueuedTransport::channel(8);
    let mut engine = SetPointEngine::new(rx);
    let mut app = AppService::new(&SystemConfig::default());
    let mut bus = MockBus::new();
    let mut sink = CollectingSink::new();

    // What the WebSocket handler would enqueue for two slider drags.
    tx.push(&[0, 32]);
    tx.push(&[1, 5]);

    assert_eq!(engine.poll(&mut app, &mut sink), 2);
    app.tick(&mut bus, &mut sink);

    assert_eq!(app.levels().applied(0), 32);
    assert_eq!(app.levels().applied(1), 5);
    assert_eq!(bus.calls.len(), 2);
}

#[test]
fn out_of_range_channel_changes_nothing() {
    let (tx, rx) = QueuedTransport::channel(8);
    let mut engine = SetPointEngine::new(rx);
    let mut app = AppService::new(&SystemConfig::default());
    let mut bus = MockBus::new();
    let mut sink = CollectingSink::new();

    tx.push(&[CHANNEL_COUNT as u8, 63]);
    tx.push(&[200, 63]);

    assert_eq!(engine.poll(&mut app, &mut sink), 0);
    assert_eq!(engine.dropped_frames(), 2);

    app.tick(&mut bus, &mut sink);
    assert!(bus.calls.is_empty());
    for ch in 0..CHANNEL_COUNT {
        assert_eq!(app.levels().desired(ch), 0);
    }
}

#[test]
fn malformed_lengths_are_dropped() {
    let (tx, rx) = QueuedTransport::channel(8);
    let mut engine = SetPointEngine::new(rx);
    let mut app = AppService::new(&SystemConfig::default());
    let mut sink = CollectingSink::new();

    tx.push(&[]);
    tx.push(&[0]);
    tx.push(&[0, 1, 2]);

    assert_eq!(engine.poll(&mut app, &mut sink), 0);
    assert_eq!(engine.dropped_frames(), 3);
}

#[test]
fn last_write_wins_between_ticks() {
    let (tx, rx) = QueuedTransport::channel(8);
    let mut engine = SetPointEngine::new(rx);
    let mut app = AppService::new(&SystemConfig::default());
    let mut bus = MockBus::new();
    let mut sink = CollectingSink::new();

    // A fast slider drag bursts several frames before the next tick.
    for level in [10, 20, 30, 44] {
        tx.push(&[0, level]);
    }
    engine.poll(&mut app, &mut sink);
    app.tick(&mut bus, &mut sink);

    // Only the final set-point is driven; intermediate ones never touch
    // the bus.
    assert_eq!(bus.calls.len(), 1);
    assert_eq!(bus.calls[0].steps, 44);
    assert_eq!(app.levels().applied(0), 44);
}

#[test]
fn accepted_setpoints_emit_events() {
    let (tx, rx) = QueuedTransport::channel(8);
    let mut engine = SetPointEngine::new(rx);
    let mut app = AppService::new(&SystemConfig::default());
    let mut sink = CollectingSink::new();

    tx.push(&[1, 7]);
    engine.poll(&mut app, &mut sink);

    assert!(sink.events.iter().any(|e| matches!(
        e,
        AppEvent::SetPointAccepted {
            channel: 1,
            level: 7
        }
    )));
}
