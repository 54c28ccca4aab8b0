//! Reconciliation pass behavior against a recording mock bus.

use duodim::app::commands::AppCommand;
use duodim::app::service::AppService;
use duodim::config::SystemConfig;
use duodim::drivers::digipot::Direction;
use duodim::CHANNEL_COUNT;

use crate::mock_bus::{CollectingSink, DriveCall, MockBus};

fn make_app() -> (AppService, MockBus, CollectingSink) {
    let config = SystemConfig::default();
    let mut app = AppService::new(&config);
    let bus = MockBus::new();
    let mut sink = CollectingSink::new();
    app.start(&mut sink);
    (app, bus, sink)
}

fn set_level(app: &mut AppService, sink: &mut CollectingSink, channel: u8, level: u8) {
    app.handle_command(AppCommand::SetLevel { channel, level }, sink);
}

// ── The canonical two-channel scenario ───────────────────────

#[test]
fn scenario_two_channels_from_cold_start() {
    let (mut app, mut bus, mut sink) = make_app();

    // [0, 32]: one drive Up by 32.
    set_level(&mut app, &mut sink, 0, 32);
    app.tick(&mut bus, &mut sink);
    assert_eq!(
        bus.calls,
        vec![DriveCall {
            channel: 0,
            direction: Direction::Up,
            steps: 32
        }]
    );
    assert_eq!(app.levels().applied(0), 32);
    assert_eq!(app.levels().applied(1), 0);

    // [0, 10]: one drive Down by 22.
    set_level(&mut app, &mut sink, 0, 10);
    app.tick(&mut bus, &mut sink);
    assert_eq!(
        bus.last_call(),
        Some(&DriveCall {
            channel: 0,
            direction: Direction::Down,
            steps: 22
        })
    );
    assert_eq!(app.levels().applied(0), 10);

    // [1, 5] plus a no-op re-send of [0, 10]: exactly one drive, for
    // channel 1 only.
    bus.calls.clear();
    set_level(&mut app, &mut sink, 1, 5);
    set_level(&mut app, &mut sink, 0, 10);
    app.tick(&mut bus, &mut sink);
    assert_eq!(
        bus.calls,
        vec![DriveCall {
            channel: 1,
            direction: Direction::Up,
            steps: 5
        }]
    );
    assert_eq!(app.levels().applied(0), 10);
    assert_eq!(app.levels().applied(1), 5);
}

// ── Convergence & idempotence ────────────────────────────────

#[test]
fn converges_then_goes_quiet() {
    let (mut app, mut bus, mut sink) = make_app();
    set_level(&mut app, &mut sink, 0, 63);
    app.tick(&mut bus, &mut sink);
    assert_eq!(app.levels().applied(0), 63);

    // Further ticks with no new writes issue no bus traffic.
    let settled = bus.calls.len();
    for _ in 0..10 {
        app.tick(&mut bus, &mut sink);
    }
    assert_eq!(bus.calls.len(), settled);
}

#[test]
fn resending_current_setpoint_is_free() {
    let (mut app, mut bus, mut sink) = make_app();
    set_level(&mut app, &mut sink, 1, 40);
    app.tick(&mut bus, &mut sink);
    let settled = bus.calls.len();

    set_level(&mut app, &mut sink, 1, 40);
    app.tick(&mut bus, &mut sink);
    assert_eq!(bus.calls.len(), settled, "second identical write drove the bus");
}

// ── Direction correctness ────────────────────────────────────

#[test]
fn direction_follows_delta_sign() {
    let (mut app, mut bus, mut sink) = make_app();

    set_level(&mut app, &mut sink, 0, 50);
    app.tick(&mut bus, &mut sink);
    assert_eq!(bus.last_call().unwrap().direction, Direction::Up);

    set_level(&mut app, &mut sink, 0, 49);
    app.tick(&mut bus, &mut sink);
    let last = *bus.last_call().unwrap();
    assert_eq!(last.direction, Direction::Down);
    assert_eq!(last.steps, 1);
}

#[test]
fn full_range_swing_is_one_pass() {
    let (mut app, mut bus, mut sink) = make_app();
    set_level(&mut app, &mut sink, 0, 255);
    app.tick(&mut bus, &mut sink);
    assert_eq!(
        bus.calls,
        vec![DriveCall {
            channel: 0,
            direction: Direction::Up,
            steps: 255
        }]
    );

    set_level(&mut app, &mut sink, 0, 0);
    app.tick(&mut bus, &mut sink);
    assert_eq!(
        bus.last_call(),
        Some(&DriveCall {
            channel: 0,
            direction: Direction::Down,
            steps: 255
        })
    );
}

// ── Step clamping ────────────────────────────────────────────

#[test]
fn clamped_pass_leaves_residual_for_next_tick() {
    let mut config = SystemConfig::default();
    config.max_steps_per_pass = 10;
    let mut app = AppService::new(&config);
    let mut bus = MockBus::new();
    let mut sink = CollectingSink::new();

    set_level(&mut app, &mut sink, 0, 25);

    app.tick(&mut bus, &mut sink);
    assert_eq!(app.levels().applied(0), 10);
    app.tick(&mut bus, &mut sink);
    assert_eq!(app.levels().applied(0), 20);
    app.tick(&mut bus, &mut sink);
    assert_eq!(app.levels().applied(0), 25);

    assert_eq!(
        bus.calls_for(0)
            .iter()
            .map(|c| u32::from(c.steps))
            .collect::<Vec<_>>(),
        vec![10, 10, 5]
    );
    assert!(bus.calls.iter().all(|c| c.direction == Direction::Up));
}

// ── Sequential channel processing ────────────────────────────

#[test]
fn channels_are_processed_in_order_within_one_tick() {
    let (mut app, mut bus, mut sink) = make_app();
    for ch in 0..CHANNEL_COUNT as u8 {
        set_level(&mut app, &mut sink, ch, 8);
    }
    app.tick(&mut bus, &mut sink);

    let channels: Vec<u8> = bus.calls.iter().map(|c| c.channel).collect();
    assert_eq!(channels, (0..CHANNEL_COUNT as u8).collect::<Vec<_>>());
}
