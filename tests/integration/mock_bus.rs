//! Mock bus adapter for integration tests.
//!
//! Records every drive call so tests can assert on the full command
//! history without touching real GPIO.

use duodim::app::events::AppEvent;
use duodim::app::ports::{EventSink, WiperBusPort};
use duodim::drivers::digipot::Direction;

// ── Drive call record ─────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriveCall {
    pub channel: u8,
    pub direction: Direction,
    pub steps: u8,
}

// ── MockBus ───────────────────────────────────────────────────

pub struct MockBus {
    pub calls: Vec<DriveCall>,
}

#[allow(dead_code)]
impl MockBus {
    pub fn new() -> Self {
        Self { calls: Vec::new() }
    }

    pub fn last_call(&self) -> Option<&DriveCall> {
        self.calls.last()
    }

    /// Drive calls issued for one channel, in order.
    pub fn calls_for(&self, channel: u8) -> Vec<DriveCall> {
        self.calls
            .iter()
            .copied()
            .filter(|c| c.channel == channel)
            .collect()
    }

    /// Total steps pulsed for one channel, regardless of direction.
    pub fn total_steps_for(&self, channel: u8) -> u32 {
        self.calls_for(channel)
            .iter()
            .map(|c| u32::from(c.steps))
            .sum()
    }
}

impl Default for MockBus {
    fn default() -> Self {
        Self::new()
    }
}

impl WiperBusPort for MockBus {
    fn drive(&mut self, channel: u8, direction: Direction, steps: u8) {
        self.calls.push(DriveCall {
            channel,
            direction,
            steps,
        });
    }
}

// ── Event sink ────────────────────────────────────────────────

pub struct CollectingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl CollectingSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }
}

impl Default for CollectingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for CollectingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}
