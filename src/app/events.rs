//! Outbound application events.
//!
//! The [`AppService`](super::service::AppService) emits these through the
//! [`EventSink`](super::ports::EventSink) port.  Adapters on the other side
//! decide what to do with them — today they go to the serial log.

use crate::drivers::digipot::Direction;
use crate::pins::CHANNEL_COUNT;

/// Structured events emitted by the application core.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// The application service has started.
    Started,

    /// A remote set-point was accepted into the level table.
    SetPointAccepted { channel: u8, level: u8 },

    /// A reconciliation pass drove a channel.
    LevelApplied {
        channel: u8,
        from: u8,
        to: u8,
        direction: Direction,
        steps: u8,
    },

    /// Periodic telemetry snapshot.
    Telemetry(TelemetryData),
}

/// A point-in-time snapshot suitable for logging or transmission.
#[derive(Debug, Clone)]
pub struct TelemetryData {
    pub desired: [u8; CHANNEL_COUNT],
    pub applied: [u8; CHANNEL_COUNT],
    pub tick_count: u64,
    pub uptime_secs: u64,
}
