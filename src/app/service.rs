//! Application service — the hexagonal core.
//!
//! [`AppService`] owns the [`LevelTable`] and runs the reconciliation pass
//! that converges applied wiper positions onto the remotely requested
//! set-points.  All I/O flows through port traits injected at call sites,
//! making the whole service testable with mock adapters.
//!
//! ```text
//!  AppCommand ──▶ ┌────────────────────────┐ ──▶ EventSink
//!                 │      AppService         │
//!  WiperBusPort ◀─│  LevelTable · reconcile │
//!                 └────────────────────────┘
//! ```

use log::{debug, info};

use crate::config::SystemConfig;
use crate::drivers::digipot::Direction;
use crate::pins::CHANNEL_COUNT;

use super::commands::AppCommand;
use super::events::{AppEvent, TelemetryData};
use super::levels::LevelTable;
use super::ports::{EventSink, WiperBusPort};

// ───────────────────────────────────────────────────────────────
// AppService
// ───────────────────────────────────────────────────────────────

/// The application service orchestrates all domain logic.
pub struct AppService {
    levels: LevelTable,
    /// Cap on the step count of a single drive call.  A larger divergence
    /// leaves a residual delta that the next tick picks up.
    max_steps_per_pass: u8,
    tick_count: u64,
}

impl AppService {
    /// Construct the service from configuration.
    pub fn new(config: &SystemConfig) -> Self {
        Self {
            levels: LevelTable::new(),
            max_steps_per_pass: config.max_steps_per_pass,
            tick_count: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    pub fn start(&mut self, sink: &mut impl EventSink) {
        sink.emit(&AppEvent::Started);
        info!("AppService started ({} channels)", CHANNEL_COUNT);
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Run one reconciliation pass over all channels.
    ///
    /// Channels are processed strictly sequentially: the bus is shared and
    /// only one chip may be selected at a time, so one channel's full drive
    /// sequence completes before the next is considered.  A channel whose
    /// applied level already matches its set-point produces no bus traffic
    /// at all.
    pub fn tick(&mut self, bus: &mut impl WiperBusPort, sink: &mut impl EventSink) {
        self.tick_count += 1;

        for channel in 0..CHANNEL_COUNT {
            let delta = self.levels.delta(channel);
            if delta == 0 {
                continue;
            }

            // Positive delta: the wiper sits above the set-point.
            let direction = if delta > 0 {
                Direction::Down
            } else {
                Direction::Up
            };
            let magnitude = delta.unsigned_abs();
            let steps = magnitude.min(u16::from(self.max_steps_per_pass)) as u8;

            bus.drive(channel as u8, direction, steps);

            let from = self.levels.applied(channel);
            let to = match direction {
                Direction::Up => from + steps,
                Direction::Down => from - steps,
            };
            self.levels.mark_applied(channel, to);

            sink.emit(&AppEvent::LevelApplied {
                channel: channel as u8,
                from,
                to,
                direction,
                steps,
            });
        }
    }

    // ── Command handling ──────────────────────────────────────

    /// Process an external command (from the set-point engine).
    pub fn handle_command(&mut self, cmd: AppCommand, sink: &mut impl EventSink) {
        match cmd {
            AppCommand::SetLevel { channel, level } => {
                if self.levels.set_desired(channel, level) {
                    sink.emit(&AppEvent::SetPointAccepted { channel, level });
                } else {
                    // Out-of-range channel: dropped, never surfaced to the
                    // sender.
                    debug!("set-point for unknown channel {} dropped", channel);
                }
            }
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Build a telemetry snapshot from the current state.
    pub fn build_telemetry(&self, uptime_secs: u64) -> TelemetryData {
        let (desired, applied) = self.levels.snapshot();
        TelemetryData {
            desired,
            applied,
            tick_count: self.tick_count,
            uptime_secs,
        }
    }

    /// Read access to the level table (tests, telemetry).
    pub fn levels(&self) -> &LevelTable {
        &self.levels
    }

    /// Total reconciliation ticks executed since startup.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}
