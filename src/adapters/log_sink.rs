//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the ESP-IDF logger (UART / USB-CDC in production, stdout in simulation).

use log::info;

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started => {
                info!("START | dimmer service up");
            }
            AppEvent::SetPointAccepted { channel, level } => {
                info!("SETPT | ch{} -> {}", channel, level);
            }
            AppEvent::LevelApplied {
                channel,
                from,
                to,
                direction,
                steps,
            } => {
                info!(
                    "DRIVE | ch{} {} -> {} ({:?}, {} steps)",
                    channel, from, to, direction, steps
                );
            }
            AppEvent::Telemetry(t) => {
                info!(
                    "TELEM | desired={:?} applied={:?} | ticks={} | up={}s",
                    t.desired, t.applied, t.tick_count, t.uptime_secs,
                );
            }
        }
    }
}
