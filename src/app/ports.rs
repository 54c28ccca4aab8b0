//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ AppService (domain)
//! ```
//!
//! Driven adapters (the digipot bus, event sinks) implement these traits.
//! The [`AppService`](super::service::AppService) consumes them via
//! generics, so the reconciliation logic never touches hardware directly and
//! host tests substitute recording mocks.

use crate::drivers::digipot::Direction;

use super::events::AppEvent;

// ───────────────────────────────────────────────────────────────
// Wiper bus port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the reconciliation pass commands wiper movements
/// through this.
///
/// Implementations are synchronous and blocking for the full pulse
/// sequence, and infallible — the bus is open-loop, a pulse once issued is
/// assumed delivered.
pub trait WiperBusPort {
    /// Move `channel` by `steps` discrete units in `direction`.
    fn drive(&mut self, channel: u8, direction: Direction, steps: u8);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`]s through this port.  Adapters
/// decide where they go (serial log today; anything else tomorrow).
pub trait EventSink {
    fn emit(&mut self, event: &AppEvent);
}
