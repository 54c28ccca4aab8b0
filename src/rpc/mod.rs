//! Remote set-point channel: wire format, transport seam, dispatch engine.
//!
//! ```text
//!  WS handler task ─▶ FrameSender ─▶ QueuedTransport ─▶ SetPointEngine ─▶ AppService
//! ```

pub mod engine;
pub mod frame;
pub mod transport;
