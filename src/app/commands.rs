//! Inbound commands to the application service.
//!
//! These represent actions requested by the outside world (WebSocket
//! clients today) that the [`AppService`](super::service::AppService)
//! interprets and acts upon.

/// Commands that external adapters can send into the application core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    /// Update the desired level for one dimmer channel.
    /// The level is taken as-is; range limiting is the UI's concern.
    SetLevel { channel: u8, level: u8 },
}
