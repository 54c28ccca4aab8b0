//! Set-point wire format.
//!
//! A set-point is exactly two raw bytes:
//!
//! ```text
//! ┌────────────┬───────────┐
//! │ channel (1)│ level (1) │
//! └────────────┴───────────┘
//! ```
//!
//! Anything else — wrong length, out-of-range channel — is silently
//! discarded.  There is no response channel back to the sender; a client
//! that sends garbage simply sees nothing happen.

use crate::pins::CHANNEL_COUNT;

/// Exact length of a set-point frame.
pub const SET_POINT_FRAME_LEN: usize = 2;

/// A validated `[channel, level]` set-point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetPoint {
    pub channel: u8,
    pub level: u8,
}

impl SetPoint {
    /// Parse a raw frame.  Returns `None` for any frame that must be
    /// dropped: wrong length, or a channel beyond the fixed array.
    /// The level is not range-checked — that is the UI's concern.
    pub fn parse(frame: &[u8]) -> Option<Self> {
        let [channel, level] = <[u8; SET_POINT_FRAME_LEN]>::try_from(frame).ok()?;
        if (channel as usize) >= CHANNEL_COUNT {
            return None;
        }
        Some(Self { channel, level })
    }

    /// Wire encoding of this set-point.
    pub fn encode(&self) -> [u8; SET_POINT_FRAME_LEN] {
        [self.channel, self.level]
    }
}
