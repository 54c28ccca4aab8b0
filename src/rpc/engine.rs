//! Set-point engine — drains the transport and dispatches into the service.
//!
//! **Transport-decoupled**: the engine owns a [`FrameTransport`] but knows
//! nothing about WebSockets.  The HTTP server task enqueues raw frames; the
//! control loop calls [`poll`](SetPointEngine::poll), which validates each
//! frame and turns it into an [`AppCommand`].  Invalid frames are counted
//! and dropped — there is no error path back to the sender.

use log::{debug, warn};

use crate::app::commands::AppCommand;
use crate::app::ports::EventSink;
use crate::app::service::AppService;

use super::frame::SetPoint;
use super::transport::{FrameTransport, MAX_FRAME_LEN};

/// Dispatches incoming set-point frames to the [`AppService`].
pub struct SetPointEngine<T: FrameTransport> {
    transport: T,
    dropped_frames: u32,
}

impl<T: FrameTransport> SetPointEngine<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            dropped_frames: 0,
        }
    }

    /// Drain every pending frame, applying valid set-points.
    /// Returns the number of set-points applied.
    pub fn poll(&mut self, app: &mut AppService, sink: &mut impl EventSink) -> usize {
        let mut applied = 0;
        let mut buf = [0u8; MAX_FRAME_LEN];

        loop {
            let frame_len = match self.transport.recv_frame(&mut buf) {
                Ok(Some(n)) => n,
                Ok(None) => break,
                Err(e) => {
                    warn!("set-point transport error: {:?}", e);
                    break;
                }
            };

            match SetPoint::parse(&buf[..frame_len]) {
                Some(sp) => {
                    app.handle_command(
                        AppCommand::SetLevel {
                            channel: sp.channel,
                            level: sp.level,
                        },
                        sink,
                    );
                    applied += 1;
                }
                None => {
                    self.dropped_frames = self.dropped_frames.wrapping_add(1);
                    debug!(
                        "set-point frame dropped ({} bytes, {} total drops)",
                        frame_len, self.dropped_frames
                    );
                }
            }
        }

        applied
    }

    /// Frames discarded since startup (malformed length or channel).
    pub fn dropped_frames(&self) -> u32 {
        self.dropped_frames
    }
}
