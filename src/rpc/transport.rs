//! Transport abstraction — any frame-oriented channel.
//!
//! WebSocket delivers discrete frames, so unlike a byte-stream transport
//! there is no re-framing layer here: a transport hands over whole frames
//! and the engine validates them.
//!
//! Concrete implementations:
//! - [`QueuedTransport`] — bounded queue fed by the HTTP server task
//! - [`NullTransport`] — default when no client is connected

use std::sync::mpsc;

/// Upper bound on a queued frame.  Set-points are two bytes; anything a
/// misbehaving client sends beyond this is dropped at the enqueue side.
pub const MAX_FRAME_LEN: usize = 16;

/// A raw frame as it crosses the task boundary.
pub type RawFrame = heapless::Vec<u8, MAX_FRAME_LEN>;

/// Frame-oriented transport channel.
pub trait FrameTransport {
    /// Error type for this transport.
    type Error: core::fmt::Debug;

    /// Take the next pending frame, copying it into `buf`.
    /// Returns `Ok(None)` if no frame is pending (non-blocking).
    fn recv_frame(&mut self, buf: &mut [u8]) -> Result<Option<usize>, Self::Error>;
}

// ───────────────────────────────────────────────────────────────
// Null transport
// ───────────────────────────────────────────────────────────────

/// A transport that never yields frames.
pub struct NullTransport;

impl FrameTransport for NullTransport {
    type Error = ();

    fn recv_frame(&mut self, _buf: &mut [u8]) -> Result<Option<usize>, ()> {
        Ok(None)
    }
}

// ───────────────────────────────────────────────────────────────
// Queue-backed transport
// ───────────────────────────────────────────────────────────────

/// Producer half handed to the WebSocket handler task.
#[derive(Clone)]
pub struct FrameSender {
    tx: mpsc::SyncSender<RawFrame>,
}

impl FrameSender {
    /// Enqueue one complete frame.  Returns `false` if the frame is too
    /// large or the queue is full — in both cases the frame is dropped,
    /// matching the no-feedback contract of the set-point channel.
    pub fn push(&self, frame: &[u8]) -> bool {
        let Ok(raw) = RawFrame::from_slice(frame) else {
            return false;
        };
        self.tx.try_send(raw).is_ok()
    }
}

/// Consumer half owned by the set-point engine on the control loop.
pub struct QueuedTransport {
    rx: mpsc::Receiver<RawFrame>,
}

impl QueuedTransport {
    /// Create a bounded queue, returning the producer and consumer halves.
    pub fn channel(capacity: usize) -> (FrameSender, Self) {
        let (tx, rx) = mpsc::sync_channel(capacity);
        (FrameSender { tx }, Self { rx })
    }
}

impl FrameTransport for QueuedTransport {
    type Error = ();

    fn recv_frame(&mut self, buf: &mut [u8]) -> Result<Option<usize>, ()> {
        let Ok(frame) = self.rx.try_recv() else {
            return Ok(None);
        };
        let n = frame.len().min(buf.len());
        buf[..n].copy_from_slice(&frame[..n]);
        Ok(Some(n))
    }
}
