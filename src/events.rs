//! Event queue between the network task and the control loop.
//!
//! The HTTP server invokes its handlers on its own task, so WebSocket
//! activity reaches the control loop through this queue: the handler is
//! the single producer, the loop the single consumer.  The loop's own
//! pacing (reconciliation tick, telemetry cadence) is driven inline and
//! never goes through the queue — that keeps it strictly SPSC.
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ HTTP/WS task │────▶│  Event Queue │────▶│ Control Loop │
//! │  (producer)  │     │  (lock-free) │     │  (consumer)  │
//! └──────────────┘     └──────────────┘     └──────────────┘
//! ```

use core::sync::atomic::{AtomicU8, Ordering};

/// Maximum number of pending events.
/// Power of 2 for efficient ring buffer modulo.
const EVENT_QUEUE_CAP: usize = 16;

/// System event types.  Discriminants are grouped with gaps so related
/// events can be added without renumbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Event {
    // ── Remote input ──────────────────────────────────────
    /// A set-point frame was enqueued by the WebSocket handler.
    SetPointReceived = 10,

    // ── Connections ───────────────────────────────────────
    /// A WebSocket client connected.
    ClientConnected = 30,
    /// A WebSocket client disconnected.
    ClientDisconnected = 31,
}

// ── Lock-free SPSC ring buffer ────────────────────────────────
//
// The HTTP server task writes (produce), the control loop reads (consume).
// Atomic head/tail indices; the buffer lives in a static so the server
// task's callback can reach it without any shared handle plumbing.

static EVENT_HEAD: AtomicU8 = AtomicU8::new(0);
static EVENT_TAIL: AtomicU8 = AtomicU8::new(0);
// SAFETY: EVENT_BUFFER cells are written only by the single producer at the
// head index and read only by the single consumer at the tail index; the
// acquire/release pairs on EVENT_HEAD/EVENT_TAIL order those accesses.
static mut EVENT_BUFFER: [u8; EVENT_QUEUE_CAP] = [0; EVENT_QUEUE_CAP];

/// Push an event into the queue.
/// Lock-free; safe to call from the HTTP server task.
/// Returns `false` if the queue is full (event dropped).
pub fn push_event(event: Event) -> bool {
    let head = EVENT_HEAD.load(Ordering::Relaxed);
    let tail = EVENT_TAIL.load(Ordering::Acquire);
    let next_head = (head + 1) % EVENT_QUEUE_CAP as u8;

    if next_head == tail {
        return false; // Queue full — drop event.
    }

    // SAFETY: single producer; the slot at `head` is not visible to the
    // consumer until the Release store below.
    unsafe {
        EVENT_BUFFER[head as usize] = event as u8;
    }

    EVENT_HEAD.store(next_head, Ordering::Release);
    true
}

/// Pop the next event from the queue.
/// Called from the control loop (single consumer).
pub fn pop_event() -> Option<Event> {
    let tail = EVENT_TAIL.load(Ordering::Relaxed);
    let head = EVENT_HEAD.load(Ordering::Acquire);

    if tail == head {
        return None; // Empty.
    }

    // SAFETY: single consumer; the slot at `tail` was published by the
    // producer's Release store.
    let raw = unsafe { EVENT_BUFFER[tail as usize] };
    EVENT_TAIL.store((tail + 1) % EVENT_QUEUE_CAP as u8, Ordering::Release);

    event_from_u8(raw)
}

/// Drain all pending events into a callback, FIFO order.
pub fn drain_events(mut handler: impl FnMut(Event)) {
    while let Some(event) = pop_event() {
        handler(event);
    }
}

/// Number of pending events.
pub fn queue_len() -> usize {
    let head = EVENT_HEAD.load(Ordering::Relaxed) as usize;
    let tail = EVENT_TAIL.load(Ordering::Relaxed) as usize;
    (head + EVENT_QUEUE_CAP - tail) % EVENT_QUEUE_CAP
}

// ── Internal ──────────────────────────────────────────────────

fn event_from_u8(raw: u8) -> Option<Event> {
    match raw {
        10 => Some(Event::SetPointReceived),
        30 => Some(Event::ClientConnected),
        31 => Some(Event::ClientDisconnected),
        _ => None,
    }
}
