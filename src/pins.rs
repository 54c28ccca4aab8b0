//! GPIO pin assignments for the DuoDim main board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers.  Change a pin here and it propagates everywhere.

// ---------------------------------------------------------------------------
// Digipot bus (daisy-chained X9C-style wiper control)
// ---------------------------------------------------------------------------

/// Digital output: wiper direction (U/D̄).  The pin idles at the complement
/// of the logical direction; each step is one pulse toward the logical level.
pub const UD_GPIO: i32 = 4;
/// Digital output: chip-select serial data into the select shift chain
/// (active LOW at the chip).
pub const CS_DATA_GPIO: i32 = 5;
/// Digital output: shift clock for the chip-select chain.
pub const CS_CLOCK_GPIO: i32 = 6;

// ---------------------------------------------------------------------------
// Bus geometry & timing
// ---------------------------------------------------------------------------

/// Number of ganged dimmer channels on the chain.  Fixed by the board.
pub const CHANNEL_COUNT: usize = 2;

/// Settle time between bus line transitions, in microseconds.
/// Hardware timing constant for the digipot chain — not user-configurable.
pub const SETTLE_DELAY_US: u32 = 5;
