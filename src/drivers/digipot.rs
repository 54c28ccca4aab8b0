//! Daisy-chained digital-potentiometer bus driver (X9C-style wiper control).
//!
//! The board chains the chip-select inputs of all digipots behind a shift
//! register: one serial data line plus one clock shift a select bit per
//! chain slot, and a shared U/D̄ line carries the step pulses.  Selecting a
//! chip means clocking a LOW into its slot; everything else stays HIGH.
//!
//! ```text
//!  CS data ──▶ [slot 0] ─▶ [slot 1] ─▶ … ─▶ [slot N-1]
//!  CS clock ──▶ (shared)
//!  U/D̄     ──▶ (shared)
//! ```
//!
//! Slot 0 of the register is the *last* physical position on the board, so
//! channel `c` maps to slot `N-1-c`.  This reversal is a wiring convention —
//! do not "fix" it without re-routing the chain.
//!
//! ## Dual-target design
//!
//! The driver is generic over [`OutputPin`] and [`DelayNs`], so the same
//! code runs against real GPIO on the device and against recording mocks in
//! host tests (with a no-op delay).

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::pins::CHANNEL_COUNT;

/// Logical wiper movement direction.  `Up` increases the level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// U/D̄ pin level that clocks one step in this direction.
    /// The line idles at the complement; each step is one pulse to this
    /// level and back.
    fn step_level(self) -> bool {
        matches!(self, Self::Up)
    }
}

/// Whether shift-chain `slot` ends up selected (CS low) when addressing
/// `target`.  Out-of-range targets wrap far past the chain length, so no
/// slot matches — mirroring the unsigned arithmetic of the original board
/// bring-up code.
fn slot_selects(slot: usize, target: u8) -> bool {
    (CHANNEL_COUNT - 1).wrapping_sub(target as usize) == slot
}

/// Bit-banged driver for the ganged digipot chain.
///
/// All three lines are plain push-pull outputs; the chips are write-only
/// (open-loop — there is no readback of the wiper position).
pub struct DigipotBus<UD, DATA, CLK, DLY> {
    ud: UD,
    data: DATA,
    clk: CLK,
    delay: DLY,
    settle_us: u32,
}

impl<UD, DATA, CLK, DLY> DigipotBus<UD, DATA, CLK, DLY>
where
    UD: OutputPin,
    DATA: OutputPin,
    CLK: OutputPin,
    DLY: DelayNs,
{
    pub fn new(ud: UD, data: DATA, clk: CLK, delay: DLY, settle_us: u32) -> Self {
        Self {
            ud,
            data,
            clk,
            delay,
            settle_us,
        }
    }

    /// Move the wiper of `channel` by `steps` discrete units.
    ///
    /// Blocking for the full sequence: flush the select chain, pre-assert
    /// the direction line to the complement, shift in the select pattern,
    /// then clock out exactly `steps` pulses.  `steps == 0` degenerates to
    /// addressing with no movement.
    ///
    /// A `channel` beyond the chain selects nothing; the step pulses are
    /// still clocked out with no chip listening.  Preserved as-is for
    /// compatibility with the shipped boards.
    pub fn drive(&mut self, channel: u8, direction: Direction, steps: u8) {
        self.flush_chain();

        self.set_ud(!direction.step_level());
        self.settle();

        self.address(channel);

        for _ in 0..steps {
            self.set_ud(direction.step_level());
            self.settle();
            self.set_ud(!direction.step_level());
            self.settle();
        }
    }

    /// Shift all-deselected through the chain to flush stale select state.
    /// Runs before every drive sequence, not just at startup.
    fn flush_chain(&mut self) {
        for _ in 0..CHANNEL_COUNT {
            self.shift_select_bit(false);
        }
    }

    /// Shift the select pattern for `target` into the chain.
    fn address(&mut self, target: u8) {
        for slot in 0..CHANNEL_COUNT {
            self.shift_select_bit(slot_selects(slot, target));
        }
    }

    /// Shift one select bit: data line (active LOW), settle, clock high,
    /// settle, clock low, settle.  This ordering is the protocol contract.
    fn shift_select_bit(&mut self, selected: bool) {
        if selected {
            let _ = self.data.set_low();
        } else {
            let _ = self.data.set_high();
        }
        self.settle();
        let _ = self.clk.set_high();
        self.settle();
        let _ = self.clk.set_low();
        self.settle();
    }

    fn set_ud(&mut self, high: bool) {
        if high {
            let _ = self.ud.set_high();
        } else {
            let _ = self.ud.set_low();
        }
    }

    fn settle(&mut self) {
        self.delay.delay_us(self.settle_us);
    }
}
