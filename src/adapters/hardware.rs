//! Hardware adapter — bridges the real digipot bus to the domain port.
//!
//! Owns the [`DigipotBus`] built from the three board GPIOs, exposing it
//! through [`WiperBusPort`].  This is the only module in the system that
//! touches actual pins.  On non-espidf targets the underlying
//! `hw_init::gpio_write` calls are no-op simulation stubs.

use embedded_hal::digital::{ErrorType, OutputPin};

use crate::app::ports::WiperBusPort;
use crate::drivers::digipot::{DigipotBus, Direction};
use crate::drivers::hw_init;
use crate::pins;

use super::time::SettleDelay;

// ── GPIO pin wrapper ──────────────────────────────────────────

/// An already-configured output pin, addressed by GPIO number.
/// Infallible: `gpio_set_level` on a configured output cannot fail.
pub struct EspPin {
    gpio: i32,
}

impl EspPin {
    pub fn new(gpio: i32) -> Self {
        Self { gpio }
    }
}

impl ErrorType for EspPin {
    type Error = core::convert::Infallible;
}

impl OutputPin for EspPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        hw_init::gpio_write(self.gpio, false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        hw_init::gpio_write(self.gpio, true);
        Ok(())
    }
}

// ── Hardware adapter ──────────────────────────────────────────

/// Concrete adapter that owns the digipot bus behind the port trait.
pub struct HardwareAdapter {
    bus: DigipotBus<EspPin, EspPin, EspPin, SettleDelay>,
}

impl HardwareAdapter {
    /// Build the adapter over the board pins from `pins.rs`.
    /// `hw_init::init_peripherals()` must have run first.
    pub fn new(settle_us: u32) -> Self {
        Self {
            bus: DigipotBus::new(
                EspPin::new(pins::UD_GPIO),
                EspPin::new(pins::CS_DATA_GPIO),
                EspPin::new(pins::CS_CLOCK_GPIO),
                SettleDelay::new(),
                settle_us,
            ),
        }
    }
}

impl WiperBusPort for HardwareAdapter {
    fn drive(&mut self, channel: u8, direction: Direction, steps: u8) {
        self.bus.drive(channel, direction, steps);
    }
}
