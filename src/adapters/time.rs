//! Time adapters: the settle-delay source and a monotonic uptime clock.
//!
//! - **`target_os = "espidf"`** — busy-waits via `esp_rom_delay_us` and
//!   reads `esp_timer_get_time()` (microsecond precision, monotonic).
//! - **`not(target_os = "espidf")`** — spins on `std::time::Instant`.
//!   Sleeping for single-digit microseconds is not reliable on a hosted
//!   OS, so the simulation busy-waits too.

use embedded_hal::delay::DelayNs;

// ───────────────────────────────────────────────────────────────
// Settle delay
// ───────────────────────────────────────────────────────────────

/// Microsecond-scale blocking delay for the digipot bus.
///
/// Injected into the driver as a [`DelayNs`] so host tests can substitute
/// a no-op and run the pulse protocol at full speed.
pub struct SettleDelay;

impl SettleDelay {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SettleDelay {
    fn default() -> Self {
        Self::new()
    }
}

impl DelayNs for SettleDelay {
    #[cfg(target_os = "espidf")]
    fn delay_ns(&mut self, ns: u32) {
        // The ROM delay has microsecond granularity; round up so the bus
        // never settles short.
        unsafe { esp_idf_svc::sys::esp_rom_delay_us(ns.div_ceil(1_000)) };
    }

    #[cfg(not(target_os = "espidf"))]
    fn delay_ns(&mut self, ns: u32) {
        let start = std::time::Instant::now();
        let target = core::time::Duration::from_nanos(u64::from(ns));
        while start.elapsed() < target {
            core::hint::spin_loop();
        }
    }
}

// ───────────────────────────────────────────────────────────────
// Uptime clock
// ───────────────────────────────────────────────────────────────

/// Monotonic seconds-since-boot, for telemetry.
pub struct UptimeClock {
    #[cfg(not(target_os = "espidf"))]
    start: std::time::Instant,
}

impl UptimeClock {
    pub fn new() -> Self {
        Self {
            #[cfg(not(target_os = "espidf"))]
            start: std::time::Instant::now(),
        }
    }

    /// Seconds since boot (monotonic).
    #[cfg(target_os = "espidf")]
    pub fn uptime_secs(&self) -> u64 {
        (unsafe { esp_idf_svc::sys::esp_timer_get_time() }) as u64 / 1_000_000
    }

    /// Seconds since boot (monotonic).
    #[cfg(not(target_os = "espidf"))]
    pub fn uptime_secs(&self) -> u64 {
        self.start.elapsed().as_secs()
    }
}

impl Default for UptimeClock {
    fn default() -> Self {
        Self::new()
    }
}
