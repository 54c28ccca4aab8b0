//! System configuration parameters
//!
//! All tunable parameters for the DuoDim controller.  There is no
//! persistence layer — set-points and configuration live for the process
//! lifetime only.

use serde::{Deserialize, Serialize};

/// Core system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    // --- Soft-AP ---
    /// SSID of the access point the controller brings up.
    pub ap_ssid: heapless::String<32>,
    /// WPA2 password (8-64 bytes, or empty for an open network).
    pub ap_password: heapless::String<64>,

    // --- Reconciliation ---
    /// Control loop interval (milliseconds).  Fast enough that a slider
    /// drag feels immediate, slow enough not to busy-loop the bus code.
    pub control_loop_interval_ms: u32,
    /// Cap on the step count of a single drive pass; the residual delta
    /// carries over to the next tick.
    pub max_steps_per_pass: u8,

    // --- Bus timing ---
    /// Settle delay between bus line transitions (microseconds).
    pub settle_delay_us: u32,

    // --- Telemetry ---
    /// Telemetry report interval (seconds).
    pub telemetry_interval_secs: u32,
}

impl Default for SystemConfig {
    fn default() -> Self {
        let mut ap_ssid = heapless::String::new();
        let mut ap_password = heapless::String::new();
        // Capacities are 32/64; these literals always fit.
        let _ = ap_ssid.push_str("duodim");
        let _ = ap_password.push_str("12345678");

        Self {
            ap_ssid,
            ap_password,

            control_loop_interval_ms: 10,
            max_steps_per_pass: 255,

            settle_delay_us: crate::pins::SETTLE_DELAY_US,

            telemetry_interval_secs: 60,
        }
    }
}
