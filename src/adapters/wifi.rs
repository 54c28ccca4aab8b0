//! WiFi soft-AP adapter.
//!
//! The controller is its own network: it brings up an access point and the
//! control surface lives at the AP's gateway address.  There is no station
//! mode and no upstream connectivity.
//!
//! ## cfg gating
//!
//! - **`target_os = "espidf"`**: real ESP-IDF WiFi driver via
//!   `esp_idf_svc::wifi` (blocking wrapper, AP configuration).
//! - **all other targets**: simulation stub for host-side tests.

use core::fmt;
use log::info;

use crate::config::SystemConfig;
use crate::error::{CommsError, Error};

// ───────────────────────────────────────────────────────────────
// Error type
// ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApError {
    InvalidSsid,
    InvalidPassword,
    StartFailed,
}

impl fmt::Display for ApError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSsid => write!(f, "SSID invalid (must be 1-32 printable ASCII bytes)"),
            Self::InvalidPassword => {
                write!(f, "password invalid (must be 8-64 bytes for WPA2, or empty for open)")
            }
            Self::StartFailed => write!(f, "soft-AP start failed"),
        }
    }
}

impl From<ApError> for Error {
    fn from(e: ApError) -> Self {
        match e {
            ApError::InvalidSsid => Error::Config("AP SSID invalid"),
            ApError::InvalidPassword => Error::Config("AP password invalid"),
            ApError::StartFailed => Error::Comms(CommsError::ApStartFailed),
        }
    }
}

// ───────────────────────────────────────────────────────────────
// Validation
// ───────────────────────────────────────────────────────────────

fn is_printable_ascii(s: &str) -> bool {
    s.bytes().all(|b| (0x20..=0x7E).contains(&b))
}

fn validate_ssid(ssid: &str) -> Result<(), ApError> {
    if ssid.is_empty() || ssid.len() > 32 {
        return Err(ApError::InvalidSsid);
    }
    if !is_printable_ascii(ssid) {
        return Err(ApError::InvalidSsid);
    }
    Ok(())
}

fn validate_password(password: &str) -> Result<(), ApError> {
    if password.is_empty() {
        return Ok(());
    }
    if password.len() < 8 || password.len() > 64 {
        return Err(ApError::InvalidPassword);
    }
    Ok(())
}

// ───────────────────────────────────────────────────────────────
// Soft-AP adapter
// ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApState {
    Down,
    Up,
}

pub struct SoftAp {
    ssid: heapless::String<32>,
    password: heapless::String<64>,
    state: ApState,
    #[cfg(target_os = "espidf")]
    wifi: Option<esp_idf_svc::wifi::BlockingWifi<esp_idf_svc::wifi::EspWifi<'static>>>,
}

impl SoftAp {
    /// Validate credentials from config and build the (not yet started)
    /// adapter.
    pub fn new(config: &SystemConfig) -> Result<Self, ApError> {
        validate_ssid(&config.ap_ssid)?;
        validate_password(&config.ap_password)?;
        Ok(Self {
            ssid: config.ap_ssid.clone(),
            password: config.ap_password.clone(),
            state: ApState::Down,
            #[cfg(target_os = "espidf")]
            wifi: None,
        })
    }

    pub fn state(&self) -> ApState {
        self.state
    }

    pub fn is_up(&self) -> bool {
        self.state == ApState::Up
    }

    pub fn ssid(&self) -> &str {
        &self.ssid
    }

    // ── Platform-specific bring-up ────────────────────────────

    /// Start the access point and block until the network interface is up.
    #[cfg(target_os = "espidf")]
    pub fn start(
        &mut self,
        modem: esp_idf_hal::modem::Modem,
        sysloop: esp_idf_svc::eventloop::EspSystemEventLoop,
        nvs: esp_idf_svc::nvs::EspDefaultNvsPartition,
    ) -> Result<(), ApError> {
        use esp_idf_svc::wifi::{
            AccessPointConfiguration, AuthMethod, BlockingWifi, Configuration, EspWifi,
        };

        let mut wifi = BlockingWifi::wrap(
            EspWifi::new(modem, sysloop.clone(), Some(nvs)).map_err(|e| {
                log::warn!("soft-AP: driver init failed ({e})");
                ApError::StartFailed
            })?,
            sysloop,
        )
        .map_err(|e| {
            log::warn!("soft-AP: blocking wrapper failed ({e})");
            ApError::StartFailed
        })?;

        let auth_method = if self.password.is_empty() {
            AuthMethod::None
        } else {
            AuthMethod::WPA2Personal
        };
        wifi.set_configuration(&Configuration::AccessPoint(AccessPointConfiguration {
            ssid: self.ssid.clone(),
            password: self.password.clone(),
            auth_method,
            channel: 1,
            ..Default::default()
        }))
        .map_err(|e| {
            log::warn!("soft-AP: configuration rejected ({e})");
            ApError::StartFailed
        })?;

        wifi.start().map_err(|e| {
            log::warn!("soft-AP: start failed ({e})");
            ApError::StartFailed
        })?;
        wifi.wait_netif_up().map_err(|e| {
            log::warn!("soft-AP: netif never came up ({e})");
            ApError::StartFailed
        })?;

        self.wifi = Some(wifi);
        self.state = ApState::Up;
        info!("soft-AP '{}' up", self.ssid);
        Ok(())
    }

    /// Simulation: mark the AP up and log.
    #[cfg(not(target_os = "espidf"))]
    pub fn start(&mut self) -> Result<(), ApError> {
        self.state = ApState::Up;
        info!("soft-AP(sim) '{}' up", self.ssid);
        Ok(())
    }
}

// ───────────────────────────────────────────────────────────────
// Tests
// ───────────────────────────────────────────────────────────────
