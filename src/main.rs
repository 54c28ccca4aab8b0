//! DuoDim Firmware — Main Entry Point
//!
//! Hexagonal architecture with a single synchronous control loop.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                    Adapters (outer ring)                     │
//! │                                                              │
//! │  SoftAp        ControlPortal        HardwareAdapter          │
//! │  (WiFi AP)     (HTTP + WebSocket)   (WiperBusPort)           │
//! │                       │                                      │
//! │                 FrameSender ─▶ QueuedTransport               │
//! │                                                              │
//! │  ─────────────── Port Trait Boundary ────────────────        │
//! │                                                              │
//! │  ┌────────────────────────────────────────────────────┐      │
//! │  │            AppService (pure logic)                 │      │
//! │  │  LevelTable · reconciliation                       │      │
//! │  └────────────────────────────────────────────────────┘      │
//! └──────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use log::info;

use duodim::adapters::hardware::HardwareAdapter;
use duodim::adapters::http_server::ControlPortal;
use duodim::adapters::log_sink::LogEventSink;
use duodim::adapters::time::UptimeClock;
use duodim::adapters::wifi::SoftAp;
use duodim::app::events::AppEvent;
use duodim::app::ports::EventSink;
use duodim::app::service::AppService;
use duodim::config::SystemConfig;
use duodim::drivers::hw_init;
use duodim::error::Error;
use duodim::events::{self, Event};
use duodim::rpc::engine::SetPointEngine;
use duodim::rpc::transport::QueuedTransport;

/// Frames a slider drag can burst between two control ticks.
const FRAME_QUEUE_CAP: usize = 32;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("DuoDim v{} starting", env!("CARGO_PKG_VERSION"));

    // ── 2. Peripherals ────────────────────────────────────────
    // Failing to configure three output pins means the board is broken;
    // bail out and let the runtime reset us.
    hw_init::init_peripherals().map_err(|e| {
        log::error!("HAL init failed: {}", e);
        Error::Init("digipot bus GPIO config failed")
    })?;

    let config = SystemConfig::default();

    // ── 3. Soft-AP ────────────────────────────────────────────
    let mut ap = SoftAp::new(&config).map_err(Error::from)?;
    {
        let peripherals = esp_idf_hal::peripherals::Peripherals::take()?;
        let sysloop = esp_idf_svc::eventloop::EspSystemEventLoop::take()?;
        let nvs = esp_idf_svc::nvs::EspDefaultNvsPartition::take()?;
        ap.start(peripherals.modem, sysloop, nvs)
            .map_err(Error::from)?;
    }

    // ── 4. Control portal + set-point plumbing ────────────────
    let (frame_tx, frame_rx) = QueuedTransport::channel(FRAME_QUEUE_CAP);
    let _portal = ControlPortal::start(frame_tx)?;
    let mut engine = SetPointEngine::new(frame_rx);

    // ── 5. Domain service + adapters ──────────────────────────
    let mut hw = HardwareAdapter::new(config.settle_delay_us);
    let mut sink = LogEventSink::new();
    let clock = UptimeClock::new();
    let mut app = AppService::new(&config);
    app.start(&mut sink);

    info!("System ready. Entering control loop.");

    // ── 6. Control loop ───────────────────────────────────────
    // Each iteration: service the network events that arrived during the
    // sleep, then run one reconciliation pass.  The queue stays strictly
    // SPSC (HTTP task → this loop); tick pacing never goes through it.
    let tick = std::time::Duration::from_millis(u64::from(config.control_loop_interval_ms));
    let ticks_per_telemetry = u64::from(config.telemetry_interval_secs) * 1000
        / u64::from(config.control_loop_interval_ms);
    let mut telemetry_counter: u64 = 0;

    loop {
        std::thread::sleep(tick);

        events::drain_events(|event| match event {
            Event::SetPointReceived => {
                engine.poll(&mut app, &mut sink);
            }

            Event::ClientConnected | Event::ClientDisconnected => {
                // Logged by the portal handler; nothing to reconcile.
            }
        });

        app.tick(&mut hw, &mut sink);

        telemetry_counter += 1;
        if telemetry_counter >= ticks_per_telemetry {
            telemetry_counter = 0;
            let t = app.build_telemetry(clock.uptime_secs());
            sink.emit(&AppEvent::Telemetry(t));
        }
    }
}
