//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter       | Implements      | Connects to                 |
//! |---------------|-----------------|-----------------------------|
//! | `hardware`    | WiperBusPort    | Digipot bus GPIOs           |
//! | `log_sink`    | EventSink       | Serial log output           |
//! | `time`        | DelayNs         | ESP32 ROM delay / host spin |
//! | `wifi`        | —               | ESP-IDF soft-AP             |
//! | `http_server` | —               | HTTP portal + WebSocket     |

pub mod hardware;
pub mod http_server;
pub mod log_sink;
pub mod time;
pub mod wifi;
