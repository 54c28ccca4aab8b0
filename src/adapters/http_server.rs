//! HTTP control portal: static slider page + WebSocket set-point endpoint.
//!
//! Thin I/O shim around the core.  `GET /` serves the control surface;
//! `/websocket` accepts binary `[channel, level]` frames and enqueues them
//! for the control loop.  The handler runs on the HTTP server task, so it
//! never touches the service directly — frames go through the
//! [`FrameSender`] queue and an event nudges the loop.
//!
//! Frame acceptance (anything else is dropped without a reply):
//! - binary, complete, unfragmented
//! - at most [`MAX_FRAME_LEN`](crate::rpc::transport::MAX_FRAME_LEN) bytes
//!   (length/channel validation happens in the parser on the control loop)

use crate::rpc::transport::FrameSender;

/// The embedded control surface (two vertical sliders, one per channel).
pub const INDEX_HTML: &str = include_str!("../assets/index.html");

/// WebSocket endpoint path.
pub const WS_URI: &str = "/websocket";

// ───────────────────────────────────────────────────────────────
// espidf: real server
// ───────────────────────────────────────────────────────────────

#[cfg(target_os = "espidf")]
pub struct ControlPortal {
    // Keeps the server (and its registered handlers) alive.
    _server: esp_idf_svc::http::server::EspHttpServer<'static>,
}

#[cfg(target_os = "espidf")]
impl ControlPortal {
    /// Start the HTTP server and register both endpoints.
    pub fn start(frames: FrameSender) -> Result<Self, crate::error::Error> {
        use esp_idf_svc::http::server::ws::EspHttpWsConnection;
        use esp_idf_svc::http::server::{Configuration, EspHttpServer, Method};
        use esp_idf_svc::io::{EspIOError, Write};
        use esp_idf_svc::sys::EspError;
        use esp_idf_svc::ws::FrameType;
        use log::{debug, info};

        use crate::error::{CommsError, Error};
        use crate::events::{push_event, Event};
        use crate::rpc::transport::MAX_FRAME_LEN;

        let mut server = EspHttpServer::new(&Configuration::default())
            .map_err(|_| Error::Comms(CommsError::HttpServerFailed))?;

        server
            .fn_handler("/", Method::Get, |req| -> Result<(), EspIOError> {
                let mut resp = req.into_response(
                    200,
                    Some("OK"),
                    &[("Content-Type", "text/html"), ("Connection", "close")],
                )?;
                resp.write_all(INDEX_HTML.as_bytes())?;
                Ok(())
            })
            .map_err(|_| Error::Comms(CommsError::HttpServerFailed))?;

        server
            .ws_handler(WS_URI, move |ws: &mut EspHttpWsConnection| -> Result<(), EspError> {
                if ws.is_new() {
                    info!("WebSocket client connected");
                    push_event(Event::ClientConnected);
                    return Ok(());
                }
                if ws.is_closed() {
                    info!("WebSocket client disconnected");
                    push_event(Event::ClientDisconnected);
                    return Ok(());
                }

                // First recv with an empty buffer reports the frame length.
                let (_frame_type, len) = ws.recv(&mut [])?;
                if len > MAX_FRAME_LEN {
                    debug!("oversized ws frame dropped ({} bytes)", len);
                    // Still consume the payload so the connection stays in sync.
                    let mut scratch = vec![0u8; len];
                    let _ = ws.recv(&mut scratch)?;
                    return Ok(());
                }

                let mut buf = [0u8; MAX_FRAME_LEN];
                let (frame_type, len) = ws.recv(&mut buf)?;
                match frame_type {
                    // Complete, unfragmented binary frames only.
                    FrameType::Binary(false) => {
                        frames.push(&buf[..len]);
                        push_event(Event::SetPointReceived);
                    }
                    other => {
                        debug!("ws frame ignored (type {:?})", other);
                    }
                }

                Ok(())
            })
            .map_err(|_| Error::Comms(CommsError::HttpServerFailed))?;

        info!("control portal up (/, {})", WS_URI);
        Ok(Self { _server: server })
    }
}

// ───────────────────────────────────────────────────────────────
// Host: simulation stub
// ───────────────────────────────────────────────────────────────

#[cfg(not(target_os = "espidf"))]
pub struct ControlPortal {
    _frames: FrameSender,
}

#[cfg(not(target_os = "espidf"))]
impl ControlPortal {
    pub fn start(frames: FrameSender) -> Result<Self, crate::error::Error> {
        log::info!("control portal(sim): no HTTP server on host");
        Ok(Self { _frames: frames })
    }
}
