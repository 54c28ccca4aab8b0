//! Integration tests for the set-point → reconciliation → bus pipeline.
//!
//! These run on the host and verify the full chain from an incoming
//! two-byte frame down to recorded drive calls, without any real hardware.

mod mock_bus;
mod reconciliation_tests;
mod setpoint_flow_tests;
