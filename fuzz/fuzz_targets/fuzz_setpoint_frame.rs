//! Fuzz target: `SetPoint::parse`
//!
//! Drives arbitrary byte sequences through the set-point frame parser and
//! asserts that it never panics and never accepts an out-of-range channel.
//!
//! cargo fuzz run fuzz_setpoint_frame

#![no_main]

use duodim::rpc::frame::{SetPoint, SET_POINT_FRAME_LEN};
use duodim::CHANNEL_COUNT;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Some(sp) = SetPoint::parse(data) {
        assert_eq!(data.len(), SET_POINT_FRAME_LEN);
        assert!(
            (sp.channel as usize) < CHANNEL_COUNT,
            "parser accepted channel {} beyond the fixed array",
            sp.channel
        );
        // The accepted frame must re-encode to the same bytes.
        assert_eq!(&sp.encode()[..], data);
    }
});
