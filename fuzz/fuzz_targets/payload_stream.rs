//! Fuzz target for the lazy decode stream.
//!
//! Drives the streaming iterator to exhaustion so the scanner's
//! cross-call cursor handling gets exercised, not just the collecting
//! wrapper.
//!
//! Run with:
//!   cargo +nightly fuzz run payload_stream

#![no_main]

use libfuzzer_sys::fuzz_target;
use ocrmatch::stream_matches;

fuzz_target!(|data: &[u8]| {
    if data.len() > 10 * 1024 * 1024 {
        return;
    }

    let Ok(payload) = std::str::from_utf8(data) else {
        return;
    };

    for item in stream_matches(payload) {
        let _ = item;
    }
});
