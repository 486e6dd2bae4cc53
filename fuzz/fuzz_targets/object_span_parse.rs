//! Fuzz target for single-span object parsing.
//!
//! Skips the scanner and feeds arbitrary text straight to the per-span
//! value parser and projection.
//!
//! Run with:
//!   cargo +nightly fuzz run object_span_parse

#![no_main]

use libfuzzer_sys::fuzz_target;
use ocrmatch::decode::fuzz_parse_object_span;

fuzz_target!(|data: &[u8]| {
    if data.len() > 1024 * 1024 {
        return;
    }

    let Ok(span) = std::str::from_utf8(data) else {
        return;
    };

    let _ = fuzz_parse_object_span(span);
});
