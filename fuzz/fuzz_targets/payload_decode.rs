//! Fuzz target for full payload decoding.
//!
//! This fuzzer feeds arbitrary byte sequences to the payload decoder,
//! checking for panics, buffer overflows, or other undefined behavior.
//!
//! Run with:
//!   cargo +nightly fuzz run payload_decode
//!
//! Or with a corpus:
//!   cargo +nightly fuzz run payload_decode fuzz/corpus/payload_decode/

#![no_main]

use libfuzzer_sys::fuzz_target;
use ocrmatch::from_ocr_json_str;

fuzz_target!(|data: &[u8]| {
    // Cap input size to avoid OOM on very large inputs.
    // 10MB is generous for recognition payloads.
    if data.len() > 10 * 1024 * 1024 {
        return;
    }

    let Ok(payload) = std::str::from_utf8(data) else {
        return;
    };

    // Try to decode the data. We don't care about errors—
    // we only care about panics, crashes, or hangs.
    let _ = from_ocr_json_str(payload);
});
