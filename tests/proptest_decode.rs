//! Property tests pitting the decoder against an independent emitter.
//!
//! serde_json writes the payloads here, so these properties check the
//! decoder against a producer it shares no code with.

use ocrmatch::{from_ocr_json_str, OcrMatch};
use proptest::prelude::*;

fn arb_match() -> impl Strategy<Value = OcrMatch> {
    (
        (any::<String>(), "[A-Za-z]{0,12}"),
        (
            any::<i32>(),
            any::<i32>(),
            any::<i32>(),
            any::<i32>(),
            any::<i32>(),
            any::<i32>(),
            any::<i32>(),
        ),
        -1.0e9f64..1.0e9,
    )
        .prop_map(
            |((text, kind), (left, top, width, height, center_x, center_y, word_count), confidence)| {
                OcrMatch {
                    text,
                    left,
                    top,
                    width,
                    height,
                    center_x,
                    center_y,
                    confidence,
                    kind,
                    word_count,
                }
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Whatever serde_json emits for a record sequence, the decoder
    /// reconstructs element-wise, in order. Arbitrary text exercises the
    /// scanner's quote/escape tracking with every character class.
    #[test]
    fn serde_emitted_arrays_roundtrip(matches in prop::collection::vec(arb_match(), 0..8)) {
        let payload = serde_json::to_string(&matches).expect("serialize failed");
        let decoded = from_ocr_json_str(&payload).expect("decode failed");
        prop_assert_eq!(decoded, matches);
    }

    /// Pretty-printing inserts newlines and indentation between and
    /// inside objects; segmentation must not care.
    #[test]
    fn pretty_printed_arrays_decode_identically(matches in prop::collection::vec(arb_match(), 0..8)) {
        let compact = serde_json::to_string(&matches).expect("serialize failed");
        let pretty = serde_json::to_string_pretty(&matches).expect("serialize failed");
        let from_compact = from_ocr_json_str(&compact).expect("compact decode failed");
        let from_pretty = from_ocr_json_str(&pretty).expect("pretty decode failed");
        prop_assert_eq!(from_compact, from_pretty);
    }

    /// Decoding a fixed payload twice yields element-wise equal output.
    #[test]
    fn decoding_is_idempotent(matches in prop::collection::vec(arb_match(), 0..8)) {
        let payload = serde_json::to_string(&matches).expect("serialize failed");
        let first = from_ocr_json_str(&payload).expect("first decode failed");
        let second = from_ocr_json_str(&payload).expect("second decode failed");
        prop_assert_eq!(first, second);
    }

    /// Record count always equals top-level object count, whatever the
    /// object contents.
    #[test]
    fn record_count_matches_object_count(texts in prop::collection::vec(any::<String>(), 0..16)) {
        let objects: Vec<String> = texts
            .iter()
            .map(|t| format!(r#"{{"Text":{}}}"#, serde_json::to_string(t).expect("quote failed")))
            .collect();
        let payload = format!("[{}]", objects.join(" , "));

        let decoded = from_ocr_json_str(&payload).expect("decode failed");
        prop_assert_eq!(decoded.len(), texts.len());
        for (m, t) in decoded.iter().zip(&texts) {
            prop_assert_eq!(&m.text, t);
        }
    }
}
