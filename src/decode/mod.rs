//! Tolerant decoding of recognition-tool output into match records.
//!
//! The upstream tool prints a JSON-like payload on stdout: `null`, `[]`,
//! a bare `{...}` object, or an array of objects. This module turns that
//! text into an ordered sequence of [`OcrMatch`] records in a single
//! forward pass:
//!
//! 1. the scanner segments the payload into top-level object spans,
//!    tracking quote, escape, and brace state so that structural
//!    characters inside string values never split an object;
//! 2. each span is parsed once into a small value tree;
//! 3. the tree's top-level keys are projected onto one record, with
//!    every absent or wrong-kind field resolving to its type's zero
//!    value.
//!
//! The error boundary is deliberately asymmetric. A field that is missing
//! or malformed is an expected, common occurrence from a best-effort
//! producer and silently defaults; it is never logged or surfaced. A
//! payload whose *structure* cannot be established (unbalanced braces, an
//! unterminated string, text that is not a payload at all) fails the
//! whole call with the offending input attached, and no partial results
//! are returned.
//!
//! Decoding is purely functional over its input: no I/O, no shared state,
//! safe to call concurrently, linear in payload length.
//!
//! # Example
//!
//! ```
//! use ocrmatch::decode::from_ocr_json_str;
//!
//! let matches = from_ocr_json_str(r#"[{"Text":"Login","CenterX":60,"CenterY":35}]"#)?;
//! assert_eq!(matches.len(), 1);
//! assert_eq!(matches[0].text, "Login");
//! assert_eq!(matches[0].center(), (60, 35));
//! # Ok::<(), ocrmatch::OcrMatchError>(())
//! ```

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::error::OcrMatchError;

mod project;
mod record;
mod scanner;
mod value;

pub use record::OcrMatch;

/// A container-level decode failure.
///
/// Raised when object boundaries cannot be established for the payload or
/// a span inside it is structurally broken. Individual missing or
/// malformed fields never produce one of these; they default.
///
/// Offsets are byte positions within the scanned content (the payload
/// with any outer array brackets stripped).
#[derive(Clone, Debug, PartialEq, Error)]
pub enum DecodeError {
    #[error("payload is not an object, an array, or an empty marker")]
    UnrecognizedPayload,

    #[error("array payload has no closing ']'")]
    UnterminatedArray,

    #[error("unbalanced braces at byte {offset}")]
    UnbalancedBraces { offset: usize },

    #[error("unterminated string starting at byte {offset}")]
    UnterminatedString { offset: usize },

    #[error("malformed object: {message} at byte {offset} of span")]
    ObjectSyntax { offset: usize, message: String },
}

/// Lazy decoder over one payload.
///
/// Yields each record as soon as its closing boundary is found, without
/// materializing the span list. One-shot and finite: after yielding an
/// `Err` the stream is exhausted. Obtained from [`stream_matches`].
pub struct MatchStream<'a> {
    spans: scanner::ObjectSpans<'a>,
    done: bool,
}

impl<'a> Iterator for MatchStream<'a> {
    type Item = Result<OcrMatch, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let item = match self.spans.next()? {
            Ok(span) => decode_span(span),
            Err(err) => Err(err),
        };
        if item.is_err() {
            self.done = true;
        }
        Some(item)
    }
}

fn decode_span(span: &str) -> Result<OcrMatch, DecodeError> {
    let members = value::parse_object_span(span).map_err(|err| DecodeError::ObjectSyntax {
        offset: err.offset,
        message: err.message,
    })?;
    Ok(project::project_match(&members))
}

/// Decodes a payload lazily, one record per top-level object.
///
/// This is the single-pass form of [`from_ocr_json_str`] for callers
/// that want to stop early or avoid materializing the whole sequence.
pub fn stream_matches(payload: &str) -> MatchStream<'_> {
    MatchStream {
        spans: scanner::ObjectSpans::new(payload),
        done: false,
    }
}

/// Decodes a whole payload into an ordered list of match records.
///
/// Record count and order exactly match the top-level objects in the
/// input. `null`, `[]`, and empty input decode to an empty list. On a
/// container-level failure the offending payload text is attached to the
/// returned error for diagnostics and no partial results are returned.
pub fn from_ocr_json_str(payload: &str) -> Result<Vec<OcrMatch>, OcrMatchError> {
    let mut matches = Vec::new();
    for item in stream_matches(payload) {
        match item {
            Ok(m) => matches.push(m),
            Err(source) => {
                return Err(OcrMatchError::PayloadDecode {
                    payload: payload.to_string(),
                    source,
                });
            }
        }
    }
    Ok(matches)
}

/// Fuzz-only entrypoint for single-span object parsing.
#[cfg(feature = "fuzzing")]
pub fn fuzz_parse_object_span(span: &str) -> Result<(), DecodeError> {
    let _ = decode_span(span)?;
    Ok(())
}

/// Reads a payload from a file and decodes it.
///
/// # Errors
/// Returns an error if the file cannot be read or the payload cannot be
/// decoded.
pub fn read_ocr_json(path: &Path) -> Result<Vec<OcrMatch>, OcrMatchError> {
    let payload = fs::read_to_string(path).map_err(OcrMatchError::Io)?;
    from_ocr_json_str(&payload)
}
