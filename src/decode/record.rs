//! The decoded match record.

use serde::{Deserialize, Serialize};

/// A single recognized region of interest.
///
/// Field names serialize in PascalCase to mirror the schema the upstream
/// recognition tool emits (`Text`, `Left`, ..., `CenterX`, `Confidence`,
/// `Type`, `WordCount`), so a decoded sequence re-serializes in the
/// producer's own shape.
///
/// Every field has a defined default (`""` for strings, `0` for integers,
/// `0.0` for the confidence) and a decoded record is always fully
/// populated. The upstream tool routinely omits fields; absence maps to
/// the default, never to an error. See [`crate::decode`] for the full
/// defaulting contract.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct OcrMatch {
    /// Recognized text content. May be empty.
    pub text: String,

    /// Left edge of the bounding box in source coordinates.
    ///
    /// Box values pass through whatever the producer supplied; negative
    /// coordinates are representable.
    pub left: i32,

    /// Top edge of the bounding box.
    pub top: i32,

    /// Width of the bounding box.
    pub width: i32,

    /// Height of the bounding box.
    pub height: i32,

    /// Centroid X, supplied independently by the producer rather than
    /// derived from the box.
    pub center_x: i32,

    /// Centroid Y, supplied independently by the producer.
    pub center_y: i32,

    /// Recognition confidence as reported upstream. Unit and range are
    /// the producer's; not validated here.
    pub confidence: f64,

    /// Free-form label for the kind of match.
    ///
    /// `type` upstream; renamed because `type` is a Rust keyword.
    #[serde(rename = "Type")]
    pub kind: String,

    /// Number of words the producer grouped into this match.
    pub word_count: i32,
}

impl OcrMatch {
    /// Returns the centroid as an `(x, y)` pair.
    #[inline]
    pub fn center(&self) -> (i32, i32) {
        (self.center_x, self.center_y)
    }

    /// Returns true if the recognized text contains `term`, ignoring
    /// ASCII case.
    pub fn text_contains(&self, term: &str) -> bool {
        let haystack = self.text.to_ascii_lowercase();
        let needle = term.to_ascii_lowercase();
        haystack.contains(&needle)
    }
}
