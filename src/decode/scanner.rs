//! Top-level object segmentation for raw recognition payloads.
//!
//! The scanner is the first half of the decode pipeline: it walks the
//! payload once and yields each top-level `{...}` span in input order,
//! without validating anything inside a span beyond brace and quote
//! tracking. Braces, brackets, and commas inside quoted string values
//! never affect segmentation.
//!
//! Imbalance is a hard failure: a stray `}`, a string or object still
//! open at end of input, and an array without its closing `]` all stop
//! the scan with a [`DecodeError`] instead of emitting a truncated tail.

use super::DecodeError;

/// Iterator over the raw top-level object spans of one payload.
///
/// Yields `Ok(span)` per object, inclusive of its outer braces, or a
/// single `Err` after which iteration ends. Error offsets are byte
/// positions within the scanned content (the payload with any outer
/// array brackets stripped).
pub(crate) struct ObjectSpans<'a> {
    content: &'a str,
    pos: usize,
    pending: Option<DecodeError>,
    done: bool,
}

impl<'a> ObjectSpans<'a> {
    /// Classifies the payload and prepares the scan.
    ///
    /// Empty or whitespace-only input and the literal markers `null` and
    /// `[]` produce an empty iterator. An array payload is scanned with
    /// its outer brackets stripped; a bare object payload is scanned
    /// whole. Anything else fails on the first `next()` call.
    pub(crate) fn new(payload: &'a str) -> Self {
        let trimmed = payload.trim();

        if trimmed.is_empty() || trimmed == "null" || trimmed == "[]" {
            return Self::exhausted();
        }

        if let Some(rest) = trimmed.strip_prefix('[') {
            return match rest.strip_suffix(']') {
                Some(inner) => Self::over(inner),
                None => Self::failed(DecodeError::UnterminatedArray),
            };
        }

        if trimmed.starts_with('{') {
            return Self::over(trimmed);
        }

        Self::failed(DecodeError::UnrecognizedPayload)
    }

    fn over(content: &'a str) -> Self {
        Self {
            content,
            pos: 0,
            pending: None,
            done: false,
        }
    }

    fn exhausted() -> Self {
        Self {
            content: "",
            pos: 0,
            pending: None,
            done: true,
        }
    }

    fn failed(err: DecodeError) -> Self {
        Self {
            content: "",
            pos: 0,
            pending: Some(err),
            done: false,
        }
    }
}

impl<'a> Iterator for ObjectSpans<'a> {
    type Item = Result<&'a str, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if let Some(err) = self.pending.take() {
            self.done = true;
            return Some(Err(err));
        }

        // The cursor always rests at depth zero outside any string, so
        // the scan state can be rebuilt locally on each call.
        let bytes = self.content.as_bytes();
        let mut in_string = false;
        let mut escape_next = false;
        let mut string_open = 0usize;
        let mut depth = 0usize;
        let mut start = 0usize;

        while self.pos < bytes.len() {
            let at = self.pos;
            let b = bytes[at];
            self.pos += 1;

            if in_string {
                if escape_next {
                    escape_next = false;
                } else if b == b'\\' {
                    escape_next = true;
                } else if b == b'"' {
                    in_string = false;
                }
                continue;
            }

            match b {
                b'"' => {
                    in_string = true;
                    string_open = at;
                }
                b'{' => {
                    if depth == 0 {
                        start = at;
                    }
                    depth += 1;
                }
                b'}' => {
                    if depth == 0 {
                        self.done = true;
                        return Some(Err(DecodeError::UnbalancedBraces { offset: at }));
                    }
                    depth -= 1;
                    if depth == 0 {
                        let span = &self.content[start..self.pos];
                        while self.pos < bytes.len()
                            && (bytes[self.pos] == b',' || bytes[self.pos].is_ascii_whitespace())
                        {
                            self.pos += 1;
                        }
                        return Some(Ok(span));
                    }
                }
                // Other characters at depth zero are inter-object noise
                // and carry no structure.
                _ => {}
            }
        }

        self.done = true;
        if in_string {
            return Some(Err(DecodeError::UnterminatedString {
                offset: string_open,
            }));
        }
        if depth > 0 {
            return Some(Err(DecodeError::UnbalancedBraces { offset: start }));
        }
        None
    }
}
