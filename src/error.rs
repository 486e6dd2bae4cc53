use thiserror::Error;

use crate::decode::DecodeError;

/// The main error type for ocrmatch operations.
#[derive(Debug, Error)]
pub enum OcrMatchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to decode recognition payload: {source} (payload: {})", snippet(.payload))]
    PayloadDecode {
        /// The full offending payload, kept intact for diagnostics.
        /// The Display form shows a truncated snippet of it.
        payload: String,
        #[source]
        source: DecodeError,
    },

    #[error("failed to launch '{program}': {source}")]
    CommandSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("command exited with status {status}: {stderr}")]
    CommandFailed { status: i32, stderr: String },

    #[error("window activation failed for title '{title}'")]
    WindowActivation { title: String },

    #[error("click dispatch failed at ({x}, {y})")]
    ClickDispatch { x: i32, y: i32 },

    #[error("failed to render records as JSON: {0}")]
    RecordsToJson(#[from] serde_json::Error),

    #[error("no matches found for '{term}'")]
    NoMatches { term: String },

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

fn snippet(payload: &str) -> String {
    const MAX_CHARS: usize = 120;
    let trimmed = payload.trim();
    if trimmed.chars().count() <= MAX_CHARS {
        return trimmed.to_string();
    }
    let head: String = trimmed.chars().take(MAX_CHARS).collect();
    format!("{head}...")
}
