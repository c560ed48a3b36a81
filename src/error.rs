//! Error types for loading payloads and selecting output formats.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for the listing pipeline.
///
/// Only loading and configuration can fail. Normalization and rendering
/// are total and never produce one of these.
#[derive(Debug, Error)]
pub enum ListingError {
    /// Input file could not be opened or read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Input stream (usually standard input) could not be read
    #[error("failed to read standard input: {0}")]
    Stdin(#[source] io::Error),

    /// Input is not valid JSON
    #[error("malformed payload from {origin}: {source}")]
    MalformedPayload {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    /// Input is valid JSON but the top level is not an object
    #[error("malformed payload from {origin}: expected a JSON object, found {found}")]
    NotAnObject { origin: String, found: &'static str },

    /// Rendered document could not be written out
    #[error("failed to write output: {0}")]
    Output(#[source] io::Error),

    /// Unrecognized output format name
    #[error("unsupported output format '{0}' (expected 'markdown' or 'html')")]
    InvalidFormat(String),
}

impl ListingError {
    /// True for errors caused by bad invocation rather than bad input.
    pub fn is_usage_error(&self) -> bool {
        matches!(self, ListingError::InvalidFormat(_))
    }

    /// True when the input was read but could not be understood.
    pub fn is_malformed_payload(&self) -> bool {
        matches!(
            self,
            ListingError::MalformedPayload { .. } | ListingError::NotAnObject { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ListingError>;
