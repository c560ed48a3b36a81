//! Payload loading.
//!
//! A payload is a JSON object exported from a wholesale listing. It is read
//! from a file when a path is given, otherwise from standard input.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use serde_json::Value as JsonValue;

use crate::error::{ListingError, Result};
use crate::field_value::json_type_name;

/// Untyped top-level payload object.
pub type RawPayload = serde_json::Map<String, JsonValue>;

/// Label used for standard input in diagnostics.
pub const STDIN_ORIGIN: &str = "<stdin>";

/// Load a payload from `source`, or from standard input when `source` is `None`.
///
/// # Errors
/// - [`ListingError::Io`] / [`ListingError::Stdin`] if the input cannot be read
/// - [`ListingError::MalformedPayload`] if it is not valid JSON
/// - [`ListingError::NotAnObject`] if the top level is not a JSON object
pub fn load(source: Option<&Path>) -> Result<RawPayload> {
    match source {
        Some(path) => load_from_file(path),
        None => load_from_reader(io::stdin().lock(), STDIN_ORIGIN),
    }
}

/// Load a payload from a file on disk.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<RawPayload> {
    let path = path.as_ref();

    let contents = fs::read_to_string(path).map_err(|source| ListingError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), bytes = contents.len(), "read payload file");

    parse_payload(&contents, &path.display().to_string())
}

/// Load a payload from any reader, e.g. standard input.
pub fn load_from_reader<R: Read>(mut reader: R, origin: &str) -> Result<RawPayload> {
    let mut contents = String::new();
    reader
        .read_to_string(&mut contents)
        .map_err(ListingError::Stdin)?;

    tracing::debug!(origin, bytes = contents.len(), "read payload stream");

    parse_payload(&contents, origin)
}

/// Parse payload text. `origin` only labels error messages.
pub fn parse_payload(contents: &str, origin: &str) -> Result<RawPayload> {
    let value: JsonValue =
        serde_json::from_str(contents).map_err(|source| ListingError::MalformedPayload {
            origin: origin.to_string(),
            source,
        })?;

    match value {
        JsonValue::Object(map) => Ok(map),
        other => Err(ListingError::NotAnObject {
            origin: origin.to_string(),
            found: json_type_name(&other),
        }),
    }
}
