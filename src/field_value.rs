//! Shape-based view over raw payload values.
//!
//! Payload values arrive as arbitrary JSON. Rather than rejecting values of
//! the wrong type, every field is read through [`FieldValue`], which sorts a
//! value into one of four shapes and coerces each shape to text in a fixed,
//! total way.

use serde_json::Value as JsonValue;
use std::fmt;

/// Separator used when a list field is supplied as a single string.
pub const LIST_SEPARATOR: char = ';';

/// The closed set of shapes a raw payload value can take.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    /// Key absent, or explicitly `null`
    Null,
    /// A JSON string
    Text(&'a str),
    /// A JSON array
    List(&'a [JsonValue]),
    /// Anything else: numbers, booleans, nested objects
    Scalar(&'a JsonValue),
}

impl<'a> FieldValue<'a> {
    /// Classify an optional payload value.
    pub fn from_json(value: Option<&'a JsonValue>) -> Self {
        match value {
            None | Some(JsonValue::Null) => FieldValue::Null,
            Some(JsonValue::String(s)) => FieldValue::Text(s),
            Some(JsonValue::Array(items)) => FieldValue::List(items),
            Some(other) => FieldValue::Scalar(other),
        }
    }

    /// Coerce to a trimmed string. Never fails; `Null` becomes `""`.
    pub fn to_text(&self) -> String {
        self.to_string().trim().to_string()
    }

    /// Apply the list-normalization rule.
    ///
    /// - `Null` yields an empty list
    /// - arrays keep element order, each element coerced and trimmed
    /// - strings are split on `;`
    /// - any other scalar becomes a single-element list
    ///
    /// Items that are empty after trimming are dropped in every case.
    pub fn to_list(&self) -> Vec<String> {
        match self {
            FieldValue::Null => Vec::new(),
            FieldValue::Text(s) => s
                .split(LIST_SEPARATOR)
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .map(String::from)
                .collect(),
            FieldValue::List(items) => items
                .iter()
                .map(|item| FieldValue::from_json(Some(item)).to_text())
                .filter(|item| !item.is_empty())
                .collect(),
            FieldValue::Scalar(_) => {
                let text = self.to_text();
                if text.is_empty() {
                    Vec::new()
                } else {
                    vec![text]
                }
            }
        }
    }

    /// Short name of the shape, for diagnostics.
    pub fn shape_name(&self) -> &'static str {
        match self {
            FieldValue::Null => "null",
            FieldValue::Text(_) => "string",
            FieldValue::List(_) => "array",
            FieldValue::Scalar(JsonValue::Object(_)) => "object",
            FieldValue::Scalar(_) => "scalar",
        }
    }
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => Ok(()),
            FieldValue::Text(s) => write!(f, "{}", s),
            // Serializing already-parsed JSON values cannot fail
            FieldValue::List(items) => {
                write!(f, "{}", serde_json::to_string(items).unwrap_or_default())
            }
            FieldValue::Scalar(value) => write!(f, "{}", value),
        }
    }
}

/// Short name of a JSON value's type, as used in error messages.
pub fn json_type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
