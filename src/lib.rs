//! # listgen: wholesale product data to retail listing descriptions
//!
//! listgen takes a product record exported from a 1688 wholesale listing (a
//! JSON object) and renders an eBay UK item description from it.
//!
//! The pipeline is linear:
//!
//! - **Load**: read the JSON payload from a file or standard input ([`payload`])
//! - **Normalize**: coerce the untyped payload into a [`ProductRecord`] ([`normalize()`])
//! - **Render**: produce Markdown or HTML from the record ([`render`])
//!
//! ## Example
//!
//! ```
//! use listgen::{normalize, parse_payload, render_on, OutputFormat};
//!
//! let payload = parse_payload(
//!     r#"{"title": "Steel Water Bottle", "features": "Leak-proof; 500ml"}"#,
//!     "example",
//! ).unwrap();
//! let record = normalize(&payload);
//! let date = chrono::NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
//!
//! let listing = render_on(&record, OutputFormat::Markdown, date);
//! assert!(listing.starts_with("# Steel Water Bottle"));
//! assert!(listing.contains("- 500ml"));
//! ```

pub mod error;
pub mod field_value;
pub mod normalize;
pub mod payload;
pub mod record;
pub mod render;

// Re-export key types
pub use error::{ListingError, Result};
pub use field_value::FieldValue;
pub use normalize::normalize;
pub use payload::{load, load_from_file, load_from_reader, parse_payload, RawPayload};
pub use record::{ProductRecord, ProductRecordBuilder};
pub use render::{render, render_on, HtmlRenderer, MarkdownRenderer, OutputFormat, Renderer};
