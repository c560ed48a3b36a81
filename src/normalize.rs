//! Raw payload to canonical record.

use crate::field_value::FieldValue;
use crate::payload::RawPayload;
use crate::record::ProductRecord;

/// Payload keys read into the record. Everything else is ignored.
pub const RECOGNIZED_KEYS: [&str; 14] = [
    "title",
    "category",
    "brand",
    "model",
    "material",
    "size",
    "color",
    "weight",
    "features",
    "package_contents",
    "moq",
    "price_range",
    "images",
    "notes",
];

/// Build a [`ProductRecord`] from a raw payload.
///
/// Total: missing keys default to empty, and values of unexpected type are
/// coerced to text instead of being rejected.
pub fn normalize(payload: &RawPayload) -> ProductRecord {
    let field = |key: &str| FieldValue::from_json(payload.get(key));
    let text = |key: &str| field(key).to_text();
    let list = |key: &str| field(key).to_list();

    for key in payload.keys() {
        if !RECOGNIZED_KEYS.contains(&key.as_str()) {
            tracing::debug!(key = %key, "ignoring unrecognized payload key");
        }
    }

    let record = ProductRecord {
        title: text("title"),
        category: text("category"),
        brand: text("brand"),
        model: text("model"),
        material: text("material"),
        size: text("size"),
        color: text("color"),
        weight: text("weight"),
        features: list("features"),
        package_contents: list("package_contents"),
        moq: text("moq"),
        price_range: text("price_range"),
        images: list("images"),
        notes: text("notes"),
    };

    tracing::debug!(
        features = record.features.len(),
        package_contents = record.package_contents.len(),
        images = record.images.len(),
        "normalized product record"
    );

    record
}
