//! The canonical product record shared by every renderer.

use serde::{Deserialize, Serialize};

/// Labels of the specifications table, in display order.
pub const SPEC_LABELS: [&str; 9] = [
    "Category",
    "Brand",
    "Model",
    "Material",
    "Size",
    "Colour",
    "Weight",
    "MOQ",
    "1688 Price Range",
];

/// Fully-defaulted product data.
///
/// Scalar fields are trimmed strings, empty when the source had nothing.
/// List fields hold only non-empty, trimmed items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub title: String,
    pub category: String,
    pub brand: String,
    pub model: String,
    pub material: String,
    pub size: String,
    pub color: String,
    pub weight: String,
    pub features: Vec<String>,
    pub package_contents: Vec<String>,
    /// Minimum order quantity
    pub moq: String,
    pub price_range: String,
    /// Image URLs. Carried through but not rendered.
    pub images: Vec<String>,
    /// Free-text supplier note
    pub notes: String,
}

impl ProductRecord {
    pub fn builder() -> ProductRecordBuilder {
        ProductRecordBuilder::default()
    }

    /// Specification rows that have a value, in table order.
    pub fn spec_rows(&self) -> Vec<(&'static str, &str)> {
        let values = [
            &self.category,
            &self.brand,
            &self.model,
            &self.material,
            &self.size,
            &self.color,
            &self.weight,
            &self.moq,
            &self.price_range,
        ];

        SPEC_LABELS
            .into_iter()
            .zip(values)
            .filter(|(_, value)| !value.is_empty())
            .map(|(label, value)| (label, value.as_str()))
            .collect()
    }

    pub fn has_notes(&self) -> bool {
        !self.notes.is_empty()
    }
}

/// Builder that applies the same trimming rules as normalization.
#[derive(Debug, Clone, Default)]
pub struct ProductRecordBuilder {
    record: ProductRecord,
}

macro_rules! text_setter {
    ($($name:ident),* $(,)?) => {
        $(
            pub fn $name(mut self, value: impl AsRef<str>) -> Self {
                self.record.$name = value.as_ref().trim().to_string();
                self
            }
        )*
    };
}

macro_rules! list_setter {
    ($($name:ident),* $(,)?) => {
        $(
            pub fn $name<I, S>(mut self, items: I) -> Self
            where
                I: IntoIterator<Item = S>,
                S: AsRef<str>,
            {
                self.record.$name = clean_items(items);
                self
            }
        )*
    };
}

impl ProductRecordBuilder {
    text_setter!(
        title, category, brand, model, material, size, color, weight, moq, price_range, notes,
    );

    list_setter!(features, package_contents, images);

    pub fn build(self) -> ProductRecord {
        self.record
    }
}

fn clean_items<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .map(|item| item.as_ref().trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}
