//! Listing description renderers.
//!
//! Both renderers follow the same content plan, section by section:
//!
//! 1. title heading
//! 2. highlights (features)
//! 3. package contents
//! 4. specifications table (only rows with a value)
//! 5. shipping & returns boilerplate
//! 6. compliance reminder
//! 7. last-updated date
//! 8. supplier notes, only when present
//!
//! They differ only in surface syntax. Field content is interpolated as-is;
//! nothing is escaped.

pub mod html;
pub mod markdown;

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::error::ListingError;
use crate::record::ProductRecord;

pub use html::HtmlRenderer;
pub use markdown::MarkdownRenderer;

pub const TITLE_PLACEHOLDER: &str = "Product Title";
pub const FEATURES_PLACEHOLDER: &str = "Please see item specifics.";
pub const PACKAGE_PLACEHOLDER: &str = "1 x Item as described";

pub const HIGHLIGHTS_HEADING: &str = "UK-friendly highlights";
pub const PACKAGE_HEADING: &str = "What you get";
pub const SPECS_HEADING: &str = "Specifications";
pub const SHIPPING_HEADING: &str = "Shipping & Returns";
pub const COMPLIANCE_HEADING: &str = "Compliance reminder";
pub const NOTES_HEADING: &str = "Notes from supplier";
pub const LAST_UPDATED_LABEL: &str = "Last updated";

pub const SHIPPING_NOTES: [&str; 3] = [
    "UK dispatch location: Please update with your fulfilment address.",
    "Handling time: Update based on your stock availability.",
    "Returns accepted within 30 days (buyer pays return postage unless item is faulty).",
];

pub const COMPLIANCE_NOTES: [&str; 1] =
    ["Ensure the item meets UK regulations and include any required safety markings."];

/// `YYYY-MM-DD`
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Output format of the listing description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Markdown,
    Html,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Markdown => "markdown",
            OutputFormat::Html => "html",
        }
    }

    pub fn renderer(&self) -> &'static dyn Renderer {
        match self {
            OutputFormat::Markdown => &MarkdownRenderer,
            OutputFormat::Html => &HtmlRenderer,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = ListingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "markdown" => Ok(OutputFormat::Markdown),
            "html" => Ok(OutputFormat::Html),
            _ => Err(ListingError::InvalidFormat(s.to_string())),
        }
    }
}

/// Turns a product record into a complete description document.
pub trait Renderer: Send + Sync {
    /// Render `record`, stamping `date` as the last-updated date.
    ///
    /// The returned document has no trailing newline.
    fn render(&self, record: &ProductRecord, date: NaiveDate) -> String;

    /// Format name, for diagnostics
    fn name(&self) -> &'static str;
}

/// Render `record` in `format`, dated today.
pub fn render(record: &ProductRecord, format: OutputFormat) -> String {
    render_on(record, format, today())
}

/// Render `record` in `format` with an explicit last-updated date.
pub fn render_on(record: &ProductRecord, format: OutputFormat, date: NaiveDate) -> String {
    let renderer = format.renderer();
    tracing::debug!(
        renderer = renderer.name(),
        spec_rows = record.spec_rows().len(),
        notes = record.has_notes(),
        "rendering listing"
    );
    renderer.render(record, date)
}

/// Current local calendar date.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub(crate) fn title_or_placeholder(record: &ProductRecord) -> &str {
    if record.title.is_empty() {
        TITLE_PLACEHOLDER
    } else {
        &record.title
    }
}

/// Items to list, or the single placeholder item when there are none.
pub(crate) fn items_or_placeholder<'a>(items: &'a [String], placeholder: &'a str) -> Vec<&'a str> {
    let items: Vec<&str> = items
        .iter()
        .map(String::as_str)
        .filter(|item| !item.is_empty())
        .collect();

    if items.is_empty() {
        vec![placeholder]
    } else {
        items
    }
}

pub(crate) fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
