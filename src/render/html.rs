//! HTML listing renderer.
//!
//! Produces a fragment suitable for pasting into a listing description
//! editor, not a standalone page.

use chrono::NaiveDate;

use super::{
    format_date, items_or_placeholder, title_or_placeholder, Renderer, COMPLIANCE_HEADING,
    COMPLIANCE_NOTES, FEATURES_PLACEHOLDER, HIGHLIGHTS_HEADING, LAST_UPDATED_LABEL,
    NOTES_HEADING, PACKAGE_HEADING, PACKAGE_PLACEHOLDER, SHIPPING_HEADING, SHIPPING_NOTES,
    SPECS_HEADING,
};
use crate::record::ProductRecord;

/// Renders sections as `<h3>` headings, `<ul>` lists and a `<table>` with
/// one `<th>` label per row.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn render(&self, record: &ProductRecord, date: NaiveDate) -> String {
        let mut sections = vec![
            format!("<h1>{}</h1>", title_or_placeholder(record)),
            inline_list(
                HIGHLIGHTS_HEADING,
                &items_or_placeholder(&record.features, FEATURES_PLACEHOLDER),
            ),
            inline_list(
                PACKAGE_HEADING,
                &items_or_placeholder(&record.package_contents, PACKAGE_PLACEHOLDER),
            ),
            spec_table(record),
            block_list(SHIPPING_HEADING, &SHIPPING_NOTES),
            block_list(COMPLIANCE_HEADING, &COMPLIANCE_NOTES),
            format!(
                "<p><strong>{}</strong>: {}</p>",
                LAST_UPDATED_LABEL,
                format_date(date)
            ),
        ];

        if record.has_notes() {
            sections.push(format!("{}<p>{}</p>", heading(NOTES_HEADING), record.notes));
        }

        sections.join("\n")
    }

    fn name(&self) -> &'static str {
        "html"
    }
}

/// Headings are fixed text, so escaping them keeps `&` valid markup.
fn heading(text: &str) -> String {
    format!("<h3>{}</h3>", text.replace('&', "&amp;"))
}

/// List of record data, items on a single line.
fn inline_list(name: &str, items: &[&str]) -> String {
    let items: String = items.iter().map(|item| format!("<li>{}</li>", item)).collect();
    format!("{}\n<ul>{}</ul>", heading(name), items)
}

/// List of boilerplate, one item per line.
fn block_list(name: &str, items: &[&str]) -> String {
    let mut out = format!("{}\n<ul>", heading(name));
    for item in items {
        out.push_str(&format!("\n  <li>{}</li>", item));
    }
    out.push_str("\n</ul>");
    out
}

fn spec_table(record: &ProductRecord) -> String {
    let mut out = format!("{}\n<table>", heading(SPECS_HEADING));
    for (label, value) in record.spec_rows() {
        out.push_str(&format!("\n<tr><th>{}</th><td>{}</td></tr>", label, value));
    }
    out.push_str("\n</table>");
    out
}
