//! Markdown listing renderer.

use chrono::NaiveDate;

use super::{
    format_date, items_or_placeholder, title_or_placeholder, Renderer, COMPLIANCE_HEADING,
    COMPLIANCE_NOTES, FEATURES_PLACEHOLDER, HIGHLIGHTS_HEADING, LAST_UPDATED_LABEL,
    NOTES_HEADING, PACKAGE_HEADING, PACKAGE_PLACEHOLDER, SHIPPING_HEADING, SHIPPING_NOTES,
    SPECS_HEADING,
};
use crate::record::ProductRecord;

const TABLE_HEADER: &str = "| Field | Details |\n| --- | --- |";

/// Renders sections as bold headings, `-` bullets and a pipe table,
/// separated by blank lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render(&self, record: &ProductRecord, date: NaiveDate) -> String {
        let mut sections = vec![
            title(record),
            bullet_section(
                HIGHLIGHTS_HEADING,
                &items_or_placeholder(&record.features, FEATURES_PLACEHOLDER),
            ),
            bullet_section(
                PACKAGE_HEADING,
                &items_or_placeholder(&record.package_contents, PACKAGE_PLACEHOLDER),
            ),
            spec_table(record),
            bullet_section(SHIPPING_HEADING, &SHIPPING_NOTES),
            bullet_section(COMPLIANCE_HEADING, &COMPLIANCE_NOTES),
            last_updated(date),
        ];

        if let Some(notes) = notes(record) {
            sections.push(notes);
        }

        sections.join("\n\n")
    }

    fn name(&self) -> &'static str {
        "markdown"
    }
}

fn title(record: &ProductRecord) -> String {
    format!("# {}", title_or_placeholder(record))
}

fn heading(text: &str) -> String {
    format!("**{}**", text)
}

fn bullet_section(name: &str, items: &[&str]) -> String {
    let mut out = heading(name);
    for item in items {
        out.push_str("\n- ");
        out.push_str(item);
    }
    out
}

fn spec_table(record: &ProductRecord) -> String {
    let mut out = format!("{}\n{}", heading(SPECS_HEADING), TABLE_HEADER);
    for (label, value) in record.spec_rows() {
        out.push_str(&format!("\n| {} | {} |", label, value));
    }
    out
}

fn last_updated(date: NaiveDate) -> String {
    format!("{}: {}", heading(LAST_UPDATED_LABEL), format_date(date))
}

fn notes(record: &ProductRecord) -> Option<String> {
    record
        .has_notes()
        .then(|| format!("{}\n{}", heading(NOTES_HEADING), record.notes))
}
