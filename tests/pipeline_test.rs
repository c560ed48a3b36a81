//! Integration tests for the load -> normalize -> render pipeline

use chrono::NaiveDate;
use listgen::{normalize, parse_payload, render_on, OutputFormat, ProductRecord};
use std::collections::BTreeSet;
use std::io::Write;

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
}

fn record_from(json: &str) -> ProductRecord {
    let payload = parse_payload(json, "test").expect("Failed to parse payload");
    normalize(&payload)
}

/// Every field value of the record that a renderer is expected to show
fn rendered_values(record: &ProductRecord) -> BTreeSet<String> {
    let mut values: BTreeSet<String> = record
        .spec_rows()
        .into_iter()
        .map(|(_, value)| value.to_string())
        .collect();
    values.insert(record.title.clone());
    values.extend(record.features.iter().cloned());
    values.extend(record.package_contents.iter().cloned());
    if record.has_notes() {
        values.insert(record.notes.clone());
    }
    values.remove("");
    values
}

#[test]
fn test_end_to_end_markdown_example() {
    let record = record_from(
        r#"{"title":"Steel Water Bottle","brand":"Acme","features":["Leak-proof","500ml"],"moq":"100 pcs"}"#,
    );
    let output = render_on(&record, OutputFormat::Markdown, date());
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines[0], "# Steel Water Bottle");
    assert!(lines.contains(&"- Leak-proof"));
    assert!(lines.contains(&"- 500ml"));
    assert!(lines.contains(&"| Brand | Acme |"));
    assert!(lines.contains(&"| MOQ | 100 pcs |"));
    assert!(lines.contains(&"- 1 x Item as described"));
    assert!(lines.contains(&"**Last updated**: 2025-06-01"));
}

#[test]
fn test_empty_payload_placeholders() {
    let record = record_from("{}");

    for format in [OutputFormat::Markdown, OutputFormat::Html] {
        let output = render_on(&record, format, date());

        assert!(output.contains("Product Title"), "{} title placeholder", format);
        assert!(output.contains("Please see item specifics."), "{} features placeholder", format);
        assert!(output.contains("1 x Item as described"), "{} package placeholder", format);
        assert!(!output.contains("Notes from supplier"), "{} notes absent", format);
    }

    let markdown = render_on(&record, OutputFormat::Markdown, date());
    assert!(!markdown.lines().any(|line| line.starts_with("| ") && !line.starts_with("| Field") && !line.starts_with("| ---")));

    let html = render_on(&record, OutputFormat::Html, date());
    assert!(!html.contains("<tr>"));
}

#[test]
fn test_single_spec_row_both_formats() {
    let record = record_from(r#"{"brand": "Acme"}"#);

    let markdown = render_on(&record, OutputFormat::Markdown, date());
    let rows: Vec<&str> = markdown
        .lines()
        .filter(|line| line.starts_with("| ") && *line != "| Field | Details |" && *line != "| --- | --- |")
        .collect();
    assert_eq!(rows, vec!["| Brand | Acme |"]);

    let html = render_on(&record, OutputFormat::Html, date());
    assert_eq!(html.matches("<tr>").count(), 1);
    assert!(html.contains("<tr><th>Brand</th><td>Acme</td></tr>"));
}

#[test]
fn test_spec_row_order_is_fixed() {
    let record = record_from(
        r#"{"price_range": "¥3-¥5", "weight": "1kg", "category": "Kitchen", "color": "Black"}"#,
    );
    let markdown = render_on(&record, OutputFormat::Markdown, date());

    let positions: Vec<usize> = ["| Category |", "| Colour |", "| Weight |", "| 1688 Price Range |"]
        .iter()
        .map(|row| markdown.find(row).expect("row missing"))
        .collect();

    let mut sorted = positions.clone();
    sorted.sort();
    assert_eq!(positions, sorted);
}

#[test]
fn test_formats_are_content_equivalent() {
    let record = record_from(
        r#"{
            "title": "Bamboo Cutting Board",
            "category": "Kitchen",
            "brand": "Acme",
            "material": "Bamboo",
            "size": "30 x 20 cm",
            "features": "Knife-friendly; Easy to clean",
            "package_contents": ["1 x Board", "1 x Hanging strap"],
            "moq": 50,
            "price_range": "¥12-¥15",
            "notes": "Laser engraving available"
        }"#,
    );

    let markdown = render_on(&record, OutputFormat::Markdown, date());
    let html = render_on(&record, OutputFormat::Html, date());

    for value in rendered_values(&record) {
        assert!(markdown.contains(&value), "markdown missing {}", value);
        assert!(html.contains(&value), "html missing {}", value);
    }
}

#[test]
fn test_notes_conditionality() {
    let with_notes = record_from(r#"{"notes": "  Custom logo on request  "}"#);
    let without_notes = record_from(r#"{"notes": "   "}"#);

    for format in [OutputFormat::Markdown, OutputFormat::Html] {
        let output = render_on(&with_notes, format, date());
        assert!(output.contains("Notes from supplier"));
        assert!(output.contains("Custom logo on request"));

        let output = render_on(&without_notes, format, date());
        assert!(!output.contains("Notes from supplier"));
    }
}

#[test]
fn test_wrong_types_never_abort() {
    let record = record_from(
        r#"{
            "title": 12345,
            "brand": null,
            "features": {"not": "a list"},
            "package_contents": false,
            "images": [1, "", "  https://img.example/a.jpg "],
            "notes": ["a", "b"]
        }"#,
    );

    assert_eq!(record.title, "12345");
    assert_eq!(record.brand, "");
    assert_eq!(record.features, vec!["{\"not\":\"a list\"}"]);
    assert_eq!(record.package_contents, vec!["false"]);
    assert_eq!(record.images, vec!["1", "https://img.example/a.jpg"]);
    assert_eq!(record.notes, "[\"a\",\"b\"]");
}

#[test]
fn test_load_from_disk() {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    write!(file, r#"{{"title": "Desk Lamp", "features": "LED; USB powered"}}"#).unwrap();

    let payload = listgen::load(Some(file.path())).expect("Failed to load payload");
    let record = normalize(&payload);

    assert_eq!(record.title, "Desk Lamp");
    assert_eq!(record.features, vec!["LED", "USB powered"]);
}
