//! Tests for the taint-origins table model and its HTML serialization.
//!
//! These run natively: every structural property of the rendered table
//! (row counts, header labels, cell content, link targets) is asserted
//! against the pure model, without a live document.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

use taintview::links::taint_link;
use taintview::origins::TaintOrigins;
use taintview::table::{TableModel, HEADERS, PANEL_ID, TABLE_CLASS, TABLE_ID};
use test_case::test_case;

// ============================================================================
// Model structure
// ============================================================================

#[test_case(0; "empty mapping")]
#[test_case(1; "single entry")]
#[test_case(7; "several entries")]
fn model_has_one_row_per_entry_plus_header(n: usize) {
    let origins = TaintOrigins::from_pairs(
        (0..n).map(|i| (format!("src/f{i}.py:{i}"), format!("taint-{i}"))),
    );
    let model = TableModel::from_origins(&origins);

    assert_eq!(model.rows.len(), n);
    assert_eq!(model.row_count(), n + 1);
}

#[test]
fn header_labels_in_column_order() {
    let model = TableModel::from_origins(&TaintOrigins::default());
    assert_eq!(model.headers, HEADERS);
    assert_eq!(model.headers[0], "Taint Origin");
    assert_eq!(model.headers[1], "Taint");
}

#[test]
fn rows_keep_entry_order_and_content() {
    let origins = TaintOrigins::from_pairs([
        ("src/a.py:10", "tainted-string"),
        ("src/b.py:3", "tainted-int"),
    ]);
    let model = TableModel::from_origins(&origins);

    assert_eq!(model.rows[0].origin, "src/a.py:10");
    assert_eq!(model.rows[0].taint, "tainted-string");
    assert_eq!(model.rows[1].origin, "src/b.py:3");
    assert_eq!(model.rows[1].taint, "tainted-int");
}

#[test]
fn row_links_come_from_the_link_helper() {
    let origins = TaintOrigins::from_pairs([("src/a.py:10", "tainted-string")]);
    let model = TableModel::from_origins(&origins);

    assert_eq!(model.rows[0].link, taint_link("src/a.py:10"));
    assert_eq!(model.rows[0].link, "taint?origin=src%2Fa%2Epy%3A10");
}

#[test]
fn panel_ids_match_the_page_contract() {
    // The page's CSS and the swap logic both key off these ids.
    assert_eq!(PANEL_ID, "prdata");
    assert_eq!(TABLE_ID, "datatable");
    assert_eq!(TABLE_CLASS, "balanced");
}

// ============================================================================
// HTML serialization
// ============================================================================

#[test]
fn html_empty_mapping_is_header_only() {
    let html = TableModel::from_origins(&TaintOrigins::default()).to_html();

    assert_eq!(html.matches("<tr>").count(), 1);
    assert_eq!(html.matches("<th>").count(), 2);
    assert!(!html.contains("<td>"));
}

#[test]
fn html_single_entry_payload() {
    let origins = TaintOrigins::from_json(r#"{"src/a.py:10": "tainted-string"}"#).unwrap();
    let html = TableModel::from_origins(&origins).to_html();

    assert!(html.starts_with(r#"<table id="datatable" class="balanced">"#));
    assert!(html.contains("<tr><th>Taint Origin</th><th>Taint</th></tr>"));
    assert!(html.contains(
        r#"<tr><td>src/a.py:10</td><td><a href="taint?origin=src%2Fa%2Epy%3A10">tainted-string</a></td></tr>"#
    ));
    assert_eq!(html.matches("<tr>").count(), 2);
}

#[test]
fn html_escapes_hostile_origin_and_taint_text() {
    let origins = TaintOrigins::from_pairs([("<img src=x>", "a\"b&c")]);
    let html = TableModel::from_origins(&origins).to_html();

    assert!(!html.contains("<img"));
    assert!(html.contains("&lt;img src=x&gt;"));
    assert!(html.contains("a&quot;b&amp;c"));
}

#[test]
fn html_row_order_follows_payload_order() {
    let origins =
        TaintOrigins::from_json(r#"{"z.py:9": "last?", "a.py:1": "first?"}"#).unwrap();
    let html = TableModel::from_origins(&origins).to_html();

    let z = html.find("z.py:9").unwrap();
    let a = html.find("a.py:1").unwrap();
    assert!(z < a, "rows must keep the payload's key order");
}
