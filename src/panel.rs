//! DOM layer: builds the panel's `<table>` element and swaps it into the
//! page.
//!
//! Compiled for wasm32 only. All table content comes from the pure
//! [`TableModel`](crate::table::TableModel); this module does nothing but
//! turn it into nodes.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlAnchorElement, HtmlDivElement};

use crate::error::{Result, TaintviewError};
use crate::table::{TableModel, PANEL_ID, TABLE_CLASS, TABLE_ID};

/// Build the detached `<table id="datatable" class="balanced">` element.
///
/// One header `<tr>` with both column labels, then one `<tr>` per model row:
/// a plain text cell for the origin and a hyperlinked cell for the taint.
/// The returned element is not attached to the document.
///
/// # Errors
/// Returns an error if a DOM node cannot be created.
pub fn build_table(document: &Document, model: &TableModel) -> Result<Element> {
    let table = create(document, "table")?;
    table.set_id(TABLE_ID);
    table
        .class_list()
        .add_1(TABLE_CLASS)
        .map_err(|e| TaintviewError::Dom(format!("set class: {e:?}")))?;

    let header_row = create(document, "tr")?;
    for label in model.headers {
        let th = create(document, "th")?;
        th.set_text_content(Some(label));
        append(&header_row, &th)?;
    }
    append(&table, &header_row)?;

    for row in &model.rows {
        let tr = create(document, "tr")?;

        let origin_cell = create(document, "td")?;
        origin_cell.set_text_content(Some(&row.origin));
        append(&tr, &origin_cell)?;

        let taint_cell = create(document, "td")?;
        let link: HtmlAnchorElement = create(document, "a")?
            .dyn_into()
            .map_err(|_| TaintviewError::Dom("<a> is not an anchor element".to_string()))?;
        link.set_href(&row.link);
        link.set_text_content(Some(&row.taint));
        append(&taint_cell, &link)?;
        append(&tr, &taint_cell)?;

        append(&table, &tr)?;
    }

    Ok(table)
}

/// Build the table for `model` and swap it into the page: the child
/// `old_node_id` of `container_id` is replaced by a fresh
/// `<div id="prdata">` wrapping the new table.
///
/// # Errors
/// Fails fast with [`TaintviewError::MissingElement`] when either id does
/// not resolve, and with [`TaintviewError::Dom`] when the replacement is
/// rejected (e.g. the old node is not a child of the container).
pub fn attach(
    document: &Document,
    model: &TableModel,
    container_id: &str,
    old_node_id: &str,
) -> Result<()> {
    let container = document
        .get_element_by_id(container_id)
        .ok_or_else(|| TaintviewError::MissingElement(container_id.to_string()))?;
    let old_node = document
        .get_element_by_id(old_node_id)
        .ok_or_else(|| TaintviewError::MissingElement(old_node_id.to_string()))?;

    let wrapper: HtmlDivElement = create(document, "div")?
        .dyn_into()
        .map_err(|_| TaintviewError::Dom("<div> is not a div element".to_string()))?;
    wrapper.set_id(PANEL_ID);

    let table = build_table(document, model)?;
    wrapper
        .append_child(&table)
        .map_err(|e| TaintviewError::Dom(format!("append table: {e:?}")))?;

    container
        .replace_child(&wrapper, &old_node)
        .map(|_| ())
        .map_err(|e| TaintviewError::Dom(format!("replace '{old_node_id}': {e:?}")))
}

fn create(document: &Document, tag: &str) -> Result<Element> {
    document
        .create_element(tag)
        .map_err(|e| TaintviewError::Dom(format!("create <{tag}>: {e:?}")))
}

fn append(parent: &Element, child: &Element) -> Result<()> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|e| TaintviewError::Dom(format!("append: {e:?}")))
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]
mod tests {
    use wasm_bindgen_test::wasm_bindgen_test;

    use super::*;
    use crate::origins::TaintOrigins;

    wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

    fn test_document() -> Document {
        web_sys::window().unwrap().document().unwrap()
    }

    fn sample_model() -> TableModel {
        TableModel::from_origins(&TaintOrigins::from_pairs([
            ("src/a.py:10", "tainted-string"),
            ("src/b.py:3", "tainted-int"),
        ]))
    }

    #[wasm_bindgen_test]
    fn build_table_renders_header_plus_rows() {
        let document = test_document();
        let table = build_table(&document, &sample_model()).unwrap();

        assert_eq!(table.id(), TABLE_ID);
        assert!(table.class_list().contains(TABLE_CLASS));

        let rows = table.query_selector_all("tr").unwrap();
        assert_eq!(rows.length(), 3);

        let headers = table.query_selector_all("th").unwrap();
        assert_eq!(headers.length(), 2);
        assert_eq!(
            headers.get(0).unwrap().text_content().unwrap(),
            "Taint Origin"
        );
        assert_eq!(headers.get(1).unwrap().text_content().unwrap(), "Taint");
    }

    #[wasm_bindgen_test]
    fn build_table_linkifies_taint_cells() {
        let document = test_document();
        let table = build_table(&document, &sample_model()).unwrap();

        let first_cell = table.query_selector("td").unwrap().unwrap();
        assert_eq!(first_cell.text_content().unwrap(), "src/a.py:10");

        let link = table.query_selector("td a").unwrap().unwrap();
        assert_eq!(link.text_content().unwrap(), "tainted-string");
        assert_eq!(
            link.get_attribute("href").unwrap(),
            "taint?origin=src%2Fa%2Epy%3A10"
        );
    }

    #[wasm_bindgen_test]
    fn build_table_empty_model_is_header_only() {
        let document = test_document();
        let model = TableModel::from_origins(&TaintOrigins::default());
        let table = build_table(&document, &model).unwrap();

        assert_eq!(table.query_selector_all("tr").unwrap().length(), 1);
        assert!(table.query_selector("td").unwrap().is_none());
    }

    #[wasm_bindgen_test]
    fn attach_swaps_old_node_for_panel_div() {
        let document = test_document();
        let body = document.body().unwrap();

        let container = document.create_element("div").unwrap();
        container.set_id("taint-container");
        let old = document.create_element("div").unwrap();
        old.set_id("stale-table");
        container.append_child(&old).unwrap();
        body.append_child(&container).unwrap();

        attach(&document, &sample_model(), "taint-container", "stale-table").unwrap();

        assert!(document.get_element_by_id("stale-table").is_none());
        let panel = document.get_element_by_id(PANEL_ID).unwrap();
        assert_eq!(panel.parent_element().unwrap().id(), "taint-container");
        let table = document.get_element_by_id(TABLE_ID).unwrap();
        assert_eq!(table.parent_element().unwrap().id(), PANEL_ID);

        body.remove_child(&container).unwrap();
    }

    #[wasm_bindgen_test]
    fn attach_fails_fast_on_missing_ids() {
        let document = test_document();
        let err = attach(&document, &sample_model(), "no-such-container", "whatever")
            .unwrap_err();
        assert!(err.to_string().contains("no-such-container"));
    }
}
