//! taintview - taint-origins panel for the web
//!
//! Renders static-analysis taint data in the browser via WebAssembly:
//! - Two-column table ("Taint Origin" / "Taint") built from a JSON payload
//! - Taint cells linkified to the server's taint detail page
//! - Rebuilt table swapped into the page panel in place
//!
//! The table itself is a pure model ([`TableModel`]) so headers, rows, and
//! link targets can be tested without a live document; only [`panel`]
//! touches the DOM.
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { attach_taint_origins } from 'taintview';
//! await init();
//! const response = await fetch('taintorigins').then(r => r.json());
//! attach_taint_origins(response, 'prdata', 'datatable');
//! ```

pub mod error;
pub mod links;
pub mod origins;
#[cfg(target_arch = "wasm32")]
pub mod panel;
pub mod table;

use wasm_bindgen::prelude::*;

pub use error::{Result, TaintviewError};
pub use origins::{OriginEntry, TaintOrigins};
pub use table::{TableModel, TableRow};

/// Render the taint-origins mapping as a detached table element.
///
/// `response` is a plain JS object mapping origin names to taint values.
/// The returned `<table>` is fully populated but not attached to the
/// document.
///
/// # Errors
/// Returns an error if the payload is not an object or a DOM node cannot
/// be created.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn render_taint_origins(response: JsValue) -> std::result::Result<web_sys::Element, JsValue> {
    console_error_panic_hook::set_once();

    let origins = TaintOrigins::from_js(&response)?;
    let model = TableModel::from_origins(&origins);
    Ok(panel::build_table(&document()?, &model)?)
}

/// Render the mapping and swap it into the page panel.
///
/// Replaces the child `old_node_id` of `container_id` with a new
/// `<div id="prdata">` wrapping the table. Empty ids fall back to the
/// standard panel ids (`"prdata"` / `"datatable"`).
///
/// # Errors
/// Returns an error if the payload is malformed or either id does not
/// resolve to an element.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn attach_taint_origins(
    response: JsValue,
    container_id: &str,
    old_node_id: &str,
) -> std::result::Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let origins = TaintOrigins::from_js(&response)?;
    let model = TableModel::from_origins(&origins);

    let container_id = non_empty_or(container_id, table::PANEL_ID);
    let old_node_id = non_empty_or(old_node_id, table::TABLE_ID);

    panel::attach(&document()?, &model, container_id, old_node_id)?;
    Ok(())
}

/// Decode the mapping and return the table model as a `JsValue`.
///
/// This is more convenient than the DOM entry points when the page renders
/// the rows itself.
///
/// # Errors
/// Returns an error if the payload is not an object.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn taint_table_model(response: JsValue) -> std::result::Result<JsValue, JsValue> {
    let origins = TaintOrigins::from_js(&response)?;
    let model = TableModel::from_origins(&origins);

    serde_wasm_bindgen::to_value(&model)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

#[cfg(target_arch = "wasm32")]
fn document() -> std::result::Result<web_sys::Document, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document available"))
}

#[cfg(target_arch = "wasm32")]
fn non_empty_or<'a>(id: &'a str, fallback: &'a str) -> &'a str {
    if id.is_empty() {
        fallback
    } else {
        id
    }
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
