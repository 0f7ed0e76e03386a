//! Table model for the taint-origins panel.
//!
//! Pure description of the rendered table, so row and header expectations
//! can be asserted without a live document. The DOM layer in
//! [`crate::panel`] and the CLI's HTML writer both consume this model.

use serde::Serialize;

use crate::links::taint_link;
use crate::origins::TaintOrigins;

/// id of the rendered `<table>` element.
pub const TABLE_ID: &str = "datatable";

/// id of the `<div>` wrapper swapped into the page.
pub const PANEL_ID: &str = "prdata";

/// Layout class carried by the table; styled by the page's CSS.
pub const TABLE_CLASS: &str = "balanced";

/// Header labels, in column order.
pub const HEADERS: [&str; 2] = ["Taint Origin", "Taint"];

/// One data row: origin text, taint text, derived link target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub origin: String,
    pub taint: String,
    /// Target of the hyperlink wrapping the taint cell.
    pub link: String,
}

/// The table to render: header labels plus one data row per origin entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableModel {
    pub headers: [&'static str; 2],
    pub rows: Vec<TableRow>,
}

impl TableModel {
    /// Build the model in entry order.
    #[must_use]
    pub fn from_origins(origins: &TaintOrigins) -> Self {
        TableModel {
            headers: HEADERS,
            rows: origins
                .iter()
                .map(|entry| TableRow {
                    origin: entry.origin.clone(),
                    taint: entry.taint.clone(),
                    link: taint_link(&entry.origin),
                })
                .collect(),
        }
    }

    /// Total `<tr>` count, including the header row.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len() + 1
    }

    /// Serialize as an HTML fragment.
    ///
    /// This is the native render path (CLI, tests). Text and attribute
    /// content is escaped the way `textContent` neutralizes it in the DOM.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            r#"<table id="{TABLE_ID}" class="{TABLE_CLASS}">"#
        ));

        out.push_str("<tr>");
        for label in self.headers {
            out.push_str(&format!("<th>{}</th>", html_escape(label)));
        }
        out.push_str("</tr>");

        for row in &self.rows {
            out.push_str("<tr>");
            out.push_str(&format!("<td>{}</td>", html_escape(&row.origin)));
            out.push_str(&format!(
                r#"<td><a href="{}">{}</a></td>"#,
                html_escape(&row.link),
                html_escape(&row.taint)
            ));
            out.push_str("</tr>");
        }

        out.push_str("</table>");
        out
    }
}

/// Minimal HTML escaping for text and attribute content.
fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape_neutralizes_markup() {
        assert_eq!(
            html_escape(r#"<script>"x"&'y'</script>"#),
            "&lt;script&gt;&quot;x&quot;&amp;&#39;y&#39;&lt;/script&gt;"
        );
    }

    #[test]
    fn test_html_escape_passthrough() {
        assert_eq!(html_escape("src/a.py:10"), "src/a.py:10");
    }
}
