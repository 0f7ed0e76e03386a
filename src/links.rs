//! Taint-link derivation.
//!
//! Each taint value in the panel links to the server's taint detail page for
//! its origin. The origin name goes into the query string, percent-encoded
//! so path-like origins (`src/a.py:10`) survive the round trip.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

/// Path of the taint detail page, relative to the panel's page.
pub const TAINT_DETAIL_PATH: &str = "taint";

/// Derive the detail-page URL for a taint origin.
#[must_use]
pub fn taint_link(origin: &str) -> String {
    let encoded = utf8_percent_encode(origin, NON_ALPHANUMERIC).to_string();
    format!("{TAINT_DETAIL_PATH}?origin={encoded}")
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("main", "taint?origin=main"; "plain identifier")]
    #[test_case("src/a.py:10", "taint?origin=src%2Fa%2Epy%3A10"; "path with line")]
    #[test_case("", "taint?origin="; "empty origin")]
    fn test_taint_link(origin: &str, expected: &str) {
        assert_eq!(taint_link(origin), expected);
    }

    #[test]
    fn test_taint_link_escapes_query_metacharacters() {
        let link = taint_link("a&b=c");
        assert!(!link.contains('&'));
        assert!(!link.contains("=c"));
    }
}
