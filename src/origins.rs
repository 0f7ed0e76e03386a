//! Taint-origins payload decoding.
//!
//! The analysis server responds with a JSON object mapping a taint origin
//! (a source location such as `src/a.py:10`) to the taint value tracked from
//! it. The payload's key order is kept, so the rendered table is
//! deterministic regardless of the host's map iteration semantics.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One origin → taint pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OriginEntry {
    /// Source location the taint originates from.
    pub origin: String,
    /// Display form of the tracked taint value.
    pub taint: String,
}

/// Ordered taint-origin entries, as supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaintOrigins {
    pub entries: Vec<OriginEntry>,
}

impl TaintOrigins {
    /// Construct from ordered `(origin, taint)` pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        TaintOrigins {
            entries: pairs
                .into_iter()
                .map(|(origin, taint)| OriginEntry {
                    origin: origin.into(),
                    taint: taint.into(),
                })
                .collect(),
        }
    }

    /// Decode a JSON object payload (`{"origin": taint, ...}`).
    ///
    /// Non-string taint values keep their JSON display form. An empty object
    /// is valid and yields no entries.
    ///
    /// # Errors
    /// Returns an error if the payload is not a JSON object.
    pub fn from_json(json: &str) -> Result<Self> {
        let map: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json)?;
        Ok(TaintOrigins {
            entries: map
                .into_iter()
                .map(|(origin, value)| OriginEntry {
                    origin,
                    taint: json_display(&value),
                })
                .collect(),
        })
    }

    /// Decode a plain JS object in property insertion order (the order
    /// `Object.entries` reports).
    ///
    /// # Errors
    /// Returns an error if the value is not an object.
    #[cfg(target_arch = "wasm32")]
    pub fn from_js(value: &wasm_bindgen::JsValue) -> Result<Self> {
        use wasm_bindgen::JsCast;

        use crate::error::TaintviewError;

        let object = value
            .dyn_ref::<js_sys::Object>()
            .ok_or_else(|| TaintviewError::Input("expected a plain object".to_string()))?;

        let mut entries = Vec::new();
        for pair in js_sys::Object::entries(object).iter() {
            let pair = js_sys::Array::from(&pair);
            let origin = pair.get(0).as_string().unwrap_or_default();
            let taint_value = pair.get(1);
            let taint = match taint_value.as_string() {
                Some(s) => s,
                None => js_sys::JSON::stringify(&taint_value)
                    .ok()
                    .and_then(|s| s.as_string())
                    .unwrap_or_default(),
            };
            entries.push(OriginEntry { origin, taint });
        }
        Ok(TaintOrigins { entries })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &OriginEntry> {
        self.entries.iter()
    }
}

/// Display form of a JSON taint value: strings unquoted, everything else as
/// its JSON text.
fn json_display(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
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
    fn test_from_json_keeps_payload_order() {
        let origins =
            TaintOrigins::from_json(r#"{"z.py:9": "b", "a.py:1": "a", "m.py:5": "c"}"#).unwrap();
        let keys: Vec<&str> = origins.iter().map(|e| e.origin.as_str()).collect();
        assert_eq!(keys, vec!["z.py:9", "a.py:1", "m.py:5"]);
    }

    #[test]
    fn test_from_json_empty_object() {
        let origins = TaintOrigins::from_json("{}").unwrap();
        assert!(origins.is_empty());
    }

    #[test]
    fn test_from_json_non_string_values() {
        let origins = TaintOrigins::from_json(r#"{"a.py:1": 42, "b.py:2": null}"#).unwrap();
        assert_eq!(origins.entries[0].taint, "42");
        assert_eq!(origins.entries[1].taint, "null");
    }

    #[test]
    fn test_from_json_rejects_non_object() {
        assert!(TaintOrigins::from_json("[1, 2]").is_err());
        assert!(TaintOrigins::from_json("not json").is_err());
    }

    #[test]
    fn test_from_pairs() {
        let origins = TaintOrigins::from_pairs([("src/a.py:10", "tainted-string")]);
        assert_eq!(origins.len(), 1);
        assert_eq!(origins.entries[0].origin, "src/a.py:10");
        assert_eq!(origins.entries[0].taint, "tainted-string");
    }
}
