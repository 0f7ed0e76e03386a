//! Structured error types for taintview.

/// All errors that can occur while decoding taint data or building the panel.
#[derive(Debug, thiserror::Error)]
pub enum TaintviewError {
    /// Malformed taint-origins payload.
    #[error("Invalid taint payload: {0}")]
    Input(String),

    /// A DOM id did not resolve to an element.
    #[error("No element with id '{0}' in the document")]
    MissingElement(String),

    /// DOM node construction or cast failure.
    #[error("DOM error: {0}")]
    Dom(String),

    /// Catch-all for string errors.
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TaintviewError>;

impl From<String> for TaintviewError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for TaintviewError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

impl From<serde_json::Error> for TaintviewError {
    fn from(e: serde_json::Error) -> Self {
        Self::Input(e.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<TaintviewError> for wasm_bindgen::JsValue {
    fn from(e: TaintviewError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
