use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures of the product form outside of field validation
#[derive(Debug, Error)]
pub enum FormError {
    #[error("no window object")]
    NoWindow,

    #[error("no document object")]
    NoDocument,

    #[error("required element `{0}` not found")]
    MissingAnchor(String),

    #[error("element `{selector}` is not {expected}")]
    WrongElement {
        selector: String,
        expected: &'static str,
    },

    #[error("failed to encode form body: {0}")]
    Encode(#[from] serde_qs::Error),

    #[error("DOM error: {0}")]
    Dom(String),

    #[error("fetch failed: {0}")]
    Fetch(String),
}

impl FormError {
    pub fn dom(err: JsValue) -> Self {
        FormError::Dom(format!("{err:?}"))
    }

    pub fn fetch(err: JsValue) -> Self {
        FormError::Fetch(format!("{err:?}"))
    }
}
