//! Errors raised while attaching to the host page.

use wasm_bindgen::JsValue;

/// Attaching failed. The plain form keeps working; the enhancements are
/// simply not installed.
#[derive(thiserror::Error, Debug)]
pub enum EnhanceError {
    #[error("no window")]
    NoWindow,

    #[error("no document")]
    NoDocument,

    #[error("no element matches {0}")]
    MissingElement(String),

    #[error("{selector} is not a {expected}")]
    WrongElement {
        selector: String,
        expected: &'static str,
    },

    #[error("DOM operation failed: {0}")]
    Dom(String),
}

impl From<JsValue> for EnhanceError {
    fn from(value: JsValue) -> Self {
        EnhanceError::Dom(format!("{:?}", value))
    }
}
