use thiserror::Error;
use wasm_bindgen::JsValue;

/// Reasons the directory layer could not attach to the page
#[derive(Debug, Error)]
pub enum MountError {
    #[error("no browser window available")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("required element `{0}` is missing from the page")]
    MissingElement(&'static str),

    #[error("DOM operation failed: {0}")]
    Dom(String),
}

impl From<JsValue> for MountError {
    fn from(value: JsValue) -> Self {
        MountError::Dom(format!("{:?}", value))
    }
}
