use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Browser window is not available")]
    NoWindow,
    #[error("Document is not available")]
    NoDocument,
    #[error("Missing element: {0}")]
    MissingElement(String),
    #[error("Unexpected element type for {0}")]
    WrongElementType(String),
    #[error("Local storage is not available")]
    StorageUnavailable,
    #[error("JavaScript error: {0}")]
    Js(String),
    #[error("Invalid site configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<JsValue> for SiteError {
    fn from(value: JsValue) -> Self {
        SiteError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub type SiteResult<T> = Result<T, SiteError>;
