//! API Errors
//!
//! The `Display` text of each variant is exactly what the user gets to see.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Non-2xx response; `message` is the response body as text
    #[error("{message}")]
    Server { status: u16, message: String },

    /// Failure before any response arrived
    #[error("{0}")]
    Network(String),

    /// Response body was not the JSON we expected
    #[error("{0}")]
    Decode(String),
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

impl From<JsValue> for ApiError {
    fn from(value: JsValue) -> Self {
        let message = value
            .dyn_ref::<js_sys::Error>()
            .map(|e| String::from(e.message()))
            .or_else(|| value.as_string())
            .unwrap_or_else(|| format!("{:?}", value));
        Self::Network(message)
    }
}
