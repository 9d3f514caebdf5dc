//! Browser Transport
//!
//! `window.fetch` through web-sys. No timeout and no cancellation: a hung
//! request simply never resolves.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

use crate::error::ApiError;

use super::{ApiRequest, ApiResponse, Transport};

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserFetch;

impl BrowserFetch {
    fn build_request(request: &ApiRequest) -> Result<Request, ApiError> {
        let init = RequestInit::new();
        init.set_method(request.method.as_str());

        if let Some(body) = &request.body {
            let headers = Headers::new()?;
            headers.set("Content-Type", "application/json")?;
            init.set_headers(&headers);
            init.set_body(&JsValue::from_str(body));
        }

        Ok(Request::new_with_str_and_init(&request.url, &init)?)
    }
}

impl Transport for BrowserFetch {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;
        let js_request = Self::build_request(&request)?;

        let value = JsFuture::from(window.fetch_with_request(&js_request)).await?;
        let response: Response = value.dyn_into()?;
        let text = JsFuture::from(response.text()?).await?;

        web_sys::console::log_1(
            &format!("[Fetch] {} {} -> {}", request.method.as_str(), request.url, response.status()).into(),
        );

        Ok(ApiResponse {
            status: response.status(),
            body: text.as_string().unwrap_or_default(),
        })
    }
}
