//! Todo API Client
//!
//! REST bindings for the todo server, split from the transport so the
//! request/response handling can run without a browser.

mod fetch;
mod todos;

#[cfg(test)]
pub mod mock;

use crate::error::ApiError;

pub use fetch::BrowserFetch;
pub use todos::TodoApi;

// ========================
// Wire Types
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }
}

/// An outgoing request; `body` is always JSON when present
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<String>,
}

impl ApiRequest {
    pub fn get(url: String) -> Self {
        Self { method: Method::Get, url, body: None }
    }

    pub fn post_json(url: String, body: String) -> Self {
        Self { method: Method::Post, url, body: Some(body) }
    }

    pub fn delete(url: String) -> Self {
        Self { method: Method::Delete, url, body: None }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body of a 2xx response, or the body as a server error otherwise
    pub fn into_success(self) -> Result<String, ApiError> {
        if self.is_success() {
            Ok(self.body)
        } else {
            Err(ApiError::Server {
                status: self.status,
                message: self.body,
            })
        }
    }
}

// ========================
// Transport
// ========================

/// Sends one request and waits for the full response body.
///
/// Only failures that happen before a response exists are errors here;
/// status handling belongs to the caller.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_2xx_is_success() {
        for status in [200, 201, 204, 299] {
            let res = ApiResponse { status, body: String::new() };
            assert!(res.is_success(), "{}", status);
        }
        for status in [199, 300, 404, 500] {
            let res = ApiResponse { status, body: String::new() };
            assert!(!res.is_success(), "{}", status);
        }
    }

    #[test]
    fn test_into_success_keeps_body_verbatim() {
        let res = ApiResponse { status: 404, body: "{\"message\": \"Todo not found\"}".into() };
        assert_eq!(
            res.into_success(),
            Err(ApiError::Server { status: 404, message: "{\"message\": \"Todo not found\"}".into() })
        );
    }
}
