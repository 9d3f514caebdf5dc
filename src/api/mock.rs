//! In-memory transport for tests: replays queued responses, records requests.

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::error::ApiError;

use super::{ApiRequest, ApiResponse, Transport};

#[derive(Debug, Default)]
pub struct MockTransport {
    queued: RefCell<VecDeque<Result<ApiResponse, ApiError>>>,
    sent: RefCell<Vec<ApiRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, status: u16, body: &str) -> Self {
        self.queued.borrow_mut().push_back(Ok(ApiResponse {
            status,
            body: body.to_string(),
        }));
        self
    }

    pub fn fail(self, message: &str) -> Self {
        self.queued
            .borrow_mut()
            .push_back(Err(ApiError::Network(message.to_string())));
        self
    }

    pub fn sent(&self) -> Vec<ApiRequest> {
        self.sent.borrow().clone()
    }
}

impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.sent.borrow_mut().push(request);
        self.queued
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no response queued".to_string())))
    }
}
