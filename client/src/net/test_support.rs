//! Scripted transport for exercising the HTTP wrapper without a network.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use super::http::{RawRequest, RawResponse, Transport};
use crate::error::ApiError;

/// Replies with queued responses in order and records every request.
/// An exhausted queue answers with a network error.
#[derive(Default)]
pub struct StubTransport {
    replies: Mutex<VecDeque<Result<RawResponse, ApiError>>>,
    requests: Mutex<Vec<RawRequest>>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, status: u16, body: &str) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(Ok(RawResponse::new(status, body)));
        self
    }

    pub fn fail(self, err: ApiError) -> Self {
        self.replies.lock().unwrap().push_back(Err(err));
        self
    }

    pub fn requests(&self) -> Vec<RawRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> RawRequest {
        self.requests().pop().expect("no request was sent")
    }
}

#[async_trait(?Send)]
impl Transport for StubTransport {
    async fn send(&self, request: RawRequest) -> Result<RawResponse, ApiError> {
        self.requests.lock().unwrap().push(request);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no scripted reply".to_owned())))
    }
}

pub const DEMO_USER_JSON: &str = r#"{"id":1,"username":"demo","email":"demo@example.com","role":"admin"}"#;
