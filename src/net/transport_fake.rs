//! In-memory [`Transport`] for tests: replays scripted responses and records
//! every request it was asked to send.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::{HttpRequest, HttpResponse, Transport};
use crate::net::error::ApiError;

#[derive(Default)]
pub(crate) struct FakeTransport {
    replies: Mutex<VecDeque<Result<HttpResponse, ApiError>>>,
    sent: Mutex<Vec<HttpRequest>>,
}

impl FakeTransport {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub(crate) fn reply(&self, status: u16, body: &str) {
        self.replies
            .lock()
            .unwrap()
            .push_back(Ok(HttpResponse { status, body: body.to_owned() }));
    }

    pub(crate) fn fail(&self, error: ApiError) {
        self.replies.lock().unwrap().push_back(Err(error));
    }

    pub(crate) fn sent(&self) -> Vec<HttpRequest> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait(?Send)]
impl Transport for FakeTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.sent.lock().unwrap().push(request);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("no scripted reply".to_owned())))
    }
}
