//! Scripted transport for tests.
//!
//! Responses are queued up front and consumed in order; every request the
//! client sends is recorded for inspection. Running out of scripted responses
//! behaves like a network failure.

use std::cell::RefCell;
use std::collections::VecDeque;

use serde_json::Value;

use crate::transport::{HttpRequest, HttpResponse, Transport, TransportError};

#[derive(Debug, Default)]
pub struct MockTransport {
    responses: RefCell<VecDeque<Result<HttpResponse, TransportError>>>,
    requests: RefCell<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a JSON response.
    pub fn respond(&self, status: u16, body: Value) -> &Self {
        self.respond_raw(status, Some("application/json; charset=utf-8"), &body.to_string())
    }

    /// Queue a response with no body, such as a `204`.
    pub fn respond_empty(&self, status: u16) -> &Self {
        self.respond_raw(status, None, "")
    }

    pub fn respond_raw(&self, status: u16, content_type: Option<&str>, body: &str) -> &Self {
        self.responses.borrow_mut().push_back(Ok(HttpResponse {
            status,
            content_type: content_type.map(str::to_string),
            body: body.to_string(),
        }));
        self
    }

    /// Queue a transport failure.
    pub fn fail(&self, reason: &str) -> &Self {
        self.responses
            .borrow_mut()
            .push_back(Err(TransportError::Network(reason.to_string())));
        self
    }

    /// Every request sent so far.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }

    /// JSON body of the `index`-th request.
    pub fn request_body(&self, index: usize) -> Option<Value> {
        let requests = self.requests.borrow();
        let body = requests.get(index)?.body.as_deref()?;
        serde_json::from_str(body).ok()
    }
}

impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Network("no scripted response".to_string())))
    }
}
