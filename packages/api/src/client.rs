//! # Authenticated request helper
//!
//! [`ApiClient`] is the one place the diary client talks HTTP. It owns the API
//! base URL, a [`Transport`], and the [`TokenStore`] the bearer token is read
//! from. Two entry points share the same request building:
//!
//! - [`ApiClient::send`] returns `Result<ApiResponse, RequestError>`.
//! - [`ApiClient::request`] drives a [`Callbacks`] triple: `on_success` for any
//!   received response (whatever its status), `on_error` when no usable
//!   response arrived, and `on_done` exactly once afterwards in both cases.
//!
//! HTTP error statuses are *not* errors here. The caller compares the status
//! with the call's expected code and hands anything else to
//! [`crate::classify`].

use serde_json::Value;
use store::TokenStore;

use crate::classify::GENERIC_ERROR_MESSAGE;
use crate::endpoints::Call;
use crate::toast::Notifier;
use crate::transport::{HttpRequest, Transport, TransportError};

/// Toast text for a request that never got a response.
pub const NETWORK_ERROR_MESSAGE: &str =
    "Could not reach the server. Please check your connection and try again.";

/// A received response with its body parsed, if it was JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Option<Value>,
}

#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("invalid JSON in response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl RequestError {
    /// Text shown to the user for this failure.
    pub fn user_message(&self) -> &'static str {
        match self {
            RequestError::Transport(_) => NETWORK_ERROR_MESSAGE,
            RequestError::Decode(_) => GENERIC_ERROR_MESSAGE,
        }
    }
}

/// Log a failed request and show it as an error toast.
pub fn report_network_error<N: Notifier + ?Sized>(notifier: &N, err: &RequestError) {
    tracing::warn!("Request failed: {}", err);
    notifier.error(err.user_message());
}

type SuccessFn<'a> = Box<dyn FnOnce(u16, Option<Value>) + 'a>;
type ErrorFn<'a> = Box<dyn FnOnce(RequestError) + 'a>;
type DoneFn<'a> = Box<dyn FnOnce() + 'a>;

/// Success / error / cleanup callbacks for [`ApiClient::request`].
pub struct Callbacks<'a> {
    on_success: SuccessFn<'a>,
    on_error: ErrorFn<'a>,
    on_done: DoneFn<'a>,
}

impl<'a> Callbacks<'a> {
    /// Callbacks with the given success handler. Failures are reported
    /// through `notifier` with [`report_network_error`] unless replaced with
    /// [`Callbacks::on_error`]; the default cleanup does nothing.
    pub fn new<N: Notifier + 'a>(
        notifier: N,
        on_success: impl FnOnce(u16, Option<Value>) + 'a,
    ) -> Self {
        Self {
            on_success: Box::new(on_success),
            on_error: Box::new(move |err| report_network_error(&notifier, &err)),
            on_done: Box::new(|| {}),
        }
    }

    pub fn on_error(mut self, on_error: impl FnOnce(RequestError) + 'a) -> Self {
        self.on_error = Box::new(on_error);
        self
    }

    pub fn on_done(mut self, on_done: impl FnOnce() + 'a) -> Self {
        self.on_done = Box::new(on_done);
        self
    }
}

/// HTTP client for the diary API.
#[derive(Clone, Debug)]
pub struct ApiClient<T, S> {
    base_url: String,
    transport: T,
    tokens: S,
}

impl<T: Transport, S: TokenStore> ApiClient<T, S> {
    pub fn new(base_url: impl Into<String>, transport: T, tokens: S) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
            tokens,
        }
    }

    pub fn tokens(&self) -> &S {
        &self.tokens
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn build(&self, call: &Call) -> HttpRequest {
        let mut headers = vec![("Content-Type".to_string(), "application/json".to_string())];
        if let Some(token) = self.tokens.get() {
            headers.push(("Authorization".to_string(), format!("Bearer {token}")));
        }
        HttpRequest {
            method: call.method,
            url: self.url(&call.path),
            headers,
            body: call.body.as_ref().map(Value::to_string),
        }
    }

    /// Send `call` and parse the response body when it is declared as JSON.
    pub async fn send(&self, call: &Call) -> Result<ApiResponse, RequestError> {
        let request = self.build(call);
        tracing::debug!("{} {}", request.method, request.url);

        let response = self.transport.send(request).await?;
        let body = if response.is_json() && !response.body.trim().is_empty() {
            Some(serde_json::from_str(&response.body)?)
        } else {
            None
        };

        Ok(ApiResponse {
            status: response.status,
            body,
        })
    }

    /// Send `call`, then run `on_success` or `on_error`, then `on_done`.
    pub async fn request(&self, call: &Call, callbacks: Callbacks<'_>) {
        let Callbacks {
            on_success,
            on_error,
            on_done,
        } = callbacks;

        match self.send(call).await {
            Ok(response) => on_success(response.status, response.body),
            Err(err) => on_error(err),
        }
        on_done();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use serde_json::json;
    use store::MemoryStore;

    use super::*;
    use crate::endpoints;
    use crate::models::{Credentials, EntryQuery};
    use crate::testing::MockTransport;
    use crate::toast::{Toast, ToastStack};
    use crate::transport::Method;

    fn quiet() -> RefCell<ToastStack> {
        RefCell::new(ToastStack::new())
    }

    fn client(token: Option<&str>) -> ApiClient<MockTransport, MemoryStore> {
        let tokens = match token {
            Some(t) => MemoryStore::with_token(t),
            None => MemoryStore::new(),
        };
        ApiClient::new("https://diary.example/api/v1/", MockTransport::new(), tokens)
    }

    #[tokio::test]
    async fn test_headers_and_url() {
        let client = client(Some("T"));
        client.transport().respond(200, json!({"entries": []}));

        client.send(&endpoints::list_entries(&EntryQuery::default())).await.unwrap();

        let sent = client.transport().requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method, Method::Get);
        assert_eq!(sent[0].url, "https://diary.example/api/v1/entries?page=1");
        assert_eq!(sent[0].header("authorization"), Some("Bearer T"));
        assert_eq!(sent[0].header("content-type"), Some("application/json"));
        assert!(sent[0].body.is_none());
    }

    #[tokio::test]
    async fn test_no_token_no_authorization_header() {
        let client = client(None);
        client.transport().respond(200, json!({"token": "T"}));

        client
            .send(&endpoints::login(&Credentials::new("a@b.com", "x")))
            .await
            .unwrap();

        let sent = client.transport().requests();
        assert!(sent[0].header("authorization").is_none());
        let body: Value = serde_json::from_str(sent[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body, json!({"email": "a@b.com", "password": "x"}));
    }

    #[tokio::test]
    async fn test_token_read_at_call_time() {
        let client = client(None);
        client.transport().respond_empty(204);
        client.transport().respond_empty(204);

        client.send(&endpoints::delete_entry(1)).await.unwrap();
        client.tokens().set("late");
        client.send(&endpoints::delete_entry(1)).await.unwrap();

        let sent = client.transport().requests();
        assert!(sent[0].header("authorization").is_none());
        assert_eq!(sent[1].header("authorization"), Some("Bearer late"));
    }

    #[tokio::test]
    async fn test_non_json_body_is_none() {
        let client = client(None);
        client
            .transport()
            .respond_raw(500, Some("text/html"), "<h1>Internal error</h1>");

        let response = client.send(&endpoints::get_profile()).await.unwrap();
        assert_eq!(response.status, 500);
        assert!(response.body.is_none());
    }

    #[tokio::test]
    async fn test_error_status_goes_to_on_success() {
        let client = client(Some("T"));
        client.transport().respond(404, json!({"error": {"message": "Entry not found"}}));

        let seen = Cell::new(None);
        let errored = Cell::new(false);
        let toasts = quiet();
        client
            .request(
                &endpoints::get_entry(9),
                Callbacks::new(&toasts, |status, body| seen.set(Some((status, body.is_some()))))
                    .on_error(|_| errored.set(true)),
            )
            .await;

        assert_eq!(seen.get(), Some((404, true)));
        assert!(!errored.get());
    }

    #[tokio::test]
    async fn test_transport_failure_runs_error_then_done_once() {
        let client = client(Some("T"));
        client.transport().fail("connection refused");

        let successes = Cell::new(0);
        let errors = Cell::new(0);
        let dones = Cell::new(0);
        let toasts = quiet();
        client
            .request(
                &endpoints::get_profile(),
                Callbacks::new(&toasts, |_, _| successes.set(successes.get() + 1))
                    .on_error(|err| {
                        assert!(matches!(err, RequestError::Transport(_)));
                        errors.set(errors.get() + 1)
                    })
                    .on_done(|| dones.set(dones.get() + 1)),
            )
            .await;

        assert_eq!(successes.get(), 0);
        assert_eq!(errors.get(), 1);
        assert_eq!(dones.get(), 1);
    }

    #[tokio::test]
    async fn test_done_runs_after_success() {
        let client = client(None);
        client.transport().respond_empty(204);

        let order = RefCell::new(Vec::new());
        let toasts = quiet();
        client
            .request(
                &endpoints::delete_entry(3),
                Callbacks::new(&toasts, |status, _| order.borrow_mut().push(format!("success {status}")))
                    .on_done(|| order.borrow_mut().push("done".to_string())),
            )
            .await;

        assert_eq!(*order.borrow(), vec!["success 204", "done"]);
    }

    #[tokio::test]
    async fn test_malformed_json_is_an_error() {
        let client = client(None);
        client
            .transport()
            .respond_raw(200, Some("application/json"), "{not json");

        let result = client.send(&endpoints::get_profile()).await;
        assert!(matches!(result, Err(RequestError::Decode(_))));
    }

    #[tokio::test]
    async fn test_default_error_handler_shows_connection_toast() {
        let client = client(None);
        client.transport().fail("offline");
        let toasts = RefCell::new(ToastStack::new());

        client
            .request(
                &endpoints::get_profile(),
                Callbacks::new(&toasts, |_, _| {}),
            )
            .await;

        let stack = toasts.borrow();
        assert_eq!(
            stack.container().unwrap().toasts,
            vec![Toast::error(NETWORK_ERROR_MESSAGE)]
        );
    }
}
