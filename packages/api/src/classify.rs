//! # Error classifier
//!
//! Maps an unexpected response status to what the user sees:
//!
//! | Status | Behavior |
//! |--------|----------|
//! | `401` | Session token destroyed, navigate to login. |
//! | `400` | One error toast per field descriptor, all in one container. |
//! | anything else | One error toast with the body's message. |
//!
//! Callers invoke this only after deciding the status is not the expected
//! success code of their call; [`ApiClient`](crate::ApiClient) never does.

use serde_json::Value;
use store::TokenStore;

use crate::models::ErrorBody;
use crate::toast::{Notifier, Toast};

/// Shown when an error body carries no usable message.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    /// The session is no longer valid.
    Unauthorized,
    /// Field-level validation messages.
    Validation(Vec<String>),
    /// Any other failure with a single message.
    Other(String),
}

pub fn classify(status: u16, body: Option<&Value>) -> Failure {
    let error = ErrorBody::from_body(body);
    match status {
        401 => Failure::Unauthorized,
        400 => {
            let messages = error
                .as_ref()
                .and_then(|e| {
                    e.field_messages()
                        .or_else(|| e.message().map(|m| vec![m.to_string()]))
                })
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| vec![GENERIC_ERROR_MESSAGE.to_string()]);
            Failure::Validation(messages)
        }
        _ => {
            let message = error
                .as_ref()
                .and_then(|e| e.message())
                .unwrap_or(GENERIC_ERROR_MESSAGE);
            Failure::Other(message.to_string())
        }
    }
}

/// Apply `failure`: clear the session and call `to_login`, or show toasts.
pub fn handle<S, N>(failure: Failure, tokens: &S, notifier: &N, to_login: impl FnOnce())
where
    S: TokenStore + ?Sized,
    N: Notifier + ?Sized,
{
    match failure {
        Failure::Unauthorized => {
            tracing::info!("Session rejected, signing out");
            tokens.clear();
            notifier.destroy();
            to_login();
        }
        Failure::Validation(messages) => {
            notifier.show(messages.into_iter().map(Toast::error).collect());
        }
        Failure::Other(message) => {
            tracing::warn!("Request rejected: {}", message);
            notifier.error(&message);
        }
    }
}

/// [`classify`] then [`handle`].
pub fn reject<S, N>(status: u16, body: Option<&Value>, tokens: &S, notifier: &N, to_login: impl FnOnce())
where
    S: TokenStore + ?Sized,
    N: Notifier + ?Sized,
{
    handle(classify(status, body), tokens, notifier, to_login)
}
