//! # Page controllers
//!
//! Each page's workflow as plain async functions over an [`ApiClient`] and a
//! [`Notifier`]. The functions know nothing about markup or routing: they
//! read a form or an id, make one call through the request helper, and report
//! back an [`Outcome`] that the view turns into a state update or a
//! navigation.
//!
//! Every controller takes a `release` closure. It runs exactly once when the
//! request finishes, whatever happened, and is where views re-enable the
//! control that started the request. Controllers that reject their input
//! before sending anything also call it.

use std::cell::RefCell;

use api::classify;
use api::{ApiClient, Call, Callbacks, EntryId, EntryQuery, Notifier, Transport};
use serde_json::Value;
use store::TokenStore;

pub mod auth;
pub mod new_story;
pub mod profile;
pub mod stories;
pub mod story;

/// Where a controller wants the app to go next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Index,
    Login,
    Signup,
    Stories(EntryQuery),
    Story(EntryId),
    NewStory,
    Profile,
}

/// Result of a controller run.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<R> {
    /// The call returned its expected status.
    Done(R),
    /// Navigate away, e.g. to the login page after a `401`.
    Go(Page),
    /// Already reported to the user; stay on the page.
    Failed,
}

impl<R> Outcome<R> {
    /// Replace a successful result with a navigation to `page`.
    pub fn then_go(self, page: Page) -> Outcome<R> {
        match self {
            Outcome::Done(_) => Outcome::Go(page),
            other => other,
        }
    }

    pub fn done(self) -> Option<R> {
        match self {
            Outcome::Done(r) => Some(r),
            _ => None,
        }
    }
}

/// Input rejected before any request was made.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Password does not match")]
    PasswordMismatch,
    #[error("Email and password are required")]
    MissingCredentials,
    #[error("A story needs a title and some content")]
    EmptyStory,
}

/// How a running request is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Indicator {
    /// A "Loading..." toast, removed on success.
    Toast,
    /// The caller's own control (a spinner button); nothing extra is shown.
    Control,
}

/// Make `call`, decode the expected response with `on_expected`, and send
/// every other status through the classifier.
pub(crate) async fn run<T, S, N, R>(
    client: &ApiClient<T, S>,
    notifier: &N,
    call: &Call,
    indicator: Indicator,
    release: impl FnOnce(),
    on_expected: impl FnOnce(Option<Value>) -> Result<R, serde_json::Error>,
) -> Outcome<R>
where
    T: Transport,
    S: TokenStore,
    N: Notifier,
{
    if indicator == Indicator::Toast {
        notifier.progress(api::toast::DEFAULT_PROGRESS_MESSAGE);
    }

    let outcome = RefCell::new(Outcome::Failed);
    client
        .request(
            call,
            Callbacks::new(notifier, |status, body| {
                if !call.expects(status) {
                    classify::reject(status, body.as_ref(), client.tokens(), notifier, || {
                        *outcome.borrow_mut() = Outcome::Go(Page::Login)
                    });
                    return;
                }
                match on_expected(body) {
                    Ok(result) => {
                        if indicator == Indicator::Toast {
                            notifier.destroy();
                        }
                        *outcome.borrow_mut() = Outcome::Done(result);
                    }
                    Err(e) => {
                        tracing::warn!("Unexpected response to {} {}: {}", call.method, call.path, e);
                        notifier.error(api::GENERIC_ERROR_MESSAGE);
                    }
                }
            })
            .on_done(release),
        )
        .await;
    outcome.into_inner()
}

/// Decode a required JSON body into `D`.
pub(crate) fn decode<D: serde::de::DeserializeOwned>(body: Option<Value>) -> Result<D, serde_json::Error> {
    serde_json::from_value(body.unwrap_or(Value::Null))
}


#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::test_support::*;
    use super::*;
    use api::endpoints;

    #[tokio::test]
    async fn test_run_shows_and_clears_progress() {
        let client = signed_in_client();
        client.transport().respond(200, json!({"email": "a@b.com"}));
        let toasts = toasts();
        let releases = Releases::default();

        let outcome = run(
            &client,
            &toasts,
            &endpoints::get_profile(),
            Indicator::Toast,
            releases.release(),
            |_| Ok(()),
        )
        .await;

        assert_eq!(outcome, Outcome::Done(()));
        assert!(toasts.borrow().is_empty());
        assert_eq!(releases.count(), 1);
    }

    #[tokio::test]
    async fn test_run_unexpected_body_reports_error() {
        let client = signed_in_client();
        client.transport().respond(200, json!({"nope": true}));
        let toasts = toasts();
        let releases = Releases::default();

        let outcome: Outcome<api::Profile> = run(
            &client,
            &toasts,
            &endpoints::get_profile(),
            Indicator::Control,
            releases.release(),
            decode,
        )
        .await;

        assert_eq!(outcome, Outcome::Failed);
        let stack = toasts.borrow();
        assert_eq!(
            stack.container().unwrap().toasts[0].message,
            api::GENERIC_ERROR_MESSAGE
        );
        assert_eq!(releases.count(), 1);
    }

    #[tokio::test]
    async fn test_run_401_goes_to_login() {
        let client = signed_in_client();
        client.transport().respond(401, json!({"error": {"message": "jwt expired"}}));
        let toasts = toasts();
        let releases = Releases::default();

        let outcome = run(
            &client,
            &toasts,
            &endpoints::get_profile(),
            Indicator::Toast,
            releases.release(),
            |_| Ok(()),
        )
        .await;

        assert_eq!(outcome, Outcome::Go(Page::Login));
        assert!(!client.tokens().is_signed_in());
        assert_eq!(releases.count(), 1);
    }

    #[test]
    fn test_then_go() {
        assert_eq!(Outcome::Done(1).then_go(Page::Index), Outcome::Go(Page::Index));
        assert_eq!(Outcome::<i32>::Failed.then_go(Page::Index), Outcome::Failed);
        assert_eq!(
            Outcome::<i32>::Go(Page::Login).then_go(Page::Index),
            Outcome::Go(Page::Login)
        );
    }
}
