//! # API crate: REST client for the remote diary service
//!
//! Everything the web front end needs to talk to the diary API, free of any UI
//! framework so it can be tested natively.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: bearer-token request helper with success / error / done callbacks |
//! | [`classify`] | Maps unexpected statuses to sign-out, per-field toasts, or a single toast |
//! | [`endpoints`] | Every API call with its expected success status |
//! | [`models`] | Entries, profile, credentials, and error bodies |
//! | [`query`] | Query-string codec for the story list's `page` and `filter` |
//! | [`toast`] | Toast stack state and the [`Notifier`] seam |
//! | [`transport`] | [`Transport`] trait and the `reqwest` implementation |
//! | [`push`] | VAPID key decoding for push subscriptions |

pub mod classify;
pub mod client;
pub mod endpoints;
pub mod models;
pub mod push;
pub mod query;
pub mod toast;
pub mod transport;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use classify::{classify, Failure, GENERIC_ERROR_MESSAGE};
pub use client::{report_network_error, ApiClient, ApiResponse, Callbacks, RequestError};
pub use endpoints::Call;
pub use models::{EntriesPage, Entry, EntryDraft, EntryId, EntryQuery, PageMeta, Profile};
pub use toast::{Notifier, Toast, ToastKind, ToastStack};
pub use transport::{Method, ReqwestTransport, Transport, TransportError};
