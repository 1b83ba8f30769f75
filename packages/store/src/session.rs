//! # Session token storage
//!
//! The diary client keeps exactly one piece of client-local state: the opaque
//! bearer token issued by the remote API on login or signup. [`TokenStore`]
//! abstracts where that string lives so the request helper and the page
//! controllers can run against the browser's `localStorage`
//! ([`crate::LocalStore`]) or an in-memory cell ([`crate::MemoryStore`]) in
//! tests and on native targets.
//!
//! ## Lifecycle
//!
//! | Event | Call |
//! |-------|------|
//! | Successful login / signup | [`TokenStore::set`] |
//! | Every authenticated request | [`TokenStore::get`] (read at call time) |
//! | Logout, or any `401` response | [`TokenStore::clear`] |
//!
//! Implementations never fail loudly. A storage backend that is unavailable
//! behaves like an empty store, so the worst case is an extra trip through the
//! login page.

/// Key under which the bearer token is persisted.
pub const TOKEN_KEY: &str = "accessToken";

/// Client-local storage for the session token.
pub trait TokenStore {
    /// The current token, if one is stored.
    fn get(&self) -> Option<String>;

    /// Persist `token`, replacing any previous one.
    fn set(&self, token: &str);

    /// Remove the stored token. Clearing an empty store is a no-op.
    fn clear(&self);

    /// Whether a token is currently stored.
    fn is_signed_in(&self) -> bool {
        self.get().is_some()
    }
}

impl<S: TokenStore + ?Sized> TokenStore for &S {
    fn get(&self) -> Option<String> {
        (**self).get()
    }

    fn set(&self, token: &str) {
        (**self).set(token)
    }

    fn clear(&self) {
        (**self).clear()
    }
}
