//! # localStorage token store: browser-side persistence
//!
//! [`LocalStore`] is the [`TokenStore`] used on the **web platform**. The token
//! lives under [`TOKEN_KEY`] in `window.localStorage`, so it survives reloads
//! and is shared by every tab of the app.
//!
//! ## Error handling
//!
//! All methods swallow errors. Private browsing modes and disabled storage
//! make `localStorage` unavailable or throw on write; in that case reads
//! return `None` and writes are dropped after a warning. The user then simply
//! lands on the login page again.

use crate::session::{TokenStore, TOKEN_KEY};

/// localStorage-backed TokenStore for the web platform.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl TokenStore for LocalStore {
    fn get(&self) -> Option<String> {
        Self::storage()?.get_item(TOKEN_KEY).ok()?
    }

    fn set(&self, token: &str) {
        let Some(storage) = Self::storage() else {
            tracing::warn!("localStorage unavailable, session token not saved");
            return;
        };
        if storage.set_item(TOKEN_KEY, token).is_err() {
            tracing::warn!("Failed to write session token");
        }
    }

    fn clear(&self) {
        let Some(storage) = Self::storage() else {
            tracing::warn!("localStorage unavailable, session token not cleared");
            return;
        };
        if storage.remove_item(TOKEN_KEY).is_err() {
            tracing::warn!("Failed to clear session token");
        }
    }
}
