use std::sync::{Arc, Mutex};

use crate::session::TokenStore;

/// In-memory TokenStore for testing and native builds.
///
/// Clones share the same cell, so a token written through one handle is
/// visible through every other.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    token: Arc<Mutex<Option<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `token`.
    pub fn with_token(token: &str) -> Self {
        let store = Self::new();
        store.set(token);
        store
    }
}

impl TokenStore for MemoryStore {
    fn get(&self) -> Option<String> {
        match self.token.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn set(&self, token: &str) {
        match self.token.lock() {
            Ok(mut guard) => *guard = Some(token.to_string()),
            Err(poisoned) => *poisoned.into_inner() = Some(token.to_string()),
        }
    }

    fn clear(&self) {
        match self.token.lock() {
            Ok(mut guard) => *guard = None,
            Err(poisoned) => *poisoned.into_inner() = None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store() {
        let store = MemoryStore::new();
        assert!(store.get().is_none());
        assert!(!store.is_signed_in());
    }

    #[test]
    fn test_set_and_clear() {
        let store = MemoryStore::new();
        store.set("abc");
        assert_eq!(store.get().as_deref(), Some("abc"));
        assert!(store.is_signed_in());

        // A second login replaces the token
        store.set("def");
        assert_eq!(store.get().as_deref(), Some("def"));

        store.clear();
        assert!(store.get().is_none());

        // Clearing twice is fine
        store.clear();
        assert!(store.get().is_none());
    }

    #[test]
    fn test_clones_share_token() {
        let store = MemoryStore::with_token("shared");
        let other = store.clone();
        other.clear();
        assert!(store.get().is_none());
    }

    #[test]
    fn test_reference_is_a_store() {
        fn read<S: TokenStore>(s: S) -> Option<String> {
            s.get()
        }
        let store = MemoryStore::with_token("t");
        assert_eq!(read(&store).as_deref(), Some("t"));
    }
}
