//! Bearer token storage
//!
//! Holds the Sanctum bearer token shared by every resource service. The
//! token is read once per request and replaced wholesale on login/logout;
//! there is no per-request refresh or rotation.

use std::sync::{Arc, RwLock};

/// Shared, thread-safe store for the current bearer token.
///
/// Cloning the store yields a handle to the same token, so a token set by
/// `AuthService::login` is visible to every service created from the same
/// `HostelApi`.
#[derive(Debug, Clone, Default)]
pub struct TokenStore {
    inner: Arc<RwLock<Option<String>>>,
}

impl TokenStore {
    /// Create an empty store (unauthenticated).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-loaded with a token, for callers that persist
    /// tokens across sessions.
    pub fn with_token(token: impl Into<String>) -> Self {
        let store = Self::new();
        store.set(token);
        store
    }

    /// Replace the stored token.
    pub fn set(&self, token: impl Into<String>) {
        *self.write_guard() = Some(token.into());
    }

    /// Drop the stored token.
    pub fn clear(&self) {
        *self.write_guard() = None;
    }

    /// Current token, if any.
    pub fn get(&self) -> Option<String> {
        self.read_guard().clone()
    }

    /// Whether a token is currently stored.
    pub fn is_authenticated(&self) -> bool {
        self.read_guard().is_some()
    }

    // The token is plain data; a poisoned lock still holds a usable value.
    fn read_guard(&self) -> std::sync::RwLockReadGuard<'_, Option<String>> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write_guard(&self) -> std::sync::RwLockWriteGuard<'_, Option<String>> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store_is_unauthenticated() {
        let store = TokenStore::new();
        assert!(!store.is_authenticated());
        assert_eq!(store.get(), None);
    }

    #[test]
    fn test_set_and_clear() {
        let store = TokenStore::new();
        store.set("abc123");
        assert_eq!(store.get(), Some("abc123".to_string()));

        store.set("replaced");
        assert_eq!(store.get(), Some("replaced".to_string()));

        store.clear();
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_clones_share_token() {
        let store = TokenStore::new();
        let handle = store.clone();
        store.set("shared");
        assert_eq!(handle.get(), Some("shared".to_string()));
    }
}
