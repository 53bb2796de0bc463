//! Key-value persistence port for the session token.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route guard reads the persisted token through this trait instead of
//! sniffing for a browser environment; the app injects whichever
//! implementation fits the execution context. `client::util::storage`
//! provides the localStorage-backed implementation; [`MemoryStore`] serves
//! native tests and [`NoopStore`] serves contexts with no persistence.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

/// Storage key holding the opaque session token.
pub const TOKEN_STORAGE_KEY: &str = "gearline_token";

/// String key-value storage as seen by the session layer.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory store for tests and non-browser callers.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a session token.
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        let store = Self::new();
        store.set(TOKEN_STORAGE_KEY, token);
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }
}

/// Store for execution contexts with no persistence at all: reads come
/// back empty and writes are discarded.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopStore;

impl KeyValueStore for NoopStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) {}

    fn remove(&self, _key: &str) {}
}
