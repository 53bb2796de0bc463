//! Browser localStorage glue: the session store implementation and JSON
//! persistence helpers for cart/favorites drafts.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything here is hydrate-only at runtime; on the server the store
//! reads empty and writes are discarded, which keeps server render passes
//! on the unauthenticated/default path without environment sniffing at the
//! call sites.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use session::KeyValueStore;

/// `localStorage`-backed key-value store.
///
/// Holds no browser handle of its own; the window is looked up per call so
/// the type stays `Send + Sync` and context-friendly.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
                let _ = storage.set_item(key, value);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// Shared handle to the app's key-value store, provided via context.
///
/// Delegates [`KeyValueStore`] so call sites can pass the handle wherever
/// the port is expected.
#[derive(Clone)]
pub struct StoreHandle(Arc<dyn KeyValueStore>);

impl StoreHandle {
    /// Handle over the browser's localStorage.
    pub fn browser() -> Self {
        Self(Arc::new(BrowserStore))
    }

    /// Handle over any store implementation; used by tests.
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self(Arc::new(store))
    }
}

impl KeyValueStore for StoreHandle {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get(key)
    }

    fn set(&self, key: &str, value: &str) {
        self.0.set(key, value);
    }

    fn remove(&self, key: &str) {
        self.0.remove(key);
    }
}

impl std::fmt::Debug for StoreHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreHandle").finish_non_exhaustive()
    }
}

/// Load a JSON value from the store for `key`. Unparseable or missing
/// state comes back as `None`; the caller falls back to defaults.
pub fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = store.get(key)?;
    serde_json::from_str(&raw).ok()
}

/// Save a JSON value to the store for `key`. Serialization failures are
/// dropped; persistence here is best effort.
pub fn save_json<T: Serialize>(store: &dyn KeyValueStore, key: &str, value: &T) {
    let Ok(raw) = serde_json::to_string(value) else {
        return;
    };
    store.set(key, &raw);
}
