use super::*;

// =============================================================
// MemoryStore
// =============================================================

#[test]
fn memory_store_starts_empty() {
    let store = MemoryStore::new();
    assert!(store.get(TOKEN_STORAGE_KEY).is_none());
}

#[test]
fn memory_store_returns_what_was_set() {
    let store = MemoryStore::new();
    store.set("key", "value");
    assert_eq!(store.get("key").as_deref(), Some("value"));
}

#[test]
fn memory_store_set_overwrites() {
    let store = MemoryStore::new();
    store.set("key", "old");
    store.set("key", "new");
    assert_eq!(store.get("key").as_deref(), Some("new"));
}

#[test]
fn memory_store_remove_deletes_the_entry() {
    let store = MemoryStore::new();
    store.set("key", "value");
    store.remove("key");
    assert!(store.get("key").is_none());
}

#[test]
fn memory_store_remove_of_missing_key_is_harmless() {
    let store = MemoryStore::new();
    store.remove("key");
    assert!(store.get("key").is_none());
}

#[test]
fn with_token_seeds_the_session_key() {
    let store = MemoryStore::with_token("abc123");
    assert_eq!(store.get(TOKEN_STORAGE_KEY).as_deref(), Some("abc123"));
}

// =============================================================
// NoopStore
// =============================================================

#[test]
fn noop_store_reads_nothing() {
    let store = NoopStore;
    assert!(store.get(TOKEN_STORAGE_KEY).is_none());
}

#[test]
fn noop_store_discards_writes() {
    let store = NoopStore;
    store.set("key", "value");
    assert!(store.get("key").is_none());
}
