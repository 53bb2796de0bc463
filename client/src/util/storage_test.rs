use super::*;

use serde::Deserialize;
use session::MemoryStore;

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
struct Draft {
    name: String,
    count: u32,
}

// =============================================================
// JSON persistence helpers
// =============================================================

#[test]
fn save_then_load_round_trips() {
    let store = MemoryStore::new();
    let draft = Draft { name: "wiper blades".to_owned(), count: 2 };

    save_json(&store, "draft", &draft);
    let loaded: Option<Draft> = load_json(&store, "draft");

    assert_eq!(loaded, Some(draft));
}

#[test]
fn load_missing_key_is_none() {
    let store = MemoryStore::new();
    let loaded: Option<Draft> = load_json(&store, "draft");
    assert!(loaded.is_none());
}

#[test]
fn load_discards_unparseable_state() {
    let store = MemoryStore::new();
    store.set("draft", "not json {{");

    let loaded: Option<Draft> = load_json(&store, "draft");
    assert!(loaded.is_none());
}

// =============================================================
// StoreHandle delegation
// =============================================================

#[test]
fn handle_delegates_to_the_wrapped_store() {
    let handle = StoreHandle::new(MemoryStore::new());

    handle.set("key", "value");
    assert_eq!(handle.get("key").as_deref(), Some("value"));

    handle.remove("key");
    assert!(handle.get("key").is_none());
}
