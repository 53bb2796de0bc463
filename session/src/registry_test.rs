use super::*;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

fn noop_listener() -> Listener<u32> {
    Arc::new(|_| {})
}

// =============================================================
// Registry bookkeeping
// =============================================================

#[test]
fn registry_starts_empty() {
    let registry: Registry<u32> = Registry::new();
    assert_eq!(registry.len(), 0);
    assert!(registry.snapshot().is_empty());
}

#[test]
fn insert_assigns_increasing_ids() {
    let mut registry: Registry<u32> = Registry::new();
    let first = registry.insert(noop_listener());
    let second = registry.insert(noop_listener());
    assert!(second > first);
    assert_eq!(registry.len(), 2);
}

#[test]
fn remove_drops_only_the_matching_entry() {
    let mut registry: Registry<u32> = Registry::new();
    let first = registry.insert(noop_listener());
    let second = registry.insert(noop_listener());

    registry.remove(first);

    assert!(!registry.contains(first));
    assert!(registry.contains(second));
    assert_eq!(registry.len(), 1);
}

#[test]
fn remove_unknown_id_is_harmless() {
    let mut registry: Registry<u32> = Registry::new();
    registry.insert(noop_listener());
    registry.remove(999);
    assert_eq!(registry.len(), 1);
}

#[test]
fn ids_are_never_reused_after_removal() {
    let mut registry: Registry<u32> = Registry::new();
    let first = registry.insert(noop_listener());
    registry.remove(first);
    let second = registry.insert(noop_listener());
    assert_ne!(first, second);
}

#[test]
fn snapshot_preserves_registration_order() {
    let mut registry: Registry<u32> = Registry::new();
    let a = registry.insert(noop_listener());
    let b = registry.insert(noop_listener());
    let c = registry.insert(noop_listener());

    let ids: Vec<u64> = registry.snapshot().iter().map(|(id, _)| *id).collect();
    assert_eq!(ids, vec![a, b, c]);
}

// =============================================================
// Subscription handle
// =============================================================

#[test]
fn cancel_runs_the_teardown_once() {
    let runs = Arc::new(AtomicUsize::new(0));
    let counted = Arc::clone(&runs);
    let subscription = Subscription::new(move || {
        counted.fetch_add(1, Ordering::SeqCst);
    });

    subscription.cancel();
    subscription.cancel();

    assert_eq!(runs.load(Ordering::SeqCst), 1);
}

#[test]
fn subscription_is_active_until_cancelled() {
    let subscription = Subscription::new(|| {});
    assert!(subscription.is_active());
    subscription.cancel();
    assert!(!subscription.is_active());
}

#[test]
fn drop_cancels_the_subscription() {
    let runs = Arc::new(AtomicUsize::new(0));
    let counted = Arc::clone(&runs);
    {
        let _subscription = Subscription::new(move || {
            counted.fetch_add(1, Ordering::SeqCst);
        });
    }
    assert_eq!(runs.load(Ordering::SeqCst), 1);
}

#[test]
fn drop_after_cancel_does_not_rerun_teardown() {
    let runs = Arc::new(AtomicUsize::new(0));
    let counted = Arc::clone(&runs);
    {
        let subscription = Subscription::new(move || {
            counted.fetch_add(1, Ordering::SeqCst);
        });
        subscription.cancel();
    }
    assert_eq!(runs.load(Ordering::SeqCst), 1);
}
