use super::*;

fn counting_subscriber(counter: &ActivityCounter) -> (Arc<Mutex<Vec<u32>>>, Subscription) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_slot = Arc::clone(&seen);
    let subscription = counter.subscribe(move |value| {
        seen_slot.lock().expect("seen lock").push(value);
    });
    (seen, subscription)
}

// =============================================================
// Counting
// =============================================================

#[test]
fn counter_starts_at_zero() {
    let counter = ActivityCounter::new();
    assert_eq!(counter.current(), 0);
}

#[test]
fn increment_and_decrement_track_outstanding_requests() {
    let counter = ActivityCounter::new();
    counter.increment();
    counter.increment();
    assert_eq!(counter.current(), 2);
    counter.decrement();
    assert_eq!(counter.current(), 1);
    counter.decrement();
    assert_eq!(counter.current(), 0);
}

#[test]
fn decrement_at_zero_clamps_instead_of_underflowing() {
    let counter = ActivityCounter::new();
    counter.decrement();
    counter.decrement();
    assert_eq!(counter.current(), 0);
}

#[test]
fn clones_share_the_same_count() {
    let counter = ActivityCounter::new();
    counter.clone().increment();
    assert_eq!(counter.current(), 1);
}

// =============================================================
// Notifications
// =============================================================

#[test]
fn subscribers_see_each_new_value_in_order() {
    let counter = ActivityCounter::new();
    let (seen, _subscription) = counting_subscriber(&counter);

    counter.increment();
    counter.increment();
    counter.decrement();
    counter.decrement();

    assert_eq!(*seen.lock().expect("seen lock"), vec![1, 2, 1, 0]);
}

#[test]
fn clamped_decrement_still_notifies_with_zero() {
    let counter = ActivityCounter::new();
    let (seen, _subscription) = counting_subscriber(&counter);

    counter.decrement();

    assert_eq!(*seen.lock().expect("seen lock"), vec![0]);
}

#[test]
fn cancelled_subscriber_misses_later_changes() {
    let counter = ActivityCounter::new();
    let (seen, subscription) = counting_subscriber(&counter);

    counter.increment();
    subscription.cancel();
    counter.increment();

    assert_eq!(*seen.lock().expect("seen lock"), vec![1]);
}

#[test]
fn dropping_the_handle_unsubscribes() {
    let counter = ActivityCounter::new();
    let (seen, subscription) = counting_subscriber(&counter);

    drop(subscription);
    counter.increment();

    assert!(seen.lock().expect("seen lock").is_empty());
}

// =============================================================
// InFlight guard
// =============================================================

#[test]
fn begin_increments_until_the_guard_drops() {
    let counter = ActivityCounter::new();
    let guard = counter.begin();
    assert_eq!(counter.current(), 1);
    drop(guard);
    assert_eq!(counter.current(), 0);
}

#[test]
fn overlapping_guards_keep_the_count_positive_until_the_last_drop() {
    let counter = ActivityCounter::new();
    let first = counter.begin();
    let second = counter.begin();
    assert_eq!(counter.current(), 2);

    drop(first);
    assert_eq!(counter.current(), 1);
    drop(second);
    assert_eq!(counter.current(), 0);
}

#[test]
fn guard_drop_notifies_subscribers() {
    let counter = ActivityCounter::new();
    let (seen, _subscription) = counting_subscriber(&counter);

    {
        let _guard = counter.begin();
    }

    assert_eq!(*seen.lock().expect("seen lock"), vec![1, 0]);
}
