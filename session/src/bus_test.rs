use super::*;

fn record(log: &Arc<Mutex<Vec<String>>>, entry: &str) {
    log.lock().expect("log lock").push(entry.to_owned());
}

fn sample_user() -> AuthUser {
    AuthUser {
        id: "u-1".to_owned(),
        name: "Dana".to_owned(),
        email: Some("dana@example.com".to_owned()),
    }
}

// =============================================================
// Delivery
// =============================================================

#[test]
fn publish_reaches_every_subscriber() {
    let bus = AuthBus::new();
    let log = Arc::new(Mutex::new(Vec::new()));

    let first_log = Arc::clone(&log);
    let _first = bus.subscribe(move |_| record(&first_log, "first"));
    let second_log = Arc::clone(&log);
    let _second = bus.subscribe(move |_| record(&second_log, "second"));

    bus.publish(&AuthChangeEvent::logout());

    assert_eq!(
        *log.lock().expect("log lock"),
        vec!["first".to_owned(), "second".to_owned()]
    );
}

#[test]
fn subscribers_run_in_registration_order() {
    let bus = AuthBus::new();
    let log = Arc::new(Mutex::new(Vec::new()));

    let _subscriptions: Vec<Subscription> = ["a", "b", "c"]
        .into_iter()
        .map(|name| {
            let entry_log = Arc::clone(&log);
            bus.subscribe(move |_| record(&entry_log, name))
        })
        .collect();

    bus.publish(&AuthChangeEvent::login(None));

    assert_eq!(
        *log.lock().expect("log lock"),
        vec!["a".to_owned(), "b".to_owned(), "c".to_owned()]
    );
}

#[test]
fn listener_sees_the_published_event() {
    let bus = AuthBus::new();
    let seen = Arc::new(Mutex::new(None));

    let seen_slot = Arc::clone(&seen);
    let _subscription = bus.subscribe(move |event| {
        *seen_slot.lock().expect("seen lock") = Some(event.clone());
    });

    let event = AuthChangeEvent::login(Some(sample_user()));
    bus.publish(&event);

    assert_eq!(seen.lock().expect("seen lock").as_ref(), Some(&event));
}

#[test]
fn event_published_before_any_subscriber_is_dropped() {
    let bus = AuthBus::new();
    bus.publish(&AuthChangeEvent::logout());

    let log = Arc::new(Mutex::new(Vec::new()));
    let late_log = Arc::clone(&log);
    let _late = bus.subscribe(move |_| record(&late_log, "late"));

    assert!(log.lock().expect("log lock").is_empty());
}

#[test]
fn clones_share_the_same_subscribers() {
    let bus = AuthBus::new();
    let log = Arc::new(Mutex::new(Vec::new()));

    let entry_log = Arc::clone(&log);
    let _subscription = bus.subscribe(move |_| record(&entry_log, "hit"));

    bus.clone().publish(&AuthChangeEvent::logout());

    assert_eq!(*log.lock().expect("log lock"), vec!["hit".to_owned()]);
}

// =============================================================
// Cancellation
// =============================================================

#[test]
fn cancelled_subscriber_no_longer_receives_events() {
    let bus = AuthBus::new();
    let log = Arc::new(Mutex::new(Vec::new()));

    let entry_log = Arc::clone(&log);
    let subscription = bus.subscribe(move |_| record(&entry_log, "hit"));

    bus.publish(&AuthChangeEvent::logout());
    subscription.cancel();
    bus.publish(&AuthChangeEvent::logout());

    assert_eq!(*log.lock().expect("log lock"), vec!["hit".to_owned()]);
    assert_eq!(bus.subscriber_count(), 0);
}

#[test]
fn dropping_the_handle_unsubscribes() {
    let bus = AuthBus::new();
    {
        let _subscription = bus.subscribe(|_| {});
        assert_eq!(bus.subscriber_count(), 1);
    }
    assert_eq!(bus.subscriber_count(), 0);
}

#[test]
fn subscriber_cancelled_mid_pass_is_skipped() {
    let bus = AuthBus::new();
    let log = Arc::new(Mutex::new(Vec::new()));
    let victim: Arc<Mutex<Option<Subscription>>> = Arc::new(Mutex::new(None));

    let first_log = Arc::clone(&log);
    let victim_slot = Arc::clone(&victim);
    let _first = bus.subscribe(move |_| {
        record(&first_log, "first");
        if let Some(subscription) = victim_slot.lock().expect("victim lock").take() {
            subscription.cancel();
        }
    });

    let second_log = Arc::clone(&log);
    let second = bus.subscribe(move |_| record(&second_log, "second"));
    *victim.lock().expect("victim lock") = Some(second);

    bus.publish(&AuthChangeEvent::logout());

    assert_eq!(*log.lock().expect("log lock"), vec!["first".to_owned()]);
}

#[test]
fn subscriber_added_mid_pass_waits_for_the_next_publish() {
    let bus = AuthBus::new();
    let log = Arc::new(Mutex::new(Vec::new()));
    let added: Arc<Mutex<Vec<Subscription>>> = Arc::new(Mutex::new(Vec::new()));

    let outer_bus = bus.clone();
    let outer_log = Arc::clone(&log);
    let added_slot = Arc::clone(&added);
    let _first = bus.subscribe(move |_| {
        record(&outer_log, "outer");
        let mut slot = added_slot.lock().expect("added lock");
        if slot.is_empty() {
            let inner_log = Arc::clone(&outer_log);
            slot.push(outer_bus.subscribe(move |_| record(&inner_log, "inner")));
        }
    });

    bus.publish(&AuthChangeEvent::logout());
    assert_eq!(*log.lock().expect("log lock"), vec!["outer".to_owned()]);

    bus.publish(&AuthChangeEvent::logout());
    assert_eq!(
        *log.lock().expect("log lock"),
        vec!["outer".to_owned(), "outer".to_owned(), "inner".to_owned()]
    );
}

// =============================================================
// Event shape
// =============================================================

#[test]
fn login_constructor_carries_the_user() {
    let event = AuthChangeEvent::login(Some(sample_user()));
    assert_eq!(event.status, AuthStatus::Login);
    assert_eq!(event.user, Some(sample_user()));
}

#[test]
fn logout_constructor_has_no_user() {
    let event = AuthChangeEvent::logout();
    assert_eq!(event.status, AuthStatus::Logout);
    assert!(event.user.is_none());
}

#[test]
fn status_serializes_to_lowercase_strings() {
    assert_eq!(
        serde_json::to_value(AuthStatus::Login).expect("serialize"),
        serde_json::json!("login")
    );
    assert_eq!(
        serde_json::to_value(AuthStatus::Logout).expect("serialize"),
        serde_json::json!("logout")
    );
}

#[test]
fn event_deserializes_without_a_user_field() {
    let event: AuthChangeEvent =
        serde_json::from_str(r#"{"status":"login"}"#).expect("deserialize");
    assert_eq!(event.status, AuthStatus::Login);
    assert!(event.user.is_none());
}

#[test]
fn event_round_trips_through_json() {
    let event = AuthChangeEvent::login(Some(sample_user()));
    let json = serde_json::to_string(&event).expect("serialize");
    let back: AuthChangeEvent = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, event);
}
