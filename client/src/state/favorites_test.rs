use super::*;

// =============================================================
// Toggling
// =============================================================

#[test]
fn favorites_default_is_empty() {
    let favorites = FavoritesState::default();
    assert!(favorites.is_empty());
    assert_eq!(favorites.count(), 0);
}

#[test]
fn toggle_adds_a_new_part() {
    let mut favorites = FavoritesState::default();
    assert!(favorites.toggle("p-1"));
    assert!(favorites.contains("p-1"));
}

#[test]
fn toggle_twice_removes_the_part() {
    let mut favorites = FavoritesState::default();
    favorites.toggle("p-1");
    assert!(!favorites.toggle("p-1"));
    assert!(!favorites.contains("p-1"));
}

#[test]
fn toggle_keeps_other_parts_intact() {
    let mut favorites = FavoritesState::default();
    favorites.toggle("p-1");
    favorites.toggle("p-2");
    favorites.toggle("p-1");

    assert!(!favorites.contains("p-1"));
    assert!(favorites.contains("p-2"));
    assert_eq!(favorites.count(), 1);
}

#[test]
fn order_follows_insertion() {
    let mut favorites = FavoritesState::default();
    favorites.toggle("p-3");
    favorites.toggle("p-1");
    assert_eq!(favorites.part_ids, vec!["p-3".to_owned(), "p-1".to_owned()]);
}

// =============================================================
// Persistence shape
// =============================================================

#[test]
fn favorites_round_trip_through_json() {
    let mut favorites = FavoritesState::default();
    favorites.toggle("p-1");
    favorites.toggle("p-2");

    let json = serde_json::to_string(&favorites).expect("serialize");
    let back: FavoritesState = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, favorites);
}
