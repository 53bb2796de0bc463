use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn prompt_starts_closed_with_no_target() {
    let prompt = PromptState::new();
    assert!(!prompt.is_open());
    assert!(prompt.target_path().is_none());
}

// =============================================================
// Opening
// =============================================================

#[test]
fn open_sets_the_flag_and_target() {
    let mut prompt = PromptState::new();
    prompt.open(Some("/orders".to_owned()));
    assert!(prompt.is_open());
    assert_eq!(prompt.target_path(), Some("/orders"));
}

#[test]
fn open_without_a_target_is_allowed() {
    let mut prompt = PromptState::new();
    prompt.open(None);
    assert!(prompt.is_open());
    assert!(prompt.target_path().is_none());
}

#[test]
fn opening_while_open_keeps_the_first_target() {
    let mut prompt = PromptState::new();
    prompt.open(Some("/orders".to_owned()));
    prompt.open(Some("/profile-gar".to_owned()));
    assert_eq!(prompt.target_path(), Some("/orders"));
}

// =============================================================
// Closing
// =============================================================

#[test]
fn close_clears_the_flag_but_keeps_the_target() {
    let mut prompt = PromptState::new();
    prompt.open(Some("/orders".to_owned()));
    prompt.close();
    assert!(!prompt.is_open());
    assert_eq!(prompt.target_path(), Some("/orders"));
}

#[test]
fn close_is_idempotent() {
    let mut prompt = PromptState::new();
    prompt.open(None);
    prompt.close();
    prompt.close();
    assert!(!prompt.is_open());
}

#[test]
fn reopening_after_close_takes_the_new_target() {
    let mut prompt = PromptState::new();
    prompt.open(Some("/orders".to_owned()));
    prompt.close();
    prompt.open(Some("/profile-gar".to_owned()));
    assert_eq!(prompt.target_path(), Some("/profile-gar"));
}
