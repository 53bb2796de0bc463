use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn router_starts_not_ready_and_idle() {
    let state = RouterState::default();
    assert!(!state.ready);
    assert!(!state.in_transition);
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn mark_ready_sticks() {
    let mut state = RouterState::default();
    state.mark_ready();
    state.mark_ready();
    assert!(state.ready);
}

#[test]
fn started_then_completed_returns_to_idle() {
    let mut state = RouterState::default();
    state.transition_started();
    assert!(state.in_transition);
    state.transition_completed();
    assert!(!state.in_transition);
}

#[test]
fn started_then_failed_returns_to_idle() {
    let mut state = RouterState::default();
    state.transition_started();
    state.transition_failed();
    assert!(!state.in_transition);
}

#[test]
fn completing_does_not_unready_the_router() {
    let mut state = RouterState::default();
    state.mark_ready();
    state.transition_started();
    state.transition_completed();
    assert!(state.ready);
}
