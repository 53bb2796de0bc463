use super::*;

// =============================================================================
// Disabled guard
// =============================================================================
// The enabled path needs a mounted router and lives in the browser; the
// disabled path is plain enough to exercise here.

#[test]
fn disabled_guard_is_constant_authorized() {
    let verdict = use_route_guard(false);

    assert_eq!(verdict.get_untracked(), Verdict::Authorized);
    assert!(verdict.get_untracked().allows_render());
}
