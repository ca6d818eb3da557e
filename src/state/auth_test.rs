use super::*;

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_is_loading() {
    let state = AuthState::default();
    assert!(state.is_loading());
    assert!(state.user().is_none());
}

#[test]
fn unauthenticated_has_no_user() {
    let state = AuthState::Unauthenticated;
    assert!(!state.is_loading());
    assert!(!state.is_authenticated());
    assert!(state.user().is_none());
}

#[test]
fn authenticated_exposes_session() {
    let state = AuthState::Authenticated(Session::new("alice", "a@x.com"));
    assert!(state.is_authenticated());
    assert_eq!(state.user().map(|u| u.username.as_str()), Some("alice"));
}
