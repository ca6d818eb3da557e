use super::*;
use crate::net::types::Session;

#[test]
fn should_leave_guest_page_when_signed_in() {
    let state = AuthState::Authenticated(Session::new("alice", "a@x.com"));
    assert!(should_leave_guest_page(&state));
}

#[test]
fn should_stay_while_loading() {
    assert!(!should_leave_guest_page(&AuthState::Loading));
}

#[test]
fn should_stay_when_signed_out() {
    assert!(!should_leave_guest_page(&AuthState::Unauthenticated));
}
