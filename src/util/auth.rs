//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guest-only routes (`/login`, `/signup`) apply identical "already signed in"
//! redirect behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

/// Whether a guest-only page should send the user home.
pub fn should_leave_guest_page(state: &AuthState) -> bool {
    state.is_authenticated()
}

/// Redirect to `/` whenever a user is signed in.
pub fn install_guest_only_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if auth.with(should_leave_guest_page) {
            let options = NavigateOptions {
                replace: true,
                ..NavigateOptions::default()
            };
            navigate("/", options);
        }
    });
}
