//! Google sign-in via the OAuth 2.0 implicit flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! The "Continue with Google" button stores a random `state` in
//! `sessionStorage` and sends the browser to Google's authorize endpoint,
//! asking for an `id_token` in the URL fragment. Google redirects back to
//! [`CALLBACK_PATH`], where the callback page checks `state` and hands the
//! token to the session manager.

#[cfg(test)]
#[path = "oauth_test.rs"]
mod oauth_test;

use crate::error::OAuthError;
use crate::util::browser_storage::{self, StorageArea};

pub const GOOGLE_AUTHORIZE_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
pub const CALLBACK_PATH: &str = "/auth/google/callback";
const SCOPES: &str = "openid email profile";
const STATE_STORAGE_KEY: &str = "pulse_oauth_state";

/// Random opaque value for `state` / `nonce`.
pub fn random_token() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

/// Google authorize URL requesting an ID token in the redirect fragment.
pub fn authorize_url(client_id: &str, redirect_uri: &str, state: &str, nonce: &str) -> String {
    format!(
        "{GOOGLE_AUTHORIZE_URL}?client_id={}&redirect_uri={}&response_type=id_token\
         &scope={}&state={}&nonce={}",
        urlencoding::encode(client_id),
        urlencoding::encode(redirect_uri),
        urlencoding::encode(SCOPES),
        urlencoding::encode(state),
        urlencoding::encode(nonce),
    )
}

/// Extract the ID token from a callback fragment such as
/// `#id_token=...&state=...`.
///
/// # Errors
///
/// Provider-reported errors, a `state` that does not match the one stored
/// before the redirect, or a fragment without an ID token.
pub fn parse_callback_fragment(
    fragment: &str,
    expected_state: Option<&str>,
) -> Result<String, OAuthError> {
    let mut id_token = None;
    let mut state = None;
    let mut error = None;
    let pairs = fragment.trim_start_matches('#').split('&');
    for pair in pairs.filter(|p| !p.is_empty()) {
        let (key, raw) = pair.split_once('=').unwrap_or((pair, ""));
        let value = urlencoding::decode(raw)
            .map_or_else(|_| raw.to_owned(), std::borrow::Cow::into_owned);
        match key {
            "id_token" => id_token = Some(value),
            "state" => state = Some(value),
            "error" => error = Some(value),
            _ => {}
        }
    }

    if let Some(error) = error {
        return Err(OAuthError::Provider(error));
    }
    match (state.as_deref(), expected_state) {
        (Some(got), Some(want)) if got == want => {}
        _ => return Err(OAuthError::StateMismatch),
    }
    id_token
        .filter(|t| !t.is_empty())
        .ok_or(OAuthError::MissingToken)
}

/// Remember `state` for the callback page.
pub fn store_pending_state(state: &str) {
    browser_storage::set_item(StorageArea::Session, STATE_STORAGE_KEY, state);
}

/// Read and forget the `state` stored before the redirect.
pub fn take_pending_state() -> Option<String> {
    let state = browser_storage::get_item(StorageArea::Session, STATE_STORAGE_KEY);
    browser_storage::remove_item(StorageArea::Session, STATE_STORAGE_KEY);
    state
}

/// Send the browser to Google. No-op outside the browser.
pub fn begin_redirect(client_id: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Ok(origin) = window.location().origin() else {
            log::warn!("cannot start Google sign-in: window origin unavailable");
            return;
        };
        let state = random_token();
        store_pending_state(&state);
        let redirect_uri = format!("{origin}{CALLBACK_PATH}");
        let url = authorize_url(client_id, &redirect_uri, &state, &random_token());
        let _ = window.location().set_href(&url);
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = client_id;
    }
}

/// Fragment of the current URL (including `#`), if any.
pub fn current_fragment() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        web_sys::window()?
            .location()
            .hash()
            .ok()
            .filter(|h| !h.is_empty())
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}
