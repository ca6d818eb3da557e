//! "Continue with Google" button.

use leptos::prelude::*;

use crate::config::AuthConfig;
use crate::util::oauth;

/// Starts the Google redirect, or explains why it cannot when no OAuth client
/// id was configured at build time.
#[component]
pub fn GoogleOAuth() -> impl IntoView {
    let config = expect_context::<AuthConfig>();
    let notice = RwSignal::new(None::<&'static str>);

    let on_click = move |_| {
        if let Some(client_id) = config.google_client_id.as_deref() {
            oauth::begin_redirect(client_id);
        } else {
            log::warn!("Google sign-in clicked but PULSE_GOOGLE_CLIENT_ID is not set");
            notice.set(Some("Google sign-in is not available right now."));
        }
    };

    view! {
        <button type="button" class="google-btn" on:click=on_click>
            "🟠 Continue with Google"
        </button>
        <Show when=move || notice.get().is_some()>
            <p class="error-text">{move || notice.get().unwrap_or_default()}</p>
        </Show>
    }
}
