//! Landing route for the Google OAuth redirect.
//!
//! Reads the ID token from the URL fragment, checks the `state` stored before
//! the redirect, and exchanges the token through the session manager.

use leptos::prelude::*;
#[cfg(feature = "csr")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::use_session;

#[component]
pub fn GoogleCallbackPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let status = RwSignal::new("Completing Google sign-in...".to_owned());
    let failed = RwSignal::new(false);

    #[cfg(feature = "csr")]
    {
        use crate::util::oauth;

        let fragment = oauth::current_fragment().unwrap_or_default();
        let expected = oauth::take_pending_state();
        match oauth::parse_callback_fragment(&fragment, expected.as_deref()) {
            Ok(token) => {
                let manager = session.get_value();
                leptos::task::spawn_local(async move {
                    match manager.sign_in_with_google(&token).await {
                        Ok(_) => {
                            let options = NavigateOptions {
                                replace: true,
                                ..NavigateOptions::default()
                            };
                            navigate("/", options);
                        }
                        Err(e) => {
                            status.set(e.to_string());
                            failed.set(true);
                        }
                    }
                });
            }
            Err(e) => {
                log::warn!("Google callback rejected: {e}");
                status.set(e.to_string());
                failed.set(true);
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (session, navigate);
    }

    view! {
        <section class="oauth-callback">
            <p class:error-text=move || failed.get()>{move || status.get()}</p>
            <Show when=move || failed.get()>
                <a href="/login" class="btn btn-secondary">"Back to login"</a>
            </Show>
        </section>
    }
}
