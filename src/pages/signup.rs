//! Sign-up page: account form submitting through the session manager.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::app::use_session;
use crate::components::{
    button::Button, email_input::EmailInput, google_oauth::GoogleOAuth,
    password_input::NewPasswordInput, username_input::UsernameInput,
};
use crate::state::auth::AuthState;
use crate::util::auth::install_guest_only_redirect;
use crate::util::validation::{SignUpForm as SignUpFields, validate_sign_up};

#[component]
pub fn SignUpPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_guest_only_redirect(auth, use_navigate());

    view! {
        <section class="signup-page">
            <h1>"🚀 Join the Community"</h1>
            <SignUpForm/>
        </section>
    }
}

/// On success the session manager flips auth state and the guest-only
/// redirect takes the user home; on failure the service message is shown.
#[component]
fn SignUpForm() -> impl IntoView {
    let session = use_session();
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let fields = SignUpFields {
            username: username.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm.get_untracked(),
        };
        let request = match validate_sign_up(&fields) {
            Ok(request) => request,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        error.set(String::new());
        busy.set(true);

        #[cfg(feature = "csr")]
        {
            let manager = session.get_value();
            leptos::task::spawn_local(async move {
                if let Err(e) = manager.sign_up(request).await {
                    error.set(e.to_string());
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (session, request);
            busy.set(false);
        }
    };

    view! {
        <form class="signup-form" on:submit=on_submit>
            <UsernameInput value=username suggest=true/>
            <EmailInput value=email/>
            <NewPasswordInput value=password confirm=confirm/>

            <Button kind="submit" busy=busy>"🟢 Sign Up"</Button>
            <Show when=move || !error.get().is_empty()>
                <p class="error-text">{move || error.get()}</p>
            </Show>

            <div class="or-divider">"───────── OR ─────────"</div>
            <GoogleOAuth/>

            <p class="login-link">"Already have an account? " <a href="/login">"Login Here"</a></p>
        </form>
    }
}
