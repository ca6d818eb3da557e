//! Login page: credential form plus Google sign-in over a video backdrop.
//!
//! The auth service only exposes sign-up and Google token exchange, so the
//! credential form validates its input and then points the user at Google.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::{
    auth_links::AuthLinks, button::Button, google_oauth::GoogleOAuth, password_input::PasswordField,
    username_input::UsernameInput, video_background::VideoBackground,
};
use crate::state::auth::AuthState;
use crate::util::auth::install_guest_only_redirect;

const PASSWORD_LOGIN_UNAVAILABLE: &str =
    "Password sign-in is not available yet. Continue with Google instead.";

fn validate_login_input(username: &str, password: &str) -> Result<(), &'static str> {
    if username.trim().is_empty() || password.is_empty() {
        return Err("Enter your username and password.");
    }
    Ok(())
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_guest_only_redirect(auth, use_navigate());

    view! {
        <div class="login-page">
            <VideoBackground/>
            <div class="login-container">
                <h2>"Welcome Back!"</h2>
                <LoginForm/>
            </div>
        </div>
    }
}

#[component]
fn LoginForm() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (name, pass) = (username.get_untracked(), password.get_untracked());
        let message = match validate_login_input(&name, &pass) {
            Ok(()) => PASSWORD_LOGIN_UNAVAILABLE,
            Err(e) => e,
        };
        info.set(message.to_owned());
    };

    view! {
        <form class="login-form" on:submit=on_submit>
            <UsernameInput value=username/>
            <PasswordField value=password/>

            <Button kind="submit">"🔒 Login"</Button>
            <Show when=move || !info.get().is_empty()>
                <p class="login-message">{move || info.get()}</p>
            </Show>

            <div class="separator">"OR"</div>
            <GoogleOAuth/>
            <AuthLinks/>
        </form>
    }
}
