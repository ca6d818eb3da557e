//! Secondary links under the login form.

use leptos::prelude::*;

#[component]
pub fn AuthLinks() -> impl IntoView {
    view! {
        <div class="auth-links">
            <a href="/forgot-password">"Forgot Password? Reset Here"</a>
            <a href="/signup">"Don't have an account? Sign Up"</a>
        </div>
    }
}
