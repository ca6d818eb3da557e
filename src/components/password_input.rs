//! Password fields: a single field with a visibility toggle, and the sign-up
//! pair with strength meter and confirmation check.

use leptos::prelude::*;

use crate::util::validation::{PasswordStrength, passwords_match};

/// Password input with a show/hide toggle.
#[component]
pub fn PasswordField(
    value: RwSignal<String>,
    #[prop(default = "password")] name: &'static str,
    #[prop(default = "Password")] placeholder: &'static str,
    #[prop(default = "current-password")] autocomplete: &'static str,
) -> impl IntoView {
    let visible = RwSignal::new(false);

    view! {
        <div class="password-wrapper">
            <input
                type=move || if visible.get() { "text" } else { "password" }
                name=name
                placeholder=placeholder
                required=true
                autocomplete=autocomplete
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <button
                type="button"
                class="toggle-btn"
                aria-label=move || if visible.get() { "Hide password" } else { "Show password" }
                on:click=move |_| visible.update(|v| *v = !*v)
            >
                {move || if visible.get() { "Hide" } else { "Show" }}
            </button>
        </div>
    }
}

/// New-password field, strength meter, and confirmation with mismatch warning.
#[component]
pub fn NewPasswordInput(value: RwSignal<String>, confirm: RwSignal<String>) -> impl IntoView {
    let strength = move || value.with(|v| PasswordStrength::of(v));
    let mismatch = move || !value.with(|v| confirm.with(|c| passwords_match(v, c)));

    view! {
        <div class="input-group">
            <PasswordField value=value autocomplete="new-password"/>
            <span class=move || strength().css_class()>{move || strength().label()}</span>

            <PasswordField
                value=confirm
                name="confirmPassword"
                placeholder="Confirm Password"
                autocomplete="new-password"
            />
            <Show when=mismatch>
                <span class="error-text">"Passwords do not match"</span>
            </Show>
        </div>
    }
}
