//! Email field with live format feedback.

use leptos::prelude::*;

use crate::util::validation::is_valid_email;

#[component]
pub fn EmailInput(value: RwSignal<String>) -> impl IntoView {
    let touched = RwSignal::new(false);
    let invalid = move || touched.get() && value.with(|v| !is_valid_email(v.trim()));

    view! {
        <div class="input-group">
            <input
                type="email"
                name="email"
                placeholder="Email"
                required=true
                autocomplete="email"
                prop:value=move || value.get()
                on:input=move |ev| {
                    touched.set(true);
                    value.set(event_target_value(&ev));
                }
            />
            <Show when=invalid>
                <span class="error-text">"Invalid email format"</span>
            </Show>
        </div>
    }
}
