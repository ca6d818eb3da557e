//! Username field with click-to-fill suggestions.

use leptos::prelude::*;

use crate::util::validation::username_suggestions;

/// Username input. When `suggest` is set, ideas appear once the user starts
/// typing and clicking one replaces the value.
#[component]
pub fn UsernameInput(value: RwSignal<String>, #[prop(optional)] suggest: bool) -> impl IntoView {
    view! {
        <div class="input-group">
            <input
                type="text"
                name="username"
                placeholder="Username"
                required=true
                autocomplete="username"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <Show when=move || suggest && !value.with(String::is_empty)>
                <div class="suggestions">
                    <p>"Suggestions:"</p>
                    {username_suggestions()
                        .iter()
                        .map(|s| {
                            let s = *s;
                            view! { <span on:click=move |_| value.set(s.to_owned())>{s}</span> }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}
