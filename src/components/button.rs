//! Primary/secondary buttons and button-styled links.

#[cfg(test)]
#[path = "button_test.rs"]
mod button_test;

use leptos::prelude::*;

fn button_class(secondary: bool, disabled: bool) -> String {
    let base = if secondary {
        "btn btn-secondary"
    } else {
        "btn btn-primary"
    };
    let mut class = base.to_owned();
    if disabled {
        class.push_str(" btn-disabled");
    }
    class
}

/// A `<button>` that shows a spinner and disables itself while `busy`.
#[component]
pub fn Button(
    #[prop(optional)] secondary: bool,
    #[prop(default = "button")] kind: &'static str,
    #[prop(into, default = Signal::stored(false))] busy: Signal<bool>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type=kind
            class=move || button_class(secondary, busy.get())
            disabled=move || busy.get()
        >
            <Show when=move || busy.get()>
                <span class="spinner"></span>
            </Show>
            <span class="btn__label" class:btn__label--hidden=move || busy.get()>
                {children()}
            </span>
        </button>
    }
}

/// An in-app link styled as a button.
#[component]
pub fn LinkButton(
    href: &'static str,
    #[prop(optional)] secondary: bool,
    children: Children,
) -> impl IntoView {
    view! { <a href=href class=button_class(secondary, false)>{children()}</a> }
}
