//! Responsive navigation bar with guest/user controls.

use leptos::prelude::*;

use crate::app::use_session;
use crate::state::auth::AuthState;
use crate::util::validation::avatar_initial;

const NAV_LINKS: [(&str, &str); 3] = [
    ("/explore", "Explore"),
    ("/features", "Features"),
    ("/about", "About"),
];

fn initial_of(state: &AuthState) -> String {
    state
        .user()
        .map(|u| avatar_initial(&u.username))
        .unwrap_or_default()
}

/// Top navigation bar shown on every route.
#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = use_session();
    let menu_open = RwSignal::new(false);

    let signed_in = move || auth.with(AuthState::is_authenticated);
    let initial = move || auth.with(initial_of);
    let toggle_menu = move |_| menu_open.update(|open| *open = !*open);
    let close_menu = move |_| menu_open.set(false);
    let logout = move |_| {
        session.get_value().logout();
        menu_open.set(false);
    };

    view! {
        <nav class="navbar">
            <div class="nav-container">
                <a href="/" class="logo">"PULSE 🌟"</a>

                <ul class="nav-links">
                    {NAV_LINKS
                        .iter()
                        .map(|(href, label)| view! { <li><a href=*href>{*label}</a></li> })
                        .collect_view()}
                </ul>

                <div class="auth-controls">
                    <Show
                        when=signed_in
                        fallback=|| {
                            view! {
                                <a href="/login" class="btn-secondary">"Login"</a>
                                <a href="/signup" class="btn-primary">"Sign Up"</a>
                            }
                        }
                    >
                        <div class="user-menu">
                            <button class="user-avatar" on:click=toggle_menu>{initial}</button>
                            <Show when=move || menu_open.get()>
                                <ul class="dropdown-menu">
                                    <li><a href="/profile" on:click=close_menu>"Profile"</a></li>
                                    <li on:click=logout>"Logout"</li>
                                </ul>
                            </Show>
                        </div>
                    </Show>
                </div>

                <div class="menu-toggle" on:click=toggle_menu>"☰"</div>

                <Show when=move || menu_open.get()>
                    <ul class="mobile-menu">
                        {NAV_LINKS
                            .iter()
                            .map(|(href, label)| {
                                view! { <li><a href=*href on:click=close_menu>{*label}</a></li> }
                            })
                            .collect_view()}
                        <Show
                            when=signed_in
                            fallback=move || {
                                view! {
                                    <li><a href="/login" on:click=close_menu>"Login"</a></li>
                                    <li><a href="/signup" on:click=close_menu>"Sign Up"</a></li>
                                }
                            }
                        >
                            <li><a href="/profile" on:click=close_menu>"Profile"</a></li>
                            <li on:click=logout>"Logout"</li>
                        </Show>
                    </ul>
                </Show>
            </div>
        </nav>
    }
}
