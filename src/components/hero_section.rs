//! Landing-page hero banner.

use leptos::prelude::*;

use super::button::LinkButton;

#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero-content fade-in-down">
                <h1 class="hero-title">"Welcome to Pulse 🌟"</h1>
                <p class="hero-subtitle">"Share. Connect. Inspire."</p>
                <div class="hero-buttons fade-in-delayed">
                    <LinkButton href="/signup">"🚀 Get Started"</LinkButton>
                    <LinkButton href="/login" secondary=true>"🔐 Login"</LinkButton>
                </div>
            </div>
        </section>
    }
}
