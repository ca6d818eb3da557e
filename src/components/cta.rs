//! Closing call-to-action on the landing page.

use leptos::prelude::*;

use super::button::LinkButton;

#[component]
pub fn Cta() -> impl IntoView {
    view! {
        <section class="cta">
            <div class="cta-content fade-in-up">
                <h2>"Join the Pulse Community Today"</h2>
                <p>"Share. Connect. Inspire. Sign up now and start your journey!"</p>
                <div class="cta-buttons">
                    <LinkButton href="/signup">"🚀 Get Started"</LinkButton>
                    <LinkButton href="/explore" secondary=true>"🔍 Explore"</LinkButton>
                </div>
            </div>
        </section>
    }
}
