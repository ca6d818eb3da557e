//! Landing-page feature cards, horizontally scrollable on narrow screens.

use leptos::prelude::*;

const FEATURES: [(&str, &str); 3] = [
    ("🌍 Global Community", "Connect with creators worldwide."),
    ("📸 Image Sharing", "Post and discover stunning visuals."),
    ("🖤 Real-time Engagement", "Like, comment, and interact instantly."),
];

#[component]
pub fn FeaturesSection() -> impl IntoView {
    view! {
        <section class="features">
            <h2>"Why Choose Pulse?"</h2>
            <div class="features-scroll-wrapper">
                <div class="features-grid">
                    {FEATURES
                        .iter()
                        .map(|(title, desc)| {
                            view! {
                                <div class="feature-card hover-lift">
                                    <h3>{*title}</h3>
                                    <p>{*desc}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
