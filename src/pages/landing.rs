//! Public landing page: hero, features, testimonials and call-to-action.

use leptos::prelude::*;

use crate::components::{
    cta::Cta, features_section::FeaturesSection, hero_section::HeroSection,
    testimonials::Testimonials,
};

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing-page">
            <HeroSection/>
            <FeaturesSection/>
            <Testimonials/>
            <Cta/>
        </div>
    }
}
