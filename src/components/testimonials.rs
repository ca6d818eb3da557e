//! Landing-page testimonials strip.

use leptos::prelude::*;

struct Testimonial {
    user: &'static str,
    text: &'static str,
    image: &'static str,
}

const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        user: "Alice M.",
        text: "Pulse changed the way I connect with others!",
        image: "/assets/users/alice.jpg",
    },
    Testimonial {
        user: "David K.",
        text: "The best social platform for creators.",
        image: "/assets/users/david.jpg",
    },
    Testimonial {
        user: "Emma T.",
        text: "Love the design and features. Super smooth!",
        image: "/assets/users/emma.jpg",
    },
];

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section class="testimonials">
            <h2 class="testimonials-title fade-in-down">"What Our Users Say"</h2>
            <div class="testimonials-scroll-wrapper">
                <div class="testimonial-grid">
                    {TESTIMONIALS
                        .iter()
                        .map(|review| {
                            view! {
                                <div class="testimonial-card hover-lift">
                                    <img src=review.image alt=review.user class="user-image"/>
                                    <p class="testimonial-text">{format!("\"{}\"", review.text)}</p>
                                    <span class="testimonial-user">{format!("- {}", review.user)}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
