//! Muted looping video behind the login card.

use leptos::prelude::*;

const VIDEO_SRC: &str = "https://www.pexels.com/download/video/8439541/";

#[component]
pub fn VideoBackground() -> impl IntoView {
    view! {
        <div class="video-background">
            <video autoplay=true loop=true muted=true playsinline=true>
                <source src=VIDEO_SRC type="video/mp4"/>
                "Your browser does not support the video tag."
            </video>
        </div>
    }
}
