//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the navbar, landing sections and form fields. The ones
//! that care about the signed-in user read `RwSignal<AuthState>` from context;
//! none of them mutate it.

pub mod auth_links;
pub mod button;
pub mod cta;
pub mod email_input;
pub mod features_section;
pub mod google_oauth;
pub mod hero_section;
pub mod navbar;
pub mod password_input;
pub mod testimonials;
pub mod username_input;
pub mod video_background;
