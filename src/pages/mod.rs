//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (form submission, redirects,
//! calls into the session manager) and delegates rendering details to
//! `components`.

pub mod google_callback;
pub mod landing;
pub mod login;
pub mod signup;
