//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `auth` is the reactive view of who is signed in, `session_store` is the
//! durable mirror in `localStorage`, and `session` is the manager that keeps
//! the two in step.

pub mod auth;
pub mod session;
pub mod session_store;
