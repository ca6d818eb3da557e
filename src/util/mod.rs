//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and form predicates
//! from page and component logic to improve reuse and testability.

pub mod auth;
pub mod browser_storage;
pub mod oauth;
pub mod validation;
