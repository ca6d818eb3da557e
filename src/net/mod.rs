//! Networking modules for the external auth service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls and normalizes failures, `types` defines the
//! wire schema shared with the session store.

pub mod api;
pub mod types;
