//! # pulse
//!
//! Leptos + WASM frontend for the Pulse social platform: landing page, sign-up,
//! login, and the client-side session that ties them together.
//!
//! Authentication itself lives in an external service. This crate owns the
//! browser side of it: a [`state::session::SessionManager`] that talks to the
//! service through [`net::api::AuthClient`] and mirrors the signed-in user into
//! `localStorage` through [`state::session_store::SessionStore`].

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install panic/log hooks and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("pulse client starting");
    leptos::mount::mount_to_body(app::App);
}
