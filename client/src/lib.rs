//! # client
//!
//! Leptos + WASM frontend for the Wayfarer travel site.
//!
//! Most of the site is presentational. The part with real behavior is the
//! sign-in session: `state::session` owns it, `net::auth` talks to the
//! sign-in webhook, and `util::auth` plus `components::require_session`
//! keep private routes behind it.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
