#![recursion_limit = "256"]
//! QuoteGen: a quote-display app with mock accounts, locally persisted
//! saved quotes, and social-sharing shortcuts.
//!
//! Everything runs in the browser tab. "Login" writes a user record to
//! `localStorage`, saved quotes are an id array under a second key, and
//! the server side only renders and serves the app.

pub mod app;
pub mod catalog;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// Client entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(crate::app::App);
}
