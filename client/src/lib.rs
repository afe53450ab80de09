//! # short-url-client
//!
//! Leptos + WASM front-end for the URL-shortening service.
//!
//! The crate renders one page: a form that submits long URLs to the external
//! shortening API, shows the resulting short link, copies it to the clipboard,
//! and deletes aliases. Alias generation, persistence, and redirection all
//! live in the remote service; this crate only holds UI state and the thin
//! HTTP client in `net`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::debug!("hydrating short-url client");
    leptos::mount::hydrate_body(app::App);
}
