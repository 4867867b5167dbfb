//! # client
//!
//! Leptos + WASM frontend for the BRICS LLM analytics dashboard.
//!
//! This crate contains pages, components, view state, the HTTP wrapper, and
//! the `AnalyticsSource` data-access layer with its mock and remote
//! implementations. The root `brics` binary server-renders it with the `ssr`
//! feature; the browser bundle is built with `hydrate`.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod services;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and hydrates the server markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
