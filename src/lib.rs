//! # pollgen-web
//!
//! Leptos + WASM frontend for the Poll Question Generation classroom polling
//! product: landing content, the sign-in / sign-up page, role home pages, and
//! the typed hook layer over the backend HTTP API.
//!
//! The crate is built twice: with `hydrate` into the browser bundle, and with
//! `ssr` into the `pollgen-web` host binary that renders the same components
//! on the server.

pub mod app;
pub mod auth;
pub mod components;
pub mod config;
pub mod hooks;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
