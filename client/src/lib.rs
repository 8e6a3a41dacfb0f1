//! # client
//!
//! Leptos + WASM frontend for the location confirmation flow.
//!
//! This crate contains the app shell, the location modal component, its
//! testable state, the detection API call, and the storage capability the
//! modal persists through.

pub mod app;
pub mod components;
pub mod net;
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
