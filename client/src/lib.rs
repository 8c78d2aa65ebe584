//! # client
//!
//! Leptos frontend for AuthentiScan. Renders the public landing page on the
//! server and hydrates it in the browser.
//!
//! The landing content is a fixed, typed description (`pages::landing`) so
//! the rendered markup and its navigation targets can be checked without a
//! browser.

pub mod app;
pub mod components;
pub mod pages;

/// WASM entry point: attach the client bundle to the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::debug!("hydrating {}", pages::landing::PRODUCT_NAME);
    leptos::mount::hydrate_body(app::App);
}
