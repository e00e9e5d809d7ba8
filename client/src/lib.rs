//! # portfolio-client
//!
//! Leptos + WASM frontend for the personal portfolio page.
//!
//! The same crate renders on the server (`ssr`) and hydrates in the browser
//! (`hydrate`). It contains the static content, the animation state machines,
//! components and the page itself.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
