//! VastraVaani - AI fashion studio
//!
//! A Leptos single-page dashboard for trend analysis, color and fabric
//! intelligence, styling chat, pricing, bookmarks, AR try-on and AI design
//! generation. The server binary hosts the app and proxies `/api` to the
//! AI backend.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
