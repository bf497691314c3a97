//! # client
//!
//! Leptos + WASM frontend for the beamdeck presentation tool.
//!
//! Two surfaces share one codebase: the presentation page (viewer; polls the
//! deck and mirrors the presenter's laser stroke) and the control page
//! (presenter; navigates slides and draws with the laser over the preview).
//! Both mount the `overlay` engine through the `LaserOverlayHost` bridge
//! component; only the sync direction differs.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM hydration entry point.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
