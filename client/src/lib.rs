//! CoachFit client application.
//!
//! ARCHITECTURE
//! ============
//! State lives in plain structs provided through Leptos context as
//! `RwSignal`s; pages orchestrate route-scoped flows; `util::guard` owns the
//! session-routing decision core; `net::api` talks to the companion server.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: mount the app onto the document body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
