//! MenoSense browser client.
//!
//! ARCHITECTURE
//! ============
//! `net` talks to the hosted identity and document backends, `services` runs
//! the account flows over those seams, `state` holds the signals shared by
//! context, and `app` wires routes through the auth gate. The `hydrate`
//! feature builds the WASM entry point; `ssr` lets the host render the shell.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod services;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("menosense client starting");
    leptos::mount::hydrate_body(app::App);
}
