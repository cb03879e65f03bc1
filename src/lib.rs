//! # amber-client
//!
//! Leptos + WASM frontend for the Amber file service. Provides login/signup,
//! client-side session persistence, guarded routing, and a dashboard for
//! permission-checked file search and multipart upload against the remote
//! HTTP API.
//!
//! This crate contains pages, components, application state, and the HTTP
//! client layer. The remote API server is an external collaborator; the
//! contract this crate owns is what session state exists, how it
//! transitions, and which screens it gates.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
