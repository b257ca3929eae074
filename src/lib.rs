//! # admin-console
//!
//! Leptos + WASM client for a user-management admin panel: OTP login,
//! token-pair session handling with single-flight refresh, and a CRUD
//! mirror of the backend's user directory.
//!
//! This crate contains pages, components, application state, and the REST
//! client. The backend (OTP delivery, JWT issuance, persistence) is a
//! separate service consumed over HTTP.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: attach the client runtime to the server-rendered
/// document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
