//! # levpay-web
//!
//! Leptos + WASM front-end for the LevPay payment platform: wallet,
//! transfers, billing, KYC, and admin tooling over the LevPay REST API.
//!
//! The crate splits into `session` (tokens, cookies, route gate), `net`
//! (authenticated HTTP client and endpoint groups), `state` (per-domain
//! UI mirrors), plus `pages` and `components` for the views.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;
pub mod util;

/// WASM entry point: attach the client-side app to the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
