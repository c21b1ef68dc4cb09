//! builtelo launch site
//!
//! Leptos front end for the pre-launch page: a full-screen hero reel and
//! a lead-capture form that notifies interested visitors at launch. The
//! same crate renders on the server (`ssr`) and hydrates in the browser
//! (`hydrate`).

pub mod app;
pub mod components;
pub mod net;
pub mod pages;

#[cfg(feature = "ssr")]
pub mod fileserv;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(app::App);
}
