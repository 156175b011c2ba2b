//! # client
//!
//! Leptos + WASM frontend for the Constella night-sky page.
//!
//! This crate contains the pages, components, and application state around
//! the star field. It integrates with the `starfield` crate for imperative
//! canvas rendering via the `StarfieldHost` bridge component.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;

/// Initialize logging and mount the application to `<body>`.
pub fn mount() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
