//! # todo-dashboard
//!
//! Leptos + WASM client for a personal todo service.
//!
//! Users sign up or log in against a remote REST API, receive a bearer token
//! that is kept in `localStorage`, and manage their todo list from a
//! protected dashboard. All list state is a mirror of the server and is only
//! changed after the server confirms a mutation.
//!
//! Browser-only pieces (fetch, `localStorage`, location, timers) sit behind
//! the `csr` feature; everything else, including the sync logic the pages
//! drive, builds and tests natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_support;

/// Install logging and panic reporting, then mount [`app::App`] on `<body>`.
#[cfg(feature = "csr")]
pub fn mount() {
    console_error_panic_hook::set_once();
    // Only fails if a logger is already installed.
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
