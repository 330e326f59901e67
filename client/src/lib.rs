//! # login-client
//!
//! Leptos + WASM login form. Collects email/password credentials, posts
//! them to the auth service and redirects to `/dashboard` on success.
//!
//! The submission workflow (`state::login` + `net::api`) is plain Rust
//! behind the `AuthTransport` seam; only `BrowserTransport` and the page's
//! task spawning require the `hydrate` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;
    use crate::config::ClientConfig;

    console_error_panic_hook::set_once();
    // Logging is best-effort; a second init just fails.
    let _ = console_log::init_with_level(log::Level::Debug);

    let config = ClientConfig::from_document();
    leptos::logging::log!("hydrating login client against {}", config.api_base_url);
    leptos::mount::hydrate_body(move || leptos::view! { <App config=config.clone()/> });
}
