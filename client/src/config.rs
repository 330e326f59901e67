//! Client configuration for reaching the authentication service.
//!
//! DESIGN
//! ======
//! The auth origin is resolved once at startup. The SSR server reads it from
//! the environment and writes it into the document head; the hydrating
//! browser reads the same tag back so both sides agree on one value. The
//! resolved config is handed to components through Leptos context.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
pub const API_BASE_URL_ENV: &str = "AUTH_API_BASE_URL";
/// `<meta name=...>` carrying the resolved base URL into the browser.
pub const API_BASE_URL_META: &str = "auth-api-base-url";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Origin of the auth service, without a trailing slash.
    pub api_base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { api_base_url: DEFAULT_API_BASE_URL.to_owned() }
    }
}

impl ClientConfig {
    /// Build a config from a raw base URL.
    ///
    /// Surrounding whitespace and trailing slashes are dropped; a blank value
    /// falls back to [`DEFAULT_API_BASE_URL`].
    #[must_use]
    pub fn new(raw: &str) -> Self {
        let trimmed = raw.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Self::default();
        }
        Self { api_base_url: trimmed.to_owned() }
    }

    /// Config baked in at compile time via `AUTH_API_BASE_URL`, else the default.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::new(option_env!("AUTH_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL))
    }

    /// Resolve from the runtime environment (server side).
    #[must_use]
    pub fn from_env() -> Self {
        match std::env::var(API_BASE_URL_ENV) {
            Ok(raw) => Self::new(&raw),
            Err(_) => Self::from_build_env(),
        }
    }

    /// Read the base URL the server rendered into the document head.
    /// Falls back to [`ClientConfig::from_build_env`] if the tag is missing.
    #[cfg(feature = "hydrate")]
    #[must_use]
    pub fn from_document() -> Self {
        let selector = format!("meta[name=\"{API_BASE_URL_META}\"]");
        web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.query_selector(&selector).ok().flatten())
            .and_then(|meta| meta.get_attribute("content"))
            .map_or_else(Self::from_build_env, |raw| Self::new(&raw))
    }
}
