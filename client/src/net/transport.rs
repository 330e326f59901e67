//! HTTP transport seam for the login workflow.
//!
//! Client-side (hydrate): `BrowserTransport` issues the request with
//! `gloo-net`. Native builds and tests supply their own implementation, so
//! the workflow in `api` never touches the browser directly.

use super::error::LoginError;
use super::types::HttpReply;

/// Sends a JSON `POST` and reports the raw reply.
///
/// Implementations return `Err` only when no HTTP response was obtained;
/// any status code, including 4xx/5xx, is an `Ok(HttpReply)`.
#[async_trait::async_trait(?Send)]
pub trait AuthTransport {
    /// # Errors
    ///
    /// [`LoginError::Network`] when the request fails before a response
    /// arrives, [`LoginError::Encode`] when the body cannot be attached.
    async fn post_json(&self, url: &str, body: String) -> Result<HttpReply, LoginError>;
}

/// Browser `fetch` transport: CORS, no cache, cookies included, redirects
/// followed, no referrer.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

#[cfg(feature = "hydrate")]
#[async_trait::async_trait(?Send)]
impl AuthTransport for BrowserTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<HttpReply, LoginError> {
        use gloo_net::http::Request;
        use web_sys::{ReferrerPolicy, RequestCache, RequestCredentials, RequestMode, RequestRedirect};

        let resp = Request::post(url)
            .mode(RequestMode::Cors)
            .cache(RequestCache::NoCache)
            .credentials(RequestCredentials::Include)
            .redirect(RequestRedirect::Follow)
            .referrer_policy(ReferrerPolicy::NoReferrer)
            .header("Content-Type", "application/json")
            .body(body)
            .map_err(|e| LoginError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| LoginError::Network(e.to_string()))?;

        let status = resp.status();
        let status_text = resp.status_text();
        let body = resp.text().await.map_err(|e| LoginError::Network(e.to_string()))?;
        Ok(HttpReply { status, status_text, body })
    }
}
