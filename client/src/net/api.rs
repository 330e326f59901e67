//! Login round trip against the auth service.
//!
//! The request goes out through an [`AuthTransport`]; this module owns the
//! endpoint shape and the translation of raw replies into a JSON payload or
//! a [`LoginError`].
//!
//! ERROR HANDLING
//! ==============
//! Nothing here panics or propagates past the submission boundary: every
//! outcome becomes `Result<Value, LoginError>` and then a
//! `LoginAction::Resolved` for the form state.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde_json::Value;

use super::error::LoginError;
use super::transport::AuthTransport;
use super::types::{Credentials, ErrorBody, HttpReply};
use crate::config::ClientConfig;
use crate::state::login::{LoginAction, SubmissionTicket};

pub const LOGIN_PATH: &str = "/api/auth/login";

/// Full URL of the login endpoint for `config`.
#[must_use]
pub fn login_endpoint(config: &ClientConfig) -> String {
    format!("{}{LOGIN_PATH}", config.api_base_url)
}

/// Status text as reported, or the canonical reason phrase when the
/// transport left it empty (HTTP/2 responses carry none).
fn status_text_or_reason(status: u16, status_text: String) -> String {
    if !status_text.is_empty() {
        return status_text;
    }
    http::StatusCode::from_u16(status)
        .ok()
        .and_then(|code| code.canonical_reason())
        .unwrap_or_default()
        .to_owned()
}

/// Turn a raw reply into the submission result.
///
/// # Errors
///
/// - [`LoginError::InvalidResponse`] for a 2xx body that is not JSON.
/// - [`LoginError::Rejected`] for a non-2xx body of the form `{"message": ...}`.
/// - [`LoginError::MalformedErrorBody`] for any other non-2xx body.
pub fn interpret_reply(reply: HttpReply) -> Result<Value, LoginError> {
    if reply.ok() {
        return serde_json::from_str(&reply.body).map_err(|e| LoginError::InvalidResponse(e.to_string()));
    }

    let HttpReply { status, status_text, body } = reply;
    let status_text = status_text_or_reason(status, status_text);
    match serde_json::from_str::<ErrorBody>(&body) {
        Ok(ErrorBody { message }) => Err(LoginError::Rejected { status, status_text, message }),
        Err(e) => {
            leptos::logging::warn!("login error body unreadable (status {status}): {e}");
            Err(LoginError::MalformedErrorBody { status, status_text, detail: e.to_string() })
        }
    }
}

/// `POST` the credentials to the login endpoint and interpret the reply.
///
/// # Errors
///
/// Returns a [`LoginError`] for transport failures and for any reply
/// [`interpret_reply`] rejects.
pub async fn login<T: AuthTransport>(
    transport: &T,
    config: &ClientConfig,
    credentials: &Credentials,
) -> Result<Value, LoginError> {
    let body = serde_json::to_string(credentials).map_err(|e| LoginError::Encode(e.to_string()))?;
    let reply = transport.post_json(&login_endpoint(config), body).await?;
    interpret_reply(reply)
}

/// Run one submission to completion and report it back as a state action.
pub async fn run_submission<T: AuthTransport>(
    transport: &T,
    config: &ClientConfig,
    ticket: SubmissionTicket,
) -> LoginAction {
    let result = login(transport, config, &ticket.credentials).await;
    LoginAction::Resolved { seq: ticket.seq, result }
}
