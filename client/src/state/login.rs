//! Login form state and the submission state machine.
//!
//! DESIGN
//! ======
//! `LoginState` is a plain reducer: the page feeds it [`LoginAction`]s and
//! executes the [`LoginCommand`] it returns (start a request, navigate).
//! Keeping side effects out of the reducer lets the whole workflow run
//! without a browser.
//!
//! Each submission carries a sequence number. Only the result whose number
//! matches the outstanding `Pending` submission is applied; anything else
//! is stale and dropped. Submit is refused while a request is pending and
//! after a success.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use serde_json::Value;

use crate::net::error::LoginError;
use crate::net::types::{CredentialField, Credentials};

/// Where the browser goes after a successful login.
pub const POST_LOGIN_PATH: &str = "/dashboard";
pub const SIGN_UP_PATH: &str = "/sign-up";
pub const FORGOT_PASSWORD_HREF: &str = "#";

/// Outcome of the most recent submission attempt.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Pending {
        seq: u64,
    },
    Succeeded(Value),
    Failed(LoginError),
}

/// Everything needed to perform one submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmissionTicket {
    pub seq: u64,
    /// Snapshot taken when submit was pressed.
    pub credentials: Credentials,
}

#[derive(Clone, Debug, PartialEq)]
pub enum LoginAction {
    FieldInput { field: CredentialField, value: String },
    Submit,
    /// Placeholder federated login; intentionally does nothing.
    GoogleLogin,
    Resolved { seq: u64, result: Result<Value, LoginError> },
}

/// Side effect requested by the reducer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginCommand {
    None,
    Send(SubmissionTicket),
    Navigate(&'static str),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginState {
    pub credentials: Credentials,
    pub submission: SubmissionState,
    last_seq: u64,
}

impl LoginState {
    /// Apply one action and return the side effect the caller must run.
    pub fn apply(&mut self, action: LoginAction) -> LoginCommand {
        match action {
            LoginAction::FieldInput { field, value } => {
                self.credentials = self.credentials.with_field(field, value);
                LoginCommand::None
            }
            LoginAction::Submit => self.begin_submit().map_or(LoginCommand::None, LoginCommand::Send),
            LoginAction::GoogleLogin => LoginCommand::None,
            LoginAction::Resolved { seq, result } => self.resolve(seq, result),
        }
    }

    fn begin_submit(&mut self) -> Option<SubmissionTicket> {
        // Succeeded is terminal: the form has already navigated away.
        if self.is_pending() || self.is_succeeded() {
            return None;
        }
        self.last_seq += 1;
        self.submission = SubmissionState::Pending { seq: self.last_seq };
        Some(SubmissionTicket { seq: self.last_seq, credentials: self.credentials.clone() })
    }

    fn resolve(&mut self, seq: u64, result: Result<Value, LoginError>) -> LoginCommand {
        if self.pending_seq() != Some(seq) {
            leptos::logging::log!("dropping stale login result for submission {seq}");
            return LoginCommand::None;
        }
        match result {
            Ok(payload) => {
                self.submission = SubmissionState::Succeeded(payload);
                LoginCommand::Navigate(POST_LOGIN_PATH)
            }
            Err(err) => {
                leptos::logging::log!("login submission {seq} failed: {err}");
                self.submission = SubmissionState::Failed(err);
                LoginCommand::None
            }
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self.submission, SubmissionState::Pending { .. })
    }

    #[must_use]
    pub fn pending_seq(&self) -> Option<u64> {
        match self.submission {
            SubmissionState::Pending { seq } => Some(seq),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_succeeded(&self) -> bool {
        matches!(self.submission, SubmissionState::Succeeded(_))
    }

    #[must_use]
    pub fn error(&self) -> Option<&LoginError> {
        match &self.submission {
            SubmissionState::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Banner text, present only while the last outcome is a failure.
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        self.error().map(ToString::to_string)
    }
}
