//! Wire DTOs for the auth service boundary.
//!
//! DESIGN
//! ======
//! `Credentials` is both the form model and the request body, so its field
//! set is closed: updates go through [`CredentialField`], which only knows
//! the two wire keys.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Email/password pair collected by the login form.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    /// Return a new value with `field` replaced and every other field kept.
    #[must_use]
    pub fn with_field(&self, field: CredentialField, value: impl Into<String>) -> Self {
        let value = value.into();
        match field {
            CredentialField::Email => Self { email: value, ..self.clone() },
            CredentialField::Password => Self { password: value, ..self.clone() },
        }
    }
}

/// The closed set of credential keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CredentialField {
    Email,
    Password,
}

impl CredentialField {
    pub const ALL: [Self; 2] = [Self::Email, Self::Password];

    /// Wire key, also used as the input's `name`/`id`.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown credential field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for CredentialField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| UnknownField(s.to_owned()))
    }
}

/// Structured rejection body returned by the auth service on non-2xx.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

/// Raw HTTP outcome as seen by the workflow, independent of the transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl HttpReply {
    /// Whether the status is in the 2xx range.
    #[must_use]
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
