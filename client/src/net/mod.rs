//! Networking modules for the auth service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the login round trip, `transport` abstracts the HTTP client,
//! `error` defines the failure taxonomy and `types` the wire schema.

pub mod api;
pub mod error;
#[cfg(test)]
pub(crate) mod test_transport;
pub mod transport;
pub mod types;
