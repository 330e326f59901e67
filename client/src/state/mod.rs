//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State types are plain Rust values; pages wrap them in signals so the
//! transitions can be tested without a reactive runtime.

pub mod login;
