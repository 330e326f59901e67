//! Presentational components with no state of their own.

pub mod alert;
