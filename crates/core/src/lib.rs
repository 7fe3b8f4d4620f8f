//! Domain layer for the taskboard backend.
//!
//! Holds the shared ID/timestamp aliases, the error taxonomy, and the pure
//! validation helpers used by both the store (`taskboard-db`) and the HTTP
//! layer (`taskboard-api`). No I/O happens in this crate.

pub mod error;
pub mod types;
pub mod validate;
