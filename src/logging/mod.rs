//! Structured logging with sync-pass context.
//!
//! Provides a log-line prefix type that carries pass_id, record kind and
//! uuid so every message in a pass can be correlated.

pub mod context;

pub use context::*;
