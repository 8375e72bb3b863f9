//! Pipeline orchestration module.
//!
//! Drives one synchronization pass over listing pages:
//! - per-record normalization with failure capture
//! - pass-level context and correlated logging
//! - uuid indexing (see `crate::index`) after normalization completes

pub mod batch;
pub mod context;

pub use batch::*;
pub use context::*;
