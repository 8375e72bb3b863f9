//! panda-sync - CloudStack listing normalization core
//!
//! This crate is the transformation layer between the CloudStack API's JSON
//! object model and the portal's canonical entity model, designed for
//! idempotent bulk synchronization. The implementation prioritizes:
//!
//! 1. **Purity** - normalization does no I/O and no resolution; the same
//!    listing object always yields the same record
//! 2. **Explicit failure** - a record that cannot be normalized is reported
//!    with its kind, uuid and a raw-JSON snippet, never emitted half-filled
//! 3. **Logging** - every pass, listing and rejection logged with full
//!    context
//!
//! ## Architecture
//!
//! The crate is organized into modules:
//! - `extraction` - typed field reads from listing JSON
//! - `records` - canonical record types and per-kind normalizers
//! - `resolve` - deferred parent-reference model and resolver seam
//! - `index` - uuid-keyed batch indexing with explicit duplicate policy
//! - `pipeline` - sync-pass context and batch normalization driver
//! - `logging` - structured logging with pass/record context
//! - `error` - normalization error taxonomy
//!
//! ## Flow
//!
//! A listing page fetched by the sync job flows through
//! [`pipeline::normalize_batch`] (per-object normalization), then
//! [`index::index_by_uuid`] (uuid-keyed map for diffing against stored
//! state), and finally each record's `resolve_parents` once its parent
//! kinds are synced and a [`resolve::ParentLookup`] is available.
//!
//! ```
//! use panda_sync::index::{index_by_uuid, DuplicatePolicy};
//! use panda_sync::pipeline::{normalize_batch, SyncContext};
//! use panda_sync::records::Nic;
//! use serde_json::json;
//!
//! let ctx = SyncContext::new(None);
//! let page = vec![json!({"id": "nic-1", "ipaddress": "10.0.0.5"})];
//!
//! let outcome = normalize_batch(&ctx, &page, Nic::from_listing);
//! assert!(outcome.is_clean());
//!
//! let indexed = index_by_uuid(outcome.normalized, DuplicatePolicy::LastWins).unwrap();
//! assert!(indexed.map.contains_key("nic-1"));
//! ```

pub mod error;
pub mod extraction;
pub mod index;
pub mod logging;
pub mod pipeline;
pub mod records;
pub mod resolve;

pub use error::NormalizeError;
pub use records::{RecordKind, SyncRecord};

/// Initialize the module-level logger.
///
/// Called by binaries and test harnesses; safe to call more than once.
pub fn init_logger() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp_millis()
        .try_init();
}
