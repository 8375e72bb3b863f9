//! UUID-keyed batch indexing.
//!
//! Turns a normalized listing into a map keyed by external uuid for the
//! diff/upsert step. Duplicate uuids within one listing page are handled
//! by an explicit policy instead of silent map overwrite: the synchronizer
//! chooses between keeping the later record or rejecting the batch.

use std::collections::HashMap;

use thiserror::Error;

use crate::records::SyncRecord;

/// What to do when one listing page carries the same uuid twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Later record in iteration order wins; duplicates are reported in
    /// the outcome and logged. Mirrors the legacy overwrite behavior.
    LastWins,
    /// Treat any collision as an upstream bug and fail the batch.
    Reject,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexError {
    #[error("duplicate uuid `{uuid}` in listing")]
    DuplicateUuid { uuid: String },
}

/// Result of indexing one listing.
#[derive(Debug)]
pub struct IndexOutcome<T> {
    /// uuid -> record; exactly one entry per distinct uuid.
    pub map: HashMap<String, T>,
    /// Uuids that appeared more than once (one entry per extra occurrence).
    /// Empty under `Reject`, which errors instead.
    pub duplicate_uuids: Vec<String>,
}

/// Index records by uuid under the given duplicate policy.
///
/// All input records end up keyed by their own uuid; with `LastWins` the
/// later of two colliding records is kept.
pub fn index_by_uuid<T: SyncRecord>(
    records: Vec<T>,
    policy: DuplicatePolicy,
) -> Result<IndexOutcome<T>, IndexError> {
    let mut map: HashMap<String, T> = HashMap::with_capacity(records.len());
    let mut duplicate_uuids = Vec::new();

    for record in records {
        let uuid = record.uuid().to_string();
        if map.contains_key(&uuid) {
            match policy {
                DuplicatePolicy::Reject => {
                    return Err(IndexError::DuplicateUuid { uuid });
                }
                DuplicatePolicy::LastWins => duplicate_uuids.push(uuid.clone()),
            }
        }
        map.insert(uuid, record);
    }

    if !duplicate_uuids.is_empty() {
        log::warn!(
            "LISTING_DUPLICATES kind={} count={} uuids={:?}",
            T::KIND,
            duplicate_uuids.len(),
            duplicate_uuids
        );
    }

    Ok(IndexOutcome {
        map,
        duplicate_uuids,
    })
}
