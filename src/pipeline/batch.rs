//! Batch normalization driver.
//!
//! Applies a per-kind normalizer to every object of one listing page,
//! collecting successes and per-record failures side by side. One bad
//! record never aborts the batch, and a failed record never reaches the
//! output in partially-filled form.

use serde_json::Value;

use crate::error::NormalizeError;
use crate::records::{RecordKind, SyncRecord};

use super::context::SyncContext;

/// Raw-JSON snippet cap in failure reports.
const SNIPPET_MAX: usize = 240;

/// One record that failed normalization, with enough detail to locate the
/// offending external resource.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordFailure {
    pub kind: RecordKind,
    /// The external uuid, when the listing object at least carried one.
    pub uuid: Option<String>,
    pub error: NormalizeError,
    /// Truncated raw JSON of the offending object.
    pub snippet: String,
}

/// Result of normalizing one listing page.
#[derive(Debug)]
pub struct BatchOutcome<T> {
    pub received: usize,
    pub normalized: Vec<T>,
    pub failures: Vec<RecordFailure>,
}

impl<T> BatchOutcome<T> {
    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Normalize every object of a listing page with the given normalizer.
///
/// Each record is processed independently; failures are captured with the
/// record kind, the uuid when present, and a raw-JSON snippet. For
/// discriminated kinds (firewall/LB/port-forwarding rules) pass a closure
/// that applies the out-of-band traffic type.
pub fn normalize_batch<T, F>(ctx: &SyncContext, values: &[Value], normalize: F) -> BatchOutcome<T>
where
    T: SyncRecord,
    F: Fn(&Value) -> Result<T, NormalizeError>,
{
    let log_ctx = ctx.kind_context(T::KIND);

    log::info!("{} LISTING_RECEIVED records={}", log_ctx, values.len());

    let mut normalized = Vec::with_capacity(values.len());
    let mut failures = Vec::new();

    for value in values {
        match normalize(value) {
            Ok(record) => {
                log::debug!("{} RECORD_NORMALIZED", log_ctx.with_uuid(record.uuid()));
                normalized.push(record);
            }
            Err(error) => {
                let uuid = value
                    .get("id")
                    .and_then(Value::as_str)
                    .map(|s| s.to_string());

                log::warn!(
                    "{} RECORD_FAILED uuid={:?} error={}",
                    log_ctx,
                    uuid,
                    error
                );

                failures.push(RecordFailure {
                    kind: T::KIND,
                    uuid,
                    error,
                    snippet: snippet(value),
                });
            }
        }
    }

    log::info!(
        "{} LISTING_COMPLETE received={} normalized={} failed={}",
        log_ctx,
        values.len(),
        normalized.len(),
        failures.len()
    );

    BatchOutcome {
        received: values.len(),
        normalized,
        failures,
    }
}

/// Truncate a listing object to a loggable snippet, on a char boundary.
fn snippet(value: &Value) -> String {
    let mut raw = value.to_string();
    if raw.len() > SNIPPET_MAX {
        let mut cut = SNIPPET_MAX;
        while !raw.is_char_boundary(cut) {
            cut -= 1;
        }
        raw.truncate(cut);
        raw.push_str("...");
    }
    raw
}
