//! Sync-pass context management.
//!
//! Provides the per-pass identity and timestamps used for logging and
//! correlation across one synchronization run.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::logging::context::LogContext;
use crate::records::RecordKind;

/// Context for one synchronization pass over the external API.
#[derive(Debug, Clone)]
pub struct SyncContext {
    pub pass_id: String,
    pub started_at: DateTime<Utc>,
    /// When the listing snapshot was fetched, as reported by the caller.
    pub listed_at: Option<DateTime<Utc>>,
}

impl SyncContext {
    pub fn new(listed_at: Option<&str>) -> Self {
        let pass_id = format!("pass-{}", &Uuid::new_v4().to_string()[..8]);

        let listed = listed_at.and_then(|ts| {
            DateTime::parse_from_rfc3339(ts)
                .map(|dt| dt.with_timezone(&Utc))
                .ok()
        });

        Self {
            pass_id,
            started_at: Utc::now(),
            listed_at: listed,
        }
    }

    pub fn log_context(&self) -> LogContext {
        LogContext::new(&self.pass_id)
    }

    /// Log context scoped to one record kind.
    pub fn kind_context(&self, kind: RecordKind) -> LogContext {
        self.log_context().with_kind(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pass_id_shape() {
        let ctx = SyncContext::new(None);
        assert!(ctx.pass_id.starts_with("pass-"));
        assert_eq!(ctx.pass_id.len(), "pass-".len() + 8);
    }

    #[test]
    fn test_listed_at_parsing() {
        let ctx = SyncContext::new(Some("2026-08-30T12:00:00Z"));
        assert!(ctx.listed_at.is_some());

        let ctx = SyncContext::new(Some("not a timestamp"));
        assert!(ctx.listed_at.is_none());
    }
}
