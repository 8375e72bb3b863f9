//! Structured logging utilities.
//!
//! Provides context-aware logging with pass_id, record kind and uuid
//! included in every log message.

use std::fmt;

use crate::records::RecordKind;

/// Logging context for a synchronization pass.
#[derive(Debug, Clone)]
pub struct LogContext {
    pub pass_id: String,
    pub kind: Option<RecordKind>,
    pub uuid: Option<String>,
}

impl LogContext {
    pub fn new(pass_id: &str) -> Self {
        Self {
            pass_id: pass_id.to_string(),
            kind: None,
            uuid: None,
        }
    }

    pub fn with_kind(&self, kind: RecordKind) -> Self {
        Self {
            kind: Some(kind),
            ..self.clone()
        }
    }

    pub fn with_uuid(&self, uuid: &str) -> Self {
        Self {
            uuid: Some(uuid.to_string()),
            ..self.clone()
        }
    }
}

impl fmt::Display for LogContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[pass={}]", self.pass_id)?;
        if let Some(kind) = self.kind {
            write!(f, " [kind={}]", kind)?;
        }
        if let Some(uuid) = &self.uuid {
            write!(f, " [uuid={}]", uuid)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_context_display() {
        let ctx = LogContext::new("pass-123");
        assert_eq!(format!("{}", ctx), "[pass=pass-123]");

        let ctx = ctx.with_kind(RecordKind::Account).with_uuid("abc-1");
        assert_eq!(
            format!("{}", ctx),
            "[pass=pass-123] [kind=account] [uuid=abc-1]"
        );
    }
}
