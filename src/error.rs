//! Error taxonomy for listing normalization.
//!
//! Every normalizer returns a tagged result; a record that trips any of
//! these errors is dropped from the batch output, never emitted half-filled.

use thiserror::Error;

/// Per-record normalization failure.
///
/// Each variant aborts the single offending record only; the batch driver
/// in `pipeline::batch` collects failures and keeps going.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    /// The listing object lacks a field the record kind treats as mandatory
    /// (`id` everywhere; also e.g. the nested `user` element on accounts).
    #[error("missing required field `{field}`")]
    MissingRequiredField { field: &'static str },

    /// An external string or integer code that maps to no known local
    /// enum member. Never silently defaulted.
    #[error("unrecognized value `{value}` for field `{field}`")]
    UnrecognizedEnumValue { field: &'static str, value: String },

    /// A field is present but its JSON type cannot be coerced to the
    /// expected one.
    #[error("field `{field}` has incompatible type (found {found})")]
    TypeMismatch {
        field: &'static str,
        found: &'static str,
    },
}

impl NormalizeError {
    /// The listing field the error is about.
    pub fn field(&self) -> &'static str {
        match self {
            NormalizeError::MissingRequiredField { field } => field,
            NormalizeError::UnrecognizedEnumValue { field, .. } => field,
            NormalizeError::TypeMismatch { field, .. } => field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = NormalizeError::MissingRequiredField { field: "id" };
        assert_eq!(err.to_string(), "missing required field `id`");

        let err = NormalizeError::UnrecognizedEnumValue {
            field: "state",
            value: "bogus".to_string(),
        };
        assert_eq!(err.to_string(), "unrecognized value `bogus` for field `state`");
    }

    #[test]
    fn test_error_field_accessor() {
        let err = NormalizeError::TypeMismatch {
            field: "disksize",
            found: "array",
        };
        assert_eq!(err.field(), "disksize");
    }
}
