//! Typed field reads from listing JSON.
//!
//! CloudStack listing objects are loosely typed: ports arrive as strings,
//! booleans sometimes as `"true"`, sizes as numbers. These helpers give
//! callers a three-way answer for each field: present-and-compatible,
//! absent (missing or JSON null), or present-but-incompatible. Absent is
//! always distinguishable from `""`, `0` and `false`.

use serde_json::Value;

use crate::error::NormalizeError;

/// JSON type name used in mismatch errors.
fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Look up `key` on an object, treating JSON null as absent.
///
/// A non-object input is reported as a mismatch on the requested field so
/// normalizers never panic on malformed listing pages.
fn field<'a>(obj: &'a Value, key: &'static str) -> Result<Option<&'a Value>, NormalizeError> {
    match obj {
        Value::Object(map) => Ok(map.get(key).filter(|v| !v.is_null())),
        other => Err(NormalizeError::TypeMismatch {
            field: key,
            found: json_type(other),
        }),
    }
}

/// Read an optional string field.
pub fn opt_str(obj: &Value, key: &'static str) -> Result<Option<String>, NormalizeError> {
    match field(obj, key)? {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(NormalizeError::TypeMismatch {
            field: key,
            found: json_type(other),
        }),
    }
}

/// Read a required string field (used for `id`).
pub fn req_str(obj: &Value, key: &'static str) -> Result<String, NormalizeError> {
    opt_str(obj, key)?.ok_or(NormalizeError::MissingRequiredField { field: key })
}

/// Read an optional integer field.
///
/// Numeric strings coerce (`"22"` -> 22), matching how the API emits port
/// numbers; anything else that is present is a mismatch.
pub fn opt_i64(obj: &Value, key: &'static str) -> Result<Option<i64>, NormalizeError> {
    match field(obj, key)? {
        None => Ok(None),
        Some(Value::Number(n)) => n.as_i64().map(Some).ok_or(NormalizeError::TypeMismatch {
            field: key,
            found: "non-integer number",
        }),
        Some(Value::String(s)) => match s.trim().parse::<i64>() {
            Ok(n) => Ok(Some(n)),
            Err(_) => Err(NormalizeError::TypeMismatch {
                field: key,
                found: "non-numeric string",
            }),
        },
        Some(other) => Err(NormalizeError::TypeMismatch {
            field: key,
            found: json_type(other),
        }),
    }
}

/// Read an optional boolean field.
///
/// Accepts the string and numeric spellings the API uses interchangeably.
pub fn opt_bool(obj: &Value, key: &'static str) -> Result<Option<bool>, NormalizeError> {
    match field(obj, key)? {
        None => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(Value::String(s)) => match s.to_lowercase().as_str() {
            "true" | "1" | "yes" => Ok(Some(true)),
            "false" | "0" | "no" => Ok(Some(false)),
            _ => Err(NormalizeError::TypeMismatch {
                field: key,
                found: "non-boolean string",
            }),
        },
        Some(Value::Number(n)) => match n.as_i64() {
            Some(i) => Ok(Some(i != 0)),
            None => Err(NormalizeError::TypeMismatch {
                field: key,
                found: "non-integer number",
            }),
        },
        Some(other) => Err(NormalizeError::TypeMismatch {
            field: key,
            found: json_type(other),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_opt_str_present_absent_null() {
        let obj = json!({"name": "vm-1", "gone": null});
        assert_eq!(opt_str(&obj, "name").unwrap(), Some("vm-1".to_string()));
        assert_eq!(opt_str(&obj, "missing").unwrap(), None);
        assert_eq!(opt_str(&obj, "gone").unwrap(), None);
    }

    #[test]
    fn test_opt_str_mismatch() {
        let obj = json!({"name": 42});
        let err = opt_str(&obj, "name").unwrap_err();
        assert_eq!(
            err,
            NormalizeError::TypeMismatch {
                field: "name",
                found: "number"
            }
        );
    }

    #[test]
    fn test_req_str() {
        let obj = json!({"id": "abc-123"});
        assert_eq!(req_str(&obj, "id").unwrap(), "abc-123");

        let empty = json!({});
        assert_eq!(
            req_str(&empty, "id").unwrap_err(),
            NormalizeError::MissingRequiredField { field: "id" }
        );
    }

    #[test]
    fn test_opt_i64_coercion() {
        let obj = json!({"startport": "22", "endport": 80, "cidrlist": "0.0.0.0/0"});
        assert_eq!(opt_i64(&obj, "startport").unwrap(), Some(22));
        assert_eq!(opt_i64(&obj, "endport").unwrap(), Some(80));
        assert_eq!(opt_i64(&obj, "missing").unwrap(), None);
        assert!(opt_i64(&obj, "cidrlist").is_err());
    }

    #[test]
    fn test_opt_bool_spellings() {
        let obj = json!({"a": true, "b": "true", "c": "no", "d": 1, "e": "maybe"});
        assert_eq!(opt_bool(&obj, "a").unwrap(), Some(true));
        assert_eq!(opt_bool(&obj, "b").unwrap(), Some(true));
        assert_eq!(opt_bool(&obj, "c").unwrap(), Some(false));
        assert_eq!(opt_bool(&obj, "d").unwrap(), Some(true));
        assert!(opt_bool(&obj, "e").is_err());
    }

    #[test]
    fn test_non_object_input() {
        let err = opt_str(&json!([1, 2]), "id").unwrap_err();
        assert_eq!(
            err,
            NormalizeError::TypeMismatch {
                field: "id",
                found: "array"
            }
        );
    }

    #[test]
    fn test_absent_distinct_from_defaults() {
        let obj = json!({"s": "", "n": 0, "b": false});
        assert_eq!(opt_str(&obj, "s").unwrap(), Some(String::new()));
        assert_eq!(opt_i64(&obj, "n").unwrap(), Some(0));
        assert_eq!(opt_bool(&obj, "b").unwrap(), Some(false));
    }
}
