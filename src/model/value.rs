//! Tagged property value — the polymorphic holder behind every attribute.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::Result;

/// A dynamically-typed property value.
///
/// Property stores attach values of mixed types across all vertices of a
/// graph; a formatting pass later selects a single [`ValueKind`] and
/// ignores everything else. Tag dispatch is explicit variant matching,
/// never type identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum PropertyValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Bytes(Vec<u8>),
    Date(NaiveDate),
    DateTime(DateTime<Utc>),
}

/// Runtime type tag for [`PropertyValue`].
///
/// Supplied per formatting call, never stored beside a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueKind {
    Bool,
    Int,
    Float,
    String,
    Bytes,
    Date,
    DateTime,
}

impl ValueKind {
    pub fn type_name(&self) -> &'static str {
        match self {
            ValueKind::Bool => "BOOLEAN",
            ValueKind::Int => "INTEGER",
            ValueKind::Float => "FLOAT",
            ValueKind::String => "STRING",
            ValueKind::Bytes => "BYTES",
            ValueKind::Date => "DATE",
            ValueKind::DateTime => "DATETIME",
        }
    }
}

// ============================================================================
// Tag dispatch
// ============================================================================

impl PropertyValue {
    /// The runtime tag of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            PropertyValue::Bool(_) => ValueKind::Bool,
            PropertyValue::Int(_) => ValueKind::Int,
            PropertyValue::Float(_) => ValueKind::Float,
            PropertyValue::String(_) => ValueKind::String,
            PropertyValue::Bytes(_) => ValueKind::Bytes,
            PropertyValue::Date(_) => ValueKind::Date,
            PropertyValue::DateTime(_) => ValueKind::DateTime,
        }
    }

    /// Render this value as plain text if its tag equals `kind`.
    ///
    /// `Ok(None)` means the tag did not match; in a mixed collection
    /// that is the expected common case, not an error. `Err` is reserved for a
    /// tag-matched value that cannot produce text (bytes that are not
    /// valid UTF-8), which indicates corrupted property storage and is
    /// fatal to the calling export.
    ///
    /// The rendition is unquoted; DOT quoting is the caller's concern.
    pub fn try_as_string(&self, kind: ValueKind) -> Result<Option<String>> {
        if self.kind() != kind {
            return Ok(None);
        }
        let text = match self {
            PropertyValue::Bool(b) => b.to_string(),
            PropertyValue::Int(i) => i.to_string(),
            PropertyValue::Float(v) => v.to_string(),
            PropertyValue::String(s) => s.clone(),
            PropertyValue::Bytes(b) => String::from_utf8(b.clone())?,
            PropertyValue::Date(d) => d.to_string(),
            PropertyValue::DateTime(dt) => dt.to_rfc3339(),
        };
        Ok(Some(text))
    }
}

// ============================================================================
// Conversions (From impls)
// ============================================================================

impl From<bool> for PropertyValue { fn from(v: bool) -> Self { PropertyValue::Bool(v) } }
impl From<i32> for PropertyValue { fn from(v: i32) -> Self { PropertyValue::Int(v as i64) } }
impl From<i64> for PropertyValue { fn from(v: i64) -> Self { PropertyValue::Int(v) } }
impl From<f64> for PropertyValue { fn from(v: f64) -> Self { PropertyValue::Float(v) } }
impl From<String> for PropertyValue { fn from(v: String) -> Self { PropertyValue::String(v) } }
impl From<&str> for PropertyValue { fn from(v: &str) -> Self { PropertyValue::String(v.to_owned()) } }
impl From<Vec<u8>> for PropertyValue { fn from(v: Vec<u8>) -> Self { PropertyValue::Bytes(v) } }
impl From<NaiveDate> for PropertyValue { fn from(v: NaiveDate) -> Self { PropertyValue::Date(v) } }
impl From<DateTime<Utc>> for PropertyValue { fn from(v: DateTime<Utc>) -> Self { PropertyValue::DateTime(v) } }

// ============================================================================
// Display
// ============================================================================

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Bool(b) => write!(f, "{b}"),
            PropertyValue::Int(i) => write!(f, "{i}"),
            PropertyValue::Float(v) => write!(f, "{v}"),
            PropertyValue::String(s) => write!(f, "\"{}\"", s.replace('"', "\\\"")),
            PropertyValue::Bytes(b) => write!(f, "<bytes[{}]>", b.len()),
            PropertyValue::Date(d) => write!(f, "{d}"),
            PropertyValue::DateTime(dt) => write!(f, "{dt}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_from() {
        assert_eq!(PropertyValue::from("red"), PropertyValue::String("red".into()));
        assert_eq!(PropertyValue::from(5), PropertyValue::Int(5));
        assert_eq!(PropertyValue::from(3.14), PropertyValue::Float(3.14));
        assert_eq!(PropertyValue::from(true), PropertyValue::Bool(true));
    }

    #[test]
    fn test_kind() {
        assert_eq!(PropertyValue::from("red").kind(), ValueKind::String);
        assert_eq!(PropertyValue::from(5).kind(), ValueKind::Int);
        assert_eq!(PropertyValue::Bytes(vec![1, 2]).kind(), ValueKind::Bytes);
    }

    #[test]
    fn test_try_as_string_matching_tag() {
        let v = PropertyValue::from("blue");
        assert_eq!(v.try_as_string(ValueKind::String).unwrap(), Some("blue".into()));

        let v = PropertyValue::from(42);
        assert_eq!(v.try_as_string(ValueKind::Int).unwrap(), Some("42".into()));

        let v = PropertyValue::from(false);
        assert_eq!(v.try_as_string(ValueKind::Bool).unwrap(), Some("false".into()));
    }

    #[test]
    fn test_try_as_string_mismatched_tag_is_none_not_error() {
        let v = PropertyValue::from("blue");
        assert_eq!(v.try_as_string(ValueKind::Int).unwrap(), None);
        assert_eq!(v.try_as_string(ValueKind::Float).unwrap(), None);
    }

    #[test]
    fn test_try_as_string_corrupt_bytes_is_error() {
        let v = PropertyValue::Bytes(vec![0xff, 0xfe]);
        assert!(v.try_as_string(ValueKind::Bytes).is_err());
        // A mismatched tag never touches the payload, so no error either.
        assert_eq!(v.try_as_string(ValueKind::String).unwrap(), None);
    }

    #[test]
    fn test_try_as_string_utf8_bytes() {
        let v = PropertyValue::Bytes(b"ok".to_vec());
        assert_eq!(v.try_as_string(ValueKind::Bytes).unwrap(), Some("ok".into()));
    }

    #[test]
    fn test_date_rendition() {
        let d = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        let v = PropertyValue::from(d);
        assert_eq!(v.try_as_string(ValueKind::Date).unwrap(), Some("2026-08-06".into()));
    }
}
