//! Typed occupancy records and load-time normalization.
//!
//! The dataset file is loosely shaped: fields may be missing, `null`, or
//! hold numbers, arrays, or objects instead of strings. Instead of
//! defensive lookups on every query, each array element is normalized once
//! into an [`Entry`] when the dataset is loaded. Only an element that is
//! not an object at all is malformed; odd field values are kept as their
//! JSON text so a query that never reads them is unaffected.

use serde_json::{Map, Value};

/// One occupant entry within a dataset snapshot.
///
/// Every field is optional. Queries project a missing field as an empty
/// string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    /// Composite location, `"<building> - <room>"`.
    pub wisma: Option<String>,
    /// Occupant display name.
    pub nama: Option<String>,
    /// Registration identifier.
    pub no_registrasi: Option<String>,
    /// Sentence description, optionally `"<code> - <description>"`.
    pub pidana: Option<String>,
    /// Entry date (opaque).
    pub tanggal_masuk: Option<String>,
    /// Expiry date (opaque).
    pub tanggal_ekspirasi: Option<String>,
}

impl Record {
    /// The `wisma` field, or `""` when absent.
    pub fn wisma(&self) -> &str {
        self.wisma.as_deref().unwrap_or_default()
    }

    /// Build a record from a JSON object. Unknown keys are ignored.
    pub fn from_object(object: &Map<String, Value>) -> Self {
        Self {
            wisma: field(object, "wisma"),
            nama: field(object, "nama"),
            no_registrasi: field(object, "no_registrasi"),
            pidana: field(object, "pidana"),
            tanggal_masuk: field(object, "tanggal_masuk"),
            tanggal_ekspirasi: field(object, "tanggal_ekspirasi"),
        }
    }
}

/// A normalized element of a snapshot array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// A well-formed record.
    Record(Record),
    /// An element that is not a JSON object, with the reason.
    ///
    /// Kept rather than dropped so a scan that reaches it can report the
    /// fault instead of silently returning partial results.
    Malformed(String),
}

impl Entry {
    /// Normalize one array element.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(object) => Self::Record(Record::from_object(object)),
            other => Self::Malformed(format!("expected an object, found {}", json_kind(other))),
        }
    }
}

/// Read one known field as an optional string.
///
/// Strings are taken verbatim; any other non-null value becomes its
/// compact JSON text.
fn field(object: &Map<String, Value>, name: &str) -> Option<String> {
    match object.get(name) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => Some(other.to_string()),
    }
}

/// Human-readable name of a JSON value's type, used in fault messages.
pub(crate) const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn full_record_is_read_verbatim() {
        let entry = Entry::from_value(&json!({
            "wisma": "Wisma A - 101",
            "nama": "X",
            "no_registrasi": "R1",
            "pidana": "P1 - desc",
            "tanggal_masuk": "2025-01-01",
            "tanggal_ekspirasi": "2025-02-01",
        }));

        let Entry::Record(record) = entry else {
            panic!("expected a record, got {entry:?}");
        };
        assert_eq!(record.wisma(), "Wisma A - 101");
        assert_eq!(record.nama.as_deref(), Some("X"));
        assert_eq!(record.pidana.as_deref(), Some("P1 - desc"));
        assert_eq!(record.tanggal_ekspirasi.as_deref(), Some("2025-02-01"));
    }

    #[test]
    fn missing_and_null_fields_are_none() {
        let entry = Entry::from_value(&json!({ "nama": null }));
        assert_eq!(entry, Entry::Record(Record::default()));
    }

    #[test]
    fn scalar_fields_are_stringified() {
        let entry = Entry::from_value(&json!({ "no_registrasi": 42, "nama": true }));
        let Entry::Record(record) = entry else {
            panic!("expected a record");
        };
        assert_eq!(record.no_registrasi.as_deref(), Some("42"));
        assert_eq!(record.nama.as_deref(), Some("true"));
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let entry = Entry::from_value(&json!({ "wisma": "Klinik", "blok": ["x"] }));
        assert!(matches!(entry, Entry::Record(_)));
    }

    #[test]
    fn nested_fields_are_kept_as_json_text() {
        let entry = Entry::from_value(&json!({
            "wisma": { "room": "101" },
            "nama": ["a", "b"],
        }));
        let Entry::Record(record) = entry else {
            panic!("expected a record, got {entry:?}");
        };
        assert_eq!(record.wisma(), r#"{"room":"101"}"#);
        assert_eq!(record.nama.as_deref(), Some(r#"["a","b"]"#));
    }

    #[test]
    fn non_object_element_is_malformed() {
        assert_eq!(
            Entry::from_value(&json!("header")),
            Entry::Malformed(String::from("expected an object, found a string"))
        );
        assert_eq!(
            Entry::from_value(&json!([1, 2])),
            Entry::Malformed(String::from("expected an object, found an array"))
        );
    }

    #[test]
    fn wisma_accessor_defaults_to_empty() {
        assert_eq!(Record::default().wisma(), "");
    }
}
