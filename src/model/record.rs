//! Record and row identity types
//!
//! Records are opaque JSON objects owned by the external data source. The
//! engine never constructs them, only overlays edited values onto copies.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Unique identifier of a row, derived from the record's id field.
///
/// Backends use both string and numeric ids; numeric ids are stringified so
/// the engine can compare and hash them uniformly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowId(String);

impl RowId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Derive a row id from a JSON value. Strings are taken as-is, numbers
    /// are stringified; anything else is not a usable identifier.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(Self(s.clone())),
            Value::Number(n) => Some(Self(n.to_string())),
            _ => None,
        }
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RowId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for RowId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A single displayed record: a mapping from field name to JSON value
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: Map<String, Value>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field assignment, mostly useful for hosts and tests
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Get a field value
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Overwrite a field value, inserting the field if absent
    pub fn set(&mut self, field: impl Into<String>, value: Value) {
        self.fields.insert(field.into(), value);
    }

    /// Extract the row identifier using the configured id field
    pub fn id(&self, row_id_key: &str) -> Option<RowId> {
        self.fields.get(row_id_key).and_then(RowId::from_value)
    }

    /// Iterate over (field, value) pairs
    pub fn fields(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<(String, Value)> for Record {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_row_id_from_value() {
        assert_eq!(RowId::from_value(&json!("abc")), Some(RowId::new("abc")));
        assert_eq!(RowId::from_value(&json!(42)), Some(RowId::new("42")));
        assert_eq!(RowId::from_value(&json!(null)), None);
        assert_eq!(RowId::from_value(&json!([1, 2])), None);
    }

    #[test]
    fn test_record_get_set() {
        let mut record = Record::new().with("title", "Alpha");
        assert_eq!(record.get("title"), Some(&json!("Alpha")));
        assert_eq!(record.get("stage"), None);

        record.set("title", json!("Beta"));
        assert_eq!(record.get("title"), Some(&json!("Beta")));
    }

    #[test]
    fn test_record_id_extraction() {
        let record = Record::new().with("id", "1").with("title", "Alpha");
        assert_eq!(record.id("id"), Some(RowId::new("1")));
        assert_eq!(record.id("uuid"), None);

        let numeric = Record::new().with("id", 7);
        assert_eq!(numeric.id("id"), Some(RowId::new("7")));
    }

    #[test]
    fn test_record_transparent_serde() {
        let record: Record = serde_json::from_value(json!({"id": "1", "title": "Alpha"})).unwrap();
        assert_eq!(record.get("title"), Some(&json!("Alpha")));

        let back = serde_json::to_value(&record).unwrap();
        assert_eq!(back, json!({"id": "1", "title": "Alpha"}));
    }
}
