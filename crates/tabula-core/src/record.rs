//! Records and cell values.

use crate::error::{Result, TableError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Key under which a record's id is visible to search and sort.
pub const ID_KEY: &str = "id";

/// A cell value in a record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum CellValue {
    /// Text value
    Text(String),
    /// Numeric value
    Number(f64),
    /// Boolean value
    Bool(bool),
    /// Empty cell
    #[default]
    Empty,
}

impl CellValue {
    /// Get display text for the cell.
    #[must_use]
    pub fn display(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Number(n) => format!("{n}"),
            Self::Bool(b) => if *b { "Yes" } else { "No" }.to_string(),
            Self::Empty => String::new(),
        }
    }

    /// Canonical string form used for search and text comparison.
    ///
    /// Integral numbers have no fractional part (`300`, not `300.0`),
    /// booleans are `true`/`false`.
    #[must_use]
    pub fn as_search_text(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Number(n) => format!("{n}"),
            Self::Bool(b) => b.to_string(),
            Self::Empty => String::new(),
        }
    }

    /// Numeric value, if this is a number.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Check if the cell is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    fn from_json(field: &str, value: &serde_json::Value) -> Result<Self> {
        use serde_json::Value;
        match value {
            Value::Null => Ok(Self::Empty),
            Value::Bool(b) => Ok(Self::Bool(*b)),
            Value::Number(n) => Ok(n.as_f64().map_or(Self::Empty, Self::Number)),
            Value::String(s) => Ok(Self::Text(s.clone())),
            Value::Array(_) => Err(TableError::UnsupportedValue {
                field: field.to_string(),
                kind: "array",
            }),
            Value::Object(_) => Err(TableError::UnsupportedValue {
                field: field.to_string(),
                kind: "object",
            }),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<u32> for CellValue {
    fn from(n: u32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

/// Identifier of a record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Create a new id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for RecordId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl PartialEq<str> for RecordId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for RecordId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// One row of data.
///
/// The id is also stored as a text cell under [`ID_KEY`], so it takes part
/// in search and can be used as a sort column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    id: RecordId,
    cells: HashMap<String, CellValue>,
}

impl Record {
    /// Create a record with only an id.
    pub fn new(id: impl Into<RecordId>) -> Self {
        let id = id.into();
        let mut cells = HashMap::new();
        cells.insert(ID_KEY.to_string(), CellValue::Text(id.as_str().to_string()));
        Self { id, cells }
    }

    /// Add a cell value.
    ///
    /// Setting [`ID_KEY`] replaces the record id with the value's search text.
    #[must_use]
    pub fn cell(mut self, key: impl Into<String>, value: impl Into<CellValue>) -> Self {
        let key = key.into();
        let value = value.into();
        if key == ID_KEY {
            self.id = RecordId::new(value.as_search_text());
            self.cells
                .insert(key, CellValue::Text(self.id.as_str().to_string()));
        } else {
            self.cells.insert(key, value);
        }
        self
    }

    /// Record id.
    #[must_use]
    pub const fn id(&self) -> &RecordId {
        &self.id
    }

    /// Get a cell value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&CellValue> {
        self.cells.get(key)
    }

    /// Get a cell value, treating a missing field as empty.
    #[must_use]
    pub fn value(&self, key: &str) -> &CellValue {
        static EMPTY: CellValue = CellValue::Empty;
        self.cells.get(key).unwrap_or(&EMPTY)
    }

    /// Iterate over all fields, including the id.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.cells.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of fields, including the id.
    #[must_use]
    pub fn field_count(&self) -> usize {
        self.cells.len()
    }

    /// Build a record from a JSON object.
    ///
    /// `index` is the record's position in its source and is only used for
    /// error reporting.
    pub fn from_json(index: usize, value: &serde_json::Value) -> Result<Self> {
        let object = value
            .as_object()
            .ok_or(TableError::InvalidRecord { index })?;
        let id = object
            .get(ID_KEY)
            .and_then(serde_json::Value::as_str)
            .ok_or(TableError::MissingId { index })?;

        let mut record = Self::new(id);
        for (key, field) in object {
            if key == ID_KEY {
                continue;
            }
            record
                .cells
                .insert(key.clone(), CellValue::from_json(key, field)?);
        }
        Ok(record)
    }
}

/// Parse a JSON array of objects into records.
pub fn records_from_json(json: &str) -> Result<Vec<Record>> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    let items = match &value {
        serde_json::Value::Array(items) => items,
        other => {
            return Err(TableError::ExpectedArray {
                kind: json_kind(other),
            })
        }
    };
    items
        .iter()
        .enumerate()
        .map(|(index, item)| Record::from_json(index, item))
        .collect()
}

const fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== CellValue Tests =====

    #[test]
    fn test_cell_value_display() {
        assert_eq!(CellValue::Text("Hello".to_string()).display(), "Hello");
        assert_eq!(CellValue::Number(42.5).display(), "42.5");
        assert_eq!(CellValue::Bool(true).display(), "Yes");
        assert_eq!(CellValue::Bool(false).display(), "No");
        assert_eq!(CellValue::Empty.display(), "");
    }

    #[test]
    fn test_cell_value_search_text() {
        assert_eq!(CellValue::Number(300.0).as_search_text(), "300");
        assert_eq!(CellValue::Number(-1.25).as_search_text(), "-1.25");
        assert_eq!(CellValue::Bool(true).as_search_text(), "true");
        assert_eq!(CellValue::Empty.as_search_text(), "");
    }

    #[test]
    fn test_cell_value_from() {
        assert_eq!(CellValue::from("a"), CellValue::Text("a".to_string()));
        assert_eq!(CellValue::from(7i32), CellValue::Number(7.0));
        assert_eq!(CellValue::from(7u32), CellValue::Number(7.0));
        assert_eq!(CellValue::from(7i64), CellValue::Number(7.0));
        assert_eq!(CellValue::from(false), CellValue::Bool(false));
        assert_eq!(CellValue::default(), CellValue::Empty);
    }

    #[test]
    fn test_cell_value_as_number() {
        assert_eq!(CellValue::Number(1.5).as_number(), Some(1.5));
        assert_eq!(CellValue::Text("1.5".to_string()).as_number(), None);
    }

    // ===== Record Tests =====

    #[test]
    fn test_record_new_exposes_id_as_field() {
        let record = Record::new("42");
        assert_eq!(record.id(), &RecordId::new("42"));
        assert_eq!(record.get(ID_KEY), Some(&CellValue::Text("42".to_string())));
        assert_eq!(record.field_count(), 1);
    }

    #[test]
    fn test_record_builder() {
        let record = Record::new("1")
            .cell("name", "Alice")
            .cell("age", 30)
            .cell("active", true);

        assert_eq!(record.get("name"), Some(&CellValue::Text("Alice".to_string())));
        assert_eq!(record.get("age"), Some(&CellValue::Number(30.0)));
        assert_eq!(record.get("active"), Some(&CellValue::Bool(true)));
    }

    #[test]
    fn test_record_missing_field_is_empty() {
        let record = Record::new("1");
        assert!(record.get("nope").is_none());
        assert!(record.value("nope").is_empty());
    }

    #[test]
    fn test_record_cell_id_replaces_id() {
        let record = Record::new("old").cell(ID_KEY, 9);
        assert_eq!(record.id().as_str(), "9");
        assert_eq!(record.value(ID_KEY), &CellValue::Text("9".to_string()));
    }

    #[test]
    fn test_record_id_compares_with_str() {
        let id = RecordId::from("abc");
        assert!(id == "abc");
        assert_eq!(id.to_string(), "abc");
    }

    // ===== JSON Loading Tests =====

    #[test]
    fn test_records_from_json() {
        let records = records_from_json(
            r#"[
                {"id": "m5gr84i9", "amount": 316, "status": "success", "email": "ken99@example.com"},
                {"id": "3u1reuv4", "amount": 242, "status": "success", "verified": true, "note": null}
            ]"#,
        )
        .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id().as_str(), "m5gr84i9");
        assert_eq!(records[0].value("amount"), &CellValue::Number(316.0));
        assert_eq!(records[1].value("verified"), &CellValue::Bool(true));
        assert!(records[1].value("note").is_empty());
    }

    #[test]
    fn test_records_from_json_missing_id() {
        let err = records_from_json(r#"[{"id": "a"}, {"name": "no id"}]"#).unwrap_err();
        assert!(matches!(err, TableError::MissingId { index: 1 }));
    }

    #[test]
    fn test_records_from_json_numeric_id_is_missing() {
        let err = records_from_json(r#"[{"id": 1}]"#).unwrap_err();
        assert!(matches!(err, TableError::MissingId { index: 0 }));
    }

    #[test]
    fn test_records_from_json_not_object() {
        let err = records_from_json("[1]").unwrap_err();
        assert!(matches!(err, TableError::InvalidRecord { index: 0 }));
    }

    #[test]
    fn test_records_from_json_not_array() {
        let err = records_from_json(r#"{"id": "a"}"#).unwrap_err();
        assert!(matches!(err, TableError::ExpectedArray { kind: "object" }));
    }

    #[test]
    fn test_records_from_json_nested_value() {
        let err = records_from_json(r#"[{"id": "a", "tags": ["x"]}]"#).unwrap_err();
        match err {
            TableError::UnsupportedValue { field, kind } => {
                assert_eq!(field, "tags");
                assert_eq!(kind, "array");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_records_from_json_syntax_error() {
        assert!(matches!(
            records_from_json("[{"),
            Err(TableError::Json(_))
        ));
    }
}
