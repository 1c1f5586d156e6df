//! Column descriptors.

use crate::record::{CellValue, Record};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Pure cell formatter supplied by the caller.
///
/// Receives the cell value and the whole record, so a column can format
/// itself from sibling fields.
pub type CellRenderer = Arc<dyn Fn(&CellValue, &Record) -> String + Send + Sync>;

/// Declared semantic type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    /// Free text, compared as loaded
    #[default]
    Text,
    /// Numeric text such as `"42"` compares as a number
    Number,
    /// `true`/`false` and `yes`/`no` text compares as a boolean
    Bool,
}

impl ColumnKind {
    /// View a cell as this kind for comparison.
    ///
    /// Text that parses as the declared kind is converted; anything else is
    /// returned unchanged.
    #[must_use]
    pub fn coerce(self, value: &CellValue) -> Cow<'_, CellValue> {
        let CellValue::Text(text) = value else {
            return Cow::Borrowed(value);
        };
        let text = text.trim();
        match self {
            Self::Text => Cow::Borrowed(value),
            Self::Number => text
                .parse::<f64>()
                .map_or(Cow::Borrowed(value), |n| Cow::Owned(CellValue::Number(n))),
            Self::Bool => match text.to_lowercase().as_str() {
                "true" | "yes" => Cow::Owned(CellValue::Bool(true)),
                "false" | "no" => Cow::Owned(CellValue::Bool(false)),
                _ => Cow::Borrowed(value),
            },
        }
    }
}

/// Text alignment within a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Column definition for a data table.
#[derive(Clone, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// Column key (field name in the record)
    pub key: String,
    /// Display header
    pub label: String,
    /// Declared value type
    #[serde(default)]
    pub kind: ColumnKind,
    /// Text alignment
    #[serde(default)]
    pub align: TextAlign,
    /// Whether clicking the header sorts by this column
    #[serde(default)]
    pub sortable: bool,
    /// Custom cell formatter
    #[serde(skip)]
    render: Option<CellRenderer>,
}

impl ColumnDescriptor {
    /// Create a new column.
    #[must_use]
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            kind: ColumnKind::Text,
            align: TextAlign::Left,
            sortable: false,
            render: None,
        }
    }

    /// Set the declared value type. Number columns align right.
    #[must_use]
    pub const fn kind(mut self, kind: ColumnKind) -> Self {
        self.kind = kind;
        if matches!(kind, ColumnKind::Number) {
            self.align = TextAlign::Right;
        }
        self
    }

    /// Set text alignment.
    #[must_use]
    pub const fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    /// Make column sortable.
    #[must_use]
    pub const fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Set a custom cell formatter.
    #[must_use]
    pub fn render<F>(mut self, render: F) -> Self
    where
        F: Fn(&CellValue, &Record) -> String + Send + Sync + 'static,
    {
        self.render = Some(Arc::new(render));
        self
    }

    /// Check if a custom formatter is set.
    #[must_use]
    pub fn has_renderer(&self) -> bool {
        self.render.is_some()
    }

    /// Format this column's cell for a record.
    #[must_use]
    pub fn render_cell(&self, record: &Record) -> String {
        let value = record.value(&self.key);
        match &self.render {
            Some(render) => render(value, record),
            None => value.display(),
        }
    }
}

impl fmt::Debug for ColumnDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDescriptor")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("kind", &self.kind)
            .field("align", &self.align)
            .field("sortable", &self.sortable)
            .field("render", &self.render.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== ColumnKind Tests =====

    #[test]
    fn test_number_kind_parses_text() {
        let kind = ColumnKind::Number;
        assert_eq!(*kind.coerce(&" 42 ".into()), CellValue::Number(42.0));
        assert_eq!(*kind.coerce(&"n/a".into()), CellValue::from("n/a"));
        assert_eq!(*kind.coerce(&CellValue::Empty), CellValue::Empty);
    }

    #[test]
    fn test_bool_kind_parses_text() {
        let kind = ColumnKind::Bool;
        assert_eq!(*kind.coerce(&"Yes".into()), CellValue::Bool(true));
        assert_eq!(*kind.coerce(&"false".into()), CellValue::Bool(false));
        assert_eq!(*kind.coerce(&"maybe".into()), CellValue::from("maybe"));
    }

    #[test]
    fn test_text_kind_is_unchanged() {
        assert_eq!(*ColumnKind::Text.coerce(&"42".into()), CellValue::from("42"));
    }

    #[test]
    fn test_column_new() {
        let col = ColumnDescriptor::new("name", "Name");
        assert_eq!(col.key, "name");
        assert_eq!(col.label, "Name");
        assert_eq!(col.kind, ColumnKind::Text);
        assert!(!col.sortable);
        assert!(!col.has_renderer());
    }

    #[test]
    fn test_column_builder() {
        let col = ColumnDescriptor::new("price", "Price")
            .kind(ColumnKind::Number)
            .sortable();
        assert_eq!(col.kind, ColumnKind::Number);
        assert_eq!(col.align, TextAlign::Right);
        assert!(col.sortable);

        let col = col.align(TextAlign::Center);
        assert_eq!(col.align, TextAlign::Center);
    }

    #[test]
    fn test_render_cell_default_display() {
        let col = ColumnDescriptor::new("active", "Active");
        let record = Record::new("1").cell("active", true);
        assert_eq!(col.render_cell(&record), "Yes");
    }

    #[test]
    fn test_render_cell_missing_field() {
        let col = ColumnDescriptor::new("missing", "Missing");
        assert_eq!(col.render_cell(&Record::new("1")), "");
    }

    #[test]
    fn test_render_cell_custom() {
        let col = ColumnDescriptor::new("amount", "Amount").render(|value, record| {
            format!("{}:{}", record.id(), value.as_search_text())
        });
        let record = Record::new("7").cell("amount", 12);
        assert_eq!(col.render_cell(&record), "7:12");
    }

    #[test]
    fn test_column_debug_hides_renderer() {
        let col = ColumnDescriptor::new("a", "A").render(|_, _| String::new());
        let debug = format!("{col:?}");
        assert!(debug.contains("<fn>"));
    }

    #[test]
    fn test_column_deserialize_defaults() {
        let col: ColumnDescriptor =
            serde_json::from_str(r#"{"key": "email", "label": "Email"}"#).unwrap();
        assert_eq!(col.key, "email");
        assert_eq!(col.align, TextAlign::Left);
        assert!(!col.sortable);
        assert!(!col.has_renderer());
    }

    #[test]
    fn test_column_deserialize_kind() {
        let col: ColumnDescriptor = serde_json::from_str(
            r#"{"key": "amount", "label": "Amount", "kind": "number", "sortable": true}"#,
        )
        .unwrap();
        assert_eq!(col.kind, ColumnKind::Number);
        assert!(col.sortable);
    }
}
