//! Column sorting.

use crate::column::ColumnKind;
use crate::record::{CellValue, Record};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    #[serde(alias = "ascending")]
    Asc,
    #[serde(alias = "descending")]
    Desc,
}

impl SortDirection {
    /// The opposite direction.
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    /// Value for the `aria-sort` attribute.
    #[must_use]
    pub const fn aria(self) -> &'static str {
        match self {
            Self::Asc => "ascending",
            Self::Desc => "descending",
        }
    }
}

/// Current sort column and direction. No column means insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortState {
    /// Column key being sorted
    pub column: Option<String>,
    /// Sort direction
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortState {
    /// Sort by `column` in `direction`.
    pub fn by(column: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            column: Some(column.into()),
            direction,
        }
    }

    /// Check if a column is set.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.column.is_some()
    }

    /// Direction for `key` if it is the sort column.
    #[must_use]
    pub fn direction_for(&self, key: &str) -> Option<SortDirection> {
        (self.column.as_deref() == Some(key)).then_some(self.direction)
    }

    /// Apply a header click: the same column flips direction, a new column
    /// starts ascending.
    pub fn request(&mut self, column: &str) {
        if self.column.as_deref() == Some(column) {
            self.direction = self.direction.toggle();
        } else {
            self.column = Some(column.to_string());
            self.direction = SortDirection::Asc;
        }
    }
}

/// Compare two cell values.
///
/// Two numbers compare numerically; anything else compares as lower-cased
/// text.
#[must_use]
pub fn compare_values(a: &CellValue, b: &CellValue) -> Ordering {
    match (a.as_number(), b.as_number()) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        _ => compare_text(
            &a.as_search_text().to_lowercase(),
            &b.as_search_text().to_lowercase(),
        ),
    }
}

/// Root-locale style text comparison.
///
/// Compares case-folded text first and only falls back to the raw strings
/// to break ties, so `"a" < "B" < "b" < "c"`.
#[must_use]
pub fn compare_text(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded.then_with(|| a.cmp(b))
}

/// Sort records by the state's column. Stable in both directions.
#[must_use]
pub fn sort_records<'a>(records: Vec<&'a Record>, sort: &SortState) -> Vec<&'a Record> {
    sort_records_as(records, sort, None)
}

/// Like [`sort_records`], with cells first viewed as the column's declared
/// kind, so numeric text in a [`ColumnKind::Number`] column sorts by value.
#[must_use]
pub fn sort_records_as<'a>(
    mut records: Vec<&'a Record>,
    sort: &SortState,
    kind: Option<ColumnKind>,
) -> Vec<&'a Record> {
    let Some(column) = sort.column.as_deref() else {
        return records;
    };
    let kind = kind.unwrap_or_default();
    let direction = sort.direction;
    records.sort_by(|a, b| {
        let ordering = compare_values(
            &kind.coerce(a.value(column)),
            &kind.coerce(b.value(column)),
        );
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
    records
}
