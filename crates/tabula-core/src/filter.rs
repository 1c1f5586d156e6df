//! Free-text row filtering.

use crate::record::Record;

/// Keep the records where any field contains `query`, ignoring case.
///
/// An empty query keeps every record in its original order. Numbers and
/// booleans are matched against their canonical string form.
#[must_use]
pub fn filter_records<'a>(records: &'a [Record], query: &str) -> Vec<&'a Record> {
    if query.is_empty() {
        return records.iter().collect();
    }
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| matches_query(record, &needle))
        .collect()
}

/// Check if any field of `record` contains the already lower-cased `needle`.
#[must_use]
pub fn matches_query(record: &Record, needle: &str) -> bool {
    record
        .fields()
        .any(|(_, value)| value.as_search_text().to_lowercase().contains(needle))
}

/// Like [`filter_records`], but only looks at one field.
///
/// Used when a table restricts its search box to a single column.
#[must_use]
pub fn filter_records_by<'a>(records: &'a [Record], key: &str, query: &str) -> Vec<&'a Record> {
    if query.is_empty() {
        return records.iter().collect();
    }
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| {
            record
                .value(key)
                .as_search_text()
                .to_lowercase()
                .contains(&needle)
        })
        .collect()
}
