//! Core types for Tabula data tables.
//!
//! This crate provides the data side of a table, independent of rendering:
//! - Records and cells: [`Record`], [`CellValue`], [`RecordId`]
//! - Columns: [`ColumnDescriptor`] with optional pure cell formatters
//! - The row pipeline: [`filter_records`] → [`sort_records`] → [`paginate`]
//! - Selection: [`Selection`] with tri-state [`CheckState`]
//! - Per-table state: [`TableState`] driven by [`TableMessage`]
//! - Configuration: [`TableConfig`]

mod column;
mod config;
mod error;
mod filter;
mod paginate;
mod record;
mod selection;
mod sort;
mod state;

pub use column::{CellRenderer, ColumnDescriptor, ColumnKind, TextAlign};
pub use config::TableConfig;
pub use error::{Result, TableError};
pub use filter::{filter_records, filter_records_by, matches_query};
pub use paginate::{clamp_page, paginate, total_pages, Page};
pub use record::{records_from_json, CellValue, Record, RecordId, ID_KEY};
pub use selection::{CheckState, Selection};
pub use sort::{
    compare_text, compare_values, sort_records, sort_records_as, SortDirection, SortState,
};
pub use state::{
    Command, DerivedRows, State, TableMessage, TableNotification, TablePageChanged,
    TableSearchChanged, TableSelectionChanged, TableSortChanged, TableState,
};

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // PIPELINE TESTS - filter → sort → paginate end to end
    // ==========================================================================

    fn records() -> Vec<Record> {
        (1..=7)
            .map(|i| {
                Record::new(format!("{i}"))
                    .cell("name", if i % 2 == 0 { "even" } else { "odd" })
                    .cell("n", 10 - i)
            })
            .collect()
    }

    #[test]
    fn test_pipeline_order_is_filter_sort_paginate() {
        let records = records();
        let filtered = filter_records(&records, "odd");
        let sorted = sort_records(filtered, &SortState::by("n", SortDirection::Asc));
        let page = paginate(&sorted, 1, 3);

        let ids: Vec<&str> = page.items.iter().map(|r| r.id().as_str()).collect();
        assert_eq!(ids, vec!["7", "5", "3"]);
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn test_pages_reconstruct_sorted_filtered() {
        let records = records();
        let sort = SortState::by("n", SortDirection::Desc);
        let expected = sort_records(filter_records(&records, "even"), &sort);

        let mut state = TableState::new(2).with_sort(sort);
        state.update(TableMessage::Search("even".into()));

        let mut joined = Vec::new();
        let total = state.derive(&records).total_pages;
        for page in 1..=total {
            state.update(TableMessage::GoToPage(page));
            joined.extend(state.derive(&records).rows);
        }
        assert_eq!(joined, expected);
    }
}
