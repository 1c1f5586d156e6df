//! Rendered table view model.
//!
//! A [`TableView`] is everything a page shell needs to draw one frame of a
//! [`DataTable`](crate::DataTable): already filtered, sorted, paginated and
//! formatted.

use crate::menu::RowActionMenu;
use crate::pagination::PaginationControls;
use serde::Serialize;
use tabula_core::{CheckState, RecordId, SortDirection, TextAlign};

/// Search input above the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchBox {
    /// Current query
    pub query: String,
    /// Placeholder text
    pub placeholder: String,
}

/// One header cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderCell {
    /// Column key
    pub key: String,
    /// Header text
    pub label: String,
    /// Text alignment
    pub align: TextAlign,
    /// Whether clicking sorts
    pub sortable: bool,
    /// Direction if this is the sort column
    pub sort: Option<SortDirection>,
}

/// One formatted cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedCell {
    /// Column key
    pub key: String,
    /// Formatted text
    pub text: String,
    /// Text alignment
    pub align: TextAlign,
}

/// One row on the current page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedRow {
    /// Record id
    pub id: RecordId,
    /// Whether the row checkbox is checked
    pub selected: bool,
    /// Cells in column order
    pub cells: Vec<RenderedCell>,
    /// Row action menu, when the table has actions
    #[serde(skip)]
    pub actions: Option<RowActionMenu>,
}

impl RenderedRow {
    /// Cell text for a column key.
    #[must_use]
    pub fn cell(&self, key: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|c| c.key == key)
            .map(|c| c.text.as_str())
    }
}

/// Everything needed to draw a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableView {
    /// Search box, when searchable
    pub search: Option<SearchBox>,
    /// Header cells in column order
    pub header: Vec<HeaderCell>,
    /// Header checkbox, when selectable
    pub select_all: Option<CheckState>,
    /// Rows on the current page
    pub rows: Vec<RenderedRow>,
    /// Pagination controls
    pub pagination: PaginationControls,
    /// Selected rows overall, including rows hidden by the search
    pub selected_count: usize,
    /// Rows matching the search
    pub filtered_count: usize,
    /// Rows overall
    pub total_count: usize,
    /// Alternate row backgrounds
    pub striped: bool,
}

impl TableView {
    /// Check if no row matches the search.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.filtered_count == 0
    }

    /// Footer text, e.g. `1 of 5 row(s) selected.`
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{} of {} row(s) selected.",
            self.selected_count, self.filtered_count
        )
    }

    /// Ids of the rows on the current page.
    #[must_use]
    pub fn row_ids(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.id.as_str()).collect()
    }
}
