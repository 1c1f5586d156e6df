//! `DataTable` widget: a searchable, sortable, paginated, selectable table.
//!
//! The table owns its records, columns and [`TableState`]. Every operation
//! updates the state and re-derives the visible rows synchronously; the
//! current frame is available from [`DataTable::view`].

use crate::html;
use crate::menu::{RowAction, RowActionMenu, RowActionSelected};
use crate::pagination::PaginationControls;
use crate::view::{HeaderCell, RenderedCell, RenderedRow, SearchBox, TableView};
use std::fmt;
use tabula_core::{
    Command, ColumnDescriptor, Record, RecordId, Selection, SortState, State, TableConfig,
    TableMessage, TableNotification, TableSelectionChanged, TableSortChanged, TableState,
};

type SelectionHook = Box<dyn FnMut(&TableSelectionChanged) + Send>;
type SortHook = Box<dyn FnMut(&TableSortChanged) + Send>;

/// `DataTable` widget for displaying tabular data.
pub struct DataTable {
    /// Column definitions
    columns: Vec<ColumnDescriptor>,
    /// Row data
    records: Vec<Record>,
    /// Search, sort, page and selection
    state: TableState,
    /// Whether rows have checkboxes
    selectable: bool,
    /// Whether a search box is shown
    searchable: bool,
    /// Search box placeholder
    search_placeholder: String,
    /// Striped rows
    striped: bool,
    /// Per-row action menu items
    row_actions: Vec<RowAction>,
    /// Accessible name
    accessible_name_value: Option<String>,
    /// Test ID
    test_id_value: Option<String>,
    on_selection_change: Option<SelectionHook>,
    on_sort_change: Option<SortHook>,
}

impl Default for DataTable {
    fn default() -> Self {
        Self::from_config(&TableConfig::default())
    }
}

impl fmt::Debug for DataTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataTable")
            .field("columns", &self.columns)
            .field("records", &self.records.len())
            .field("state", &self.state)
            .field("selectable", &self.selectable)
            .field("searchable", &self.searchable)
            .field("row_actions", &self.row_actions)
            .finish_non_exhaustive()
    }
}

impl DataTable {
    /// Create a new empty data table with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table from a config.
    #[must_use]
    pub fn from_config(config: &TableConfig) -> Self {
        Self {
            columns: Vec::new(),
            records: Vec::new(),
            state: config.initial_state(),
            selectable: config.selectable,
            searchable: config.searchable,
            search_placeholder: config.search_placeholder.clone(),
            striped: config.striped,
            row_actions: Vec::new(),
            accessible_name_value: None,
            test_id_value: None,
            on_selection_change: None,
            on_sort_change: None,
        }
    }

    /// Add a column.
    #[must_use]
    pub fn column(mut self, column: ColumnDescriptor) -> Self {
        self.state.set_column_kind(column.key.clone(), column.kind);
        self.columns.push(column);
        self
    }

    /// Add multiple columns.
    #[must_use]
    pub fn columns(self, columns: impl IntoIterator<Item = ColumnDescriptor>) -> Self {
        columns.into_iter().fold(self, Self::column)
    }

    /// Add a record.
    #[must_use]
    pub fn record(mut self, record: Record) -> Self {
        self.records.push(record);
        self.state.derive(&self.records);
        self
    }

    /// Add multiple records.
    #[must_use]
    pub fn records(mut self, records: impl IntoIterator<Item = Record>) -> Self {
        self.records.extend(records);
        self.state.derive(&self.records);
        self
    }

    /// Set rows per page. Search, sort and selection are kept; the current
    /// page is clamped to the new page count.
    #[must_use]
    pub fn page_size(mut self, page_size: usize) -> Self {
        self.state.set_page_size(page_size);
        self.state.derive(&self.records);
        self
    }

    /// Enable row checkboxes.
    #[must_use]
    pub fn selectable(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
        self
    }

    /// Show a search box.
    #[must_use]
    pub fn searchable(mut self, searchable: bool) -> Self {
        self.searchable = searchable;
        self
    }

    /// Set search box placeholder.
    #[must_use]
    pub fn search_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.search_placeholder = placeholder.into();
        self
    }

    /// Enable striped rows.
    #[must_use]
    pub fn striped(mut self, striped: bool) -> Self {
        self.striped = striped;
        self
    }

    /// Add a row action menu item.
    #[must_use]
    pub fn row_action(mut self, action: RowAction) -> Self {
        self.row_actions.push(action);
        self
    }

    /// Set the accessible name.
    #[must_use]
    pub fn accessible_name(mut self, name: impl Into<String>) -> Self {
        self.accessible_name_value = Some(name.into());
        self
    }

    /// Set the test ID.
    #[must_use]
    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Call `hook` whenever the selection changes.
    #[must_use]
    pub fn on_selection_change<F>(mut self, hook: F) -> Self
    where
        F: FnMut(&TableSelectionChanged) + Send + 'static,
    {
        self.on_selection_change = Some(Box::new(hook));
        self
    }

    /// Call `hook` whenever the sort changes.
    #[must_use]
    pub fn on_sort_change<F>(mut self, hook: F) -> Self
    where
        F: FnMut(&TableSortChanged) + Send + 'static,
    {
        self.on_sort_change = Some(Box::new(hook));
        self
    }

    /// Get column count.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Get record count.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.records.len()
    }

    /// Check if table has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Get columns.
    #[must_use]
    pub fn get_columns(&self) -> &[ColumnDescriptor] {
        &self.columns
    }

    /// Get records in insertion order.
    #[must_use]
    pub fn get_records(&self) -> &[Record] {
        &self.records
    }

    /// Get the table state.
    #[must_use]
    pub const fn state(&self) -> &TableState {
        &self.state
    }

    /// Get the selection.
    #[must_use]
    pub const fn selection(&self) -> &Selection {
        self.state.selection()
    }

    /// Get the current sort.
    #[must_use]
    pub const fn sort(&self) -> &SortState {
        self.state.sort()
    }

    /// Get the current 1-based page.
    #[must_use]
    pub const fn page(&self) -> usize {
        self.state.page()
    }

    /// Get the current search query.
    #[must_use]
    pub fn search(&self) -> &str {
        self.state.search()
    }

    /// Replace all records. Selected ids with no matching record are dropped,
    /// and the selection hook is told when that happens.
    pub fn set_records(&mut self, records: Vec<Record>) -> Command<TableNotification> {
        self.records = records;
        let dropped = self.state.retain_selection(&self.records);
        self.state.derive(&self.records);
        if dropped == 0 {
            return Command::None;
        }

        let notification = TableNotification::Selection(TableSelectionChanged {
            selected: self.state.selection().ids().cloned().collect(),
        });
        self.notify(&notification);
        Command::Notify(notification)
    }

    fn has_record(&self, id: &RecordId) -> bool {
        self.records.iter().any(|r| r.id() == id)
    }

    /// Apply a message, re-derive, and notify hooks.
    pub fn dispatch(&mut self, msg: TableMessage) -> Command<TableNotification> {
        tracing::debug!(?msg, "table message");
        let cmd = self.state.update(msg);
        self.state.derive(&self.records);

        if self.on_selection_change.is_some() || self.on_sort_change.is_some() {
            for notification in cmd.clone().notifications() {
                self.notify(&notification);
            }
        }
        cmd
    }

    fn notify(&mut self, notification: &TableNotification) {
        match notification {
            TableNotification::Selection(changed) => {
                if let Some(hook) = self.on_selection_change.as_mut() {
                    hook(changed);
                }
            }
            TableNotification::Sort(changed) => {
                if let Some(hook) = self.on_sort_change.as_mut() {
                    hook(changed);
                }
            }
            TableNotification::Search(_) | TableNotification::Page(_) => {}
        }
    }

    /// Set the search query.
    pub fn set_search(&mut self, query: impl Into<String>) -> Command<TableNotification> {
        self.dispatch(TableMessage::Search(query.into()))
    }

    /// Header click. Ignored for unknown or non-sortable columns.
    pub fn sort_by(&mut self, key: &str) -> Command<TableNotification> {
        let sortable = self.columns.iter().any(|c| c.key == key && c.sortable);
        if !sortable {
            tracing::debug!(key, "ignored sort request for non-sortable column");
            return Command::None;
        }
        self.dispatch(TableMessage::SortBy(key.to_string()))
    }

    /// Return to insertion order.
    pub fn clear_sort(&mut self) -> Command<TableNotification> {
        self.dispatch(TableMessage::ClearSort)
    }

    /// Jump to a 1-based page (clamped).
    pub fn go_to_page(&mut self, page: usize) -> Command<TableNotification> {
        self.dispatch(TableMessage::GoToPage(page))
    }

    /// Next page.
    pub fn next_page(&mut self) -> Command<TableNotification> {
        self.dispatch(TableMessage::NextPage)
    }

    /// Previous page.
    pub fn prev_page(&mut self) -> Command<TableNotification> {
        self.dispatch(TableMessage::PrevPage)
    }

    /// Check or uncheck one row. No-op when the table is not selectable or
    /// no record has `id`.
    pub fn toggle_row(&mut self, id: &RecordId, checked: bool) -> Command<TableNotification> {
        if !self.selectable {
            return Command::None;
        }
        if !self.has_record(id) {
            tracing::debug!(%id, "ignored toggle for unknown row");
            return Command::None;
        }
        self.dispatch(TableMessage::ToggleRow {
            id: id.clone(),
            checked,
        })
    }

    /// Header checkbox: check or uncheck every row on the current page.
    pub fn toggle_page(&mut self, checked: bool) -> Command<TableNotification> {
        if !self.selectable {
            return Command::None;
        }
        let ids = self
            .state
            .rows(&self.records)
            .page_ids()
            .into_iter()
            .cloned()
            .collect();
        self.dispatch(TableMessage::TogglePage { ids, checked })
    }

    /// Deselect every row.
    pub fn clear_selection(&mut self) -> Command<TableNotification> {
        self.dispatch(TableMessage::ClearSelection)
    }

    /// Activate a row action. `None` for unknown rows or actions.
    pub fn activate_action(&self, record: &RecordId, action: &str) -> Option<RowActionSelected> {
        if !self.has_record(record) {
            return None;
        }
        let selected = RowActionMenu::new(record.clone(), &self.row_actions).activate(action);
        if selected.is_some() {
            tracing::debug!(%record, action, "row action");
        }
        selected
    }

    /// Build the current frame.
    #[must_use]
    pub fn view(&self) -> TableView {
        let derived = self.state.rows(&self.records);
        let selection = self.state.selection();
        let page_ids = derived.page_ids();

        let header = self
            .columns
            .iter()
            .map(|c| HeaderCell {
                key: c.key.clone(),
                label: c.label.clone(),
                align: c.align,
                sortable: c.sortable,
                sort: self.state.sort().direction_for(&c.key),
            })
            .collect();

        let rows = derived
            .rows
            .iter()
            .map(|record| RenderedRow {
                id: record.id().clone(),
                selected: selection.contains(record.id()),
                cells: self
                    .columns
                    .iter()
                    .map(|c| RenderedCell {
                        key: c.key.clone(),
                        text: c.render_cell(record),
                        align: c.align,
                    })
                    .collect(),
                actions: (!self.row_actions.is_empty())
                    .then(|| RowActionMenu::new(record.id().clone(), &self.row_actions)),
            })
            .collect();

        TableView {
            search: self.searchable.then(|| SearchBox {
                query: self.state.search().to_string(),
                placeholder: self.search_placeholder.clone(),
            }),
            header,
            select_all: self
                .selectable
                .then(|| selection.page_check_state(&page_ids)),
            rows,
            pagination: PaginationControls::new(derived.page, derived.total_pages),
            selected_count: selection.len(),
            filtered_count: derived.filtered_count,
            total_count: derived.total_count,
            striped: self.striped,
        }
    }

    /// Render the current frame as HTML table markup.
    #[must_use]
    pub fn to_html(&self) -> String {
        html::render(
            &self.view(),
            &html::HtmlOptions {
                test_id: self.test_id_value.as_deref().unwrap_or("data-table"),
                accessible_name: self.accessible_name_value.as_deref(),
            },
        )
    }
}
