//! Table state management.
//!
//! Follows the Elm Architecture: `State + Message → (State, Command)`.
//! [`TableState`] holds everything a table needs besides its data: the
//! search query, sort, current page and selection. Every view is re-derived
//! from scratch by [`TableState::derive`] in the fixed order
//! filter → sort → paginate.
//!
//! # Examples
//!
//! ```
//! use tabula_core::{Record, State, TableMessage, TableState};
//!
//! let records = vec![
//!     Record::new("1").cell("name", "Kim").cell("amount", 300),
//!     Record::new("2").cell("name", "Lee").cell("amount", 100),
//!     Record::new("3").cell("name", "Lee").cell("amount", 200),
//! ];
//!
//! let mut state = TableState::new(2);
//! state.update(TableMessage::SortBy("amount".into()));
//! let view = state.derive(&records);
//!
//! let ids: Vec<&str> = view.rows.iter().map(|r| r.id().as_str()).collect();
//! assert_eq!(ids, vec!["2", "3"]);
//! assert_eq!(view.total_pages, 2);
//! ```

use crate::column::ColumnKind;
use crate::filter::{filter_records, filter_records_by};
use crate::paginate::{clamp_page, paginate};
use crate::record::{Record, RecordId};
use crate::selection::Selection;
use crate::sort::{sort_records_as, SortDirection, SortState};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// State trait for interactive components.
pub trait State {
    /// Input that changes the state
    type Message;
    /// Output observers may react to
    type Notification;

    /// Update state in response to a message.
    ///
    /// Returns a command carrying notifications for observers.
    fn update(&mut self, msg: Self::Message) -> Command<Self::Notification>;
}

/// Effects produced by a state update.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Command<N> {
    /// No command
    #[default]
    None,
    /// Execute multiple commands
    Batch(Vec<Command<N>>),
    /// Tell observers something changed
    Notify(N),
}

impl<N> Command<N> {
    /// Create a batch of commands.
    pub fn batch(commands: impl IntoIterator<Item = Self>) -> Self {
        Self::Batch(commands.into_iter().collect())
    }

    /// Check if this is the none command.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Flatten into the notifications it carries, in order.
    pub fn notifications(self) -> Vec<N> {
        let mut out = Vec::new();
        self.collect_into(&mut out);
        out
    }

    fn collect_into(self, out: &mut Vec<N>) {
        match self {
            Self::None => {}
            Self::Batch(cmds) => {
                for cmd in cmds {
                    cmd.collect_into(out);
                }
            }
            Self::Notify(n) => out.push(n),
        }
    }

    /// Map the notification type using a function.
    pub fn map<M, F>(self, f: F) -> Command<M>
    where
        F: Fn(N) -> M,
    {
        self.map_inner(&f)
    }

    fn map_inner<M, F>(self, f: &F) -> Command<M>
    where
        F: Fn(N) -> M,
    {
        match self {
            Self::None => Command::None,
            Self::Batch(cmds) => Command::Batch(cmds.into_iter().map(|c| c.map_inner(f)).collect()),
            Self::Notify(n) => Command::Notify(f(n)),
        }
    }
}

/// Message emitted when table sorting changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSortChanged {
    /// Column key being sorted, `None` when sorting was cleared
    pub column: Option<String>,
    /// Sort direction
    pub direction: SortDirection,
}

/// Message emitted when the current page changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TablePageChanged {
    /// New 1-based page
    pub page: usize,
}

/// Message emitted when the selection changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSelectionChanged {
    /// All selected ids, in sorted order
    pub selected: Vec<RecordId>,
}

/// Message emitted when the search query changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSearchChanged {
    /// New query
    pub query: String,
}

/// Everything a table can tell its observers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableNotification {
    Search(TableSearchChanged),
    Sort(TableSortChanged),
    Page(TablePageChanged),
    Selection(TableSelectionChanged),
}

/// Input for [`TableState::update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableMessage {
    /// Replace the search query
    Search(String),
    /// Header click on a column
    SortBy(String),
    /// Go back to insertion order
    ClearSort,
    /// Jump to a 1-based page
    GoToPage(usize),
    /// Next page
    NextPage,
    /// Previous page
    PrevPage,
    /// Check or uncheck one row
    ToggleRow {
        /// Row id
        id: RecordId,
        /// New checkbox value
        checked: bool,
    },
    /// Check or uncheck every row on the current page
    TogglePage {
        /// Ids on the current page
        ids: Vec<RecordId>,
        /// New checkbox value
        checked: bool,
    },
    /// Deselect every row
    ClearSelection,
}

/// Rows derived from the state for one render.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedRows<'a> {
    /// Records on the current page, in display order
    pub rows: Vec<&'a Record>,
    /// Current 1-based page
    pub page: usize,
    /// Total page count, at least 1
    pub total_pages: usize,
    /// Number of records matching the search
    pub filtered_count: usize,
    /// Number of records overall
    pub total_count: usize,
}

impl<'a> DerivedRows<'a> {
    /// Ids of the rows on the current page.
    #[must_use]
    pub fn page_ids(&self) -> Vec<&'a RecordId> {
        self.rows.iter().map(|r| r.id()).collect()
    }

    /// Check if no record matches the search.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.filtered_count == 0
    }
}

/// Per-table search, sort, pagination and selection state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableState {
    search: String,
    search_column: Option<String>,
    sort: SortState,
    page: usize,
    page_size: usize,
    selection: Selection,
    /// Declared kinds of sortable columns
    #[serde(default)]
    column_kinds: BTreeMap<String, ColumnKind>,
    /// Page count from the last derive, `None` before the first one
    total_pages: Option<usize>,
}

impl Default for TableState {
    fn default() -> Self {
        Self::new(10)
    }
}

impl TableState {
    /// Create a state with a fixed page size. Zero is raised to one.
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            search: String::new(),
            search_column: None,
            sort: SortState::default(),
            page: 1,
            page_size: page_size.max(1),
            selection: Selection::new(),
            column_kinds: BTreeMap::new(),
            total_pages: None,
        }
    }

    /// Restrict the search to one field.
    #[must_use]
    pub fn with_search_column(mut self, column: impl Into<String>) -> Self {
        self.search_column = Some(column.into());
        self
    }

    /// Start with a sort applied.
    #[must_use]
    pub fn with_sort(mut self, sort: SortState) -> Self {
        self.sort = sort;
        self
    }

    /// Declare the value kind of a column, used when sorting by it.
    #[must_use]
    pub fn with_column_kind(mut self, column: impl Into<String>, kind: ColumnKind) -> Self {
        self.set_column_kind(column, kind);
        self
    }

    /// Declare the value kind of a column, used when sorting by it.
    pub fn set_column_kind(&mut self, column: impl Into<String>, kind: ColumnKind) {
        self.column_kinds.insert(column.into(), kind);
    }

    /// Declared kind of a column, if any.
    #[must_use]
    pub fn column_kind(&self, column: &str) -> Option<ColumnKind> {
        self.column_kinds.get(column).copied()
    }

    /// Change the page size, keeping search, sort, page and selection.
    ///
    /// The page is re-clamped on the next [`derive`](Self::derive).
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.total_pages = None;
    }

    /// Current search query.
    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Field the search is restricted to, if any.
    #[must_use]
    pub fn search_column(&self) -> Option<&str> {
        self.search_column.as_deref()
    }

    /// Current sort.
    #[must_use]
    pub const fn sort(&self) -> &SortState {
        &self.sort
    }

    /// Current 1-based page.
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    /// Rows per page.
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Current selection.
    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Drop selected ids that are not in `records`. Returns the count dropped.
    pub fn retain_selection(&mut self, records: &[Record]) -> usize {
        let dropped = self.selection.retain_existing(records.iter().map(Record::id));
        if dropped > 0 {
            tracing::warn!(dropped, "dropped selected ids with no matching record");
        }
        dropped
    }

    /// Run filter → sort → paginate over `records` without touching state.
    #[must_use]
    pub fn rows<'a>(&self, records: &'a [Record]) -> DerivedRows<'a> {
        let filtered = match &self.search_column {
            Some(column) => filter_records_by(records, column, &self.search),
            None => filter_records(records, &self.search),
        };
        let filtered_count = filtered.len();
        let kind = self
            .sort
            .column
            .as_deref()
            .and_then(|column| self.column_kind(column));
        let sorted = sort_records_as(filtered, &self.sort, kind);
        let page = paginate(&sorted, self.page, self.page_size);

        tracing::trace!(
            total = records.len(),
            filtered = filtered_count,
            page = page.page,
            total_pages = page.total_pages,
            "derived table rows"
        );

        DerivedRows {
            rows: page.items,
            page: page.page,
            total_pages: page.total_pages,
            filtered_count,
            total_count: records.len(),
        }
    }

    /// Like [`rows`](Self::rows), then re-clamps the current page to the
    /// derived page count, so the state never points past the last page
    /// after a search narrows the results.
    pub fn derive<'a>(&mut self, records: &'a [Record]) -> DerivedRows<'a> {
        let derived = self.rows(records);
        if derived.page != self.page {
            tracing::debug!(from = self.page, to = derived.page, "clamped current page");
        }
        self.page = derived.page;
        self.total_pages = Some(derived.total_pages);
        derived
    }

    fn set_page(&mut self, page: usize) -> Command<TableNotification> {
        // Before the first derive the page count is unknown; derive clamps.
        let page = match self.total_pages {
            Some(total) => clamp_page(page, total),
            None => page.max(1),
        };
        if page == self.page {
            return Command::None;
        }
        tracing::debug!(page, "page changed");
        self.page = page;
        Command::Notify(TableNotification::Page(TablePageChanged { page }))
    }

    fn selection_changed(&self) -> Command<TableNotification> {
        Command::Notify(TableNotification::Selection(TableSelectionChanged {
            selected: self.selection.ids().cloned().collect(),
        }))
    }

    fn sort_changed(&self) -> Command<TableNotification> {
        tracing::debug!(column = ?self.sort.column, direction = ?self.sort.direction, "sort changed");
        Command::Notify(TableNotification::Sort(TableSortChanged {
            column: self.sort.column.clone(),
            direction: self.sort.direction,
        }))
    }
}

impl State for TableState {
    type Message = TableMessage;
    type Notification = TableNotification;

    fn update(&mut self, msg: Self::Message) -> Command<Self::Notification> {
        match msg {
            TableMessage::Search(query) => {
                if query == self.search {
                    return Command::None;
                }
                tracing::debug!(query = %query, "search changed");
                self.search.clone_from(&query);
                Command::Notify(TableNotification::Search(TableSearchChanged { query }))
            }
            TableMessage::SortBy(column) => {
                self.sort.request(&column);
                self.sort_changed()
            }
            TableMessage::ClearSort => {
                if !self.sort.is_active() {
                    return Command::None;
                }
                self.sort = SortState::default();
                self.sort_changed()
            }
            TableMessage::GoToPage(page) => self.set_page(page),
            TableMessage::NextPage => self.set_page(self.page.saturating_add(1)),
            TableMessage::PrevPage => self.set_page(self.page.saturating_sub(1)),
            TableMessage::ToggleRow { id, checked } => {
                if self.selection.contains(&id) == checked {
                    return Command::None;
                }
                self.selection.toggle_row(&id, checked);
                self.selection_changed()
            }
            TableMessage::TogglePage { ids, checked } => {
                let before = self.selection.len();
                self.selection.select_all_on_page(&ids, checked);
                if self.selection.len() == before {
                    return Command::None;
                }
                self.selection_changed()
            }
            TableMessage::ClearSelection => {
                if self.selection.is_empty() {
                    return Command::None;
                }
                self.selection.clear();
                self.selection_changed()
            }
        }
    }
}
