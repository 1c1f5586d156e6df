//! Table renderer for Tabula.
//!
//! [`DataTable`] wires the core pipeline into one interactive widget: a
//! search box, sortable headers, formatted cells, a selection checkbox
//! column, per-row action menus and pagination controls. Each frame is a
//! plain [`TableView`], which can also be rendered to HTML markup.

pub mod data_table;
pub mod html;
pub mod menu;
pub mod pagination;
pub mod view;

pub use data_table::DataTable;
pub use html::{escape, HtmlOptions};
pub use menu::{RowAction, RowActionMenu, RowActionSelected};
pub use pagination::{PageLink, PaginationControls};
pub use view::{HeaderCell, RenderedCell, RenderedRow, SearchBox, TableView};
