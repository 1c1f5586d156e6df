//! Tabula: sortable, searchable, paginated and selectable data tables.
//!
//! This crate re-exports the table model from `tabula-core` and the
//! [`widgets::DataTable`] renderer from `tabula-widgets`.
//!
//! # Example
//!
//! ```
//! use tabula::widgets::DataTable;
//! use tabula::{ColumnDescriptor, ColumnKind, Record};
//!
//! let mut table = DataTable::new()
//!     .column(ColumnDescriptor::new("name", "Name").sortable())
//!     .column(ColumnDescriptor::new("amount", "Amount").kind(ColumnKind::Number).sortable())
//!     .records([
//!         Record::new("1").cell("name", "Kim").cell("amount", 300),
//!         Record::new("2").cell("name", "Lee").cell("amount", 100),
//!     ]);
//!
//! table.sort_by("amount");
//! assert_eq!(table.view().row_ids(), vec!["2", "1"]);
//! ```

pub use tabula_core::*;
pub use tabula_widgets as widgets;

pub mod showcase;
