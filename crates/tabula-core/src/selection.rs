//! Row selection tracking.
//!
//! Selection is keyed by record id, so it survives filtering, sorting and
//! page changes. A row that is filtered out of view stays selected.

use crate::record::RecordId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Checkbox state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CheckState {
    /// Not checked
    #[default]
    Unchecked,
    /// Checked
    Checked,
    /// Some but not all rows on the page are checked
    Indeterminate,
}

impl CheckState {
    /// Toggle between checked and unchecked.
    #[must_use]
    pub const fn toggle(&self) -> Self {
        match self {
            Self::Unchecked => Self::Checked,
            Self::Checked | Self::Indeterminate => Self::Unchecked,
        }
    }

    /// Check if checked (true for Checked, false for others).
    #[must_use]
    pub const fn is_checked(&self) -> bool {
        matches!(self, Self::Checked)
    }

    /// Check if indeterminate.
    #[must_use]
    pub const fn is_indeterminate(&self) -> bool {
        matches!(self, Self::Indeterminate)
    }
}

/// Set of selected record ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    ids: BTreeSet<RecordId>,
}

impl Selection {
    /// Create an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select or deselect every id on the current page.
    ///
    /// Ids outside `page_ids` are left alone.
    pub fn select_all_on_page<'a, I>(&mut self, page_ids: I, checked: bool)
    where
        I: IntoIterator<Item = &'a RecordId>,
    {
        for id in page_ids {
            if checked {
                self.ids.insert(id.clone());
            } else {
                self.ids.remove(id);
            }
        }
    }

    /// Select or deselect a single row.
    pub fn toggle_row(&mut self, id: &RecordId, checked: bool) {
        if checked {
            self.ids.insert(id.clone());
        } else {
            self.ids.remove(id);
        }
    }

    /// True iff `page_ids` is non-empty and every id is selected.
    #[must_use]
    pub fn is_all_selected_on_page(&self, page_ids: &[&RecordId]) -> bool {
        !page_ids.is_empty() && page_ids.iter().all(|id| self.ids.contains(*id))
    }

    /// True iff at least one, but not every, id in `page_ids` is selected.
    #[must_use]
    pub fn is_partially_selected_on_page(&self, page_ids: &[&RecordId]) -> bool {
        let selected = page_ids.iter().filter(|id| self.ids.contains(**id)).count();
        selected > 0 && selected < page_ids.len()
    }

    /// Tri-state header checkbox for a page.
    #[must_use]
    pub fn page_check_state(&self, page_ids: &[&RecordId]) -> CheckState {
        if self.is_all_selected_on_page(page_ids) {
            CheckState::Checked
        } else if self.is_partially_selected_on_page(page_ids) {
            CheckState::Indeterminate
        } else {
            CheckState::Unchecked
        }
    }

    /// Check if a row is selected.
    #[must_use]
    pub fn contains(&self, id: &RecordId) -> bool {
        self.ids.contains(id)
    }

    /// Number of selected rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Selected ids in sorted order.
    pub fn ids(&self) -> impl Iterator<Item = &RecordId> {
        self.ids.iter()
    }

    /// Deselect everything.
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Drop ids that are not in `existing`. Returns how many were dropped.
    pub fn retain_existing<'a, I>(&mut self, existing: I) -> usize
    where
        I: IntoIterator<Item = &'a RecordId>,
    {
        let existing: BTreeSet<&RecordId> = existing.into_iter().collect();
        let before = self.ids.len();
        self.ids.retain(|id| existing.contains(id));
        before - self.ids.len()
    }
}
