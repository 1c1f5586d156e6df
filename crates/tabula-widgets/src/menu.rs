//! Per-row action menu.
//!
//! Every rendered row carries a [`RowActionMenu`] built from the table's
//! [`RowAction`] items. Activating an item yields [`RowActionSelected`].

use serde::{Deserialize, Serialize};
use tabula_core::RecordId;

/// Row action menu item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowAction {
    /// Non-interactive heading
    Label(String),
    /// Action item
    Action {
        /// Item label
        label: String,
        /// Unique action ID
        action: String,
        /// Whether the action destroys data
        destructive: bool,
        /// Whether item is disabled
        disabled: bool,
    },
    /// Separator line
    Separator,
}

impl RowAction {
    /// Create a new action item.
    #[must_use]
    pub fn action(label: impl Into<String>, action: impl Into<String>) -> Self {
        Self::Action {
            label: label.into(),
            action: action.into(),
            destructive: false,
            disabled: false,
        }
    }

    /// Create a heading.
    #[must_use]
    pub fn label(label: impl Into<String>) -> Self {
        Self::Label(label.into())
    }

    /// Create a separator.
    #[must_use]
    pub const fn separator() -> Self {
        Self::Separator
    }

    /// Mark an action as destructive.
    #[must_use]
    pub fn destructive(mut self) -> Self {
        if let Self::Action { destructive, .. } = &mut self {
            *destructive = true;
        }
        self
    }

    /// Set disabled state.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        if let Self::Action { disabled: d, .. } = &mut self {
            *d = disabled;
        }
        self
    }

    /// Action ID, for action items.
    #[must_use]
    pub fn action_id(&self) -> Option<&str> {
        match self {
            Self::Action { action, .. } => Some(action),
            Self::Label(_) | Self::Separator => None,
        }
    }

    /// Check if this item can be activated.
    #[must_use]
    pub const fn is_selectable(&self) -> bool {
        matches!(self, Self::Action { disabled: false, .. })
    }
}

/// Message emitted when a row action is activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowActionSelected {
    /// Action ID
    pub action: String,
    /// Row the menu belongs to
    pub record: RecordId,
}

/// Action menu for one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowActionMenu {
    /// Row the menu belongs to
    pub record: RecordId,
    /// Menu items
    pub items: Vec<RowAction>,
}

impl RowActionMenu {
    /// Build the menu for a row.
    #[must_use]
    pub fn new(record: RecordId, items: &[RowAction]) -> Self {
        Self {
            record,
            items: items.to_vec(),
        }
    }

    /// Check if the menu has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Activate an action by ID. Unknown or disabled actions yield `None`.
    #[must_use]
    pub fn activate(&self, action: &str) -> Option<RowActionSelected> {
        self.items
            .iter()
            .find(|item| item.action_id() == Some(action))
            .filter(|item| item.is_selectable())
            .map(|_| RowActionSelected {
                action: action.to_string(),
                record: self.record.clone(),
            })
    }
}
