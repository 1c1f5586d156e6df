//! Table configuration.
//!
//! Tables can be declared in YAML, e.g. next to a demo page:
//!
//! ```yaml
//! page_size: 5
//! search_column: email
//! search_placeholder: Filter emails...
//! initial_sort:
//!   column: amount
//!   direction: desc
//! ```

use crate::error::{Result, TableError};
use crate::sort::SortState;
use crate::state::TableState;
use serde::{Deserialize, Serialize};

/// Options for a table instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Rows per page (fixed for the instance)
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Show a checkbox column
    #[serde(default = "default_true")]
    pub selectable: bool,
    /// Show a search box
    #[serde(default = "default_true")]
    pub searchable: bool,
    /// Search box placeholder
    #[serde(default = "default_placeholder")]
    pub search_placeholder: String,
    /// Restrict search to one field (None = any field)
    #[serde(default)]
    pub search_column: Option<String>,
    /// Sort applied when the table mounts
    #[serde(default)]
    pub initial_sort: Option<SortState>,
    /// Alternate row backgrounds
    #[serde(default = "default_true")]
    pub striped: bool,
}

fn default_page_size() -> usize {
    10
}

fn default_true() -> bool {
    true
}

fn default_placeholder() -> String {
    "Filter...".to_string()
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            selectable: true,
            searchable: true,
            search_placeholder: default_placeholder(),
            search_column: None,
            initial_sort: None,
            striped: true,
        }
    }
}

impl TableConfig {
    /// Parse and validate a config from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml_ng::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a config from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize config to a YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Check values serde cannot.
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(TableError::InvalidConfig(
                "page_size must be greater than zero".to_string(),
            ));
        }
        if let Some(sort) = &self.initial_sort {
            if sort.column.as_deref().is_some_and(str::is_empty) {
                return Err(TableError::InvalidConfig(
                    "initial_sort.column must not be empty".to_string(),
                ));
            }
        }
        if self.search_column.as_deref().is_some_and(str::is_empty) {
            return Err(TableError::InvalidConfig(
                "search_column must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Fresh table state for this config.
    #[must_use]
    pub fn initial_state(&self) -> TableState {
        let mut state = TableState::new(self.page_size);
        if let Some(column) = &self.search_column {
            state = state.with_search_column(column.clone());
        }
        if let Some(sort) = &self.initial_sort {
            state = state.with_sort(sort.clone());
        }
        state
    }
}
