//! Error types for tabula-core.
//!
//! The filter/sort/paginate pipeline never fails; these errors only come out
//! of loading records and table configuration.

use thiserror::Error;

/// Errors raised while loading records or configuration.
#[derive(Debug, Error)]
pub enum TableError {
    /// YAML parsing error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration parsed but is not usable.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Record source is not a JSON array.
    #[error("Expected a JSON array of records, found {kind}")]
    ExpectedArray {
        /// JSON kind that was found.
        kind: &'static str,
    },

    /// A record has no string `id` field.
    #[error("Record at index {index} has no string `id` field")]
    MissingId {
        /// Position of the record in its source array.
        index: usize,
    },

    /// A record is not a JSON object.
    #[error("Record at index {index} is not an object")]
    InvalidRecord {
        /// Position of the record in its source array.
        index: usize,
    },

    /// A field holds an array or object, which cannot be shown in a cell.
    #[error("Unsupported value for field '{field}': {kind}")]
    UnsupportedValue {
        /// Field key.
        field: String,
        /// JSON kind that was found.
        kind: &'static str,
    },
}

/// Result alias for tabula-core.
pub type Result<T> = std::result::Result<T, TableError>;
