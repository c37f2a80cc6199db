//! Error types for loading the hook dataset.

/// Errors that can occur while loading or querying the catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// I/O error reading the dataset file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON, missing fields, or values outside the fixed enumerations.
    #[error("invalid dataset: {0}")]
    Json(#[from] serde_json::Error),

    /// Two records share an id.
    #[error("duplicate hook id: {0}")]
    DuplicateId(String),

    /// A record lists no hook types.
    #[error("hook {id} has no hook types")]
    EmptyHookTypes {
        /// Id of the offending record.
        id: String,
    },

    /// Dataset file exceeds the maximum size.
    #[error("dataset file too large: {path} ({size} bytes > {max} bytes)")]
    FileTooLarge {
        /// Path to the oversized file.
        path: String,
        /// Actual file size.
        size: u64,
        /// Maximum allowed size.
        max: u64,
    },

    /// No record with the requested id.
    #[error("hook not found: {0}")]
    NotFound(String),
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
