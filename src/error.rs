//! Error types for Toolrec
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// All error types that can occur in Toolrec
#[derive(Debug, Error)]
pub enum ToolrecError {
    /// Tool id already registered and the catalog policy forbids overwrite
    #[error("Duplicate tool: {0}")]
    DuplicateTool(String),

    /// Request or tool data failed validation
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Catalog file could not be read or parsed
    #[error("Catalog load error: {0}")]
    CatalogLoad(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for Toolrec operations
pub type Result<T> = std::result::Result<T, ToolrecError>;
