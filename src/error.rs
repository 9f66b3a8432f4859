//! Error types for Promptbook
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// All error types that can occur in Promptbook
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A template is already registered under this key
    #[error("Duplicate template key: {0}")]
    DuplicateKey(String),

    /// No template registered under this key
    #[error("Template not found: {0}")]
    NotFound(String),

    /// Render-time gap: the body references a placeholder with no value
    #[error("Unresolved placeholder '{{{placeholder}}}' in template '{key}'")]
    UnresolvedPlaceholder { key: String, placeholder: String },

    /// Template keys must be non-empty
    #[error("Template key must not be empty")]
    EmptyKey,

    /// Template bodies must be non-empty
    #[error("Template body must not be empty: {0}")]
    EmptyBody(String),

    /// A render parameter could not be turned into substitution text
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParam { name: String, reason: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for Promptbook operations
pub type Result<T> = std::result::Result<T, RegistryError>;
