//! Error types for plant-onboard-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in plant-onboard-core
#[derive(Debug, Error)]
pub enum Error {
    /// Category outside `input`, `output`, `calculated`
    #[error("Invalid category '{0}'")]
    InvalidCategory(String),

    /// Two registry entries share a name
    #[error("Duplicate parameter name: {0}")]
    DuplicateParameter(String),

    /// Registry document is not valid JSON for a parameter list
    #[error("Invalid parameter registry: {0}")]
    Json(#[from] serde_json::Error),

    /// Registry file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
