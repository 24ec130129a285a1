//! Template store error types

use thiserror::Error;

/// Result type for template store operations
pub type TemplateResult<T> = std::result::Result<T, TemplateError>;

/// Errors that can occur while reading or writing templates
#[derive(Debug, Error)]
pub enum TemplateError {
    /// No template with this id
    #[error("Template not found")]
    NotFound { id: String },

    /// Template name has no characters usable in an id
    #[error("Template name '{0}' does not produce a valid id")]
    InvalidName(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored document is not valid JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TemplateError {
    pub(crate) fn not_found(id: &str) -> Self {
        TemplateError::NotFound { id: id.to_string() }
    }
}
