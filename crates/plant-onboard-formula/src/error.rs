//! Formula error types

use thiserror::Error;

/// Result type for formula operations
pub type FormulaResult<T> = std::result::Result<T, FormulaError>;

/// Errors that can occur while parsing a formula or analysing formula dependencies
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormulaError {
    /// Formula parse error
    #[error("{0}")]
    Parse(String),

    /// Wrong number of arguments
    #[error("{function}() takes {expected} but {actual} were given")]
    ArgumentCount {
        function: &'static str,
        expected: String,
        actual: usize,
    },

    /// A constant was used like a function
    #[error("'{0}' is a constant and cannot be called")]
    NotCallable(&'static str),

    /// A function was used without a call
    #[error("'{0}' is a function and must be called with arguments")]
    NotAValue(&'static str),

    /// Parenthesis or call nesting beyond the parser limit
    #[error("expression nested too deeply (limit {0})")]
    TooDeep(usize),

    /// Circular reference between calculated parameters
    #[error("Circular reference detected: {}", .0.join(" -> "))]
    CircularReference(Vec<String>),
}
