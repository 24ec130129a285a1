//! CSV import error types

use thiserror::Error;

/// Result type for CSV import operations
pub type CsvResult<T> = std::result::Result<T, CsvError>;

/// Errors that reject a whole import
///
/// Problems with individual rows are not errors; they are collected in
/// [`ImportOutcome::errors`](crate::ImportOutcome::errors).
#[derive(Debug, Error)]
pub enum CsvError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV library error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Upload is not UTF-8 text
    #[error("File is not valid UTF-8 text: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    /// Header row lacks required columns (sorted)
    #[error("Missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    /// File extension is not one of csv, tsv, txt
    #[error("Unsupported file type: .{0}. Please upload a CSV file.")]
    UnsupportedFileType(String),
}
