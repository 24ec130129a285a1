//! Import options

use crate::error::{CsvError, CsvResult};

/// Header columns every import must carry
pub const REQUIRED_COLUMNS: [&str; 5] = ["name", "display_name", "unit", "category", "section"];

/// Delimited text format, chosen from the upload's file name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportFormat {
    /// Comma separated (`.csv`, `.txt`)
    Csv,
    /// Tab separated (`.tsv`)
    Tsv,
}

impl ImportFormat {
    /// Pick the format from a file name's extension (case-insensitive)
    pub fn from_filename(filename: &str) -> CsvResult<Self> {
        let extension = filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "csv" | "txt" => Ok(ImportFormat::Csv),
            "tsv" => Ok(ImportFormat::Tsv),
            _ => Err(CsvError::UnsupportedFileType(extension)),
        }
    }

    /// Field delimiter of the format
    pub fn delimiter(&self) -> u8 {
        match self {
            ImportFormat::Csv => b',',
            ImportFormat::Tsv => b'\t',
        }
    }
}

/// Options for importing parameters
#[derive(Debug, Clone)]
pub struct ImportOptions {
    /// Field delimiter (default: comma)
    pub delimiter: u8,
    /// Quote character (default: double quote)
    pub quote: u8,
    /// Section given to rows with a blank section
    pub default_section: String,
}

impl ImportOptions {
    /// Default options with the format's delimiter
    pub fn for_format(format: ImportFormat) -> Self {
        Self {
            delimiter: format.delimiter(),
            ..Self::default()
        }
    }
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            default_section: "IMPORTED".to_string(),
        }
    }
}
