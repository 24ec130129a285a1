//! Parameter import reader

use std::fs::File;
use std::io::Read;
use std::path::Path;

use plant_onboard_core::{Category, Parameter, ParameterSelection};

use crate::error::{CsvError, CsvResult};
use crate::options::{ImportOptions, REQUIRED_COLUMNS};

const BOM: char = '\u{feff}';

/// Result of an import: accepted rows and per-row problems
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportOutcome {
    /// Accepted rows, in file order
    pub parameters: Vec<ParameterSelection>,
    /// One message per rejected row, e.g. `Row 3: missing name`
    pub errors: Vec<String>,
}

impl ImportOutcome {
    /// Number of accepted parameters
    pub fn count(&self) -> usize {
        self.parameters.len()
    }
}

/// Column positions of the required header fields
struct Columns {
    name: usize,
    display_name: usize,
    unit: usize,
    category: usize,
    section: usize,
}

impl Columns {
    fn locate(headers: &csv::StringRecord) -> CsvResult<Self> {
        let position = |column: &str| headers.iter().position(|h| h == column);

        let mut missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|column| position(**column).is_none())
            .map(|column| column.to_string())
            .collect();
        if !missing.is_empty() {
            missing.sort();
            return Err(CsvError::MissingColumns(missing));
        }

        let index = |column: &str| position(column).unwrap_or_default();
        Ok(Self {
            name: index("name"),
            display_name: index("display_name"),
            unit: index("unit"),
            category: index("category"),
            section: index("section"),
        })
    }
}

/// Reader turning delimited text into parameter selections
pub struct ParameterImporter;

impl ParameterImporter {
    /// Import parameters from a file
    pub fn read_file<P: AsRef<Path>>(path: P, options: &ImportOptions) -> CsvResult<ImportOutcome> {
        let file = File::open(path)?;
        Self::read(file, options)
    }

    /// Import parameters from a reader
    pub fn read<R: Read>(mut reader: R, options: &ImportOptions) -> CsvResult<ImportOutcome> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Self::read_bytes(&bytes, options)
    }

    /// Import parameters from an uploaded byte buffer
    ///
    /// The buffer must be UTF-8; a leading byte order mark is ignored.
    pub fn read_bytes(bytes: &[u8], options: &ImportOptions) -> CsvResult<ImportOutcome> {
        let text = std::str::from_utf8(bytes)?;
        let text = text.strip_prefix(BOM).unwrap_or(text);

        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .has_headers(true)
            .flexible(true)
            .from_reader(text.as_bytes());

        let columns = Columns::locate(csv_reader.headers()?)?;
        let mut outcome = ImportOutcome::default();

        // Header is row 1
        for (index, result) in csv_reader.records().enumerate() {
            let record = result?;
            let row = index + 2;
            let field = |column: usize| record.get(column).unwrap_or("");

            let name = field(columns.name).trim();
            if name.is_empty() {
                outcome.errors.push(format!("Row {}: missing name", row));
                continue;
            }

            let raw_category = field(columns.category);
            let category: Category = match raw_category.parse() {
                Ok(category) => category,
                Err(_) => {
                    outcome
                        .errors
                        .push(format!("Row {}: invalid category '{}'", row, raw_category));
                    continue;
                }
            };

            let display_name = non_blank(field(columns.display_name)).unwrap_or(name);
            let section =
                non_blank(field(columns.section)).unwrap_or(options.default_section.as_str());

            outcome.parameters.push(ParameterSelection::enabled(Parameter {
                name: name.to_string(),
                display_name: display_name.to_string(),
                unit: field(columns.unit).trim().to_string(),
                category,
                section: section.to_string(),
                applicable_asset_types: Vec::new(),
            }));
        }

        tracing::debug!(
            accepted = outcome.parameters.len(),
            rejected = outcome.errors.len(),
            "imported parameters"
        );
        Ok(outcome)
    }
}

fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
