//! # plant-onboard-csv
//!
//! CSV and TSV parameter import for the plant onboarding backend.
//!
//! ## Example
//!
//! ```rust
//! use plant_onboard_csv::{ImportFormat, ImportOptions, ParameterImporter};
//!
//! let data = "name,display_name,unit,category,section\nsteam_flow,Steam Flow,TPH,input,BOILER\n";
//! let options = ImportOptions::for_format(ImportFormat::from_filename("params.csv").unwrap());
//! let outcome = ParameterImporter::read(data.as_bytes(), &options).unwrap();
//! assert_eq!(outcome.count(), 1);
//! assert!(outcome.errors.is_empty());
//! ```

mod error;
mod options;
mod reader;

pub use error::{CsvError, CsvResult};
pub use options::{ImportFormat, ImportOptions, REQUIRED_COLUMNS};
pub use reader::{ImportOutcome, ParameterImporter};
