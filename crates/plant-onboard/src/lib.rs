//! # plant-onboard
//!
//! Backend library for the plant onboarding wizard.
//!
//! ## Features
//!
//! - Formula validation for calculated parameters (safety, dependencies, syntax)
//! - Parameter registry filtered by asset type
//! - Keyword-based parameter suggestions
//! - CSV/TSV parameter import
//! - Reusable onboarding templates
//!
//! ## Example
//!
//! ```rust
//! use plant_onboard::prelude::*;
//!
//! let registry = ParameterRegistry::builtin().unwrap();
//! let boiler = registry.filter(&["boiler"]);
//! let enabled: Vec<&str> = boiler.iter().map(|p| p.name.as_str()).collect();
//!
//! let result = validate_formula("steam_generation / coal_consumption * 100", &enabled);
//! assert!(result.valid);
//! assert_eq!(result.depends_on, vec!["coal_consumption", "steam_generation"]);
//! ```

pub mod prelude;
pub mod review;

pub use review::PayloadReviewExt;

// Re-export core types
pub use plant_onboard_core::{
    format_timestamp,
    Asset,
    // Parameter types
    Category,
    // Error types
    Error,
    FormulaConfig,
    // Onboarding payload types
    OnboardingPayload,
    OnboardingSummary,
    Parameter,
    ParameterConfig,
    ParameterRegistry,
    ParameterSelection,
    PlantInfo,
    Result,
    // Suggestions
    Suggestion,
    SuggestionEngine,
    SuggestionRule,
    TIMESTAMP_FORMAT,
};

// Re-export formula types
pub use plant_onboard_formula::{
    parse_formula, validate_formula, FormulaError, FormulaExpr, FormulaGraph, FormulaResult,
    FormulaValidator, ValidationError, ValidationResult,
};

// Re-export I/O types
pub use plant_onboard_csv::{
    CsvError, CsvResult, ImportFormat, ImportOptions, ImportOutcome, ParameterImporter,
};
pub use plant_onboard_templates::{
    sample_templates, seed_samples, template_id, FileTemplateStore, NewTemplate, TemplateDocument,
    TemplateError, TemplateResult, TemplateStore, TemplateSummary,
};
