//! Prelude module - common imports for plant-onboard users
//!
//! ```rust
//! use plant_onboard::prelude::*;
//! ```

pub use crate::{
    // Formula validation
    validate_formula,
    Category,
    FileTemplateStore,
    FormulaGraph,
    FormulaValidator,

    // Import
    ImportFormat,
    ImportOptions,
    NewTemplate,
    // Onboarding
    OnboardingPayload,
    Parameter,
    ParameterImporter,
    // Parameters
    ParameterRegistry,
    ParameterSelection,
    // Extension traits
    PayloadReviewExt,
    SuggestionEngine,
    // Templates
    TemplateStore,
    ValidationResult,
};
