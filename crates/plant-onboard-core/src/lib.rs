//! # plant-onboard-core
//!
//! Domain types for the plant onboarding backend.
//!
//! This crate provides:
//! - [`Parameter`] and [`Category`] - Parameter definitions as the wizard shows them
//! - [`ParameterRegistry`] - The catalogue of known parameters, filterable by asset type
//! - [`SuggestionEngine`] - Keyword-based parameter suggestions
//! - [`OnboardingPayload`] - The configuration submitted at the end of the wizard
//!
//! ## Example
//!
//! ```rust
//! use plant_onboard_core::{ParameterRegistry, SuggestionEngine};
//!
//! let registry = ParameterRegistry::builtin().unwrap();
//! let boiler = registry.filter(&["boiler"]);
//! assert!(boiler.iter().all(|p| p.applies_to("boiler")));
//!
//! let suggestions = SuggestionEngine::builtin().suggest("cement works", &["boiler"]);
//! assert!(suggestions.iter().any(|s| s.parameter.name == "clinker_production"));
//! ```

pub mod error;
pub mod onboarding;
pub mod parameter;
pub mod registry;
pub mod suggest;

pub use error::{Error, Result};
pub use onboarding::{
    format_timestamp, Asset, FormulaConfig, OnboardingPayload, OnboardingSummary,
    ParameterConfig, PlantInfo, TIMESTAMP_FORMAT,
};
pub use parameter::{Category, Parameter, ParameterSelection};
pub use registry::ParameterRegistry;
pub use suggest::{Suggestion, SuggestionEngine, SuggestionRule};
