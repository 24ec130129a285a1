//! # plant-onboard-formula
//!
//! Formula parsing and validation for calculated plant parameters.
//!
//! This crate provides:
//! - Identifier scanning and whole-identifier substitution
//! - An arithmetic formula parser (text → AST) over a fixed set of math builtins
//! - The formula validator used by the onboarding wizard
//! - Dependency tracking between calculated parameters
//!
//! Formulas are never evaluated; validation only decides whether a formula is
//! safe, references enabled parameters, and is syntactically well formed.
//!
//! ## Example
//!
//! ```rust
//! use plant_onboard_formula::validate_formula;
//!
//! let result = validate_formula(
//!     "steam_generation / coal_consumption * 100",
//!     &["steam_generation", "coal_consumption"],
//! );
//! assert!(result.valid);
//! assert_eq!(result.depends_on, vec!["coal_consumption", "steam_generation"]);
//! ```

pub mod ast;
pub mod dependency;
pub mod error;
pub mod functions;
pub mod parser;
pub mod scanner;
pub mod validator;

pub use ast::{BinaryOperator, FormulaExpr, UnaryOperator};
pub use dependency::FormulaGraph;
pub use error::{FormulaError, FormulaResult};
pub use functions::{is_builtin, MathConstant, MathFunction, BUILTIN_NAMES};
pub use parser::parse_formula;
pub use validator::{
    validate_formula, FormulaValidator, ValidationError, ValidationResult, UNSAFE_TOKENS,
};
