//! Whole-payload review
//!
//! Combines the payload's own checks with formula validation against the
//! parameters the payload enables, and circular reference detection across
//! its formulas.
//!
//! # Example
//!
//! ```rust
//! use plant_onboard::prelude::*;
//!
//! let payload: OnboardingPayload = serde_json::from_str(r#"{
//!     "plant": {"name": "P", "address": "A", "manager_email": "ops@plant.com"},
//!     "assets": [],
//!     "parameters": [
//!         {"name": "a", "display_name": "A", "unit": "", "category": "calculated", "section": "S"},
//!         {"name": "b", "display_name": "B", "unit": "", "category": "calculated", "section": "S"}
//!     ],
//!     "formulas": [
//!         {"parameter_name": "a", "expression": "b * 2"},
//!         {"parameter_name": "b", "expression": "a / 2"}
//!     ]
//! }"#).unwrap();
//!
//! assert_eq!(payload.review(), vec!["Circular reference detected: a -> b -> a"]);
//! ```

use plant_onboard_core::OnboardingPayload;
use plant_onboard_formula::{FormulaError, FormulaGraph, FormulaValidator};

/// Extension trait reviewing a submitted payload before it is accepted
pub trait PayloadReviewExt {
    /// Problems with the payload's formulas
    fn formula_issues(&self) -> Vec<String>;

    /// Every problem with the payload; empty means it can be accepted
    fn review(&self) -> Vec<String>;
}

impl PayloadReviewExt for OnboardingPayload {
    fn formula_issues(&self) -> Vec<String> {
        let validator = FormulaValidator::new(self.enabled_parameters());
        let mut graph = FormulaGraph::new();
        let mut issues = Vec::new();

        for formula in &self.formulas {
            let result = validator.validate(&formula.expression);
            match result.error {
                Some(error) => issues.push(format!(
                    "Formula for '{}': {}",
                    formula.parameter_name, error
                )),
                None => graph.add_formula(
                    &formula.parameter_name,
                    result.depends_on.iter().map(String::as_str),
                ),
            }
        }

        if let Some(cycle) = graph.find_cycle() {
            issues.push(FormulaError::CircularReference(cycle).to_string());
        }

        issues
    }

    fn review(&self) -> Vec<String> {
        let mut issues = self.check();
        issues.extend(self.formula_issues());
        issues
    }
}
