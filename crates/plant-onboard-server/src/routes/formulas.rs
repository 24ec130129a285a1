use axum::Json;
use plant_onboard::{validate_formula as validate, ValidationResult};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ValidateFormulaRequest {
    pub expression: String,
    pub enabled_parameters: Vec<String>,
}

/// POST /api/validate-formula
///
/// Always answers 200; rejections are reported in the body.
pub(super) async fn validate_formula(
    Json(req): Json<ValidateFormulaRequest>,
) -> Json<ValidationResult> {
    let result = validate(&req.expression, &req.enabled_parameters);
    tracing::debug!(valid = result.valid, depends_on = ?result.depends_on, "validated formula");
    Json(result)
}
