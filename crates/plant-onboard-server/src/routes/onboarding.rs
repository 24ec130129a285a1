use axum::{http::StatusCode, Json};
use chrono::Utc;
use plant_onboard::{OnboardingPayload, OnboardingSummary, PayloadReviewExt};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct OnboardingResponse {
    pub status: String,
    pub message: String,
    pub summary: OnboardingSummary,
}

/// 422 body listing every problem with a payload
#[derive(Debug, Serialize, Deserialize)]
pub struct OnboardingRejection {
    pub error: String,
    pub issues: Vec<String>,
}

/// POST /api/onboarding
pub(super) async fn submit_onboarding(
    Json(payload): Json<OnboardingPayload>,
) -> Result<Json<OnboardingResponse>, (StatusCode, Json<OnboardingRejection>)> {
    let issues = payload.review();
    if !issues.is_empty() {
        tracing::warn!(
            plant = %payload.plant.name,
            issues = issues.len(),
            "onboarding payload rejected"
        );
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(OnboardingRejection {
                error: "Onboarding payload rejected".to_string(),
                issues,
            }),
        ));
    }

    let summary = payload.summary(Utc::now().naive_utc());
    tracing::info!(
        plant = %summary.plant_name,
        assets = summary.num_assets,
        parameters = summary.num_parameters,
        formulas = summary.num_formulas,
        "plant onboarded"
    );

    Ok(Json(OnboardingResponse {
        status: "success".to_string(),
        message: payload.success_message(),
        summary,
    }))
}
