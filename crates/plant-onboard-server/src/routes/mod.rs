//! HTTP routes

mod formulas;
mod imports;
mod onboarding;
mod parameters;
mod suggestions;
mod templates;

use axum::{
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::state::AppState;

pub use formulas::ValidateFormulaRequest;
pub use imports::ImportResponse;
pub use onboarding::{OnboardingRejection, OnboardingResponse};
pub use parameters::ParametersQuery;
pub use suggestions::{SuggestRequest, SuggestResponse};
pub use templates::{DeleteResponse, SaveResponse, TemplateListResponse};

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusMessage {
    pub message: String,
}

/// Build the full router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/api/parameters", get(parameters::list_parameters))
        .route("/api/validate-formula", post(formulas::validate_formula))
        .route("/api/suggest-parameters", post(suggestions::suggest_parameters))
        .route("/api/import-parameters", post(imports::import_parameters))
        .route(
            "/api/templates",
            get(templates::list_templates).post(templates::save_template),
        )
        .route(
            "/api/templates/:id",
            get(templates::get_template).delete(templates::delete_template),
        )
        .route("/api/onboarding", post(onboarding::submit_onboarding))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}

/// GET /
async fn root() -> Json<StatusMessage> {
    Json(StatusMessage {
        message: "Plant Onboarding API is running".to_string(),
    })
}
