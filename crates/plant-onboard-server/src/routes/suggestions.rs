use axum::{extract::State, Json};
use plant_onboard::Suggestion;
use serde::{Deserialize, Serialize};

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SuggestRequest {
    pub description: String,
    pub asset_types: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestResponse {
    pub suggestions: Vec<Suggestion>,
    pub count: usize,
}

/// POST /api/suggest-parameters
pub(super) async fn suggest_parameters(
    State(state): State<AppState>,
    Json(req): Json<SuggestRequest>,
) -> Json<SuggestResponse> {
    let suggestions = state.suggestions.suggest(&req.description, &req.asset_types);
    Json(SuggestResponse {
        count: suggestions.len(),
        suggestions,
    })
}
