use axum::{
    extract::{Path, State},
    Json,
};
use plant_onboard::{NewTemplate, TemplateResult, TemplateSummary};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{internal_error, template_error, ApiError};
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct TemplateListResponse {
    pub templates: Vec<TemplateSummary>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SaveResponse {
    pub status: String,
    pub id: String,
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub status: String,
    pub id: String,
}

/// Run a template store call off the async executor
async fn blocking<T, F>(f: F) -> Result<T, ApiError>
where
    F: FnOnce() -> TemplateResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(internal_error)?
        .map_err(template_error)
}

/// GET /api/templates
pub(super) async fn list_templates(
    State(state): State<AppState>,
) -> Result<Json<TemplateListResponse>, ApiError> {
    let templates = blocking(move || state.templates.list()).await?;
    Ok(Json(TemplateListResponse { templates }))
}

/// GET /api/templates/:id
pub(super) async fn get_template(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let document = blocking(move || state.templates.get(&id)).await?;
    Ok(Json(document))
}

/// POST /api/templates
pub(super) async fn save_template(
    State(state): State<AppState>,
    Json(template): Json<NewTemplate>,
) -> Result<Json<SaveResponse>, ApiError> {
    let name = template.name.clone();
    let id = blocking(move || state.templates.save(template)).await?;
    Ok(Json(SaveResponse {
        status: "saved".to_string(),
        id,
        name,
    }))
}

/// DELETE /api/templates/:id
pub(super) async fn delete_template(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let target = id.clone();
    blocking(move || state.templates.delete(&target)).await?;
    Ok(Json(DeleteResponse {
        status: "deleted".to_string(),
        id,
    }))
}
