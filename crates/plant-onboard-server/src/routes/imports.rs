use axum::{extract::Multipart, http::StatusCode, Json};
use plant_onboard::{ImportFormat, ImportOptions, ParameterImporter, ParameterSelection};
use serde::{Deserialize, Serialize};

use crate::error::{api_error, csv_error, ApiError};

/// Multipart field carrying the upload
const FILE_FIELD: &str = "file";

#[derive(Debug, Serialize, Deserialize)]
pub struct ImportResponse {
    pub parameters: Vec<ParameterSelection>,
    pub count: usize,
    pub errors: Vec<String>,
}

/// POST /api/import-parameters
pub(super) async fn import_parameters(
    mut multipart: Multipart,
) -> Result<Json<ImportResponse>, ApiError> {
    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| api_error(StatusCode::BAD_REQUEST, e.body_text()))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| api_error(StatusCode::BAD_REQUEST, e.body_text()))?;
        upload = Some((filename, bytes));
        break;
    }

    let (filename, bytes) = match upload {
        Some((filename, bytes)) if !filename.is_empty() => (filename, bytes),
        _ => return Err(api_error(StatusCode::BAD_REQUEST, "No file provided")),
    };

    let format = ImportFormat::from_filename(&filename).map_err(csv_error)?;
    let outcome = ParameterImporter::read_bytes(&bytes, &ImportOptions::for_format(format))
        .map_err(csv_error)?;

    tracing::info!(
        file = %filename,
        accepted = outcome.count(),
        rejected = outcome.errors.len(),
        "parameter import"
    );

    Ok(Json(ImportResponse {
        count: outcome.count(),
        parameters: outcome.parameters,
        errors: outcome.errors,
    }))
}
