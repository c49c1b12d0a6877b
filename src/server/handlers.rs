use super::page::INDEX_HTML;
use super::types::{ErrorResponse, PreviewResponse, ValidateRequest, ValidationResponse};
use crate::{
    Error,
    checklist::ChecklistInput,
    validator::{ValidationFailure, Validator},
};
use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{Html, Json},
};
use chrono::Utc;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

const UPLOAD_FIELD: &str = "file";

type ApiError = (StatusCode, Json<ErrorResponse>);

#[derive(Clone)]
pub struct AppState {
    pub validator: Arc<Validator>,
}

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn preview(multipart: Multipart) -> Result<Json<PreviewResponse>, ApiError> {
    let input = read_upload(multipart)
        .await
        .map_err(|failure| error_response(None, &failure))?;

    Ok(Json(PreviewResponse {
        file_name: input.file_name,
        format: input.format,
        checklist_text: input.text,
    }))
}

pub async fn validate(
    State(state): State<AppState>,
    Json(request): Json<ValidateRequest>,
) -> Result<Json<ValidationResponse>, ApiError> {
    run_validation(&state, &request.checklist_text).await
}

pub async fn validate_upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ValidationResponse>, ApiError> {
    let input = read_upload(multipart)
        .await
        .map_err(|failure| error_response(None, &failure))?;

    info!(
        "Validating uploaded {:?} checklist '{}'",
        input.format, input.file_name
    );

    run_validation(&state, &input.text).await
}

async fn run_validation(
    state: &AppState,
    checklist_text: &str,
) -> Result<Json<ValidationResponse>, ApiError> {
    let validation_id = Uuid::new_v4();

    info!(
        "Received validation {} ({} chars)",
        validation_id,
        checklist_text.chars().count()
    );

    match state.validator.validate(checklist_text).await {
        Ok(report) => {
            let compliant = report.is_compliant();
            info!(
                "Validation {} finished: compliant={}, {} issues, {} suggestions",
                validation_id,
                compliant,
                report.detected_issues.len(),
                report.improvement_suggestions.len()
            );

            Ok(Json(ValidationResponse {
                validation_id,
                validated_at: Utc::now(),
                compliant,
                summary: report.to_markdown(),
                report,
            }))
        }
        Err(failure) => {
            warn!(
                "Validation {} failed ({}): {}",
                validation_id,
                failure.kind(),
                failure
            );
            Err(error_response(Some(validation_id), &failure))
        }
    }
}

/// Reads the `file` field of a multipart form into a checklist.
async fn read_upload(mut multipart: Multipart) -> Result<ChecklistInput, ValidationFailure> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| Error::upload(format!("Error reading upload: {}", e)))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| Error::upload(format!("Error reading upload: {}", e)))?;

        return Ok(ChecklistInput::from_upload(&file_name, &bytes)?);
    }

    Err(Error::upload("Upload a `.txt` or `.json` checklist to begin analysis.").into())
}

fn error_response(validation_id: Option<Uuid>, failure: &ValidationFailure) -> ApiError {
    let status = match failure {
        ValidationFailure::InvalidUpload { .. } => StatusCode::BAD_REQUEST,
        ValidationFailure::Service { .. } | ValidationFailure::UnparseableReply { .. } => {
            StatusCode::BAD_GATEWAY
        }
    };

    (
        status,
        Json(ErrorResponse {
            validation_id,
            kind: failure.kind().to_string(),
            error: failure.user_message(),
        }),
    )
}
