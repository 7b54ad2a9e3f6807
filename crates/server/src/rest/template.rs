use axum::{
    extract::{rejection::JsonRejection, Path},
    http::header,
    response::IntoResponse,
    Json,
};
use shared_types::{AppError, DocumentDraft, GenerateDraftRequest, TemplateResponse, TemplateSummary};

use crate::error_convert::{json_data_invalid, json_rejection};
use crate::templates::{all_templates, generate_draft, resolve_template};

// ---------------------------------------------------------------------------
// GET /api/templates: the selector's choices
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/api/templates",
    responses(
        (status = 200, description = "Available document templates", body = Vec<TemplateSummary>)
    ),
    tag = "templates"
)]
pub async fn list_templates() -> Json<Vec<TemplateSummary>> {
    Json(all_templates().map(|entry| TemplateSummary::from(entry.key)).collect())
}

// ---------------------------------------------------------------------------
// GET /api/templates/{key}: literal text for one key
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/api/templates/{key}",
    params(
        ("key" = String, Path, description = "Template key, e.g. `notice-of-motion`")
    ),
    responses(
        (status = 200, description = "Template text", body = TemplateResponse),
        (status = 404, description = "Unknown template key", body = AppError)
    ),
    tag = "templates"
)]
#[tracing::instrument]
pub async fn get_template(Path(key): Path<String>) -> Result<Json<TemplateResponse>, AppError> {
    let entry = resolve_template(&key)?;
    Ok(Json(TemplateResponse::from(entry)))
}

// ---------------------------------------------------------------------------
// POST /api/templates/generate: "Generate Legal Draft"
// ---------------------------------------------------------------------------

#[utoipa::path(
    post,
    path = "/api/templates/generate",
    request_body = GenerateDraftRequest,
    responses(
        (status = 200, description = "Generated draft", body = DocumentDraft),
        (status = 400, description = "Body is not valid JSON", body = AppError),
        (status = 404, description = "Unknown template key", body = AppError),
        (status = 422, description = "Body has no `key` string", body = AppError)
    ),
    tag = "templates"
)]
#[tracing::instrument(skip_all)]
pub async fn generate(
    payload: Result<Json<GenerateDraftRequest>, JsonRejection>,
) -> Result<Json<DocumentDraft>, AppError> {
    let Json(body) = payload.map_err(|r| json_rejection(r, json_data_invalid))?;
    let entry = resolve_template(&body.key)?;
    Ok(Json(generate_draft(entry.key)))
}

// ---------------------------------------------------------------------------
// GET /api/templates/{key}/download: plain-text attachment
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/api/templates/{key}/download",
    params(
        ("key" = String, Path, description = "Template key, e.g. `notice-of-motion`")
    ),
    responses(
        (status = 200, description = "Template as a text file", content_type = "text/plain"),
        (status = 404, description = "Unknown template key", body = AppError)
    ),
    tag = "templates"
)]
#[tracing::instrument]
pub async fn download_template(Path(key): Path<String>) -> Result<impl IntoResponse, AppError> {
    let entry = resolve_template(&key)?;
    tracing::info!(filename = entry.filename(), "serving template download");

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", entry.filename()),
            ),
        ],
        entry.body,
    ))
}
