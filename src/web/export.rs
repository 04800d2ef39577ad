//! Generated code and archive endpoints.

use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use super::{store_error, ApiError, ApiResult, AppState};
use crate::generator::ThemeFiles;
use crate::models::{Component, TemplateId, TemplateMeta};

/// Template name used for previews sent without metadata.
const PREVIEW_TEMPLATE_NAME: &str = "Custom Theme";

/// Generated theme files.
#[derive(Debug, Serialize)]
pub struct CodeResponse {
    /// File name to file text, ordered by name.
    pub files: ThemeFiles,
}

/// Request body for previewing an unsaved component list.
#[derive(Debug, Deserialize)]
pub struct PreviewRequest {
    /// Template metadata for the theme header.
    #[serde(default)]
    pub meta: Option<TemplateMeta>,
    /// Components of the home page in render order.
    #[serde(default)]
    pub components: Vec<Component>,
}

/// GET /api/templates/{id}/code - Generated theme files of a stored template.
pub(super) async fn template_code(
    State(state): State<AppState>,
    Path(id): Path<TemplateId>,
) -> ApiResult<Json<CodeResponse>> {
    let document = state.store.document(id).map_err(store_error)?;
    let files = state.generator.assemble_document(&document);
    Ok(Json(CodeResponse { files }))
}

/// POST /api/preview - Generated theme files for an ad-hoc component list.
pub(super) async fn preview(
    State(state): State<AppState>,
    Json(request): Json<PreviewRequest>,
) -> Json<CodeResponse> {
    let meta = request
        .meta
        .unwrap_or_else(|| TemplateMeta::new(PREVIEW_TEMPLATE_NAME));
    let files = state.generator.assemble(&request.components, &meta);
    Json(CodeResponse { files })
}

/// POST /api/templates/{id}/export - Download the theme as a zip archive.
pub(super) async fn export_template(
    State(state): State<AppState>,
    Path(id): Path<TemplateId>,
) -> ApiResult<Response> {
    let document = state.store.document(id).map_err(store_error)?;
    let exporter = state.exporter.clone();

    let archive = tokio::task::spawn_blocking(move || exporter.export(&document))
        .await
        .map_err(|e| {
            tracing::warn!("Export task failed: {}", e);
            export_failed()
        })?
        .map_err(|e| {
            tracing::warn!("Export of template {} failed: {}", id, e);
            export_failed()
        })?;

    let disposition = format!("attachment; filename=\"{}\"", archive.filename);
    Ok((
        [
            (header::CONTENT_TYPE, "application/zip".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        Body::from(archive.bytes),
    )
        .into_response())
}

fn export_failed() -> (StatusCode, Json<ApiError>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiError::new("Failed to export template")),
    )
}
