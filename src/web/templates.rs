//! Template endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use super::{store_error, ApiResult, AppState};
use crate::models::{Template, TemplateDocument, TemplateId, TemplateMeta, TemplatePatch};

/// Template list response.
#[derive(Debug, Serialize)]
pub struct TemplateListResponse {
    /// Templates ordered by id.
    pub templates: Vec<Template>,
}

/// GET /api/templates - List all templates.
pub(super) async fn list_templates(
    State(state): State<AppState>,
) -> ApiResult<Json<TemplateListResponse>> {
    let templates = state.store.list_templates().map_err(store_error)?;
    Ok(Json(TemplateListResponse { templates }))
}

/// POST /api/templates - Create a template.
pub(super) async fn create_template(
    State(state): State<AppState>,
    Json(meta): Json<TemplateMeta>,
) -> ApiResult<(StatusCode, Json<Template>)> {
    let template = state.store.create_template(meta).map_err(store_error)?;
    tracing::info!("Created template {} '{}'", template.id, template.meta.name);
    Ok((StatusCode::CREATED, Json(template)))
}

/// POST /api/templates/import - Store a template document with its pages.
pub(super) async fn import_template(
    State(state): State<AppState>,
    Json(document): Json<TemplateDocument>,
) -> ApiResult<(StatusCode, Json<Template>)> {
    let page_count = document.pages.len();
    let template = state.store.import_document(document).map_err(store_error)?;
    tracing::info!(
        "Imported template {} '{}' with {} pages",
        template.id,
        template.meta.name,
        page_count
    );
    Ok((StatusCode::CREATED, Json(template)))
}

/// GET /api/templates/{id} - Load one template.
pub(super) async fn get_template(
    State(state): State<AppState>,
    Path(id): Path<TemplateId>,
) -> ApiResult<Json<Template>> {
    state.store.get_template(id).map(Json).map_err(store_error)
}

/// PUT /api/templates/{id} - Partially update template metadata.
pub(super) async fn update_template(
    State(state): State<AppState>,
    Path(id): Path<TemplateId>,
    Json(patch): Json<TemplatePatch>,
) -> ApiResult<Json<Template>> {
    state
        .store
        .update_template(id, &patch)
        .map(Json)
        .map_err(store_error)
}

/// DELETE /api/templates/{id} - Delete a template and its pages.
pub(super) async fn delete_template(
    State(state): State<AppState>,
    Path(id): Path<TemplateId>,
) -> ApiResult<StatusCode> {
    state.store.delete_template(id).map_err(store_error)?;
    tracing::info!("Deleted template {}", id);
    Ok(StatusCode::NO_CONTENT)
}
