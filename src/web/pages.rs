//! Page and component endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{store_error, ApiResult, AppState};
use crate::models::{
    Component, ComponentKind, ComponentStyle, Page, PageContent, PageId, PagePatch, TemplateId,
};

/// Page list response.
#[derive(Debug, Serialize)]
pub struct PageListResponse {
    /// Pages of the template ordered by id.
    pub pages: Vec<Page>,
}

/// Request body for adding a component.
#[derive(Debug, Deserialize)]
pub struct AddComponentRequest {
    /// Component type.
    #[serde(rename = "type")]
    pub kind: ComponentKind,
    /// Insert position; appends when absent.
    #[serde(default)]
    pub index: Option<usize>,
}

/// Request body for editing a component.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateComponentRequest {
    /// Properties to merge; `null` removes a key.
    #[serde(default)]
    pub properties: Map<String, Value>,
    /// Replacement style.
    #[serde(default)]
    pub style: Option<ComponentStyle>,
}

/// Request body for moving a component.
#[derive(Debug, Deserialize)]
pub struct MoveComponentRequest {
    /// Target position.
    pub to: usize,
}

/// GET /api/templates/{id}/pages - List pages of a template.
pub(super) async fn list_pages(
    State(state): State<AppState>,
    Path(id): Path<TemplateId>,
) -> ApiResult<Json<PageListResponse>> {
    let pages = state.store.list_pages(id).map_err(store_error)?;
    Ok(Json(PageListResponse { pages }))
}

/// POST /api/templates/{id}/pages - Create a page.
pub(super) async fn create_page(
    State(state): State<AppState>,
    Path(id): Path<TemplateId>,
    Json(content): Json<PageContent>,
) -> ApiResult<(StatusCode, Json<Page>)> {
    let page = state.store.create_page(id, content).map_err(store_error)?;
    Ok((StatusCode::CREATED, Json(page)))
}

/// GET /api/templates/{id}/pages/{page_id} - Load one page.
pub(super) async fn get_page(
    State(state): State<AppState>,
    Path((id, page_id)): Path<(TemplateId, PageId)>,
) -> ApiResult<Json<Page>> {
    state
        .store
        .get_page(id, page_id)
        .map(Json)
        .map_err(store_error)
}

/// PUT /api/templates/{id}/pages/{page_id} - Partially update a page.
pub(super) async fn update_page(
    State(state): State<AppState>,
    Path((id, page_id)): Path<(TemplateId, PageId)>,
    Json(patch): Json<PagePatch>,
) -> ApiResult<Json<Page>> {
    state
        .store
        .update_page(id, page_id, &patch)
        .map(Json)
        .map_err(store_error)
}

/// DELETE /api/templates/{id}/pages/{page_id} - Delete a page.
pub(super) async fn delete_page(
    State(state): State<AppState>,
    Path((id, page_id)): Path<(TemplateId, PageId)>,
) -> ApiResult<StatusCode> {
    state
        .store
        .delete_page(id, page_id)
        .map_err(store_error)?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/templates/{id}/pages/{page_id}/components - Add a component.
pub(super) async fn add_component(
    State(state): State<AppState>,
    Path((id, page_id)): Path<(TemplateId, PageId)>,
    Json(request): Json<AddComponentRequest>,
) -> ApiResult<(StatusCode, Json<Component>)> {
    let component = state
        .store
        .add_component(id, page_id, request.kind, request.index)
        .map_err(store_error)?;
    Ok((StatusCode::CREATED, Json(component)))
}

/// PATCH /api/templates/{id}/pages/{page_id}/components/{component_id} - Edit a component.
pub(super) async fn update_component(
    State(state): State<AppState>,
    Path((id, page_id, component_id)): Path<(TemplateId, PageId, String)>,
    Json(request): Json<UpdateComponentRequest>,
) -> ApiResult<Json<Component>> {
    state
        .store
        .update_component(id, page_id, &component_id, request.properties, request.style)
        .map(Json)
        .map_err(store_error)
}

/// DELETE /api/templates/{id}/pages/{page_id}/components/{component_id} - Remove a component.
pub(super) async fn remove_component(
    State(state): State<AppState>,
    Path((id, page_id, component_id)): Path<(TemplateId, PageId, String)>,
) -> ApiResult<StatusCode> {
    state
        .store
        .remove_component(id, page_id, &component_id)
        .map_err(store_error)?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/templates/{id}/pages/{page_id}/components/{component_id}/move - Reorder.
pub(super) async fn move_component(
    State(state): State<AppState>,
    Path((id, page_id, component_id)): Path<(TemplateId, PageId, String)>,
    Json(request): Json<MoveComponentRequest>,
) -> ApiResult<Json<Page>> {
    state
        .store
        .move_component(id, page_id, &component_id, request.to)
        .map(Json)
        .map_err(store_error)
}
