//! Web API module for Themewright.
//!
//! This module provides a REST API for the template builder, enabling a
//! web-based editor to manage templates, pages and components and to fetch
//! or download the generated WordPress theme.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /api/components` - Component palette with defaults (optional ?search=)
//! - `GET|POST /api/templates` - List or create templates
//! - `POST /api/templates/import` - Import a template document
//! - `GET|PUT|DELETE /api/templates/{id}` - Read, update or delete a template
//! - `GET|POST /api/templates/{id}/pages` - List or create pages
//! - `GET|PUT|DELETE /api/templates/{id}/pages/{page_id}` - Read, update or delete a page
//! - `POST /api/templates/{id}/pages/{page_id}/components` - Add a component
//! - `PATCH|DELETE /api/templates/{id}/pages/{page_id}/components/{component_id}` - Edit or remove a component
//! - `POST /api/templates/{id}/pages/{page_id}/components/{component_id}/move` - Reorder a component
//! - `GET /api/templates/{id}/code` - Generated theme files as JSON
//! - `POST /api/preview` - Generated theme files for an unsaved component list
//! - `POST /api/templates/{id}/export` - Theme zip download

mod export;
mod pages;
mod templates;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, patch, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::generator::{defaults_for, ThemeGenerator};
use crate::models::{ComponentKind, EditError, FieldError, Properties};
use crate::services::{StoreError, TemplateStore, ThemeExporter};

// ============================================================================
// Application State
// ============================================================================

/// Shared application state for the web API.
#[derive(Clone)]
pub struct AppState {
    /// Template and page storage
    store: Arc<dyn TemplateStore>,
    /// Theme generator for code views
    generator: Arc<ThemeGenerator>,
    /// Archive builder for downloads
    exporter: Arc<ThemeExporter>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(config: Config, store: Arc<dyn TemplateStore>) -> Self {
        let generator = ThemeGenerator::new(&config.generator);
        let exporter = ThemeExporter::from_config(&config);
        Self {
            store,
            generator: Arc::new(generator),
            exporter: Arc::new(exporter),
        }
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// API version.
    pub version: String,
}

/// Query parameters for the component palette.
#[derive(Debug, Deserialize)]
pub struct PaletteQuery {
    /// Case-insensitive filter on name, description or category.
    pub search: Option<String>,
}

/// One entry of the component palette.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteEntry {
    /// Component type identifier.
    #[serde(rename = "type")]
    pub kind: ComponentKind,
    /// Display name.
    pub name: String,
    /// Short description.
    pub description: String,
    /// Palette category.
    pub category: String,
    /// Properties a new component of this type starts with.
    pub default_properties: Properties,
}

/// Component palette response.
#[derive(Debug, Serialize)]
pub struct PaletteResponse {
    /// Matching component types in palette order.
    pub components: Vec<PaletteEntry>,
}

/// API error response.
#[derive(Debug, Serialize)]
pub struct ApiError {
    /// Error message.
    pub error: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Field-level validation errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

impl ApiError {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
            errors: None,
        }
    }

    fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
            errors: None,
        }
    }

    fn with_errors(error: impl Into<String>, errors: Vec<FieldError>) -> Self {
        Self {
            error: error.into(),
            details: None,
            errors: Some(errors),
        }
    }
}

/// Handler result carrying a status code and JSON error on failure.
type ApiResult<T> = Result<T, (StatusCode, Json<ApiError>)>;

/// Maps a store failure to its HTTP response.
fn store_error(err: StoreError) -> (StatusCode, Json<ApiError>) {
    match err {
        StoreError::TemplateNotFound(_)
        | StoreError::PageNotFound(_)
        | StoreError::Component(EditError::ComponentNotFound(_)) => {
            (StatusCode::NOT_FOUND, Json(ApiError::new(err.to_string())))
        }
        StoreError::Component(_) => (StatusCode::BAD_REQUEST, Json(ApiError::new(err.to_string()))),
        StoreError::Invalid(errors) => (
            StatusCode::BAD_REQUEST,
            Json(ApiError::with_errors(
                "Validation failed",
                errors.errors().to_vec(),
            )),
        ),
        StoreError::Storage(details) => {
            tracing::warn!("Store failure: {}", details);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiError::with_details("Failed to save changes", details)),
            )
        }
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /health - Health check endpoint.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /api/components - List the component palette.
async fn list_components(Query(params): Query<PaletteQuery>) -> Json<PaletteResponse> {
    let components = ComponentKind::search(params.search.as_deref())
        .into_iter()
        .map(|kind| PaletteEntry {
            name: kind.display_name().to_string(),
            description: kind.description().to_string(),
            category: kind
                .category()
                .map(|c| c.to_string())
                .unwrap_or_default(),
            default_properties: defaults_for(&kind),
            kind,
        })
        .collect();

    Json(PaletteResponse { components })
}

// ============================================================================
// Router Setup
// ============================================================================

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    // NOTE: This permissive CORS policy is intended for local development only.
    // The server is meant to run on the user's machine next to the editor.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Palette
        .route("/api/components", get(list_components))
        // Template endpoints
        .route(
            "/api/templates",
            get(templates::list_templates).post(templates::create_template),
        )
        .route("/api/templates/import", post(templates::import_template))
        .route(
            "/api/templates/{id}",
            get(templates::get_template)
                .put(templates::update_template)
                .delete(templates::delete_template),
        )
        // Page endpoints
        .route(
            "/api/templates/{id}/pages",
            get(pages::list_pages).post(pages::create_page),
        )
        .route(
            "/api/templates/{id}/pages/{page_id}",
            get(pages::get_page)
                .put(pages::update_page)
                .delete(pages::delete_page),
        )
        // Component endpoints
        .route(
            "/api/templates/{id}/pages/{page_id}/components",
            post(pages::add_component),
        )
        .route(
            "/api/templates/{id}/pages/{page_id}/components/{component_id}",
            patch(pages::update_component).delete(pages::remove_component),
        )
        .route(
            "/api/templates/{id}/pages/{page_id}/components/{component_id}/move",
            post(pages::move_component),
        )
        // Generated code endpoints
        .route("/api/templates/{id}/code", get(export::template_code))
        .route("/api/preview", post(export::preview))
        .route("/api/templates/{id}/export", post(export::export_template))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Runs the web server.
///
/// # Arguments
///
/// * `config` - Application configuration
/// * `store` - Template storage backing the API
/// * `addr` - Socket address to bind to
///
/// # Errors
///
/// Returns an error if the server fails to start.
pub async fn run_server(
    config: Config,
    store: Arc<dyn TemplateStore>,
    addr: SocketAddr,
) -> anyhow::Result<()> {
    let state = AppState::new(config, store);
    let app = create_router(state);

    info!("Starting Themewright web server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
