//! Integration tests for the Themewright Web API.
//!
//! These tests require the `web` feature to be enabled:
//! ```bash
//! cargo test --features web web_api
//! ```

#![cfg(feature = "web")]

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::io::{Cursor, Read};
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;
use zip::ZipArchive;

use themewright::config::Config;
use themewright::services::{FileStore, MemoryStore};
use themewright::web::{create_router, AppState};

mod fixtures;
use fixtures::test_document;

/// Creates a router backed by an empty in-memory store.
fn create_test_app() -> axum::Router {
    let state = AppState::new(Config::default(), Arc::new(MemoryStore::new()));
    create_router(state)
}

/// Sends a request and returns status plus JSON body (`Null` when not JSON).
async fn send(app: &axum::Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);

    (status, json)
}

/// Helper to make a GET request and get the response body as JSON.
async fn get_json(app: &axum::Router, uri: &str) -> (StatusCode, Value) {
    send(app, "GET", uri, None).await
}

/// Helper to make a POST request with a JSON body.
async fn post_json(app: &axum::Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, "POST", uri, Some(body)).await
}

/// Creates a template with one home page and returns their ids.
async fn create_template_with_page(app: &axum::Router) -> (u64, u64) {
    let (status, template) = post_json(app, "/api/templates", json!({"name": "Agency"})).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = template["id"].as_u64().unwrap();

    let (status, page) = post_json(
        app,
        &format!("/api/templates/{id}/pages"),
        json!({"name": "Home", "slug": "home", "isHomePage": true}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    (id, page["id"].as_u64().unwrap())
}

// ============================================================================
// Health and palette
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app();

    let (status, json) = get_json(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_component_palette() {
    let app = create_test_app();

    let (status, json) = get_json(&app, "/api/components").await;

    assert_eq!(status, StatusCode::OK);
    let components = json["components"].as_array().unwrap();
    assert_eq!(components.len(), 24);
    assert_eq!(components[0]["type"], "navbar");

    let gallery = components.iter().find(|c| c["type"] == "gallery").unwrap();
    assert_eq!(gallery["name"], "Gallery");
    assert_eq!(gallery["category"], "Visual");
    assert_eq!(gallery["defaultProperties"]["columns"], 3);
}

#[tokio::test]
async fn test_component_palette_search() {
    let app = create_test_app();

    let (status, json) = get_json(&app, "/api/components?search=PRICING").await;

    assert_eq!(status, StatusCode::OK);
    let types: Vec<&str> = json["components"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["type"].as_str().unwrap())
        .collect();
    assert_eq!(types, vec!["pricing"]);
}

// ============================================================================
// Template endpoints
// ============================================================================

#[tokio::test]
async fn test_template_crud() {
    let app = create_test_app();

    let (status, created) = post_json(
        &app,
        "/api/templates",
        json!({"name": "Agency", "description": "Landing pages"}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["version"], "1.0.0");
    assert!(created["createdAt"].is_string());
    let id = created["id"].as_u64().unwrap();

    let (status, list) = get_json(&app, "/api/templates").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list["templates"].as_array().unwrap().len(), 1);

    let (status, updated) = send(
        &app,
        "PUT",
        &format!("/api/templates/{id}"),
        Some(json!({"author": "Jo"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Agency");
    assert_eq!(updated["description"], "Landing pages");
    assert_eq!(updated["author"], "Jo");

    let (status, _) = send(&app, "DELETE", &format!("/api/templates/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, json) = get_json(&app, &format!("/api/templates/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json["error"].as_str().unwrap().contains("Template not found"));
}

#[tokio::test]
async fn test_create_template_validation_error() {
    let app = create_test_app();

    let (status, json) = post_json(
        &app,
        "/api/templates",
        json!({"name": "", "tags": ["Not Valid"]}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Validation failed");
    let fields: Vec<&str> = json["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect();
    assert!(fields.contains(&"name"));
    assert!(fields.iter().any(|f| f.starts_with("tags")));
}

#[tokio::test]
async fn test_malformed_json_is_rejected() {
    let app = create_test_app();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/templates")
                .header("Content-Type", "application/json")
                .body(Body::from("{ not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_template_cascades_to_pages() {
    let app = create_test_app();
    let (id, page_id) = create_template_with_page(&app).await;

    let (status, _) = send(&app, "DELETE", &format!("/api/templates/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = get_json(&app, &format!("/api/templates/{id}/pages/{page_id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ============================================================================
// Page and component endpoints
// ============================================================================

#[tokio::test]
async fn test_page_crud() {
    let app = create_test_app();
    let (id, page_id) = create_template_with_page(&app).await;

    let (status, json) = get_json(&app, &format!("/api/templates/{id}/pages")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["pages"][0]["slug"], "home");
    assert_eq!(json["pages"][0]["templateId"], id);

    let (status, json) = send(
        &app,
        "PUT",
        &format!("/api/templates/{id}/pages/{page_id}"),
        Some(json!({"name": "Start"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["name"], "Start");
    assert_eq!(json["isHomePage"], true);

    let (status, json) = send(
        &app,
        "PUT",
        &format!("/api/templates/{id}/pages/{page_id}"),
        Some(json!({"slug": "Bad Slug"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["errors"][0]["field"], "slug");

    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/api/templates/{id}/pages/{page_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = get_json(&app, &format!("/api/templates/{id}/pages/{page_id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_component_lifecycle() {
    let app = create_test_app();
    let (id, page_id) = create_template_with_page(&app).await;
    let components_uri = format!("/api/templates/{id}/pages/{page_id}/components");

    let (status, navbar) = post_json(&app, &components_uri, json!({"type": "navbar"})).await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(navbar["id"].as_str().unwrap().starts_with("navbar-"));
    assert_eq!(navbar["properties"]["menuItems"], "Home,About,Services,Contact");

    let (status, hero) = post_json(&app, &components_uri, json!({"type": "hero"})).await;
    assert_eq!(status, StatusCode::CREATED);
    let hero_id = hero["id"].as_str().unwrap().to_string();
    let navbar_id = navbar["id"].as_str().unwrap().to_string();

    let (status, patched) = send(
        &app,
        "PATCH",
        &format!("{components_uri}/{hero_id}"),
        Some(json!({
            "properties": {"title": "Hi", "buttonText": null},
            "style": {"hideOnMobile": true}
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(patched["properties"]["title"], "Hi");
    assert!(patched["properties"].get("buttonText").is_none());
    assert_eq!(patched["style"]["hideOnMobile"], true);

    let (status, page) = post_json(
        &app,
        &format!("{components_uri}/{hero_id}/move"),
        json!({"to": 0}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["components"][0]["id"], hero_id.as_str());
    assert_eq!(page["components"][1]["id"], navbar_id.as_str());

    let (status, _) = send(&app, "DELETE", &format!("{components_uri}/{navbar_id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, page) = get_json(&app, &format!("/api/templates/{id}/pages/{page_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["components"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_page_update_cannot_change_component_type() {
    let app = create_test_app();
    let (id, page_id) = create_template_with_page(&app).await;
    let page_uri = format!("/api/templates/{id}/pages/{page_id}");

    let (status, hero) = post_json(&app, &format!("{page_uri}/components"), json!({"type": "hero"})).await;
    assert_eq!(status, StatusCode::CREATED);

    let mut changed = hero.clone();
    changed["type"] = json!("footer");
    let (status, json) = send(&app, "PUT", &page_uri, Some(json!({"components": [changed]}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["errors"][0]["field"], "components[0].type");

    let (status, page) = get_json(&app, &page_uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["components"][0]["type"], "hero");

    let (status, page) = send(&app, "PUT", &page_uri, Some(json!({"components": [hero]}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["components"][0]["type"], "hero");
}

#[tokio::test]
async fn test_component_errors() {
    let app = create_test_app();
    let (id, page_id) = create_template_with_page(&app).await;
    let components_uri = format!("/api/templates/{id}/pages/{page_id}/components");

    let (status, json) = post_json(&app, &components_uri, json!({"type": "carousel"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("carousel"));

    let (status, _) = post_json(&app, &components_uri, json!({"type": "faq", "index": 5})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        "PATCH",
        &format!("{components_uri}/missing"),
        Some(json!({"properties": {}})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = post_json(
        &app,
        &format!("/api/templates/{id}/pages/999/components"),
        json!({"type": "faq"}),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ============================================================================
// Code, preview and export endpoints
// ============================================================================

#[tokio::test]
async fn test_template_code_view() {
    let app = create_test_app();
    let (id, page_id) = create_template_with_page(&app).await;
    post_json(
        &app,
        &format!("/api/templates/{id}/pages/{page_id}/components"),
        json!({"type": "faq"}),
    )
    .await;

    let (status, json) = get_json(&app, &format!("/api/templates/{id}/code")).await;

    assert_eq!(status, StatusCode::OK);
    let files = json["files"].as_object().unwrap();
    assert!(files.contains_key("style.css"));
    assert!(files["index.php"].as_str().unwrap().contains("faq-section"));
    assert!(files["style.css"]
        .as_str()
        .unwrap()
        .contains("Theme Name: Agency"));

    let (status, _) = get_json(&app, "/api/templates/999/code").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_preview_without_saving() {
    let app = create_test_app();

    let (status, json) = post_json(
        &app,
        "/api/preview",
        json!({
            "components": [
                {"id": "hero-1", "type": "hero", "properties": {"title": "Preview Me"}}
            ]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let index = json["files"]["index.php"].as_str().unwrap();
    assert!(index.contains("esc_html('Preview Me')"));
    assert!(json["files"]["functions.php"]
        .as_str()
        .unwrap()
        .contains("custom_theme_theme_setup"));

    let (_, list) = get_json(&app, "/api/templates").await;
    assert!(list["templates"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_export_download() {
    let app = create_test_app();
    let (id, _) = create_template_with_page(&app).await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(format!("/api/templates/{id}/export"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/zip"
    );
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"agency.zip\""
    );

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let mut archive = ZipArchive::new(Cursor::new(bytes.to_vec())).unwrap();
    let names: Vec<String> = archive.file_names().map(str::to_string).collect();
    assert!(names.contains(&"index.php".to_string()));
    assert!(names.contains(&"manifest.json".to_string()));

    let mut style = String::new();
    archive
        .by_name("style.css")
        .unwrap()
        .read_to_string(&mut style)
        .unwrap();
    assert!(style.contains("Theme Name: Agency"));
}

#[tokio::test]
async fn test_export_unknown_template() {
    let app = create_test_app();

    let (status, json) = post_json(&app, "/api/templates/42/export", json!({})).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn test_export_then_import_round_trip() {
    let app = create_test_app();
    let document = test_document();

    let (status, imported) = post_json(
        &app,
        "/api/templates/import",
        serde_json::to_value(&document).unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = imported["id"].as_u64().unwrap();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(format!("/api/templates/{id}/export"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    let mut archive = ZipArchive::new(Cursor::new(bytes.to_vec())).unwrap();
    let mut manifest = String::new();
    archive
        .by_name("manifest.json")
        .unwrap()
        .read_to_string(&mut manifest)
        .unwrap();
    let manifest: Value = serde_json::from_str(&manifest).unwrap();

    let (status, reimported) =
        post_json(&app, "/api/templates/import", manifest["template"].clone()).await;
    assert_eq!(status, StatusCode::CREATED);
    for field in ["name", "description", "author", "version", "tags"] {
        assert_eq!(reimported[field], imported[field], "{field} changed");
    }

    let new_id = reimported["id"].as_u64().unwrap();
    let (_, pages) = get_json(&app, &format!("/api/templates/{new_id}/pages")).await;
    let pages = pages["pages"].as_array().unwrap();
    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0]["components"][1]["properties"]["title"], "Hi");
}

// ============================================================================
// File-backed store
// ============================================================================

#[tokio::test]
async fn test_file_store_survives_restart() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let data = temp_dir.path().join("store.json");

    {
        let store = FileStore::open(&data).unwrap();
        let app = create_router(AppState::new(Config::default(), Arc::new(store)));
        create_template_with_page(&app).await;
    }

    let store = FileStore::open(&data).unwrap();
    let app = create_router(AppState::new(Config::default(), Arc::new(store)));
    let (status, json) = get_json(&app, "/api/templates").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["templates"][0]["name"], "Agency");
}
