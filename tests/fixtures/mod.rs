//! Shared test fixtures for integration tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use themewright::models::{
    Component, ComponentKind, PageContent, Properties, TemplateDocument, TemplateMeta,
};

/// Builds a component with a fixed id and the given property bag.
pub fn component(id: &str, kind: ComponentKind, properties: Value) -> Component {
    let properties: Properties =
        serde_json::from_value(properties).expect("properties must be a JSON object");
    Component {
        id: id.to_string(),
        kind,
        properties,
        style: None,
    }
}

/// Template metadata with every optional field filled in.
pub fn test_meta(name: &str) -> TemplateMeta {
    let mut meta = TemplateMeta::new(name);
    meta.description = Some("Integration test theme".to_string());
    meta.author = Some("Test Suite".to_string());
    meta.version = "2.1.0".to_string();
    meta.tags = vec!["business".to_string(), "one-page".to_string()];
    meta
}

/// A two-page agency site: a home page and an about page.
///
/// Component ids are fixed, so generated output is fully deterministic.
pub fn test_document() -> TemplateDocument {
    let mut home = PageContent::new("Home", "home");
    home.is_home_page = true;
    home.components = vec![
        component("navbar-1", ComponentKind::Navbar, json!({"title": "Acme"})),
        component("hero-1", ComponentKind::Hero, json!({"title": "Hi"})),
        component("gallery-1", ComponentKind::Gallery, json!({"columns": 4})),
        component("footer-1", ComponentKind::Footer, json!({})),
    ];

    let mut about = PageContent::new("About", "about");
    about.components = vec![
        component("about-1", ComponentKind::About, json!({})),
        component("team-1", ComponentKind::Team, json!({})),
    ];

    TemplateDocument {
        meta: test_meta("Acme Agency"),
        pages: vec![home, about],
    }
}

/// Writes a document as JSON into a fresh temp directory.
///
/// The `TempDir` must be kept alive for as long as the file is used.
pub fn write_document(document: &TemplateDocument) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("template.json");
    write_json(&path, &serde_json::to_value(document).expect("Failed to serialize"));
    (path, temp_dir)
}

/// Writes arbitrary JSON to `path`.
pub fn write_json(path: &Path, value: &Value) {
    fs::write(path, serde_json::to_string_pretty(value).expect("Failed to serialize"))
        .expect("Failed to write JSON file");
}

/// Writes a config file that pins the generator settings.
pub fn write_config(dir: &Path, container_width: u32, include_manifest: bool) -> PathBuf {
    let path = dir.join("config.toml");
    fs::write(
        &path,
        format!(
            "[generator]\ncontainer_width = {container_width}\n\n[export]\ninclude_manifest = {include_manifest}\n"
        ),
    )
    .expect("Failed to write config");
    path
}
