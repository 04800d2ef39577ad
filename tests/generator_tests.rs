//! Integration tests for theme generation and export.

use serde_json::json;
use std::io::{Cursor, Read};
use zip::ZipArchive;

mod fixtures;
use fixtures::{component, test_document, test_meta};

use themewright::config::GeneratorConfig;
use themewright::generator::{assemble, render_markup, ThemeGenerator};
use themewright::models::{ComponentKind, Properties, TemplateDocument, TemplateMeta};
use themewright::services::ThemeExporter;

fn entries(bytes: &[u8]) -> Vec<(String, Vec<u8>)> {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
    (0..archive.len())
        .map(|i| {
            let mut file = archive.by_index(i).unwrap();
            let mut content = Vec::new();
            file.read_to_end(&mut content).unwrap();
            (file.name().to_string(), content)
        })
        .collect()
}

// ============================================================================
// Determinism and ordering
// ============================================================================

#[test]
fn test_generation_is_deterministic() {
    let document = test_document();
    let generator = ThemeGenerator::default();

    let first = generator.assemble_document(&document);
    let second = generator.assemble_document(&document);

    assert_eq!(first, second);
}

#[test]
fn test_export_is_deterministic() {
    let exporter = ThemeExporter::new(&GeneratorConfig::default(), true);
    let document = test_document();

    let first = exporter.export(&document).unwrap();
    let second = exporter.export(&document).unwrap();

    assert_eq!(first.filename, "acme-agency.zip");
    assert_eq!(entries(&first.bytes), entries(&second.bytes));
}

#[test]
fn test_multi_page_file_set() {
    let files = ThemeGenerator::default().assemble_document(&test_document());
    assert_eq!(
        files.names(),
        vec![
            "footer.php",
            "functions.php",
            "header.php",
            "index.php",
            "js/main.js",
            "page-about.php",
            "style.css",
        ]
    );

    let index = files.get("index.php").unwrap();
    assert!(index.contains("hero-section"));
    assert!(!index.contains("team-section"));

    let about = files.get("page-about.php").unwrap();
    assert!(about.contains("about-section"));
    assert!(about.contains("team-section"));
}

#[test]
fn test_navbar_then_hero_scenario() {
    let components = vec![
        component("navbar-1", ComponentKind::Navbar, json!({})),
        component("hero-1", ComponentKind::Hero, json!({"title": "Hi"})),
    ];
    let files = assemble(&components, &TemplateMeta::new("Scenario"));

    let index = files.get("index.php").unwrap();
    let nav_end = index.find("</nav>").unwrap();
    let hero_start = index.find("<!-- Hero Section -->").unwrap();
    assert!(nav_end < hero_start);
    assert!(!index[nav_end..hero_start].contains("<section"));
    assert!(index.contains("esc_html('Hi')"));

    let css = files.get("style.css").unwrap();
    let nav_css = css.find("/* Navigation Bar */").unwrap();
    let hero_css = css.find("/* Hero Section */").unwrap();
    assert!(nav_css < hero_css);
}

#[test]
fn test_reordering_changes_only_order() {
    let navbar = component("navbar-1", ComponentKind::Navbar, json!({}));
    let faq = component("faq-1", ComponentKind::Faq, json!({}));
    let meta = TemplateMeta::new("Order");

    let forward = assemble(&[navbar.clone(), faq.clone()], &meta);
    let backward = assemble(&[faq, navbar], &meta);

    let forward_index = forward.get("index.php").unwrap();
    let backward_index = backward.get("index.php").unwrap();
    assert_ne!(forward_index, backward_index);
    assert_eq!(forward_index.len(), backward_index.len());
    assert!(forward_index.find("navbar").unwrap() < forward_index.find("faq-section").unwrap());
    assert!(backward_index.find("faq-section").unwrap() < backward_index.find("navbar").unwrap());
}

#[test]
fn test_duplicate_components_render_twice() {
    let components = vec![
        component("text-1", ComponentKind::Text, json!({})),
        component("text-2", ComponentKind::Text, json!({})),
    ];
    let files = assemble(&components, &TemplateMeta::new("Twice"));

    assert_eq!(files.get("index.php").unwrap().matches("text-section").count(), 2);
    assert_eq!(files.get("style.css").unwrap().matches("/* Text Block */").count(), 2);
}

// ============================================================================
// Robustness
// ============================================================================

#[test]
fn test_unknown_type_does_not_block_others() {
    let components = vec![
        component("x-1", ComponentKind::parse("carousel"), json!({"title": "Spin"})),
        component("footer-1", ComponentKind::Footer, json!({})),
    ];
    let files = assemble(&components, &TemplateMeta::new("Unknown"));

    let index = files.get("index.php").unwrap();
    assert!(index.contains("<!-- Unknown component type: carousel -->"));
    assert!(index.contains("site-footer"));
}

#[test]
fn test_numeric_coercion_falls_back_to_default() {
    let mut properties = Properties::new();
    properties.set("columns", "abc");
    let broken = render_markup(&ComponentKind::Gallery, &properties);
    let default = render_markup(&ComponentKind::Gallery, &Properties::new());
    assert_eq!(broken, default);

    properties.set("columns", "4");
    let four = render_markup(&ComponentKind::Gallery, &properties);
    assert_ne!(four, default);
}

#[test]
fn test_hostile_text_stays_in_literals() {
    let components = vec![component(
        "hero-1",
        ComponentKind::Hero,
        json!({
            "title": "It's <script>alert(1)</script> ?> <?php system('id'); ?>",
            "textColor": "red; } body { visibility: hidden",
        }),
    )];
    let files = assemble(&components, &TemplateMeta::new("Hostile */ <?php"));

    let index = files.get("index.php").unwrap();
    assert!(index.contains(r"esc_html('It\'s <script>"));
    // Title, subtitle, button link and button label
    assert_eq!(index.matches("<?php echo").count(), 4);

    let css = files.get("style.css").unwrap();
    assert!(!css.contains("visibility: hidden"));
    assert!(!css.contains("Hostile */"));
}

#[test]
fn test_metadata_in_style_header() {
    let files = assemble(&[], &test_meta("Acme Agency"));
    let css = files.get("style.css").unwrap();

    assert!(css.starts_with("/*\nTheme Name: Acme Agency\n"));
    assert!(css.contains("Author: Test Suite\n"));
    assert!(css.contains("Version: 2.1.0\n"));
    assert!(css.contains("Tags: business, one-page\n"));
    assert!(css.contains("Text Domain: acme-agency\n"));

    let functions = files.get("functions.php").unwrap();
    assert!(functions.contains("function acme_agency_theme_setup()"));
}

#[test]
fn test_document_json_round_trip() {
    let document = test_document();
    let json = serde_json::to_string(&document).unwrap();
    let parsed = TemplateDocument::from_json(&json).unwrap();
    assert_eq!(parsed, document);
    assert!(parsed.validate().is_ok());
}
