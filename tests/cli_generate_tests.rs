//! End-to-end tests for `themewright generate` and `themewright components`.

use serde_json::{json, Value};
use std::fs;
use std::process::Command;
use tempfile::TempDir;

mod fixtures;
use fixtures::{test_document, write_config, write_document, write_json};

/// Path to the themewright binary
fn themewright_bin() -> &'static str {
    env!("CARGO_BIN_EXE_themewright")
}

#[test]
fn test_generate_writes_theme_files() {
    let (input, input_temp) = write_document(&test_document());
    let config = write_config(input_temp.path(), 1200, true);
    let out_dir = input_temp.path().join("theme");

    let output = Command::new(themewright_bin())
        .args([
            "generate",
            "--input",
            input.to_str().unwrap(),
            "--out-dir",
            out_dir.to_str().unwrap(),
            "--config",
            config.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "Generation should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    for name in [
        "style.css",
        "functions.php",
        "header.php",
        "footer.php",
        "index.php",
        "page-about.php",
        "js/main.js",
    ] {
        assert!(out_dir.join(name).exists(), "{name} should be created");
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Generated 7 files"));

    let index = fs::read_to_string(out_dir.join("index.php")).unwrap();
    assert!(index.contains("esc_html('Hi')"));
}

#[test]
fn test_generate_is_deterministic() {
    let (input, input_temp) = write_document(&test_document());
    let config = write_config(input_temp.path(), 1200, true);

    let mut outputs = Vec::new();
    for dir in ["first", "second"] {
        let out_dir = input_temp.path().join(dir);
        let output = Command::new(themewright_bin())
            .args([
                "generate",
                "--input",
                input.to_str().unwrap(),
                "--out-dir",
                out_dir.to_str().unwrap(),
                "--config",
                config.to_str().unwrap(),
            ])
            .output()
            .expect("Failed to execute command");
        assert_eq!(output.status.code(), Some(0));
        outputs.push(fs::read_to_string(out_dir.join("style.css")).unwrap());
    }

    assert_eq!(outputs[0], outputs[1]);
}

#[test]
fn test_generate_container_width_override() {
    let (input, input_temp) = write_document(&test_document());
    let config = write_config(input_temp.path(), 1200, true);
    let out_dir = input_temp.path().join("theme");

    let output = Command::new(themewright_bin())
        .args([
            "generate",
            "--input",
            input.to_str().unwrap(),
            "--out-dir",
            out_dir.to_str().unwrap(),
            "--config",
            config.to_str().unwrap(),
            "--container-width",
            "960",
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let css = fs::read_to_string(out_dir.join("style.css")).unwrap();
    assert!(css.contains("max-width: 960px;"));
}

#[test]
fn test_generate_nonexistent_input() {
    let temp = TempDir::new().unwrap();

    let output = Command::new(themewright_bin())
        .args([
            "generate",
            "--input",
            temp.path().join("missing.json").to_str().unwrap(),
            "--out-dir",
            temp.path().join("theme").to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(2),
        "Missing input should be an I/O error"
    );
}

#[test]
fn test_generate_rejects_invalid_document() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("bad.json");
    write_json(
        &input,
        &json!({
            "name": "Broken",
            "pages": [{"name": "Home", "slug": "Not A Slug", "components": []}]
        }),
    );

    let output = Command::new(themewright_bin())
        .args([
            "generate",
            "--input",
            input.to_str().unwrap(),
            "--out-dir",
            temp.path().join("theme").to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("pages[0].slug"), "stderr: {stderr}");
    assert!(!temp.path().join("theme").exists());
}

#[test]
fn test_components_json_listing() {
    let output = Command::new(themewright_bin())
        .args(["components", "--json"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let json: Value = serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    let components = json.as_array().unwrap();
    assert_eq!(components.len(), 24);

    let faq = components.iter().find(|c| c["type"] == "faq").unwrap();
    assert_eq!(faq["name"], "FAQ Section");
    assert_eq!(faq["category"], "Content");
    assert!(faq["defaultProperties"]["items"].is_array());
}

#[test]
fn test_components_search() {
    let output = Command::new(themewright_bin())
        .args(["components", "--search", "logo"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("client-logos"));
    assert!(stdout.contains("logos"));
    assert!(!stdout.contains("pricing"));
}
