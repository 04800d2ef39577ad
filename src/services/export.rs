//! Theme archive export.
//!
//! Packs the generated theme files into a zip archive in memory, optionally
//! with a `manifest.json` holding the template document so the archive can
//! be imported again.

use std::io::{Cursor, Write};

use serde::Serialize;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::config::{Config, GeneratorConfig};
use crate::generator::{escape, ThemeFiles, ThemeGenerator};
use crate::models::TemplateDocument;

/// Archive name used when a template name yields nothing usable.
pub const FALLBACK_ARCHIVE_NAME: &str = "wordpress-template";

/// Name of the manifest entry inside exported archives.
pub const MANIFEST_NAME: &str = "manifest.json";

/// Errors from building an archive.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// A file name would escape the archive root
    #[error("Invalid file path in archive: {0}")]
    InvalidPath(String),
    /// Zip encoding failed
    #[error("Failed to write archive: {0}")]
    Zip(#[from] zip::result::ZipError),
    /// Writing entry contents failed
    #[error("Failed to write archive entry: {0}")]
    Io(#[from] std::io::Error),
    /// Manifest serialization failed
    #[error("Failed to serialize manifest: {0}")]
    Manifest(#[from] serde_json::Error),
}

/// An exported theme: suggested file name plus zip bytes.
#[derive(Debug, Clone)]
pub struct ThemeArchive {
    /// File name including the `.zip` extension
    pub filename: String,
    /// Archive contents
    pub bytes: Vec<u8>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Manifest<'a> {
    generator: &'static str,
    generator_version: &'static str,
    files: Vec<String>,
    template: &'a TemplateDocument,
}

/// Builds theme archives from template documents.
#[derive(Debug, Clone, Default)]
pub struct ThemeExporter {
    generator: ThemeGenerator,
    include_manifest: bool,
}

impl ThemeExporter {
    /// Creates an exporter from generator settings.
    pub fn new(generator: &GeneratorConfig, include_manifest: bool) -> Self {
        Self {
            generator: ThemeGenerator::new(generator),
            include_manifest,
        }
    }

    /// Creates an exporter from the application configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.generator, config.export.include_manifest)
    }

    /// Generates the theme for `document` and packs it.
    pub fn export(&self, document: &TemplateDocument) -> Result<ThemeArchive, ExportError> {
        let files = self.generator.assemble_document(document);
        let bytes = self.pack(&files, document)?;
        let filename = format!("{}.zip", archive_name(&document.meta.name));
        tracing::info!(
            "Exported '{}' as {} ({} files, {} bytes)",
            document.meta.name,
            filename,
            files.len(),
            bytes.len()
        );
        Ok(ThemeArchive { filename, bytes })
    }

    fn pack(&self, files: &ThemeFiles, document: &TemplateDocument) -> Result<Vec<u8>, ExportError> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .unix_permissions(0o644);

        for (name, content) in files.iter() {
            add_file_to_zip(&mut zip, name, content.as_bytes(), options)?;
        }

        if self.include_manifest {
            let manifest = Manifest {
                generator: env!("CARGO_PKG_NAME"),
                generator_version: env!("CARGO_PKG_VERSION"),
                files: files.names(),
                template: document,
            };
            let json = serde_json::to_vec_pretty(&manifest)?;
            add_file_to_zip(&mut zip, MANIFEST_NAME, &json, options)?;
        }

        let cursor = zip.finish()?;
        Ok(cursor.into_inner())
    }
}

/// Sanitized archive base name for a template name.
pub fn archive_name(template_name: &str) -> String {
    let name = escape::collapse(template_name, '-');
    if name.is_empty() {
        FALLBACK_ARCHIVE_NAME.to_string()
    } else {
        name
    }
}

/// Adds one entry, refusing names that could escape the extraction root.
fn add_file_to_zip<W: Write + std::io::Seek>(
    zip: &mut ZipWriter<W>,
    name: &str,
    content: &[u8],
    options: SimpleFileOptions,
) -> Result<(), ExportError> {
    if name.contains("..") || name.starts_with('/') || name.starts_with('\\') {
        return Err(ExportError::InvalidPath(name.to_string()));
    }
    zip.start_file(name, options)?;
    zip.write_all(content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Component, ComponentKind, TemplateMeta};
    use std::io::Read;
    use zip::ZipArchive;

    fn document(name: &str) -> TemplateDocument {
        TemplateDocument::single_page(
            TemplateMeta::new(name),
            vec![
                Component::new(ComponentKind::Navbar),
                Component::new(ComponentKind::Hero),
            ],
        )
    }

    fn read_entry(bytes: &[u8], name: &str) -> String {
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut file = archive.by_name(name).unwrap();
        let mut content = String::new();
        file.read_to_string(&mut content).unwrap();
        content
    }

    #[test]
    fn test_archive_contains_theme_files() {
        let exporter = ThemeExporter::new(&GeneratorConfig::default(), false);
        let doc = document("Agency Site");
        let archive = exporter.export(&doc).unwrap();
        assert_eq!(archive.filename, "agency-site.zip");

        let mut zip = ZipArchive::new(Cursor::new(archive.bytes.as_slice())).unwrap();
        let mut names: Vec<_> = zip.file_names().map(str::to_string).collect();
        names.sort();
        assert_eq!(
            names,
            vec![
                "footer.php",
                "functions.php",
                "header.php",
                "index.php",
                "js/main.js",
                "style.css",
            ]
        );
        assert!(zip.by_name(MANIFEST_NAME).is_err());

        let expected = ThemeGenerator::default().assemble_document(&doc);
        assert_eq!(
            read_entry(&archive.bytes, "index.php"),
            expected.get("index.php").unwrap()
        );
    }

    #[test]
    fn test_manifest_round_trips_document() {
        let exporter = ThemeExporter::new(&GeneratorConfig::default(), true);
        let doc = document("Agency");
        let archive = exporter.export(&doc).unwrap();

        let manifest: serde_json::Value =
            serde_json::from_str(&read_entry(&archive.bytes, MANIFEST_NAME)).unwrap();
        assert_eq!(manifest["generator"], "themewright");
        assert_eq!(manifest["files"].as_array().unwrap().len(), 6);

        let restored: TemplateDocument =
            serde_json::from_value(manifest["template"].clone()).unwrap();
        assert_eq!(restored, doc);
    }

    #[test]
    fn test_archive_name() {
        assert_eq!(archive_name("My Theme!"), "my-theme");
        assert_eq!(archive_name("../../etc"), "etc");
        assert_eq!(archive_name("***"), FALLBACK_ARCHIVE_NAME);
        assert_eq!(archive_name(""), FALLBACK_ARCHIVE_NAME);
    }

    #[test]
    fn test_rejects_escaping_entry_names() {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default();
        for name in ["../evil.php", "/etc/passwd", "\\win.ini"] {
            assert!(matches!(
                add_file_to_zip(&mut zip, name, b"x", options),
                Err(ExportError::InvalidPath(_))
            ));
        }
        assert!(add_file_to_zip(&mut zip, "js/main.js", b"x", options).is_ok());
    }
}
