//! Shared CLI plumbing: error type, exit codes and document loading.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::config::Config;
use crate::models::TemplateDocument;

/// Process exit codes used by every subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Input was rejected (bad document, failed validation)
    Validation = 1,
    /// A file could not be read or written
    Io = 2,
}

impl ExitCode {
    /// Numeric process exit code.
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by a subcommand, carrying its exit code.
#[derive(Debug)]
pub struct CliError {
    /// Exit code to terminate with
    pub code: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// Input was rejected.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::Validation,
            message: message.into(),
        }
    }

    /// Filesystem failure.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::Io,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type of subcommand handlers.
pub type CliResult<T> = Result<T, CliError>;

/// Loads configuration from `path`, or from the platform config file.
///
/// An explicit file must load; a broken platform file falls back to defaults.
pub fn load_config(path: Option<&Path>) -> CliResult<Config> {
    match path {
        Some(path) => Config::load_from(path)
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}"))),
        None => Ok(Config::load().unwrap_or_default()),
    }
}

/// Reads, parses and validates a template document file.
pub fn load_document(path: &Path) -> CliResult<TemplateDocument> {
    let content = fs::read_to_string(path).map_err(|e| {
        CliError::io(format!(
            "Failed to read template document {}: {e}",
            path.display()
        ))
    })?;

    let document = TemplateDocument::from_json(&content)
        .map_err(|e| CliError::validation(format!("Invalid template document: {e}")))?;

    document
        .validate()
        .map_err(|e| CliError::validation(format!("Invalid template document: {e}")))?;

    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_exit_codes() {
        assert_eq!(ExitCode::Success.code(), 0);
        assert_eq!(CliError::validation("x").code.code(), 1);
        assert_eq!(CliError::io("x").code.code(), 2);
    }

    #[test]
    fn test_load_document_errors() {
        let temp_dir = TempDir::new().unwrap();

        let missing = load_document(&temp_dir.path().join("missing.json")).unwrap_err();
        assert_eq!(missing.code, ExitCode::Io);

        let path = temp_dir.path().join("bad.json");
        fs::write(&path, "{").unwrap();
        assert_eq!(load_document(&path).unwrap_err().code, ExitCode::Validation);

        fs::write(&path, r#"{"name": ""}"#).unwrap();
        let err = load_document(&path).unwrap_err();
        assert_eq!(err.code, ExitCode::Validation);
        assert!(err.message.contains("name"));
    }

    #[test]
    fn test_load_config_explicit_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[generator]\ncontainer_width = 960\n").unwrap();
        assert_eq!(
            load_config(Some(&path)).unwrap().generator.container_width,
            960
        );

        fs::write(&path, "[generator]\ncontainer_width = 1\n").unwrap();
        assert_eq!(
            load_config(Some(&path)).unwrap_err().code,
            ExitCode::Validation
        );
    }

    #[test]
    fn test_load_document_valid() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("site.json");
        fs::write(
            &path,
            r#"{"name": "Site", "pages": [{"name": "Home", "slug": "home", "isHomePage": true, "components": [{"id": "hero-1", "type": "hero", "properties": {}}]}]}"#,
        )
        .unwrap();

        let document = load_document(&path).unwrap();
        assert_eq!(document.meta.name, "Site");
        assert_eq!(document.pages[0].components.len(), 1);
    }
}
