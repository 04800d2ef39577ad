//! Export command for theme zip archives.

use crate::cli::common::{load_config, load_document, CliError, CliResult};
use crate::services::ThemeExporter;
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Export a template document as a WordPress theme zip
#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    /// Path to template document (JSON)
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Output path for the archive (defaults to [template-name].zip)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Leave manifest.json out of the archive
    #[arg(long)]
    pub no_manifest: bool,

    /// Configuration file (defaults to the platform config file)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl ExportArgs {
    /// Execute the export command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config(self.config.as_deref())?;
        let document = load_document(&self.input)?;

        let include_manifest = config.export.include_manifest && !self.no_manifest;
        let exporter = ThemeExporter::new(&config.generator, include_manifest);
        let archive = exporter
            .export(&document)
            .map_err(|e| CliError::io(format!("Failed to export template: {e}")))?;

        let output_path = self.get_output_path(&archive.filename);
        if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                CliError::io(format!(
                    "Failed to create directory {}: {e}",
                    parent.display()
                ))
            })?;
        }
        fs::write(&output_path, &archive.bytes)
            .map_err(|e| CliError::io(format!("Failed to write output file: {e}")))?;

        println!(
            "✓ Exported '{}' to: {} ({} bytes)",
            document.meta.name,
            output_path.display(),
            archive.bytes.len()
        );

        Ok(())
    }

    /// Get the output file path (either user-specified or the archive name)
    fn get_output_path(&self, archive_filename: &str) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(archive_filename))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(output: Option<PathBuf>) -> ExportArgs {
        ExportArgs {
            input: PathBuf::from("site.json"),
            output,
            no_manifest: false,
            config: None,
        }
    }

    #[test]
    fn test_get_output_path_default() {
        let path = args(None).get_output_path("my-site.zip");
        assert_eq!(path, PathBuf::from("my-site.zip"));
    }

    #[test]
    fn test_get_output_path_custom() {
        let custom_path = PathBuf::from("/tmp/theme.zip");
        let path = args(Some(custom_path.clone())).get_output_path("my-site.zip");
        assert_eq!(path, custom_path);
    }
}
