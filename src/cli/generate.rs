//! Generate command for WordPress theme files.

use crate::cli::common::{load_config, load_document, CliError, CliResult};
use crate::generator::{ThemeFiles, ThemeGenerator};
use clap::Args;
use std::fs;
use std::path::{Path, PathBuf};

/// Generate WordPress theme files from a template document
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Path to template document (JSON)
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Output directory for generated files
    #[arg(short, long, value_name = "DIR")]
    pub out_dir: PathBuf,

    /// Configuration file (defaults to the platform config file)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override the container max width in pixels
    #[arg(long, value_name = "PX")]
    pub container_width: Option<u32>,
}

impl GenerateArgs {
    /// Execute the generate command
    pub fn execute(&self) -> CliResult<()> {
        let mut config = load_config(self.config.as_deref())?;
        if let Some(width) = self.container_width {
            config.generator.container_width = width;
        }
        config
            .validate()
            .map_err(|e| CliError::validation(format!("Invalid configuration: {e}")))?;

        let document = load_document(&self.input)?;
        let files = ThemeGenerator::new(&config.generator).assemble_document(&document);

        write_files(&self.out_dir, &files)?;

        println!(
            "✓ Generated {} files for '{}' in {}",
            files.len(),
            document.meta.name,
            self.out_dir.display()
        );
        for name in files.names() {
            println!("  {name}");
        }

        Ok(())
    }
}

/// Writes every theme file below `out_dir`, creating subdirectories.
fn write_files(out_dir: &Path, files: &ThemeFiles) -> CliResult<()> {
    for (name, content) in files.iter() {
        let path = out_dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                CliError::io(format!(
                    "Failed to create directory {}: {e}",
                    parent.display()
                ))
            })?;
        }
        fs::write(&path, content).map_err(|e| {
            CliError::io(format!("Failed to write {}: {e}", path.display()))
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Component, ComponentKind, TemplateDocument, TemplateMeta};
    use tempfile::TempDir;

    #[test]
    fn test_write_files_creates_subdirectories() {
        let temp_dir = TempDir::new().unwrap();
        let out_dir = temp_dir.path().join("theme");
        let document = TemplateDocument::single_page(
            TemplateMeta::new("Demo"),
            vec![Component::new(ComponentKind::Hero)],
        );
        let files = ThemeGenerator::default().assemble_document(&document);

        write_files(&out_dir, &files).unwrap();

        assert!(out_dir.join("js").join("main.js").exists());
        assert_eq!(
            fs::read_to_string(out_dir.join("index.php")).unwrap(),
            files.get("index.php").unwrap()
        );
    }
}
