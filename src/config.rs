//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// HTTP server settings used by `themewright-web`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// Bind port
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3001,
        }
    }
}

/// Theme generation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Max width of `.container` in pixels
    pub container_width: u32,
    /// Text domain written to the theme header; derived from the template
    /// name when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_domain: Option<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            container_width: 1200,
            text_domain: None,
        }
    }
}

/// Export settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Add `manifest.json` (the template document) to exported archives
    pub include_manifest: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            include_manifest: true,
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    /// Server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Generator settings
    #[serde(default)]
    pub generator: GeneratorConfig,
    /// Export settings
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific config directory path.
    ///
    /// - Linux: `~/.config/Themewright/`
    /// - macOS: `~/Library/Application Support/Themewright/`
    /// - Windows: `%APPDATA%\Themewright\`
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("Themewright");

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the platform config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from an explicit path, with defaults when absent.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the platform config file.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to an explicit path using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(config_dir) = config_path.parent() {
            fs::create_dir_all(config_dir).context(format!(
                "Failed to create config directory: {}",
                config_dir.display()
            ))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - `server.host` is not blank
    /// - `generator.container_width` is between 320 and 3840 pixels
    /// - `generator.text_domain`, when set, is lowercase alphanumeric/hyphen
    pub fn validate(&self) -> Result<()> {
        if self.server.host.trim().is_empty() {
            anyhow::bail!("server.host must not be empty");
        }

        if !(320..=3840).contains(&self.generator.container_width) {
            anyhow::bail!(
                "generator.container_width must be between 320 and 3840, got {}",
                self.generator.container_width
            );
        }

        if let Some(domain) = &self.generator.text_domain {
            let valid = !domain.is_empty()
                && domain
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
            if !valid {
                anyhow::bail!(
                    "generator.text_domain must be lowercase letters, digits and hyphens, got '{domain}'"
                );
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(config.server.port, 3001);
        assert_eq!(config.generator.container_width, 1200);
        assert!(config.generator.text_domain.is_none());
        assert!(config.export.include_manifest);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validate() {
        let mut config = Config::new();
        config.generator.container_width = 100;
        assert!(config.validate().is_err());

        let mut config = Config::new();
        config.generator.text_domain = Some("My Theme".to_string());
        assert!(config.validate().is_err());

        config.generator.text_domain = Some("my-theme".to_string());
        assert!(config.validate().is_ok());

        config.server.host = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_from(&temp_dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::new());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::new();
        config.server.port = 8080;
        config.generator.container_width = 1440;
        config.generator.text_domain = Some("acme".to_string());
        config.export.include_manifest = false;
        config.save_to(&path).unwrap();

        assert!(path.exists());
        assert!(!path.with_extension("toml.tmp").exists());
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[server]\nhost = \"0.0.0.0\"\nport = 9000\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.generator, GeneratorConfig::default());
    }

    #[test]
    fn test_invalid_file_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[generator]\ncontainer_width = 10\n").unwrap();
        assert!(Config::load_from(&path).is_err());

        fs::write(&path, "not toml at all [").unwrap();
        assert!(Config::load_from(&path).is_err());
    }
}
