//! CLI command handlers for Themewright.
//!
//! This module provides headless, scriptable access to theme generation
//! for automation, testing, and CI/CD integration.

pub mod common;
pub mod components;
pub mod export;
pub mod generate;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use components::ComponentsArgs;
pub use export::ExportArgs;
pub use generate::GenerateArgs;
