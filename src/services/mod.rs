//! Service layer for business logic.
//!
//! This module contains services that sit between the HTTP/CLI surfaces and
//! the models: template storage and theme archive export.

pub mod export;
pub mod store;

// Re-export commonly used types and functions
pub use export::{archive_name, ExportError, ThemeArchive, ThemeExporter};
pub use store::{FileStore, MemoryStore, StoreError, TemplateStore};
