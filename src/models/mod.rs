//! Data models for templates, pages and components.
//!
//! This module contains all the core data structures used throughout the application.
//! Models are independent of code generation, storage and the HTTP layer.

pub mod component;
pub mod document;
pub mod page;
pub mod properties;
pub mod template;
pub mod validation;

// Re-export all model types
pub use component::{Component, ComponentKind, ComponentStyle, PaletteCategory};
pub use document::TemplateDocument;
pub use page::{EditError, Page, PageContent, PageId, PagePatch};
pub use properties::{Properties, Record};
pub use template::{Template, TemplateId, TemplateMeta, TemplatePatch, MAX_NAME_LEN};
pub use validation::{FieldError, ValidationErrors};
