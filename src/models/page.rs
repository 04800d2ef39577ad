//! Pages: ordered component lists plus routing information.

use std::collections::HashSet;
use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::component::{Component, ComponentKind, ComponentStyle};
use super::template::{TemplateId, MAX_NAME_LEN};
use super::validation::{field_path, ValidationErrors};

/// Identifier assigned by the store to a page.
pub type PageId = u64;

#[allow(clippy::expect_used)]
static SLUG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("slug pattern is valid"));

/// Errors from editing the component list of a page.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    /// No component with the given id on this page
    #[error("Component not found: {0}")]
    ComponentNotFound(String),
    /// Index outside the component list
    #[error("Position {index} is out of range for {len} components")]
    OutOfRange {
        /// Requested index
        index: usize,
        /// Current list length
        len: usize,
    },
    /// Kind outside the supported set
    #[error("Unsupported component type: {0}")]
    UnsupportedKind(String),
}

/// Page content: everything about a page except store bookkeeping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageContent {
    /// Display name
    pub name: String,
    /// URL slug, used for the `page-<slug>.php` file name
    pub slug: String,
    /// Components in render order
    #[serde(default)]
    pub components: Vec<Component>,
    /// Whether this page renders as `index.php`
    #[serde(default)]
    pub is_home_page: bool,
}

impl PageContent {
    /// Creates an empty page.
    pub fn new(name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slug: slug.into(),
            components: Vec::new(),
            is_home_page: false,
        }
    }

    /// Validates all fields, collecting every problem.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        self.collect_errors("", &mut errors);
        errors.into_result()
    }

    pub(crate) fn collect_errors(&self, prefix: &str, errors: &mut ValidationErrors) {
        let name = self.name.trim();
        if name.is_empty() {
            errors.push(field_path(prefix, "name"), "Name must not be empty");
        } else if name.chars().count() > MAX_NAME_LEN {
            errors.push(
                field_path(prefix, "name"),
                format!("Name must be at most {MAX_NAME_LEN} characters"),
            );
        }

        if !SLUG_REGEX.is_match(&self.slug) {
            errors.push(
                field_path(prefix, "slug"),
                format!(
                    "Slug '{}' must be lowercase words separated by single hyphens",
                    self.slug
                ),
            );
        }

        let mut seen = HashSet::new();
        for (idx, component) in self.components.iter().enumerate() {
            let at = field_path(prefix, &format!("components[{idx}]"));
            if component.id.trim().is_empty() {
                errors.push(field_path(&at, "id"), "Component id must not be empty");
            } else if !seen.insert(component.id.as_str()) {
                errors.push(
                    field_path(&at, "id"),
                    format!("Duplicate component id '{}'", component.id),
                );
            }
            if !component.kind.is_known() {
                errors.push(
                    field_path(&at, "type"),
                    format!("Unsupported component type '{}'", component.kind),
                );
            }
        }
    }

    /// Finds a component by id.
    pub fn component(&self, id: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.id == id)
    }

    fn position(&self, id: &str) -> Result<usize, EditError> {
        self.components
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| EditError::ComponentNotFound(id.to_string()))
    }

    /// Adds a new component of `kind` with default properties.
    ///
    /// Appends when `index` is `None`, otherwise inserts before `index`.
    pub fn add_component(
        &mut self,
        kind: ComponentKind,
        index: Option<usize>,
    ) -> Result<&Component, EditError> {
        if !kind.is_known() {
            return Err(EditError::UnsupportedKind(kind.to_string()));
        }
        let len = self.components.len();
        let index = index.unwrap_or(len);
        if index > len {
            return Err(EditError::OutOfRange { index, len });
        }

        let mut component = Component::new(kind);
        while self.component(&component.id).is_some() {
            component.id = Component::generate_id(&component.kind);
        }
        self.components.insert(index, component);
        Ok(&self.components[index])
    }

    /// Merges a property patch into a component and optionally replaces its style.
    pub fn update_component(
        &mut self,
        id: &str,
        properties: Map<String, Value>,
        style: Option<ComponentStyle>,
    ) -> Result<&Component, EditError> {
        let idx = self.position(id)?;
        let component = &mut self.components[idx];
        component.properties.merge(properties);
        if let Some(style) = style {
            component.style = (!style.is_noop()).then_some(style);
        }
        Ok(&self.components[idx])
    }

    /// Removes a component and returns it.
    pub fn remove_component(&mut self, id: &str) -> Result<Component, EditError> {
        let idx = self.position(id)?;
        Ok(self.components.remove(idx))
    }

    /// Moves the component at `from` to `to`. Other components keep their
    /// relative order.
    pub fn move_component(&mut self, from: usize, to: usize) -> Result<(), EditError> {
        let len = self.components.len();
        for index in [from, to] {
            if index >= len {
                return Err(EditError::OutOfRange { index, len });
            }
        }
        let component = self.components.remove(from);
        self.components.insert(to, component);
        Ok(())
    }

    /// Moves the component with `id` to position `to`.
    pub fn move_component_by_id(&mut self, id: &str, to: usize) -> Result<(), EditError> {
        let from = self.position(id)?;
        self.move_component(from, to)
    }
}

/// A persisted page belonging to a template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// Store-assigned identifier
    pub id: PageId,
    /// Owning template
    pub template_id: TemplateId,
    /// Page content
    #[serde(flatten)]
    pub content: PageContent,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

/// Partial update of a page. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagePatch {
    /// New name
    #[serde(default)]
    pub name: Option<String>,
    /// New slug
    #[serde(default)]
    pub slug: Option<String>,
    /// Replacement component list
    #[serde(default)]
    pub components: Option<Vec<Component>>,
    /// New home page flag
    #[serde(default)]
    pub is_home_page: Option<bool>,
}

impl PagePatch {
    /// Returns `content` with this patch applied.
    ///
    /// A replacement component list may reorder, add or drop components, but a
    /// component that keeps its id must keep its type.
    pub fn apply_to(&self, content: &PageContent) -> Result<PageContent, ValidationErrors> {
        let mut next = content.clone();
        if let Some(name) = &self.name {
            next.name.clone_from(name);
        }
        if let Some(slug) = &self.slug {
            next.slug.clone_from(slug);
        }
        if let Some(components) = &self.components {
            let mut errors = ValidationErrors::new();
            for (idx, component) in components.iter().enumerate() {
                let stored = content.components.iter().find(|c| c.id == component.id);
                if let Some(stored) = stored.filter(|c| c.kind != component.kind) {
                    errors.push(
                        format!("components[{idx}].type"),
                        format!(
                            "Component '{}' is a {} and cannot become a {}",
                            component.id, stored.kind, component.kind
                        ),
                    );
                }
            }
            errors.into_result()?;
            next.components.clone_from(components);
        }
        if let Some(is_home_page) = self.is_home_page {
            next.is_home_page = is_home_page;
        }
        Ok(next)
    }
}
