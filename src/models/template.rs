//! Template metadata and persisted template records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validation::{field_path, ValidationErrors};

/// Identifier assigned by the store to a template.
pub type TemplateId = u64;

/// Maximum length of template and page names.
pub const MAX_NAME_LEN: usize = 100;

fn default_version() -> String {
    "1.0.0".to_string()
}

/// User-editable template metadata.
///
/// # Validation Rules
///
/// - name must be non-empty and at most 100 characters
/// - version must be non-empty
/// - tags must be lowercase, hyphen/alphanumeric only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateMeta {
    /// Theme name
    pub name: String,
    /// Theme description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Theme author
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Theme version (defaults to "1.0.0")
    #[serde(default = "default_version")]
    pub version: String,
    /// Search tags
    #[serde(default)]
    pub tags: Vec<String>,
}

impl TemplateMeta {
    /// Creates metadata with the given name and default version.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            author: None,
            version: default_version(),
            tags: Vec::new(),
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

        if self.version.trim().is_empty() {
            errors.push(field_path(prefix, "version"), "Version must not be empty");
        }

        for (idx, tag) in self.tags.iter().enumerate() {
            if !is_valid_tag(tag) {
                errors.push(
                    field_path(prefix, &format!("tags[{idx}]")),
                    format!(
                        "Tag '{tag}' must be lowercase with hyphens and alphanumeric characters only"
                    ),
                );
            }
        }
    }
}

fn is_valid_tag(tag: &str) -> bool {
    !tag.is_empty()
        && tag
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// A persisted template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    /// Store-assigned identifier
    pub id: TemplateId,
    /// Editable metadata
    #[serde(flatten)]
    pub meta: TemplateMeta,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

/// Partial update of template metadata.
///
/// Absent fields are left unchanged. An empty description or author clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplatePatch {
    /// New name
    #[serde(default)]
    pub name: Option<String>,
    /// New description
    #[serde(default)]
    pub description: Option<String>,
    /// New author
    #[serde(default)]
    pub author: Option<String>,
    /// New version
    #[serde(default)]
    pub version: Option<String>,
    /// Replacement tag list
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

impl TemplatePatch {
    /// Returns `meta` with this patch applied.
    pub fn apply_to(&self, meta: &TemplateMeta) -> TemplateMeta {
        let mut next = meta.clone();
        if let Some(name) = &self.name {
            next.name.clone_from(name);
        }
        if let Some(description) = &self.description {
            next.description = non_blank(description);
        }
        if let Some(author) = &self.author {
            next.author = non_blank(author);
        }
        if let Some(version) = &self.version {
            next.version.clone_from(version);
        }
        if let Some(tags) = &self.tags {
            next.tags.clone_from(tags);
        }
        next
    }
}

fn non_blank(value: &str) -> Option<String> {
    (!value.trim().is_empty()).then(|| value.to_string())
}
