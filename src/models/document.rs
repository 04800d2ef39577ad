//! Portable template document: metadata plus page contents.
//!
//! This is the form read by the CLI, written into export manifests and
//! accepted by the import endpoint. It carries no store identifiers or
//! timestamps.

use serde::{Deserialize, Serialize};

use super::component::Component;
use super::page::{Page, PageContent};
use super::template::{Template, TemplateMeta};
use super::validation::ValidationErrors;

/// A template with its pages, independent of any store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateDocument {
    /// Template metadata
    #[serde(flatten)]
    pub meta: TemplateMeta,
    /// Pages in display order
    #[serde(default)]
    pub pages: Vec<PageContent>,
}

impl TemplateDocument {
    /// Builds a document from a stored template and its pages.
    pub fn from_stored(template: &Template, pages: &[Page]) -> Self {
        Self {
            meta: template.meta.clone(),
            pages: pages.iter().map(|p| p.content.clone()).collect(),
        }
    }

    /// Builds a single-page document whose only page is the home page.
    pub fn single_page(meta: TemplateMeta, components: Vec<Component>) -> Self {
        let mut home = PageContent::new("Home", "home");
        home.is_home_page = true;
        home.components = components;
        Self {
            meta,
            pages: vec![home],
        }
    }

    /// Parses a document from JSON text.
    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    /// Validates metadata and every page.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        self.meta.collect_errors("", &mut errors);
        for (idx, page) in self.pages.iter().enumerate() {
            page.collect_errors(&format!("pages[{idx}]"), &mut errors);
        }
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_document_json_shape() {
        let doc = TemplateDocument::from_json(
            &json!({
                "name": "Acme",
                "author": "Jo",
                "pages": [
                    {"name": "Home", "slug": "home", "isHomePage": true, "components": [
                        {"id": "navbar-1", "type": "navbar", "properties": {}}
                    ]}
                ]
            })
            .to_string(),
        )
        .unwrap();

        assert_eq!(doc.meta.name, "Acme");
        assert_eq!(doc.meta.version, "1.0.0");
        assert_eq!(doc.pages.len(), 1);
        assert!(doc.pages[0].is_home_page);
        assert!(doc.validate().is_ok());
    }

    #[test]
    fn test_document_validation_prefixes_page_fields() {
        let mut doc = TemplateDocument::single_page(TemplateMeta::new("Acme"), Vec::new());
        doc.pages.push(PageContent::new("", "Bad Slug"));

        let errors = doc.validate().unwrap_err();
        assert!(errors.has_field("pages[1].name"));
        assert!(errors.has_field("pages[1].slug"));
        assert!(!errors.has_field("pages[0].slug"));
    }
}
