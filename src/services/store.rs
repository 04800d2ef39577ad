//! Template and page storage.
//!
//! [`TemplateStore`] is the seam the HTTP layer talks to. Two implementations
//! share one state type: [`MemoryStore`] keeps everything in memory,
//! [`FileStore`] additionally rewrites a JSON snapshot after each mutation.
//! Every call is an independent read-modify-write under a lock; concurrent
//! writers resolve as last write wins.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use anyhow::Context;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::{
    Component, ComponentKind, ComponentStyle, EditError, Page, PageContent, PageId, PagePatch,
    Template, TemplateDocument, TemplateId, TemplateMeta, TemplatePatch, ValidationErrors,
};

/// Errors returned by store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No template with this id
    #[error("Template not found: {0}")]
    TemplateNotFound(TemplateId),
    /// No page with this id in the template
    #[error("Page not found: {0}")]
    PageNotFound(PageId),
    /// Component edit rejected
    #[error(transparent)]
    Component(#[from] EditError),
    /// Input failed validation
    #[error(transparent)]
    Invalid(#[from] ValidationErrors),
    /// Snapshot could not be written
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Storage operations for templates, pages and their components.
pub trait TemplateStore: Send + Sync {
    /// All templates, by id.
    fn list_templates(&self) -> Result<Vec<Template>, StoreError>;
    /// One template.
    fn get_template(&self, id: TemplateId) -> Result<Template, StoreError>;
    /// Validates and stores new template metadata.
    fn create_template(&self, meta: TemplateMeta) -> Result<Template, StoreError>;
    /// Applies a partial update; the result must validate.
    fn update_template(&self, id: TemplateId, patch: &TemplatePatch)
        -> Result<Template, StoreError>;
    /// Deletes a template and all of its pages.
    fn delete_template(&self, id: TemplateId) -> Result<(), StoreError>;
    /// Stores a whole document as a new template with its pages.
    fn import_document(&self, document: TemplateDocument) -> Result<Template, StoreError>;

    /// Pages of a template, by id.
    fn list_pages(&self, template_id: TemplateId) -> Result<Vec<Page>, StoreError>;
    /// One page of a template.
    fn get_page(&self, template_id: TemplateId, page_id: PageId) -> Result<Page, StoreError>;
    /// Validates and stores a new page.
    fn create_page(
        &self,
        template_id: TemplateId,
        content: PageContent,
    ) -> Result<Page, StoreError>;
    /// Applies a partial update; the result must validate.
    fn update_page(
        &self,
        template_id: TemplateId,
        page_id: PageId,
        patch: &PagePatch,
    ) -> Result<Page, StoreError>;
    /// Deletes a page.
    fn delete_page(&self, template_id: TemplateId, page_id: PageId) -> Result<(), StoreError>;

    /// Adds a component with default properties to a page.
    fn add_component(
        &self,
        template_id: TemplateId,
        page_id: PageId,
        kind: ComponentKind,
        index: Option<usize>,
    ) -> Result<Component, StoreError>;
    /// Merges a property patch into a component, optionally replacing its style.
    fn update_component(
        &self,
        template_id: TemplateId,
        page_id: PageId,
        component_id: &str,
        properties: Map<String, Value>,
        style: Option<ComponentStyle>,
    ) -> Result<Component, StoreError>;
    /// Removes a component from a page.
    fn remove_component(
        &self,
        template_id: TemplateId,
        page_id: PageId,
        component_id: &str,
    ) -> Result<(), StoreError>;
    /// Moves a component to a new position and returns the updated page.
    fn move_component(
        &self,
        template_id: TemplateId,
        page_id: PageId,
        component_id: &str,
        to: usize,
    ) -> Result<Page, StoreError>;

    /// The portable document of a template.
    fn document(&self, id: TemplateId) -> Result<TemplateDocument, StoreError> {
        let template = self.get_template(id)?;
        let pages = self.list_pages(id)?;
        Ok(TemplateDocument::from_stored(&template, &pages))
    }
}

// ============================================================================
// Shared state
// ============================================================================

/// Contents of a store, also the on-disk snapshot format.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoreState {
    next_template_id: TemplateId,
    next_page_id: PageId,
    templates: BTreeMap<TemplateId, Template>,
    pages: BTreeMap<PageId, Page>,
}

impl StoreState {
    fn list_templates(&self) -> Result<Vec<Template>, StoreError> {
        Ok(self.templates.values().cloned().collect())
    }

    fn get_template(&self, id: TemplateId) -> Result<Template, StoreError> {
        self.templates
            .get(&id)
            .cloned()
            .ok_or(StoreError::TemplateNotFound(id))
    }

    fn insert_template(&mut self, meta: TemplateMeta) -> Template {
        self.next_template_id += 1;
        let now = Utc::now();
        let template = Template {
            id: self.next_template_id,
            meta,
            created_at: now,
            updated_at: now,
        };
        self.templates.insert(template.id, template.clone());
        template
    }

    fn insert_page(&mut self, template_id: TemplateId, content: PageContent) -> Page {
        self.next_page_id += 1;
        let now = Utc::now();
        let page = Page {
            id: self.next_page_id,
            template_id,
            content,
            created_at: now,
            updated_at: now,
        };
        self.pages.insert(page.id, page.clone());
        page
    }

    fn create_template(&mut self, meta: TemplateMeta) -> Result<Template, StoreError> {
        meta.validate()?;
        Ok(self.insert_template(meta))
    }

    fn update_template(
        &mut self,
        id: TemplateId,
        patch: &TemplatePatch,
    ) -> Result<Template, StoreError> {
        let template = self
            .templates
            .get_mut(&id)
            .ok_or(StoreError::TemplateNotFound(id))?;
        let meta = patch.apply_to(&template.meta);
        meta.validate()?;
        template.meta = meta;
        template.updated_at = Utc::now();
        Ok(template.clone())
    }

    fn delete_template(&mut self, id: TemplateId) -> Result<(), StoreError> {
        self.templates
            .remove(&id)
            .ok_or(StoreError::TemplateNotFound(id))?;
        self.pages.retain(|_, page| page.template_id != id);
        Ok(())
    }

    fn import_document(&mut self, document: TemplateDocument) -> Result<Template, StoreError> {
        document.validate()?;
        let template = self.insert_template(document.meta);
        for content in document.pages {
            self.insert_page(template.id, content);
        }
        Ok(template)
    }

    fn list_pages(&self, template_id: TemplateId) -> Result<Vec<Page>, StoreError> {
        self.get_template(template_id)?;
        Ok(self
            .pages
            .values()
            .filter(|page| page.template_id == template_id)
            .cloned()
            .collect())
    }

    fn page_mut(
        &mut self,
        template_id: TemplateId,
        page_id: PageId,
    ) -> Result<&mut Page, StoreError> {
        if !self.templates.contains_key(&template_id) {
            return Err(StoreError::TemplateNotFound(template_id));
        }
        self.pages
            .get_mut(&page_id)
            .filter(|page| page.template_id == template_id)
            .ok_or(StoreError::PageNotFound(page_id))
    }

    fn get_page(&self, template_id: TemplateId, page_id: PageId) -> Result<Page, StoreError> {
        self.get_template(template_id)?;
        self.pages
            .get(&page_id)
            .filter(|page| page.template_id == template_id)
            .cloned()
            .ok_or(StoreError::PageNotFound(page_id))
    }

    fn create_page(
        &mut self,
        template_id: TemplateId,
        content: PageContent,
    ) -> Result<Page, StoreError> {
        self.get_template(template_id)?;
        content.validate()?;
        Ok(self.insert_page(template_id, content))
    }

    fn update_page(
        &mut self,
        template_id: TemplateId,
        page_id: PageId,
        patch: &PagePatch,
    ) -> Result<Page, StoreError> {
        let page = self.page_mut(template_id, page_id)?;
        let content = patch.apply_to(&page.content)?;
        content.validate()?;
        page.content = content;
        page.updated_at = Utc::now();
        Ok(page.clone())
    }

    fn delete_page(&mut self, template_id: TemplateId, page_id: PageId) -> Result<(), StoreError> {
        self.page_mut(template_id, page_id)?;
        self.pages.remove(&page_id);
        Ok(())
    }

    /// Runs a component edit on a page and bumps its modification time.
    fn edit_page<T>(
        &mut self,
        template_id: TemplateId,
        page_id: PageId,
        edit: impl FnOnce(&mut PageContent) -> Result<T, EditError>,
    ) -> Result<(T, Page), StoreError> {
        let page = self.page_mut(template_id, page_id)?;
        let out = edit(&mut page.content)?;
        page.updated_at = Utc::now();
        Ok((out, page.clone()))
    }
}

// ============================================================================
// Implementations
// ============================================================================

/// Access to a lock-guarded [`StoreState`].
trait StateAccess {
    fn read<T>(&self, f: impl FnOnce(&StoreState) -> Result<T, StoreError>)
        -> Result<T, StoreError>;
    fn write<T>(
        &self,
        f: impl FnOnce(&mut StoreState) -> Result<T, StoreError>,
    ) -> Result<T, StoreError>;
}

macro_rules! impl_template_store {
    ($store:ty) => {
        impl TemplateStore for $store {
            fn list_templates(&self) -> Result<Vec<Template>, StoreError> {
                self.read(StoreState::list_templates)
            }

            fn get_template(&self, id: TemplateId) -> Result<Template, StoreError> {
                self.read(|s| s.get_template(id))
            }

            fn create_template(&self, meta: TemplateMeta) -> Result<Template, StoreError> {
                self.write(|s| s.create_template(meta))
            }

            fn update_template(
                &self,
                id: TemplateId,
                patch: &TemplatePatch,
            ) -> Result<Template, StoreError> {
                self.write(|s| s.update_template(id, patch))
            }

            fn delete_template(&self, id: TemplateId) -> Result<(), StoreError> {
                self.write(|s| s.delete_template(id))
            }

            fn import_document(
                &self,
                document: TemplateDocument,
            ) -> Result<Template, StoreError> {
                self.write(|s| s.import_document(document))
            }

            fn list_pages(&self, template_id: TemplateId) -> Result<Vec<Page>, StoreError> {
                self.read(|s| s.list_pages(template_id))
            }

            fn get_page(
                &self,
                template_id: TemplateId,
                page_id: PageId,
            ) -> Result<Page, StoreError> {
                self.read(|s| s.get_page(template_id, page_id))
            }

            fn create_page(
                &self,
                template_id: TemplateId,
                content: PageContent,
            ) -> Result<Page, StoreError> {
                self.write(|s| s.create_page(template_id, content))
            }

            fn update_page(
                &self,
                template_id: TemplateId,
                page_id: PageId,
                patch: &PagePatch,
            ) -> Result<Page, StoreError> {
                self.write(|s| s.update_page(template_id, page_id, patch))
            }

            fn delete_page(
                &self,
                template_id: TemplateId,
                page_id: PageId,
            ) -> Result<(), StoreError> {
                self.write(|s| s.delete_page(template_id, page_id))
            }

            fn add_component(
                &self,
                template_id: TemplateId,
                page_id: PageId,
                kind: ComponentKind,
                index: Option<usize>,
            ) -> Result<Component, StoreError> {
                self.write(|s| {
                    s.edit_page(template_id, page_id, |page| {
                        page.add_component(kind, index).cloned()
                    })
                    .map(|(component, _)| component)
                })
            }

            fn update_component(
                &self,
                template_id: TemplateId,
                page_id: PageId,
                component_id: &str,
                properties: Map<String, Value>,
                style: Option<ComponentStyle>,
            ) -> Result<Component, StoreError> {
                self.write(|s| {
                    s.edit_page(template_id, page_id, |page| {
                        page.update_component(component_id, properties, style)
                            .cloned()
                    })
                    .map(|(component, _)| component)
                })
            }

            fn remove_component(
                &self,
                template_id: TemplateId,
                page_id: PageId,
                component_id: &str,
            ) -> Result<(), StoreError> {
                self.write(|s| {
                    s.edit_page(template_id, page_id, |page| {
                        page.remove_component(component_id).map(|_| ())
                    })
                    .map(|_| ())
                })
            }

            fn move_component(
                &self,
                template_id: TemplateId,
                page_id: PageId,
                component_id: &str,
                to: usize,
            ) -> Result<Page, StoreError> {
                self.write(|s| {
                    s.edit_page(template_id, page_id, |page| {
                        page.move_component_by_id(component_id, to)
                    })
                    .map(|((), page)| page)
                })
            }
        }
    };
}

/// In-memory store. Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<StoreState>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateAccess for MemoryStore {
    fn read<T>(
        &self,
        f: impl FnOnce(&StoreState) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        f(&state)
    }

    fn write<T>(
        &self,
        f: impl FnOnce(&mut StoreState) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut state)
    }
}

impl_template_store!(MemoryStore);

/// Store persisted as a JSON snapshot file.
///
/// The whole state is rewritten after each successful mutation (temp file +
/// rename). A mutation whose snapshot cannot be written is rolled back.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    state: RwLock<StoreState>,
}

impl FileStore {
    /// Opens a snapshot file, starting empty when it does not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let path = path.into();
        let state = if path.exists() {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read store file: {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse store file: {}", path.display()))?
        } else {
            StoreState::default()
        };
        tracing::info!(
            "Opened store {} ({} templates)",
            path.display(),
            state.templates.len()
        );
        Ok(Self {
            path,
            state: RwLock::new(state),
        })
    }

    /// Location of the snapshot file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn save_snapshot(path: &Path, state: &StoreState) -> anyhow::Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create store directory: {}", dir.display()))?;
    }
    let content = serde_json::to_string_pretty(state).context("Failed to serialize store")?;
    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, content)
        .with_context(|| format!("Failed to write temp store file: {}", temp_path.display()))?;
    fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to rename temp store file to: {}", path.display()))?;
    Ok(())
}

impl StateAccess for FileStore {
    fn read<T>(
        &self,
        f: impl FnOnce(&StoreState) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        f(&state)
    }

    fn write<T>(
        &self,
        f: impl FnOnce(&mut StoreState) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let mut next = state.clone();
        let out = f(&mut next)?;
        save_snapshot(&self.path, &next).map_err(|e| {
            tracing::warn!("Failed to persist store: {:#}", e);
            StoreError::Storage(format!("{e:#}"))
        })?;
        *state = next;
        Ok(out)
    }
}

impl_template_store!(FileStore);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn patch(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    fn seeded(store: &dyn TemplateStore) -> (Template, Page) {
        let template = store.create_template(TemplateMeta::new("Agency")).unwrap();
        let mut home = PageContent::new("Home", "home");
        home.is_home_page = true;
        let page = store.create_page(template.id, home).unwrap();
        (template, page)
    }

    #[test]
    fn test_template_crud() {
        let store = MemoryStore::new();
        let template = store.create_template(TemplateMeta::new("Agency")).unwrap();
        assert_eq!(template.id, 1);
        assert_eq!(template.meta.version, "1.0.0");

        let updated = store
            .update_template(
                template.id,
                &TemplatePatch {
                    description: Some("Landing pages".to_string()),
                    ..TemplatePatch::default()
                },
            )
            .unwrap();
        assert_eq!(updated.meta.name, "Agency");
        assert_eq!(updated.meta.description.as_deref(), Some("Landing pages"));
        assert!(updated.updated_at >= template.updated_at);

        assert_eq!(store.list_templates().unwrap().len(), 1);
        store.delete_template(template.id).unwrap();
        assert!(matches!(
            store.get_template(template.id),
            Err(StoreError::TemplateNotFound(1))
        ));
    }

    #[test]
    fn test_invalid_input_is_rejected() {
        let store = MemoryStore::new();
        let err = store.create_template(TemplateMeta::new("  ")).unwrap_err();
        match err {
            StoreError::Invalid(errors) => assert!(errors.has_field("name")),
            other => panic!("unexpected error: {other:?}"),
        }

        let template = store.create_template(TemplateMeta::new("Ok")).unwrap();
        let err = store
            .create_page(template.id, PageContent::new("About", "About Us"))
            .unwrap_err();
        assert!(matches!(err, StoreError::Invalid(_)));

        let err = store
            .update_template(
                template.id,
                &TemplatePatch {
                    name: Some(String::new()),
                    ..TemplatePatch::default()
                },
            )
            .unwrap_err();
        assert!(matches!(err, StoreError::Invalid(_)));
        assert_eq!(store.get_template(template.id).unwrap().meta.name, "Ok");
    }

    #[test]
    fn test_delete_template_cascades_to_pages() {
        let store = MemoryStore::new();
        let (template, page) = seeded(&store);
        let other = store.create_template(TemplateMeta::new("Other")).unwrap();
        store
            .create_page(other.id, PageContent::new("Home", "home"))
            .unwrap();

        store.delete_template(template.id).unwrap();
        assert!(matches!(
            store.get_page(template.id, page.id),
            Err(StoreError::TemplateNotFound(_))
        ));
        assert_eq!(store.list_pages(other.id).unwrap().len(), 1);
    }

    #[test]
    fn test_page_must_belong_to_template() {
        let store = MemoryStore::new();
        let (_, page) = seeded(&store);
        let other = store.create_template(TemplateMeta::new("Other")).unwrap();
        assert!(matches!(
            store.get_page(other.id, page.id),
            Err(StoreError::PageNotFound(_))
        ));
    }

    #[test]
    fn test_component_lifecycle() {
        let store = MemoryStore::new();
        let (template, page) = seeded(&store);

        let navbar = store
            .add_component(template.id, page.id, ComponentKind::Navbar, None)
            .unwrap();
        let hero = store
            .add_component(template.id, page.id, ComponentKind::Hero, None)
            .unwrap();
        assert_eq!(hero.properties.text("title").as_deref(), Some("Welcome to Our Site"));

        let hero = store
            .update_component(
                template.id,
                page.id,
                &hero.id,
                patch(json!({"title": "Hi"})),
                None,
            )
            .unwrap();
        assert_eq!(hero.properties.text("title").as_deref(), Some("Hi"));
        assert_eq!(
            hero.properties.text("subtitle").as_deref(),
            Some("Create amazing experiences with our platform")
        );

        let moved = store
            .move_component(template.id, page.id, &hero.id, 0)
            .unwrap();
        let order: Vec<_> = moved.content.components.iter().map(|c| c.id.clone()).collect();
        assert_eq!(order, vec![hero.id.clone(), navbar.id.clone()]);

        store
            .remove_component(template.id, page.id, &navbar.id)
            .unwrap();
        let page = store.get_page(template.id, page.id).unwrap();
        assert_eq!(page.content.components.len(), 1);

        let err = store
            .remove_component(template.id, page.id, "missing")
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::Component(EditError::ComponentNotFound(_))
        ));

        let err = store
            .add_component(
                template.id,
                page.id,
                ComponentKind::Other("carousel".to_string()),
                None,
            )
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::Component(EditError::UnsupportedKind(_))
        ));
    }

    #[test]
    fn test_page_update_keeps_component_types() {
        let store = MemoryStore::new();
        let (template, page) = seeded(&store);
        let hero = store
            .add_component(template.id, page.id, ComponentKind::Hero, None)
            .unwrap();

        let mut changed = hero.clone();
        changed.kind = ComponentKind::Footer;
        let err = store
            .update_page(
                template.id,
                page.id,
                &PagePatch {
                    components: Some(vec![changed]),
                    ..PagePatch::default()
                },
            )
            .unwrap_err();
        match err {
            StoreError::Invalid(errors) => assert!(errors.has_field("components[0].type")),
            other => panic!("unexpected error: {other:?}"),
        }

        let stored = store.get_page(template.id, page.id).unwrap();
        assert_eq!(stored.content.components[0].kind, ComponentKind::Hero);
    }

    #[test]
    fn test_import_document_and_read_back() {
        let store = MemoryStore::new();
        let mut meta = TemplateMeta::new("Imported");
        meta.author = Some("Jo".to_string());
        let document = TemplateDocument::single_page(
            meta,
            vec![Component::new(ComponentKind::Faq)],
        );

        let template = store.import_document(document.clone()).unwrap();
        assert_eq!(store.document(template.id).unwrap(), document);
    }

    #[test]
    fn test_file_store_persists_across_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data").join("store.json");

        let (template_id, page_id) = {
            let store = FileStore::open(&path).unwrap();
            let (template, page) = seeded(&store);
            store
                .add_component(template.id, page.id, ComponentKind::Gallery, None)
                .unwrap();
            (template.id, page.id)
        };

        assert!(path.exists());
        assert!(!path.with_extension("json.tmp").exists());

        let store = FileStore::open(&path).unwrap();
        let page = store.get_page(template_id, page_id).unwrap();
        assert_eq!(page.content.components[0].kind, ComponentKind::Gallery);

        let next = store.create_template(TemplateMeta::new("Next")).unwrap();
        assert_eq!(next.id, template_id + 1);
    }

    #[test]
    fn test_file_store_rejects_corrupt_snapshot() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("store.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(FileStore::open(&path).is_err());
    }
}
