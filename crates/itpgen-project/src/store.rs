//! Document store collaborator
//!
//! [`DocumentStore`] is the single persistence seam for project records:
//! get, list, create, update and delete. [`MemoryStore`] is the concurrent
//! in-process implementation, optionally seeded from and saved to a JSON
//! file holding an array of projects.

use crate::error::StoreError;
use crate::model::{NewProject, Project, ProjectFilter, ProjectId, ProjectPatch};
use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use std::fmt::Debug;
use std::path::Path;

/// Project persistence operations
#[async_trait]
pub trait DocumentStore: Send + Sync + Debug {
    /// Fetch one project
    async fn get(&self, id: &ProjectId) -> Result<Project, StoreError>;

    /// List projects matching filter, ordered by id
    async fn list(&self, filter: &ProjectFilter) -> Result<Vec<Project>, StoreError>;

    /// Create project with a generated id
    async fn create(&self, new: NewProject) -> Result<Project, StoreError>;

    /// Apply patch and return the updated project
    async fn update(&self, id: &ProjectId, patch: ProjectPatch) -> Result<Project, StoreError>;

    /// Remove project
    async fn delete(&self, id: &ProjectId) -> Result<(), StoreError>;
}

/// In-memory document store
#[derive(Debug, Default)]
pub struct MemoryStore {
    projects: DashMap<ProjectId, Project>,
}

impl MemoryStore {
    /// Create empty store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create store holding projects
    ///
    /// # Errors
    /// Returns error if two projects share an id
    pub fn from_projects(projects: impl IntoIterator<Item = Project>) -> Result<Self, StoreError> {
        let store = Self::new();
        for project in projects {
            store.insert(project)?;
        }
        Ok(store)
    }

    /// Load store from a JSON array file
    ///
    /// # Errors
    /// Returns error on IO failure, invalid JSON or duplicate ids
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| StoreError::io_error(path, e))?;
        let projects: Vec<Project> = serde_json::from_str(&raw)?;
        tracing::info!("Loaded {} projects from {}", projects.len(), path.display());
        Self::from_projects(projects)
    }

    /// Save all projects to a JSON array file
    ///
    /// # Errors
    /// Returns error on IO failure
    pub async fn save(&self, path: impl AsRef<Path>) -> Result<(), StoreError> {
        let path = path.as_ref();
        let projects = self.snapshot();
        let raw = serde_json::to_string_pretty(&projects)?;
        tokio::fs::write(path, raw)
            .await
            .map_err(|e| StoreError::io_error(path, e))?;
        tracing::info!("Saved {} projects to {}", projects.len(), path.display());
        Ok(())
    }

    /// Insert a complete project, keeping its id
    ///
    /// # Errors
    /// Returns error if the id is taken
    pub fn insert(&self, project: Project) -> Result<(), StoreError> {
        match self.projects.entry(project.id.clone()) {
            dashmap::mapref::entry::Entry::Occupied(_) => {
                Err(StoreError::AlreadyExists(project.id))
            }
            dashmap::mapref::entry::Entry::Vacant(slot) => {
                slot.insert(project);
                Ok(())
            }
        }
    }

    /// All projects ordered by id
    #[must_use]
    pub fn snapshot(&self) -> Vec<Project> {
        let mut projects: Vec<Project> = self.projects.iter().map(|p| p.value().clone()).collect();
        projects.sort_by(|a, b| a.id.cmp(&b.id));
        projects
    }

    /// Number of stored projects
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Check if store is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn get(&self, id: &ProjectId) -> Result<Project, StoreError> {
        self.projects
            .get(id)
            .map(|p| p.value().clone())
            .ok_or_else(|| StoreError::NotFound(id.clone()))
    }

    async fn list(&self, filter: &ProjectFilter) -> Result<Vec<Project>, StoreError> {
        let mut projects: Vec<Project> = self
            .projects
            .iter()
            .filter(|p| filter.matches(p.value()))
            .map(|p| p.value().clone())
            .collect();
        projects.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(projects)
    }

    async fn create(&self, new: NewProject) -> Result<Project, StoreError> {
        new.validate()?;

        let project = new.into_project(ProjectId::generate(), Utc::now());
        self.insert(project.clone())?;
        tracing::info!("Created project {} ({})", project.id, project.customer_name);
        Ok(project)
    }

    async fn update(&self, id: &ProjectId, patch: ProjectPatch) -> Result<Project, StoreError> {
        patch.validate()?;

        let mut entry = self
            .projects
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        patch.apply(entry.value_mut());
        entry.updated_at = Some(Utc::now());
        let updated = entry.value().clone();
        drop(entry);

        tracing::info!("Updated project {}", id);
        Ok(updated)
    }

    async fn delete(&self, id: &ProjectId) -> Result<(), StoreError> {
        self.projects
            .remove(id)
            .map(|_| tracing::info!("Deleted project {}", id))
            .ok_or_else(|| StoreError::NotFound(id.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EquipmentSelection, ProjectStatus};
    use itpgen_catalog::{EquipmentClass, EquipmentPair, Voltage};

    #[tokio::test]
    async fn create_and_get() {
        let store = MemoryStore::new();
        let created = store
            .create(NewProject::new("Acme").with_location("Dubai"))
            .await
            .unwrap();

        assert!(created.created_at.is_some());
        let fetched = store.get(&created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn create_rejects_missing_customer() {
        let store = MemoryStore::new();
        let err = store.create(NewProject::new("")).await.unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn get_missing_is_not_found() {
        let store = MemoryStore::new();
        let err = store.get(&ProjectId::from("nope")).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn update_applies_patch() {
        let store = MemoryStore::new();
        let created = store.create(NewProject::new("Acme")).await.unwrap();

        let updated = store
            .update(&created.id, ProjectPatch::new().status(ProjectStatus::Completed))
            .await
            .unwrap();
        assert_eq!(updated.status, ProjectStatus::Completed);
        assert_eq!(updated.customer_name, "Acme");
        assert!(updated.updated_at >= created.updated_at);

        let err = store
            .update(&ProjectId::from("nope"), ProjectPatch::new())
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn delete_removes_project() {
        let store = MemoryStore::new();
        let created = store.create(NewProject::new("Acme")).await.unwrap();

        store.delete(&created.id).await.unwrap();
        assert!(store.get(&created.id).await.unwrap_err().is_not_found());
        assert!(store.delete(&created.id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn list_filters_and_orders() {
        let store = MemoryStore::from_projects([
            Project::new("b", "Globex"),
            Project::new("a", "Acme"),
            Project::new("c", "Acme North"),
        ])
        .unwrap();

        let all = store.list(&ProjectFilter::all()).await.unwrap();
        let ids: Vec<_> = all.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);

        let acme = store
            .list(&ProjectFilter::all().with_customer("ACME"))
            .await
            .unwrap();
        assert_eq!(acme.len(), 2);
    }

    #[test]
    fn insert_rejects_duplicate_ids() {
        let store = MemoryStore::new();
        store.insert(Project::new("a", "Acme")).unwrap();
        let err = store.insert(Project::new("a", "Other")).unwrap_err();
        assert!(matches!(err, StoreError::AlreadyExists(_)));
    }

    #[tokio::test]
    async fn save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("projects.json");

        let pair = EquipmentPair::new(Voltage::Mv, EquipmentClass::Cable);
        let store = MemoryStore::from_projects([Project::new("a", "Acme")
            .with_selection(pair, EquipmentSelection::from_values(["IR", "VLF"]))])
        .unwrap();
        store.save(&path).await.unwrap();

        let loaded = MemoryStore::load(&path).await.unwrap();
        assert_eq!(loaded.snapshot(), store.snapshot());
    }

    #[tokio::test]
    async fn load_missing_file_is_io_error() {
        let err = MemoryStore::load("/nonexistent/projects.json")
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
    }
}
