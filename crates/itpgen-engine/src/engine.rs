//! Document engine facade
//!
//! Ties configuration to the resolve → number → assemble pipeline. Every
//! operation is recomputed from the project on each call.

use crate::config::EngineConfig;
use crate::diagnostics::{validate_selections, SelectionReport};
use crate::error::EngineError;
use crate::itp::ItpDocument;
use crate::mos::MosDocument;
use crate::numbering::{assign, ActivityPlan};
use crate::resolver::resolve;
use itpgen_project::{Project, ProjectCache, ProjectId, ProjectSession};
use serde::Serialize;
use std::sync::Arc;

/// Everything a document view shows for one project
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentSet {
    /// Numbered plan
    pub plan: ActivityPlan,
    /// Inspection and Test Plan
    pub itp: ItpDocument,
    /// Method of Statement
    pub mos: MosDocument,
}

/// Generates documents from projects
#[derive(Debug, Clone, Default)]
pub struct DocumentEngine {
    config: EngineConfig,
}

impl DocumentEngine {
    /// Create engine with configuration
    #[inline]
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Engine configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Cache sized by configuration
    #[must_use]
    pub fn cache(&self) -> ProjectCache {
        ProjectCache::new(self.config.cache.max_capacity)
    }

    /// Resolve and number a project
    #[must_use]
    pub fn plan(&self, project: &Project) -> ActivityPlan {
        let plan = assign(&resolve(project));
        tracing::debug!(
            "Planned project {}: {} sections, {} lines",
            project.id,
            plan.len(),
            plan.activities().count()
        );
        plan
    }

    /// Inspection and Test Plan for a project
    #[must_use]
    pub fn itp(&self, project: &Project) -> ItpDocument {
        self.itp_from(project, &self.plan(project))
    }

    /// Method of Statement for a project
    #[must_use]
    pub fn mos(&self, project: &Project) -> MosDocument {
        self.mos_from(project, &self.plan(project))
    }

    /// Both documents from a single plan
    #[must_use]
    pub fn documents(&self, project: &Project) -> DocumentSet {
        let plan = self.plan(project);
        DocumentSet {
            itp: self.itp_from(project, &plan),
            mos: self.mos_from(project, &plan),
            plan,
        }
    }

    /// Report selected values that do not resolve cleanly
    #[must_use]
    pub fn validate(&self, project: &Project) -> SelectionReport {
        validate_selections(project)
    }

    /// Documents for the session's current project, `None` when none is open
    #[must_use]
    pub fn view(&self, session: &ProjectSession) -> Option<DocumentSet> {
        session.current().map(|project| self.documents(&project))
    }

    /// Load `id` into the session and build its documents
    ///
    /// # Errors
    /// Returns the fetch error; the session is left without a project
    pub async fn open(
        &self,
        session: &ProjectSession,
        id: &ProjectId,
    ) -> Result<DocumentSet, EngineError> {
        let project: Arc<Project> = session.load(id).await?;
        Ok(self.documents(&project))
    }

    fn itp_from(&self, project: &Project, plan: &ActivityPlan) -> ItpDocument {
        ItpDocument::assemble(project, plan, &self.config.document, &self.config.itp)
    }

    fn mos_from(&self, project: &Project, plan: &ActivityPlan) -> MosDocument {
        MosDocument::assemble(project, plan, &self.config.document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itpgen_catalog::{EquipmentClass, EquipmentPair, Voltage};
    use itpgen_project::{EquipmentSelection, MemoryStore};

    fn project() -> Project {
        Project::new("p1", "Acme").with_selection(
            EquipmentPair::new(Voltage::Hv, EquipmentClass::Trafo),
            EquipmentSelection::from_values(["SFRA", "IR"]),
        )
    }

    #[test]
    fn operations_are_idempotent() {
        let engine = DocumentEngine::default();
        let project = project();

        assert_eq!(engine.plan(&project), engine.plan(&project));
        assert_eq!(engine.itp(&project), engine.itp(&project));
        assert_eq!(engine.mos(&project), engine.mos(&project));
    }

    #[test]
    fn documents_share_numbering() {
        let engine = DocumentEngine::default();
        let set = engine.documents(&project());

        let itp: Vec<_> = set.itp.rows().map(|r| r.number.clone()).collect();
        let mos: Vec<_> = set.mos.steps().map(|s| s.number.clone()).collect();
        assert_eq!(itp, mos);
        assert_eq!(itp, vec!["1.1", "1.2", "1.3", "1.4"]);
    }

    #[test]
    fn revision_flows_into_headers() {
        let engine = DocumentEngine::new(EngineConfig::default().with_revision("C"));
        let set = engine.documents(&project());
        assert_eq!(set.itp.header.revision, "C");
        assert_eq!(set.mos.header.revision, "C");
    }

    #[tokio::test]
    async fn view_follows_session() {
        let engine = DocumentEngine::default();
        let store = Arc::new(MemoryStore::from_projects([project()]).unwrap());
        let session = ProjectSession::new(store, engine.cache());

        assert!(engine.view(&session).is_none());

        let opened = engine.open(&session, &ProjectId::from("p1")).await.unwrap();
        assert_eq!(engine.view(&session), Some(opened));

        let err = engine
            .open(&session, &ProjectId::from("missing"))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 404);
        assert!(engine.view(&session).is_none());
    }
}
