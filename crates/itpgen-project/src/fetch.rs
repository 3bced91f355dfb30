//! Project fetch
//!
//! The `GET /api/project/{id}` contract: `{ project }` on success, otherwise
//! a [`FetchError`] carrying a 404/500 status and `{ error }` body.

use crate::error::FetchError;
use crate::model::{Project, ProjectId};
use crate::store::DocumentStore;
use serde::{Deserialize, Serialize};

/// Successful fetch payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectEnvelope {
    /// The project record
    pub project: Project,
}

/// Fetch one project from the store
///
/// # Errors
/// Returns [`FetchError::NotFound`] when the id is unknown and
/// [`FetchError::Store`] for any other store failure
pub async fn fetch_project(
    store: &dyn DocumentStore,
    id: &ProjectId,
) -> Result<ProjectEnvelope, FetchError> {
    match store.get(id).await {
        Ok(project) => Ok(ProjectEnvelope { project }),
        Err(e) => {
            let err = FetchError::from(e);
            tracing::warn!("Fetch of project {} failed ({}): {}", id, err.status_code(), err);
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[tokio::test]
    async fn fetch_existing_project() {
        let store = MemoryStore::from_projects([Project::new("p1", "Acme")]).unwrap();
        let envelope = fetch_project(&store, &ProjectId::from("p1")).await.unwrap();
        assert_eq!(envelope.project.customer_name, "Acme");

        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["project"]["_id"], "p1");
    }

    #[tokio::test]
    async fn fetch_missing_project_is_404() {
        let store = MemoryStore::new();
        let err = fetch_project(&store, &ProjectId::from("p1"))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 404);
    }
}
