//! Project session
//!
//! Holds the project currently open in a document view. Loading an id that
//! is already current performs no fetch. A failed fetch leaves the session
//! with no project. Only the most recent load may change the current
//! project; a slower, older load that finishes later is discarded.

use crate::cache::ProjectCache;
use crate::error::FetchError;
use crate::fetch::fetch_project;
use crate::model::{Project, ProjectId};
use crate::store::DocumentStore;
use parking_lot::RwLock;
use std::sync::Arc;

#[derive(Debug, Default)]
struct SessionState {
    current: Option<Arc<Project>>,
    /// Sequence number of the latest request
    latest: u64,
}

/// Current project plus the cache and store it is loaded through
#[derive(Debug)]
pub struct ProjectSession {
    store: Arc<dyn DocumentStore>,
    cache: ProjectCache,
    state: RwLock<SessionState>,
}

impl ProjectSession {
    /// Create empty session
    #[must_use]
    pub fn new(store: Arc<dyn DocumentStore>, cache: ProjectCache) -> Self {
        Self {
            store,
            cache,
            state: RwLock::new(SessionState::default()),
        }
    }

    /// Make `id` the current project
    ///
    /// Returns the current project without touching cache or store when it
    /// already has this id. Otherwise consults the cache, then fetches. If a
    /// newer load starts while this one is pending, this load returns its
    /// result but leaves the current project to the newer request.
    ///
    /// # Errors
    /// Returns the fetch error; the session is left empty unless a newer
    /// load superseded this one
    pub async fn load(&self, id: &ProjectId) -> Result<Arc<Project>, FetchError> {
        let ticket = {
            let mut state = self.state.write();
            state.latest += 1;
            if let Some(current) = state.current.as_ref().filter(|p| p.id == *id) {
                tracing::debug!("Project {} already loaded", id);
                return Ok(Arc::clone(current));
            }
            state.latest
        };

        let result = match self.cache.get(id).await {
            Some(cached) => Ok(cached),
            None => match fetch_project(self.store.as_ref(), id).await {
                Ok(envelope) => {
                    let project = Arc::new(envelope.project);
                    self.cache.insert(Arc::clone(&project)).await;
                    tracing::info!("Loaded project {} ({})", id, project.customer_name);
                    Ok(project)
                }
                Err(e) => Err(e),
            },
        };

        let mut state = self.state.write();
        if state.latest != ticket {
            tracing::debug!("Load of project {} superseded by a newer request", id);
            return result;
        }
        state.current = result.as_ref().ok().map(Arc::clone);
        result
    }

    /// Project currently open, if any
    #[inline]
    #[must_use]
    pub fn current(&self) -> Option<Arc<Project>> {
        self.state.read().current.clone()
    }

    /// Drop `id` from the cache and close it if current
    pub async fn invalidate(&self, id: &ProjectId) {
        self.cache.invalidate(id).await;
        let mut state = self.state.write();
        if state.current.as_ref().is_some_and(|p| p.id == *id) {
            state.current = None;
        }
    }

    /// Close the current project, keeping the cache
    ///
    /// Pending loads no longer open their project.
    #[inline]
    pub fn clear(&self) {
        let mut state = self.state.write();
        state.latest += 1;
        state.current = None;
    }

    /// Session cache
    #[inline]
    #[must_use]
    pub fn cache(&self) -> &ProjectCache {
        &self.cache
    }

    /// Backing store
    #[inline]
    #[must_use]
    pub fn store(&self) -> &Arc<dyn DocumentStore> {
        &self.store
    }
}
