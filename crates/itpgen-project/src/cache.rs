//! Project cache using moka
//!
//! Session-scoped cache of fetched projects. Entries live until explicitly
//! invalidated or evicted by capacity; there is no time-based expiry.

use crate::model::{Project, ProjectId};
use moka::future::Cache;
use std::sync::Arc;

/// Statistics for cache monitoring
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of entries in cache
    pub entry_count: u64,
}

/// Bounded cache of projects keyed by id
#[derive(Debug, Clone)]
pub struct ProjectCache {
    inner: Cache<ProjectId, Arc<Project>>,
}

impl ProjectCache {
    /// Create new cache with max capacity
    #[inline]
    #[must_use]
    pub fn new(max_capacity: u64) -> Self {
        Self {
            inner: Cache::new(max_capacity),
        }
    }

    /// Insert project under its own id
    pub async fn insert(&self, project: Arc<Project>) {
        self.inner.insert(project.id.clone(), project).await;
    }

    /// Get cached project
    pub async fn get(&self, id: &ProjectId) -> Option<Arc<Project>> {
        let hit = self.inner.get(id).await;
        if hit.is_some() {
            tracing::debug!("Project cache hit: {}", id);
        }
        hit
    }

    /// Check if id is cached
    pub async fn contains(&self, id: &ProjectId) -> bool {
        self.inner.get(id).await.is_some()
    }

    /// Drop one entry
    pub async fn invalidate(&self, id: &ProjectId) {
        self.inner.invalidate(id).await;
        tracing::debug!("Project cache invalidated: {}", id);
    }

    /// Drop all entries
    #[inline]
    pub fn invalidate_all(&self) {
        self.inner.invalidate_all();
    }

    /// Flush pending maintenance so counts are exact
    pub async fn sync(&self) {
        self.inner.run_pending_tasks().await;
    }

    /// Get cache statistics
    #[inline]
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entry_count: self.inner.entry_count(),
        }
    }
}

impl Default for ProjectCache {
    /// Create cache with default capacity (256 entries)
    fn default() -> Self {
        Self::new(256)
    }
}
