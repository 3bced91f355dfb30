//! itpgen Project
//!
//! Project records and how they are stored, fetched and held open.
//!
//! # Architecture
//!
//! ```text
//! DocumentStore (get/list/create/update/delete)
//!        ↓ fetch_project → { project } | 404/500 { error }
//! ProjectSession ── ProjectCache (moka, invalidate by id)
//!        ↓ current()
//! document view
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use itpgen_project::{MemoryStore, NewProject, ProjectCache, ProjectSession};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = Arc::new(MemoryStore::new());
//! let project = store.create(NewProject::new("Acme Utilities")).await?;
//!
//! let session = ProjectSession::new(store, ProjectCache::default());
//! session.load(&project.id).await?;
//! assert!(session.current().is_some());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod cache;
pub mod error;
pub mod fetch;
pub mod model;
pub mod session;
pub mod store;

// Re-exports for convenience
pub use cache::{CacheStats, ProjectCache};
pub use error::{ErrorBody, FetchError, ModelError, StoreError};
pub use fetch::{fetch_project, ProjectEnvelope};
pub use model::{
    EquipmentSelection, NewProject, Project, ProjectFilter, ProjectId, ProjectPatch,
    ProjectStatus, SelectionEntry, VoltageOptions,
};
pub use session::ProjectSession;
pub use store::{DocumentStore, MemoryStore};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with projects
    pub use crate::{
        DocumentStore, EquipmentSelection, MemoryStore, NewProject, Project, ProjectCache,
        ProjectId, ProjectSession, ProjectStatus,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
