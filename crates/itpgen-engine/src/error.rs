//! Engine error types

use itpgen_project::{FetchError, StoreError};

pub use crate::config::ConfigError;

/// Errors surfaced by the document engine
///
/// Resolution and assembly never fail; every variant comes from loading
/// configuration or projects.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration could not be loaded
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// Document store failure
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Project fetch failure
    #[error("fetch error: {0}")]
    Fetch(#[from] FetchError),
}

impl EngineError {
    /// HTTP-style status for this error
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            EngineError::Fetch(e) => e.status_code(),
            EngineError::Store(e) if e.is_not_found() => 404,
            EngineError::Config(_) | EngineError::Store(_) => 500,
        }
    }
}
