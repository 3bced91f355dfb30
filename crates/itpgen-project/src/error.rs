//! Error types for project persistence and fetch
//!
//! [`StoreError`] is raised by [`DocumentStore`](crate::store::DocumentStore)
//! implementations. [`FetchError`] is the project-fetch contract: it carries
//! the HTTP-style status code and `{ error }` body a caller reports.

use crate::model::ProjectId;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Invalid project input
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// Status string is not one of the known statuses
    #[error("unknown project status: '{0}'")]
    UnknownStatus(String),

    /// Customer name is empty or blank
    #[error("customer name is required")]
    MissingCustomerName,
}

/// Errors raised by a document store
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No project with this id
    #[error("project not found: {0}")]
    NotFound(ProjectId),

    /// A project with this id is already stored
    #[error("project already exists: {0}")]
    AlreadyExists(ProjectId),

    /// Input failed validation
    #[error("validation failed: {0}")]
    Validation(#[from] ModelError),

    /// IO error reading or writing a store file
    #[error("io error on {path}: {source}")]
    Io {
        /// File being read or written
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Store file is not valid project JSON
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StoreError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Check if error means the project does not exist
    #[inline]
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Errors returned by the project fetch
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Project does not exist (404)
    #[error("project not found: {0}")]
    NotFound(ProjectId),

    /// Store failed (500)
    #[error("failed to fetch project: {0}")]
    Store(String),
}

impl FetchError {
    /// HTTP status code equivalent
    #[inline]
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::NotFound(_) => 404,
            Self::Store(_) => 500,
        }
    }

    /// `{ error }` response body
    #[must_use]
    pub fn body(&self) -> ErrorBody {
        let error = match self {
            Self::NotFound(_) => "Project not found",
            Self::Store(_) => "Failed to fetch project",
        };
        ErrorBody {
            error: error.to_string(),
        }
    }
}

impl From<StoreError> for FetchError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => Self::NotFound(id),
            other => Self::Store(other.to_string()),
        }
    }
}

/// Error payload of a failed fetch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable message
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_error_display() {
        let err = StoreError::NotFound(ProjectId::from("p1"));
        assert_eq!(err.to_string(), "project not found: p1");
        assert!(err.is_not_found());

        let err = StoreError::from(ModelError::MissingCustomerName);
        assert!(!err.is_not_found());
        assert_eq!(err.to_string(), "validation failed: customer name is required");
    }

    #[test]
    fn fetch_error_status_codes() {
        let not_found: FetchError = StoreError::NotFound(ProjectId::from("p1")).into();
        assert_eq!(not_found.status_code(), 404);
        assert_eq!(not_found.body().error, "Project not found");

        let failed: FetchError = StoreError::from(ModelError::MissingCustomerName).into();
        assert_eq!(failed.status_code(), 500);
        assert_eq!(failed.body().error, "Failed to fetch project");
    }

    #[test]
    fn error_body_json_shape() {
        let body = FetchError::NotFound(ProjectId::from("x")).body();
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"error":"Project not found"}"#);
    }
}
