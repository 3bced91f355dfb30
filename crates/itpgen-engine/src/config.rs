//! Engine configuration
//!
//! Document titles, the ITP row template and cache sizing. Loaded from TOML;
//! every section is optional and falls back to [`Default`].

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("io error reading {path}: {source}")]
    Io {
        /// Config file path
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Values parse but are not usable
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Top-level engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Document header settings
    pub document: DocumentConfig,
    /// ITP row template
    pub itp: ItpTemplate,
    /// Session cache sizing
    pub cache: CacheConfig,
}

impl EngineConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from TOML text
    ///
    /// # Errors
    /// Returns error if TOML is malformed or values are invalid
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from TOML file
    ///
    /// # Errors
    /// Returns error if the file cannot be read or parsed
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&raw)?;
        tracing::debug!("Loaded engine config from {}", path.display());
        Ok(config)
    }

    /// Check values
    ///
    /// # Errors
    /// Returns [`ConfigError::Invalid`] naming the offending field
    pub fn validate(&self) -> Result<(), ConfigError> {
        let codes = &self.itp.responsibility;
        for (field, code) in [
            ("contractor", &codes.contractor),
            ("consultant", &codes.consultant),
            ("client", &codes.client),
        ] {
            if code.trim().is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "itp.responsibility.{field} must not be empty"
                )));
            }
        }
        if self.cache.max_capacity == 0 {
            return Err(ConfigError::Invalid(
                "cache.max_capacity must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// With ITP template
    #[inline]
    #[must_use]
    pub fn with_itp(mut self, itp: ItpTemplate) -> Self {
        self.itp = itp;
        self
    }

    /// With document revision
    #[inline]
    #[must_use]
    pub fn with_revision(mut self, revision: impl Into<String>) -> Self {
        self.document.revision = revision.into();
        self
    }
}

/// Document header settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentConfig {
    /// ITP title
    pub itp_title: String,
    /// MOS title
    pub mos_title: String,
    /// Revision label
    pub revision: String,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            itp_title: "Inspection and Test Plan".to_string(),
            mos_title: "Method of Statement".to_string(),
            revision: "00".to_string(),
        }
    }
}

/// Fixed column content of every ITP row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItpTemplate {
    /// Test method column
    pub test_method: String,
    /// Reference standard column
    pub reference_standard: String,
    /// Acceptance criteria column
    pub acceptance_criteria: String,
    /// Verifying document column
    pub verifying_document: String,
    /// Responsibility codes
    pub responsibility: ResponsibilityCodes,
}

impl Default for ItpTemplate {
    fn default() -> Self {
        Self {
            test_method: "As per approved test procedure".to_string(),
            reference_standard: "IEC / manufacturer recommendation".to_string(),
            acceptance_criteria: "As per manufacturer data and relevant IEC standard".to_string(),
            verifying_document: "Test report".to_string(),
            responsibility: ResponsibilityCodes::default(),
        }
    }
}

/// Inspection involvement per party
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponsibilityCodes {
    /// Contractor code (hold point)
    pub contractor: String,
    /// Consultant code (witness)
    pub consultant: String,
    /// Client code (review)
    pub client: String,
}

impl Default for ResponsibilityCodes {
    fn default() -> Self {
        Self {
            contractor: "H".to_string(),
            consultant: "W".to_string(),
            client: "R".to_string(),
        }
    }
}

/// Session cache sizing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Maximum cached projects
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { max_capacity: 256 }
    }
}
