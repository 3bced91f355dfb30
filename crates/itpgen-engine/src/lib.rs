//! itpgen Engine
//!
//! Generates commissioning documents from a project's equipment selections.
//!
//! # Pipeline
//!
//! ```text
//! Project selections
//!        ↓ resolver   (catalog order, silent filter, pairs EV → LV)
//! Resolution
//!        ↓ numbering  (gap-free sections, header checks at .1 / .2)
//! ActivityPlan
//!        ↓ itp / mos  (template columns, narrative bodies)
//! ItpDocument, MosDocument
//!        ↓ render
//! Markdown
//! ```
//!
//! # Example
//!
//! ```rust
//! use itpgen_catalog::{EquipmentClass, EquipmentPair, Voltage};
//! use itpgen_engine::{DocumentEngine, EngineConfig};
//! use itpgen_project::{EquipmentSelection, Project};
//!
//! let project = Project::new("p1", "Acme").with_selection(
//!     EquipmentPair::new(Voltage::Lv, EquipmentClass::Swgr),
//!     EquipmentSelection::from_values(["CB", "Relay"]),
//! );
//!
//! let engine = DocumentEngine::new(EngineConfig::default());
//! let itp = engine.itp(&project);
//!
//! let numbers: Vec<_> = itp.rows().map(|r| r.number.as_str()).collect();
//! assert_eq!(numbers, ["1.1", "1.2", "1.3", "1.4"]);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod config;
pub mod diagnostics;
pub mod document;
pub mod engine;
pub mod error;
pub mod itp;
pub mod mos;
pub mod numbering;
pub mod render;
pub mod resolver;

// Re-exports for convenience
pub use config::{CacheConfig, DocumentConfig, EngineConfig, ItpTemplate, ResponsibilityCodes};
pub use diagnostics::{validate_selections, DuplicateValue, SelectionReport, UnmatchedValue};
pub use document::DocumentHeader;
pub use engine::{DocumentEngine, DocumentSet};
pub use error::{ConfigError, EngineError};
pub use itp::{ItpDocument, ItpRow, ItpSection, Responsibility};
pub use mos::{MosDocument, MosSection, MosStep};
pub use numbering::{ActivityPlan, NumberedSection, Numbering, ResolvedActivity};
pub use render::{itp_markdown, mos_markdown};
pub use resolver::{resolve, Resolution, ResolvedGroup};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for document generation
    pub use crate::{
        ActivityPlan, DocumentEngine, DocumentSet, EngineConfig, EngineError, ItpDocument,
        MosDocument, SelectionReport,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
