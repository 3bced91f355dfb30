//! itpgen Catalog
//!
//! Static commissioning vocabulary: voltage levels, equipment classes, the
//! 16 ordered activity catalogs, method-of-statement bodies and display
//! abbreviations.
//!
//! # Example
//!
//! ```rust
//! use itpgen_catalog::{Catalog, EquipmentClass, EquipmentPair, Voltage};
//!
//! let catalog = Catalog::for_pair(EquipmentPair::new(Voltage::Lv, EquipmentClass::Swgr));
//! let entry = catalog.find("CB").unwrap();
//!
//! assert_eq!(entry.label, "Circuit Breaker");
//! assert!(!entry.activity.mos_body().procedure.is_empty());
//! ```

#![warn(missing_docs)]

pub mod abbreviation;
pub mod activity;
pub mod bodies;
pub mod catalog;
pub mod equipment;
pub mod error;

// Re-exports
pub use abbreviation::abbreviation;
pub use activity::{
    Activity, CableActivity, HeaderCheck, PlanItem, RmuActivity, SwgrActivity, TrafoActivity,
    HEADER_CHECK_COUNT,
};
pub use bodies::MosBody;
pub use catalog::{Catalog, CatalogEntry};
pub use equipment::{EquipmentClass, EquipmentPair, Voltage};
pub use error::CatalogError;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for catalog lookups
    pub use crate::{
        Activity, Catalog, CatalogEntry, EquipmentClass, EquipmentPair, HeaderCheck, MosBody,
        PlanItem, Voltage,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
