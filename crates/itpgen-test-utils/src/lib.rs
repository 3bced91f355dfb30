//! Testing utilities for the itpgen workspace
//!
//! Shared project fixtures and store/session setup.

#![allow(missing_docs)]

use itpgen_catalog::{EquipmentClass, EquipmentPair, Voltage};
use itpgen_project::{
    EquipmentSelection, MemoryStore, Project, ProjectCache, ProjectSession, ProjectStatus,
};
use std::sync::Arc;

pub const TEST_PROJECT_ID: &str = "test-project";

pub fn pair(voltage: Voltage, class: EquipmentClass) -> EquipmentPair {
    EquipmentPair::new(voltage, class)
}

pub fn empty_project() -> Project {
    Project::new(TEST_PROJECT_ID, "Test Customer")
}

/// Project with a single non-empty selection
pub fn project_with(pair: EquipmentPair, values: &[&str]) -> Project {
    project_with_selections(&[(pair, values)])
}

pub fn project_with_selections(selections: &[(EquipmentPair, &[&str])]) -> Project {
    selections
        .iter()
        .fold(empty_project(), |project, (pair, values)| {
            project.with_selection(
                *pair,
                EquipmentSelection::from_values(values.iter().copied()),
            )
        })
}

/// `lvSwgr = [CB, Relay]`, everything else empty
pub fn lv_switchgear_project() -> Project {
    project_with(pair(Voltage::Lv, EquipmentClass::Swgr), &["CB", "Relay"])
}

/// Substation spanning every voltage, with unordered and unknown values
pub fn substation_project() -> Project {
    let mut project = project_with_selections(&[
        (pair(Voltage::Ev, EquipmentClass::Swgr), &["CB", "DS"]),
        (pair(Voltage::Hv, EquipmentClass::Trafo), &["TTR", "IR", "OLTC"]),
        (pair(Voltage::Mv, EquipmentClass::Cable), &["VLF", "Unknown"]),
        (pair(Voltage::Mv, EquipmentClass::Rmu), &["SF6", "CB"]),
        (pair(Voltage::Lv, EquipmentClass::Swgr), &["K", "CB", "CB"]),
    ]);
    project.customer_name = "Grid Substation Co".to_string();
    project.location = "Site 7".to_string();
    project.client = "Utility Authority".to_string();
    project.consultant = "Power Consult".to_string();
    project.status = ProjectStatus::Active;
    project
}

pub fn setup_test_store(projects: impl IntoIterator<Item = Project>) -> Arc<MemoryStore> {
    Arc::new(MemoryStore::from_projects(projects).unwrap())
}

pub fn setup_test_session(store: Arc<MemoryStore>) -> ProjectSession {
    ProjectSession::new(store, ProjectCache::new(16))
}
