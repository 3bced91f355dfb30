//! Selection diagnostics
//!
//! The resolver drops selected values the catalog does not offer and
//! collapses duplicates without saying so. This pass reports both. It reads
//! the project only and never changes what the resolver produces.

use itpgen_catalog::{Catalog, EquipmentPair};
use itpgen_project::Project;
use serde::Serialize;
use std::fmt;

/// A selected value the pair's catalog does not offer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnmatchedValue {
    /// Pair the value was selected under
    pub pair: EquipmentPair,
    /// Selected value
    pub value: String,
    /// Label stored with the value, possibly empty
    pub label: String,
}

/// A value selected more than once for the same pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateValue {
    /// Pair the value was selected under
    pub pair: EquipmentPair,
    /// Selected value
    pub value: String,
    /// Times it appears
    pub count: usize,
}

/// Findings of [`validate_selections`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectionReport {
    /// Values absent from their catalog, once per pair, in processing order
    pub unmatched: Vec<UnmatchedValue>,
    /// Values selected more than once
    pub duplicates: Vec<DuplicateValue>,
}

impl SelectionReport {
    /// Check if nothing was found
    #[inline]
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.unmatched.is_empty() && self.duplicates.is_empty()
    }

    /// Total findings
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.unmatched.len() + self.duplicates.len()
    }

    /// Check if the report has no findings
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.is_clean()
    }
}

impl fmt::Display for SelectionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_clean() {
            return f.write_str("all selections match their catalogs");
        }
        for u in &self.unmatched {
            writeln!(f, "{}: '{}' is not in the catalog", u.pair, u.value)?;
        }
        for d in &self.duplicates {
            writeln!(f, "{}: '{}' selected {} times", d.pair, d.value, d.count)?;
        }
        Ok(())
    }
}

/// Check every selection of a project against its catalog
#[must_use]
pub fn validate_selections(project: &Project) -> SelectionReport {
    let mut report = SelectionReport::default();

    for pair in EquipmentPair::ALL {
        let selection = project.selection(pair);
        if selection.is_empty() {
            continue;
        }
        let catalog = Catalog::for_pair(pair);

        let mut seen: Vec<(&str, usize)> = Vec::new();
        for entry in selection.iter() {
            if let Some((_, count)) = seen.iter_mut().find(|(value, _)| *value == entry.value) {
                *count += 1;
                continue;
            }
            seen.push((&entry.value, 1));

            if !catalog.contains(&entry.value) {
                tracing::warn!("{}: selected value '{}' is not in the catalog", pair, entry.value);
                report.unmatched.push(UnmatchedValue {
                    pair,
                    value: entry.value.clone(),
                    label: entry.label.clone(),
                });
            }
        }

        for (value, count) in seen.into_iter().filter(|(_, count)| *count > 1) {
            tracing::warn!("{}: value '{}' selected {} times", pair, value, count);
            report.duplicates.push(DuplicateValue {
                pair,
                value: value.to_string(),
                count,
            });
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::resolve;
    use itpgen_catalog::{EquipmentClass, Voltage};
    use itpgen_project::{EquipmentSelection, SelectionEntry};

    #[test]
    fn clean_project() {
        let project = Project::new("p1", "Acme").with_selection(
            EquipmentPair::new(Voltage::Lv, EquipmentClass::Swgr),
            EquipmentSelection::from_values(["CB", "CT"]),
        );
        let report = validate_selections(&project);
        assert!(report.is_clean());
        assert_eq!(report.len(), 0);
        assert_eq!(report.to_string(), "all selections match their catalogs");
    }

    #[test]
    fn reports_unmatched_with_label() {
        let lv_swgr = EquipmentPair::new(Voltage::Lv, EquipmentClass::Swgr);
        let selection: EquipmentSelection = [
            SelectionEntry::new("CT"),
            SelectionEntry::new("Nonexistent").with_label("Legacy test"),
        ]
        .into_iter()
        .collect();
        let project = Project::new("p1", "Acme").with_selection(lv_swgr, selection);

        let report = validate_selections(&project);
        assert_eq!(
            report.unmatched,
            vec![UnmatchedValue {
                pair: lv_swgr,
                value: "Nonexistent".to_string(),
                label: "Legacy test".to_string(),
            }]
        );
        assert!(report.duplicates.is_empty());
        assert!(report.to_string().contains("lvSwgr: 'Nonexistent'"));
    }

    #[test]
    fn reports_duplicates_once_per_value() {
        let hv_cable = EquipmentPair::new(Voltage::Hv, EquipmentClass::Cable);
        let project = Project::new("p1", "Acme").with_selection(
            hv_cable,
            EquipmentSelection::from_values(["IR", "PD", "IR", "IR"]),
        );

        let report = validate_selections(&project);
        assert_eq!(
            report.duplicates,
            vec![DuplicateValue {
                pair: hv_cable,
                value: "IR".to_string(),
                count: 3,
            }]
        );
    }

    #[test]
    fn repeated_unknown_value_is_unmatched_once() {
        let lv_swgr = EquipmentPair::new(Voltage::Lv, EquipmentClass::Swgr);
        let project = Project::new("p1", "Acme").with_selection(
            lv_swgr,
            EquipmentSelection::from_values(["Bogus", "CB", "Bogus"]),
        );

        let report = validate_selections(&project);
        assert_eq!(report.unmatched.len(), 1);
        assert_eq!(report.unmatched[0].value, "Bogus");
        assert_eq!(
            report.duplicates,
            vec![DuplicateValue {
                pair: lv_swgr,
                value: "Bogus".to_string(),
                count: 2,
            }]
        );
        assert_eq!(report.len(), 2);
    }

    #[test]
    fn validation_does_not_change_resolution() {
        let project = Project::new("p1", "Acme").with_selection(
            EquipmentPair::new(Voltage::Mv, EquipmentClass::Rmu),
            EquipmentSelection::from_values(["SF6", "Bogus", "CB", "CB"]),
        );

        let before = resolve(&project);
        let report = validate_selections(&project);
        let after = resolve(&project);

        assert_eq!(before, after);
        assert_eq!(report.len(), 2);
        assert_eq!(after.activity_count(), 2);
    }
}
