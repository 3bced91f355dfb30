//! Selection resolver
//!
//! Turns a project's raw equipment selections into ordered catalog sublists.
//! Pairs are visited EV → HV → MV → LV and, within a voltage,
//! Swgr → Trafo → Cable → Rmu. Within a pair the catalog order wins over the
//! order the values were selected in. Values the catalog does not offer are
//! dropped; [`crate::diagnostics`] reports them separately.

use itpgen_catalog::{Catalog, CatalogEntry, EquipmentPair};
use itpgen_project::{EquipmentSelection, Project};
use serde::Serialize;

/// Matched catalog entries for one pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedGroup {
    /// Voltage and equipment class
    pub pair: EquipmentPair,
    /// Matched entries in catalog order
    pub entries: Vec<&'static CatalogEntry>,
}

impl ResolvedGroup {
    /// Number of matched entries
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing matched
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Matched values in catalog order
    pub fn values(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|e| e.value)
    }
}

/// Resolution result: only pairs with at least one match, in processing order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Resolution {
    groups: Vec<ResolvedGroup>,
}

impl Resolution {
    /// Matched groups
    #[inline]
    #[must_use]
    pub fn groups(&self) -> &[ResolvedGroup] {
        &self.groups
    }

    /// Group for pair, if it matched anything
    #[must_use]
    pub fn group(&self, pair: EquipmentPair) -> Option<&ResolvedGroup> {
        self.groups.iter().find(|g| g.pair == pair)
    }

    /// Total matched catalog entries
    #[must_use]
    pub fn activity_count(&self) -> usize {
        self.groups.iter().map(ResolvedGroup::len).sum()
    }

    /// Check if no pair matched
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Filter one catalog by a selection
///
/// Catalog order is kept. A value selected twice yields one entry.
#[must_use]
pub fn resolve_selection(
    catalog: &Catalog,
    selection: &EquipmentSelection,
) -> Vec<&'static CatalogEntry> {
    catalog
        .entries()
        .iter()
        .filter(|entry| selection.contains(entry.value))
        .collect()
}

/// Resolve every pair of a project
#[must_use]
pub fn resolve(project: &Project) -> Resolution {
    let mut groups = Vec::new();

    for pair in EquipmentPair::ALL {
        let selection = project.selection(pair);
        if selection.is_empty() {
            continue;
        }

        let catalog = Catalog::for_pair(pair);
        let entries = resolve_selection(&catalog, selection);
        let unmatched = selection
            .values()
            .filter(|value| !catalog.contains(value))
            .count();
        if unmatched > 0 {
            tracing::debug!("{}: {} selected value(s) not in catalog", pair, unmatched);
        }

        if entries.is_empty() {
            continue;
        }
        tracing::debug!("{}: resolved {} activities", pair, entries.len());
        groups.push(ResolvedGroup { pair, entries });
    }

    Resolution { groups }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itpgen_catalog::{EquipmentClass, Voltage};

    fn pair(voltage: Voltage, class: EquipmentClass) -> EquipmentPair {
        EquipmentPair::new(voltage, class)
    }

    fn project_with(selections: &[(EquipmentPair, &[&str])]) -> Project {
        selections
            .iter()
            .fold(Project::new("p1", "Acme"), |project, (pair, values)| {
                project.with_selection(*pair, EquipmentSelection::from_values(values.iter().copied()))
            })
    }

    #[test]
    fn catalog_order_wins_over_selection_order() {
        let lv_swgr = pair(Voltage::Lv, EquipmentClass::Swgr);
        let project = project_with(&[(lv_swgr, &["CT", "CB"])]);

        let resolution = resolve(&project);
        let values: Vec<_> = resolution.group(lv_swgr).unwrap().values().collect();
        assert_eq!(values, vec!["CB", "CT"]);
    }

    #[test]
    fn unknown_values_are_dropped() {
        let lv_swgr = pair(Voltage::Lv, EquipmentClass::Swgr);
        let project = project_with(&[(lv_swgr, &["CT", "Nonexistent"])]);

        let values: Vec<_> = resolve(&project).group(lv_swgr).unwrap().values().collect();
        assert_eq!(values, vec!["CT"]);
    }

    #[test]
    fn pair_without_matches_is_omitted() {
        let lv_swgr = pair(Voltage::Lv, EquipmentClass::Swgr);
        let project = project_with(&[(lv_swgr, &["Nonexistent"])]);

        let resolution = resolve(&project);
        assert!(resolution.is_empty());
        assert!(resolution.group(lv_swgr).is_none());
    }

    #[test]
    fn duplicates_do_not_duplicate_entries() {
        let hv_trafo = pair(Voltage::Hv, EquipmentClass::Trafo);
        let project = project_with(&[(hv_trafo, &["IR", "IR", "TTR"])]);

        let values: Vec<_> = resolve(&project).group(hv_trafo).unwrap().values().collect();
        assert_eq!(values, vec!["IR", "TTR"]);
    }

    #[test]
    fn pairs_follow_processing_order() {
        let project = project_with(&[
            (pair(Voltage::Lv, EquipmentClass::Cable), &["IR"]),
            (pair(Voltage::Hv, EquipmentClass::Rmu), &["CB"]),
            (pair(Voltage::Hv, EquipmentClass::Swgr), &["CB"]),
            (pair(Voltage::Ev, EquipmentClass::Trafo), &["IR"]),
        ]);

        let order: Vec<_> = resolve(&project)
            .groups()
            .iter()
            .map(|g| g.pair.stored_key())
            .collect();
        assert_eq!(order, vec!["evTrafo", "hvSwgr", "hvRmu", "lvCable"]);
    }

    #[test]
    fn empty_project_resolves_to_nothing() {
        let resolution = resolve(&Project::new("p1", "Acme"));
        assert!(resolution.is_empty());
        assert_eq!(resolution.activity_count(), 0);
    }

    #[test]
    fn resolution_is_idempotent() {
        let project = project_with(&[
            (pair(Voltage::Mv, EquipmentClass::Cable), &["PD", "IR", "VLF"]),
            (pair(Voltage::Lv, EquipmentClass::Swgr), &["K", "CB"]),
        ]);
        assert_eq!(resolve(&project), resolve(&project));
        assert_eq!(resolve(&project).activity_count(), 5);
    }
}
