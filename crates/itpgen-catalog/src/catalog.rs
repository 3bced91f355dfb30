//! Static activity catalogs
//!
//! One ordered table per [`EquipmentPair`]. Catalog order is the display
//! order of matched activities in both documents.

use crate::activity::{Activity, CableActivity, RmuActivity, SwgrActivity, TrafoActivity};
use crate::equipment::{EquipmentClass, EquipmentPair, Voltage};
use serde::Serialize;

/// A `{label, value}` catalog row bound to its typed activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CatalogEntry {
    /// Display label
    pub label: &'static str,
    /// Value stored in project selections
    pub value: &'static str,
    /// Typed activity
    #[serde(skip)]
    pub activity: Activity,
}

impl CatalogEntry {
    /// Build entry from activity
    #[inline]
    #[must_use]
    pub const fn of(activity: Activity) -> Self {
        Self {
            label: activity.label(),
            value: activity.value(),
            activity,
        }
    }
}

/// Ordered catalog for one pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Catalog {
    pair: EquipmentPair,
    entries: &'static [CatalogEntry],
}

impl Catalog {
    /// Catalog for pair
    #[inline]
    #[must_use]
    pub fn for_pair(pair: EquipmentPair) -> Self {
        Self {
            pair,
            entries: entries(pair),
        }
    }

    /// All 16 catalogs in processing order
    pub fn all() -> impl Iterator<Item = Catalog> {
        EquipmentPair::ALL.into_iter().map(Catalog::for_pair)
    }

    /// Pair this catalog belongs to
    #[inline]
    #[must_use]
    pub fn pair(&self) -> EquipmentPair {
        self.pair
    }

    /// Entries in catalog order
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &'static [CatalogEntry] {
        self.entries
    }

    /// Find entry by value
    #[must_use]
    pub fn find(&self, value: &str) -> Option<&'static CatalogEntry> {
        self.entries.iter().find(|e| e.value == value)
    }

    /// Check whether value is offered by this catalog
    #[inline]
    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        self.find(value).is_some()
    }

    /// Number of entries
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if catalog is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Entries of the catalog for pair
#[must_use]
pub fn entries(pair: EquipmentPair) -> &'static [CatalogEntry] {
    use EquipmentClass::{Cable, Rmu, Swgr, Trafo};
    use Voltage::{Ev, Hv, Lv, Mv};

    match (pair.voltage, pair.class) {
        (Ev, Swgr) => EV_SWGR,
        (Ev, Trafo) => EV_TRAFO,
        (Ev, Cable) => EV_CABLE,
        (Ev, Rmu) => EV_RMU,
        (Hv, Swgr) => HV_SWGR,
        (Hv, Trafo) => HV_TRAFO,
        (Hv, Cable) => HV_CABLE,
        (Hv, Rmu) => HV_RMU,
        (Mv, Swgr) => MV_SWGR,
        (Mv, Trafo) => MV_TRAFO,
        (Mv, Cable) => MV_CABLE,
        (Mv, Rmu) => MV_RMU,
        (Lv, Swgr) => LV_SWGR,
        (Lv, Trafo) => LV_TRAFO,
        (Lv, Cable) => LV_CABLE,
        (Lv, Rmu) => LV_RMU,
    }
}

const fn swgr(a: SwgrActivity) -> CatalogEntry {
    CatalogEntry::of(Activity::Swgr(a))
}

const fn trafo(a: TrafoActivity) -> CatalogEntry {
    CatalogEntry::of(Activity::Trafo(a))
}

const fn cable(a: CableActivity) -> CatalogEntry {
    CatalogEntry::of(Activity::Cable(a))
}

const fn rmu(a: RmuActivity) -> CatalogEntry {
    CatalogEntry::of(Activity::Rmu(a))
}

// Switchgear

/// EV switchgear (GIS / AIS bays)
pub const EV_SWGR: &[CatalogEntry] = &[
    swgr(SwgrActivity::Disconnector),
    swgr(SwgrActivity::EarthSwitch),
    swgr(SwgrActivity::CircuitBreaker),
    swgr(SwgrActivity::CurrentTransformer),
    swgr(SwgrActivity::PotentialTransformer),
    swgr(SwgrActivity::SurgeArrester),
    swgr(SwgrActivity::ProtectionRelay),
    swgr(SwgrActivity::Busbar),
    swgr(SwgrActivity::Interlocking),
];

/// HV switchgear
pub const HV_SWGR: &[CatalogEntry] = &[
    swgr(SwgrActivity::CircuitBreaker),
    swgr(SwgrActivity::Disconnector),
    swgr(SwgrActivity::EarthSwitch),
    swgr(SwgrActivity::CurrentTransformer),
    swgr(SwgrActivity::PotentialTransformer),
    swgr(SwgrActivity::SurgeArrester),
    swgr(SwgrActivity::ProtectionRelay),
    swgr(SwgrActivity::Busbar),
    swgr(SwgrActivity::Interlocking),
];

/// MV switchgear
pub const MV_SWGR: &[CatalogEntry] = &[
    swgr(SwgrActivity::CircuitBreaker),
    swgr(SwgrActivity::CurrentTransformer),
    swgr(SwgrActivity::PotentialTransformer),
    swgr(SwgrActivity::ProtectionRelay),
    swgr(SwgrActivity::Busbar),
    swgr(SwgrActivity::EnergyMeter),
    swgr(SwgrActivity::Interlocking),
];

/// LV switchgear / MCC panels
pub const LV_SWGR: &[CatalogEntry] = &[
    swgr(SwgrActivity::CircuitBreaker),
    swgr(SwgrActivity::ProtectionRelay),
    swgr(SwgrActivity::CurrentTransformer),
    swgr(SwgrActivity::PotentialTransformer),
    swgr(SwgrActivity::MiniatureCircuitBreaker),
    swgr(SwgrActivity::Contactor),
];

// Transformers

/// EV power transformer
pub const EV_TRAFO: &[CatalogEntry] = &[
    trafo(TrafoActivity::InsulationResistance),
    trafo(TrafoActivity::WindingResistance),
    trafo(TrafoActivity::TurnsRatio),
    trafo(TrafoActivity::VectorGroup),
    trafo(TrafoActivity::MagnetisingCurrent),
    trafo(TrafoActivity::TanDelta),
    trafo(TrafoActivity::FrequencyResponse),
    trafo(TrafoActivity::TapChanger),
    trafo(TrafoActivity::OilBreakdown),
    trafo(TrafoActivity::BushingCt),
    trafo(TrafoActivity::TemperatureIndicators),
    trafo(TrafoActivity::BuchholzRelay),
];

/// HV power transformer
pub const HV_TRAFO: &[CatalogEntry] = &[
    trafo(TrafoActivity::InsulationResistance),
    trafo(TrafoActivity::WindingResistance),
    trafo(TrafoActivity::TurnsRatio),
    trafo(TrafoActivity::VectorGroup),
    trafo(TrafoActivity::MagnetisingCurrent),
    trafo(TrafoActivity::TanDelta),
    trafo(TrafoActivity::FrequencyResponse),
    trafo(TrafoActivity::TapChanger),
    trafo(TrafoActivity::OilBreakdown),
    trafo(TrafoActivity::BushingCt),
    trafo(TrafoActivity::TemperatureIndicators),
    trafo(TrafoActivity::BuchholzRelay),
];

/// MV distribution transformer
pub const MV_TRAFO: &[CatalogEntry] = &[
    trafo(TrafoActivity::InsulationResistance),
    trafo(TrafoActivity::WindingResistance),
    trafo(TrafoActivity::TurnsRatio),
    trafo(TrafoActivity::VectorGroup),
    trafo(TrafoActivity::MagnetisingCurrent),
    trafo(TrafoActivity::OilBreakdown),
    trafo(TrafoActivity::TemperatureIndicators),
    trafo(TrafoActivity::BuchholzRelay),
    trafo(TrafoActivity::NeutralEarthingResistor),
];

/// LV (dry type / auxiliary) transformer
pub const LV_TRAFO: &[CatalogEntry] = &[
    trafo(TrafoActivity::InsulationResistance),
    trafo(TrafoActivity::WindingResistance),
    trafo(TrafoActivity::TurnsRatio),
    trafo(TrafoActivity::VectorGroup),
];

// Cables

/// EV cable
pub const EV_CABLE: &[CatalogEntry] = &[
    cable(CableActivity::InsulationResistance),
    cable(CableActivity::SheathIntegrity),
    cable(CableActivity::AcResonantWithstand),
    cable(CableActivity::PartialDischarge),
    cable(CableActivity::ConductorResistance),
    cable(CableActivity::Phasing),
];

/// HV cable
pub const HV_CABLE: &[CatalogEntry] = &[
    cable(CableActivity::InsulationResistance),
    cable(CableActivity::SheathIntegrity),
    cable(CableActivity::AcResonantWithstand),
    cable(CableActivity::PartialDischarge),
    cable(CableActivity::TanDelta),
    cable(CableActivity::Phasing),
];

/// MV cable
pub const MV_CABLE: &[CatalogEntry] = &[
    cable(CableActivity::InsulationResistance),
    cable(CableActivity::VlfWithstand),
    cable(CableActivity::SheathIntegrity),
    cable(CableActivity::TanDelta),
    cable(CableActivity::PartialDischarge),
    cable(CableActivity::Phasing),
];

/// LV cable
pub const LV_CABLE: &[CatalogEntry] = &[
    cable(CableActivity::InsulationResistance),
    cable(CableActivity::ConductorResistance),
    cable(CableActivity::Phasing),
];

// Ring main units

/// EV ring main unit
pub const EV_RMU: &[CatalogEntry] = &[
    rmu(RmuActivity::LoadBreakSwitch),
    rmu(RmuActivity::EarthSwitch),
    rmu(RmuActivity::CurrentTransformer),
    rmu(RmuActivity::ProtectionRelay),
    rmu(RmuActivity::GasPressure),
];

/// HV ring main unit
pub const HV_RMU: &[CatalogEntry] = &[
    rmu(RmuActivity::CircuitBreaker),
    rmu(RmuActivity::LoadBreakSwitch),
    rmu(RmuActivity::EarthSwitch),
    rmu(RmuActivity::CurrentTransformer),
    rmu(RmuActivity::ProtectionRelay),
    rmu(RmuActivity::GasPressure),
];

/// MV ring main unit
pub const MV_RMU: &[CatalogEntry] = &[
    rmu(RmuActivity::CircuitBreaker),
    rmu(RmuActivity::LoadBreakSwitch),
    rmu(RmuActivity::EarthSwitch),
    rmu(RmuActivity::CurrentTransformer),
    rmu(RmuActivity::ProtectionRelay),
    rmu(RmuActivity::VoltagePresence),
    rmu(RmuActivity::HighVoltageWithstand),
    rmu(RmuActivity::ContactResistance),
    rmu(RmuActivity::GasPressure),
];

/// LV ring main unit
pub const LV_RMU: &[CatalogEntry] = &[
    rmu(RmuActivity::LoadBreakSwitch),
    rmu(RmuActivity::EarthSwitch),
    rmu(RmuActivity::ContactResistance),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_pair_has_a_catalog() {
        let catalogs: Vec<_> = Catalog::all().collect();
        assert_eq!(catalogs.len(), 16);
        for catalog in catalogs {
            assert!(!catalog.is_empty(), "{} catalog is empty", catalog.pair());
        }
    }

    #[test]
    fn values_unique_within_catalog() {
        for catalog in Catalog::all() {
            let mut seen = HashSet::new();
            for entry in catalog.entries() {
                assert!(
                    seen.insert(entry.value),
                    "duplicate value {} in {}",
                    entry.value,
                    catalog.pair()
                );
            }
        }
    }

    #[test]
    fn entries_belong_to_catalog_class() {
        for catalog in Catalog::all() {
            for entry in catalog.entries() {
                assert_eq!(entry.activity.class(), catalog.pair().class);
                assert_eq!(entry.value, entry.activity.value());
                assert_eq!(entry.label, entry.activity.label());
            }
        }
    }

    #[test]
    fn lv_switchgear_order() {
        let catalog = Catalog::for_pair(EquipmentPair::new(Voltage::Lv, EquipmentClass::Swgr));
        let values: Vec<_> = catalog.entries().iter().map(|e| e.value).collect();
        assert_eq!(values, ["CB", "Relay", "CT", "PT", "MCB", "K"]);
    }

    #[test]
    fn find_by_value() {
        let catalog = Catalog::for_pair(EquipmentPair::new(Voltage::Mv, EquipmentClass::Rmu));
        let entry = catalog.find("VPIS").unwrap();
        assert_eq!(entry.label, "Voltage Presence Indicating System");
        assert!(catalog.find("MCB").is_none());
        assert!(!catalog.contains("cb"));
    }
}
