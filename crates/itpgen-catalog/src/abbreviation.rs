//! Display abbreviations for voltages, classes and pairs
//!
//! The typed accessors are total. [`abbreviation`] serves callers that only
//! hold a stored key (`"LVSWGR"`, `"lv_swgr"`, `"EV"`).

use crate::equipment::{EquipmentClass, EquipmentPair, Voltage};

impl Voltage {
    /// Display abbreviation
    #[inline]
    #[must_use]
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Voltage::Ev => "EHV",
            Voltage::Hv => "HV",
            Voltage::Mv => "MV",
            Voltage::Lv => "LV",
        }
    }
}

impl EquipmentClass {
    /// Display abbreviation
    #[inline]
    #[must_use]
    pub const fn abbreviation(self) -> &'static str {
        match self {
            EquipmentClass::Swgr => "SWGR",
            EquipmentClass::Trafo => "TRF",
            EquipmentClass::Cable => "CBL",
            EquipmentClass::Rmu => "RMU",
        }
    }
}

impl EquipmentPair {
    /// Display abbreviation (`LV SWGR`)
    #[must_use]
    pub const fn abbreviation(self) -> &'static str {
        use EquipmentClass::{Cable, Rmu, Swgr, Trafo};
        use Voltage::{Ev, Hv, Lv, Mv};

        match (self.voltage, self.class) {
            (Ev, Swgr) => "EHV SWGR",
            (Ev, Trafo) => "EHV TRF",
            (Ev, Cable) => "EHV CBL",
            (Ev, Rmu) => "EHV RMU",
            (Hv, Swgr) => "HV SWGR",
            (Hv, Trafo) => "HV TRF",
            (Hv, Cable) => "HV CBL",
            (Hv, Rmu) => "HV RMU",
            (Mv, Swgr) => "MV SWGR",
            (Mv, Trafo) => "MV TRF",
            (Mv, Cable) => "MV CBL",
            (Mv, Rmu) => "MV RMU",
            (Lv, Swgr) => "LV SWGR",
            (Lv, Trafo) => "LV TRF",
            (Lv, Cable) => "LV CBL",
            (Lv, Rmu) => "LV RMU",
        }
    }
}

/// Look up the abbreviation for a voltage, class or pair key
///
/// Keys are normalised by uppercasing and removing `_`, `-` and spaces, so
/// `"lvSwgr"`, `"LV_SWGR"` and `"LVSWGR"` all resolve to `"LV SWGR"`. Extra
/// high voltage is accepted as either `EV` or `EHV`.
#[must_use]
pub fn abbreviation(key: &str) -> Option<&'static str> {
    let normalized: String = key
        .chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .map(|c| c.to_ascii_uppercase())
        .collect();

    if let Ok(voltage) = normalized.parse::<Voltage>() {
        return Some(voltage.abbreviation());
    }
    if let Ok(class) = normalized.parse::<EquipmentClass>() {
        return Some(class.abbreviation());
    }
    normalized
        .parse::<EquipmentPair>()
        .ok()
        .map(EquipmentPair::abbreviation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_abbreviations() {
        assert_eq!(Voltage::Ev.abbreviation(), "EHV");
        assert_eq!(EquipmentClass::Trafo.abbreviation(), "TRF");
        assert_eq!(
            EquipmentPair::new(Voltage::Lv, EquipmentClass::Swgr).abbreviation(),
            "LV SWGR"
        );
    }

    #[test]
    fn key_lookup() {
        assert_eq!(abbreviation("EV"), Some("EHV"));
        assert_eq!(abbreviation("SWGR"), Some("SWGR"));
        assert_eq!(abbreviation("LVSWGR"), Some("LV SWGR"));
        assert_eq!(abbreviation("lv_swgr"), Some("LV SWGR"));
        assert_eq!(abbreviation("hvTrafo"), Some("HV TRF"));
        assert_eq!(abbreviation("XYZ"), None);
        assert_eq!(abbreviation(""), None);
    }

    #[test]
    fn extra_high_voltage_keys() {
        assert_eq!(abbreviation("EHV"), Some("EHV"));
        assert_eq!(abbreviation("ehv"), Some("EHV"));
        assert_eq!(abbreviation("EHV_SWGR"), Some("EHV SWGR"));
        assert_eq!(abbreviation("EHVSWGR"), Some("EHV SWGR"));
        assert_eq!(abbreviation("EVTRAFO"), Some("EHV TRF"));
        assert_eq!(abbreviation("evCable"), Some("EHV CBL"));
    }

    #[test]
    fn pair_abbreviation_starts_with_voltage() {
        for pair in EquipmentPair::ALL {
            assert!(pair.abbreviation().starts_with(pair.voltage.abbreviation()));
            assert!(pair.abbreviation().ends_with(pair.class.abbreviation()));
        }
    }
}
