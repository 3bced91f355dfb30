//! Voltage levels, equipment classes and the pairs they form
//!
//! Every catalog, selection and document section is addressed by an
//! [`EquipmentPair`]. The `ALL` constants define the fixed processing order
//! used for resolution and numbering: EV → HV → MV → LV, and within a voltage
//! Swgr → Trafo → Cable → Rmu.

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Voltage level grouping equipment selections
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Voltage {
    /// Extra high voltage
    Ev,
    /// High voltage
    Hv,
    /// Medium voltage
    Mv,
    /// Low voltage
    Lv,
}

impl Voltage {
    /// All voltage levels in processing order
    pub const ALL: [Voltage; 4] = [Voltage::Ev, Voltage::Hv, Voltage::Mv, Voltage::Lv];

    /// Lowercase key used as the stored field prefix (`ev`, `hv`, ...)
    #[inline]
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Voltage::Ev => "ev",
            Voltage::Hv => "hv",
            Voltage::Mv => "mv",
            Voltage::Lv => "lv",
        }
    }

    /// Uppercase code (`EV`, `HV`, ...)
    #[inline]
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Voltage::Ev => "EV",
            Voltage::Hv => "HV",
            Voltage::Mv => "MV",
            Voltage::Lv => "LV",
        }
    }

    /// Long display name
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Voltage::Ev => "Extra High Voltage",
            Voltage::Hv => "High Voltage",
            Voltage::Mv => "Medium Voltage",
            Voltage::Lv => "Low Voltage",
        }
    }
}

impl fmt::Display for Voltage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Voltage {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "EV" | "EHV" => Ok(Voltage::Ev),
            "HV" => Ok(Voltage::Hv),
            "MV" => Ok(Voltage::Mv),
            "LV" => Ok(Voltage::Lv),
            _ => Err(CatalogError::UnknownVoltage(s.to_string())),
        }
    }
}

/// Equipment class within a voltage group
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EquipmentClass {
    /// Switchgear panels
    Swgr,
    /// Power transformers
    Trafo,
    /// Power cables
    Cable,
    /// Ring main units
    Rmu,
}

impl EquipmentClass {
    /// All classes in processing order
    pub const ALL: [EquipmentClass; 4] = [
        EquipmentClass::Swgr,
        EquipmentClass::Trafo,
        EquipmentClass::Cable,
        EquipmentClass::Rmu,
    ];

    /// Lowercase key (`swgr`, `trafo`, ...)
    #[inline]
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            EquipmentClass::Swgr => "swgr",
            EquipmentClass::Trafo => "trafo",
            EquipmentClass::Cable => "cable",
            EquipmentClass::Rmu => "rmu",
        }
    }

    /// Capitalised suffix used in stored pair keys (`lvSwgr`)
    #[inline]
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            EquipmentClass::Swgr => "Swgr",
            EquipmentClass::Trafo => "Trafo",
            EquipmentClass::Cable => "Cable",
            EquipmentClass::Rmu => "Rmu",
        }
    }

    /// Long display name
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            EquipmentClass::Swgr => "Switchgear",
            EquipmentClass::Trafo => "Power Transformer",
            EquipmentClass::Cable => "Power Cable",
            EquipmentClass::Rmu => "Ring Main Unit",
        }
    }
}

impl fmt::Display for EquipmentClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

impl FromStr for EquipmentClass {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "swgr" | "switchgear" => Ok(EquipmentClass::Swgr),
            "trafo" | "transformer" => Ok(EquipmentClass::Trafo),
            "cable" => Ok(EquipmentClass::Cable),
            "rmu" => Ok(EquipmentClass::Rmu),
            _ => Err(CatalogError::UnknownEquipmentClass(s.to_string())),
        }
    }
}

/// A (voltage, equipment-class) combination
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EquipmentPair {
    /// Voltage level
    pub voltage: Voltage,
    /// Equipment class
    pub class: EquipmentClass,
}

impl EquipmentPair {
    /// All 16 pairs in processing order
    pub const ALL: [EquipmentPair; 16] = {
        let mut pairs = [EquipmentPair::new(Voltage::Ev, EquipmentClass::Swgr); 16];
        let mut v = 0;
        while v < 4 {
            let mut c = 0;
            while c < 4 {
                pairs[v * 4 + c] = EquipmentPair::new(Voltage::ALL[v], EquipmentClass::ALL[c]);
                c += 1;
            }
            v += 1;
        }
        pairs
    };

    /// Create pair
    #[inline]
    #[must_use]
    pub const fn new(voltage: Voltage, class: EquipmentClass) -> Self {
        Self { voltage, class }
    }

    /// Stored key of the pair's selection (`lvSwgr`, `evTrafo`, ...)
    #[must_use]
    pub fn stored_key(self) -> String {
        format!("{}{}", self.voltage.key(), self.class.suffix())
    }

    /// Section title used by both documents (`LV Switchgear`)
    #[must_use]
    pub fn title(self) -> String {
        format!("{} {}", self.voltage.code(), self.class.name())
    }
}

impl fmt::Display for EquipmentPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.voltage.key(), self.class.suffix())
    }
}

impl FromStr for EquipmentPair {
    type Err = CatalogError;

    /// Parse a stored key such as `lvSwgr`, `HV_TRAFO` or `EHV_SWGR`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || CatalogError::UnknownPair(s.to_string());
        let trimmed = s.trim();

        // "EHV" before "EV" and "HV"
        let (voltage, rest) = ["EHV", "EV", "HV", "MV", "LV"]
            .into_iter()
            .find_map(|code| {
                let head = trimmed.get(..code.len())?;
                head.eq_ignore_ascii_case(code)
                    .then(|| (head, &trimmed[code.len()..]))
            })
            .ok_or_else(unknown)?;

        let class = rest.trim_start_matches(['_', '-', ' ']);
        if class.is_empty() {
            return Err(unknown());
        }
        let voltage = voltage.parse::<Voltage>().map_err(|_| unknown())?;
        let class = class.parse::<EquipmentClass>().map_err(|_| unknown())?;
        Ok(Self::new(voltage, class))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_follow_processing_order() {
        assert_eq!(EquipmentPair::ALL.len(), 16);
        assert_eq!(
            EquipmentPair::ALL[0],
            EquipmentPair::new(Voltage::Ev, EquipmentClass::Swgr)
        );
        assert_eq!(
            EquipmentPair::ALL[5],
            EquipmentPair::new(Voltage::Hv, EquipmentClass::Trafo)
        );
        assert_eq!(
            EquipmentPair::ALL[15],
            EquipmentPair::new(Voltage::Lv, EquipmentClass::Rmu)
        );

        let mut sorted = EquipmentPair::ALL;
        sorted.sort();
        assert_eq!(sorted, EquipmentPair::ALL);
    }

    #[test]
    fn stored_key_roundtrip() {
        for pair in EquipmentPair::ALL {
            let key = pair.stored_key();
            assert_eq!(key.parse::<EquipmentPair>().unwrap(), pair);
        }
        assert_eq!(
            "HV_TRAFO".parse::<EquipmentPair>().unwrap(),
            EquipmentPair::new(Voltage::Hv, EquipmentClass::Trafo)
        );
    }

    #[test]
    fn extra_high_voltage_prefix() {
        let ev_swgr = EquipmentPair::new(Voltage::Ev, EquipmentClass::Swgr);
        for key in ["EHV_SWGR", "EHVSWGR", "ehvSwgr", "ehv-switchgear", "EV_SWGR"] {
            assert_eq!(key.parse::<EquipmentPair>().unwrap(), ev_swgr, "{key}");
        }
        assert_eq!(
            "EHV TRAFO".parse::<EquipmentPair>().unwrap(),
            EquipmentPair::new(Voltage::Ev, EquipmentClass::Trafo)
        );
        assert!("EHV".parse::<EquipmentPair>().is_err());
        assert!("EH_SWGR".parse::<EquipmentPair>().is_err());
    }

    #[test]
    fn parse_rejects_unknown_keys() {
        assert!("xxSwgr".parse::<EquipmentPair>().is_err());
        assert!("lvFoo".parse::<EquipmentPair>().is_err());
        assert!("lv".parse::<EquipmentPair>().is_err());
        assert!("lv_".parse::<EquipmentPair>().is_err());
        assert!("äbSwgr".parse::<EquipmentPair>().is_err());
        assert!(matches!(
            "KV".parse::<Voltage>(),
            Err(CatalogError::UnknownVoltage(_))
        ));
    }

    #[test]
    fn titles() {
        let pair = EquipmentPair::new(Voltage::Lv, EquipmentClass::Swgr);
        assert_eq!(pair.title(), "LV Switchgear");
        assert_eq!(pair.to_string(), "lvSwgr");
    }
}
