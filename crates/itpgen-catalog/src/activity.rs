//! Typed activity vocabulary
//!
//! Each equipment class has a closed set of test/inspection activities. The
//! [`Activity`] tagged union ties an activity to its class so that every
//! per-activity lookup (label, catalog value, MOS body) is an exhaustive
//! `match` rather than a string-keyed map.

use crate::equipment::EquipmentClass;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of fixed header checks that open every document section
pub const HEADER_CHECK_COUNT: u32 = 2;

/// Fixed checks performed on every piece of equipment before catalog tests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeaderCheck {
    /// Verify rating plate against approved drawings
    NamePlate,
    /// Visual and mechanical inspection
    PhysicalInspection,
}

impl HeaderCheck {
    /// Header checks in section order
    pub const ALL: [HeaderCheck; HEADER_CHECK_COUNT as usize] =
        [HeaderCheck::NamePlate, HeaderCheck::PhysicalInspection];

    /// Display label
    #[inline]
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            HeaderCheck::NamePlate => "Name plate details",
            HeaderCheck::PhysicalInspection => "Physical inspection",
        }
    }
}

/// Switchgear activities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwgrActivity {
    /// Circuit Breaker (`CB`)
    CircuitBreaker,
    /// Protection Relay (`Relay`)
    ProtectionRelay,
    /// Current Transformer (`CT`)
    CurrentTransformer,
    /// Potential Transformer (`PT`)
    PotentialTransformer,
    /// Miniature Circuit Breaker (`MCB`)
    MiniatureCircuitBreaker,
    /// Contactor (`K`)
    Contactor,
    /// Disconnector (`DS`)
    Disconnector,
    /// Earth Switch (`ES`)
    EarthSwitch,
    /// Surge Arrester (`SA`)
    SurgeArrester,
    /// Busbar (`Busbar`)
    Busbar,
    /// Energy Meter (`Meter`)
    EnergyMeter,
    /// Interlocking Scheme (`Interlock`)
    Interlocking,
}

impl SwgrActivity {
    /// Catalog value
    #[must_use]
    pub const fn value(self) -> &'static str {
        match self {
            SwgrActivity::CircuitBreaker => "CB",
            SwgrActivity::ProtectionRelay => "Relay",
            SwgrActivity::CurrentTransformer => "CT",
            SwgrActivity::PotentialTransformer => "PT",
            SwgrActivity::MiniatureCircuitBreaker => "MCB",
            SwgrActivity::Contactor => "K",
            SwgrActivity::Disconnector => "DS",
            SwgrActivity::EarthSwitch => "ES",
            SwgrActivity::SurgeArrester => "SA",
            SwgrActivity::Busbar => "Busbar",
            SwgrActivity::EnergyMeter => "Meter",
            SwgrActivity::Interlocking => "Interlock",
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            SwgrActivity::CircuitBreaker => "Circuit Breaker",
            SwgrActivity::ProtectionRelay => "Protection Relay",
            SwgrActivity::CurrentTransformer => "Current Transformer",
            SwgrActivity::PotentialTransformer => "Potential Transformer",
            SwgrActivity::MiniatureCircuitBreaker => "Miniature Circuit Breaker",
            SwgrActivity::Contactor => "Contactor",
            SwgrActivity::Disconnector => "Disconnector",
            SwgrActivity::EarthSwitch => "Earth Switch",
            SwgrActivity::SurgeArrester => "Surge Arrester",
            SwgrActivity::Busbar => "Busbar",
            SwgrActivity::EnergyMeter => "Energy Meter",
            SwgrActivity::Interlocking => "Interlocking Scheme",
        }
    }
}

/// Power transformer activities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrafoActivity {
    /// Insulation Resistance (`IR`)
    InsulationResistance,
    /// Winding Resistance (`WR`)
    WindingResistance,
    /// Turns Ratio (`TTR`)
    TurnsRatio,
    /// Vector Group (`VG`)
    VectorGroup,
    /// Magnetising Current (`MAG`)
    MagnetisingCurrent,
    /// Tan Delta and Capacitance (`TD`)
    TanDelta,
    /// Sweep Frequency Response Analysis (`SFRA`)
    FrequencyResponse,
    /// On-Load Tap Changer (`OLTC`)
    TapChanger,
    /// Oil Breakdown Voltage (`BDV`)
    OilBreakdown,
    /// Bushing Current Transformer (`BCT`)
    BushingCt,
    /// Oil and Winding Temperature Indicators (`OTI`)
    TemperatureIndicators,
    /// Buchholz Relay (`BR`)
    BuchholzRelay,
    /// Neutral Earthing Resistor (`NER`)
    NeutralEarthingResistor,
}

impl TrafoActivity {
    /// Catalog value
    #[must_use]
    pub const fn value(self) -> &'static str {
        match self {
            TrafoActivity::InsulationResistance => "IR",
            TrafoActivity::WindingResistance => "WR",
            TrafoActivity::TurnsRatio => "TTR",
            TrafoActivity::VectorGroup => "VG",
            TrafoActivity::MagnetisingCurrent => "MAG",
            TrafoActivity::TanDelta => "TD",
            TrafoActivity::FrequencyResponse => "SFRA",
            TrafoActivity::TapChanger => "OLTC",
            TrafoActivity::OilBreakdown => "BDV",
            TrafoActivity::BushingCt => "BCT",
            TrafoActivity::TemperatureIndicators => "OTI",
            TrafoActivity::BuchholzRelay => "BR",
            TrafoActivity::NeutralEarthingResistor => "NER",
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            TrafoActivity::InsulationResistance => "Insulation Resistance",
            TrafoActivity::WindingResistance => "Winding Resistance",
            TrafoActivity::TurnsRatio => "Turns Ratio",
            TrafoActivity::VectorGroup => "Vector Group",
            TrafoActivity::MagnetisingCurrent => "Magnetising Current",
            TrafoActivity::TanDelta => "Tan Delta and Capacitance",
            TrafoActivity::FrequencyResponse => "Sweep Frequency Response Analysis",
            TrafoActivity::TapChanger => "On-Load Tap Changer",
            TrafoActivity::OilBreakdown => "Oil Breakdown Voltage",
            TrafoActivity::BushingCt => "Bushing Current Transformer",
            TrafoActivity::TemperatureIndicators => "Oil and Winding Temperature Indicators",
            TrafoActivity::BuchholzRelay => "Buchholz Relay",
            TrafoActivity::NeutralEarthingResistor => "Neutral Earthing Resistor",
        }
    }
}

/// Power cable activities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CableActivity {
    /// Insulation Resistance (`IR`)
    InsulationResistance,
    /// VLF High Voltage Withstand (`VLF`)
    VlfWithstand,
    /// AC Resonant High Voltage Withstand (`ACHV`)
    AcResonantWithstand,
    /// Outer Sheath Integrity (`Sheath`)
    SheathIntegrity,
    /// Partial Discharge (`PD`)
    PartialDischarge,
    /// Tan Delta (`TD`)
    TanDelta,
    /// Conductor Resistance (`CR`)
    ConductorResistance,
    /// Phase Identification (`Phasing`)
    Phasing,
}

impl CableActivity {
    /// Catalog value
    #[must_use]
    pub const fn value(self) -> &'static str {
        match self {
            CableActivity::InsulationResistance => "IR",
            CableActivity::VlfWithstand => "VLF",
            CableActivity::AcResonantWithstand => "ACHV",
            CableActivity::SheathIntegrity => "Sheath",
            CableActivity::PartialDischarge => "PD",
            CableActivity::TanDelta => "TD",
            CableActivity::ConductorResistance => "CR",
            CableActivity::Phasing => "Phasing",
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            CableActivity::InsulationResistance => "Insulation Resistance",
            CableActivity::VlfWithstand => "VLF High Voltage Withstand",
            CableActivity::AcResonantWithstand => "AC Resonant High Voltage Withstand",
            CableActivity::SheathIntegrity => "Outer Sheath Integrity",
            CableActivity::PartialDischarge => "Partial Discharge",
            CableActivity::TanDelta => "Tan Delta",
            CableActivity::ConductorResistance => "Conductor Resistance",
            CableActivity::Phasing => "Phase Identification",
        }
    }
}

/// Ring main unit activities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RmuActivity {
    /// Circuit Breaker (`CB`)
    CircuitBreaker,
    /// Load Break Switch (`LBS`)
    LoadBreakSwitch,
    /// Earth Switch (`ES`)
    EarthSwitch,
    /// Current Transformer (`CT`)
    CurrentTransformer,
    /// Protection Relay (`Relay`)
    ProtectionRelay,
    /// Voltage Presence Indicating System (`VPIS`)
    VoltagePresence,
    /// High Voltage Withstand (`HiPot`)
    HighVoltageWithstand,
    /// Contact Resistance Measurement (`CRM`)
    ContactResistance,
    /// SF6 Gas Pressure (`SF6`)
    GasPressure,
}

impl RmuActivity {
    /// Catalog value
    #[must_use]
    pub const fn value(self) -> &'static str {
        match self {
            RmuActivity::CircuitBreaker => "CB",
            RmuActivity::LoadBreakSwitch => "LBS",
            RmuActivity::EarthSwitch => "ES",
            RmuActivity::CurrentTransformer => "CT",
            RmuActivity::ProtectionRelay => "Relay",
            RmuActivity::VoltagePresence => "VPIS",
            RmuActivity::HighVoltageWithstand => "HiPot",
            RmuActivity::ContactResistance => "CRM",
            RmuActivity::GasPressure => "SF6",
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            RmuActivity::CircuitBreaker => "Circuit Breaker",
            RmuActivity::LoadBreakSwitch => "Load Break Switch",
            RmuActivity::EarthSwitch => "Earth Switch",
            RmuActivity::CurrentTransformer => "Current Transformer",
            RmuActivity::ProtectionRelay => "Protection Relay",
            RmuActivity::VoltagePresence => "Voltage Presence Indicating System",
            RmuActivity::HighVoltageWithstand => "High Voltage Withstand",
            RmuActivity::ContactResistance => "Contact Resistance Measurement",
            RmuActivity::GasPressure => "SF6 Gas Pressure",
        }
    }
}

/// An activity tagged with its equipment class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Activity {
    /// Switchgear activity
    Swgr(SwgrActivity),
    /// Transformer activity
    Trafo(TrafoActivity),
    /// Cable activity
    Cable(CableActivity),
    /// Ring main unit activity
    Rmu(RmuActivity),
}

impl Activity {
    /// Equipment class this activity belongs to
    #[inline]
    #[must_use]
    pub const fn class(self) -> EquipmentClass {
        match self {
            Activity::Swgr(_) => EquipmentClass::Swgr,
            Activity::Trafo(_) => EquipmentClass::Trafo,
            Activity::Cable(_) => EquipmentClass::Cable,
            Activity::Rmu(_) => EquipmentClass::Rmu,
        }
    }

    /// Catalog value matched against project selections
    #[inline]
    #[must_use]
    pub const fn value(self) -> &'static str {
        match self {
            Activity::Swgr(a) => a.value(),
            Activity::Trafo(a) => a.value(),
            Activity::Cable(a) => a.value(),
            Activity::Rmu(a) => a.value(),
        }
    }

    /// Display label
    #[inline]
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Activity::Swgr(a) => a.label(),
            Activity::Trafo(a) => a.label(),
            Activity::Cable(a) => a.label(),
            Activity::Rmu(a) => a.label(),
        }
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One line of a document section: a fixed header check or a catalog activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "item", rename_all = "snake_case")]
pub enum PlanItem {
    /// Fixed header check
    Header(HeaderCheck),
    /// Catalog-matched activity
    Activity(Activity),
}

impl PlanItem {
    /// Display label
    #[inline]
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            PlanItem::Header(h) => h.label(),
            PlanItem::Activity(a) => a.label(),
        }
    }

    /// Catalog value, `None` for header checks
    #[inline]
    #[must_use]
    pub const fn value(self) -> Option<&'static str> {
        match self {
            PlanItem::Header(_) => None,
            PlanItem::Activity(a) => Some(a.value()),
        }
    }
}
