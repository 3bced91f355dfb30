//! Method-of-statement narrative bodies
//!
//! Every [`PlanItem`] maps to exactly one [`MosBody`]. The mapping is an
//! exhaustive `match`, so a new activity variant does not compile until its
//! body is written.

use crate::activity::{
    Activity, CableActivity, HeaderCheck, PlanItem, RmuActivity, SwgrActivity, TrafoActivity,
};
use serde::Serialize;

/// Narrative body of one MOS step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MosBody {
    /// What the test establishes
    pub objective: &'static str,
    /// Test instruments required
    pub instruments: &'static [&'static str],
    /// Ordered procedure steps
    pub procedure: &'static [&'static str],
    /// Acceptance statement
    pub acceptance: &'static str,
}

const fn body(
    objective: &'static str,
    instruments: &'static [&'static str],
    procedure: &'static [&'static str],
    acceptance: &'static str,
) -> MosBody {
    MosBody {
        objective,
        instruments,
        procedure,
        acceptance,
    }
}

// Instruments
const IR_TESTER: &str = "Insulation resistance tester (5 kV)";
const MICRO_OHM: &str = "Micro-ohmmeter (100 A DC)";
const CB_ANALYSER: &str = "Circuit breaker timing analyser";
const RELAY_SET: &str = "Secondary injection relay test set";
const PRIMARY_SET: &str = "Primary injection test set";
const CT_ANALYSER: &str = "CT / VT analyser";
const MULTIMETER: &str = "Calibrated digital multimeter";
const HV_SET: &str = "AC high voltage test set";
const VLF_SET: &str = "VLF test set (0.1 Hz)";
const RESONANT_SET: &str = "Series resonant test system";
const TTR_METER: &str = "Three-phase turns ratio meter";
const WR_METER: &str = "Transformer winding resistance meter";
const TD_SET: &str = "Tan delta / capacitance bridge";
const SFRA_SET: &str = "Sweep frequency response analyser";
const OIL_TESTER: &str = "Oil breakdown voltage tester";
const PD_SET: &str = "Partial discharge measurement system";
const PHASE_TESTER: &str = "Phase sequence indicator";
const GAS_GAUGE: &str = "SF6 gas density gauge";
const TORQUE: &str = "Torque wrench";
const CAMERA: &str = "Camera for photographic record";

impl HeaderCheck {
    /// MOS narrative body
    #[must_use]
    pub const fn mos_body(self) -> MosBody {
        match self {
            HeaderCheck::NamePlate => body(
                "Confirm the delivered equipment matches the approved data sheet",
                &[CAMERA],
                &[
                    "Record every rating plate field",
                    "Compare ratings with approved drawings and data sheet",
                    "Photograph rating plate for the test report",
                ],
                "All ratings agree with approved documents",
            ),
            HeaderCheck::PhysicalInspection => body(
                "Confirm the equipment is undamaged, complete and correctly installed",
                &[TORQUE, CAMERA],
                &[
                    "Inspect enclosure, paint and seals for transport damage",
                    "Check earthing connections and labelling",
                    "Verify termination torque on a sample of bolted joints",
                    "Check cleanliness and removal of transport locks",
                ],
                "No damage, complete installation, torque values within manufacturer limits",
            ),
        }
    }
}

impl SwgrActivity {
    /// MOS narrative body
    #[must_use]
    pub const fn mos_body(self) -> MosBody {
        match self {
            SwgrActivity::CircuitBreaker => body(
                "Verify breaker mechanism, timing and main contact condition",
                &[CB_ANALYSER, MICRO_OHM, IR_TESTER],
                &[
                    "Operate breaker manually and electrically in service and test position",
                    "Measure close and open times and pole discrepancy",
                    "Measure main contact resistance per pole",
                    "Measure insulation resistance across open contacts and phase to earth",
                ],
                "Timing and contact resistance within manufacturer limits",
            ),
            SwgrActivity::ProtectionRelay => body(
                "Verify protection settings and tripping logic",
                &[RELAY_SET, MULTIMETER],
                &[
                    "Upload approved relay settings",
                    "Inject secondary quantities for each enabled function",
                    "Record pick-up, drop-off and operating times",
                    "Verify trip, alarm and interlock outputs to the breaker",
                ],
                "Operation within relay accuracy class and approved settings",
            ),
            SwgrActivity::CurrentTransformer => body(
                "Verify CT ratio, polarity, magnetisation and insulation",
                &[CT_ANALYSER, PRIMARY_SET, IR_TESTER],
                &[
                    "Measure ratio and polarity on every tap in use",
                    "Record magnetisation curve and knee point",
                    "Measure secondary winding resistance",
                    "Measure insulation resistance of secondary circuits",
                ],
                "Ratio error and knee point within data sheet class",
            ),
            SwgrActivity::PotentialTransformer => body(
                "Verify VT ratio, polarity and secondary circuits",
                &[CT_ANALYSER, MULTIMETER, IR_TESTER],
                &[
                    "Measure ratio and polarity of each secondary winding",
                    "Check secondary fuses and MCBs",
                    "Measure insulation resistance",
                ],
                "Ratio error within accuracy class",
            ),
            SwgrActivity::MiniatureCircuitBreaker => body(
                "Verify MCB operation and rating",
                &[MULTIMETER, PRIMARY_SET],
                &[
                    "Check rating against schedule",
                    "Operate manually and check auxiliary contacts",
                    "Perform trip test on a sample by current injection",
                ],
                "Trip within curve tolerance",
            ),
            SwgrActivity::Contactor => body(
                "Verify contactor coil, contacts and control wiring",
                &[MULTIMETER, IR_TESTER],
                &[
                    "Measure coil resistance and pick-up voltage",
                    "Operate contactor from local and remote control",
                    "Check auxiliary contact states",
                ],
                "Pick-up and drop-out within coil rating",
            ),
            SwgrActivity::Disconnector => body(
                "Verify disconnector operation and contact resistance",
                &[MICRO_OHM, MULTIMETER],
                &[
                    "Operate manually and by motor drive",
                    "Check position indication and auxiliary switches",
                    "Measure main circuit resistance",
                ],
                "Smooth operation, resistance within manufacturer limits",
            ),
            SwgrActivity::EarthSwitch => body(
                "Verify earth switch operation and interlocking",
                &[MICRO_OHM, MULTIMETER],
                &[
                    "Operate earth switch and check position indication",
                    "Verify interlock with associated disconnector and breaker",
                    "Measure earth path resistance",
                ],
                "Interlocks prevent incorrect operation",
            ),
            SwgrActivity::SurgeArrester => body(
                "Verify arrester insulation and counter",
                &[IR_TESTER, MULTIMETER],
                &[
                    "Measure insulation resistance of each arrester",
                    "Check surge counter and leakage current meter",
                ],
                "Insulation resistance above manufacturer minimum",
            ),
            SwgrActivity::Busbar => body(
                "Verify busbar joints and dielectric strength",
                &[MICRO_OHM, HV_SET, IR_TESTER],
                &[
                    "Measure joint resistance across each busbar section",
                    "Measure insulation resistance phase to phase and phase to earth",
                    "Apply power frequency withstand voltage",
                ],
                "No breakdown during withstand, joint resistance within limits",
            ),
            SwgrActivity::EnergyMeter => body(
                "Verify metering accuracy and wiring",
                &[RELAY_SET, MULTIMETER],
                &[
                    "Check CT and VT connections to meter",
                    "Inject known quantities and compare registered energy",
                ],
                "Error within meter accuracy class",
            ),
            SwgrActivity::Interlocking => body(
                "Verify electrical and mechanical interlocking scheme",
                &[MULTIMETER],
                &[
                    "Attempt every prohibited operation sequence",
                    "Confirm permitted sequences operate",
                    "Record results against the interlock matrix",
                ],
                "Scheme operates exactly as the approved interlock matrix",
            ),
        }
    }
}

impl TrafoActivity {
    /// MOS narrative body
    #[must_use]
    pub const fn mos_body(self) -> MosBody {
        match self {
            TrafoActivity::InsulationResistance => body(
                "Verify winding insulation condition",
                &[IR_TESTER],
                &[
                    "Short and earth windings not under test",
                    "Measure HV-E, LV-E and HV-LV insulation resistance for 10 minutes",
                    "Calculate polarisation index",
                ],
                "Polarisation index not less than 1.5",
            ),
            TrafoActivity::WindingResistance => body(
                "Verify winding continuity and tap connections",
                &[WR_METER],
                &[
                    "Measure resistance of each phase on every tap",
                    "Record winding temperature",
                    "Correct readings to reference temperature",
                ],
                "Phase deviation not more than 2 % and consistent with factory results",
            ),
            TrafoActivity::TurnsRatio => body(
                "Verify voltage ratio on every tap",
                &[TTR_METER],
                &[
                    "Connect ratio meter to HV and LV terminals",
                    "Measure ratio on every tap position",
                ],
                "Deviation within 0.5 % of nameplate ratio",
            ),
            TrafoActivity::VectorGroup => body(
                "Verify vector group and phase displacement",
                &[TTR_METER, MULTIMETER],
                &[
                    "Apply low voltage three-phase supply to HV winding",
                    "Measure terminal voltages and compare with vector diagram",
                ],
                "Measured voltages confirm nameplate vector group",
            ),
            TrafoActivity::MagnetisingCurrent => body(
                "Verify core condition by excitation current",
                &[MULTIMETER],
                &[
                    "Apply low voltage to HV winding with LV open",
                    "Measure excitation current per phase",
                ],
                "Phase pattern consistent with core construction",
            ),
            TrafoActivity::TanDelta => body(
                "Verify insulation dielectric losses",
                &[TD_SET],
                &[
                    "Measure capacitance and dissipation factor of winding pairs",
                    "Measure bushing C1 and C2 where test taps are fitted",
                ],
                "Dissipation factor within manufacturer limits",
            ),
            TrafoActivity::FrequencyResponse => body(
                "Record mechanical fingerprint of windings",
                &[SFRA_SET],
                &[
                    "Measure end-to-end open and short circuit responses",
                    "Compare traces with factory reference",
                ],
                "No significant deviation from factory traces",
            ),
            TrafoActivity::TapChanger => body(
                "Verify tap changer operation and control",
                &[WR_METER, MULTIMETER],
                &[
                    "Operate through full range locally and remotely",
                    "Verify position indication and end limits",
                    "Record dynamic transition during winding resistance test",
                ],
                "No transition interruption, indication correct",
            ),
            TrafoActivity::OilBreakdown => body(
                "Verify insulating oil dielectric strength",
                &[OIL_TESTER],
                &[
                    "Draw sample from bottom valve",
                    "Perform six breakdown tests and average",
                ],
                "Average breakdown voltage above 60 kV",
            ),
            TrafoActivity::BushingCt => body(
                "Verify bushing CT ratio, polarity and magnetisation",
                &[CT_ANALYSER, IR_TESTER],
                &[
                    "Measure ratio and polarity per core",
                    "Record magnetisation curve",
                    "Measure insulation resistance of secondary wiring",
                ],
                "Results within data sheet class",
            ),
            TrafoActivity::TemperatureIndicators => body(
                "Verify temperature indicator calibration and contacts",
                &[MULTIMETER],
                &[
                    "Calibrate indicators against reference thermometer",
                    "Verify alarm and trip contact settings",
                    "Check fan and pump control stages",
                ],
                "Indication within 2 degC, contacts operate at set points",
            ),
            TrafoActivity::BuchholzRelay => body(
                "Verify gas and surge relay operation",
                &[MULTIMETER],
                &[
                    "Inject air to operate alarm float",
                    "Operate surge test button to check trip",
                    "Verify signals at protection panel",
                ],
                "Alarm and trip signals received",
            ),
            TrafoActivity::NeutralEarthingResistor => body(
                "Verify NER resistance and insulation",
                &[MICRO_OHM, IR_TESTER],
                &[
                    "Measure resistance value",
                    "Measure insulation resistance to earth",
                ],
                "Resistance within tolerance of rated value",
            ),
        }
    }
}

impl CableActivity {
    /// MOS narrative body
    #[must_use]
    pub const fn mos_body(self) -> MosBody {
        match self {
            CableActivity::InsulationResistance => body(
                "Verify cable insulation before and after withstand testing",
                &[IR_TESTER],
                &[
                    "Isolate and earth cable ends",
                    "Measure each core to earth and between cores",
                    "Discharge cable after each measurement",
                ],
                "Insulation resistance above specified minimum",
            ),
            CableActivity::VlfWithstand => body(
                "Verify cable insulation withstand at very low frequency",
                &[VLF_SET, IR_TESTER],
                &[
                    "Apply VLF test voltage for the specified duration per core",
                    "Monitor leakage current",
                    "Repeat insulation resistance test",
                ],
                "No breakdown during test",
            ),
            CableActivity::AcResonantWithstand => body(
                "Verify cable system withstand at power frequency",
                &[RESONANT_SET, PD_SET],
                &[
                    "Tune resonant system to cable capacitance",
                    "Apply test voltage for the specified duration",
                    "Monitor partial discharge during test",
                ],
                "No breakdown during test",
            ),
            CableActivity::SheathIntegrity => body(
                "Verify outer sheath is undamaged after laying",
                &[IR_TESTER],
                &[
                    "Disconnect sheath bonding",
                    "Apply DC voltage between metallic screen and earth",
                ],
                "No breakdown, leakage within limits",
            ),
            CableActivity::PartialDischarge => body(
                "Locate partial discharge in cable and accessories",
                &[PD_SET],
                &[
                    "Calibrate measurement circuit",
                    "Measure PD at test voltage steps",
                    "Map discharge sites along cable length",
                ],
                "No PD above background at test voltage",
            ),
            CableActivity::TanDelta => body(
                "Verify cable insulation dielectric losses",
                &[TD_SET, VLF_SET],
                &[
                    "Measure dissipation factor at rising voltage steps",
                    "Calculate tip-up",
                ],
                "Dissipation factor and tip-up within limits",
            ),
            CableActivity::ConductorResistance => body(
                "Verify conductor continuity and cross-section",
                &[MICRO_OHM],
                &[
                    "Loop cores at far end",
                    "Measure DC resistance and correct to 20 degC",
                ],
                "Resistance within standard maximum per km",
            ),
            CableActivity::Phasing => body(
                "Verify phase identity end to end",
                &[PHASE_TESTER, MULTIMETER],
                &[
                    "Earth one core at far end and identify at near end",
                    "Repeat for every core",
                    "Check phase sequence after energisation",
                ],
                "Phase markings agree at both ends",
            ),
        }
    }
}

impl RmuActivity {
    /// MOS narrative body
    #[must_use]
    pub const fn mos_body(self) -> MosBody {
        match self {
            RmuActivity::CircuitBreaker => body(
                "Verify RMU breaker operation and timing",
                &[CB_ANALYSER, MICRO_OHM],
                &[
                    "Operate breaker mechanically and electrically",
                    "Measure opening and closing times",
                    "Measure main contact resistance",
                ],
                "Timing and resistance within manufacturer limits",
            ),
            RmuActivity::LoadBreakSwitch => body(
                "Verify load break switch operation",
                &[MICRO_OHM],
                &[
                    "Operate switch through open, closed and earth positions",
                    "Measure contact resistance",
                ],
                "Smooth operation, resistance within limits",
            ),
            RmuActivity::EarthSwitch => body(
                "Verify earth switch and mechanical interlocks",
                &[MULTIMETER],
                &[
                    "Operate earth switch",
                    "Attempt prohibited operations to prove interlocks",
                ],
                "Interlocks prevent incorrect operation",
            ),
            RmuActivity::CurrentTransformer => body(
                "Verify ring CT ratio and polarity",
                &[PRIMARY_SET, CT_ANALYSER],
                &[
                    "Inject primary current and measure secondary",
                    "Check polarity at relay terminals",
                ],
                "Ratio within accuracy class",
            ),
            RmuActivity::ProtectionRelay => body(
                "Verify self-powered relay settings and trip",
                &[RELAY_SET, PRIMARY_SET],
                &[
                    "Apply approved settings",
                    "Inject current to verify pick-up and trip time",
                    "Confirm trip coil operation",
                ],
                "Operation within relay accuracy class",
            ),
            RmuActivity::VoltagePresence => body(
                "Verify voltage presence indicators",
                &[MULTIMETER],
                &[
                    "Test indicators with interface tester",
                    "Confirm indication after energisation",
                ],
                "Indication on all phases",
            ),
            RmuActivity::HighVoltageWithstand => body(
                "Verify RMU dielectric integrity",
                &[HV_SET, IR_TESTER],
                &[
                    "Measure insulation resistance",
                    "Apply withstand voltage phase to earth and across open contacts",
                    "Repeat insulation resistance",
                ],
                "No breakdown during test",
            ),
            RmuActivity::ContactResistance => body(
                "Verify main circuit resistance",
                &[MICRO_OHM],
                &["Inject DC current across each main circuit", "Record resistance per phase"],
                "Resistance within manufacturer limits",
            ),
            RmuActivity::GasPressure => body(
                "Verify SF6 tank pressure and density monitoring",
                &[GAS_GAUGE],
                &[
                    "Read gauge and compare with temperature-corrected value",
                    "Verify low pressure alarm contact",
                ],
                "Pressure in green zone, alarm operates",
            ),
        }
    }
}

impl Activity {
    /// MOS narrative body
    #[must_use]
    pub const fn mos_body(self) -> MosBody {
        match self {
            Activity::Swgr(a) => a.mos_body(),
            Activity::Trafo(a) => a.mos_body(),
            Activity::Cable(a) => a.mos_body(),
            Activity::Rmu(a) => a.mos_body(),
        }
    }
}

impl PlanItem {
    /// MOS narrative body
    #[must_use]
    pub const fn mos_body(self) -> MosBody {
        match self {
            PlanItem::Header(h) => h.mos_body(),
            PlanItem::Activity(a) => a.mos_body(),
        }
    }
}
