//! Instruments used to collect or analyze samples.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::macros::text_accessors;
use super::{CalibrationGas, MultiNames, MultiString};

/// Fields common to every instrument
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstrumentCore {
    name: String,
    id: String,
    manufacturer: String,
    model: String,
    addn_info: MultiString,
}

impl InstrumentCore {
    /// Create with the given name and every other field empty
    pub fn named(name: &str) -> Self {
        let mut core = Self::default();
        core.set_name(name);
        core
    }

    text_accessors! {
        name, set_name => "name used to refer to this instrument";
        id, set_id => "identifier or serial number";
        manufacturer, set_manufacturer => "manufacturer";
        model, set_model => "model";
    }

    /// Additional information lines
    pub fn addn_info(&self) -> &MultiString {
        &self.addn_info
    }

    /// Mutable additional information lines
    pub fn addn_info_mut(&mut self) -> &mut MultiString {
        &mut self.addn_info
    }
}

/// Fields of instruments that take samples
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SamplerFields {
    instrument_names: MultiNames,
}

impl SamplerFields {
    /// Names of the instruments attached to this sampler
    pub fn instrument_names(&self) -> &MultiNames {
        &self.instrument_names
    }

    /// Replace the names of the attached instruments
    pub fn set_instrument_names(&mut self, names: MultiNames) {
        self.instrument_names = names;
    }
}

/// Fields of an equilibrator
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EquilibratorFields {
    equilibrator_type: String,
    chamber_vol: String,
    chamber_water_vol: String,
    chamber_gas_vol: String,
    water_flow_rate: String,
    gas_flow_rate: String,
    venting: String,
}

impl EquilibratorFields {
    text_accessors! {
        equilibrator_type, set_equilibrator_type => "type of equilibrator";
        chamber_vol, set_chamber_vol => "total chamber volume";
        chamber_water_vol, set_chamber_water_vol => "water volume of the chamber";
        chamber_gas_vol, set_chamber_gas_vol => "headspace volume of the chamber";
        water_flow_rate, set_water_flow_rate => "water flow rate";
        gas_flow_rate, set_gas_flow_rate => "gas flow rate";
        venting, set_venting => "venting description";
    }
}

/// Fields of instruments that analyze samples
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnalyzerFields {
    calibration: String,
}

impl AnalyzerFields {
    text_accessors! {
        calibration, set_calibration => "calibration description";
    }
}

/// Kind of an [`Instrument`], without its data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstrumentKind {
    /// Generic sampler
    Sampler,
    /// Equilibrator
    Equilibrator,
    /// Generic analyzer
    Analyzer,
    /// Gas sensor with calibration gases
    GasSensor,
    /// Temperature sensor
    TemperatureSensor,
    /// Pressure sensor
    PressureSensor,
    /// Salinity sensor
    SalinitySensor,
}

impl fmt::Display for InstrumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            InstrumentKind::Sampler => "Sampler",
            InstrumentKind::Equilibrator => "Equilibrator",
            InstrumentKind::Analyzer => "Analyzer",
            InstrumentKind::GasSensor => "Gas Sensor",
            InstrumentKind::TemperatureSensor => "Temperature Sensor",
            InstrumentKind::PressureSensor => "Pressure Sensor",
            InstrumentKind::SalinitySensor => "Salinity Sensor",
        })
    }
}

/// An instrument: a sampler or an analyzer of some kind
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Instrument {
    /// Generic sampler
    Sampler(InstrumentCore, SamplerFields),
    /// Equilibrator
    Equilibrator(InstrumentCore, SamplerFields, EquilibratorFields),
    /// Generic analyzer
    Analyzer(InstrumentCore, AnalyzerFields),
    /// Gas sensor with the gases used to calibrate it
    GasSensor(InstrumentCore, AnalyzerFields, Vec<CalibrationGas>),
    /// Temperature sensor
    TemperatureSensor(InstrumentCore, AnalyzerFields),
    /// Pressure sensor
    PressureSensor(InstrumentCore, AnalyzerFields),
    /// Salinity sensor
    SalinitySensor(InstrumentCore, AnalyzerFields),
}

impl Instrument {
    /// An empty instrument of the given kind with the given name
    pub fn new(kind: InstrumentKind, name: &str) -> Self {
        let core = InstrumentCore::named(name);
        match kind {
            InstrumentKind::Sampler => Instrument::Sampler(core, SamplerFields::default()),
            InstrumentKind::Equilibrator => Instrument::Equilibrator(
                core,
                SamplerFields::default(),
                EquilibratorFields::default(),
            ),
            InstrumentKind::Analyzer => Instrument::Analyzer(core, AnalyzerFields::default()),
            InstrumentKind::GasSensor => {
                Instrument::GasSensor(core, AnalyzerFields::default(), Vec::new())
            }
            InstrumentKind::TemperatureSensor => {
                Instrument::TemperatureSensor(core, AnalyzerFields::default())
            }
            InstrumentKind::PressureSensor => {
                Instrument::PressureSensor(core, AnalyzerFields::default())
            }
            InstrumentKind::SalinitySensor => {
                Instrument::SalinitySensor(core, AnalyzerFields::default())
            }
        }
    }

    /// The kind of this instrument
    pub fn kind(&self) -> InstrumentKind {
        match self {
            Instrument::Sampler(..) => InstrumentKind::Sampler,
            Instrument::Equilibrator(..) => InstrumentKind::Equilibrator,
            Instrument::Analyzer(..) => InstrumentKind::Analyzer,
            Instrument::GasSensor(..) => InstrumentKind::GasSensor,
            Instrument::TemperatureSensor(..) => InstrumentKind::TemperatureSensor,
            Instrument::PressureSensor(..) => InstrumentKind::PressureSensor,
            Instrument::SalinitySensor(..) => InstrumentKind::SalinitySensor,
        }
    }

    /// True for samplers, including equilibrators
    pub fn is_sampler(&self) -> bool {
        self.sampler().is_some()
    }

    /// True for analyzers, including every sensor
    pub fn is_analyzer(&self) -> bool {
        self.analyzer().is_some()
    }

    /// Common fields
    pub fn core(&self) -> &InstrumentCore {
        match self {
            Instrument::Sampler(core, ..)
            | Instrument::Equilibrator(core, ..)
            | Instrument::Analyzer(core, ..)
            | Instrument::GasSensor(core, ..)
            | Instrument::TemperatureSensor(core, ..)
            | Instrument::PressureSensor(core, ..)
            | Instrument::SalinitySensor(core, ..) => core,
        }
    }

    /// Mutable common fields
    pub fn core_mut(&mut self) -> &mut InstrumentCore {
        match self {
            Instrument::Sampler(core, ..)
            | Instrument::Equilibrator(core, ..)
            | Instrument::Analyzer(core, ..)
            | Instrument::GasSensor(core, ..)
            | Instrument::TemperatureSensor(core, ..)
            | Instrument::PressureSensor(core, ..)
            | Instrument::SalinitySensor(core, ..) => core,
        }
    }

    /// The instrument name
    pub fn name(&self) -> &str {
        self.core().name()
    }

    /// Sampler fields, present for samplers
    pub fn sampler(&self) -> Option<&SamplerFields> {
        match self {
            Instrument::Sampler(_, fields) | Instrument::Equilibrator(_, fields, _) => Some(fields),
            _ => None,
        }
    }

    /// Mutable sampler fields
    pub fn sampler_mut(&mut self) -> Option<&mut SamplerFields> {
        match self {
            Instrument::Sampler(_, fields) | Instrument::Equilibrator(_, fields, _) => Some(fields),
            _ => None,
        }
    }

    /// Equilibrator fields
    pub fn equilibrator(&self) -> Option<&EquilibratorFields> {
        match self {
            Instrument::Equilibrator(_, _, fields) => Some(fields),
            _ => None,
        }
    }

    /// Mutable equilibrator fields
    pub fn equilibrator_mut(&mut self) -> Option<&mut EquilibratorFields> {
        match self {
            Instrument::Equilibrator(_, _, fields) => Some(fields),
            _ => None,
        }
    }

    /// Analyzer fields, present for analyzers and sensors
    pub fn analyzer(&self) -> Option<&AnalyzerFields> {
        match self {
            Instrument::Analyzer(_, fields)
            | Instrument::GasSensor(_, fields, _)
            | Instrument::TemperatureSensor(_, fields)
            | Instrument::PressureSensor(_, fields)
            | Instrument::SalinitySensor(_, fields) => Some(fields),
            _ => None,
        }
    }

    /// Mutable analyzer fields
    pub fn analyzer_mut(&mut self) -> Option<&mut AnalyzerFields> {
        match self {
            Instrument::Analyzer(_, fields)
            | Instrument::GasSensor(_, fields, _)
            | Instrument::TemperatureSensor(_, fields)
            | Instrument::PressureSensor(_, fields)
            | Instrument::SalinitySensor(_, fields) => Some(fields),
            _ => None,
        }
    }

    /// Calibration gases of a gas sensor
    pub fn calibration_gases(&self) -> Option<&[CalibrationGas]> {
        match self {
            Instrument::GasSensor(_, _, gases) => Some(gases),
            _ => None,
        }
    }

    /// Mutable calibration gases of a gas sensor
    pub fn calibration_gases_mut(&mut self) -> Option<&mut Vec<CalibrationGas>> {
        match self {
            Instrument::GasSensor(_, _, gases) => Some(gases),
            _ => None,
        }
    }

    /// Names of required fields that are missing or invalid
    pub fn invalid_field_names(&self) -> BTreeSet<String> {
        let mut invalid = BTreeSet::new();
        if self.name().is_empty() {
            invalid.insert("name".to_string());
        }
        for (k, gas) in self.calibration_gases().unwrap_or_default().iter().enumerate() {
            for name in gas.invalid_field_names() {
                invalid.insert(format!("calibrationGases[{}].{}", k, name));
            }
        }
        invalid
    }

    /// True if no required field is missing or invalid
    pub fn is_valid(&self) -> bool {
        self.invalid_field_names().is_empty()
    }
}
