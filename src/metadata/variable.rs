//! Data-column descriptions.
//!
//! A [`Variable`] is one of several kinds. Every kind carries the
//! [`VariableCore`] fields; the data kinds add [`DataVarFields`] and
//! [`InstDataFields`], and the gas, pressure and biological kinds add their
//! own groups.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::macros::text_accessors;
use super::{MetadataError, MultiNames, MultiString, NumericString, Person};

/// Fixed unit of [`Variable::Temperature`]
pub const TEMPERATURE_UNIT: &str = "°C";
/// Fixed unit of [`Variable::AirPressure`]
pub const PRESSURE_UNIT: &str = "hPa";

/// How the values of a variable were obtained
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MethodType {
    /// Not yet specified
    #[default]
    Unspecified,
    /// Measured in place (underway or moored)
    MeasuredInsitu,
    /// Measured from a collected sample
    MeasuredDiscrete,
    /// Manipulated as part of an experiment
    Manipulation,
    /// Response to a manipulation
    Response,
    /// Computed from other values
    Computed,
}

impl fmt::Display for MethodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MethodType::Unspecified => "Unspecified",
            MethodType::MeasuredInsitu => "Measured in-situ",
            MethodType::MeasuredDiscrete => "Measured from collected sample",
            MethodType::Manipulation => "Manipulation",
            MethodType::Response => "Response",
            MethodType::Computed => "Computed",
        })
    }
}

/// Fields common to every variable
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VariableCore {
    col_name: String,
    full_name: String,
    var_unit: String,
    missing_value: String,
    addn_info: MultiString,
}

impl VariableCore {
    /// Create with the column name, full name and unit
    pub fn new(col_name: &str, full_name: &str, var_unit: &str) -> Self {
        let mut core = Self::default();
        core.set_col_name(col_name);
        core.set_full_name(full_name);
        core.var_unit = var_unit.trim().to_string();
        core
    }

    text_accessors! {
        col_name, set_col_name => "name of the data column";
        full_name, set_full_name => "descriptive name of the variable";
        missing_value, set_missing_value => "value used for missing data";
    }

    /// The stored unit text. Use [`Variable::var_unit`] for the effective unit.
    pub fn var_unit(&self) -> &str {
        &self.var_unit
    }

    /// Additional information lines
    pub fn addn_info(&self) -> &MultiString {
        &self.addn_info
    }

    /// Mutable additional information lines
    pub fn addn_info_mut(&mut self) -> &mut MultiString {
        &mut self.addn_info
    }

    fn invalid_field_names(&self) -> BTreeSet<String> {
        let mut invalid = BTreeSet::new();
        if self.col_name.is_empty() {
            invalid.insert("colName".to_string());
        }
        if self.full_name.is_empty() {
            invalid.insert("fullName".to_string());
        }
        invalid
    }
}

/// Fields of variables holding data values
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDataVarFields")]
pub struct DataVarFields {
    flag_col_name: String,
    accuracy: NumericString,
    precision: NumericString,
}

#[derive(Deserialize)]
struct RawDataVarFields {
    flag_col_name: String,
    accuracy: NumericString,
    precision: NumericString,
}

impl TryFrom<RawDataVarFields> for DataVarFields {
    type Error = MetadataError;

    fn try_from(raw: RawDataVarFields) -> Result<Self, Self::Error> {
        let mut fields = Self::default();
        fields.set_flag_col_name(&raw.flag_col_name);
        fields.set_accuracy(raw.accuracy)?;
        fields.set_precision(raw.precision)?;
        Ok(fields)
    }
}

impl DataVarFields {
    text_accessors! {
        flag_col_name, set_flag_col_name => "name of the quality-flag column";
    }

    /// Accuracy (uncertainty) of the values
    pub fn accuracy(&self) -> &NumericString {
        &self.accuracy
    }

    /// Assign the accuracy; a valid accuracy must be positive
    pub fn set_accuracy(&mut self, accuracy: NumericString) -> Result<(), MetadataError> {
        if accuracy.is_valid() && !accuracy.is_positive() {
            return Err(MetadataError::invalid("accuracy", "accuracy is not positive"));
        }
        self.accuracy = accuracy;
        Ok(())
    }

    /// Precision (resolution) of the values
    pub fn precision(&self) -> &NumericString {
        &self.precision
    }

    /// Assign the precision; a valid precision must be positive
    pub fn set_precision(&mut self, precision: NumericString) -> Result<(), MetadataError> {
        if precision.is_valid() && !precision.is_positive() {
            return Err(MetadataError::invalid("precision", "precision is not positive"));
        }
        self.precision = precision;
        Ok(())
    }
}

/// Fields describing how instrument data was obtained
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstDataFields {
    observe_type: String,
    measure_method: MethodType,
    method_description: String,
    method_reference: String,
    manipulation_description: String,
    sampling_location: String,
    sampling_elevation: String,
    storage_method: String,
    duration: String,
    analysis_temperature: String,
    replication: String,
    researcher: Person,
    instrument_names: MultiNames,
}

impl InstDataFields {
    text_accessors! {
        observe_type, set_observe_type => "type of observation (e.g. Surface Underway)";
        method_description, set_method_description => "description of the measurement method";
        method_reference, set_method_reference => "reference for the method";
        manipulation_description, set_manipulation_description => "description of the manipulation";
        sampling_location, set_sampling_location => "location of sampling";
        sampling_elevation, set_sampling_elevation => "elevation or depth of sampling";
        storage_method, set_storage_method => "storage method for discrete samples";
        duration, set_duration => "duration of measurements";
        analysis_temperature, set_analysis_temperature => "temperature at which samples were analyzed";
        replication, set_replication => "replication information";
    }

    /// How the values were obtained
    pub fn measure_method(&self) -> MethodType {
        self.measure_method
    }

    /// Assign how the values were obtained
    pub fn set_measure_method(&mut self, method: MethodType) {
        self.measure_method = method;
    }

    /// Researcher responsible for the values
    pub fn researcher(&self) -> &Person {
        &self.researcher
    }

    /// Assign the responsible researcher
    pub fn set_researcher(&mut self, researcher: Person) {
        self.researcher = researcher;
    }

    /// Names of the instruments used
    pub fn instrument_names(&self) -> &MultiNames {
        &self.instrument_names
    }

    /// Replace the names of the instruments used
    pub fn set_instrument_names(&mut self, names: MultiNames) {
        self.instrument_names = names;
    }
}

/// A variable with data and instrument fields; the payload of every data kind
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstDataVar {
    /// Common fields
    pub core: VariableCore,
    /// Data-value fields
    pub data: DataVarFields,
    /// Instrument and method fields
    pub inst: InstDataFields,
}

impl InstDataVar {
    /// Create from common fields with empty data and method fields
    pub fn from_core(core: VariableCore) -> Self {
        Self {
            core,
            ..Self::default()
        }
    }

    fn invalid_field_names(&self) -> BTreeSet<String> {
        let mut invalid = self.core.invalid_field_names();
        let inst = &self.inst;
        if inst.observe_type.is_empty() {
            invalid.insert("observeType".to_string());
        }
        if !self.data.accuracy.is_valid() {
            invalid.insert("accuracy".to_string());
        }
        match inst.measure_method {
            MethodType::Unspecified => {
                invalid.insert("measureMethod".to_string());
            }
            MethodType::Computed => {
                if inst.method_description.is_empty() {
                    invalid.insert("methodDescription".to_string());
                }
            }
            MethodType::Manipulation => {
                if inst.method_description.is_empty() && inst.manipulation_description.is_empty() {
                    invalid.insert("manipulationDescription".to_string());
                }
            }
            MethodType::MeasuredInsitu | MethodType::MeasuredDiscrete | MethodType::Response => {
                if inst.instrument_names.is_empty() {
                    invalid.insert("instrumentNames".to_string());
                }
            }
        }
        invalid
    }
}

/// Extra fields of an air pressure variable
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AirPressureFields {
    pressure_correction: String,
}

impl AirPressureFields {
    text_accessors! {
        pressure_correction, set_pressure_correction => "pressure correction (normalization) applied";
    }
}

/// Extra fields of a gas concentration variable
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GasConcFields {
    drying_method: String,
    water_vapor_correction: String,
}

impl GasConcFields {
    text_accessors! {
        drying_method, set_drying_method => "method used to dry the sample gas";
        water_vapor_correction, set_water_vapor_correction => "water vapor correction method";
    }
}

/// Extra fields of a dissolved gas concentration variable
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AquGasConcFields {
    report_temperature: String,
    temperature_correction: String,
}

impl AquGasConcFields {
    text_accessors! {
        report_temperature, set_report_temperature => "temperature the values are reported at";
        temperature_correction, set_temperature_correction => "temperature correction method";
    }
}

/// Extra fields of a biological variable
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BioDataFields {
    biological_subject: String,
    species_id: String,
    life_stage: String,
}

impl BioDataFields {
    text_accessors! {
        biological_subject, set_biological_subject => "organism or group being observed";
        species_id, set_species_id => "identifier of the species (e.g. a WoRMS AphiaID)";
        life_stage, set_life_stage => "life stage of the observed organisms";
    }
}

/// Kind of a [`Variable`], without its data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariableKind {
    /// Column description only
    Plain,
    /// Generic instrument data
    InstData,
    /// Temperature in °C
    Temperature,
    /// Air pressure in hPa
    AirPressure,
    /// Gas concentration in air
    GasConc,
    /// Dissolved gas concentration
    AquGasConc,
    /// Biological observation
    BioData,
}

/// Description of one data column
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variable {
    /// A column with no data-quality description (e.g. a flag or station number)
    Plain(VariableCore),
    /// Generic instrument data
    InstData(InstDataVar),
    /// Temperature; the unit is always [`TEMPERATURE_UNIT`]
    Temperature(InstDataVar),
    /// Air pressure; the unit is always [`PRESSURE_UNIT`]
    AirPressure(InstDataVar, AirPressureFields),
    /// Gas concentration in air
    GasConc(InstDataVar, GasConcFields),
    /// Dissolved gas concentration
    AquGasConc(InstDataVar, GasConcFields, AquGasConcFields),
    /// Biological observation (e.g. a species count)
    BioData(InstDataVar, BioDataFields),
}

impl Default for Variable {
    fn default() -> Self {
        Variable::Plain(VariableCore::default())
    }
}

impl Variable {
    /// A plain column description
    pub fn plain(col_name: &str, full_name: &str, var_unit: &str) -> Self {
        Variable::Plain(VariableCore::new(col_name, full_name, var_unit))
    }

    /// Generic instrument data with the given common fields
    pub fn inst_data(core: VariableCore) -> Self {
        Variable::InstData(InstDataVar::from_core(core))
    }

    /// A temperature; the unit is forced to [`TEMPERATURE_UNIT`]
    pub fn temperature(mut core: VariableCore) -> Self {
        core.var_unit = TEMPERATURE_UNIT.to_string();
        Variable::Temperature(InstDataVar::from_core(core))
    }

    /// An air pressure; the unit is forced to [`PRESSURE_UNIT`]
    pub fn air_pressure(mut core: VariableCore) -> Self {
        core.var_unit = PRESSURE_UNIT.to_string();
        Variable::AirPressure(InstDataVar::from_core(core), AirPressureFields::default())
    }

    /// A gas concentration in air
    pub fn gas_conc(core: VariableCore) -> Self {
        Variable::GasConc(InstDataVar::from_core(core), GasConcFields::default())
    }

    /// A dissolved gas concentration
    pub fn aqu_gas_conc(core: VariableCore) -> Self {
        Variable::AquGasConc(
            InstDataVar::from_core(core),
            GasConcFields::default(),
            AquGasConcFields::default(),
        )
    }

    /// A biological observation
    pub fn bio_data(core: VariableCore) -> Self {
        Variable::BioData(InstDataVar::from_core(core), BioDataFields::default())
    }

    /// The kind of this variable
    pub fn kind(&self) -> VariableKind {
        match self {
            Variable::Plain(_) => VariableKind::Plain,
            Variable::InstData(_) => VariableKind::InstData,
            Variable::Temperature(_) => VariableKind::Temperature,
            Variable::AirPressure(..) => VariableKind::AirPressure,
            Variable::GasConc(..) => VariableKind::GasConc,
            Variable::AquGasConc(..) => VariableKind::AquGasConc,
            Variable::BioData(..) => VariableKind::BioData,
        }
    }

    /// Common fields
    pub fn core(&self) -> &VariableCore {
        match self {
            Variable::Plain(core) => core,
            Variable::InstData(var)
            | Variable::Temperature(var)
            | Variable::AirPressure(var, _)
            | Variable::GasConc(var, _)
            | Variable::AquGasConc(var, _, _)
            | Variable::BioData(var, _) => &var.core,
        }
    }

    /// Mutable common fields
    pub fn core_mut(&mut self) -> &mut VariableCore {
        match self {
            Variable::Plain(core) => core,
            Variable::InstData(var)
            | Variable::Temperature(var)
            | Variable::AirPressure(var, _)
            | Variable::GasConc(var, _)
            | Variable::AquGasConc(var, _, _)
            | Variable::BioData(var, _) => &mut var.core,
        }
    }

    /// The data and instrument fields, absent for plain variables
    pub fn inst_var(&self) -> Option<&InstDataVar> {
        match self {
            Variable::Plain(_) => None,
            Variable::InstData(var)
            | Variable::Temperature(var)
            | Variable::AirPressure(var, _)
            | Variable::GasConc(var, _)
            | Variable::AquGasConc(var, _, _)
            | Variable::BioData(var, _) => Some(var),
        }
    }

    /// Mutable data and instrument fields, absent for plain variables
    pub fn inst_var_mut(&mut self) -> Option<&mut InstDataVar> {
        match self {
            Variable::Plain(_) => None,
            Variable::InstData(var)
            | Variable::Temperature(var)
            | Variable::AirPressure(var, _)
            | Variable::GasConc(var, _)
            | Variable::AquGasConc(var, _, _)
            | Variable::BioData(var, _) => Some(var),
        }
    }

    /// Data-value fields, absent for plain variables
    pub fn data(&self) -> Option<&DataVarFields> {
        self.inst_var().map(|var| &var.data)
    }

    /// Mutable data-value fields, absent for plain variables
    pub fn data_mut(&mut self) -> Option<&mut DataVarFields> {
        self.inst_var_mut().map(|var| &mut var.data)
    }

    /// Instrument and method fields, absent for plain variables
    pub fn inst(&self) -> Option<&InstDataFields> {
        self.inst_var().map(|var| &var.inst)
    }

    /// Mutable instrument and method fields, absent for plain variables
    pub fn inst_mut(&mut self) -> Option<&mut InstDataFields> {
        self.inst_var_mut().map(|var| &mut var.inst)
    }

    /// Air pressure fields
    pub fn pressure(&self) -> Option<&AirPressureFields> {
        match self {
            Variable::AirPressure(_, fields) => Some(fields),
            _ => None,
        }
    }

    /// Mutable air pressure fields
    pub fn pressure_mut(&mut self) -> Option<&mut AirPressureFields> {
        match self {
            Variable::AirPressure(_, fields) => Some(fields),
            _ => None,
        }
    }

    /// Gas concentration fields, present for both gas kinds
    pub fn gas(&self) -> Option<&GasConcFields> {
        match self {
            Variable::GasConc(_, fields) | Variable::AquGasConc(_, fields, _) => Some(fields),
            _ => None,
        }
    }

    /// Mutable gas concentration fields
    pub fn gas_mut(&mut self) -> Option<&mut GasConcFields> {
        match self {
            Variable::GasConc(_, fields) | Variable::AquGasConc(_, fields, _) => Some(fields),
            _ => None,
        }
    }

    /// Dissolved gas concentration fields
    pub fn aqu(&self) -> Option<&AquGasConcFields> {
        match self {
            Variable::AquGasConc(_, _, fields) => Some(fields),
            _ => None,
        }
    }

    /// Mutable dissolved gas concentration fields
    pub fn aqu_mut(&mut self) -> Option<&mut AquGasConcFields> {
        match self {
            Variable::AquGasConc(_, _, fields) => Some(fields),
            _ => None,
        }
    }

    /// Biological observation fields
    pub fn bio(&self) -> Option<&BioDataFields> {
        match self {
            Variable::BioData(_, fields) => Some(fields),
            _ => None,
        }
    }

    /// Mutable biological observation fields
    pub fn bio_mut(&mut self) -> Option<&mut BioDataFields> {
        match self {
            Variable::BioData(_, fields) => Some(fields),
            _ => None,
        }
    }

    /// Name of the quality-flag column for data variables
    pub fn flag_col_name(&self) -> Option<&str> {
        self.data().map(DataVarFields::flag_col_name)
    }

    /// The unit fixed by the kind, if any
    pub fn fixed_unit(&self) -> Option<&'static str> {
        match self {
            Variable::Temperature(_) => Some(TEMPERATURE_UNIT),
            Variable::AirPressure(..) => Some(PRESSURE_UNIT),
            _ => None,
        }
    }

    /// The effective unit of the values
    pub fn var_unit(&self) -> &str {
        self.fixed_unit().unwrap_or_else(|| self.core().var_unit())
    }

    /// Assign the unit.
    ///
    /// Fixed-unit kinds only accept their own unit (or blank text, which
    /// leaves them unchanged).
    pub fn set_var_unit(&mut self, unit: &str) -> Result<(), MetadataError> {
        let unit = unit.trim();
        if let Some(fixed) = self.fixed_unit() {
            if unit.is_empty() || unit == fixed {
                return Ok(());
            }
            let kind = match self.kind() {
                VariableKind::Temperature => "temperature",
                _ => "air pressure",
            };
            return Err(MetadataError::UnsupportedUnit {
                kind,
                fixed,
                given: unit.to_string(),
            });
        }
        self.core_mut().var_unit = unit.to_string();
        Ok(())
    }

    /// Names of required fields that are missing or invalid
    pub fn invalid_field_names(&self) -> BTreeSet<String> {
        let mut invalid = match self.inst_var() {
            Some(var) => var.invalid_field_names(),
            None => self.core().invalid_field_names(),
        };
        if let Some(bio) = self.bio() {
            if bio.species_id.is_empty() {
                invalid.insert("speciesId".to_string());
            }
        }
        invalid
    }

    /// True if no required field is missing or invalid
    pub fn is_valid(&self) -> bool {
        self.invalid_field_names().is_empty()
    }
}
