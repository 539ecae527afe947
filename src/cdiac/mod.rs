//! # CDIAC Metadata Reader
//!
//! Builds a [`SocatMetadata`] from a legacy CDIAC cruise-metadata document.
//!
//! CDIAC documents describe their data columns only by free-text names, so
//! each column is classified into a [`VarType`] by a [`ColumnClassifier`]:
//! the name is reduced to a key of lowercase letters and digits and looked up
//! in a table of known column names, with caller overrides taking
//! precedence.
//!
//! ```
//! use socatmeta::cdiac::{ColumnClassifier, VarType};
//!
//! let mut classifier = ColumnClassifier::new();
//! assert_eq!(classifier.get_var_type_from_column_name("xCO2,Water,SST"), VarType::Xco2WaterSst);
//! assert_eq!(classifier.get_var_type_from_column_name("Depth"), VarType::Other);
//!
//! classifier.associate_column_name_with_var_type("Depth", VarType::Salinity);
//! assert_eq!(classifier.get_var_type_from_column_name("depth"), VarType::Salinity);
//! ```
//!
//! Equilibrator volumes and calibration gases are scraped from prose with
//! the patterns in [`gas`]; text that fits no pattern is kept verbatim.

mod column_table;
mod error;
pub mod gas;
mod var_type;

#[cfg(test)]
mod tests;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use log::{info, warn};

use crate::metadata::{
    AnalyzerFields, AquGasConcFields, Coverage, DataVarFields, EquilibratorFields,
    GasConcFields, InstDataVar, Instrument, InstrumentCore, Investigator, MethodType, MiscInfo,
    MultiNames, MultiString, Platform, PlatformType, SamplerFields, SocatMetadata, Submitter,
    Variable, VariableCore, LATITUDE_UNITS, LONGITUDE_UNITS,
};
use crate::xml::{
    get_datestamp, get_numeric_string, get_person_names, guess_platform_type, Document, Element,
};

pub use error::CdiacError;
pub use gas::{parse_calibration_gases, parse_chamber_volumes, ChamberVolumes};
pub use var_type::{normalize_column_name, ColumnClassifier, VarType};

const DATASET_INFO: &str = "Dataset_Info";
const CRUISE: [&str; 3] = ["Cruise_Info", "Experiment", "Cruise"];
const VESSEL: [&str; 2] = ["Cruise_Info", "Vessel"];
const METHOD_DESCRIPTION: &str = "Method_Description";
const EQUILIBRATOR_DESIGN: &str = "Equilibrator_Design";
const MARINE_AIR: &str = "CO2_in_Marine_Air";
const CO2_SENSOR: [&str; 3] = [METHOD_DESCRIPTION, "CO2_Sensors", "CO2_Sensor"];
const OTHER_SENSOR: [&str; 3] = [METHOD_DESCRIPTION, "Other_Sensors", "Sensor"];

const CO2_WATER_INSTRUMENTS: &str = "Equilibrator, CO2 Sensor";
const CO2_SENSOR_NAME: &str = "CO2 Sensor";

/// Where a single-value sensor is described under `Method_Description`,
/// and the tags holding its accuracy and precision, in order of preference
struct SensorSection {
    instrument: &'static str,
    section: &'static str,
    accuracy_tags: &'static [&'static str],
    precision_tags: &'static [&'static str],
}

const SST_SENSOR: SensorSection = SensorSection {
    instrument: "Water Temperature Sensor",
    section: "Sea_Surface_Temperature",
    accuracy_tags: &["Accuracy", "Accuracy_degC", "Uncertainty"],
    precision_tags: &["Precision", "Precision_degC", "Resolution"],
};

const EQU_TEMP_SENSOR: SensorSection = SensorSection {
    instrument: "Equilibrator Temperature Sensor",
    section: "Equilibrator_Temperature",
    accuracy_tags: &["Accuracy", "Accuracy_degC", "Uncertainty"],
    precision_tags: &["Precision", "Precision_degC", "Resolution"],
};

const ATM_PRESSURE_SENSOR: SensorSection = SensorSection {
    instrument: "Atmospheric Pressure Sensor",
    section: "Atmospheric_Pressure",
    accuracy_tags: &["Accuracy", "Accuracy_hPa", "Uncertainty"],
    precision_tags: &["Precision", "Precision_hPa", "Resolution"],
};

const EQU_PRESSURE_SENSOR: SensorSection = SensorSection {
    instrument: "Equilibrator Pressure Sensor",
    section: "Equilibrator_Pressure",
    accuracy_tags: &["Accuracy", "Accuracy_hPa", "Uncertainty"],
    precision_tags: &["Precision", "Precision_hPa", "Resolution"],
};

const SALINITY_SENSOR: SensorSection = SensorSection {
    instrument: "Salinity Sensor",
    section: "Sea_Surface_Salinity",
    accuracy_tags: &["Accuracy", "Uncertainty"],
    precision_tags: &["Precision", "Resolution"],
};

/// Reads a CDIAC metadata document into the SOCAT data model
#[derive(Debug, Clone)]
pub struct CdiacReader {
    document: Document,
    classifier: ColumnClassifier,
}

impl CdiacReader {
    /// Wrap an already parsed CDIAC document
    pub fn from_document(document: Document) -> Self {
        Self {
            document,
            classifier: ColumnClassifier::new(),
        }
    }

    /// Parse a CDIAC document from a buffered reader
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, CdiacError> {
        Ok(Self::from_document(Document::parse(reader)?))
    }

    /// Parse the CDIAC document in the named file
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, CdiacError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// The parsed document
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The column classifier used for the data columns
    pub fn classifier(&self) -> &ColumnClassifier {
        &self.classifier
    }

    /// Mutable access to the column classifier
    pub fn classifier_mut(&mut self) -> &mut ColumnClassifier {
        &mut self.classifier
    }

    /// Associate a column name with a variable type for this reader.
    ///
    /// Returns the type previously associated with the name's key.
    pub fn associate_column_name_with_var_type(
        &mut self,
        col_name: &str,
        var_type: VarType,
    ) -> Option<VarType> {
        self.classifier.associate_column_name_with_var_type(col_name, var_type)
    }

    /// The guessed type of the named data column
    pub fn get_var_type_from_column_name(&self, col_name: &str) -> VarType {
        self.classifier.get_var_type_from_column_name(col_name)
    }

    /// Build the metadata described by this document.
    ///
    /// Missing elements leave the matching fields empty; values that cannot
    /// be interpreted are logged and either kept as additional information
    /// or dropped.
    pub fn create_socat_metadata(&self) -> SocatMetadata {
        let misc_info = self.misc_info();
        let platform = self.platform(misc_info.dataset_id());
        let variables = self.variables(platform.platform_type());
        let metadata = SocatMetadata {
            submitter: self.submitter(),
            investigators: self.investigators(),
            coverage: self.coverage(),
            instruments: self.instruments(),
            variables,
            platform,
            misc_info,
        };
        info!(
            "Read dataset '{}': {} investigators, {} variables, {} instruments",
            metadata.misc_info.dataset_id(),
            metadata.investigators.len(),
            metadata.variables.len(),
            metadata.instruments.len()
        );
        metadata
    }

    fn root(&self) -> &Element {
        self.document.root()
    }

    fn text(&self, path: &[&str]) -> String {
        self.root().element_text(path)
    }

    fn cruise_text(&self, tags: &[&str]) -> String {
        let path: Vec<&str> = CRUISE.iter().chain(tags).copied().collect();
        self.text(&path)
    }

    fn method_text(&self, section: &str, tag: &str) -> String {
        self.text(&[METHOD_DESCRIPTION, section, tag])
    }

    fn co2_text(&self, tag: &str) -> String {
        self.text(&[CO2_SENSOR[0], CO2_SENSOR[1], CO2_SENSOR[2], tag])
    }

    /// Text of the first tag in `tags` with a value
    fn first_method_text(&self, section: &str, tags: &[&str]) -> String {
        tags.iter()
            .map(|tag| self.method_text(section, tag))
            .find(|text| !text.is_empty())
            .unwrap_or_default()
    }

    fn misc_info(&self) -> MiscInfo {
        let mut info = MiscInfo::new();

        let mut expocode = self.cruise_text(&["Expocode"]);
        if expocode.is_empty() {
            expocode = self.cruise_text(&["Cruise_ID"]);
        }
        info.set_dataset_id(expocode);
        info.set_dataset_name(self.text(&["Cruise_Info", "Experiment", "Experiment_Name"]));
        info.set_section_name(self.cruise_text(&["Section"]));
        // Funding is free text in CDIAC; keep all of it as the agency
        info.set_funding_agency(self.text(&[DATASET_INFO, "Funding_Info"]));

        let mut history = Vec::new();
        let submission_dates = [DATASET_INFO, "Submission_Dates"];
        let initial = self.text(&[DATASET_INFO, "Submission_Dates", "Initial_Submission"]);
        history.extend(get_datestamp(&initial));
        for revised in self.root().element_list(&[DATASET_INFO, "Submission_Dates", "Revised_Submission"]) {
            if let Some(stamp) = get_datestamp(revised.text()) {
                if !history.contains(&stamp) {
                    history.push(stamp);
                }
            }
        }
        if history.is_empty() && self.root().find(&submission_dates).is_some() {
            warn!("No readable submission dates in {}", submission_dates.join("/"));
        }
        info.set_history(history);

        let mut ports = MultiString::new();
        let port_path: Vec<&str> = CRUISE.iter().copied().chain(["Ports_of_Call"]).collect();
        for port in self.root().element_list(&port_path) {
            ports.append(port.text());
        }
        info.set_ports_of_call(ports);

        info.set_references(MultiString::from_text(&self.text(&["Data_set_References"])));
        info.set_citation(self.text(&["Citation"]));
        info.set_website(self.text(&["Data_Set_Link", "URL"]));

        let mut addn_info = MultiString::new();
        let labelled = [
            ("Experiment Type", self.text(&["Cruise_Info", "Experiment", "Experiment_Type"])),
            ("Cruise Info", self.cruise_text(&["Cruise_Info"])),
            ("Mooring ID", self.text(&["Cruise_Info", "Experiment", "Mooring_ID"])),
            ("Website Note", self.text(&["Data_Set_Link", "Link_Note"])),
        ];
        for (label, text) in labelled {
            if !text.is_empty() {
                addn_info.append(&format!("{}: {}", label, text));
            }
        }
        addn_info.append(&self.text(&["Additional_Information"]));
        info.set_addn_info(addn_info);

        // Cruise dates fall back to the temporal coverage dates
        let start = get_datestamp(&self.cruise_text(&["Start_Date"]))
            .or_else(|| get_datestamp(&self.cruise_text(&["Temporal_Coverage", "Start_Date"])));
        if let Some(start) = start {
            info.set_start_datestamp(start);
        }
        let end = get_datestamp(&self.cruise_text(&["End_Date"]))
            .or_else(|| get_datestamp(&self.cruise_text(&["Temporal_Coverage", "End_Date"])));
        if let Some(end) = end {
            info.set_end_datestamp(end);
        }

        info
    }

    fn submitter(&self) -> Submitter {
        let mut submitter = Investigator::from_person(get_person_names(&self.text(&["User", "Name"])));
        // CDIAC does not split the address into streets, city, region and so on
        submitter.set_streets(MultiString::from_text(&self.text(&["User", "Address"])));
        submitter
            .person_mut()
            .set_organization(self.text(&["User", "Organization"]));
        submitter.set_phone(self.text(&["User", "Phone"]));
        submitter.set_email(self.text(&["User", "Email"]));
        Submitter::from(submitter)
    }

    fn investigators(&self) -> Vec<Investigator> {
        self.root()
            .element_list(&["Investigator"])
            .into_iter()
            .map(|elem| {
                let mut pi = Investigator::from_person(get_person_names(&elem.element_text(&["Name"])));
                pi.set_streets(MultiString::from_text(&elem.element_text(&["Address"])));
                pi.person_mut()
                    .set_organization(elem.element_text(&["Organization"]));
                pi.set_phone(elem.element_text(&["Phone"]));
                pi.set_email(elem.element_text(&["Email"]));
                pi
            })
            .collect()
    }

    fn platform(&self, dataset_id: &str) -> Platform {
        let mut platform = Platform::new();
        platform.set_platform_id(self.text(&[VESSEL[0], VESSEL[1], "Vessel_ID"]));
        let name = self.text(&[VESSEL[0], VESSEL[1], "Vessel_Name"]);
        let mut platform_type =
            PlatformType::parse(&self.text(&["Cruise_Info", "Experiment", "Platform_Type"]));
        if platform_type == PlatformType::Unknown {
            platform_type = guess_platform_type(&name, dataset_id);
        }
        platform.set_platform_name(name);
        platform.set_platform_type(platform_type);
        platform.set_platform_owner(self.text(&[VESSEL[0], VESSEL[1], "Vessel_Owner"]));
        platform.set_platform_country(self.text(&[VESSEL[0], VESSEL[1], "Country"]));
        platform
    }

    fn coverage(&self) -> Coverage {
        let mut coverage = Coverage::new();
        let bound = |tag: &str, units: &str| {
            get_numeric_string(
                &self.cruise_text(&["Geographical_Coverage", "Bounds", tag]),
                Some(units),
            )
        };

        let results = [
            ("west", coverage.set_western_longitude(bound("Westernmost_Longitude", LONGITUDE_UNITS))),
            ("east", coverage.set_eastern_longitude(bound("Easternmost_Longitude", LONGITUDE_UNITS))),
            ("south", coverage.set_southern_latitude(bound("Southernmost_Latitude", LATITUDE_UNITS))),
            ("north", coverage.set_northern_latitude(bound("Northernmost_Latitude", LATITUDE_UNITS))),
        ];
        for (which, result) in results {
            if let Err(err) = result {
                warn!("Ignoring {} bound: {}", which, err);
            }
        }

        // Data times span the whole start and end days
        if let Some(start) = get_datestamp(&self.cruise_text(&["Temporal_Coverage", "Start_Date"])) {
            if let Err(err) = coverage.set_earliest_data_date(&start) {
                warn!("Ignoring temporal coverage start date: {}", err);
            }
        }
        if let Some(end) = get_datestamp(&self.cruise_text(&["Temporal_Coverage", "End_Date"])) {
            if let Err(err) = coverage.set_latest_data_date(&end) {
                warn!("Ignoring temporal coverage end date: {}", err);
            }
        }

        let mut regions = MultiNames::new();
        let region_path: Vec<&str> = CRUISE
            .iter()
            .copied()
            .chain(["Geographical_Coverage", "Geographical_Region"])
            .collect();
        for region in self.root().element_list(&region_path) {
            regions.add(region.text());
        }
        coverage.set_geographic_names(regions);

        coverage
    }

    fn variables(&self, platform_type: PlatformType) -> Vec<Variable> {
        let observe_type = if platform_type == PlatformType::Mooring {
            "Time Series"
        } else {
            "Surface Underway"
        };

        let mut variables = Vec::new();
        let mut co2_water_indices = Vec::new();
        let mut co2_atm_indices = Vec::new();
        let mut woce_water_names: Vec<String> = Vec::new();
        let mut woce_atm_names: Vec<String> = Vec::new();

        for (k, elem) in self
            .root()
            .element_list(&["Variables_Info", "Variable"])
            .into_iter()
            .enumerate()
        {
            let col_name = elem.element_text(&["Variable_Name"]);
            let core = VariableCore::new(
                &col_name,
                &elem.element_text(&["Description_of_Variable"]),
                &elem.element_text(&["Unit_of_Variable"]),
            );
            let var_type = self.get_var_type_from_column_name(&col_name);
            let variable = match var_type {
                VarType::Other => Variable::Plain(core),
                VarType::WoceCo2Water => {
                    woce_water_names.push(col_name);
                    Variable::Plain(core)
                }
                VarType::WoceCo2Atm => {
                    woce_atm_names.push(col_name);
                    Variable::Plain(core)
                }
                VarType::Fco2WaterEqu | VarType::Pco2WaterEqu | VarType::Xco2WaterEqu => {
                    co2_water_indices.push(k);
                    self.co2_water_variable(core, "equilibrator temperature", observe_type)
                }
                VarType::Fco2WaterSst | VarType::Pco2WaterSst | VarType::Xco2WaterSst => {
                    co2_water_indices.push(k);
                    self.co2_water_variable(core, "SST", observe_type)
                }
                VarType::Fco2AtmActual | VarType::Pco2AtmActual | VarType::Xco2AtmActual => {
                    co2_atm_indices.push(k);
                    self.co2_atm_variable(core, MethodType::MeasuredInsitu, observe_type)
                }
                VarType::Fco2AtmInterp | VarType::Pco2AtmInterp | VarType::Xco2AtmInterp => {
                    co2_atm_indices.push(k);
                    self.co2_atm_variable(core, MethodType::Computed, observe_type)
                }
                VarType::SeaSurfaceTemperature => {
                    self.sensor_variable(Variable::temperature(core), &SST_SENSOR, observe_type)
                }
                VarType::EquilibratorTemperature => {
                    self.sensor_variable(Variable::temperature(core), &EQU_TEMP_SENSOR, observe_type)
                }
                VarType::SeaLevelPressure => {
                    self.sensor_variable(Variable::air_pressure(core), &ATM_PRESSURE_SENSOR, observe_type)
                }
                VarType::EquilibratorPressure => {
                    self.sensor_variable(Variable::air_pressure(core), &EQU_PRESSURE_SENSOR, observe_type)
                }
                VarType::Salinity => {
                    self.sensor_variable(Variable::inst_data(core), &SALINITY_SENSOR, observe_type)
                }
            };
            variables.push(variable);
        }

        // Point the CO2 values at their WOCE flag columns
        for (indices, names) in [
            (&co2_water_indices, &woce_water_names),
            (&co2_atm_indices, &woce_atm_names),
        ] {
            if names.is_empty() {
                continue;
            }
            let flag_names = names.join(", ");
            for &idx in indices {
                if let Some(data) = variables[idx].data_mut() {
                    data.set_flag_col_name(&flag_names);
                }
            }
        }

        variables
    }

    /// An instrument variable with the method, instruments and observation
    /// type assigned
    fn measured_variable(
        core: VariableCore,
        method: MethodType,
        instruments: &str,
        observe_type: &str,
    ) -> InstDataVar {
        let mut var = InstDataVar::from_core(core);
        var.inst.set_measure_method(method);
        var.inst
            .set_instrument_names(MultiNames::from_comma_list(instruments));
        var.inst.set_observe_type(observe_type);
        var
    }

    fn co2_water_variable(
        &self,
        core: VariableCore,
        report_temperature: &str,
        observe_type: &str,
    ) -> Variable {
        let mut var = Self::measured_variable(
            core,
            MethodType::MeasuredInsitu,
            CO2_WATER_INSTRUMENTS,
            observe_type,
        );
        let mut addn_info = MultiString::new();
        assign_accuracy(&mut var.data, &self.co2_text("Uncertainty_Water"), &mut addn_info);
        assign_precision(&mut var.data, &self.co2_text("Resolution_Water"), &mut addn_info);
        append_labelled(&mut addn_info, "Frequency", &self.co2_text("Frequency"));
        var.inst.set_method_reference(self.co2_text("Method_References"));
        var.inst.set_method_description(self.co2_text("Measurement_Method"));
        var.inst.set_sampling_location(
            self.method_text(EQUILIBRATOR_DESIGN, "Location_of_Sea_Water_Intake"),
        );
        let depth = self.method_text(EQUILIBRATOR_DESIGN, "Depth_of_Sea_Water_Intake");
        if !depth.is_empty() {
            var.inst.set_sampling_elevation(format!("Sampling Depth: {}", depth));
        }
        append_labelled(&mut addn_info, "Details of CO2 Sensing", &self.co2_text("Details_Co2_Sensing"));
        *var.core.addn_info_mut() = addn_info;

        let mut gas = GasConcFields::default();
        gas.set_drying_method(self.method_text(EQUILIBRATOR_DESIGN, "Drying_Method_for_CO2_in_water"));
        let mut aqu = AquGasConcFields::default();
        aqu.set_report_temperature(report_temperature);
        Variable::AquGasConc(var, gas, aqu)
    }

    fn co2_atm_variable(&self, core: VariableCore, method: MethodType, observe_type: &str) -> Variable {
        let mut var = Self::measured_variable(core, method, CO2_SENSOR_NAME, observe_type);
        let mut addn_info = MultiString::new();
        assign_accuracy(&mut var.data, &self.co2_text("Uncertainty_Air"), &mut addn_info);
        assign_precision(&mut var.data, &self.co2_text("Resolution_Air"), &mut addn_info);
        var.inst.set_method_reference(self.co2_text("Method_References"));
        var.inst.set_method_description(self.co2_text("Measurement_Method"));
        var.inst
            .set_sampling_location(self.method_text(MARINE_AIR, "Location_and_Height"));
        append_labelled(&mut addn_info, "Details of CO2 Sensing", &self.co2_text("Details_Co2_Sensing"));
        append_labelled(&mut addn_info, "Measurement", &self.method_text(MARINE_AIR, "Measurement"));
        *var.core.addn_info_mut() = addn_info;

        let mut gas = GasConcFields::default();
        gas.set_drying_method(self.method_text(MARINE_AIR, "Drying_Method"));
        Variable::GasConc(var, gas)
    }

    /// Fill in a single-sensor variable from its sensor section
    fn sensor_variable(
        &self,
        mut variable: Variable,
        sensor: &SensorSection,
        observe_type: &str,
    ) -> Variable {
        if let Some(var) = variable.inst_var_mut() {
            var.inst.set_measure_method(MethodType::MeasuredInsitu);
            var.inst
                .set_instrument_names(MultiNames::from_comma_list(sensor.instrument));
            var.inst.set_observe_type(observe_type);
            let mut addn_info = MultiString::new();
            let accuracy = self.first_method_text(sensor.section, sensor.accuracy_tags);
            assign_accuracy(&mut var.data, &accuracy, &mut addn_info);
            let precision = self.first_method_text(sensor.section, sensor.precision_tags);
            assign_precision(&mut var.data, &precision, &mut addn_info);
            var.inst
                .set_sampling_location(self.method_text(sensor.section, "Location"));
            *var.core.addn_info_mut() = addn_info;
        }
        let normalized = self.method_text(sensor.section, "Normalized");
        if let Some(pressure) = variable.pressure_mut() {
            if !normalized.is_empty() {
                pressure.set_pressure_correction(format!("Normalized: {}", normalized));
            }
        }
        variable
    }

    fn instruments(&self) -> Vec<Instrument> {
        let mut instruments = vec![self.equilibrator(), self.co2_sensor()];

        let (mut core, analyzer) = self.sensor_parts(&SST_SENSOR);
        core.addn_info_mut()
            .append(&self.method_text(SST_SENSOR.section, "Other_Comments"));
        instruments.push(Instrument::TemperatureSensor(core, analyzer));

        let (mut core, analyzer) = self.sensor_parts(&EQU_TEMP_SENSOR);
        let mut addn_info = MultiString::new();
        append_labelled(&mut addn_info, "Warming", &self.method_text(EQU_TEMP_SENSOR.section, "Warming"));
        addn_info.append(&self.method_text(EQU_TEMP_SENSOR.section, "Other_Comments"));
        *core.addn_info_mut() = addn_info;
        instruments.push(Instrument::TemperatureSensor(core, analyzer));

        for sensor in [&ATM_PRESSURE_SENSOR, &EQU_PRESSURE_SENSOR] {
            let (mut core, analyzer) = self.sensor_parts(sensor);
            core.addn_info_mut()
                .append(&self.method_text(sensor.section, "Other_Comments"));
            instruments.push(Instrument::PressureSensor(core, analyzer));
        }

        let (mut core, analyzer) = self.sensor_parts(&SALINITY_SENSOR);
        core.addn_info_mut()
            .append(&self.method_text(SALINITY_SENSOR.section, "Other_Comments"));
        instruments.push(Instrument::SalinitySensor(core, analyzer));

        for (k, elem) in self.root().element_list(&OTHER_SENSOR).into_iter().enumerate() {
            instruments.push(Self::other_sensor(k + 1, elem));
        }

        instruments
    }

    fn equilibrator(&self) -> Instrument {
        let mut core = InstrumentCore::named("Equilibrator");
        core.addn_info_mut()
            .append(&self.method_text(EQUILIBRATOR_DESIGN, "Additional_Information"));

        // Both sensors are always added to the instrument list
        let mut sampler = SamplerFields::default();
        sampler.set_instrument_names(MultiNames::from_comma_list(
            "Equilibrator Temperature Sensor, Equilibrator Pressure Sensor",
        ));

        let mut fields = EquilibratorFields::default();
        fields.set_equilibrator_type(self.method_text(EQUILIBRATOR_DESIGN, "Equilibrator_Type"));
        let volume = self.method_text(EQUILIBRATOR_DESIGN, "Equilibrator_Volume");
        match parse_chamber_volumes(&volume) {
            Some(volumes) => {
                fields.set_chamber_vol(volumes.total);
                fields.set_chamber_water_vol(volumes.water);
                fields.set_chamber_gas_vol(volumes.headspace);
            }
            None => fields.set_chamber_vol(volume),
        }
        fields.set_water_flow_rate(self.method_text(EQUILIBRATOR_DESIGN, "Water_Flow_Rate"));
        fields.set_gas_flow_rate(self.method_text(EQUILIBRATOR_DESIGN, "Headspace_Gas_Flow_Rate"));
        fields.set_venting(self.method_text(EQUILIBRATOR_DESIGN, "Vented"));

        Instrument::Equilibrator(core, sampler, fields)
    }

    fn co2_sensor(&self) -> Instrument {
        let mut core = InstrumentCore::named(CO2_SENSOR_NAME);
        core.set_manufacturer(self.co2_text("Manufacturer"));
        core.set_model(self.co2_text("Model"));

        let mut addn_info = MultiString::new();
        for (label, tag) in [
            ("Number of non-zero gases", "No_Of_Non_Zero_Gas_Stds"),
            ("Measured CO2 Parameters", "Measured_Co2_Params"),
            ("Environmental Control", "Environmental_Control"),
            ("Analysis of CO2 Comparison", "Analysis_of_Co2_Comparision"),
        ] {
            append_labelled(&mut addn_info, label, &self.co2_text(tag));
        }
        addn_info.append(&self.co2_text("Other_Comments"));
        *core.addn_info_mut() = addn_info;

        let mut analyzer = AnalyzerFields::default();
        analyzer.set_calibration(self.co2_text("CO2_Sensor_Calibration"));

        let gases = parse_calibration_gases(&self.co2_text("Manufacturer_of_Calibration_Gas"));
        Instrument::GasSensor(core, analyzer, gases)
    }

    fn sensor_parts(&self, sensor: &SensorSection) -> (InstrumentCore, AnalyzerFields) {
        let mut core = InstrumentCore::named(sensor.instrument);
        core.set_manufacturer(self.method_text(sensor.section, "Manufacturer"));
        core.set_model(self.method_text(sensor.section, "Model"));
        let mut analyzer = AnalyzerFields::default();
        analyzer.set_calibration(self.method_text(sensor.section, "Calibration"));
        (core, analyzer)
    }

    fn other_sensor(number: usize, elem: &Element) -> Instrument {
        let mut core = InstrumentCore::named(&format!("Other Sensor {}", number));
        core.set_manufacturer(elem.element_text(&["Manufacturer"]));
        core.set_model(elem.element_text(&["Model"]));

        let first_text = |tags: [&str; 2]| {
            tags.iter()
                .map(|tag| elem.element_text(&[*tag]))
                .find(|text| !text.is_empty())
                .unwrap_or_default()
        };
        let mut addn_info = MultiString::new();
        append_labelled(&mut addn_info, "Location", &elem.element_text(&["Location"]));
        append_labelled(&mut addn_info, "Accuracy/Uncertainty", &first_text(["Accuracy", "Uncertainty"]));
        append_labelled(&mut addn_info, "Precision/Resolution", &first_text(["Precision", "Resolution"]));
        addn_info.append(&elem.element_text(&["Other_Comments"]));
        *core.addn_info_mut() = addn_info;

        let mut analyzer = AnalyzerFields::default();
        analyzer.set_calibration(elem.element_text(&["Calibration"]));
        Instrument::Analyzer(core, analyzer)
    }
}

impl FromStr for CdiacReader {
    type Err = CdiacError;

    fn from_str(xml: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_document(Document::parse_str(xml)?))
    }
}

/// Append `"label: text"` unless the text is blank
fn append_labelled(addn_info: &mut MultiString, label: &str, text: &str) {
    if !text.is_empty() {
        addn_info.append(&format!("{}: {}", label, text));
    }
}

/// Use `text` as the accuracy if it holds a positive number, otherwise keep
/// it as additional information
fn assign_accuracy(data: &mut DataVarFields, text: &str, addn_info: &mut MultiString) {
    let value = get_numeric_string(text, None);
    if !value.is_valid() || data.set_accuracy(value).is_err() {
        append_labelled(addn_info, "Accuracy/Uncertainty", text);
    }
}

/// Use `text` as the precision if it holds a positive number, otherwise keep
/// it as additional information
fn assign_precision(data: &mut DataVarFields, text: &str, addn_info: &mut MultiString) {
    let value = get_numeric_string(text, None);
    if !value.is_valid() || data.set_precision(value).is_err() {
        append_labelled(addn_info, "Precision/Resolution", text);
    }
}
