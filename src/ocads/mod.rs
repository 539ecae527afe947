//! # OCADS Writer
//!
//! Renders [`SocatMetadata`] as an OCADS metadata document, the XML form
//! accepted by NOAA's Ocean Carbon and Acidification Data System.
//!
//! ```
//! use socatmeta::metadata::SocatMetadata;
//! use socatmeta::ocads::to_ocads_string;
//!
//! let mut metadata = SocatMetadata::new();
//! metadata.misc_info.set_dataset_id("33RO20150114");
//! let xml = to_ocads_string(&metadata).unwrap();
//! assert!(xml.contains("<expocode>33RO20150114</expocode>"));
//! ```
//!
//! OCADS has dedicated elements for only some of the model fields (most of
//! them for in-situ and discrete aqueous CO2). Everything else is folded
//! into the free-text `detailedInfo` of the variable, or into the
//! dataset-level `suppleInfo`, so no information is lost.

mod error;


pub use error::OcadsError;

use std::collections::BTreeSet;
use std::io::Write;

use chrono::{TimeZone, Utc};
use log::{debug, info, warn};

use crate::metadata::{
    Datestamp, Instrument, InstrumentKind, Investigator, MethodType, Person, SocatMetadata,
    Variable, VariableKind,
};
use crate::xml::{Document, Element};

/// Name of the document root
pub const ROOT_ELEMENT_NAME: &str = "metadata";

const ACCESS_ID: &[&str] = &["related", "name"];
const SUBMISSION_DATE: &[&str] = &["submissiondate"];
const UPDATE_DATE: &[&str] = &["update"];
const SUBMITTER: &str = "datasubmitter";
const INVESTIGATOR: &str = "person";

const SYNOPSIS: &[&str] = &["abstract"];
const PURPOSE: &[&str] = &["purpose"];
const START_DATE: &[&str] = &["startdate"];
const END_DATE: &[&str] = &["enddate"];
const WEST_BOUND: &[&str] = &["westbd"];
const EAST_BOUND: &[&str] = &["eastbd"];
const SOUTH_BOUND: &[&str] = &["southbd"];
const NORTH_BOUND: &[&str] = &["northbd"];
const SPATIAL_REFERENCE: &[&str] = &["spatialReference"];
const GEOGRAPHIC_NAME: &[&str] = &["geographicName"];

const FUNDING_AGENCY: &[&str] = &["fundingAgency", "agency"];
const FUNDING_TITLE: &[&str] = &["fundingAgency", "title"];
const FUNDING_ID: &[&str] = &["fundingAgency", "ID"];
const RESEARCH_PROJECT: &[&str] = &["researchProject"];

const PLATFORM_NAME: &[&str] = &["Platform", "PlatformName"];
const PLATFORM_ID: &[&str] = &["Platform", "PlatformID"];
const PLATFORM_TYPE: &[&str] = &["Platform", "PlatformType"];
const PLATFORM_OWNER: &[&str] = &["Platform", "PlatformOwner"];
const PLATFORM_COUNTRY: &[&str] = &["Platform", "PlatformCountry"];

const DATASET_ID: &[&str] = &["expocode"];
const DATASET_NAME: &[&str] = &["cruiseID"];
const SECTION_NAME: &[&str] = &["section"];
const CITATION: &[&str] = &["citation"];
const REFERENCE: &[&str] = &["reference"];
const SUPPLE_INFO: &[&str] = &["suppleInfo"];
const WEBSITE: &[&str] = &["link_landing"];
const DOWNLOAD_URL: &[&str] = &["link_download"];

const VARIABLE: &str = "variable";

// Paths below are relative to a variable element
const COLUMN_NAME: &[&str] = &["abbrev"];
const FULL_NAME: &[&str] = &["fullname"];
const UNIT: &[&str] = &["unit"];
const DETAILED_INFO: &[&str] = &["detailedInfo"];
const UNCERTAINTY: &[&str] = &["uncertainty"];
const FLAG: &[&str] = &["flag"];
const OBSERVATION_TYPE: &[&str] = &["observationType"];
const IN_SITU: &[&str] = &["insitu"];
const MEASURED: &[&str] = &["measured"];
const CALC_METHOD: &[&str] = &["calcMethod"];
const METHOD_REFERENCE: &[&str] = &["methodReference"];
const MANIPULATION_METHOD: &[&str] = &["manipulationMethod"];
const DURATION: &[&str] = &["duration"];
const SAMPLING_INSTRUMENT: &[&str] = &["samplingInstrument"];
const ANALYZING_INSTRUMENT: &[&str] = &["analyzingInstrument"];
const SAMPLING_LOCATION: &[&str] = &["locationSeawaterIntake"];
const SAMPLING_DEPTH: &[&str] = &["DepthSeawaterIntake"];
const STORAGE_METHOD: &[&str] = &["storageMethod"];
const ANALYSIS_TEMPERATURE: &[&str] = &["temperatureMeasure"];
const ANALYSIS_WATER_VOLUME: &[&str] = &["seawatervol"];
const ANALYSIS_HEADSPACE_VOLUME: &[&str] = &["headspacevol"];
const REPLICATE: &[&str] = &["replicate"];
const RESEARCHER_NAME: &[&str] = &["researcherName"];
const RESEARCHER_ORGANIZATION: &[&str] = &["researcherInstitution"];
const INTERNAL: &[&str] = &["internal"];
const WATER_VAPOR_CORRECTION: &[&str] = &["waterVaportCorrection"];
const TEMPERATURE_CORRECTION: &[&str] = &["temperatureCorrection"];
const REPORT_TEMPERATURE: &[&str] = &["co2ReportTemperature"];
const BIOLOGICAL_SUBJECT: &[&str] = &["biologicalSubject"];
const SPECIES_ID: &[&str] = &["speciesID"];
const LIFE_STAGE: &[&str] = &["lifeStage"];

const EQUILIBRATOR_TYPE: &[&str] = &["equilibrator", "type"];
const EQUILIBRATOR_VOLUME: &[&str] = &["equilibrator", "volume"];
const EQUILIBRATOR_VENTED: &[&str] = &["equilibrator", "vented"];
const EQUILIBRATOR_WATER_FLOW_RATE: &[&str] = &["equilibrator", "waterFlowRate"];
const EQUILIBRATOR_GAS_FLOW_RATE: &[&str] = &["equilibrator", "gasFlowRate"];
const EQUILIBRATOR_TEMPERATURE: &[&str] = &["equilibrator", "temperatureEquilibratorMethod"];
const EQUILIBRATOR_PRESSURE: &[&str] = &["equilibrator", "pressureEquilibratorMethod"];
const EQUILIBRATOR_DRYING: &[&str] = &["equilibrator", "dryMethod"];

const GAS_DETECTOR_MANUFACTURER: &[&str] = &["gasDetector", "manufacturer"];
const GAS_DETECTOR_MODEL: &[&str] = &["gasDetector", "model"];
const GAS_DETECTOR_RESOLUTION: &[&str] = &["gasDetector", "resolution"];
const GAS_DETECTOR_UNCERTAINTY: &[&str] = &["gasDetector", "uncertainty"];
const STANDARDIZATION_DESCRIPTION: &[&str] = &["standardization", "description"];
const STANDARDIZATION_FREQUENCY: &[&str] = &["standardization", "frequency"];
const STANDARD_GAS: &[&str] = &["standardization", "standardgas"];

// Relative to a standard gas element
const STANDARD_GAS_MANUFACTURER: &[&str] = &["manufacturer"];
const STANDARD_GAS_CONCENTRATION: &[&str] = &["concentration"];
const STANDARD_GAS_UNCERTAINTY: &[&str] = &["uncertainty"];

/// Writes OCADS documents to an underlying writer.
///
/// Each call to [`write_ocads_xml`](Self::write_ocads_xml) writes one
/// complete document with an XML declaration.
#[derive(Debug)]
pub struct OcadsWriter<W: Write> {
    writer: W,
}

impl<W: Write> OcadsWriter<W> {
    /// Create a writer that outputs to `writer`
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write the OCADS document describing `metadata`
    pub fn write_ocads_xml(&mut self, metadata: &SocatMetadata) -> Result<(), OcadsError> {
        let document = build_ocads_document(metadata);
        document.write_pretty(&mut self.writer)?;
        info!(
            "Wrote OCADS document for '{}' with {} variables",
            metadata.misc_info.dataset_id(),
            metadata.variables.len()
        );
        Ok(())
    }

    /// Flush and return the underlying writer
    pub fn finish(mut self) -> Result<W, OcadsError> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

/// The OCADS document describing `metadata` as pretty-printed text
pub fn to_ocads_string(metadata: &SocatMetadata) -> Result<String, OcadsError> {
    let mut writer = OcadsWriter::new(Vec::new());
    writer.write_ocads_xml(metadata)?;
    let buffer = writer.finish()?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Build the OCADS element tree describing `metadata`
pub fn build_ocads_document(metadata: &SocatMetadata) -> Document {
    let mut document = Document::new(ROOT_ELEMENT_NAME);
    let root = document.root_mut();
    let info = &metadata.misc_info;

    root.set_element_text(ACCESS_ID, info.access_id());
    let mut history = info.history().iter();
    if let Some(submitted) = history.next() {
        if let Some(date) = history_date(submitted) {
            root.set_element_text(SUBMISSION_DATE, &date);
        }
    }
    for updated in history {
        if let Some(date) = history_date(updated) {
            root.add_list_element(UPDATE_DATE).set_text(date);
        }
    }

    let mut submitter = Element::new(SUBMITTER);
    add_investigator_fields(&mut submitter, metadata.submitter.investigator());
    if !submitter.children().is_empty() {
        root.add_child(submitter);
    }
    for pi in &metadata.investigators {
        let mut person = Element::new(INVESTIGATOR);
        person.set_element_text(&["role"], "investigator");
        add_investigator_fields(&mut person, pi);
        root.add_child(person);
    }

    root.set_element_text(SYNOPSIS, info.synopsis());
    root.set_element_text(PURPOSE, info.purpose());

    let coverage = &metadata.coverage;
    if let Some(date) = data_date_string(coverage.earliest_data_time()) {
        root.set_element_text(START_DATE, &date);
    }
    if let Some(date) = data_date_string(coverage.latest_data_time()) {
        root.set_element_text(END_DATE, &date);
    }
    root.set_element_text(WEST_BOUND, coverage.western_longitude().value());
    root.set_element_text(EAST_BOUND, coverage.eastern_longitude().value());
    root.set_element_text(SOUTH_BOUND, coverage.southern_latitude().value());
    root.set_element_text(NORTH_BOUND, coverage.northern_latitude().value());
    root.set_element_text(SPATIAL_REFERENCE, coverage.spatial_reference());
    for region in coverage.geographic_names() {
        root.add_list_element(GEOGRAPHIC_NAME).set_text(region.as_str());
    }

    root.set_element_text(FUNDING_AGENCY, info.funding_agency());
    root.set_element_text(FUNDING_TITLE, info.funding_title());
    root.set_element_text(FUNDING_ID, info.funding_id());
    root.set_element_text(RESEARCH_PROJECT, info.research_project());

    let platform = &metadata.platform;
    root.set_element_text(PLATFORM_NAME, platform.platform_name());
    root.set_element_text(PLATFORM_ID, platform.platform_id());
    root.set_element_text(PLATFORM_TYPE, platform.platform_type().as_str());
    root.set_element_text(PLATFORM_OWNER, platform.platform_owner());
    root.set_element_text(PLATFORM_COUNTRY, platform.platform_country());

    root.set_element_text(DATASET_ID, info.dataset_id());
    root.set_element_text(DATASET_NAME, info.dataset_name());
    root.set_element_text(SECTION_NAME, info.section_name());
    root.set_element_text(CITATION, info.citation());
    root.set_element_text(REFERENCE, &info.references().as_one_string());

    let mut used_names = BTreeSet::new();
    for var in &metadata.variables {
        root.add_child(variable_element(var, &metadata.instruments, &mut used_names));
    }

    let mut supple_info: Vec<String> = Vec::new();
    for inst in &metadata.instruments {
        if !used_names.contains(inst.name()) {
            debug!("Instrument '{}' is not used by any variable", inst.name());
            supple_info.push(instrument_description(inst));
        }
    }
    supple_info.extend(
        info.ports_of_call()
            .iter()
            .map(|port| format!("Port of Call: {}", port)),
    );
    supple_info.extend(info.addn_info().iter().cloned());
    root.set_element_text(SUPPLE_INFO, &supple_info.join("\n"));

    root.set_element_text(WEBSITE, info.website());
    root.set_element_text(DOWNLOAD_URL, info.download_url());

    document
}

/// `yyyy-MM-dd` of a history entry; an invalid entry is skipped
fn history_date(stamp: &Datestamp) -> Option<String> {
    match stamp.date_string() {
        Ok(date) => Some(date),
        Err(err) => {
            warn!("Skipping history date: {}", err);
            None
        }
    }
}

/// `yyyy-MM-dd` (UTC) of a data time in seconds since the epoch
fn data_date_string(time: f64) -> Option<String> {
    if !time.is_finite() {
        return None;
    }
    Utc.timestamp_opt(time.floor() as i64, 0)
        .single()
        .map(|instant| instant.format("%Y-%m-%d").to_string())
}

/// "First Middle Last", collapsing the gaps left by empty parts
fn ocads_full_name(person: &Person) -> String {
    let given = format!("{} {}", person.first_name(), person.middle());
    format!("{} {}", given.trim(), person.last_name())
        .trim()
        .to_string()
}

fn add_investigator_fields(elem: &mut Element, pi: &Investigator) {
    let person = pi.person();
    elem.set_element_text(&["name"], &ocads_full_name(person));
    elem.set_element_text(&["organization"], person.organization());
    let mut streets = pi.streets().clone();
    if let Some(first) = streets.pop() {
        elem.set_element_text(&["deliverypoint1"], &first);
    }
    elem.set_element_text(&["deliverypoint2"], &streets.as_one_string());
    elem.set_element_text(&["city"], pi.city());
    elem.set_element_text(&["administrativeArea"], pi.region());
    elem.set_element_text(&["zip"], pi.zip_code());
    elem.set_element_text(&["country"], pi.country());
    elem.set_element_text(&["email"], pi.email());
    elem.set_element_text(&["phone"], pi.phone());
    elem.set_element_text(&["ID"], person.id());
    elem.set_element_text(&["IDtype"], person.id_type());
}

/// Append `line` to the text at `path`, on a new line if there is text
fn append_line(elem: &mut Element, path: &[&str], line: &str) {
    let mut text = elem.element_text(path);
    if !text.is_empty() {
        text.push('\n');
    }
    text.push_str(line);
    elem.set_element_text(path, &text);
}

/// Put the non-empty `lines` in front of the detailed information
fn prepend_detailed_info(elem: &mut Element, lines: &[String]) {
    let mut parts: Vec<String> = lines.iter().filter(|line| !line.is_empty()).cloned().collect();
    if parts.is_empty() {
        return;
    }
    let existing = elem.element_text(DETAILED_INFO);
    if !existing.is_empty() {
        parts.push(existing);
    }
    elem.set_element_text(DETAILED_INFO, &parts.join("\n"));
}

/// `"label: value"`, or empty for an empty value
fn labelled(label: &str, value: &str) -> String {
    if value.is_empty() {
        String::new()
    } else {
        format!("{}: {}", label, value)
    }
}

fn variable_element(
    var: &Variable,
    instruments: &[Instrument],
    used_names: &mut BTreeSet<String>,
) -> Element {
    let mut elem = Element::new(VARIABLE);
    let core = var.core();
    elem.set_element_text(COLUMN_NAME, core.col_name());
    elem.set_element_text(FULL_NAME, core.full_name());
    elem.set_element_text(UNIT, var.var_unit());

    let mut details = vec![labelled("Missing Value", core.missing_value())];
    details.extend(core.addn_info().iter().cloned());
    prepend_detailed_info(&mut elem, &details);

    if let Some(data) = var.data() {
        elem.set_element_text(UNCERTAINTY, &data.accuracy().as_one_string());
        if !data.flag_col_name().is_empty() {
            elem.set_element_text(FLAG, &format!("Given in column: {}", data.flag_col_name()));
        }
        let precision = data.precision().as_one_string();
        prepend_detailed_info(&mut elem, &[labelled("Resolution/Precision", &precision)]);
    }
    if var.inst().is_some() {
        add_inst_data_fields(&mut elem, var, instruments, used_names);
    }
    if let Some(pressure) = var.pressure() {
        prepend_detailed_info(
            &mut elem,
            &[labelled("Pressure Correction", pressure.pressure_correction())],
        );
    }
    if let Some(gas) = var.gas() {
        if is_insitu_aqueous(var) {
            elem.set_element_text(EQUILIBRATOR_DRYING, gas.drying_method());
            elem.set_element_text(WATER_VAPOR_CORRECTION, gas.water_vapor_correction());
        } else {
            prepend_detailed_info(
                &mut elem,
                &[
                    labelled("Drying Method", gas.drying_method()),
                    labelled("Water Vapor Correction", gas.water_vapor_correction()),
                ],
            );
        }
    }
    if let Some(aqu) = var.aqu() {
        elem.set_element_text(REPORT_TEMPERATURE, aqu.report_temperature());
        elem.set_element_text(TEMPERATURE_CORRECTION, aqu.temperature_correction());
    }
    if let Some(bio) = var.bio() {
        elem.set_element_text(BIOLOGICAL_SUBJECT, bio.biological_subject());
        elem.set_element_text(SPECIES_ID, bio.species_id());
        elem.set_element_text(LIFE_STAGE, bio.life_stage());
    }
    elem
}

fn measure_method(var: &Variable) -> MethodType {
    var.inst()
        .map(|inst| inst.measure_method())
        .unwrap_or_default()
}

fn is_insitu_aqueous(var: &Variable) -> bool {
    var.kind() == VariableKind::AquGasConc && measure_method(var) == MethodType::MeasuredInsitu
}

fn is_discrete_aqueous(var: &Variable) -> bool {
    var.kind() == VariableKind::AquGasConc && measure_method(var) == MethodType::MeasuredDiscrete
}

fn add_inst_data_fields(
    elem: &mut Element,
    var: &Variable,
    instruments: &[Instrument],
    used_names: &mut BTreeSet<String>,
) {
    let Some(inst) = var.inst() else {
        return;
    };
    elem.set_element_text(OBSERVATION_TYPE, inst.observe_type());
    let method = inst.measure_method();
    if method != MethodType::Unspecified {
        let method = method.to_string();
        elem.set_element_text(IN_SITU, &method);
        elem.set_element_text(MEASURED, &method);
    }
    elem.set_element_text(CALC_METHOD, inst.method_description());
    elem.set_element_text(METHOD_REFERENCE, inst.method_reference());
    elem.set_element_text(MANIPULATION_METHOD, inst.manipulation_description());
    elem.set_element_text(DURATION, inst.duration());

    for instrument in instruments {
        if !inst.instrument_names().contains(instrument.name()) {
            continue;
        }
        if instrument.is_sampler() {
            add_sampler_elements(elem, var, instrument, instruments, used_names);
        } else if instrument.is_analyzer() {
            add_analyzer_elements(elem, var, instrument, used_names);
        }
    }

    if is_insitu_aqueous(var) {
        elem.set_element_text(SAMPLING_LOCATION, inst.sampling_location());
        elem.set_element_text(SAMPLING_DEPTH, inst.sampling_elevation());
    } else {
        prepend_detailed_info(
            elem,
            &[
                labelled("Sampling location", inst.sampling_location()),
                labelled("Sampling elevation", inst.sampling_elevation()),
            ],
        );
    }

    if is_discrete_aqueous(var) {
        elem.set_element_text(STORAGE_METHOD, inst.storage_method());
        elem.set_element_text(ANALYSIS_TEMPERATURE, inst.analysis_temperature());
    } else {
        prepend_detailed_info(
            elem,
            &[
                labelled("Storage Method", inst.storage_method()),
                labelled("Measurement Temperature", inst.analysis_temperature()),
            ],
        );
    }

    elem.set_element_text(REPLICATE, inst.replication());
    elem.set_element_text(RESEARCHER_NAME, &ocads_full_name(inst.researcher()));
    elem.set_element_text(RESEARCHER_ORGANIZATION, inst.researcher().organization());

    // 4 and 5 are the OCADS codes for in-situ and discrete aqueous CO2
    let internal = if is_insitu_aqueous(var) {
        "4"
    } else if is_discrete_aqueous(var) {
        "5"
    } else {
        "0"
    };
    elem.set_element_text(INTERNAL, internal);
}

fn add_sampler_elements(
    elem: &mut Element,
    var: &Variable,
    sampler: &Instrument,
    instruments: &[Instrument],
    used_names: &mut BTreeSet<String>,
) {
    used_names.insert(sampler.name().to_string());

    if let (VariableKind::AquGasConc, Some(equil)) = (var.kind(), sampler.equilibrator()) {
        match measure_method(var) {
            MethodType::MeasuredInsitu => {
                elem.set_element_text(EQUILIBRATOR_TYPE, equil.equilibrator_type());
                let mut volume = vec![equil.chamber_vol().to_string()];
                volume.push(labelled("Water Volume", equil.chamber_water_vol()));
                volume.push(labelled("Gas Volume", equil.chamber_gas_vol()));
                volume.retain(|part| !part.is_empty());
                elem.set_element_text(EQUILIBRATOR_VOLUME, &volume.join("; "));
                elem.set_element_text(EQUILIBRATOR_VENTED, equil.venting());
                elem.set_element_text(EQUILIBRATOR_WATER_FLOW_RATE, equil.water_flow_rate());
                elem.set_element_text(EQUILIBRATOR_GAS_FLOW_RATE, equil.gas_flow_rate());

                let attached = sampler
                    .sampler()
                    .map(|fields| fields.instrument_names())
                    .filter(|names| !names.is_empty());
                if let Some(attached) = attached {
                    for sensor in instruments.iter().filter(|i| attached.contains(i.name())) {
                        let path = match sensor.kind() {
                            InstrumentKind::TemperatureSensor => EQUILIBRATOR_TEMPERATURE,
                            InstrumentKind::PressureSensor => EQUILIBRATOR_PRESSURE,
                            _ => continue,
                        };
                        used_names.insert(sensor.name().to_string());
                        append_line(elem, path, &instrument_description(sensor));
                    }
                }
            }
            MethodType::MeasuredDiscrete => {
                let water = match equil.chamber_water_vol() {
                    "" => format!("Water volume of: {}", equil.chamber_vol()),
                    vol => vol.to_string(),
                };
                elem.set_element_text(ANALYSIS_WATER_VOLUME, &water);
                let headspace = match equil.chamber_gas_vol() {
                    "" => format!("Gas volume of: {}", equil.chamber_vol()),
                    vol => vol.to_string(),
                };
                elem.set_element_text(ANALYSIS_HEADSPACE_VOLUME, &headspace);
            }
            _ => {}
        }
    }

    append_line(elem, SAMPLING_INSTRUMENT, &instrument_description(sampler));
}

fn add_analyzer_elements(
    elem: &mut Element,
    var: &Variable,
    analyzer: &Instrument,
    used_names: &mut BTreeSet<String>,
) {
    used_names.insert(analyzer.name().to_string());
    append_line(elem, ANALYZING_INSTRUMENT, &instrument_description(analyzer));

    if var.kind() != VariableKind::AquGasConc {
        return;
    }
    let Some(gases) = analyzer.calibration_gases() else {
        return;
    };
    elem.set_element_text(GAS_DETECTOR_MANUFACTURER, analyzer.core().manufacturer());
    elem.set_element_text(GAS_DETECTOR_MODEL, analyzer.core().model());
    if let Some(data) = var.data() {
        elem.set_element_text(GAS_DETECTOR_RESOLUTION, &data.precision().as_one_string());
        elem.set_element_text(GAS_DETECTOR_UNCERTAINTY, &data.accuracy().as_one_string());
    }
    let calibration = analyzer.analyzer().map(|fields| fields.calibration()).unwrap_or("");
    elem.set_element_text(STANDARDIZATION_DESCRIPTION, calibration);

    let mut frequencies = Vec::new();
    for (num, gas) in gases.iter().enumerate() {
        let gas_elem = elem.add_list_element(STANDARD_GAS);
        let manufacturer = match gas.supplier() {
            "" => gas.id().to_string(),
            supplier => format!("{} from {}", gas.id(), supplier),
        };
        gas_elem.set_element_text(STANDARD_GAS_MANUFACTURER, &manufacturer);
        if gas.concentration().is_valid() {
            let concentration = format!("{} {}", gas.concentration().as_one_string(), gas.gas_type());
            gas_elem.set_element_text(STANDARD_GAS_CONCENTRATION, &concentration);
        }
        if gas.accuracy().is_valid() {
            gas_elem.set_element_text(STANDARD_GAS_UNCERTAINTY, &gas.accuracy().as_one_string());
        }
        if !gas.use_frequency().is_empty() {
            frequencies.push(format!("calibration gas {}: {}", num + 1, gas.use_frequency()));
        }
    }
    elem.set_element_text(STANDARDIZATION_FREQUENCY, &frequencies.join(", "));
}

/// One-line description of an instrument:
/// `"name: Manufacturer: m; Model: x; ..."`, or `"name: (no information)"`.
pub fn instrument_description(inst: &Instrument) -> String {
    let core = inst.core();
    let mut parts = vec![
        labelled("Manufacturer", core.manufacturer()),
        labelled("Model", core.model()),
        labelled("ID/Serial", core.id()),
    ];
    if let Some(analyzer) = inst.analyzer() {
        parts.push(labelled("Calibration", analyzer.calibration()));
    }
    parts.extend(core.addn_info().iter().cloned());
    parts.retain(|part| !part.is_empty());

    if parts.is_empty() {
        format!("{}: (no information)", inst.name())
    } else {
        format!("{}: {}", inst.name(), parts.join("; "))
    }
}
