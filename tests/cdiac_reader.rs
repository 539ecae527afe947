//! Integration tests for reading CDIAC documents
//!
//! The fixture is an AOML underway document for cruise 33RO20150114.

use socatmeta::cdiac::CdiacReader;
use socatmeta::metadata::{
    Datestamp, InstrumentKind, MethodType, PlatformType, SocatMetadata, Variable, VariableKind,
};

const AOML_DOCUMENT: &str = include_str!("fixtures/aoml_cdiac.xml");

fn read_aoml() -> SocatMetadata {
    let reader: CdiacReader = AOML_DOCUMENT.parse().unwrap();
    reader.create_socat_metadata()
}

fn variable<'a>(metadata: &'a SocatMetadata, col_name: &str) -> &'a Variable {
    metadata
        .variables
        .iter()
        .find(|var| var.core().col_name() == col_name)
        .unwrap_or_else(|| panic!("no variable {}", col_name))
}

#[test]
fn test_open_fixture_file() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/aoml_cdiac.xml");
    let reader = CdiacReader::open(&path).unwrap();
    assert_eq!(reader.create_socat_metadata(), read_aoml());
}

#[test]
fn test_submitter_and_investigators() {
    let metadata = read_aoml();

    let submitter = metadata.submitter.investigator();
    assert_eq!(submitter.person().last_name(), "Castle");
    assert_eq!(submitter.person().first_name(), "Robert");
    assert_eq!(submitter.person().middle(), "");
    assert_eq!(
        submitter.person().organization(),
        "NOAA/Atlantic Oceanographic & Meteorological Laboratory"
    );
    assert_eq!(submitter.streets().lines(), ["4301 Rickenbacker Causeway; Miami, FL 33149"]);
    assert_eq!(submitter.phone(), "305-361-4418");
    assert_eq!(submitter.email(), "Robert.Castle@noaa.gov");

    assert_eq!(metadata.investigators.len(), 1);
    let pi = &metadata.investigators[0];
    assert_eq!(pi.person().last_name(), "Wanninkhof");
    assert_eq!(pi.person().first_name(), "Rik");
    assert_eq!(pi.person().organization(), "NOAA/AOML");
    assert_eq!(pi.streets().lines(), ["4301 Rickenbacker Causeway; Miami Fl, 33149"]);
    assert_eq!(pi.phone(), "305-361-4379");
    assert_eq!(pi.email(), "Rik.Wanninkhof@noaa.gov");
}

#[test]
fn test_misc_info() {
    let metadata = read_aoml();
    let misc = &metadata.misc_info;

    assert_eq!(misc.dataset_id(), "33RO20150114");
    assert_eq!(misc.dataset_name(), "RB1501A");
    assert_eq!(misc.section_name(), "");
    assert_eq!(
        misc.funding_agency(),
        "NOAA Climate Observation Office/Climate Observations Division"
    );
    assert_eq!(misc.website(), "http://www.aoml.noaa.gov/ocd/gcc/rvbrown_introduction.php");
    assert!(misc.citation().starts_with("Wanninkhof, R., R. D. Castle, and J. Shannahoff. 2013."));
    assert_eq!(misc.ports_of_call().lines(), ["Honolulu, HI", "San Francisco, CA"]);

    let references = misc.references().lines();
    assert_eq!(references.len(), 26);
    assert_eq!(
        references[0],
        "DOE (1994). Handbook of methods for the analysis of the various"
    );

    let addn_info = misc.addn_info().lines();
    assert_eq!(addn_info[0], "Experiment Type: Research Cruise");
    assert_eq!(addn_info[1], "Cruise Info: CALWATER II Leg 1");
    assert_eq!(
        addn_info[2],
        "Website Note: All AOML fCO2 underway data from the R/V Ronald H. Brown are posted on this site."
    );
    assert!(addn_info[3].starts_with("(1.) It was determined"));

    assert_eq!(*misc.start_datestamp(), Datestamp::new(2015, 1, 15, 0, 0, 0));
    assert_eq!(*misc.end_datestamp(), Datestamp::new(2015, 1, 29, 0, 0, 0));
    assert_eq!(misc.history(), [Datestamp::new(2016, 1, 20, 0, 0, 0)]);
}

#[test]
fn test_platform_and_coverage() {
    let metadata = read_aoml();

    let platform = &metadata.platform;
    assert_eq!(platform.platform_id(), "33RO");
    assert_eq!(platform.platform_name(), "Ronald H. Brown");
    assert_eq!(platform.platform_type(), PlatformType::Ship);
    assert_eq!(platform.platform_owner(), "NOAA");
    assert_eq!(platform.platform_country(), "");

    let coverage = &metadata.coverage;
    assert_eq!(coverage.western_longitude().value(), "-158.0");
    assert_eq!(coverage.western_longitude().unit(), "dec deg E");
    assert_eq!(coverage.eastern_longitude().value(), "-122.6");
    assert_eq!(coverage.southern_latitude().value(), "-21.2");
    assert_eq!(coverage.southern_latitude().unit(), "dec deg N");
    assert_eq!(coverage.northern_latitude().value(), "38.0");
    assert_eq!(coverage.earliest_data_time(), 1_421_280_000.0);
    assert_eq!(coverage.latest_data_time(), 1_422_575_999.0);
    assert!(coverage.geographic_names().is_empty());
}

#[test]
fn test_instruments() {
    let metadata = read_aoml();
    let names: Vec<&str> = metadata.instruments.iter().map(|inst| inst.name()).collect();
    assert_eq!(
        names,
        [
            "Equilibrator",
            "CO2 Sensor",
            "Water Temperature Sensor",
            "Equilibrator Temperature Sensor",
            "Atmospheric Pressure Sensor",
            "Equilibrator Pressure Sensor",
            "Salinity Sensor",
            "Other Sensor 1",
        ]
    );

    let equilibrator = &metadata.instruments[0];
    let fields = equilibrator.equilibrator().unwrap();
    assert_eq!(fields.equilibrator_type(), "Sprayhead above dynamic pool, with thermal jacket");
    assert_eq!(fields.chamber_vol(), "0.95 L");
    assert_eq!(fields.chamber_water_vol(), "0.4 L");
    assert_eq!(fields.chamber_gas_vol(), "0.55 L");
    assert_eq!(fields.water_flow_rate(), "1.5 - 2.0 L/min");
    assert_eq!(fields.gas_flow_rate(), "70 - 150 ml/min");
    assert_eq!(fields.venting(), "Yes");
    assert_eq!(
        equilibrator.core().addn_info().lines(),
        ["Primary equlibrator is vented through a secondary equilibrator"]
    );
    assert_eq!(
        equilibrator.sampler().unwrap().instrument_names().names(),
        ["Equilibrator Temperature Sensor", "Equilibrator Pressure Sensor"]
    );

    let co2_sensor = &metadata.instruments[1];
    assert_eq!(co2_sensor.kind(), InstrumentKind::GasSensor);
    assert_eq!(co2_sensor.core().manufacturer(), "LI-COR");
    assert_eq!(co2_sensor.core().model(), "LI-6262");
    let addn_info = co2_sensor.core().addn_info().lines();
    assert_eq!(addn_info.len(), 2);
    assert_eq!(addn_info[0], "Number of non-zero gases: 4");
    assert!(addn_info[1].starts_with("The instrument is located in an air-conditioned laboratory."));
    assert!(co2_sensor
        .analyzer()
        .unwrap()
        .calibration()
        .starts_with("The analyzer is calibrated every 3.25 hours"));

    let gases = co2_sensor.calibration_gases().unwrap();
    assert_eq!(gases.len(), 2);
    assert_eq!(gases[0].id(), "ESRL in Boulder, CO.");
    assert_eq!(
        gases[1].id(),
        "Std 1: CA04957, 282.55 ppm; Std 2: CC105863, 380.22 ppm; Std 3: CB09696, 453.04 ppm; Std 4: CB09032, 539.38 ppm"
    );
    for gas in gases {
        assert_eq!(gas.gas_type(), "CO2");
        assert_eq!(gas.supplier(), "");
        assert!(!gas.concentration().is_valid());
        assert!(!gas.accuracy().is_valid());
    }

    let sst_sensor = &metadata.instruments[2];
    assert_eq!(sst_sensor.kind(), InstrumentKind::TemperatureSensor);
    assert_eq!(sst_sensor.core().manufacturer(), "Seabird");
    assert_eq!(sst_sensor.core().model(), "SBE-21");
    assert_eq!(sst_sensor.analyzer().unwrap().calibration(), "Factory calibration");

    let eqt_sensor = &metadata.instruments[3];
    assert_eq!(eqt_sensor.core().manufacturer(), "Hart");
    assert_eq!(eqt_sensor.core().model(), "1521");
    assert_eq!(eqt_sensor.core().addn_info().lines(), ["Warming: 0.1 - 0.6 °C"]);

    let atm_sensor = &metadata.instruments[4];
    assert_eq!(atm_sensor.kind(), InstrumentKind::PressureSensor);
    assert_eq!(atm_sensor.core().manufacturer(), "Vaisala");
    assert_eq!(atm_sensor.core().model(), "PTB330");

    let eqp_sensor = &metadata.instruments[5];
    assert_eq!(eqp_sensor.core().manufacturer(), "Setra");
    assert_eq!(eqp_sensor.core().model(), "270");
    assert_eq!(eqp_sensor.analyzer().unwrap().calibration(), "Factory calibration.");

    let sal_sensor = &metadata.instruments[6];
    assert_eq!(sal_sensor.kind(), InstrumentKind::SalinitySensor);
    assert_eq!(sal_sensor.core().model(), "SBE-45");

    let other = &metadata.instruments[7];
    assert_eq!(other.kind(), InstrumentKind::Analyzer);
    assert_eq!(other.core().manufacturer(), "Setra");
    assert_eq!(other.core().model(), "239");
    let addn_info = other.core().addn_info().lines();
    assert_eq!(addn_info.len(), 4);
    assert_eq!(addn_info[0], "Location: Attached to equilibrator headspace");
    assert_eq!(addn_info[1], "Accuracy/Uncertainty: ± 0.052 hPa");
    assert_eq!(addn_info[2], "Precision/Resolution: 0.01 hPa");
    assert!(addn_info[3].starts_with("Pressure reading from the Setra-270"));
}

#[test]
fn test_co2_variables() {
    let metadata = read_aoml();
    assert_eq!(metadata.variables.len(), 13);

    let xco2_water = variable(&metadata, "xCO2_EQU_ppm");
    assert_eq!(xco2_water.kind(), VariableKind::AquGasConc);
    assert_eq!(xco2_water.var_unit(), "");
    assert_eq!(xco2_water.flag_col_name(), Some("WOCE_QC_FLAG"));
    let data = xco2_water.data().unwrap();
    assert_eq!(data.accuracy().value(), "1");
    assert_eq!(data.accuracy().unit(), "microatmospheres");
    assert_eq!(data.precision().value(), "0.01");
    assert_eq!(data.precision().unit(), "microatmosphere");
    assert_eq!(xco2_water.core().addn_info().lines(), ["Frequency: Every 150 seconds"]);
    let inst = xco2_water.inst().unwrap();
    assert_eq!(inst.observe_type(), "Surface Underway");
    assert_eq!(inst.measure_method(), MethodType::MeasuredInsitu);
    assert_eq!(inst.method_description(), "Infrared absorption of dry sample gas.");
    assert!(inst.method_reference().starts_with("Pierrot, D., C. Neil, K. Sullivan"));
    assert_eq!(inst.sampling_location(), "Bow");
    assert_eq!(inst.sampling_elevation(), "Sampling Depth: 5 meters");
    assert_eq!(inst.instrument_names().names(), ["Equilibrator", "CO2 Sensor"]);
    assert!(xco2_water
        .gas()
        .unwrap()
        .drying_method()
        .starts_with("Gas stream passes through a thermoelectric condenser (~5 °C)"));
    assert_eq!(xco2_water.aqu().unwrap().report_temperature(), "equilibrator temperature");

    let xco2_atm = variable(&metadata, "xCO2_ATM_ppm");
    assert_eq!(xco2_atm.kind(), VariableKind::GasConc);
    assert_eq!(xco2_atm.data().unwrap().accuracy().as_one_string(), "0.2 ppm");
    assert_eq!(xco2_atm.data().unwrap().precision().as_one_string(), "0.01 ppm");
    assert_eq!(
        xco2_atm.core().addn_info().lines(),
        ["Measurement: Yes, 5 readings in a group every 3.25 hours."]
    );
    assert_eq!(
        xco2_atm.inst().unwrap().sampling_location(),
        "Bow tower ~10 m above the sea surface."
    );
    assert_eq!(xco2_atm.inst().unwrap().instrument_names().names(), ["CO2 Sensor"]);
    assert_eq!(xco2_atm.flag_col_name(), Some(""));

    let xco2_interp = variable(&metadata, "xCO2_ATM_interpolated_ppm");
    assert_eq!(xco2_interp.inst().unwrap().measure_method(), MethodType::Computed);

    let fco2_water = variable(&metadata, "fCO2_SW@SST_uatm");
    assert_eq!(fco2_water.kind(), VariableKind::AquGasConc);
    assert_eq!(fco2_water.flag_col_name(), Some("WOCE_QC_FLAG"));
    assert_eq!(fco2_water.aqu().unwrap().report_temperature(), "SST");

    let fco2_interp = variable(&metadata, "fCO2_ATM_interpolated_uatm");
    assert_eq!(fco2_interp.kind(), VariableKind::GasConc);

    for col_name in ["dfCO2_uatm", "WOCE_QC_FLAG", "QC_SUBFLAG"] {
        assert_eq!(variable(&metadata, col_name).kind(), VariableKind::Plain, "{}", col_name);
    }
}

#[test]
fn test_sensor_variables() {
    let metadata = read_aoml();

    let pres_equ = variable(&metadata, "PRES_EQU_hPa");
    assert_eq!(pres_equ.kind(), VariableKind::AirPressure);
    assert_eq!(pres_equ.var_unit(), "hPa");
    assert_eq!(pres_equ.data().unwrap().accuracy().value(), "0.05");
    assert_eq!(pres_equ.data().unwrap().precision().value(), "0.015");
    assert!(pres_equ.core().addn_info().is_empty());
    assert_eq!(
        pres_equ.inst().unwrap().sampling_location(),
        "Attached to CO2 analyzer exit to lab."
    );
    assert_eq!(pres_equ.pressure().unwrap().pressure_correction(), "");

    let pres_atm = variable(&metadata, "PRES_ATM@SSP_hPa");
    assert_eq!(pres_atm.data().unwrap().accuracy().value(), "0.2");
    assert_eq!(pres_atm.data().unwrap().precision().value(), "0.08");
    assert_eq!(pres_atm.pressure().unwrap().pressure_correction(), "Normalized: yes");
    assert_eq!(
        pres_atm.inst().unwrap().instrument_names().names(),
        ["Atmospheric Pressure Sensor"]
    );

    let temp_equ = variable(&metadata, "TEMP_EQU_C");
    assert_eq!(temp_equ.kind(), VariableKind::Temperature);
    assert_eq!(temp_equ.var_unit(), "°C");
    assert_eq!(temp_equ.data().unwrap().accuracy().value(), "0.025");
    assert_eq!(temp_equ.data().unwrap().precision().value(), "0.01");

    let sst = variable(&metadata, "SST_C");
    assert_eq!(sst.data().unwrap().accuracy().value(), "0.01");
    assert_eq!(sst.data().unwrap().precision().value(), "0.001");
    assert_eq!(
        sst.inst().unwrap().sampling_location(),
        "Bow thruster room, before sea water pump, ~5 m below water line."
    );
    assert_eq!(sst.inst().unwrap().instrument_names().names(), ["Water Temperature Sensor"]);

    let salinity = variable(&metadata, "SAL_permil");
    assert_eq!(salinity.kind(), VariableKind::InstData);
    assert_eq!(salinity.var_unit(), "");
    assert_eq!(salinity.data().unwrap().accuracy().as_one_string(), "0.005 permil");
    assert_eq!(salinity.data().unwrap().precision().value(), "0.0002");
}

#[test]
fn test_metadata_json_round_trip() {
    let metadata = read_aoml();
    let json = metadata.to_json().unwrap();
    assert_eq!(SocatMetadata::from_json(&json).unwrap(), metadata);
}
