//! Translation of the AOML CDIAC fixture into an OCADS document

use std::io::{BufWriter, Read, Seek, SeekFrom};

use socatmeta::cdiac::CdiacReader;
use socatmeta::metadata::SocatMetadata;
use socatmeta::ocads::{build_ocads_document, OcadsWriter};
use socatmeta::xml::{Document, Element};

const AOML_DOCUMENT: &str = include_str!("fixtures/aoml_cdiac.xml");

fn read_aoml() -> SocatMetadata {
    let reader: CdiacReader = AOML_DOCUMENT.parse().unwrap();
    reader.create_socat_metadata()
}

fn variable<'a>(document: &'a Document, abbrev: &str) -> &'a Element {
    document
        .root()
        .element_list(&["variable"])
        .into_iter()
        .find(|var| var.element_text(&["abbrev"]) == abbrev)
        .unwrap_or_else(|| panic!("no variable {}", abbrev))
}

#[test]
fn test_dataset_elements() {
    let document = build_ocads_document(&read_aoml());
    let root = document.root();

    assert_eq!(root.element_text(&["datasubmitter", "name"]), "Robert Castle");
    assert_eq!(
        root.element_text(&["datasubmitter", "deliverypoint1"]),
        "4301 Rickenbacker Causeway; Miami, FL 33149"
    );
    assert_eq!(root.element_text(&["datasubmitter", "email"]), "Robert.Castle@noaa.gov");
    let people = root.element_list(&["person"]);
    assert_eq!(people.len(), 1);
    assert_eq!(people[0].element_text(&["name"]), "Rik Wanninkhof");

    assert_eq!(root.element_text(&["submissiondate"]), "2016-01-20");
    assert_eq!(root.element_text(&["startdate"]), "2015-01-15");
    assert_eq!(root.element_text(&["enddate"]), "2015-01-29");
    assert_eq!(root.element_text(&["westbd"]), "-158.0");
    assert_eq!(root.element_text(&["eastbd"]), "-122.6");
    assert_eq!(root.element_text(&["southbd"]), "-21.2");
    assert_eq!(root.element_text(&["northbd"]), "38.0");

    assert_eq!(
        root.element_text(&["fundingAgency", "agency"]),
        "NOAA Climate Observation Office/Climate Observations Division"
    );
    assert_eq!(root.element_text(&["Platform", "PlatformID"]), "33RO");
    assert_eq!(root.element_text(&["Platform", "PlatformType"]), "Ship");
    assert_eq!(root.element_text(&["expocode"]), "33RO20150114");
    assert_eq!(root.element_text(&["cruiseID"]), "RB1501A");
    assert_eq!(root.element_text(&["reference"]).lines().count(), 26);
    assert_eq!(
        root.element_text(&["link_landing"]),
        "http://www.aoml.noaa.gov/ocd/gcc/rvbrown_introduction.php"
    );

    let supple_info = root.element_text(&["suppleInfo"]);
    assert!(supple_info.contains("Other Sensor 1: Manufacturer: Setra; Model: 239"));
    assert!(supple_info.contains("Port of Call: Honolulu, HI\nPort of Call: San Francisco, CA"));
    assert!(supple_info.contains("Cruise Info: CALWATER II Leg 1"));
    assert!(!supple_info.contains("CO2 Sensor:"));
    assert!(!supple_info.contains("Equilibrator Temperature Sensor:"));
}

#[test]
fn test_water_co2_variable() {
    let document = build_ocads_document(&read_aoml());
    assert_eq!(document.root().element_list(&["variable"]).len(), 13);

    let var = variable(&document, "xCO2_EQU_ppm");
    assert_eq!(var.element_text(&["internal"]), "4");
    assert_eq!(var.element_text(&["observationType"]), "Surface Underway");
    assert_eq!(var.element_text(&["uncertainty"]), "1 microatmospheres");
    assert_eq!(var.element_text(&["flag"]), "Given in column: WOCE_QC_FLAG");
    assert_eq!(var.element_text(&["locationSeawaterIntake"]), "Bow");
    assert_eq!(var.element_text(&["DepthSeawaterIntake"]), "Sampling Depth: 5 meters");
    assert_eq!(
        var.element_text(&["equilibrator", "type"]),
        "Sprayhead above dynamic pool, with thermal jacket"
    );
    assert_eq!(
        var.element_text(&["equilibrator", "volume"]),
        "0.95 L; Water Volume: 0.4 L; Gas Volume: 0.55 L"
    );
    assert!(var
        .element_text(&["equilibrator", "temperatureEquilibratorMethod"])
        .starts_with("Equilibrator Temperature Sensor: Manufacturer: Hart; Model: 1521"));
    assert!(var
        .element_text(&["equilibrator", "pressureEquilibratorMethod"])
        .starts_with("Equilibrator Pressure Sensor: Manufacturer: Setra; Model: 270"));
    assert!(var
        .element_text(&["equilibrator", "dryMethod"])
        .starts_with("Gas stream passes through a thermoelectric condenser"));

    assert_eq!(var.element_text(&["gasDetector", "manufacturer"]), "LI-COR");
    assert_eq!(var.element_text(&["gasDetector", "model"]), "LI-6262");
    assert_eq!(var.element_text(&["gasDetector", "resolution"]), "0.01 microatmosphere");
    let gases = var.element_list(&["standardization", "standardgas"]);
    assert_eq!(gases.len(), 2);
    assert_eq!(gases[0].element_text(&["manufacturer"]), "ESRL in Boulder, CO.");
    assert!(gases[1].find(&["concentration"]).is_none());
    assert!(var.find(&["standardization", "frequency"]).is_none());
    assert!(var
        .element_text(&["analyzingInstrument"])
        .starts_with("CO2 Sensor: Manufacturer: LI-COR; Model: LI-6262"));
    assert!(var
        .element_text(&["detailedInfo"])
        .ends_with("Resolution/Precision: 0.01 microatmosphere\nFrequency: Every 150 seconds"));
}

#[test]
fn test_air_and_sensor_variables() {
    let document = build_ocads_document(&read_aoml());

    let xco2_atm = variable(&document, "xCO2_ATM_ppm");
    assert_eq!(xco2_atm.element_text(&["internal"]), "0");
    assert_eq!(xco2_atm.element_text(&["uncertainty"]), "0.2 ppm");
    assert!(xco2_atm.find(&["flag"]).is_none());
    assert!(xco2_atm.find(&["locationSeawaterIntake"]).is_none());
    assert!(xco2_atm
        .element_text(&["detailedInfo"])
        .contains("Sampling location: Bow tower ~10 m above the sea surface."));

    let pres_atm = variable(&document, "PRES_ATM@SSP_hPa");
    assert_eq!(pres_atm.element_text(&["unit"]), "hPa");
    assert!(pres_atm
        .element_text(&["detailedInfo"])
        .starts_with("Pressure Correction: Normalized: yes"));
    assert!(pres_atm
        .element_text(&["analyzingInstrument"])
        .starts_with("Atmospheric Pressure Sensor: Manufacturer: Vaisala; Model: PTB330"));

    let sst = variable(&document, "SST_C");
    assert_eq!(sst.element_text(&["unit"]), "°C");
    assert!(sst
        .element_text(&["analyzingInstrument"])
        .starts_with("Water Temperature Sensor: Manufacturer: Seabird; Model: SBE-21"));

    let flag = variable(&document, "WOCE_QC_FLAG");
    assert!(flag.find(&["internal"]).is_none());
}

#[test]
fn test_write_to_file() {
    let metadata = read_aoml();
    let mut file = tempfile::tempfile().unwrap();

    let mut writer = OcadsWriter::new(BufWriter::new(&mut file));
    writer.write_ocads_xml(&metadata).unwrap();
    drop(writer.finish().unwrap());

    file.seek(SeekFrom::Start(0)).unwrap();
    let mut text = String::new();
    file.read_to_string(&mut text).unwrap();

    assert!(text.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(text.contains("<metadata>"));
    let reparsed = Document::parse_str(&text).unwrap();
    assert_eq!(reparsed, build_ocads_document(&metadata));
}
