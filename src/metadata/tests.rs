use super::*;

#[test]
fn test_numeric_string_parsing() {
    let value = NumericString::new("+1.0E-3", "ppm").unwrap();
    assert!((value.numeric_value() - 0.001).abs() < 1.0e-12);
    assert_eq!(value.value(), "+1.0E-3");
    assert_eq!(value.as_one_string(), "+1.0E-3 ppm");

    assert!(NumericString::new("NaN", "ppm").is_err());
    assert!(NumericString::new("inf", "ppm").is_err());
    assert!(NumericString::new("12 ppm", "").is_err());

    let blank = NumericString::new("   ", "ppm").unwrap();
    assert!(!blank.is_valid());
    assert_eq!(blank.unit(), "ppm");
    assert_eq!(blank.as_one_string(), "");
    assert_eq!(blank, NumericString::empty("ppm"));
}

#[test]
fn test_numeric_string_predicates() {
    let zero = NumericString::new("0.0", "").unwrap();
    assert!(!zero.is_positive());
    assert!(!zero.is_negative());
    assert!(zero.is_non_negative());
    assert!(zero.is_non_positive());
    assert_eq!(zero.as_one_string(), "0.0");

    let negative = NumericString::new("-5", "m").unwrap();
    assert!(negative.is_negative());
    assert!(!negative.is_non_negative());

    let empty = NumericString::default();
    assert!(!empty.is_positive());
    assert!(!empty.is_negative());
    assert!(!empty.is_non_negative());
    assert!(!empty.is_non_positive());
    assert!(empty.numeric_value().is_nan());
}

#[test]
fn test_datestamp_validity() {
    assert!(!Datestamp::default().is_valid(None));
    assert!(Datestamp::from_ymd(2016, 2, 29).is_valid(None));
    assert!(!Datestamp::from_ymd(2015, 2, 29).is_valid(None));
    assert!(!Datestamp::from_ymd(1900, 2, 29).is_valid(None));
    assert!(Datestamp::from_ymd(2000, 2, 29).is_valid(None));
    assert!(!Datestamp::from_ymd(2015, 4, 31).is_valid(None));
    assert!(!Datestamp::from_ymd(1899, 12, 31).is_valid(None));
    assert!(!Datestamp::new(2015, 1, 15, 24, 0, 0).is_valid(None));
    assert!(Datestamp::from_ymd(2099, 12, 31).is_valid(None));
    assert_eq!(Datestamp::from_ymd(2015, 2, 30).full_or_partial_string(), "2015-02");
    assert_eq!(Datestamp::from_ymd(2016, 2, 29).full_or_partial_string(), "2016-02-29");

    let today = Datestamp::new(2016, 1, 20, 0, 0, 0);
    assert!(Datestamp::from_ymd(2016, 1, 20).is_valid(Some(&today)));
    assert!(!Datestamp::from_ymd(2016, 1, 21).is_valid(Some(&today)));
}

#[test]
fn test_datestamp_from_strs() {
    let stamp = Datestamp::from_strs("2015", "01", "15", "", "", "");
    assert_eq!(stamp, Datestamp::from_ymd(2015, 1, 15));
    assert!(stamp.is_valid(None));

    let stamp = Datestamp::from_strs(" 2015", "Jan", "15 ", "12", "3.5", "");
    let unset = Datestamp::INVALID;
    assert_eq!(stamp, Datestamp::new(2015, unset, 15, 12, unset, unset));
    assert!(!stamp.is_valid(None));
    assert_eq!(stamp.full_or_partial_string(), "2015");
}

#[test]
fn test_datestamp_strings() {
    let stamp = Datestamp::new(2015, 1, 5, 7, Datestamp::INVALID, Datestamp::INVALID);
    assert_eq!(stamp.date_string().unwrap(), "2015-01-05");
    assert_eq!(stamp.time_string().unwrap(), "07");
    assert_eq!(stamp.full_or_partial_string(), "2015-01-05 07");

    let full = Datestamp::new(2015, 1, 5, 7, 8, 9);
    assert_eq!(full.time_string().unwrap(), "07:08:09");
    assert_eq!(full.to_string(), "2015-01-05 07:08:09");

    assert!(Datestamp::from_ymd(2015, 1, 5).time_string().is_err());
    assert!(Datestamp::from_ymd(2015, 13, 5).date_string().is_err());
    assert_eq!(Datestamp::from_ymd(2015, 13, 5).full_or_partial_string(), "2015");
}

#[test]
fn test_datestamp_times() {
    let start = Datestamp::new(2015, 1, 15, 0, 0, 0);
    assert_eq!(start.earliest_time().unwrap(), 1_421_280_000.0);

    let end = Datestamp::from_ymd(2015, 1, 29);
    assert_eq!(end.latest_time().unwrap(), 1_422_575_999.0);
    assert_eq!(end.earliest_time().unwrap(), 1_422_489_600.0);

    assert!(Datestamp::default().earliest_time().is_err());
}

#[test]
fn test_datestamp_ordering() {
    let early = Datestamp::new(2015, 1, 15, 10, 0, 0);
    let late = Datestamp::new(2015, 1, 15, 11, 0, 0);
    assert!(early.before(&late).unwrap());
    assert!(late.after(&early).unwrap());
    assert!(!early.after(&late).unwrap());

    // Without an hour only the dates are compared
    let date_only = Datestamp::from_ymd(2015, 1, 15);
    assert!(!date_only.before(&late).unwrap());
    assert!(!date_only.after(&early).unwrap());

    assert!(Datestamp::default().before(&early).is_err());
}

#[test]
fn test_multi_string() {
    let mut lines = MultiString::from_text("  first \n\n second\r\n");
    lines.append("");
    lines.append("third");
    assert_eq!(lines.lines(), ["first", "second", "third"]);
    assert_eq!(lines.as_one_string(), "first\nsecond\nthird");

    assert_eq!(lines.pop(), Some("first".to_string()));
    assert_eq!(lines.len(), 2);
    assert!(MultiString::new().pop().is_none());
}

#[test]
fn test_multi_names() {
    let mut names = MultiNames::from_comma_list("Equilibrator, CO2 Sensor, ,Equilibrator");
    assert_eq!(names.len(), 2);
    assert!(names.contains(" CO2 Sensor "));
    assert!(!names.add("Equilibrator"));
    assert!(names.add("Salinity Sensor"));
    assert_eq!(names.as_one_string(), "Equilibrator, CO2 Sensor, Salinity Sensor");
}

#[test]
fn test_person_setters_trim() {
    let mut person = Person::new();
    assert!(!person.is_valid());
    person.set_last_name("  Castle ");
    person.set_first_name("Robert");
    assert_eq!(person.last_name(), "Castle");
    assert!(person.is_valid());
    assert_eq!(person.full_name(), "Robert Castle");

    person.set_middle("J.");
    assert_eq!(person.full_name(), "Robert J. Castle");

    person.set_last_name("   ");
    assert_eq!(person.last_name(), "");
    assert!(person.invalid_field_names().contains("lastName"));
}

#[test]
fn test_submitter_requires_contact() {
    let mut submitter = Submitter::new();
    let pi = submitter.investigator_mut();
    pi.person_mut().set_last_name("Castle");
    pi.person_mut().set_first_name("Robert");
    assert!(pi.is_valid());

    let invalid = submitter.invalid_field_names();
    assert!(invalid.contains("streets"));
    assert!(invalid.contains("phone"));
    assert!(invalid.contains("email"));

    let pi = submitter.investigator_mut();
    pi.set_streets(MultiString::from_text("4301 Rickenbacker Causeway"));
    pi.set_phone("305-361-4418");
    pi.set_email("Robert.Castle@noaa.gov");
    assert!(submitter.is_valid());
}

#[test]
fn test_platform_type_parse() {
    assert_eq!(PlatformType::parse("Research Ship"), PlatformType::Ship);
    assert_eq!(PlatformType::parse("sailing vessel"), PlatformType::Ship);
    assert_eq!(PlatformType::parse("Moored buoy"), PlatformType::Mooring);
    assert_eq!(PlatformType::parse("Drifting Buoy"), PlatformType::DriftingBuoy);
    assert_eq!(PlatformType::parse("glider"), PlatformType::Unknown);
    assert_eq!(PlatformType::DriftingBuoy.to_string(), "Drifting Buoy");

    let mut platform = Platform::new();
    platform.set_platform_id("33RO");
    platform.set_platform_name("Ronald H. Brown");
    assert!(platform.invalid_field_names().contains("platformType"));
    platform.set_platform_type(PlatformType::Ship);
    assert!(platform.is_valid());
}

#[test]
fn test_coverage_bounds() {
    let mut coverage = Coverage::new();
    assert_eq!(coverage.spatial_reference(), WGS84);

    coverage
        .set_western_longitude(NumericString::new("-158.0", LONGITUDE_UNITS).unwrap())
        .unwrap();
    assert_eq!(coverage.western_longitude().numeric_value(), -158.0);

    assert!(coverage
        .set_eastern_longitude(NumericString::new("-122.6", LATITUDE_UNITS).unwrap())
        .is_err());
    assert!(coverage
        .set_northern_latitude(NumericString::new("91", LATITUDE_UNITS).unwrap())
        .is_err());

    // An empty value clears the bound
    coverage.set_western_longitude(NumericString::default()).unwrap();
    assert!(!coverage.western_longitude().is_valid());
    assert_eq!(coverage.western_longitude().unit(), LONGITUDE_UNITS);
}

#[test]
fn test_coverage_invalid_field_names() {
    let mut coverage = Coverage::new();
    let invalid = coverage.invalid_field_names(None);
    assert!(invalid.contains("westernLongitude"));
    assert!(invalid.contains("earliestDataTime"));
    assert!(!invalid.contains("spatialReference"));

    coverage.set_western_longitude(NumericString::new("-158.0", LONGITUDE_UNITS).unwrap()).unwrap();
    coverage.set_eastern_longitude(NumericString::new("-122.6", LONGITUDE_UNITS).unwrap()).unwrap();
    coverage.set_southern_latitude(NumericString::new("38.0", LATITUDE_UNITS).unwrap()).unwrap();
    coverage.set_northern_latitude(NumericString::new("-21.2", LATITUDE_UNITS).unwrap()).unwrap();
    coverage.set_earliest_data_date(&Datestamp::from_ymd(2015, 1, 15)).unwrap();
    coverage.set_latest_data_date(&Datestamp::from_ymd(2015, 1, 29)).unwrap();

    let invalid = coverage.invalid_field_names(None);
    assert!(invalid.contains("southernLatitude"));
    assert!(invalid.contains("northernLatitude"));
    assert_eq!(invalid.len(), 2);

    // Data later than "today" is invalid
    let invalid = coverage.invalid_field_names(Some(&Datestamp::from_ymd(2015, 1, 20)));
    assert!(invalid.contains("latestDataTime"));
    assert!(!invalid.contains("earliestDataTime"));
}

#[test]
fn test_coverage_times() {
    let mut coverage = Coverage::new();
    assert!(coverage.set_earliest_data_time(MIN_DATA_TIME - 1.0).is_err());
    assert!(coverage.set_earliest_data_time(f64::INFINITY).is_err());
    coverage.set_earliest_data_time(1_421_280_000.0).unwrap();
    assert_eq!(coverage.earliest_data_time(), 1_421_280_000.0);
    coverage.set_earliest_data_time(f64::NAN).unwrap();
    assert!(coverage.earliest_data_time().is_nan());
    assert_eq!(coverage, Coverage::new());
}

#[test]
fn test_variable_fixed_units() {
    let mut temp = Variable::temperature(VariableCore::new("SST_C", "SST", "K"));
    assert_eq!(temp.var_unit(), TEMPERATURE_UNIT);
    assert!(temp.set_var_unit(TEMPERATURE_UNIT).is_ok());
    assert!(matches!(
        temp.set_var_unit("K"),
        Err(MetadataError::UnsupportedUnit { .. })
    ));

    let mut pressure = Variable::air_pressure(VariableCore::new("PRES_EQU_hPa", "Pequ", ""));
    assert_eq!(pressure.var_unit(), PRESSURE_UNIT);
    assert!(pressure.set_var_unit("atm").is_err());

    let mut plain = Variable::plain("SAL", "Salinity", "permil");
    plain.set_var_unit("PSU").unwrap();
    assert_eq!(plain.var_unit(), "PSU");
    assert!(plain.data().is_none());
}

#[test]
fn test_variable_invalid_field_names() {
    let plain = Variable::plain("", "", "");
    let invalid = plain.invalid_field_names();
    assert!(invalid.contains("colName"));
    assert!(invalid.contains("fullName"));
    assert_eq!(invalid.len(), 2);

    let mut var = Variable::aqu_gas_conc(VariableCore::new("xCO2_EQU_ppm", "xCO2_EQU_ppm", ""));
    let invalid = var.invalid_field_names();
    assert!(invalid.contains("observeType"));
    assert!(invalid.contains("accuracy"));
    assert!(invalid.contains("measureMethod"));

    let inst = var.inst_mut().unwrap();
    inst.set_observe_type("Surface Underway");
    inst.set_measure_method(MethodType::MeasuredInsitu);
    var.data_mut()
        .unwrap()
        .set_accuracy(NumericString::new("1", "microatmospheres").unwrap())
        .unwrap();
    assert_eq!(
        var.invalid_field_names().into_iter().collect::<Vec<_>>(),
        ["instrumentNames"]
    );

    var.inst_mut().unwrap().set_measure_method(MethodType::Computed);
    assert!(var.invalid_field_names().contains("methodDescription"));

    var.inst_mut().unwrap().set_measure_method(MethodType::Manipulation);
    var.inst_mut().unwrap().set_manipulation_description("bubbled with air");
    assert!(var.is_valid());
}

#[test]
fn test_variable_accuracy_must_be_positive() {
    let mut var = Variable::inst_data(VariableCore::new("SAL", "Salinity", ""));
    let data = var.data_mut().unwrap();
    assert!(data.set_accuracy(NumericString::new("0", "permil").unwrap()).is_err());
    assert!(data.set_precision(NumericString::new("-1", "permil").unwrap()).is_err());
    data.set_accuracy(NumericString::new("0.005", "permil").unwrap()).unwrap();
    assert_eq!(data.accuracy().as_one_string(), "0.005 permil");
}

#[test]
fn test_variable_equality_across_kinds() {
    let core = VariableCore::new("xCO2", "xCO2", "ppm");
    let gas = Variable::gas_conc(core.clone());
    let aqu = Variable::aqu_gas_conc(core.clone());
    assert_ne!(gas, aqu);
    assert_eq!(gas.core(), aqu.core());
    assert_eq!(gas, Variable::gas_conc(core));
    assert!(gas.gas().is_some());
    assert!(gas.aqu().is_none());
    assert!(aqu.gas().is_some());
}

#[test]
fn test_variable_clone_is_deep() {
    let mut original = Variable::aqu_gas_conc(VariableCore::new("fCO2", "fCO2", "uatm"));
    original.core_mut().addn_info_mut().append("Frequency: Every 150 seconds");
    let mut copy = original.clone();
    copy.core_mut().addn_info_mut().append("changed");
    copy.inst_mut().unwrap().set_instrument_names(MultiNames::from_comma_list("CO2 Sensor"));
    assert_eq!(original.core().addn_info().len(), 1);
    assert!(original.inst().unwrap().instrument_names().is_empty());
    assert_ne!(original, copy);
}

#[test]
fn test_bio_data_setters() {
    let mut var = Variable::bio_data(VariableCore::new("Krill_Count", "Krill Count", ""));
    assert_eq!(var.kind(), VariableKind::BioData);
    let bio = var.bio_mut().unwrap();
    assert_eq!(bio.species_id(), "");

    bio.set_species_id(" 12345 ");
    assert_eq!(bio.species_id(), "12345");
    assert_eq!(bio.biological_subject(), "");
    assert_eq!(bio.life_stage(), "");

    bio.set_biological_subject("\tKrill ");
    bio.set_life_stage(" Adult\n");
    assert_eq!(bio.biological_subject(), "Krill");
    assert_eq!(bio.life_stage(), "Adult");
    assert_eq!(bio.species_id(), "12345");

    bio.set_species_id("   ");
    bio.set_life_stage("");
    assert_eq!(bio.species_id(), "");
    assert_eq!(bio.life_stage(), "");
    assert_eq!(var.bio().unwrap().biological_subject(), "Krill");
}

#[test]
fn test_bio_data_invalid_field_names() {
    let mut var = Variable::bio_data(VariableCore::new("", "", ""));
    let expected = ["accuracy", "colName", "fullName", "measureMethod", "observeType", "speciesId"];
    assert_eq!(var.invalid_field_names().into_iter().collect::<Vec<_>>(), expected);

    var.core_mut().set_col_name("Krill_Count");
    var.core_mut().set_full_name("Krill Count");
    let inst = var.inst_mut().unwrap();
    inst.set_observe_type("Surface Underway");
    inst.set_measure_method(MethodType::Manipulation);
    inst.set_manipulation_description("net tow counts");
    var.data_mut()
        .unwrap()
        .set_accuracy(NumericString::new("5", "count/m3").unwrap())
        .unwrap();
    assert_eq!(
        var.invalid_field_names().into_iter().collect::<Vec<_>>(),
        ["speciesId"]
    );

    var.bio_mut().unwrap().set_species_id("12345");
    assert!(var.is_valid());
}

#[test]
fn test_bio_data_from_inst_data() {
    let mut inst = Variable::inst_data(VariableCore::new("Krill_Count", "Krill Count", "count/m3"));
    inst.inst_mut().unwrap().set_observe_type("Surface Underway");
    let Variable::InstData(var) = inst.clone() else {
        panic!("expected an instrumental variable");
    };

    let mut bio = Variable::BioData(var, BioDataFields::default());
    assert_eq!(bio.core(), inst.core());
    assert_eq!(bio.inst(), inst.inst());
    assert_eq!(bio.data(), inst.data());
    assert_ne!(bio, inst);

    let copy = bio.clone();
    assert_eq!(copy, bio);
    bio.bio_mut().unwrap().set_biological_subject("Krill");
    assert_ne!(copy, bio);
    assert_eq!(copy.bio().unwrap().biological_subject(), "");
}

#[test]
fn test_calibration_gas() {
    let gas = CalibrationGas::from_parts("CA04957", "CO2", "ESRL", "282.55", "0.01", "3.25 hours")
        .unwrap();
    assert_eq!(gas.concentration().as_one_string(), "282.55 ppm");
    assert!(gas.is_valid());
    assert!(gas.is_non_zero().unwrap());

    let zero = CalibrationGas::from_parts("N2", "CO2", "Airgas", "0", "", "").unwrap();
    assert!(!zero.is_non_zero().unwrap());

    let no_acc = CalibrationGas::from_parts("X", "CO2", "Airgas", "300", "", "").unwrap();
    assert!(no_acc.is_non_zero().is_err());

    let empty = CalibrationGas::new();
    assert!(empty.is_non_zero().is_err());
    let invalid = empty.invalid_field_names();
    assert!(invalid.contains("type"));
    assert!(invalid.contains("supplier"));
    assert!(invalid.contains("concentration"));

    assert!(CalibrationGas::from_parts("X", "CO2", "", "-1", "", "").is_err());
    assert!(CalibrationGas::from_parts("X", "CO2", "", "1", "0", "").is_err());

    let mut gas = CalibrationGas::new();
    assert!(gas.set_accuracy(NumericString::new("0.1", "ppb").unwrap()).is_err());
}

#[test]
fn test_deserialize_checks_values() {
    assert!(serde_json::from_str::<NumericString>(r#"{"value":"abc","unit":"ppm"}"#).is_err());
    assert!(serde_json::from_str::<NumericString>(r#"{"value":"NaN","unit":"ppm"}"#).is_err());
    let numstr: NumericString = serde_json::from_str(r#"{"value":" 1.5 ","unit":"ppm"}"#).unwrap();
    assert_eq!(numstr.as_one_string(), "1.5 ppm");

    let gas = CalibrationGas::from_parts("CA1", "CO2", "ESRL", "300", "0.1", "daily").unwrap();
    let json = serde_json::to_string(&gas).unwrap();
    assert_eq!(serde_json::from_str::<CalibrationGas>(&json).unwrap(), gas);
    let negative = json.replace(r#""value":"300""#, r#""value":"-5""#);
    assert_ne!(negative, json);
    assert!(serde_json::from_str::<CalibrationGas>(&negative).is_err());
    let wrong_unit = json.replace(r#""value":"0.1","unit":"ppm""#, r#""value":"0.1","unit":"ppb""#);
    assert_ne!(wrong_unit, json);
    assert!(serde_json::from_str::<CalibrationGas>(&wrong_unit).is_err());

    let fields = r#"{"flag_col_name":"WOCE","accuracy":{"value":"0","unit":"m"},"precision":{"value":"","unit":""}}"#;
    assert!(serde_json::from_str::<DataVarFields>(fields).is_err());
    let fields = fields.replace(r#""value":"0""#, r#""value":"0.5""#);
    let fields: DataVarFields = serde_json::from_str(&fields).unwrap();
    assert_eq!(fields.flag_col_name(), "WOCE");
    assert_eq!(fields.accuracy().as_one_string(), "0.5 m");
}

#[test]
fn test_instrument_kinds() {
    let mut equil = Instrument::new(InstrumentKind::Equilibrator, "Equilibrator");
    assert!(equil.is_sampler());
    assert!(!equil.is_analyzer());
    equil.equilibrator_mut().unwrap().set_chamber_vol("0.95 L");
    assert_eq!(equil.equilibrator().unwrap().chamber_vol(), "0.95 L");

    let sensor = Instrument::new(InstrumentKind::GasSensor, "CO2 Sensor");
    assert!(sensor.is_analyzer());
    assert_eq!(sensor.calibration_gases().unwrap().len(), 0);

    // Identical fields but different kinds
    let analyzer = Instrument::new(InstrumentKind::TemperatureSensor, "T");
    let other = Instrument::new(InstrumentKind::PressureSensor, "T");
    assert_ne!(analyzer, other);
    assert_eq!(analyzer.core(), other.core());
    assert_eq!(analyzer.analyzer(), other.analyzer());
}

#[test]
fn test_instrument_reports_gas_fields() {
    let mut sensor = Instrument::new(InstrumentKind::GasSensor, "CO2 Sensor");
    sensor
        .calibration_gases_mut()
        .unwrap()
        .push(CalibrationGas::from_parts("ESRL", "CO2", "", "", "", "").unwrap());
    let invalid = sensor.invalid_field_names();
    assert!(invalid.contains("calibrationGases[0].supplier"));
    assert!(invalid.contains("calibrationGases[0].concentration"));
    assert!(!invalid.contains("name"));
}

#[test]
fn test_misc_info() {
    let mut misc = MiscInfo::new();
    assert!(misc.invalid_field_names().contains("datasetId"));
    misc.set_dataset_id(" 33RO20150114 ");
    assert_eq!(misc.dataset_id(), "33RO20150114");
    assert!(misc.is_valid());
    misc.add_history(Datestamp::new(2016, 1, 20, 0, 0, 0));
    assert_eq!(misc.history().len(), 1);
    assert!(!misc.start_datestamp().is_valid(None));
}

#[test]
fn test_socat_metadata_invalid_names_are_prefixed() {
    let mut metadata = SocatMetadata::new();
    metadata.investigators.push(Investigator::new());
    metadata.variables.push(Variable::plain("Sta", "Station", ""));
    metadata.variables.push(Variable::inst_data(VariableCore::new("SAL", "Salinity", "")));

    let invalid = metadata.invalid_field_names(None);
    assert!(invalid.contains("submitter.email"));
    assert!(invalid.contains("investigators[0].firstName"));
    assert!(invalid.contains("platform.platformId"));
    assert!(invalid.contains("coverage.westernLongitude"));
    assert!(invalid.contains("variables[1].accuracy"));
    assert!(invalid.contains("miscInfo.datasetId"));
    assert!(!invalid.iter().any(|name| name.starts_with("variables[0].")));
}

#[test]
fn test_socat_metadata_json_roundtrip() {
    let mut metadata = SocatMetadata::new();
    metadata.misc_info.set_dataset_id("33RO20150114");
    metadata.platform.set_platform_type(PlatformType::Ship);
    metadata.instruments.push(Instrument::new(InstrumentKind::Equilibrator, "Equilibrator"));
    let mut var = Variable::temperature(VariableCore::new("SST_C", "SST_C", ""));
    var.data_mut()
        .unwrap()
        .set_accuracy(NumericString::new("0.01", TEMPERATURE_UNIT).unwrap())
        .unwrap();
    metadata.variables.push(var);
    metadata
        .coverage
        .set_earliest_data_date(&Datestamp::from_ymd(2015, 1, 15))
        .unwrap();

    let json = metadata.to_json().unwrap();
    let restored = SocatMetadata::from_json(&json).unwrap();
    assert_eq!(restored, metadata);
    assert!(restored.coverage.latest_data_time().is_nan());
}

mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn finite_floats_parse(value in proptest::num::f64::NORMAL | proptest::num::f64::ZERO) {
            let text = value.to_string();
            let numstr = NumericString::new(&text, "ppm").unwrap();
            prop_assert!(numstr.is_valid());
            prop_assert_eq!(numstr.numeric_value(), value);
        }

        #[test]
        fn setters_trim(text in "[ \t]{0,3}[a-zA-Z0-9]{0,10}[ \t]{0,3}") {
            let mut person = Person::new();
            person.set_organization(&text);
            prop_assert_eq!(person.organization(), text.trim());
        }

        #[test]
        fn real_dates_are_valid(year in 1900i32..2099, month in 1i32..=12, day in 1i32..=28) {
            let stamp = Datestamp::from_ymd(year, month, day);
            prop_assert!(stamp.is_valid(None));
            let text = stamp.date_string().unwrap();
            prop_assert_eq!(text, format!("{:04}-{:02}-{:02}", year, month, day));
        }
    }
}
