use super::*;
use crate::metadata::{InstrumentKind, VariableKind};

#[test]
fn test_normalize_column_name() {
    assert_eq!(normalize_column_name("xCO2,Water,SST"), "xco2watersst");
    assert_eq!(normalize_column_name("fCO2_SST_100_hum [uatm]"), "fco2sst100humuatm");
    assert_eq!(normalize_column_name("PRES_ATM@SSP_hPa"), "presatmssphpa");
    assert_eq!(normalize_column_name("SST °C"), "sstc");
    assert_eq!(normalize_column_name("  "), "");
}

#[test]
fn test_normalize_column_name_keeps_only_ascii_digits() {
    assert_eq!(normalize_column_name("SST٣"), "sst");
    assert_eq!(normalize_column_name("xCO2 ２ Water"), "xco2water");
    assert_eq!(normalize_column_name("Temp_0123456789"), "temp0123456789");
}

#[test]
fn test_var_type_from_column_name() {
    let classifier = ColumnClassifier::new();
    let cases = [
        ("fCO2_equ_w", VarType::Fco2WaterEqu),
        ("fCO2_SST_100_hum [uatm]", VarType::Fco2WaterSst),
        ("pCO2 SW Equi", VarType::Pco2WaterEqu),
        ("pCO2w-SST (uatm)", VarType::Pco2WaterSst),
        ("xco2sw ( ppm )!", VarType::Xco2WaterEqu),
        ("xCO2,Water,SST", VarType::Xco2WaterSst),
        ("fCO2_Atm-Wet", VarType::Fco2AtmActual),
        ("fCO2-Atm (Interp)", VarType::Fco2AtmInterp),
        ("pCO2AtmActual", VarType::Pco2AtmActual),
        ("pCO2AtmInterp", VarType::Pco2AtmInterp),
        ("xCO2AirDry (umol/mol)", VarType::Xco2AtmActual),
        ("xCO2 AtmI nte rp", VarType::Xco2AtmInterp),
        ("SST °C", VarType::SeaSurfaceTemperature),
        ("Equ Temp", VarType::EquilibratorTemperature),
        ("PPPP", VarType::SeaLevelPressure),
        ("PRS EQ", VarType::EquilibratorPressure),
        ("Sal <permil>", VarType::Salinity),
        ("WOCE {Water}", VarType::WoceCo2Water),
        ("QC CO2 Air", VarType::WoceCo2Atm),
    ];
    for (name, expected) in cases {
        assert_eq!(classifier.get_var_type_from_column_name(name), expected, "{}", name);
    }

    for name in ["Sta", "Day", "Lon", "Lat", "Depth", "Time", "WOCE SST", ""] {
        assert_eq!(classifier.get_var_type_from_column_name(name), VarType::Other, "{}", name);
    }
}

#[test]
fn test_associate_column_name() {
    let mut classifier = ColumnClassifier::new();
    assert_eq!(
        classifier.get_var_type_from_column_name("My Name (for SST)"),
        VarType::Other
    );
    let previous =
        classifier.associate_column_name_with_var_type("mynameforsst", VarType::SeaSurfaceTemperature);
    assert_eq!(previous, None);
    assert_eq!(
        classifier.get_var_type_from_column_name("My Name (for SST)"),
        VarType::SeaSurfaceTemperature
    );

    // Overrides replace built-in associations and report them
    let previous = classifier.associate_column_name_with_var_type("PPPP", VarType::Other);
    assert_eq!(previous, Some(VarType::SeaLevelPressure));
    assert_eq!(classifier.get_var_type_from_column_name("pppp"), VarType::Other);

    // The built-in table is shared and unchanged
    assert_eq!(
        ColumnClassifier::new().get_var_type_from_column_name("PPPP"),
        VarType::SeaLevelPressure
    );
}

#[test]
fn test_default_table() {
    assert_eq!(ColumnClassifier::default_table_len(), 927);
    assert!(ColumnClassifier::default_entries()
        .all(|(key, _)| !key.is_empty() && normalize_column_name(key) == key));
    assert!(ColumnClassifier::default_entries().all(|(_, var_type)| var_type != VarType::Other));
}

#[test]
fn test_var_type_names() {
    assert_eq!(VarType::Fco2WaterSst.to_string(), "FCO2_WATER_SST");
    assert_eq!("fco2-water-sst".parse::<VarType>().unwrap(), VarType::Fco2WaterSst);
    assert_eq!("sea surface temperature".parse::<VarType>().unwrap(), VarType::SeaSurfaceTemperature);
    for var_type in VarType::ALL {
        assert_eq!(var_type.as_str().parse::<VarType>().unwrap(), var_type);
    }

    let err = "CO2".parse::<VarType>().unwrap_err();
    assert!(err.contains("Unknown variable type 'CO2'"));
    assert!(err.contains("WOCE_CO2_ATM"));

    assert_eq!(serde_json::to_string(&VarType::Xco2AtmInterp).unwrap(), "\"XCO2_ATM_INTERP\"");
}

const MINIMAL: &str = r#"<x_tags>
  <User><Name>Pierrot; Denis</Name></User>
  <Cruise_Info>
    <Experiment>
      <Platform_Type>Mooring</Platform_Type>
      <Mooring_ID>KEO</Mooring_ID>
      <Cruise>
        <Expocode>32KE20150101</Expocode>
        <Cruise_ID>KEO2015</Cruise_ID>
        <Start_Date>2015/1/1</Start_Date>
      </Cruise>
    </Experiment>
    <Vessel><Vessel_Name>KEO</Vessel_Name></Vessel>
  </Cruise_Info>
  <Variables_Info>
    <Variable><Variable_Name>xCO2 water equ</Variable_Name></Variable>
    <Variable><Variable_Name>SST</Variable_Name><Unit_of_Variable>deg C</Unit_of_Variable></Variable>
    <Variable><Variable_Name>WOCE_FLAG</Variable_Name></Variable>
    <Variable><Variable_Name>QC_FLAG</Variable_Name></Variable>
  </Variables_Info>
  <Method_Description>
    <CO2_Sensors><CO2_Sensor>
      <Uncertainty_Water>2 uatm</Uncertainty_Water>
      <Resolution_Water>unknown</Resolution_Water>
    </CO2_Sensor></CO2_Sensors>
    <Sea_Surface_Temperature>
      <Uncertainty>0.05</Uncertainty>
      <Precision>-1</Precision>
    </Sea_Surface_Temperature>
    <Equilibrator_Design>
      <Equilibrator_Volume>about a liter</Equilibrator_Volume>
    </Equilibrator_Design>
  </Method_Description>
</x_tags>"#;

#[test]
fn test_minimal_document() {
    let mut reader: CdiacReader = MINIMAL.parse().unwrap();
    reader.associate_column_name_with_var_type("WOCE_FLAG", VarType::WoceCo2Water);
    reader.associate_column_name_with_var_type("QC_FLAG", VarType::WoceCo2Water);
    let metadata = reader.create_socat_metadata();

    assert_eq!(metadata.submitter.investigator().person().last_name(), "Pierrot");
    assert_eq!(metadata.submitter.investigator().person().first_name(), "Denis");
    assert!(metadata.investigators.is_empty());

    assert_eq!(metadata.misc_info.dataset_id(), "32KE20150101");
    assert_eq!(metadata.misc_info.addn_info().lines(), ["Mooring ID: KEO"]);
    assert_eq!(
        *metadata.misc_info.start_datestamp(),
        crate::metadata::Datestamp::new(2015, 1, 1, 0, 0, 0)
    );
    assert!(metadata.misc_info.history().is_empty());
    assert_eq!(metadata.platform.platform_type(), PlatformType::Mooring);
    assert!(metadata.coverage.earliest_data_time().is_nan());
    assert!(!metadata.coverage.western_longitude().is_valid());

    assert_eq!(metadata.variables.len(), 4);
    let xco2 = &metadata.variables[0];
    assert_eq!(xco2.kind(), VariableKind::AquGasConc);
    assert_eq!(xco2.flag_col_name(), Some("WOCE_FLAG, QC_FLAG"));
    assert_eq!(xco2.inst().unwrap().observe_type(), "Time Series");
    assert_eq!(xco2.data().unwrap().accuracy().as_one_string(), "2 uatm");
    assert!(!xco2.data().unwrap().precision().is_valid());
    assert_eq!(
        xco2.core().addn_info().lines(),
        ["Precision/Resolution: unknown"]
    );
    assert_eq!(xco2.inst().unwrap().sampling_elevation(), "");

    let sst = &metadata.variables[1];
    assert_eq!(sst.kind(), VariableKind::Temperature);
    assert_eq!(sst.var_unit(), "°C");
    assert_eq!(sst.data().unwrap().accuracy().value(), "0.05");
    assert_eq!(sst.core().addn_info().lines(), ["Precision/Resolution: -1"]);

    assert_eq!(metadata.variables[2].kind(), VariableKind::Plain);

    let equilibrator = &metadata.instruments[0];
    assert_eq!(equilibrator.kind(), InstrumentKind::Equilibrator);
    let fields = equilibrator.equilibrator().unwrap();
    assert_eq!(fields.chamber_vol(), "about a liter");
    assert_eq!(fields.chamber_water_vol(), "");
    assert!(metadata.instruments[1].calibration_gases().unwrap().is_empty());
    assert_eq!(metadata.instruments.len(), 7);
}

#[test]
fn test_platform_type_guessed_from_name() {
    let reader: CdiacReader = "<x_tags><Cruise_Info><Vessel><Vessel_Name>Drifting buoy 12</Vessel_Name></Vessel></Cruise_Info></x_tags>"
        .parse()
        .unwrap();
    let metadata = reader.create_socat_metadata();
    assert_eq!(metadata.platform.platform_type(), PlatformType::DriftingBuoy);
    assert_eq!(metadata.platform.platform_name(), "Drifting buoy 12");
}

#[test]
fn test_read_errors() {
    assert!(matches!(
        "<x_tags><User></x_tags>".parse::<CdiacReader>(),
        Err(CdiacError::XmlError(_))
    ));
    assert!(matches!(
        CdiacReader::open("/nonexistent/socatmeta/cdiac.xml"),
        Err(CdiacError::IoError(_))
    ));
}

#[test]
fn test_every_default_key_classifies_to_its_type() {
    let classifier = ColumnClassifier::new();
    let mut count = 0;
    for (key, var_type) in ColumnClassifier::default_entries() {
        assert_eq!(
            classifier.get_var_type_from_column_name(&key.to_uppercase()),
            var_type,
            "key '{}'",
            key
        );
        assert_eq!(classifier.get_var_type_from_column_name(key), var_type);
        count += 1;
    }
    assert_eq!(count, ColumnClassifier::default_table_len());
}

mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn decoration_does_not_change_classification(
            idx in 0usize..927,
            decoration in "[ _,;()\\[\\]{}<>!@#-]{0,3}",
        ) {
            let (key, var_type) = ColumnClassifier::default_entries()
                .nth(idx % ColumnClassifier::default_table_len())
                .unwrap();
            let classifier = ColumnClassifier::new();
            let decorated = format!("{}{}{}", decoration, key.to_uppercase(), decoration);
            prop_assert_eq!(classifier.get_var_type_from_column_name(&decorated), var_type);
        }

        #[test]
        fn association_is_by_key(name in "[a-zA-Z][a-zA-Z0-9 _]{0,20}") {
            let mut classifier = ColumnClassifier::new();
            classifier.associate_column_name_with_var_type(&name, VarType::Salinity);
            prop_assert_eq!(
                classifier.get_var_type_from_column_name(&name.to_lowercase()),
                VarType::Salinity
            );
        }
    }
}
