//! Data column categories and the column-name classifier.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::column_table::DEFAULT_COLUMN_TYPES;

/// Semantic category of a CDIAC data column.
///
/// The water-side CO2 kinds are reported either at the equilibrator
/// temperature (`*_EQU`) or at the sea surface temperature (`*_SST`); the
/// air-side kinds are either measured (`*_ACTUAL`) or interpolated in time
/// (`*_INTERP`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VarType {
    /// Not one of the recognized categories
    #[default]
    Other,
    /// Fugacity of CO2 in water at equilibrator temperature
    Fco2WaterEqu,
    /// Fugacity of CO2 in water at sea surface temperature
    Fco2WaterSst,
    /// Partial pressure of CO2 in water at equilibrator temperature
    Pco2WaterEqu,
    /// Partial pressure of CO2 in water at sea surface temperature
    Pco2WaterSst,
    /// Mole fraction of CO2 in water at equilibrator temperature
    Xco2WaterEqu,
    /// Mole fraction of CO2 in water at sea surface temperature
    Xco2WaterSst,
    /// Measured fugacity of CO2 in air
    Fco2AtmActual,
    /// Interpolated fugacity of CO2 in air
    Fco2AtmInterp,
    /// Measured partial pressure of CO2 in air
    Pco2AtmActual,
    /// Interpolated partial pressure of CO2 in air
    Pco2AtmInterp,
    /// Measured mole fraction of CO2 in air
    Xco2AtmActual,
    /// Interpolated mole fraction of CO2 in air
    Xco2AtmInterp,
    /// Sea surface temperature
    SeaSurfaceTemperature,
    /// Water temperature in the equilibrator
    EquilibratorTemperature,
    /// Atmospheric pressure at sea level
    SeaLevelPressure,
    /// Pressure in the equilibrator headspace
    EquilibratorPressure,
    /// Sea surface salinity
    Salinity,
    /// WOCE quality flag for the water CO2 values
    WoceCo2Water,
    /// WOCE quality flag for the air CO2 values
    WoceCo2Atm,
}

impl VarType {
    /// Every category, in declaration order
    pub const ALL: [VarType; 20] = [
        VarType::Other,
        VarType::Fco2WaterEqu,
        VarType::Fco2WaterSst,
        VarType::Pco2WaterEqu,
        VarType::Pco2WaterSst,
        VarType::Xco2WaterEqu,
        VarType::Xco2WaterSst,
        VarType::Fco2AtmActual,
        VarType::Fco2AtmInterp,
        VarType::Pco2AtmActual,
        VarType::Pco2AtmInterp,
        VarType::Xco2AtmActual,
        VarType::Xco2AtmInterp,
        VarType::SeaSurfaceTemperature,
        VarType::EquilibratorTemperature,
        VarType::SeaLevelPressure,
        VarType::EquilibratorPressure,
        VarType::Salinity,
        VarType::WoceCo2Water,
        VarType::WoceCo2Atm,
    ];

    /// The SCREAMING_SNAKE name of this category
    pub fn as_str(&self) -> &'static str {
        match self {
            VarType::Other => "OTHER",
            VarType::Fco2WaterEqu => "FCO2_WATER_EQU",
            VarType::Fco2WaterSst => "FCO2_WATER_SST",
            VarType::Pco2WaterEqu => "PCO2_WATER_EQU",
            VarType::Pco2WaterSst => "PCO2_WATER_SST",
            VarType::Xco2WaterEqu => "XCO2_WATER_EQU",
            VarType::Xco2WaterSst => "XCO2_WATER_SST",
            VarType::Fco2AtmActual => "FCO2_ATM_ACTUAL",
            VarType::Fco2AtmInterp => "FCO2_ATM_INTERP",
            VarType::Pco2AtmActual => "PCO2_ATM_ACTUAL",
            VarType::Pco2AtmInterp => "PCO2_ATM_INTERP",
            VarType::Xco2AtmActual => "XCO2_ATM_ACTUAL",
            VarType::Xco2AtmInterp => "XCO2_ATM_INTERP",
            VarType::SeaSurfaceTemperature => "SEA_SURFACE_TEMPERATURE",
            VarType::EquilibratorTemperature => "EQUILIBRATOR_TEMPERATURE",
            VarType::SeaLevelPressure => "SEA_LEVEL_PRESSURE",
            VarType::EquilibratorPressure => "EQUILIBRATOR_PRESSURE",
            VarType::Salinity => "SALINITY",
            VarType::WoceCo2Water => "WOCE_CO2_WATER",
            VarType::WoceCo2Atm => "WOCE_CO2_ATM",
        }
    }
}

impl fmt::Display for VarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VarType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_uppercase().replace(['-', ' '], "_");
        VarType::ALL
            .iter()
            .copied()
            .find(|var_type| var_type.as_str() == wanted)
            .ok_or_else(|| {
                format!(
                    "Unknown variable type '{}'. Valid options: {}",
                    s,
                    VarType::ALL.map(|t| t.as_str()).join(", ")
                )
            })
    }
}

static NON_KEY_CHARACTERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\p{Lu}0-9]+").expect("valid column key regex"));

/// Reduce a column name to its lookup key.
///
/// The name is uppercased, everything but uppercase letters and ASCII
/// digits is removed, and the remainder is lowercased; `"xCO2,Water,SST"` gives
/// `"xco2watersst"`.
pub fn normalize_column_name(col_name: &str) -> String {
    NON_KEY_CHARACTERS
        .replace_all(&col_name.to_uppercase(), "")
        .to_lowercase()
}

static DEFAULT_KEY_TO_TYPE: Lazy<HashMap<&'static str, VarType>> =
    Lazy::new(|| DEFAULT_COLUMN_TYPES.iter().copied().collect());

/// Guesses the [`VarType`] of a data column from its name.
///
/// Lookups go through a per-instance override map first and then the
/// built-in table of known column names.
#[derive(Debug, Clone, Default)]
pub struct ColumnClassifier {
    overrides: HashMap<String, VarType>,
}

impl ColumnClassifier {
    /// Create a classifier using only the built-in table
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys in the built-in table
    pub fn default_table_len() -> usize {
        DEFAULT_KEY_TO_TYPE.len()
    }

    /// Iterate over the built-in keys and their types
    pub fn default_entries() -> impl Iterator<Item = (&'static str, VarType)> {
        DEFAULT_KEY_TO_TYPE.iter().map(|(key, var_type)| (*key, *var_type))
    }

    /// Associate a column name with a variable type, replacing any earlier
    /// association for the same key.
    ///
    /// Returns the type previously associated with the key, whether from an
    /// earlier call or from the built-in table.
    pub fn associate_column_name_with_var_type(
        &mut self,
        col_name: &str,
        var_type: VarType,
    ) -> Option<VarType> {
        let key = normalize_column_name(col_name);
        let previous = self.lookup(&key);
        self.overrides.insert(key, var_type);
        previous
    }

    /// The guessed type of the named column; [`VarType::Other`] when the name
    /// is not recognized
    pub fn get_var_type_from_column_name(&self, col_name: &str) -> VarType {
        let key = normalize_column_name(col_name);
        let var_type = self.lookup(&key).unwrap_or_default();
        debug!("Column '{}' (key '{}') classified as {}", col_name, key, var_type);
        var_type
    }

    fn lookup(&self, key: &str) -> Option<VarType> {
        self.overrides
            .get(key)
            .or_else(|| DEFAULT_KEY_TO_TYPE.get(key))
            .copied()
    }
}
