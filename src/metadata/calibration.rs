use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::macros::text_accessors;
use super::{MetadataError, NumericString};

/// Unit of calibration gas concentrations and accuracies
pub const GAS_CONCENTRATION_UNIT: &str = "ppm";

/// A standard gas used to calibrate a gas sensor
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCalibrationGas")]
pub struct CalibrationGas {
    id: String,
    gas_type: String,
    supplier: String,
    use_frequency: String,
    concentration: NumericString,
    accuracy: NumericString,
}

#[derive(Deserialize)]
struct RawCalibrationGas {
    id: String,
    gas_type: String,
    supplier: String,
    use_frequency: String,
    concentration: NumericString,
    accuracy: NumericString,
}

impl TryFrom<RawCalibrationGas> for CalibrationGas {
    type Error = MetadataError;

    fn try_from(raw: RawCalibrationGas) -> Result<Self, Self::Error> {
        let mut gas = Self::new();
        gas.set_id(&raw.id);
        gas.set_gas_type(&raw.gas_type);
        gas.set_supplier(&raw.supplier);
        gas.set_use_frequency(&raw.use_frequency);
        gas.set_concentration(raw.concentration)?;
        gas.set_accuracy(raw.accuracy)?;
        Ok(gas)
    }
}

impl Default for CalibrationGas {
    fn default() -> Self {
        Self {
            id: String::new(),
            gas_type: String::new(),
            supplier: String::new(),
            use_frequency: String::new(),
            concentration: NumericString::empty(GAS_CONCENTRATION_UNIT),
            accuracy: NumericString::empty(GAS_CONCENTRATION_UNIT),
        }
    }
}

impl CalibrationGas {
    /// Create with empty fields and no concentration or accuracy
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from textual parts. The concentration and accuracy are in
    /// [`GAS_CONCENTRATION_UNIT`] and are only assigned when not blank.
    pub fn from_parts(
        id: &str,
        gas_type: &str,
        supplier: &str,
        conc: &str,
        acc: &str,
        use_frequency: &str,
    ) -> Result<Self, MetadataError> {
        let mut gas = Self::new();
        gas.set_id(id);
        gas.set_gas_type(gas_type);
        gas.set_supplier(supplier);
        gas.set_use_frequency(use_frequency);
        let conc = conc.trim();
        if !conc.is_empty() {
            gas.set_concentration(NumericString::new(conc, GAS_CONCENTRATION_UNIT)?)?;
        }
        let acc = acc.trim();
        if !acc.is_empty() {
            gas.set_accuracy(NumericString::new(acc, GAS_CONCENTRATION_UNIT)?)?;
        }
        Ok(gas)
    }

    text_accessors! {
        id, set_id => "identifier (e.g. cylinder number) of the gas";
        gas_type, set_gas_type => "gas type, such as CO2";
        supplier, set_supplier => "supplier of the gas";
        use_frequency, set_use_frequency => "how often the gas is used";
    }

    /// Concentration of the gas; may be empty
    pub fn concentration(&self) -> &NumericString {
        &self.concentration
    }

    /// Assign the concentration, which must be non-negative.
    /// An empty value clears it.
    pub fn set_concentration(&mut self, concentration: NumericString) -> Result<(), MetadataError> {
        if concentration.value().is_empty() {
            self.concentration = NumericString::empty(GAS_CONCENTRATION_UNIT);
            return Ok(());
        }
        if !concentration.is_non_negative() {
            return Err(MetadataError::invalid(
                "concentration",
                "concentration specified is not a finite non-negative number",
            ));
        }
        self.concentration = concentration;
        Ok(())
    }

    /// Accuracy of the concentration; may be empty
    pub fn accuracy(&self) -> &NumericString {
        &self.accuracy
    }

    /// Assign the accuracy, which must be positive and in
    /// [`GAS_CONCENTRATION_UNIT`]. An empty value clears it.
    pub fn set_accuracy(&mut self, accuracy: NumericString) -> Result<(), MetadataError> {
        if accuracy.value().is_empty() {
            self.accuracy = NumericString::empty(GAS_CONCENTRATION_UNIT);
            return Ok(());
        }
        if !accuracy.is_positive() {
            return Err(MetadataError::invalid(
                "accuracy",
                "accuracy specified is not a finite positive number",
            ));
        }
        if accuracy.unit() != GAS_CONCENTRATION_UNIT {
            return Err(MetadataError::invalid(
                "accuracy",
                format!("accuracy specified is not in units of {}", GAS_CONCENTRATION_UNIT),
            ));
        }
        self.accuracy = accuracy;
        Ok(())
    }

    /// Whether the concentration is distinguishable from zero.
    ///
    /// A zero concentration is never non-zero. Otherwise the concentration
    /// must exceed its accuracy, which must then be given.
    pub fn is_non_zero(&self) -> Result<bool, MetadataError> {
        if !self.concentration.is_valid() {
            return Err(MetadataError::invalid("concentration", "gas concentration is not given"));
        }
        let conc = self.concentration.numeric_value();
        if conc == 0.0 {
            return Ok(false);
        }
        if !self.accuracy.is_valid() {
            return Err(MetadataError::invalid(
                "accuracy",
                "gas concentration accuracy is not given",
            ));
        }
        Ok(conc > self.accuracy.numeric_value())
    }

    /// Names of required fields that are missing or invalid
    pub fn invalid_field_names(&self) -> BTreeSet<String> {
        let mut invalid = BTreeSet::new();
        if self.gas_type.is_empty() {
            invalid.insert("type".to_string());
        }
        if self.supplier.is_empty() {
            invalid.insert("supplier".to_string());
        }
        if !self.concentration.is_valid() {
            invalid.insert("concentration".to_string());
        }
        invalid
    }

    /// True if no required field is missing or invalid
    pub fn is_valid(&self) -> bool {
        self.invalid_field_names().is_empty()
    }
}
