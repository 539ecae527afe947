use std::fmt;

use serde::{Deserialize, Serialize};

use super::MetadataError;

/// A number kept in the textual form it was reported in, paired with a unit.
///
/// The value text is either empty or parses to a finite `f64`. The parsed
/// value is computed on demand so the serialized form stays the two strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawNumericString")]
pub struct NumericString {
    value: String,
    unit: String,
}

/// Unchecked serialized form of [`NumericString`]
#[derive(Deserialize)]
struct RawNumericString {
    value: String,
    unit: String,
}

impl TryFrom<RawNumericString> for NumericString {
    type Error = MetadataError;

    fn try_from(raw: RawNumericString) -> Result<Self, Self::Error> {
        Self::new(&raw.value, &raw.unit)
    }
}

impl NumericString {
    /// Create from a value and a unit.
    ///
    /// Blank value text gives an empty (invalid) instance with the unit kept.
    /// Non-blank text must parse as a finite floating-point number.
    pub fn new(value: &str, unit: &str) -> Result<Self, MetadataError> {
        let mut numstr = Self::empty(unit);
        numstr.set_value(value)?;
        Ok(numstr)
    }

    /// Create with no value and the given unit
    pub fn empty(unit: &str) -> Self {
        Self {
            value: String::new(),
            unit: unit.trim().to_string(),
        }
    }

    /// The value text; empty if not assigned
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Assign the value text. Blank text clears the value.
    pub fn set_value(&mut self, value: &str) -> Result<(), MetadataError> {
        let value = value.trim();
        if value.is_empty() {
            self.value.clear();
            return Ok(());
        }
        match value.parse::<f64>() {
            Ok(number) if number.is_finite() => {
                self.value = value.to_string();
                Ok(())
            }
            _ => Err(MetadataError::invalid(
                "numeric value",
                format!("'{}' is not a finite number", value),
            )),
        }
    }

    /// The unit text; may be empty
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Assign the unit after trimming
    pub fn set_unit(&mut self, unit: &str) {
        self.unit = unit.trim().to_string();
    }

    /// The parsed value, or NaN when no value is assigned
    pub fn numeric_value(&self) -> f64 {
        self.value
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .unwrap_or(f64::NAN)
    }

    /// True if a finite value is assigned
    pub fn is_valid(&self) -> bool {
        self.numeric_value().is_finite()
    }

    /// True if valid and greater than zero
    pub fn is_positive(&self) -> bool {
        self.numeric_value() > 0.0
    }

    /// True if valid and less than zero
    pub fn is_negative(&self) -> bool {
        self.numeric_value() < 0.0
    }

    /// True if valid and not less than zero
    pub fn is_non_negative(&self) -> bool {
        self.numeric_value() >= 0.0
    }

    /// True if valid and not greater than zero
    pub fn is_non_positive(&self) -> bool {
        self.numeric_value() <= 0.0
    }

    /// The value and unit separated by a space, the value alone when there
    /// is no unit, or an empty string when there is no value.
    pub fn as_one_string(&self) -> String {
        if self.value.is_empty() {
            String::new()
        } else if self.unit.is_empty() {
            self.value.clone()
        } else {
            format!("{} {}", self.value, self.unit)
        }
    }
}

impl fmt::Display for NumericString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_one_string())
    }
}
