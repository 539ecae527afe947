use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::{
    Coverage, Datestamp, Instrument, Investigator, MetadataError, MiscInfo, Platform, Submitter,
    Variable,
};

/// Complete metadata for one SOCAT dataset
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SocatMetadata {
    /// Person submitting the dataset
    pub submitter: Submitter,
    /// Principal investigators
    pub investigators: Vec<Investigator>,
    /// Platform the data was collected from
    pub platform: Platform,
    /// Spatial and temporal coverage
    pub coverage: Coverage,
    /// Instruments used
    pub instruments: Vec<Instrument>,
    /// Descriptions of the data columns
    pub variables: Vec<Variable>,
    /// Dataset-level information
    pub misc_info: MiscInfo,
}

impl SocatMetadata {
    /// Create empty metadata
    pub fn new() -> Self {
        Self::default()
    }

    /// Names of every missing or invalid field, prefixed by the section
    /// holding it (e.g. `submitter.email`, `variables[3].accuracy`)
    pub fn invalid_field_names(&self, today: Option<&Datestamp>) -> BTreeSet<String> {
        let mut invalid = BTreeSet::new();
        for name in self.submitter.invalid_field_names() {
            invalid.insert(format!("submitter.{}", name));
        }
        for (k, pi) in self.investigators.iter().enumerate() {
            for name in pi.invalid_field_names() {
                invalid.insert(format!("investigators[{}].{}", k, name));
            }
        }
        for name in self.platform.invalid_field_names() {
            invalid.insert(format!("platform.{}", name));
        }
        for name in self.coverage.invalid_field_names(today) {
            invalid.insert(format!("coverage.{}", name));
        }
        for (k, inst) in self.instruments.iter().enumerate() {
            for name in inst.invalid_field_names() {
                invalid.insert(format!("instruments[{}].{}", k, name));
            }
        }
        for (k, var) in self.variables.iter().enumerate() {
            for name in var.invalid_field_names() {
                invalid.insert(format!("variables[{}].{}", k, name));
            }
        }
        for name in self.misc_info.invalid_field_names() {
            invalid.insert(format!("miscInfo.{}", name));
        }
        invalid
    }

    /// True if no field is missing or invalid
    pub fn is_valid(&self, today: Option<&Datestamp>) -> bool {
        self.invalid_field_names(today).is_empty()
    }

    /// The instrument with the given name, if any
    pub fn instrument_named(&self, name: &str) -> Option<&Instrument> {
        self.instruments.iter().find(|inst| inst.name() == name)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, MetadataError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize from JSON
    pub fn from_json(json: &str) -> Result<Self, MetadataError> {
        Ok(serde_json::from_str(json)?)
    }
}
