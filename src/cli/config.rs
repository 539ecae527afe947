//! TOML configuration file support.
//!
//! Column-name associations and output defaults can be kept in a file
//! instead of being repeated on every run:
//!
//! ```toml
//! # socatmeta.toml
//! [classifier]
//! columns = { "Temp (Sea Surface)" = "SEA_SURFACE_TEMPERATURE" }
//!
//! [output]
//! overwrite = false
//! json = true
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use socatmeta::cdiac::{ColumnClassifier, VarType};

/// Root configuration structure for socatmeta.toml files.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Column classification settings.
    #[serde(default)]
    pub classifier: ClassifierConfig,

    /// Output file settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Extra column-name associations.
#[derive(Debug, Default, Deserialize)]
pub struct ClassifierConfig {
    /// Column name to variable type name, e.g. `"SEA_SURFACE_TEMPERATURE"`.
    #[serde(default)]
    pub columns: BTreeMap<String, String>,
}

/// Settings for written files.
#[derive(Debug, Default, Deserialize)]
pub struct OutputConfig {
    /// Replace an existing output file.
    pub overwrite: Option<bool>,

    /// Also write the metadata as JSON next to the OCADS document.
    pub json: Option<bool>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }

    /// Load the file if one was given, else use the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// The configured column associations with parsed types.
    pub fn column_types(&self) -> Result<Vec<(&str, VarType)>> {
        self.classifier
            .columns
            .iter()
            .map(|(name, type_name)| {
                let var_type = type_name
                    .parse::<VarType>()
                    .map_err(anyhow::Error::msg)
                    .with_context(|| format!("Invalid type for column '{}'", name))?;
                Ok((name.as_str(), var_type))
            })
            .collect()
    }

    /// Add the configured associations to `classifier`.
    pub fn apply_to(&self, classifier: &mut ColumnClassifier) -> Result<()> {
        for (name, var_type) in self.column_types()? {
            classifier.associate_column_name_with_var_type(name, var_type);
        }
        Ok(())
    }
}
