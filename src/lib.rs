//! # socatmeta - SOCAT Cruise Metadata
//!
//! `socatmeta` holds the metadata of a SOCAT (Surface Ocean CO2 Atlas)
//! dataset in a typed model, reads it from legacy CDIAC cruise-metadata XML
//! and writes it as OCADS XML for NOAA's Ocean Carbon and Acidification Data
//! System.
//!
//! ## Key Features
//!
//! - **Typed Model**: Variables and instruments are sum types; fixed-unit
//!   variables (temperatures in °C, pressures in hPa) cannot be given
//!   another unit.
//!
//! - **Column Classification**: Free-text data column names are mapped to a
//!   [`VarType`](cdiac::VarType) through a table of known names, with
//!   per-reader overrides.
//!
//! - **Lenient Reading**: Equilibrator volumes and calibration gases are
//!   scraped from prose; text that fits no pattern is kept rather than
//!   rejected.
//!
//! - **Validation**: Missing or invalid fields are collected into a
//!   readable report.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use socatmeta::cdiac::CdiacReader;
//! use socatmeta::ocads::to_ocads_string;
//!
//! let reader = CdiacReader::open("33RO20150114.xml")?;
//! let metadata = reader.create_socat_metadata();
//! println!("{} variables", metadata.variables.len());
//!
//! let ocads = to_ocads_string(&metadata)?;
//! std::fs::write("33RO20150114.ocads.xml", ocads)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Architecture
//!
//! - [`metadata`]: the SOCAT data model
//! - [`xml`]: element tree and free-text helpers
//! - [`cdiac`]: CDIAC reader and column classifier
//! - [`ocads`]: OCADS writer
//! - [`validator`]: validation report

// Documentation lints - enforce complete documentation for publication
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod cdiac;
pub mod metadata;
pub mod ocads;
pub mod validator;
pub mod xml;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::cdiac::{CdiacError, CdiacReader, ColumnClassifier, VarType};
    pub use crate::metadata::{
        CalibrationGas, Coverage, Datestamp, Instrument, InstrumentKind, Investigator,
        MetadataError, MethodType, MiscInfo, MultiNames, MultiString, NumericString, Person,
        Platform, PlatformType, SocatMetadata, Submitter, Variable, VariableCore, VariableKind,
    };
    pub use crate::ocads::{to_ocads_string, OcadsError, OcadsWriter};
    pub use crate::validator::{validate_metadata, ValidationReport};
    pub use crate::xml::{Document, Element, XmlError};
}
