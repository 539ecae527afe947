//! # SOCAT Metadata Model
//!
//! Plain data types describing a SOCAT dataset: who collected it, on which
//! platform, where and when, with which instruments, and what each data
//! column holds.
//!
//! ## Conventions
//!
//! - Text setters trim their input; blank text resets a field to empty.
//! - Values with a domain (longitudes, accuracies, gas concentrations)
//!   are checked by their setters, which return [`MetadataError`].
//! - `invalid_field_names()` reports required fields that are missing,
//!   using the camel-case names of the CDIAC and OCADS documents.
//!
//! Variables and instruments are sum types ([`Variable`], [`Instrument`])
//! whose variants share field groups, so code can reach the common fields
//! through `core()` without matching on the kind.

mod calibration;
mod coverage;
mod datestamp;
mod error;
mod instrument;
pub(crate) mod macros;
mod misc;
mod multi;
mod numeric;
mod person;
mod platform;
mod socat;
mod variable;

#[cfg(test)]
mod tests;

pub use calibration::{CalibrationGas, GAS_CONCENTRATION_UNIT};
pub use coverage::{Coverage, LATITUDE_UNITS, LONGITUDE_UNITS, MIN_DATA_TIME, WGS84};
pub use datestamp::Datestamp;
pub use error::MetadataError;
pub use instrument::{
    AnalyzerFields, EquilibratorFields, Instrument, InstrumentCore, InstrumentKind, SamplerFields,
};
pub use misc::MiscInfo;
pub use multi::{MultiNames, MultiString};
pub use numeric::NumericString;
pub use person::{Investigator, Person, Submitter};
pub use platform::{Platform, PlatformType};
pub use socat::SocatMetadata;
pub use variable::{
    AirPressureFields, AquGasConcFields, BioDataFields, DataVarFields, GasConcFields,
    InstDataFields, InstDataVar, MethodType, Variable, VariableCore, VariableKind,
    PRESSURE_UNIT, TEMPERATURE_UNIT,
};
