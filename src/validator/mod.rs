//! # Metadata Validation
//!
//! Checks a [`SocatMetadata`] before it is published and collects the
//! results in a [`ValidationReport`].
//!
//! ## Validation Checklist
//!
//! 1. **Sections**: each part of the model (submitter, investigators,
//!    platform, coverage, instruments, variables, dataset information) is
//!    checked for missing or invalid fields
//! 2. **Instrument references**: every instrument named by a variable must
//!    be described
//! 3. **Researchers**: the researcher of a variable should be one of the
//!    investigators
//!
//! Only the first step can fail; the other two produce warnings.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use socatmeta::cdiac::CdiacReader;
//! use socatmeta::validator::validate_metadata;
//!
//! let reader = CdiacReader::open("cruise.xml")?;
//! let report = validate_metadata(&reader.create_socat_metadata(), "cruise.xml", None);
//! println!("{}", report);
//! # Ok::<(), socatmeta::cdiac::CdiacError>(())
//! ```

use log::debug;

use crate::metadata::{Datestamp, SocatMetadata};

pub use report::{CheckStatus, ValidationCheck, ValidationReport};

mod references;
mod report;
mod sections;

/// Validate `metadata`, read from `source`.
///
/// Dates after `today` are invalid; without `today`, any date up to
/// [`Datestamp::DEFAULT_TODAY`] is accepted.
pub fn validate_metadata(
    metadata: &SocatMetadata,
    source: impl Into<String>,
    today: Option<&Datestamp>,
) -> ValidationReport {
    let mut report = ValidationReport::new(source);

    // 1. Sections
    sections::check_sections(metadata, today, &mut report);

    // 2. Instrument references
    references::check_instrument_references(metadata, &mut report);

    // 3. Researchers
    references::check_researchers(metadata, &mut report);

    debug!(
        "Validated {}: {} passed, {} warnings, {} failed",
        report.source,
        report.success_count(),
        report.warning_count(),
        report.failure_count()
    );
    report
}
