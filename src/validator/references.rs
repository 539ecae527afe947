use crate::metadata::{Person, SocatMetadata};

use super::{ValidationCheck, ValidationReport};

/// Warn about instrument names used by a variable but not describing any
/// instrument of the dataset
pub(crate) fn check_instrument_references(metadata: &SocatMetadata, report: &mut ValidationReport) {
    let mut unknown = Vec::new();
    for var in &metadata.variables {
        let Some(inst) = var.inst() else {
            continue;
        };
        for name in inst.instrument_names() {
            if metadata.instrument_named(name).is_none() {
                unknown.push(format!("'{}' (used by {})", name, var.core().col_name()));
            }
        }
    }

    if unknown.is_empty() {
        report.add_check(ValidationCheck::ok("Instrument references"));
    } else {
        report.add_check(ValidationCheck::warning(
            "Instrument references",
            format!("Unknown instruments: {}", unknown.join(", ")),
        ));
    }
}

fn same_person(a: &Person, b: &Person) -> bool {
    a.last_name().eq_ignore_ascii_case(b.last_name())
        && a.first_name().eq_ignore_ascii_case(b.first_name())
}

/// Warn about variable researchers who are neither an investigator nor
/// the submitter
pub(crate) fn check_researchers(metadata: &SocatMetadata, report: &mut ValidationReport) {
    let mut strangers = Vec::new();
    for var in &metadata.variables {
        let Some(inst) = var.inst() else {
            continue;
        };
        let researcher = inst.researcher();
        if researcher.last_name().is_empty() {
            continue;
        }
        let known = same_person(researcher, metadata.submitter.investigator().person())
            || metadata
                .investigators
                .iter()
                .any(|pi| same_person(researcher, pi.person()));
        if !known {
            strangers.push(format!("{} (for {})", researcher.full_name(), var.core().col_name()));
        }
    }

    if strangers.is_empty() {
        report.add_check(ValidationCheck::ok("Variable researchers"));
    } else {
        report.add_check(ValidationCheck::warning(
            "Variable researchers",
            format!("Not an investigator: {}", strangers.join(", ")),
        ));
    }
}
