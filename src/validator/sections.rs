use std::collections::BTreeSet;

use crate::metadata::{Datestamp, SocatMetadata};

use super::{ValidationCheck, ValidationReport};

/// Sections of the model in report order: the prefix used by
/// `SocatMetadata::invalid_field_names` and the check name
const SECTIONS: [(&str, &str); 7] = [
    ("submitter", "Submitter"),
    ("investigators", "Investigators"),
    ("platform", "Platform"),
    ("coverage", "Coverage"),
    ("instruments", "Instruments"),
    ("variables", "Variables"),
    ("miscInfo", "Dataset information"),
];

/// Section prefix of a qualified field name:
/// `"variables[3].accuracy"` gives `"variables"`
fn section_of(field: &str) -> &str {
    let head = field.split('.').next().unwrap_or(field);
    head.split('[').next().unwrap_or(head)
}

/// One check per section; failed checks list the invalid fields
pub(crate) fn check_sections(
    metadata: &SocatMetadata,
    today: Option<&Datestamp>,
    report: &mut ValidationReport,
) {
    let invalid: BTreeSet<String> = metadata.invalid_field_names(today);

    for (prefix, name) in SECTIONS {
        let fields: Vec<&str> = invalid
            .iter()
            .map(String::as_str)
            .filter(|field| section_of(field) == prefix)
            .collect();
        if !fields.is_empty() {
            report.add_check(ValidationCheck::failed(
                name,
                format!("Invalid or missing: {}", fields.join(", ")),
            ));
            continue;
        }
        let empty = match prefix {
            "investigators" => metadata.investigators.is_empty(),
            "instruments" => metadata.instruments.is_empty(),
            "variables" => metadata.variables.is_empty(),
            _ => false,
        };
        if empty {
            report.add_check(ValidationCheck::warning(name, "None given"));
        } else {
            report.add_check(ValidationCheck::ok(name));
        }
    }
}
