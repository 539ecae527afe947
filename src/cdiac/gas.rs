//! Scraping of the free-text equilibrator and calibration-gas descriptions
//! found in AOML-style CDIAC documents.

use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::metadata::CalibrationGas;
use crate::xml::get_list_of_lines;

static VOLUME_DESCRIPTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^(\d*\.?\d*)\s*L\s*\(\s*",
        r"(\d*\.?\d*)\s*L\s*water\s*,\s*",
        r"(\d*\.?\d*)\s*L\s*headspace\s*\)$",
    ))
    .expect("valid volume regex")
});

static GAS_DESCRIPTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^Std\.?\s*\d\s*:\s*([[:alnum:]]+)\s*,\s*",
        r"(\d*\.?\d*)\s*ppm\s*,\s*",
        r"([[:alnum:]\s]+),\s",
        r"used every ([ -~]+)$",
    ))
    .expect("valid calibration gas regex")
});

static NO_ID_GAS_DESCRIPTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^Std\.?\s*\d\s*:\s*",
        r"(\d*\.?\d*)\s*ppm\s*,\s*",
        r"([[:alnum:]\s]+),\s",
        r"used every ([ -~]+)$",
    ))
    .expect("valid calibration gas regex")
});

static UNUSED_GAS_DESCRIPTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^Std\.?\s*\d\s*:\s*([[:alnum:]]+)\s*,\s*",
        r"(\d*\.?\d*)\s*ppm\s*,\s*",
        r"([[:alnum:]\s]+),\s",
        r"was\s*not\s*used\s*\.?$",
    ))
    .expect("valid calibration gas regex")
});

static STD_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\.\s*Std").expect("valid separator regex"));

/// Chamber volumes scraped from a description such as
/// `"0.95 L (0.4 L water, 0.55 L headspace)"`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChamberVolumes {
    /// Total chamber volume, with its unit
    pub total: String,
    /// Water volume, with its unit
    pub water: String,
    /// Headspace volume, with its unit
    pub headspace: String,
}

/// Split an equilibrator volume description into its three volumes.
///
/// Returns `None` unless the whole text has the expected form.
pub fn parse_chamber_volumes(description: &str) -> Option<ChamberVolumes> {
    let caps = VOLUME_DESCRIPTION.captures(description)?;
    Some(ChamberVolumes {
        total: format!("{} L", &caps[1]),
        water: format!("{} L", &caps[2]),
        headspace: format!("{} L", &caps[3]),
    })
}

/// Accuracy implied by the digits of a reported concentration: one unit in
/// the last decimal place (`"282.55"` gives `"0.01"`, `"380"` gives `"1"`).
/// An empty concentration has no accuracy.
pub fn implied_accuracy(concentration: &str) -> String {
    if concentration.is_empty() {
        return String::new();
    }
    match concentration.find('.') {
        Some(dot) if dot + 1 < concentration.len() => {
            let zeros = concentration.len() - dot - 2;
            format!("0.{}1", "0".repeat(zeros))
        }
        _ => "1".to_string(),
    }
}

/// Break calibration-gas text into one description per gas.
///
/// Gases are normally on separate lines. Text on a single line is split at
/// each `". Std"`, restoring the period and the `Std` prefix on the pieces.
pub fn split_gas_descriptions(text: &str) -> Vec<String> {
    let lines = get_list_of_lines(text);
    if lines.len() != 1 {
        return lines;
    }
    let mut pieces: Vec<&str> = STD_SEPARATOR.split(text).collect();
    // A separator at the very end leaves nothing after it
    let mut dangling = false;
    while pieces.last().is_some_and(|piece| piece.trim().is_empty()) {
        pieces.pop();
        dangling = true;
    }
    if pieces.len() < 2 {
        return lines;
    }
    let last = pieces.len() - 1;
    pieces
        .iter()
        .enumerate()
        .map(|(k, piece)| match k {
            0 => format!("{}.", piece.trim()),
            k if k == last && !dangling => format!("Std {}", piece.trim()),
            _ => format!("Std {}.", piece.trim()),
        })
        .collect()
}

/// Build the CO2 calibration gases described by `text`.
///
/// Each description is matched against the full pattern (with a cylinder
/// ID), then the pattern without an ID. Descriptions of gases that were not
/// used are dropped, and anything else is kept whole as the gas ID, as is
/// a description whose numbers are out of range.
pub fn parse_calibration_gases(text: &str) -> Vec<CalibrationGas> {
    let mut gases = Vec::new();
    for description in split_gas_descriptions(text) {
        let (id, conc, supplier, use_frequency) =
            if let Some(caps) = GAS_DESCRIPTION.captures(&description) {
                (
                    caps[1].to_string(),
                    caps[2].to_string(),
                    caps[3].to_string(),
                    format!("used every {}", &caps[4]),
                )
            } else if let Some(caps) = NO_ID_GAS_DESCRIPTION.captures(&description) {
                (
                    String::new(),
                    caps[1].to_string(),
                    caps[2].to_string(),
                    format!("used every {}", &caps[3]),
                )
            } else if UNUSED_GAS_DESCRIPTION.is_match(&description) {
                debug!("Skipping unused calibration gas: {}", description);
                continue;
            } else {
                warn!("Unrecognized calibration gas description kept as ID: {}", description);
                (description.clone(), String::new(), String::new(), String::new())
            };
        let accuracy = implied_accuracy(&conc);
        match CalibrationGas::from_parts(&id, "CO2", &supplier, &conc, &accuracy, &use_frequency) {
            Ok(gas) => gases.push(gas),
            Err(err) => {
                warn!("Calibration gas '{}' kept as ID: {}", description, err);
                let mut gas = CalibrationGas::new();
                gas.set_id(&description);
                gas.set_gas_type("CO2");
                gases.push(gas);
            }
        }
    }
    gases
}
