//! Helpers turning free text found in metadata documents into model values.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::metadata::{Datestamp, NumericString, Person, PlatformType};

static EXPOCODE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{Lu}\p{Nd}]{4}\p{Nd}{8}$").expect("valid expocode regex"));

static NUMBER_UNIT_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[ \t()\[\]{}]+").expect("valid separator regex"));

static DATE_NUMBER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})(\d{2})(\d{2})(?:$|\D)").expect("valid date regex"));

static DATE_SLASH_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})/(\d{1,2})/(\d{1,2})(?:$|\D)").expect("valid date regex"));

static DATE_HYPHEN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})-(\d{1,2})-(\d{1,2})(?:$|\D)").expect("valid date regex"));

/// NODC codes of fixed platforms (moorings)
const FIXED_PLATFORM_NODC_CODES: &[&str] = &[
    "067F", "08FS", "09FS", "147F", "187F", "18FX", "247F", "24FS", "267F", "26FS", "297F", "3119",
    "3164", "317F", "32FS", "33GO", "33TT", "357F", "48MB", "497F", "49FS", "747F", "74FS", "767F",
    "77FS", "907F", "91FS", "GH7F",
];

/// NODC codes of drifting buoys
const DRIFTING_BUOY_NODC_CODES: &[&str] =
    &["09DB", "18DZ", "35DR", "49DZ", "61DB", "74DZ", "91DB", "99DB"];

/// Guess the platform type from a platform name and the dataset ID.
///
/// Mooring and buoy keywords in the name win; otherwise the NODC code at the
/// start of an expocode (`NODCYYYYMMDD`, optionally with a `-N` suffix) is
/// checked against the known fixed-platform and drifting-buoy codes. Anything
/// else is assumed to be a ship.
pub fn guess_platform_type(name: &str, dataset_id: &str) -> PlatformType {
    let upper_name = name.to_uppercase();
    if upper_name.contains("MOORING") {
        return PlatformType::Mooring;
    }
    if upper_name.contains("DRIFTING BUOY") {
        return PlatformType::DriftingBuoy;
    }
    if upper_name.contains("BUOY") {
        return PlatformType::Mooring;
    }

    let mut expocode: Vec<char> = dataset_id.to_uppercase().chars().collect();
    if expocode.len() == 14 && expocode[12] == '-' && ('1'..='9').contains(&expocode[13]) {
        expocode.truncate(12);
    }
    let expocode: String = expocode.into_iter().collect();
    if expocode.chars().count() == 12 && EXPOCODE_PATTERN.is_match(&expocode) {
        let nodc: String = expocode.chars().take(4).collect();
        if FIXED_PLATFORM_NODC_CODES.contains(&nodc.as_str()) {
            return PlatformType::Mooring;
        }
        if DRIFTING_BUOY_NODC_CODES.contains(&nodc.as_str()) {
            return PlatformType::DriftingBuoy;
        }
    }
    PlatformType::Ship
}

/// Split a full name into a [`Person`].
///
/// `"Last, First Middle"` (or with a semicolon) puts the first word in the
/// last name; otherwise the first word is the first name and the final word
/// the last name. Words in between become the middle name.
pub fn get_person_names(fullname: &str) -> Person {
    let mut person = Person::new();
    let pieces: Vec<&str> = fullname.split([' ', '\t']).filter(|p| !p.is_empty()).collect();
    let Some(first) = pieces.first() else {
        return person;
    };
    if let Some(last_name) = first.strip_suffix(',').or_else(|| first.strip_suffix(';')) {
        person.set_last_name(last_name);
        if let Some(first_name) = pieces.get(1) {
            person.set_first_name(first_name);
        }
        if pieces.len() > 2 {
            person.set_middle(pieces[2..].join(" "));
        }
    } else if pieces.len() > 1 {
        person.set_first_name(first);
        person.set_last_name(pieces[pieces.len() - 1]);
        if pieces.len() > 2 {
            person.set_middle(pieces[1..pieces.len() - 1].join(" "));
        }
    } else {
        person.set_last_name(first);
    }
    person
}

/// The non-blank trimmed lines of some text
pub fn get_list_of_lines(multiline: &str) -> Vec<String> {
    multiline
        .split(['\r', '\n'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse a date given as `yyyyMMdd`, `yyyy/M/d` or `yyyy-M-d`.
///
/// The date must exist on the calendar. Returns `None` for blank or
/// unparseable text. The time of day is set to midnight.
pub fn get_datestamp(datestring: &str) -> Option<Datestamp> {
    let datestring = datestring.trim();
    if datestring.is_empty() {
        return None;
    }
    [&*DATE_NUMBER_PATTERN, &*DATE_SLASH_PATTERN, &*DATE_HYPHEN_PATTERN]
        .iter()
        .filter_map(|pattern| pattern.captures(datestring))
        .find_map(|caps| {
            let year: i32 = caps[1].parse().ok()?;
            let month: u32 = caps[2].parse().ok()?;
            let day: u32 = caps[3].parse().ok()?;
            NaiveDate::from_ymd_opt(year, month, day)?;
            Some(Datestamp::new(year, month as i32, day as i32, 0, 0, 0))
        })
}

/// Build a [`NumericString`] from a value that may carry decorations.
///
/// Leading characters before the first sign, decimal point or digit (such as
/// `~` or `±`) are dropped. When `unit` is `None` the unit is taken from the
/// value text itself, split off at spaces, tabs and brackets. Any failure
/// gives an empty [`NumericString`].
pub fn get_numeric_string(value: &str, unit: Option<&str>) -> NumericString {
    let mut num_str = value;
    if let Some(start) = value.find(|c: char| c == '-' || c == '+' || c == '.' || c.is_ascii_digit()) {
        num_str = &value[start..];
    }
    let (num_str, unit_str) = match unit {
        Some(unit) => (num_str.to_string(), unit.to_string()),
        None => {
            let mut pieces: Vec<&str> = NUMBER_UNIT_SEPARATOR.split(num_str).collect();
            while pieces.len() > 1 && pieces.last().is_some_and(|p| p.is_empty()) {
                pieces.pop();
            }
            match pieces.split_first() {
                Some((number, units)) if !units.is_empty() => (number.to_string(), units.join(" ")),
                Some((number, _)) => (number.to_string(), String::new()),
                None => (String::new(), String::new()),
            }
        }
    };
    NumericString::new(&num_str, &unit_str).unwrap_or_default()
}
