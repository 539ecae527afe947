use std::fmt;

use chrono::{NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::MetadataError;

/// A calendar date with an optional time of day.
///
/// Every part may be [`Datestamp::INVALID`]; an unset hour, minute or second
/// is treated as zero when validating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Datestamp {
    year: i32,
    month: i32,
    day: i32,
    hour: i32,
    minute: i32,
    second: i32,
}

const FIRST_VALID_YEAR: i32 = 1900;
const LAST_VALID_YEAR: i32 = 2099;

impl Default for Datestamp {
    fn default() -> Self {
        Self::new(
            Self::INVALID,
            Self::INVALID,
            Self::INVALID,
            Self::INVALID,
            Self::INVALID,
            Self::INVALID,
        )
    }
}

impl Datestamp {
    /// Marker for an unassigned part
    pub const INVALID: i32 = -1;

    /// The earliest instant accepted as valid
    pub const MIN_VALID: Datestamp = Datestamp::new(FIRST_VALID_YEAR, 1, 1, 0, 0, 0);

    /// Stand-in for "today" when no current date is supplied
    pub const DEFAULT_TODAY: Datestamp = Datestamp::new(LAST_VALID_YEAR, 12, 31, 23, 59, 59);

    /// Create from the given parts; no validation is performed
    pub const fn new(year: i32, month: i32, day: i32, hour: i32, minute: i32, second: i32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Create a date with the time of day left unset
    pub const fn from_ymd(year: i32, month: i32, day: i32) -> Self {
        Self::new(year, month, day, Self::INVALID, Self::INVALID, Self::INVALID)
    }

    /// Create from textual parts.
    ///
    /// A part that is blank or not an integer is left as
    /// [`Datestamp::INVALID`]; use [`Datestamp::is_valid`] to check the result.
    pub fn from_strs(
        year: &str,
        month: &str,
        day: &str,
        hour: &str,
        minute: &str,
        second: &str,
    ) -> Self {
        fn part(text: &str) -> i32 {
            text.trim().parse::<i32>().unwrap_or(Datestamp::INVALID)
        }
        Self::new(
            part(year),
            part(month),
            part(day),
            part(hour),
            part(minute),
            part(second),
        )
    }

    /// Year, or [`Datestamp::INVALID`]
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month (1-12), or [`Datestamp::INVALID`]
    pub fn month(&self) -> i32 {
        self.month
    }

    /// Day of month, or [`Datestamp::INVALID`]
    pub fn day(&self) -> i32 {
        self.day
    }

    /// Hour of day, or [`Datestamp::INVALID`]
    pub fn hour(&self) -> i32 {
        self.hour
    }

    /// Minute, or [`Datestamp::INVALID`]
    pub fn minute(&self) -> i32 {
        self.minute
    }

    /// Second, or [`Datestamp::INVALID`]
    pub fn second(&self) -> i32 {
        self.second
    }

    fn adjusted_time(&self) -> (i32, i32, i32) {
        let zero_if_unset = |v: i32| if v == Self::INVALID { 0 } else { v };
        (
            zero_if_unset(self.hour),
            zero_if_unset(self.minute),
            zero_if_unset(self.second),
        )
    }

    fn sort_key(&self) -> (i32, i32, i32, i32, i32, i32) {
        let (hour, minute, second) = self.adjusted_time();
        (self.year, self.month, self.day, hour, minute, second)
    }

    /// Whether this is a real calendar instant between 1900-01-01 and `today`
    /// (or [`Datestamp::DEFAULT_TODAY`] when `None`).
    pub fn is_valid(&self, today: Option<&Datestamp>) -> bool {
        let (hour, minute, second) = self.adjusted_time();
        if !(1..=12).contains(&self.month)
            || !(1..=31).contains(&self.day)
            || !(0..=23).contains(&hour)
            || !(0..=59).contains(&minute)
            || !(0..=59).contains(&second)
        {
            return false;
        }
        if self.sort_key() < Self::MIN_VALID.sort_key() {
            return false;
        }
        let today = today.unwrap_or(&Self::DEFAULT_TODAY);
        if self.sort_key() > today.sort_key() {
            return false;
        }
        self.is_calendar_day()
    }

    fn is_calendar_day(&self) -> bool {
        match (u32::try_from(self.month), u32::try_from(self.day)) {
            (Ok(month), Ok(day)) => NaiveDate::from_ymd_opt(self.year, month, day).is_some(),
            _ => false,
        }
    }

    fn require_valid(&self, what: &str) -> Result<(), MetadataError> {
        if self.is_valid(None) {
            Ok(())
        } else {
            Err(MetadataError::InvalidDatestamp(format!("{} of an invalid date", what)))
        }
    }

    /// The date as `yyyy-MM-dd`
    pub fn date_string(&self) -> Result<String, MetadataError> {
        self.require_valid("date string")?;
        Ok(format!("{:04}-{:02}-{:02}", self.year, self.month, self.day))
    }

    /// The time as `HH`, `HH:mm` or `HH:mm:ss`, depending on which parts are set.
    ///
    /// Requires at least a valid hour.
    pub fn time_string(&self) -> Result<String, MetadataError> {
        self.require_valid("time string")?;
        if self.hour == Self::INVALID {
            return Err(MetadataError::InvalidDatestamp("time string without an hour".to_string()));
        }
        let mut stamp = format!("{:02}", self.hour);
        if self.minute != Self::INVALID {
            stamp.push_str(&format!(":{:02}", self.minute));
            if self.second != Self::INVALID {
                stamp.push_str(&format!(":{:02}", self.second));
            }
        }
        Ok(stamp)
    }

    /// Renders as much of `yyyy-MM-dd HH:mm:ss` as is valid, stopping at the
    /// first part that is not.
    pub fn full_or_partial_string(&self) -> String {
        let mut stamp = String::new();
        if !(FIRST_VALID_YEAR..=LAST_VALID_YEAR).contains(&self.year) {
            return stamp;
        }
        stamp.push_str(&self.year.to_string());
        if !(1..=12).contains(&self.month) {
            return stamp;
        }
        stamp.push_str(&format!("-{:02}", self.month));
        if !self.is_calendar_day() {
            return stamp;
        }
        stamp.push_str(&format!("-{:02}", self.day));
        if !(0..=23).contains(&self.hour) {
            return stamp;
        }
        stamp.push_str(&format!(" {:02}", self.hour));
        if !(0..=59).contains(&self.minute) {
            return stamp;
        }
        stamp.push_str(&format!(":{:02}", self.minute));
        if !(0..=59).contains(&self.second) {
            return stamp;
        }
        stamp.push_str(&format!(":{:02}", self.second));
        stamp
    }

    fn epoch_seconds(&self, hour: i32, minute: i32, second: i32) -> Result<f64, MetadataError> {
        let naive = NaiveDate::from_ymd_opt(self.year, self.month as u32, self.day as u32)
            .and_then(|date| date.and_hms_opt(hour as u32, minute as u32, second as u32))
            .ok_or_else(|| MetadataError::InvalidDatestamp(self.full_or_partial_string()))?;
        Ok(Utc.from_utc_datetime(&naive).timestamp() as f64)
    }

    /// Seconds since 1970-01-01 00:00:00 UTC of the first instant this stamp
    /// covers; unset time parts are taken as zero.
    pub fn earliest_time(&self) -> Result<f64, MetadataError> {
        self.require_valid("earliest time")?;
        let (hour, minute, second) = self.adjusted_time();
        self.epoch_seconds(hour, minute, second)
    }

    /// Seconds since 1970-01-01 00:00:00 UTC of the last instant this stamp
    /// covers; an unset hour is 23, unset minutes and seconds are 59.
    pub fn latest_time(&self) -> Result<f64, MetadataError> {
        self.require_valid("latest time")?;
        let last_if_unset = |v: i32, last: i32| if v == Self::INVALID { last } else { v };
        self.epoch_seconds(
            last_if_unset(self.hour, 23),
            last_if_unset(self.minute, 59),
            last_if_unset(self.second, 59),
        )
    }

    /// Compare two valid stamps part by part. Time parts are only compared
    /// while both stamps have them set.
    fn compare(&self, other: &Datestamp) -> Result<std::cmp::Ordering, MetadataError> {
        use std::cmp::Ordering;

        self.require_valid("comparison")?;
        other.require_valid("comparison")?;
        let dates = (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day));
        if dates != Ordering::Equal {
            return Ok(dates);
        }
        for (mine, theirs) in [
            (self.hour, other.hour),
            (self.minute, other.minute),
            (self.second, other.second),
        ] {
            if mine == Self::INVALID || theirs == Self::INVALID {
                return Ok(Ordering::Equal);
            }
            if mine != theirs {
                return Ok(mine.cmp(&theirs));
            }
        }
        Ok(Ordering::Equal)
    }

    /// True if this stamp is strictly before `other`
    pub fn before(&self, other: &Datestamp) -> Result<bool, MetadataError> {
        Ok(self.compare(other)?.is_lt())
    }

    /// True if this stamp is strictly after `other`
    pub fn after(&self, other: &Datestamp) -> Result<bool, MetadataError> {
        Ok(self.compare(other)?.is_gt())
    }
}

impl fmt::Display for Datestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_or_partial_string())
    }
}
