use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::{Datestamp, MetadataError, MultiNames, NumericString};

/// Unit of the longitude bounds
pub const LONGITUDE_UNITS: &str = "dec deg E";
/// Unit of the latitude bounds
pub const LATITUDE_UNITS: &str = "dec deg N";
/// Default spatial reference system
pub const WGS84: &str = "WGS 84";
/// Earliest acceptable data time: 1900-01-01 00:00:00 UTC in epoch seconds
pub const MIN_DATA_TIME: f64 = -2_208_988_800.0;

/// Spatial and temporal extent of a dataset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coverage {
    western_longitude: NumericString,
    eastern_longitude: NumericString,
    southern_latitude: NumericString,
    northern_latitude: NumericString,
    /// Epoch seconds; NaN when unset
    #[serde(with = "nan_as_null")]
    earliest_data_time: f64,
    /// Epoch seconds; NaN when unset
    #[serde(with = "nan_as_null")]
    latest_data_time: f64,
    spatial_reference: String,
    geographic_names: MultiNames,
}

impl Default for Coverage {
    fn default() -> Self {
        Self {
            western_longitude: NumericString::empty(LONGITUDE_UNITS),
            eastern_longitude: NumericString::empty(LONGITUDE_UNITS),
            southern_latitude: NumericString::empty(LATITUDE_UNITS),
            northern_latitude: NumericString::empty(LATITUDE_UNITS),
            earliest_data_time: f64::NAN,
            latest_data_time: f64::NAN,
            spatial_reference: WGS84.to_string(),
            geographic_names: MultiNames::new(),
        }
    }
}

fn checked_bound(
    field: &str,
    value: NumericString,
    units: &str,
    limit: f64,
) -> Result<NumericString, MetadataError> {
    if !value.is_valid() {
        return Ok(NumericString::empty(units));
    }
    if value.unit() != units {
        return Err(MetadataError::invalid(field, format!("units are not {}", units)));
    }
    let number = value.numeric_value();
    if !(-limit..=limit).contains(&number) {
        return Err(MetadataError::invalid(
            field,
            format!("{} is not in [{:.1},{:.1}]", number, -limit, limit),
        ));
    }
    Ok(value)
}

fn checked_time(field: &str, time: f64) -> Result<f64, MetadataError> {
    if time.is_nan() {
        return Ok(f64::NAN);
    }
    let now = chrono::Utc::now().timestamp() as f64;
    if !time.is_finite() || time < MIN_DATA_TIME || time > now {
        return Err(MetadataError::invalid(
            field,
            format!("{} is not a time between 1900-01-01 and now", time),
        ));
    }
    Ok(time)
}

impl Coverage {
    /// Create with empty bounds, unset times, the WGS 84 spatial reference
    /// and no geographic names
    pub fn new() -> Self {
        Self::default()
    }

    /// Western longitude limit; empty or in [-360, 360] `dec deg E`
    pub fn western_longitude(&self) -> &NumericString {
        &self.western_longitude
    }

    /// Assign the western longitude limit; an invalid value clears it
    pub fn set_western_longitude(&mut self, value: NumericString) -> Result<(), MetadataError> {
        self.western_longitude = checked_bound("westernLongitude", value, LONGITUDE_UNITS, 360.0)?;
        Ok(())
    }

    /// Eastern longitude limit; empty or in [-360, 360] `dec deg E`
    pub fn eastern_longitude(&self) -> &NumericString {
        &self.eastern_longitude
    }

    /// Assign the eastern longitude limit; an invalid value clears it
    pub fn set_eastern_longitude(&mut self, value: NumericString) -> Result<(), MetadataError> {
        self.eastern_longitude = checked_bound("easternLongitude", value, LONGITUDE_UNITS, 360.0)?;
        Ok(())
    }

    /// Southern latitude limit; empty or in [-90, 90] `dec deg N`
    pub fn southern_latitude(&self) -> &NumericString {
        &self.southern_latitude
    }

    /// Assign the southern latitude limit; an invalid value clears it
    pub fn set_southern_latitude(&mut self, value: NumericString) -> Result<(), MetadataError> {
        self.southern_latitude = checked_bound("southernLatitude", value, LATITUDE_UNITS, 90.0)?;
        Ok(())
    }

    /// Northern latitude limit; empty or in [-90, 90] `dec deg N`
    pub fn northern_latitude(&self) -> &NumericString {
        &self.northern_latitude
    }

    /// Assign the northern latitude limit; an invalid value clears it
    pub fn set_northern_latitude(&mut self, value: NumericString) -> Result<(), MetadataError> {
        self.northern_latitude = checked_bound("northernLatitude", value, LATITUDE_UNITS, 90.0)?;
        Ok(())
    }

    /// Time of the first data point in epoch seconds; NaN when unset
    pub fn earliest_data_time(&self) -> f64 {
        self.earliest_data_time
    }

    /// Assign the time of the first data point. NaN clears it.
    pub fn set_earliest_data_time(&mut self, time: f64) -> Result<(), MetadataError> {
        self.earliest_data_time = checked_time("earliestDataTime", time)?;
        Ok(())
    }

    /// Assign the earliest data time from the start of a datestamp
    pub fn set_earliest_data_date(&mut self, date: &Datestamp) -> Result<(), MetadataError> {
        self.set_earliest_data_time(date.earliest_time()?)
    }

    /// Time of the last data point in epoch seconds; NaN when unset
    pub fn latest_data_time(&self) -> f64 {
        self.latest_data_time
    }

    /// Assign the time of the last data point. NaN clears it.
    pub fn set_latest_data_time(&mut self, time: f64) -> Result<(), MetadataError> {
        self.latest_data_time = checked_time("latestDataTime", time)?;
        Ok(())
    }

    /// Assign the latest data time from the end of a datestamp
    pub fn set_latest_data_date(&mut self, date: &Datestamp) -> Result<(), MetadataError> {
        self.set_latest_data_time(date.latest_time()?)
    }

    /// Spatial reference system of the bounds
    pub fn spatial_reference(&self) -> &str {
        &self.spatial_reference
    }

    /// Assign the spatial reference system; blank text clears it
    pub fn set_spatial_reference(&mut self, reference: impl AsRef<str>) {
        self.spatial_reference = reference.as_ref().trim().to_string();
    }

    /// Names of the regions covered
    pub fn geographic_names(&self) -> &MultiNames {
        &self.geographic_names
    }

    /// Replace the names of the regions covered
    pub fn set_geographic_names(&mut self, names: MultiNames) {
        self.geographic_names = names;
    }

    /// Names of fields that are missing or inconsistent.
    ///
    /// Data times after the end of `today` (or [`Datestamp::DEFAULT_TODAY`])
    /// are invalid.
    pub fn invalid_field_names(&self, today: Option<&Datestamp>) -> BTreeSet<String> {
        let mut invalid = BTreeSet::new();
        if !self.western_longitude.is_valid() {
            invalid.insert("westernLongitude".to_string());
        }
        if !self.eastern_longitude.is_valid() {
            invalid.insert("easternLongitude".to_string());
        }

        if self.southern_latitude.is_valid() && self.northern_latitude.is_valid() {
            if self.southern_latitude.numeric_value() > self.northern_latitude.numeric_value() {
                invalid.insert("southernLatitude".to_string());
                invalid.insert("northernLatitude".to_string());
            }
        } else {
            if !self.southern_latitude.is_valid() {
                invalid.insert("southernLatitude".to_string());
            }
            if !self.northern_latitude.is_valid() {
                invalid.insert("northernLatitude".to_string());
            }
        }

        let last_time = today
            .unwrap_or(&Datestamp::DEFAULT_TODAY)
            .latest_time()
            .unwrap_or(f64::INFINITY);
        let in_range = |time: f64| time.is_finite() && time >= MIN_DATA_TIME && time <= last_time;
        match (in_range(self.earliest_data_time), in_range(self.latest_data_time)) {
            (true, true) => {
                if self.earliest_data_time > self.latest_data_time {
                    invalid.insert("earliestDataTime".to_string());
                    invalid.insert("latestDataTime".to_string());
                }
            }
            (earliest_ok, latest_ok) => {
                if !earliest_ok {
                    invalid.insert("earliestDataTime".to_string());
                }
                if !latest_ok {
                    invalid.insert("latestDataTime".to_string());
                }
            }
        }

        if self.spatial_reference.is_empty() {
            invalid.insert("spatialReference".to_string());
        }
        invalid
    }

    /// True if no field is missing or inconsistent
    pub fn is_valid(&self, today: Option<&Datestamp>) -> bool {
        self.invalid_field_names(today).is_empty()
    }
}

// Times compare by bit pattern so that two unset (NaN) times are equal.
impl PartialEq for Coverage {
    fn eq(&self, other: &Self) -> bool {
        self.western_longitude == other.western_longitude
            && self.eastern_longitude == other.eastern_longitude
            && self.southern_latitude == other.southern_latitude
            && self.northern_latitude == other.northern_latitude
            && self.earliest_data_time.to_bits() == other.earliest_data_time.to_bits()
            && self.latest_data_time.to_bits() == other.latest_data_time.to_bits()
            && self.spatial_reference == other.spatial_reference
            && self.geographic_names == other.geographic_names
    }
}

impl Eq for Coverage {}

impl Hash for Coverage {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.western_longitude.hash(state);
        self.eastern_longitude.hash(state);
        self.southern_latitude.hash(state);
        self.northern_latitude.hash(state);
        self.earliest_data_time.to_bits().hash(state);
        self.latest_data_time.to_bits().hash(state);
        self.spatial_reference.hash(state);
        self.geographic_names.hash(state);
    }
}

/// JSON has no NaN, so unset times travel as `null`.
mod nan_as_null {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_some(value)
        } else {
            serializer.serialize_none()
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
    }
}
