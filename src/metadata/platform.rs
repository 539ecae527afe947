use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::macros::text_accessors;

/// The kind of platform a dataset was collected from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlatformType {
    /// Research or commercial vessel
    Ship,
    /// Fixed mooring or anchored buoy
    Mooring,
    /// Free-drifting buoy
    DriftingBuoy,
    /// Not determined
    #[default]
    Unknown,
}

impl PlatformType {
    /// Guess the platform type from a description by keyword
    pub fn parse(text: &str) -> Self {
        let lower = text.to_lowercase();
        if lower.contains("drifting") && lower.contains("buoy") {
            PlatformType::DriftingBuoy
        } else if lower.contains("mooring") || lower.contains("buoy") {
            PlatformType::Mooring
        } else if lower.contains("ship") || lower.contains("vessel") || lower.contains("boat") {
            PlatformType::Ship
        } else {
            PlatformType::Unknown
        }
    }

    /// Display name of this type
    pub fn as_str(&self) -> &'static str {
        match self {
            PlatformType::Ship => "Ship",
            PlatformType::Mooring => "Mooring",
            PlatformType::DriftingBuoy => "Drifting Buoy",
            PlatformType::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for PlatformType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The platform (ship, mooring, buoy) the data was collected from
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Platform {
    platform_id: String,
    platform_name: String,
    platform_type: PlatformType,
    platform_owner: String,
    platform_country: String,
}

impl Platform {
    /// Create with empty fields and an unknown type
    pub fn new() -> Self {
        Self::default()
    }

    text_accessors! {
        platform_id, set_platform_id => "platform identifier, usually the NODC code";
        platform_name, set_platform_name => "platform name";
        platform_owner, set_platform_owner => "platform owner";
        platform_country, set_platform_country => "country of the platform";
    }

    /// The platform type
    pub fn platform_type(&self) -> PlatformType {
        self.platform_type
    }

    /// Assign the platform type
    pub fn set_platform_type(&mut self, platform_type: PlatformType) {
        self.platform_type = platform_type;
    }

    /// Names of required fields that are not assigned
    pub fn invalid_field_names(&self) -> BTreeSet<String> {
        let mut invalid = BTreeSet::new();
        if self.platform_id.is_empty() {
            invalid.insert("platformId".to_string());
        }
        if self.platform_name.is_empty() {
            invalid.insert("platformName".to_string());
        }
        if self.platform_type == PlatformType::Unknown {
            invalid.insert("platformType".to_string());
        }
        invalid
    }

    /// True if no required field is missing
    pub fn is_valid(&self) -> bool {
        self.invalid_field_names().is_empty()
    }
}
