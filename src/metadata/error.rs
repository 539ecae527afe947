/// Errors that can occur while building or converting metadata
#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    /// A value was outside the domain accepted by a field
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue {
        /// Name of the field being assigned
        field: String,
        /// Why the value was rejected
        reason: String,
    },

    /// The unit of a fixed-unit variable cannot be changed
    #[error("Unit of {kind} is fixed to '{fixed}'; cannot set it to '{given}'")]
    UnsupportedUnit {
        /// Kind of variable that rejected the unit
        kind: &'static str,
        /// The unit the variable always uses
        fixed: &'static str,
        /// The unit that was requested
        given: String,
    },

    /// A datestamp could not be built from the given text
    #[error("Invalid datestamp: {0}")]
    InvalidDatestamp(String),

    /// JSON serialization/deserialization error
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl MetadataError {
    pub(crate) fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
