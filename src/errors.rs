use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub type GeoResult<T> = Result<T, GeoError>;

/// Unified error type for the toolkit.
///
/// Every failure is a synchronous value-validation failure raised at
/// construction or call time: coordinate range violations, unrecognized
/// configuration options, malformed textual input, and unknown collection
/// keys. A "no sunrise/sunset on this date" outcome is *not* an error; the
/// solar functions model it as `None`.
#[derive(Debug, Error)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GeoError {
    /// Latitude or longitude outside its permitted range.
    #[error("Invalid {coordinate} value `{value:.6}'")]
    OutOfRange { coordinate: String, value: f64 },

    /// Unrecognized textual value for an enumerated configuration option
    /// (unit system, body, precision, zenith band, style, ...).
    #[error("Unknown {option} value `{value}'")]
    InvalidOption { option: String, value: String },

    /// Malformed textual input (coordinate string, ISO 6709 field, grid
    /// locator).
    #[error("Incorrect format for {field} `{text}'")]
    Format { field: String, text: String },

    /// A keyed batch operation referenced a key with no point behind it.
    #[error("No point found for key `{key}'")]
    MissingKey { key: String },
}

impl GeoError {
    pub fn out_of_range(coordinate: impl Into<String>, value: f64) -> Self {
        Self::OutOfRange {
            coordinate: coordinate.into(),
            value,
        }
    }

    pub fn invalid_option(option: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidOption {
            option: option.into(),
            value: value.into(),
        }
    }

    pub fn format_error(field: impl Into<String>, text: impl Into<String>) -> Self {
        Self::Format {
            field: field.into(),
            text: text.into(),
        }
    }

    pub fn missing_key(key: impl Into<String>) -> Self {
        Self::MissingKey { key: key.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message() {
        let err = GeoError::out_of_range("latitude", -92.0);
        assert_eq!(err.to_string(), "Invalid latitude value `-92.000000'");
    }

    #[test]
    fn test_invalid_option_message() {
        let err = GeoError::invalid_option("units", "baseless");
        assert_eq!(err.to_string(), "Unknown units value `baseless'");
    }

    #[test]
    fn test_format_message() {
        let err = GeoError::format_error("longitude", "+1");
        assert_eq!(err.to_string(), "Incorrect format for longitude `+1'");
    }

    #[test]
    fn test_missing_key_message() {
        let err = GeoError::missing_key("home");
        assert!(err.to_string().contains("home"));
    }
}
