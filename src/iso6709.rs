//! ISO 6709 coordinate string parsing and formatting.
//!
//! ISO 6709-1983(E) "Standard representation of latitude, longitude and
//! altitude for geographic point locations" strings look like
//! `+27.5916+086.5640+8850/`: a signed latitude, a signed longitude, an
//! optional signed altitude in metres, and a terminating `/`. The standard
//! is rather convoluted; this module supports the common formats in the
//! wild, including the W3C profile.
//!
//! The sub-format of each coordinate is inferred from the number of
//! characters before any decimal point (sign included):
//!
//! | Latitude | Longitude | Interpretation |
//! |----------|-----------|----------------|
//! | 3 | 4 | plain degrees |
//! | 5 | 6 | degrees and minutes |
//! | 7 | 8 | degrees, minutes and seconds |
//!
//! ```
//! use sphere_coords::iso6709;
//!
//! let (lat, lon, alt) = iso6709::parse("+48.8577+002.295/").unwrap();
//! assert!((lat - 48.8577).abs() < 1e-10);
//! assert!((lon - 2.295).abs() < 1e-10);
//! assert_eq!(alt, None);
//! ```

use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::angle::{to_dm, to_dms};
use crate::errors::{GeoError, GeoResult};

static ISO6709_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([+-][0-9.]+)([+-][0-9.]+)([+-][0-9.]+)?/$").unwrap());

/// Output styles for [`format`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Iso6709Style {
    /// Whole degrees (`+46+002/`).
    Degrees,
    /// Decimal degrees with configurable precision (`+40.75-074.00/`).
    DecimalDegrees,
    /// Degrees and minutes (`+4852+00220/`).
    DegreesMinutes,
    /// Degrees, minutes and seconds (`+352139+1384339/`).
    DegreesMinutesSeconds,
}

impl FromStr for Iso6709Style {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "d" => Ok(Iso6709Style::Degrees),
            "dd" => Ok(Iso6709Style::DecimalDegrees),
            "dm" => Ok(Iso6709Style::DegreesMinutes),
            "dms" => Ok(Iso6709Style::DegreesMinutesSeconds),
            other => Err(GeoError::invalid_option("style", other)),
        }
    }
}

/// Parses an ISO 6709 coordinate string.
///
/// Returns latitude and longitude in decimal degrees, along with the
/// altitude in metres if one was present. Coordinate ranges are not
/// checked here; construct a point from the result to validate them.
///
/// # Errors
///
/// [`GeoError::Format`] naming the malformed field when the string does
/// not match the pattern or a coordinate has an unrecognized digit count.
pub fn parse(text: &str) -> GeoResult<(f64, f64, Option<f64>)> {
    let captures = ISO6709_RE
        .captures(text)
        .ok_or_else(|| GeoError::format_error("ISO 6709 string", text))?;

    let latitude = parse_coordinate(&captures[1], "latitude", 2)?;
    let longitude = parse_coordinate(&captures[2], "longitude", 3)?;
    let altitude = match captures.get(3) {
        Some(m) => Some(
            m.as_str()
                .parse::<f64>()
                .map_err(|_| GeoError::format_error("altitude", m.as_str()))?,
        ),
        None => None,
    };
    Ok((latitude, longitude, altitude))
}

/// Parses one signed coordinate field. `degree_digits` is 2 for latitude
/// and 3 for longitude; the integer-digit count before any decimal point
/// (sign included) selects degrees, degrees-minutes or
/// degrees-minutes-seconds.
fn parse_coordinate(text: &str, field: &str, degree_digits: usize) -> GeoResult<f64> {
    let bad = || GeoError::format_error(field, text);

    let head = text.split('.').next().unwrap_or(text).len();
    let sign = if text.starts_with('-') { -1.0 } else { 1.0 };
    let digits = &text[1..];
    let number = |s: &str| s.parse::<f64>().map_err(|_| bad());

    let magnitude = if head == degree_digits + 1 {
        number(digits)?
    } else if head == degree_digits + 3 {
        let (deg, min) = digits.split_at(degree_digits);
        number(deg)? + number(min)? / 60.0
    } else if head == degree_digits + 5 {
        let (deg, rest) = digits.split_at(degree_digits);
        let (min, sec) = rest.split_at(2);
        number(deg)? + number(min)? / 60.0 + number(sec)? / 3600.0
    } else {
        return Err(bad());
    };
    Ok(sign * magnitude)
}

/// Produces an ISO 6709 coordinate string.
///
/// `precision` controls the number of decimal places in the
/// [`DecimalDegrees`](Iso6709Style::DecimalDegrees) style and is ignored by
/// the others. A whole-number altitude is emitted as a signed integer;
/// fractional altitudes keep three decimals. The string always terminates
/// with `/`.
pub fn format(
    latitude: f64,
    longitude: f64,
    altitude: Option<f64>,
    style: Iso6709Style,
    precision: usize,
) -> String {
    let mut text = match style {
        Iso6709Style::Degrees => format!(
            "{:+03}{:+04}",
            latitude.trunc() as i64,
            longitude.trunc() as i64
        ),
        Iso6709Style::DecimalDegrees => format!(
            "{:+0lat_w$.prec$}{:+0lon_w$.prec$}",
            latitude,
            longitude,
            lat_w = precision + 4,
            lon_w = precision + 5,
            prec = precision
        ),
        Iso6709Style::DegreesMinutes => {
            let (lat_d, lat_m) = to_dm(latitude);
            let (lon_d, lon_m) = to_dm(longitude);
            format!(
                "{}{:02}{:02}{}{:03}{:02}",
                sign_char(latitude),
                lat_d.abs(),
                lat_m.abs().trunc() as i64,
                sign_char(longitude),
                lon_d.abs(),
                lon_m.abs().trunc() as i64
            )
        }
        Iso6709Style::DegreesMinutesSeconds => {
            let (lat_d, lat_m, lat_s) = to_dms(latitude);
            let (lon_d, lon_m, lon_s) = to_dms(longitude);
            format!(
                "{}{:02}{:02}{:02}{}{:03}{:02}{:02}",
                sign_char(latitude),
                lat_d.abs(),
                lat_m.abs(),
                lat_s.abs(),
                sign_char(longitude),
                lon_d.abs(),
                lon_m.abs(),
                lon_s.abs()
            )
        }
    };
    if let Some(alt) = altitude {
        if alt == alt.trunc() {
            text.push_str(&format!("{:+}", alt as i64));
        } else {
            text.push_str(&format!("{:+.3}", alt));
        }
    }
    text.push('/');
    text
}

fn sign_char(value: f64) -> char {
    if value < 0.0 {
        '-'
    } else {
        '+'
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_parse_plain_degrees() {
        // Wikipedia's ISO 6709 examples.
        let (lat, lon, alt) = parse("+00-025/").unwrap();
        assert!(close(lat, 0.0) && close(lon, -25.0) && alt.is_none());

        let (lat, lon, _) = parse("+46+002/").unwrap();
        assert!(close(lat, 46.0) && close(lon, 2.0));

        let (lat, lon, _) = parse("+40.6894-074.0447/").unwrap();
        assert!(close(lat, 40.6894) && close(lon, -74.0447));
    }

    #[test]
    fn test_parse_degrees_minutes() {
        let (lat, lon, _) = parse("+4852+00220/").unwrap();
        assert!(close(lat, 48.0 + 52.0 / 60.0));
        assert!(close(lon, 2.0 + 20.0 / 60.0));
    }

    #[test]
    fn test_parse_degrees_minutes_seconds() {
        let (lat, lon, alt) = parse("+352139+1384339+3776/").unwrap();
        assert!(close(lat, 35.36083333333333));
        assert!(close(lon, 138.7275));
        assert_eq!(alt, Some(3776.0));
    }

    #[test]
    fn test_parse_with_altitude() {
        let (lat, lon, alt) = parse("+27.5916+086.5640+8850/").unwrap();
        assert!(close(lat, 27.5916) && close(lon, 86.564));
        assert_eq!(alt, Some(8850.0));

        let (lat, _, alt) = parse("-90+000+2800/").unwrap();
        assert!(close(lat, -90.0));
        assert_eq!(alt, Some(2800.0));
    }

    #[test]
    fn test_parse_negative_sexagesimal_sign() {
        // The sign applies to the whole value, not just the degrees.
        let (lat, _, _) = parse("-4852+00220/").unwrap();
        assert!(close(lat, -(48.0 + 52.0 / 60.0)));
    }

    #[test]
    fn test_parse_rejects_bad_longitude() {
        let err = parse("+35.658632+1/").unwrap_err();
        assert_eq!(err.to_string(), "Incorrect format for longitude `+1'");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse("12.34/56.78").is_err());
        assert!(parse("+12+034").is_err());
        assert!(parse("").is_err());
    }

    #[test]
    fn test_format_degrees() {
        assert_eq!(
            format(0.0, -25.0, None, Iso6709Style::Degrees, 4),
            "+00-025/"
        );
        assert_eq!(
            format(-90.0, 0.0, Some(2800.0), Iso6709Style::Degrees, 4),
            "-90+000+2800/"
        );
        assert_eq!(format(38.0, -97.0, None, Iso6709Style::Degrees, 4), "+38-097/");
    }

    #[test]
    fn test_format_decimal_degrees() {
        assert_eq!(
            format(40.75, -74.0, None, Iso6709Style::DecimalDegrees, 2),
            "+40.75-074.00/"
        );
        assert_eq!(
            format(
                27.5916,
                86.564,
                Some(8850.0),
                Iso6709Style::DecimalDegrees,
                4
            ),
            "+27.5916+086.5640+8850/"
        );
        assert_eq!(
            format(
                35.658632,
                139.745411,
                None,
                Iso6709Style::DecimalDegrees,
                6
            ),
            "+35.658632+139.745411/"
        );
    }

    #[test]
    fn test_format_degrees_minutes() {
        assert_eq!(
            format(
                48.866666666666667,
                2.3333333333333335,
                None,
                Iso6709Style::DegreesMinutes,
                4
            ),
            "+4852+00220/"
        );
    }

    #[test]
    fn test_format_degrees_minutes_seconds() {
        assert_eq!(
            format(
                35.360833333333332,
                138.72749999999999,
                Some(3776.0),
                Iso6709Style::DegreesMinutesSeconds,
                4
            ),
            "+352139+1384339+3776/"
        );
    }

    #[test]
    fn test_format_fractional_altitude() {
        assert_eq!(
            format(0.0, 0.0, Some(12.5), Iso6709Style::Degrees, 4),
            "+00+000+12.500/"
        );
    }

    #[test]
    fn test_parse_format_round_trip() {
        let text = "+40.6894-074.0447/";
        let (lat, lon, alt) = parse(text).unwrap();
        assert_eq!(format(lat, lon, alt, Iso6709Style::DecimalDegrees, 4), text);
    }

    #[test]
    fn test_style_from_str() {
        assert_eq!("dms".parse::<Iso6709Style>().unwrap(), Iso6709Style::DegreesMinutesSeconds);
        assert!(matches!(
            "degrees".parse::<Iso6709Style>(),
            Err(GeoError::InvalidOption { .. })
        ));
    }
}
