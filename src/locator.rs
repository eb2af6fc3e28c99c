//! Maidenhead grid locator encoding and decoding.
//!
//! A Maidenhead locator names a grid cell with successively finer character
//! pairs, longitude first:
//!
//! | Positions | Class | Cell span (lon x lat) |
//! |-----------|-------|-----------------------|
//! | 0-1 | letters `A`-`R` | 20 x 10 degrees (field) |
//! | 2-3 | digits `0`-`9` | 2 x 1 degrees (square) |
//! | 4-5 | letters `a`-`x` | 1/24 of a square (subsquare) |
//! | 6-7 | digits `0`-`9` | 1/10 of a subsquare (extended square) |
//!
//! Decoding returns the centre of the smallest resolved cell, so repeated
//! encode/decode round trips converge instead of drifting to a cell edge.
//!
//! ```
//! use sphere_coords::locator::{decode, encode, Precision};
//!
//! assert_eq!(encode(21.319, -157.904, Precision::Extsquare).unwrap(), "BL11bh16");
//!
//! let (lat, lon) = decode("BL11bh16").unwrap();
//! assert!((lat - 21.319).abs() < 0.005);
//! assert!((lon - -157.904).abs() < 0.005);
//! ```

use std::str::FromStr;

use crate::constants::{
    LATITUDE_EXTSQUARE, LATITUDE_FIELD, LATITUDE_SQUARE, LATITUDE_SUBSQUARE, LONGITUDE_EXTSQUARE,
    LONGITUDE_FIELD, LONGITUDE_SQUARE, LONGITUDE_SUBSQUARE,
};
use crate::errors::{GeoError, GeoResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Precision of an encoded locator string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Precision {
    /// Four characters, e.g. `IO92`.
    #[default]
    Square,
    /// Six characters, e.g. `IO92va`.
    Subsquare,
    /// Eight characters, e.g. `IO92va33`.
    Extsquare,
}

impl Precision {
    /// Length of a locator string at this precision.
    pub const fn len(self) -> usize {
        match self {
            Precision::Square => 4,
            Precision::Subsquare => 6,
            Precision::Extsquare => 8,
        }
    }
}

impl FromStr for Precision {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "square" => Ok(Precision::Square),
            "subsquare" => Ok(Precision::Subsquare),
            "extsquare" => Ok(Precision::Extsquare),
            other => Err(GeoError::invalid_option("precision", other)),
        }
    }
}

/// Encodes a latitude/longitude pair as a Maidenhead locator.
///
/// Coordinates are shifted into [0, 180] / [0, 360) ranges and divided by
/// each level's cell span in turn, emitting a letter or digit and carrying
/// the remainder forward. The north and east edges (latitude 90, longitude
/// 180) are treated as belonging to the last cell.
///
/// # Errors
///
/// [`GeoError::OutOfRange`] when either coordinate is outside its valid
/// range.
pub fn encode(latitude: f64, longitude: f64, precision: Precision) -> GeoResult<String> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(GeoError::out_of_range("latitude", latitude));
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(GeoError::out_of_range("longitude", longitude));
    }
    Ok(encode_cells(latitude, longitude, precision))
}

/// Cell-division encoder over coordinates already known to be in range.
pub(crate) fn encode_cells(latitude: f64, longitude: f64, precision: Precision) -> String {
    let mut latitude = latitude + 90.0;
    let mut longitude = longitude + 180.0;
    let mut locator = String::with_capacity(precision.len());

    let mut letter = |value: &mut f64, span: f64, base: u8, max: u8| {
        let index = ((*value / span) as u8).min(max);
        *value -= f64::from(index) * span;
        locator.push((base + index) as char);
    };

    letter(&mut longitude, LONGITUDE_FIELD, b'A', 17);
    letter(&mut latitude, LATITUDE_FIELD, b'A', 17);
    letter(&mut longitude, LONGITUDE_SQUARE, b'0', 9);
    letter(&mut latitude, LATITUDE_SQUARE, b'0', 9);

    if precision != Precision::Square {
        letter(&mut longitude, LONGITUDE_SUBSQUARE, b'a', 23);
        letter(&mut latitude, LATITUDE_SUBSQUARE, b'a', 23);
    }
    if precision == Precision::Extsquare {
        letter(&mut longitude, LONGITUDE_EXTSQUARE, b'0', 9);
        letter(&mut latitude, LATITUDE_EXTSQUARE, b'0', 9);
    }

    locator
}

/// Decodes a Maidenhead locator to geodesic latitude and longitude.
///
/// The returned point is the centre of the smallest cell the locator
/// resolves; unresolved finer levels default to their midpoints.
///
/// # Errors
///
/// [`GeoError::Format`] naming the locator when its length is not 4, 6 or 8
/// or any character falls outside its class.
pub fn decode(locator: &str) -> GeoResult<(f64, f64)> {
    let bad = || GeoError::format_error("grid locator", locator);

    let chars: Vec<char> = locator.chars().collect();
    if !matches!(chars.len(), 4 | 6 | 8) {
        return Err(bad());
    }

    let field = |c: char| -> GeoResult<f64> {
        if c.is_ascii_uppercase() && c <= 'R' {
            Ok(f64::from(c as u8 - b'A'))
        } else {
            Err(bad())
        }
    };
    let digit = |c: char| -> GeoResult<f64> {
        c.to_digit(10).map(f64::from).ok_or_else(bad)
    };
    // Uppercase subsquares show up in the wild despite lowercase being the
    // accepted style, so fold case here.
    let subsquare = |c: char| -> GeoResult<f64> {
        let c = c.to_ascii_lowercase();
        if c.is_ascii_lowercase() && c <= 'x' {
            Ok(f64::from(c as u8 - b'a'))
        } else {
            Err(bad())
        }
    };

    let mut longitude = LONGITUDE_FIELD * field(chars[0])? + LONGITUDE_SQUARE * digit(chars[2])?;
    let mut latitude = LATITUDE_FIELD * field(chars[1])? + LATITUDE_SQUARE * digit(chars[3])?;

    if chars.len() >= 6 {
        longitude += LONGITUDE_SUBSQUARE * subsquare(chars[4])?;
        latitude += LATITUDE_SUBSQUARE * subsquare(chars[5])?;
    }

    if chars.len() == 8 {
        longitude += LONGITUDE_EXTSQUARE * digit(chars[6])? + LONGITUDE_EXTSQUARE / 2.0;
        latitude += LATITUDE_EXTSQUARE * digit(chars[7])? + LATITUDE_EXTSQUARE / 2.0;
    } else {
        longitude += LONGITUDE_EXTSQUARE * 5.0;
        latitude += LATITUDE_EXTSQUARE * 5.0;
    }

    // Rebase to geodesic latitude and longitude.
    Ok((latitude - 90.0, longitude - 180.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode() {
        assert_eq!(
            encode(21.319, -157.904, Precision::Extsquare).unwrap(),
            "BL11bh16"
        );
        assert_eq!(encode(52.021, -0.208, Precision::Subsquare).unwrap(), "IO92va");
        assert_eq!(encode(52.021, -1.958, Precision::Square).unwrap(), "IO92");
    }

    #[test]
    fn test_encode_rejects_out_of_range() {
        assert!(matches!(
            encode(92.0, 0.0, Precision::Square),
            Err(GeoError::OutOfRange { .. })
        ));
        assert!(matches!(
            encode(0.0, -200.0, Precision::Square),
            Err(GeoError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_encode_edges_clamp_into_last_cell() {
        assert_eq!(encode(90.0, 180.0, Precision::Square).unwrap(), "RR99");
        assert_eq!(encode(-90.0, -180.0, Precision::Square).unwrap(), "AA00");
    }

    #[test]
    fn test_decode() {
        let (lat, lon) = decode("BL11bh16").unwrap();
        assert!((lat - 21.31875).abs() < 1e-9);
        assert!((lon - -157.90416666666667).abs() < 1e-9);

        let (lat, lon) = decode("IO92va").unwrap();
        assert!((lat - 52.020833333).abs() < 1e-6);
        assert!((lon - -0.208333333).abs() < 1e-6);

        let (lat, lon) = decode("IO92").unwrap();
        assert!((lat - 52.020833333).abs() < 1e-6);
        assert!((lon - -1.958333333).abs() < 1e-6);
    }

    #[test]
    fn test_decode_accepts_uppercase_subsquare() {
        assert_eq!(decode("IO92VA").unwrap(), decode("IO92va").unwrap());
    }

    #[test]
    fn test_decode_rejects_bad_length() {
        for bad in ["IO9", "IO92v", "IO92va3", "IO92va334"] {
            assert!(matches!(decode(bad), Err(GeoError::Format { .. })));
        }
    }

    #[test]
    fn test_decode_rejects_bad_characters() {
        // 'S' is past the 18-field alphabet; lowercase fields and letters in
        // digit positions are invalid too.
        for bad in ["SS99", "io92", "IOxx", "IO92yz", "IO92vaxx"] {
            assert!(matches!(decode(bad), Err(GeoError::Format { .. })));
        }
    }

    #[test]
    fn test_round_trip_within_the_encoded_cell() {
        // Decoding never leaves the encoded cell, so a decode/encode round
        // trip converges to a fixed locator instead of drifting.
        let cases = [(21.319, -157.904), (52.015, -0.221), (-33.857, 151.215)];
        for (lat, lon) in cases {
            for precision in [Precision::Square, Precision::Subsquare, Precision::Extsquare] {
                let locator = encode(lat, lon, precision).unwrap();
                let (lat2, lon2) = decode(&locator).unwrap();
                assert_eq!(
                    encode(lat2, lon2, precision).unwrap(),
                    locator,
                    "{:?} round trip drifted out of its cell",
                    precision
                );
            }
        }
    }

    #[test]
    fn test_round_trip_within_half_a_cell() {
        // At subsquare and extsquare precision the decoded point is the
        // centre of the resolved cell, so the error is at most half a span.
        let cases = [(21.319, -157.904), (52.015, -0.221), (-33.857, 151.215)];
        let levels = [
            (Precision::Subsquare, LATITUDE_SUBSQUARE, LONGITUDE_SUBSQUARE),
            (Precision::Extsquare, LATITUDE_EXTSQUARE, LONGITUDE_EXTSQUARE),
        ];
        for (lat, lon) in cases {
            for (precision, lat_span, lon_span) in levels {
                let (lat2, lon2) = decode(&encode(lat, lon, precision).unwrap()).unwrap();
                assert!(
                    (lat2 - lat).abs() <= lat_span / 2.0 + 1e-9,
                    "{:?}: latitude {} decoded to {}",
                    precision,
                    lat,
                    lat2
                );
                assert!(
                    (lon2 - lon).abs() <= lon_span / 2.0 + 1e-9,
                    "{:?}: longitude {} decoded to {}",
                    precision,
                    lon,
                    lon2
                );
            }
        }
    }
}
