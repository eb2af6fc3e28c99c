//! Angle conversion helpers.
//!
//! Building blocks shared by the coordinate formatter and the point type:
//! sexagesimal conversions, meridian angle/distance conversions, and the
//! compass rose.
//!
//! | Function | Input | Output |
//! |----------|-------|--------|
//! | [`to_dms`] | decimal degrees | (degrees, minutes, seconds) integers |
//! | [`to_dm`] | decimal degrees | (degrees, fractional minutes) |
//! | [`to_decimal_degrees`] | (degrees, minutes, seconds) | decimal degrees |
//! | [`angle_to_distance`] | degrees along a meridian | distance |
//! | [`distance_to_angle`] | distance along a meridian | degrees |
//! | [`bearing_to_name`] | bearing in degrees | 16-point compass name |
//!
//! The sign convention for sexagesimal output carries the sign on every
//! non-zero component, so partial values stay sign-consistent and
//! [`to_decimal_degrees`] is an inverse:
//!
//! ```
//! use sphere_coords::angle::{to_dms, to_decimal_degrees};
//!
//! assert_eq!(to_dms(52.015), (52, 0, 54));
//! assert_eq!(to_dms(-0.221), (0, -13, -15));
//! assert!((to_decimal_degrees(0.0, -13.0, -15.0) - -0.220833).abs() < 1e-6);
//! ```

use crate::units::{Body, Units};

/// The 16-point compass rose, clockwise from north.
pub const COMPASS_NAMES: [&str; 16] = [
    "North",
    "North-north-east",
    "North-east",
    "East-north-east",
    "East",
    "East-south-east",
    "South-east",
    "South-south-east",
    "South",
    "South-south-west",
    "South-west",
    "West-south-west",
    "West",
    "West-north-west",
    "North-west",
    "North-north-west",
];

/// Converts a decimal angle to whole degrees, minutes and seconds.
///
/// Seconds are truncated, so the round trip through
/// [`to_decimal_degrees`] is exact to within one arcsecond.
pub fn to_dms(angle: f64) -> (i32, i32, i32) {
    let sign = if angle < 0.0 { -1 } else { 1 };
    let total = angle.abs() * 3600.0;
    let minutes = (total / 60.0).floor();
    let seconds = total - minutes * 60.0;
    let degrees = (minutes / 60.0).floor();
    let minutes = minutes - degrees * 60.0;
    (
        sign * degrees as i32,
        sign * minutes as i32,
        sign * seconds as i32,
    )
}

/// Converts a decimal angle to whole degrees and fractional minutes.
///
/// Minutes keep full precision, so the round trip through
/// [`to_decimal_degrees`] (with zero seconds) is exact up to floating
/// rounding.
pub fn to_dm(angle: f64) -> (i32, f64) {
    let sign = if angle < 0.0 { -1.0 } else { 1.0 };
    let total = angle.abs() * 3600.0;
    let minutes = (total / 60.0).floor();
    let seconds = total - minutes * 60.0;
    let degrees = (minutes / 60.0).floor();
    let minutes = minutes - degrees * 60.0;
    (
        (sign * degrees) as i32,
        sign * (minutes + seconds / 60.0),
    )
}

/// Converts degrees, minutes and seconds to a decimal angle.
#[inline]
pub fn to_decimal_degrees(degrees: f64, minutes: f64, seconds: f64) -> f64 {
    degrees + minutes / 60.0 + seconds / 3600.0
}

/// Converts an angle to the distance it subtends along a meridian.
pub fn angle_to_distance(angle: f64, units: Units, body: Body) -> f64 {
    units.from_kilometres(angle.to_radians() * body.radius_km())
}

/// Converts a distance along a meridian to the angle it subtends.
pub fn distance_to_angle(distance: f64, units: Units, body: Body) -> f64 {
    (units.to_kilometres(distance) / body.radius_km()).to_degrees()
}

/// Names a bearing on the 16-point compass rose.
///
/// The bearing is rounded to the nearest 22.5 degree sector.
pub fn bearing_to_name(bearing: f64) -> &'static str {
    let sector = (bearing.rem_euclid(360.0) / 22.5).round() as usize;
    COMPASS_NAMES[sector % 16]
}

/// Normalizes a longitude to the range (-180, 180].
#[inline]
pub fn normalize_longitude(longitude: f64) -> f64 {
    let mut normalized = longitude % 360.0;
    if normalized > 180.0 {
        normalized -= 360.0;
    } else if normalized <= -180.0 {
        normalized += 360.0;
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_dms() {
        assert_eq!(to_dms(52.015), (52, 0, 54));
        assert_eq!(to_dms(-0.221), (0, -13, -15));
        assert_eq!(to_dms(33.94), (33, 56, 23));
        assert_eq!(to_dms(-118.4), (-118, -24, 0));
        assert_eq!(to_dms(0.0), (0, 0, 0));
    }

    #[test]
    fn test_to_dm() {
        let (d, m) = to_dm(-0.221);
        assert_eq!(d, 0);
        assert!((m - -13.26).abs() < 1e-10);

        let (d, m) = to_dm(52.015);
        assert_eq!(d, 52);
        assert!((m - 0.9).abs() < 1e-10);
    }

    #[test]
    fn test_to_decimal_degrees() {
        assert!((to_decimal_degrees(52.0, 0.0, 54.0) - 52.015).abs() < 1e-12);
        assert!((to_decimal_degrees(0.0, -13.0, -15.0) - -0.2208333333).abs() < 1e-9);
        assert!((to_decimal_degrees(0.0, -13.26, 0.0) - -0.221).abs() < 1e-12);
    }

    #[test]
    fn test_dms_round_trip() {
        for angle in [52.015, -0.221, 33.94, -118.4, 89.9999] {
            let (d, m, s) = to_dms(angle);
            let back = to_decimal_degrees(d as f64, m as f64, s as f64);
            // Truncated seconds lose less than one arcsecond.
            assert!(
                (back - angle).abs() < 1.0 / 3600.0,
                "round trip of {} drifted to {}",
                angle,
                back
            );
        }
    }

    #[test]
    fn test_dm_round_trip() {
        for angle in [52.015, -0.221, 33.94, -118.4] {
            let (d, m) = to_dm(angle);
            let back = to_decimal_degrees(d as f64, m, 0.0);
            assert!((back - angle).abs() < 1e-9);
        }
    }

    #[test]
    fn test_angle_to_distance() {
        let km = angle_to_distance(1.0, Units::Metric, Body::Earth);
        assert!((km - 111.212).abs() < 1e-3);

        let mi = angle_to_distance(360.0, Units::Imperial, Body::Earth);
        assert_eq!(mi as i64, 24882);

        let nmi = angle_to_distance(1.0 / 60.0, Units::Nautical, Body::Earth);
        assert_eq!(nmi as i64, 1);
    }

    #[test]
    fn test_distance_to_angle() {
        assert_eq!(
            distance_to_angle(111.212, Units::Metric, Body::Earth).round() as i64,
            1
        );
        assert_eq!(
            distance_to_angle(24882.0, Units::Imperial, Body::Earth).round() as i64,
            360
        );
    }

    #[test]
    fn test_bearing_to_name() {
        assert_eq!(bearing_to_name(0.0), "North");
        assert_eq!(bearing_to_name(352.0), "North");
        assert_eq!(bearing_to_name(225.0), "South-west");
        assert_eq!(bearing_to_name(294.8), "West-north-west");
        assert_eq!(bearing_to_name(315.0), "North-west");
        assert_eq!(bearing_to_name(-45.0), "North-west");
    }

    #[test]
    fn test_normalize_longitude() {
        assert_eq!(normalize_longitude(190.0), -170.0);
        assert_eq!(normalize_longitude(-190.0), 170.0);
        assert_eq!(normalize_longitude(180.0), 180.0);
        assert_eq!(normalize_longitude(0.0), 0.0);
    }
}
