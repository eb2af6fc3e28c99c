//! Sunrise, sunset and twilight calculations.
//!
//! Implements the approximate rise/set algorithm from:
//!
//! ```text
//! Almanac for Computers, 1990
//! published by Nautical Almanac Office
//! United States Naval Observatory
//! Washington, DC 20392
//! ```
//!
//! The algorithm works from the day of year and an hour-shifted longitude,
//! estimating the Sun's mean anomaly, true ecliptic longitude,
//! quadrant-corrected right ascension and declination, then solving for the
//! local hour angle against a configurable zenith angle. Accuracy is a few
//! minutes, which the zenith constants already drown out; temperature and
//! pressure effects on refraction are ignored for the same reason.
//!
//! At high latitudes the hour-angle equation can have no solution: the Sun
//! never crosses the requested zenith on that date (polar day or polar
//! night). That outcome is modeled as `None`, not an error.
//!
//! ```
//! use chrono::{NaiveDate, NaiveTime};
//! use sphere_coords::solar::{sun_events, Zenith};
//!
//! let date = NaiveDate::from_ymd_opt(2007, 6, 28).unwrap();
//! let (rise, set) = sun_events(52.015, -0.221, date, 0, Zenith::Horizon);
//! assert_eq!(rise, NaiveTime::from_hms_opt(3, 42, 0));
//! assert_eq!(set, NaiveTime::from_hms_opt(20, 25, 0));
//! ```

use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveTime};

use crate::errors::GeoError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Zenith angle selecting the event being computed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Zenith {
    /// Actual sunrise/sunset: the upper limb touching the horizon. 34' of
    /// atmospheric refraction plus 16' between the Sun's centre and its
    /// upper limb, a combined 50' below the horizon.
    #[default]
    Horizon,
    /// Civil twilight, Sun's centre 6 degrees below the horizon.
    Civil,
    /// Nautical twilight, 12 degrees below the horizon.
    Nautical,
    /// Astronomical twilight, 18 degrees below the horizon.
    Astronomical,
}

impl Zenith {
    /// Angle of the Sun's centre relative to the horizon, in degrees.
    pub const fn degrees(self) -> f64 {
        match self {
            Zenith::Horizon => -50.0 / 60.0,
            Zenith::Civil => -6.0,
            Zenith::Nautical => -12.0,
            Zenith::Astronomical => -18.0,
        }
    }
}

impl FromStr for Zenith {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "horizon" => Ok(Zenith::Horizon),
            "civil" => Ok(Zenith::Civil),
            "nautical" => Ok(Zenith::Nautical),
            "astronomical" => Ok(Zenith::Astronomical),
            other => Err(GeoError::invalid_option("zenith", other)),
        }
    }
}

/// Which side of the day to solve for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Event {
    Rise,
    Set,
}

impl FromStr for Event {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rise" => Ok(Event::Rise),
            "set" => Ok(Event::Set),
            other => Err(GeoError::invalid_option("mode", other)),
        }
    }
}

/// Calculates the sunrise or sunset time for a location.
///
/// `timezone` is the offset from UTC in minutes, applied to the final
/// result. Returns `None` when the event does not occur on the given date
/// (polar day or polar night).
pub fn sun_rise_set(
    latitude: f64,
    longitude: f64,
    date: NaiveDate,
    event: Event,
    timezone: i32,
    zenith: Zenith,
) -> Option<NaiveTime> {
    let n = date.ordinal() as f64;

    // Convert the longitude to an hour value and estimate the event time.
    let lng_hour = longitude / 15.0;
    let t = match event {
        Event::Rise => n + ((6.0 - lng_hour) / 24.0),
        Event::Set => n + ((18.0 - lng_hour) / 24.0),
    };

    // Sun's mean anomaly, then true ecliptic longitude.
    let m = (0.9856 * t) - 3.289;
    let l = m + 1.916 * m.to_radians().sin() + 0.020 * (2.0 * m.to_radians()).sin() + 282.634;
    let l = l.abs() % 360.0;

    // Right ascension, corrected into the same quadrant as L and converted
    // to hours.
    let mut ra = (0.91764 * l.to_radians().tan()).atan().to_degrees();
    let l_quadrant = (l / 90.0).floor() * 90.0;
    let ra_quadrant = (ra / 90.0).floor() * 90.0;
    ra += l_quadrant - ra_quadrant;
    ra /= 15.0;

    // Sun's declination.
    let sin_dec = 0.39782 * l.to_radians().sin();
    let cos_dec = sin_dec.asin().cos();

    // Local hour angle against the requested zenith.
    let cos_h = (zenith.degrees().to_radians() - sin_dec * latitude.to_radians().sin())
        / (cos_dec * latitude.to_radians().cos());
    if !(-1.0..=1.0).contains(&cos_h) {
        // The Sun never crosses this zenith here on the specified date.
        return None;
    }

    let h = match event {
        Event::Rise => 360.0 - cos_h.acos().to_degrees(),
        Event::Set => cos_h.acos().to_degrees(),
    } / 15.0;

    // Local mean time of the event, back to UTC, then into the caller's
    // timezone.
    let t_local = h + ra - (0.06571 * t) - 6.622;
    let ut = t_local - lng_hour;
    let local = ut + timezone as f64 / 60.0;

    let mut hour = local.trunc() as i32;
    let mut minute = if hour == 0 {
        (60.0 * local).trunc() as i32
    } else {
        (60.0 * (local % hour as f64)).trunc() as i32
    };
    // Single-step wraparound, as published in the reference implementation.
    if hour < 0 {
        hour += 23;
    }
    if minute < 0 {
        minute += 60;
    }

    NaiveTime::from_hms_opt(u32::try_from(hour).ok()?, u32::try_from(minute).ok()?, 0)
}

/// Calculates sunrise and sunset in one call.
pub fn sun_events(
    latitude: f64,
    longitude: f64,
    date: NaiveDate,
    timezone: i32,
    zenith: Zenith,
) -> (Option<NaiveTime>, Option<NaiveTime>) {
    (
        sun_rise_set(latitude, longitude, date, Event::Rise, timezone, zenith),
        sun_rise_set(latitude, longitude, date, Event::Set, timezone, zenith),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn time(h: u32, m: u32) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(h, m, 0)
    }

    #[test]
    fn test_sun_rise_set() {
        let d = date(2007, 6, 15);
        assert_eq!(
            sun_rise_set(52.015, -0.221, d, Event::Rise, 0, Zenith::Horizon),
            time(3, 40)
        );
        assert_eq!(
            sun_rise_set(52.015, -0.221, d, Event::Set, 0, Zenith::Horizon),
            time(20, 23)
        );
    }

    #[test]
    fn test_timezone_offset() {
        let d = date(2007, 6, 15);
        assert_eq!(
            sun_rise_set(52.015, -0.221, d, Event::Rise, 60, Zenith::Horizon),
            time(4, 40)
        );
        assert_eq!(
            sun_rise_set(52.015, -0.221, d, Event::Set, 60, Zenith::Horizon),
            time(21, 23)
        );
    }

    #[test]
    fn test_winter_events() {
        let d = date(1993, 12, 11);
        assert_eq!(
            sun_rise_set(52.015, -0.221, d, Event::Rise, 0, Zenith::Horizon),
            time(7, 58)
        );
        assert_eq!(
            sun_rise_set(52.015, -0.221, d, Event::Set, 0, Zenith::Horizon),
            time(15, 50)
        );
    }

    #[test]
    fn test_polar_night_is_not_an_error() {
        // 89N in late December: the Sun never rises.
        let d = date(2007, 12, 21);
        assert_eq!(
            sun_rise_set(89.0, 0.0, d, Event::Rise, 0, Zenith::Horizon),
            None
        );
    }

    #[test]
    fn test_sun_events() {
        let d = date(2007, 6, 28);
        assert_eq!(
            sun_events(52.015, -0.221, d, 0, Zenith::Horizon),
            (time(3, 42), time(20, 25))
        );
    }

    #[test]
    fn test_civil_twilight() {
        let d = date(2007, 6, 15);
        assert_eq!(
            sun_events(52.015, -0.221, d, 0, Zenith::Civil),
            (time(2, 51), time(21, 12))
        );
    }

    #[test]
    fn test_astronomical_twilight_absent_in_midsummer() {
        // At 52N in June the Sun never gets 18 degrees below the horizon.
        let d = date(2007, 6, 15);
        assert_eq!(
            sun_events(52.015, -0.221, d, 0, Zenith::Astronomical),
            (None, None)
        );
    }

    #[test]
    fn test_westward_location_crosses_utc_midnight() {
        // JFK's UTC sunset falls just after midnight in June.
        let d = date(2007, 6, 15);
        assert_eq!(
            sun_events(40.638611, -73.762222, d, 0, Zenith::Horizon),
            (time(9, 23), time(0, 27))
        );
    }

    #[test]
    fn test_zenith_degrees() {
        assert!((Zenith::Horizon.degrees() - (-50.0 / 60.0)).abs() < 1e-12);
        assert_eq!(Zenith::Civil.degrees(), -6.0);
        assert_eq!(Zenith::Nautical.degrees(), -12.0);
        assert_eq!(Zenith::Astronomical.degrees(), -18.0);
    }

    #[test]
    fn test_option_parsing() {
        assert_eq!("civil".parse::<Zenith>().unwrap(), Zenith::Civil);
        assert_eq!("rise".parse::<Event>().unwrap(), Event::Rise);
        assert!("dusk".parse::<Zenith>().is_err());
        assert!("transit".parse::<Event>().is_err());
    }
}
