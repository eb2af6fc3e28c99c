//! Geographic points on a sphere.
//!
//! Provides the [`Point`] value type at the centre of the toolkit: a
//! validated latitude/longitude pair plus the configuration every derived
//! result depends on (distance unit system, timezone offset for solar
//! calculations, reference body). All geometry, grid-locator and
//! solar-event operations hang off this type.
//!
//! # Coordinate System
//!
//! - **Latitude**: -90 to +90 degrees, positive north
//! - **Longitude**: -180 to +180 degrees, positive east
//!
//! Degrees are the canonical representation; radians are cached at
//! construction for trigonometric use and are always derived from the
//! degree values, never set independently.
//!
//! # Examples
//!
//! ```
//! use sphere_coords::{Point, Units};
//!
//! let home = Point::new(52.015, -0.221)?;
//! let telford = Point::new(52.6333, -2.5)?;
//!
//! assert_eq!(home.distance(&telford) as i64, 169);
//! assert_eq!(home.bearing(&telford) as i64, 294);
//!
//! // Unit systems scale every distance result.
//! let miles = home.with_units(Units::Imperial);
//! assert_eq!(miles.distance(&telford.with_units(Units::Imperial)) as i64, 105);
//! # Ok::<(), sphere_coords::GeoError>(())
//! ```
//!
//! # Equality
//!
//! Two points are equal when their latitude and longitude match; the
//! unit/timezone/body configuration does not participate.

mod geodesic;

pub use geodesic::DistanceMethod;

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};

use crate::angle::{normalize_longitude, to_decimal_degrees, to_dm, to_dms};
use crate::errors::{GeoError, GeoResult};
use crate::iso6709;
use crate::locator::{self, Precision};
use crate::solar::{self, Event, Zenith};
use crate::units::{Body, Units};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Display styles for [`Point::format`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisplayStyle {
    /// `N52.015°; W000.221°`
    #[default]
    Decimal,
    /// `52°00.90'N, 000°13.26'W`
    DegreesMinutes,
    /// `52°00'54"N, 000°13'15"W`
    DegreesMinutesSeconds,
    /// Maidenhead square, `IO92`.
    Locator,
}

impl FromStr for DisplayStyle {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dd" => Ok(DisplayStyle::Decimal),
            "dm" => Ok(DisplayStyle::DegreesMinutes),
            "dms" => Ok(DisplayStyle::DegreesMinutesSeconds),
            "locator" => Ok(DisplayStyle::Locator),
            other => Err(GeoError::invalid_option("style", other)),
        }
    }
}

/// A point on the surface of a sphere.
///
/// Serialization goes through a degrees-only representation;
/// deserializing revalidates the coordinate ranges and rebuilds the
/// cached radians, so a stored point can never resurrect with a stale
/// cache or out-of-range coordinates.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "PointRepr", try_from = "PointRepr"))]
pub struct Point {
    latitude: f64,
    longitude: f64,
    rad_latitude: f64,
    rad_longitude: f64,
    units: Units,
    timezone: i32,
    body: Body,
}

impl Point {
    /// Creates a point from decimal degrees with default configuration
    /// (metric units, UTC, Earth).
    ///
    /// # Errors
    ///
    /// [`GeoError::OutOfRange`] when latitude is outside [-90, 90] or
    /// longitude outside [-180, 180].
    pub fn new(latitude: f64, longitude: f64) -> GeoResult<Self> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(GeoError::out_of_range("latitude", latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(GeoError::out_of_range("longitude", longitude));
        }
        Ok(Self {
            latitude,
            longitude,
            rad_latitude: latitude.to_radians(),
            rad_longitude: longitude.to_radians(),
            units: Units::Metric,
            timezone: 0,
            body: Body::Earth,
        })
    }

    /// Creates a point from coordinates in radians.
    pub fn from_radians(latitude: f64, longitude: f64) -> GeoResult<Self> {
        Self::new(latitude.to_degrees(), longitude.to_degrees())
    }

    /// Creates a point from (degrees, minutes, seconds) triples. The sign
    /// of each component carries through, so `(0.0, -13.0, -15.0)` is a
    /// southern/western fraction of a degree.
    pub fn from_dms(latitude: (f64, f64, f64), longitude: (f64, f64, f64)) -> GeoResult<Self> {
        Self::new(
            to_decimal_degrees(latitude.0, latitude.1, latitude.2),
            to_decimal_degrees(longitude.0, longitude.1, longitude.2),
        )
    }

    /// Derives a point from a Maidenhead grid locator: the centre of the
    /// smallest cell the locator resolves.
    pub fn from_grid_locator(locator: &str) -> GeoResult<Self> {
        let (latitude, longitude) = locator::decode(locator)?;
        Self::new(latitude, longitude)
    }

    /// Derives a point from an ISO 6709 coordinate string. Any altitude in
    /// the string is ignored; use [`iso6709::parse`] to keep it.
    pub fn from_iso6709(text: &str) -> GeoResult<Self> {
        let (latitude, longitude, _altitude) = iso6709::parse(text)?;
        Self::new(latitude, longitude)
    }

    /// Parses a `"lat;lon"` style coordinate pair. The delimiter may be a
    /// semicolon, comma or whitespace.
    pub fn parse(text: &str) -> GeoResult<Self> {
        let bad = || GeoError::format_error("coordinate string", text);

        let mut fields = text
            .split(|c: char| c == ';' || c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty());
        let latitude = fields.next().ok_or_else(bad)?;
        let longitude = fields.next().ok_or_else(bad)?;
        if fields.next().is_some() {
            return Err(bad());
        }
        Self::new(
            latitude.parse().map_err(|_| bad())?,
            longitude.parse().map_err(|_| bad())?,
        )
    }

    /// Returns a copy using the given distance unit system.
    pub fn with_units(mut self, units: Units) -> Self {
        self.units = units;
        self
    }

    /// Returns a copy using the given timezone offset from UTC in minutes.
    /// Only solar calculations consult it.
    pub fn with_timezone(mut self, minutes: i32) -> Self {
        self.timezone = minutes;
        self
    }

    /// Returns a copy measured against the given body's radius.
    pub fn with_body(mut self, body: Body) -> Self {
        self.body = body;
        self
    }

    /// Latitude in decimal degrees.
    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in decimal degrees.
    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Latitude in radians.
    #[inline]
    pub fn latitude_radians(&self) -> f64 {
        self.rad_latitude
    }

    /// Longitude in radians.
    #[inline]
    pub fn longitude_radians(&self) -> f64 {
        self.rad_longitude
    }

    #[inline]
    pub fn units(&self) -> Units {
        self.units
    }

    /// Timezone offset from UTC in minutes.
    #[inline]
    pub fn timezone(&self) -> i32 {
        self.timezone
    }

    #[inline]
    pub fn body(&self) -> Body {
        self.body
    }

    /// Builds a derived point carrying this point's configuration. Used by
    /// the geometric operations, whose results are always in range apart
    /// from longitude wrap.
    pub(crate) fn derived(&self, latitude: f64, longitude: f64) -> Self {
        let longitude = normalize_longitude(longitude);
        Self {
            latitude,
            longitude,
            rad_latitude: latitude.to_radians(),
            rad_longitude: longitude.to_radians(),
            ..*self
        }
    }

    /// Maidenhead locator for this point at the requested precision.
    pub fn to_grid_locator(&self, precision: Precision) -> String {
        locator::encode_cells(self.latitude, self.longitude, precision)
    }

    /// Sunrise on the given date, in this point's timezone.
    pub fn sunrise(&self, date: NaiveDate) -> Option<NaiveTime> {
        self.sunrise_at(date, Zenith::Horizon)
    }

    /// Start of the given twilight band on the given date.
    pub fn sunrise_at(&self, date: NaiveDate, zenith: Zenith) -> Option<NaiveTime> {
        solar::sun_rise_set(
            self.latitude,
            self.longitude,
            date,
            Event::Rise,
            self.timezone,
            zenith,
        )
    }

    /// Sunset on the given date, in this point's timezone.
    pub fn sunset(&self, date: NaiveDate) -> Option<NaiveTime> {
        self.sunset_at(date, Zenith::Horizon)
    }

    /// End of the given twilight band on the given date.
    pub fn sunset_at(&self, date: NaiveDate, zenith: Zenith) -> Option<NaiveTime> {
        solar::sun_rise_set(
            self.latitude,
            self.longitude,
            date,
            Event::Set,
            self.timezone,
            zenith,
        )
    }

    /// Sunrise and sunset in one call.
    pub fn sun_events(&self, date: NaiveDate) -> (Option<NaiveTime>, Option<NaiveTime>) {
        self.sun_events_at(date, Zenith::Horizon)
    }

    /// Twilight start and end in one call.
    pub fn sun_events_at(
        &self,
        date: NaiveDate,
        zenith: Zenith,
    ) -> (Option<NaiveTime>, Option<NaiveTime>) {
        solar::sun_events(self.latitude, self.longitude, date, self.timezone, zenith)
    }

    /// Renders the point in the requested display style.
    pub fn format(&self, style: DisplayStyle) -> String {
        let ns = if self.latitude < 0.0 { 'S' } else { 'N' };
        let ew = if self.longitude < 0.0 { 'W' } else { 'E' };
        match style {
            DisplayStyle::Decimal => format!(
                "{}{:06.3}°; {}{:07.3}°",
                ns,
                self.latitude.abs(),
                ew,
                self.longitude.abs()
            ),
            DisplayStyle::DegreesMinutes => {
                let (lat_d, lat_m) = to_dm(self.latitude);
                let (lon_d, lon_m) = to_dm(self.longitude);
                format!(
                    "{:02}°{:05.2}'{}, {:03}°{:05.2}'{}",
                    lat_d.abs(),
                    lat_m.abs(),
                    ns,
                    lon_d.abs(),
                    lon_m.abs(),
                    ew
                )
            }
            DisplayStyle::DegreesMinutesSeconds => {
                let (lat_d, lat_m, lat_s) = to_dms(self.latitude);
                let (lon_d, lon_m, lon_s) = to_dms(self.longitude);
                format!(
                    "{:02}°{:02}'{:02}\"{}, {:03}°{:02}'{:02}\"{}",
                    lat_d.abs(),
                    lat_m.abs(),
                    lat_s.abs(),
                    ns,
                    lon_d.abs(),
                    lon_m.abs(),
                    lon_s.abs(),
                    ew
                )
            }
            DisplayStyle::Locator => self.to_grid_locator(Precision::Square),
        }
    }
}

/// Wire form of [`Point`]: the degree coordinates plus configuration,
/// without the radian cache. Configuration fields default when absent.
#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct PointRepr {
    latitude: f64,
    longitude: f64,
    #[serde(default)]
    units: Units,
    #[serde(default)]
    timezone: i32,
    #[serde(default)]
    body: Body,
}

#[cfg(feature = "serde")]
impl From<Point> for PointRepr {
    fn from(point: Point) -> Self {
        Self {
            latitude: point.latitude,
            longitude: point.longitude,
            units: point.units,
            timezone: point.timezone,
            body: point.body,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<PointRepr> for Point {
    type Error = GeoError;

    fn try_from(repr: PointRepr) -> Result<Self, Self::Error> {
        Ok(Point::new(repr.latitude, repr.longitude)?
            .with_units(repr.units)
            .with_timezone(repr.timezone)
            .with_body(repr.body))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(DisplayStyle::Decimal))
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.latitude == other.latitude && self.longitude == other.longitude
    }
}

impl FromStr for Point {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
