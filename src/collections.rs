//! Collections of points.
//!
//! Three containers cover the common shapes of location data:
//!
//! - [`Points`]: an ordered sequence, as read from a track log. Pairwise
//!   operations walk consecutive pairs and return one result per leg;
//!   element-wise operations return one result per point.
//! - [`TimedPoints`]: a sequence with a timestamp per point, adding speed
//!   over each leg.
//! - [`KeyedPoints`]: named points in insertion order, as read from a
//!   station or waypoint database. Pairwise operations take the key order
//!   to walk explicitly.
//!
//! ```
//! use sphere_coords::{Point, Points};
//!
//! let route = Points::from_strings(&["52.015;-0.221", "52.168;0.040"])?;
//! let legs = route.distances();
//! assert_eq!(legs.len(), 1);
//! assert_eq!(format!("{:.1} km", legs[0]), "24.6 km");
//! # Ok::<(), sphere_coords::GeoError>(())
//! ```

use std::slice;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::errors::{GeoError, GeoResult};
use crate::locator::Precision;
use crate::point::{DistanceMethod, Point};
use crate::solar::Zenith;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An ordered sequence of points.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Points {
    points: Vec<Point>,
}

impl Points {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Parses a sequence of `"lat;lon"` strings, failing on the first
    /// malformed entry.
    pub fn from_strings<S: AsRef<str>>(strings: &[S]) -> GeoResult<Self> {
        strings
            .iter()
            .map(|s| Point::parse(s.as_ref()))
            .collect()
    }

    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Point> {
        self.points.iter()
    }

    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    fn pairwise<T>(&self, f: impl Fn(&Point, &Point) -> T) -> Vec<T> {
        self.points.windows(2).map(|w| f(&w[0], &w[1])).collect()
    }

    /// Haversine distance of each leg, in the units of the leg's starting
    /// point. Returns one fewer result than there are points.
    pub fn distances(&self) -> Vec<f64> {
        self.pairwise(|a, b| a.distance(b))
    }

    /// Leg distances using an explicit formula.
    pub fn distances_by(&self, method: DistanceMethod) -> Vec<f64> {
        self.pairwise(move |a, b| a.distance_by(b, method))
    }

    /// Initial bearing of each leg.
    pub fn bearings(&self) -> Vec<f64> {
        self.pairwise(|a, b| a.bearing(b))
    }

    /// Final bearing of each leg.
    pub fn final_bearings(&self) -> Vec<f64> {
        self.pairwise(|a, b| a.final_bearing(b))
    }

    /// Initial bearing and distance of each leg.
    pub fn inverses(&self) -> Vec<(f64, f64)> {
        self.pairwise(|a, b| a.inverse(b))
    }

    /// Midpoint of each leg.
    pub fn midpoints(&self) -> Vec<Point> {
        self.pairwise(|a, b| a.midpoint(b))
    }

    /// Destination of travelling the same bearing and distance from every
    /// point.
    pub fn destinations(&self, bearing: f64, distance: f64) -> Vec<Point> {
        self.points
            .iter()
            .map(|p| p.destination(bearing, distance))
            .collect()
    }

    /// Sunrise at each point on the given date.
    pub fn sunrises(&self, date: NaiveDate) -> Vec<Option<NaiveTime>> {
        self.points.iter().map(|p| p.sunrise(date)).collect()
    }

    /// Sunset at each point on the given date.
    pub fn sunsets(&self, date: NaiveDate) -> Vec<Option<NaiveTime>> {
        self.points.iter().map(|p| p.sunset(date)).collect()
    }

    /// Sunrise and sunset at each point.
    pub fn sun_events(
        &self,
        date: NaiveDate,
        zenith: Zenith,
    ) -> Vec<(Option<NaiveTime>, Option<NaiveTime>)> {
        self.points
            .iter()
            .map(|p| p.sun_events_at(date, zenith))
            .collect()
    }

    /// Maidenhead locator of each point.
    pub fn to_grid_locators(&self, precision: Precision) -> Vec<String> {
        self.points
            .iter()
            .map(|p| p.to_grid_locator(precision))
            .collect()
    }

    /// Points within `radius` (in the centre's units) of a centre point,
    /// in their original order.
    pub fn range(&self, centre: &Point, radius: f64) -> Points {
        self.points
            .iter()
            .filter(|&p| centre.distance(p) <= radius)
            .copied()
            .collect()
    }
}

impl FromIterator<Point> for Points {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl Extend<Point> for Points {
    fn extend<I: IntoIterator<Item = Point>>(&mut self, iter: I) {
        self.points.extend(iter);
    }
}

impl IntoIterator for Points {
    type Item = Point;
    type IntoIter = std::vec::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a> IntoIterator for &'a Points {
    type Item = &'a Point;
    type IntoIter = slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// A point with the time it was visited.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimedPoint {
    pub point: Point,
    pub time: NaiveDateTime,
}

impl TimedPoint {
    pub fn new(point: Point, time: NaiveDateTime) -> Self {
        Self { point, time }
    }
}

/// An ordered sequence of timed points, such as a GPS track.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimedPoints {
    points: Vec<TimedPoint>,
}

impl TimedPoints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_points(points: Vec<TimedPoint>) -> Self {
        Self { points }
    }

    pub fn push(&mut self, point: TimedPoint) {
        self.points.push(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, TimedPoint> {
        self.points.iter()
    }

    /// The points of the track in order, dropping timestamps. Every
    /// batched operation of [`Points`] is reachable from here.
    pub fn points(&self) -> Points {
        self.points.iter().map(|tp| tp.point).collect()
    }

    /// Average speed over each leg, in the starting point's units per
    /// hour. Legs with no elapsed time yield an infinite speed rather than
    /// an error.
    pub fn speeds(&self) -> Vec<f64> {
        self.points
            .windows(2)
            .map(|w| {
                let distance = w[0].point.distance(&w[1].point);
                let hours = (w[1].time - w[0].time).num_seconds() as f64 / 3600.0;
                distance / hours
            })
            .collect()
    }
}

impl FromIterator<TimedPoint> for TimedPoints {
    fn from_iter<I: IntoIterator<Item = TimedPoint>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for TimedPoints {
    type Item = TimedPoint;
    type IntoIter = std::vec::IntoIter<TimedPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

/// Named points in insertion order.
///
/// Keys are unique; inserting an existing key replaces the point without
/// moving it. Order-sensitive results always follow insertion order, so a
/// database read from a file reports in file order.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KeyedPoints {
    entries: Vec<(String, Point)>,
}

impl KeyedPoints {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `(name, "lat;lon")` pairs, failing on the first malformed
    /// coordinate string. Duplicate names replace in place, as with
    /// [`insert`](KeyedPoints::insert).
    pub fn from_strings<K, S>(entries: &[(K, S)]) -> GeoResult<Self>
    where
        K: AsRef<str>,
        S: AsRef<str>,
    {
        entries
            .iter()
            .map(|(key, s)| Ok((key.as_ref().to_string(), Point::parse(s.as_ref())?)))
            .collect()
    }

    /// Inserts or replaces a point, returning the previous point for the
    /// key if there was one.
    pub fn insert(&mut self, key: impl Into<String>, point: Point) -> Option<Point> {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => Some(std::mem::replace(existing, point)),
            None => {
                self.entries.push((key, point));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&Point> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, p)| p)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Point)> {
        self.entries.iter().map(|(k, p)| (k.as_str(), p))
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    fn lookup(&self, key: &str) -> GeoResult<&Point> {
        self.get(key).ok_or_else(|| GeoError::missing_key(key))
    }

    fn pairwise<T>(
        &self,
        keys: &[&str],
        f: impl Fn(&Point, &Point) -> T,
    ) -> GeoResult<Vec<T>> {
        let route = keys
            .iter()
            .map(|k| self.lookup(k))
            .collect::<GeoResult<Vec<_>>>()?;
        Ok(route.windows(2).map(|w| f(w[0], w[1])).collect())
    }

    /// Leg distances along the route named by `keys`.
    ///
    /// # Errors
    ///
    /// [`GeoError::MissingKey`] naming the first unknown key.
    pub fn distances(&self, keys: &[&str]) -> GeoResult<Vec<f64>> {
        self.pairwise(keys, |a, b| a.distance(b))
    }

    /// Initial bearing of each leg along the route named by `keys`.
    pub fn bearings(&self, keys: &[&str]) -> GeoResult<Vec<f64>> {
        self.pairwise(keys, |a, b| a.bearing(b))
    }

    /// Final bearing of each leg along the route named by `keys`.
    pub fn final_bearings(&self, keys: &[&str]) -> GeoResult<Vec<f64>> {
        self.pairwise(keys, |a, b| a.final_bearing(b))
    }

    /// Midpoint of each leg along the route named by `keys`.
    pub fn midpoints(&self, keys: &[&str]) -> GeoResult<Vec<Point>> {
        self.pairwise(keys, |a, b| a.midpoint(b))
    }

    /// Initial bearing and distance of each leg along the route named by
    /// `keys`.
    pub fn inverses(&self, keys: &[&str]) -> GeoResult<Vec<(f64, f64)>> {
        self.pairwise(keys, |a, b| a.inverse(b))
    }

    /// Destination of travelling the same bearing and distance from every
    /// point, key-paired, in insertion order.
    pub fn destinations(&self, bearing: f64, distance: f64) -> Vec<(&str, Point)> {
        self.iter()
            .map(|(k, p)| (k, p.destination(bearing, distance)))
            .collect()
    }

    /// Sunrise at every point, key-paired, in insertion order.
    pub fn sunrises(&self, date: NaiveDate) -> Vec<(&str, Option<NaiveTime>)> {
        self.iter().map(|(k, p)| (k, p.sunrise(date))).collect()
    }

    /// Sunset at every point, key-paired, in insertion order.
    pub fn sunsets(&self, date: NaiveDate) -> Vec<(&str, Option<NaiveTime>)> {
        self.iter().map(|(k, p)| (k, p.sunset(date))).collect()
    }

    /// Sunrise and sunset at every point, key-paired, in insertion order.
    pub fn sun_events(
        &self,
        date: NaiveDate,
        zenith: Zenith,
    ) -> Vec<(&str, (Option<NaiveTime>, Option<NaiveTime>))> {
        self.iter()
            .map(|(k, p)| (k, p.sun_events_at(date, zenith)))
            .collect()
    }

    /// Maidenhead locator of every point, key-paired, in insertion order.
    pub fn to_grid_locators(&self, precision: Precision) -> Vec<(&str, String)> {
        self.iter()
            .map(|(k, p)| (k, p.to_grid_locator(precision)))
            .collect()
    }

    /// Entries within `radius` (in the centre's units) of a centre point,
    /// in insertion order.
    pub fn range(&self, centre: &Point, radius: f64) -> Vec<(&str, Point)> {
        self.iter()
            .filter(|&(_, p)| centre.distance(p) <= radius)
            .map(|(k, p)| (k, *p))
            .collect()
    }
}

impl FromIterator<(String, Point)> for KeyedPoints {
    fn from_iter<I: IntoIterator<Item = (String, Point)>>(iter: I) -> Self {
        let mut keyed = Self::new();
        for (key, point) in iter {
            keyed.insert(key, point);
        }
        keyed
    }
}
