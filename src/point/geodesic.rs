//! Great-circle geometry for [`Point`].
//!
//! All operations assume a spherical body; the radius comes from the
//! point's configured [`Body`](crate::units::Body) and distances are
//! expressed in its configured [`Units`](crate::units::Units). Derived
//! points inherit the full configuration of the point the method was
//! called on.

use std::str::FromStr;

use crate::angle::bearing_to_name;
use crate::errors::GeoError;

use super::Point;

/// Great-circle distance formulas.
///
/// Haversine is the default: it is well conditioned for the short
/// distances where the spherical law of cosines loses precision. The two
/// agree to rounding error everywhere else.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DistanceMethod {
    #[default]
    Haversine,
    LawOfCosines,
}

impl FromStr for DistanceMethod {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "haversine" => Ok(DistanceMethod::Haversine),
            "sloc" => Ok(DistanceMethod::LawOfCosines),
            other => Err(GeoError::invalid_option("method", other)),
        }
    }
}

impl Point {
    /// Great-circle distance to another point, in this point's units.
    ///
    /// ```
    /// use sphere_coords::Point;
    ///
    /// let home = Point::new(52.015, -0.221)?;
    /// let telford = Point::new(52.6333, -2.5)?;
    /// assert_eq!(format!("{:.0} kilometres", home.distance(&telford)), "169 kilometres");
    /// # Ok::<(), sphere_coords::GeoError>(())
    /// ```
    pub fn distance(&self, other: &Point) -> f64 {
        self.distance_by(other, DistanceMethod::Haversine)
    }

    /// Great-circle distance using an explicit formula.
    pub fn distance_by(&self, other: &Point, method: DistanceMethod) -> f64 {
        let angle = match method {
            DistanceMethod::Haversine => {
                let delta_lat = other.rad_latitude - self.rad_latitude;
                let delta_lon = other.rad_longitude - self.rad_longitude;
                let a = (delta_lat / 2.0).sin().powi(2)
                    + self.rad_latitude.cos()
                        * other.rad_latitude.cos()
                        * (delta_lon / 2.0).sin().powi(2);
                2.0 * a.sqrt().atan2((1.0 - a).sqrt())
            }
            DistanceMethod::LawOfCosines => {
                let cos_angle = self.rad_latitude.sin() * other.rad_latitude.sin()
                    + self.rad_latitude.cos()
                        * other.rad_latitude.cos()
                        * (other.rad_longitude - self.rad_longitude).cos();
                // Rounding can push coincident points fractionally past 1.
                cos_angle.clamp(-1.0, 1.0).acos()
            }
        };
        self.units.from_kilometres(angle * self.body.radius_km())
    }

    /// Initial bearing to another point, in degrees clockwise from north
    /// in the range [0, 360).
    pub fn bearing(&self, other: &Point) -> f64 {
        let delta_lon = other.rad_longitude - self.rad_longitude;
        let y = delta_lon.sin() * other.rad_latitude.cos();
        let x = self.rad_latitude.cos() * other.rad_latitude.sin()
            - self.rad_latitude.sin() * other.rad_latitude.cos() * delta_lon.cos();
        y.atan2(x).to_degrees().rem_euclid(360.0)
    }

    /// Initial bearing named on the 16-point compass rose.
    pub fn bearing_name(&self, other: &Point) -> &'static str {
        bearing_to_name(self.bearing(other))
    }

    /// Bearing at which the great circle from here arrives at the other
    /// point: the reverse bearing turned through 180 degrees.
    pub fn final_bearing(&self, other: &Point) -> f64 {
        (other.bearing(self) + 180.0).rem_euclid(360.0)
    }

    /// Initial bearing and distance in one pass.
    ///
    /// Consistent with separate [`bearing`](Point::bearing) and
    /// [`distance`](Point::distance) calls; the distance uses Vincenty's
    /// spherical arctangent form, which shares the haversine's
    /// conditioning.
    pub fn inverse(&self, other: &Point) -> (f64, f64) {
        let delta_lon = other.rad_longitude - self.rad_longitude;
        let (sin_dlon, cos_dlon) = delta_lon.sin_cos();
        let (sin_lat1, cos_lat1) = self.rad_latitude.sin_cos();
        let (sin_lat2, cos_lat2) = other.rad_latitude.sin_cos();

        let y = sin_dlon * cos_lat2;
        let x = cos_lat1 * sin_lat2 - sin_lat1 * cos_lat2 * cos_dlon;
        let bearing = y.atan2(x).to_degrees().rem_euclid(360.0);

        let angle = (y.hypot(x)).atan2(sin_lat1 * sin_lat2 + cos_lat1 * cos_lat2 * cos_dlon);
        let distance = self.units.from_kilometres(angle * self.body.radius_km());
        (bearing, distance)
    }

    /// Midpoint of the great-circle segment to another point.
    pub fn midpoint(&self, other: &Point) -> Point {
        let delta_lon = other.rad_longitude - self.rad_longitude;
        let bx = other.rad_latitude.cos() * delta_lon.cos();
        let by = other.rad_latitude.cos() * delta_lon.sin();

        let latitude = (self.rad_latitude.sin() + other.rad_latitude.sin())
            .atan2(((self.rad_latitude.cos() + bx).powi(2) + by.powi(2)).sqrt());
        let longitude = self.rad_longitude + by.atan2(self.rad_latitude.cos() + bx);

        self.derived(latitude.to_degrees(), longitude.to_degrees())
    }

    /// Point reached by travelling `distance` (in this point's units)
    /// along the given initial bearing in degrees.
    ///
    /// ```
    /// use sphere_coords::Point;
    ///
    /// let home = Point::new(52.015, -0.221)?;
    /// let dest = home.destination(294.0, 169.0);
    /// assert_eq!(dest.to_string(), "N52.611°; W002.508°");
    /// # Ok::<(), sphere_coords::GeoError>(())
    /// ```
    pub fn destination(&self, bearing: f64, distance: f64) -> Point {
        let angle = self.units.to_kilometres(distance) / self.body.radius_km();
        let bearing = bearing.to_radians();

        let latitude = (self.rad_latitude.sin() * angle.cos()
            + self.rad_latitude.cos() * angle.sin() * bearing.cos())
        .asin();
        let longitude = self.rad_longitude
            + (bearing.sin() * angle.sin() * self.rad_latitude.cos())
                .atan2(angle.cos() - self.rad_latitude.sin() * latitude.sin());

        self.derived(latitude.to_degrees(), longitude.to_degrees())
    }
}
