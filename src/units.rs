//! Distance unit systems and reference bodies.
//!
//! Both are plain enums backing fixed constant tables, so a unit system or
//! body can never hold an unknown value once constructed. The textual
//! constructors (`FromStr`) are the entry point for importer code handed
//! configuration strings; they fail with [`GeoError::InvalidOption`] for
//! anything unrecognized.

use std::fmt;
use std::str::FromStr;

use crate::constants::{NAUTICAL_MILE_KM, STATUTE_MILE_KM};
use crate::errors::GeoError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Distance unit system applied to every distance-valued result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Units {
    /// Kilometres.
    #[default]
    Metric,
    /// Statute miles.
    Imperial,
    /// Nautical miles.
    Nautical,
}

impl Units {
    /// Converts a distance in kilometres to this unit system.
    #[inline]
    pub fn from_kilometres(self, km: f64) -> f64 {
        match self {
            Units::Metric => km,
            Units::Imperial => km / STATUTE_MILE_KM,
            Units::Nautical => km / NAUTICAL_MILE_KM,
        }
    }

    /// Converts a distance in this unit system to kilometres.
    #[inline]
    pub fn to_kilometres(self, distance: f64) -> f64 {
        match self {
            Units::Metric => distance,
            Units::Imperial => distance * STATUTE_MILE_KM,
            Units::Nautical => distance * NAUTICAL_MILE_KM,
        }
    }

    /// Customary abbreviation for display purposes.
    pub fn abbreviation(self) -> &'static str {
        match self {
            Units::Metric => "km",
            Units::Imperial => "mi",
            Units::Nautical => "nmi",
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
            Units::Nautical => "nautical",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Units {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "metric" => Ok(Units::Metric),
            "imperial" | "US customary" => Ok(Units::Imperial),
            "nautical" => Ok(Units::Nautical),
            other => Err(GeoError::invalid_option("units", other)),
        }
    }
}

/// Reference body supplying the sphere radius for geodesic math.
///
/// Everything here assumes a perfect sphere; the only per-body datum is the
/// mean radius.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Body {
    Sun,
    Mercury,
    Venus,
    #[default]
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Moon,
    Pluto,
    Ceres,
    Eris,
}

impl Body {
    /// Mean radius in kilometres.
    pub const fn radius_km(self) -> f64 {
        match self {
            Body::Sun => 696_000.0,
            Body::Mercury => 2440.0,
            Body::Venus => 6052.0,
            Body::Earth => 6372.0,
            Body::Mars => 3390.0,
            Body::Jupiter => 69_911.0,
            Body::Saturn => 58_232.0,
            Body::Uranus => 25_362.0,
            Body::Neptune => 24_622.0,
            Body::Moon => 1738.0,
            Body::Pluto => 1153.0,
            Body::Ceres => 475.0,
            Body::Eris => 1200.0,
        }
    }
}

impl FromStr for Body {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Sun" => Ok(Body::Sun),
            "Mercury" => Ok(Body::Mercury),
            "Venus" => Ok(Body::Venus),
            "Earth" => Ok(Body::Earth),
            "Mars" => Ok(Body::Mars),
            "Jupiter" => Ok(Body::Jupiter),
            "Saturn" => Ok(Body::Saturn),
            "Uranus" => Ok(Body::Uranus),
            "Neptune" => Ok(Body::Neptune),
            "Moon" => Ok(Body::Moon),
            "Pluto" => Ok(Body::Pluto),
            "Ceres" => Ok(Body::Ceres),
            "Eris" => Ok(Body::Eris),
            other => Err(GeoError::invalid_option("body", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_round_trip() {
        for units in [Units::Metric, Units::Imperial, Units::Nautical] {
            let back = units.to_kilometres(units.from_kilometres(169.0));
            assert!((back - 169.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_unit_scaling() {
        assert!((Units::Imperial.from_kilometres(STATUTE_MILE_KM) - 1.0).abs() < 1e-12);
        assert!((Units::Nautical.from_kilometres(NAUTICAL_MILE_KM) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_units_from_str() {
        assert_eq!("metric".parse::<Units>().unwrap(), Units::Metric);
        assert_eq!("US customary".parse::<Units>().unwrap(), Units::Imperial);

        let err = "baseless".parse::<Units>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown units value `baseless'");
    }

    #[test]
    fn test_body_radius() {
        assert_eq!(Body::Earth.radius_km(), 6372.0);
        assert_eq!(Body::Moon.radius_km(), 1738.0);
        assert!("Vulcan".parse::<Body>().is_err());
    }
}
