//! Spherical geodesy for geographic points.
//!
//! `sphere-coords` models locations on the surface of a sphere and the
//! calculations location-aware tools keep reimplementing: great-circle
//! distances and bearings, Maidenhead grid locators, ISO 6709 coordinate
//! strings, sexagesimal formatting, and sunrise/sunset/twilight times.
//! Everything is pure Rust with no runtime FFI.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`point`] | The [`Point`] value type, construction, display, geodesic math |
//! | [`collections`] | [`Points`], [`TimedPoints`] and [`KeyedPoints`] containers |
//! | [`locator`] | Maidenhead grid locator encoding and decoding |
//! | [`iso6709`] | ISO 6709 coordinate string parsing and formatting |
//! | [`solar`] | USNO almanac sunrise/sunset/twilight calculations |
//! | [`angle`] | Sexagesimal conversions, compass rose, meridian arcs |
//! | [`units`] | Distance [`Units`] and reference [`Body`] radii |
//! | [`constants`] | Unit conversion factors and locator cell spans |
//! | [`errors`] | [`GeoError`] and [`GeoResult`] |
//!
//! # Quick Start
//!
//! ```
//! use sphere_coords::{Point, Precision};
//!
//! let home = Point::new(52.015, -0.221)?;
//! let telford = Point::new(52.6333, -2.5)?;
//!
//! assert_eq!(home.distance(&telford) as i64, 169);
//! assert_eq!(home.bearing_name(&telford), "West-north-west");
//! assert_eq!(home.to_grid_locator(Precision::Subsquare), "IO92va");
//! # Ok::<(), sphere_coords::GeoError>(())
//! ```
//!
//! # Re-exports
//!
//! Common types are re-exported at the crate root for convenience:
//!
//! ```
//! use sphere_coords::{Point, Points, KeyedPoints, GeoError, GeoResult};
//! use sphere_coords::{Units, Body, Precision, Zenith, DistanceMethod};
//! ```
//!
//! # Design Notes
//!
//! - **Spherical model**: distances use a mean radius (6372 km for Earth),
//!   so results can differ from ellipsoidal (WGS84) calculations by up to
//!   roughly 0.5%. Pick the body with [`Point::with_body`].
//! - **Per-point configuration**: unit system, timezone offset and body
//!   travel with each [`Point`], and derived points inherit them, so a
//!   whole track computed from one configured point stays consistent.
//! - **Optional serde**: the `serde` feature derives `Serialize` and
//!   `Deserialize` for the value types.

pub mod angle;
pub mod collections;
pub mod constants;
pub mod errors;
pub mod iso6709;
pub mod locator;
pub mod point;
pub mod solar;
pub mod units;

pub use collections::{KeyedPoints, Points, TimedPoint, TimedPoints};
pub use errors::{GeoError, GeoResult};
pub use iso6709::Iso6709Style;
pub use locator::Precision;
pub use point::{DisplayStyle, DistanceMethod, Point};
pub use solar::{Event, Zenith};
pub use units::{Body, Units};
