/// Kilometres per nautical mile.
pub const NAUTICAL_MILE_KM: f64 = 1.852;

/// Kilometres per statute mile.
pub const STATUTE_MILE_KM: f64 = 1.609;

// Maidenhead locator cell spans in degrees. Each level subdivides the one
// above: 18 fields, 10 squares per field, 24 subsquares per square, 10
// extended squares per subsquare.

pub const LONGITUDE_FIELD: f64 = 20.0;
pub const LATITUDE_FIELD: f64 = 10.0;

pub const LONGITUDE_SQUARE: f64 = LONGITUDE_FIELD / 10.0;
pub const LATITUDE_SQUARE: f64 = LATITUDE_FIELD / 10.0;

pub const LONGITUDE_SUBSQUARE: f64 = LONGITUDE_SQUARE / 24.0;
pub const LATITUDE_SUBSQUARE: f64 = LATITUDE_SQUARE / 24.0;

pub const LONGITUDE_EXTSQUARE: f64 = LONGITUDE_SUBSQUARE / 10.0;
pub const LATITUDE_EXTSQUARE: f64 = LATITUDE_SUBSQUARE / 10.0;
