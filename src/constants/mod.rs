//! Constants module for angle conversion and numeric comparison

use std::f64::consts::PI;

// Angles
/// Degrees to radians conversion factor
pub const DEG2RAD: f64 = PI / 180.0;
/// Radians to degrees conversion factor
pub const RAD2DEG: f64 = 180.0 / PI;
/// Degrees in a complete circle
pub const DEG360: f64 = 360.0;
/// Arcminutes in a degree
pub const ARCMIN_PER_DEG: f64 = 60.0;
/// Arcseconds in a degree
pub const ARCSEC_PER_DEG: f64 = 3_600.0;

// Latitude limits
/// Largest latitude in degrees
pub const LATITUDE_MAX: f64 = 90.0;
/// Smallest latitude in degrees
pub const LATITUDE_MIN: f64 = -90.0;

// Comparison
/// Absolute tolerance used by approximate vector comparisons (seven decimal places)
pub const DEFAULT_TOLERANCE: f64 = 1e-7;
