//! # Angle Representation Module
//!
//! This module provides angle representation that preserves the original
//! precision and unit (degrees vs radians) of angular measurements.
//!
//! ## Internal Storage
//!
//! The `Angle` struct uses an enum-based storage system:
//! - Values provided in degrees are stored exactly as degrees
//! - Values provided in radians are stored exactly as radians
//! - Conversion only occurs when explicitly requested via `to_degrees()` or `to_radians()`
//!
//! An angle of 405 degrees therefore reads back as exactly 405 degrees and
//! renders as `405:00:00`, without a detour through radians.
//!
//! ## Normalization
//!
//! Angles are unconstrained. Nothing in this crate normalizes an angle
//! implicitly: rotation and spherical conversion go through sine and cosine,
//! which are periodic, so 45° and 405° rotate a vector identically. Call
//! `normalized()` for the [0°, 360°) form or `normalized_from()` for any other
//! full-turn window.
//!
//! ## Examples
//!
//! ```rust
//! use coords::coordinates::angle::Angle;
//!
//! // Stored exactly as 45.0 degrees
//! let angle_deg = Angle::from_degrees(45.0);
//! assert_eq!(angle_deg.to_degrees(), 45.0);
//!
//! // Sexagesimal construction
//! let angle = Angle::from_dms(44.0, 32.0, 15.4);
//! assert_eq!(angle.to_string(), "44:32:15.4");
//! ```

use crate::constants::{
    ARCMIN_PER_DEG, ARCSEC_PER_DEG, DEG2RAD, DEG360, LATITUDE_MAX, LATITUDE_MIN, RAD2DEG,
};
use crate::errors::{CoordsError, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::f64::consts::TAU;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

/// Internal representation format for angle values
///
/// This enum allows the `Angle` struct to maintain the exact numerical
/// value in its original unit, preventing precision loss from unnecessary
/// conversions during construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AngleFormat {
    /// Angle stored in degrees
    Degrees(f64),
    /// Angle stored in radians
    Radians(f64),
}

/// An angular measurement with exact precision preservation
///
/// Equality and ordering compare the measured angle: two angles stored in the
/// same unit compare their stored values exactly, angles stored in different
/// units are compared in radians.
///
/// `Angle` is immutable. Arithmetic returns new values.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Angle {
    /// Internal storage maintaining original unit and value
    angle: AngleFormat,
}

impl Angle {
    /// Converts degrees to radians
    ///
    /// ```rust
    /// use coords::coordinates::angle::Angle;
    ///
    /// assert_eq!(Angle::deg2rad(45.0), 0.78539816339744828);
    /// ```
    pub fn deg2rad(degrees: f64) -> f64 {
        degrees * DEG2RAD
    }

    /// Converts radians to degrees
    pub fn rad2deg(radians: f64) -> f64 {
        radians * RAD2DEG
    }

    /// Creates an angle from a value in degrees
    ///
    /// The value is stored exactly as provided, maintaining full precision.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use coords::coordinates::angle::Angle;
    ///
    /// let right_angle = Angle::from_degrees(90.0);
    /// assert_eq!(right_angle.to_degrees(), 90.0);
    /// ```
    pub fn from_degrees(degrees: f64) -> Self {
        Angle {
            angle: AngleFormat::Degrees(degrees),
        }
    }

    /// Creates an angle from a value in radians
    ///
    /// The value is stored exactly as provided, maintaining full precision.
    pub fn from_radians(radians: f64) -> Self {
        Angle {
            angle: AngleFormat::Radians(radians),
        }
    }

    /// Creates an angle from degrees, arcminutes and arcseconds
    ///
    /// The sign of the angle is the sign of the first non-zero field and the
    /// magnitudes of all three fields are summed, so `(-1, 2, 3)` and
    /// `(-1, -2, -3)` are the same angle, while `(0, -30, 0)` is minus half a
    /// degree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use coords::coordinates::angle::Angle;
    ///
    /// assert_eq!(Angle::from_dms(0.0, -60.0, 0.0).to_degrees(), -1.0);
    /// assert_eq!(Angle::from_dms(-1.0, 30.0, 0.0).to_degrees(), -1.5);
    /// ```
    pub fn from_dms(degrees: f64, minutes: f64, seconds: f64) -> Self {
        let negative = [degrees, minutes, seconds]
            .iter()
            .find(|v| **v != 0.0)
            .map_or(false, |v| v.is_sign_negative());

        let magnitude =
            degrees.abs() + minutes.abs() / ARCMIN_PER_DEG + seconds.abs() / ARCSEC_PER_DEG;

        Angle::from_degrees(if negative { -magnitude } else { magnitude })
    }

    /// Creates an angle from sexagesimal text fields
    ///
    /// Each field must parse as a decimal number, otherwise the construction
    /// fails with `InvalidArgument`.
    pub fn from_dms_str(degrees: &str, minutes: &str, seconds: &str) -> Result<Self> {
        Ok(Angle::from_dms(
            parse_field(degrees)?,
            parse_field(minutes)?,
            parse_field(seconds)?,
        ))
    }

    /// Returns the angle value in degrees
    ///
    /// If the angle was stored in degrees, returns the exact original value.
    pub fn to_degrees(&self) -> f64 {
        match self.angle {
            AngleFormat::Degrees(deg) => deg,
            AngleFormat::Radians(rad) => Angle::rad2deg(rad),
        }
    }

    /// Returns the angle value in radians
    ///
    /// If the angle was stored in radians, returns the exact original value.
    pub fn to_radians(&self) -> f64 {
        match self.angle {
            AngleFormat::Degrees(deg) => Angle::deg2rad(deg),
            AngleFormat::Radians(rad) => rad,
        }
    }

    /// Returns the internal format of this angle
    pub fn format(&self) -> AngleFormat {
        self.angle
    }

    pub fn sin(&self) -> f64 {
        self.to_radians().sin()
    }

    pub fn cos(&self) -> f64 {
        self.to_radians().cos()
    }

    /// Returns the equivalent angle in [0°, 360°)
    ///
    /// The unit of storage is kept: degrees wrap at 360, radians at 2π.
    ///
    /// ```rust
    /// use coords::coordinates::angle::Angle;
    ///
    /// assert_eq!(Angle::from_degrees(405.0).normalized().to_degrees(), 45.0);
    /// assert_eq!(Angle::from_degrees(-45.0).normalized().to_degrees(), 315.0);
    /// ```
    pub fn normalized(&self) -> Angle {
        match self.angle {
            AngleFormat::Degrees(deg) => Angle::from_degrees(wrap(deg, DEG360)),
            AngleFormat::Radians(rad) => Angle::from_radians(wrap(rad, TAU)),
        }
    }

    /// Returns the equivalent angle in [lower, lower + 360°), in degrees
    ///
    /// `normalized_from(-180.0)` gives the signed form used for longitudes.
    pub fn normalized_from(&self, lower_degrees: f64) -> Angle {
        let offset = wrap(self.to_degrees() - lower_degrees, DEG360);
        Angle::from_degrees(lower_degrees + offset)
    }

    /// Returns 90° minus this angle
    pub fn complement(&self) -> Angle {
        Angle::from_degrees(90.0 - self.to_degrees())
    }

    /// Divides the angle by a scalar
    ///
    /// Fails with `DivideByZero` when `divisor` is zero.
    pub fn checked_div(&self, divisor: f64) -> Result<Angle> {
        if divisor == 0.0 {
            return Err(CoordsError::divide_by_zero());
        }
        Ok(match self.angle {
            AngleFormat::Degrees(deg) => Angle::from_degrees(deg / divisor),
            AngleFormat::Radians(rad) => Angle::from_radians(rad / divisor),
        })
    }

    /// Renders the angle as `D* M' S"`
    ///
    /// ```rust
    /// use coords::coordinates::angle::Angle;
    ///
    /// let angle = Angle::from_dms(12.0, 34.0, 56.0);
    /// assert_eq!(angle.to_dms_string(), "12* 34' 56\"");
    /// ```
    pub fn to_dms_string(&self) -> String {
        let degrees = self.to_degrees();
        if !degrees.is_finite() {
            return degrees.to_string();
        }
        let parts = Sexagesimal::from_degrees(degrees);
        format!(
            "{}{}* {}' {}\"",
            parts.sign(),
            parts.degrees,
            parts.minutes,
            format_seconds(parts.seconds)
        )
    }
}

impl Default for Angle {
    fn default() -> Self {
        Angle::from_degrees(0.0)
    }
}

impl PartialEq for Angle {
    fn eq(&self, other: &Self) -> bool {
        match (self.angle, other.angle) {
            (AngleFormat::Degrees(a), AngleFormat::Degrees(b)) => a == b,
            (AngleFormat::Radians(a), AngleFormat::Radians(b)) => a == b,
            _ => self.to_radians() == other.to_radians(),
        }
    }
}

impl PartialOrd for Angle {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.angle, other.angle) {
            (AngleFormat::Degrees(a), AngleFormat::Degrees(b)) => a.partial_cmp(&b),
            (AngleFormat::Radians(a), AngleFormat::Radians(b)) => a.partial_cmp(&b),
            _ => self.to_radians().partial_cmp(&other.to_radians()),
        }
    }
}

impl Add for Angle {
    type Output = Angle;

    fn add(self, other: Angle) -> Angle {
        match (self.angle, other.angle) {
            (AngleFormat::Degrees(a), AngleFormat::Degrees(b)) => Angle::from_degrees(a + b),
            _ => Angle::from_radians(self.to_radians() + other.to_radians()),
        }
    }
}

impl Sub for Angle {
    type Output = Angle;

    fn sub(self, other: Angle) -> Angle {
        match (self.angle, other.angle) {
            (AngleFormat::Degrees(a), AngleFormat::Degrees(b)) => Angle::from_degrees(a - b),
            _ => Angle::from_radians(self.to_radians() - other.to_radians()),
        }
    }
}

impl Neg for Angle {
    type Output = Angle;

    fn neg(self) -> Angle {
        match self.angle {
            AngleFormat::Degrees(deg) => Angle::from_degrees(-deg),
            AngleFormat::Radians(rad) => Angle::from_radians(-rad),
        }
    }
}

impl Mul<f64> for Angle {
    type Output = Angle;

    fn mul(self, scalar: f64) -> Angle {
        match self.angle {
            AngleFormat::Degrees(deg) => Angle::from_degrees(deg * scalar),
            AngleFormat::Radians(rad) => Angle::from_radians(rad * scalar),
        }
    }
}

impl Mul<Angle> for f64 {
    type Output = Angle;

    fn mul(self, angle: Angle) -> Angle {
        angle * self
    }
}

impl Div<f64> for Angle {
    type Output = Result<Angle>;

    fn div(self, divisor: f64) -> Result<Angle> {
        self.checked_div(divisor)
    }
}

impl FromStr for Angle {
    type Err = CoordsError;

    /// Parses a decimal degree value such as `"-45"` or `"12.5"`
    fn from_str(s: &str) -> Result<Self> {
        Ok(Angle::from_degrees(parse_field(s)?))
    }
}

/// Renders `D:MM:SS`, e.g. `44:32:15.4` or `-45:00:00`
///
/// Non-finite angles render as `NaN`, `inf` or `-inf`.
impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let degrees = self.to_degrees();
        if !degrees.is_finite() {
            return write!(f, "{}", degrees);
        }
        let parts = Sexagesimal::from_degrees(degrees);
        write!(
            f,
            "{}{:02}:{:02}:{:0>2}",
            parts.sign(),
            parts.degrees,
            parts.minutes,
            format_seconds(parts.seconds)
        )
    }
}

/// A latitude-like angle restricted to [-90°, +90°]
///
/// Used as the polar input of a spherical coordinate measured from the
/// equator rather than from the pole.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Latitude {
    angle: Angle,
}

impl Latitude {
    /// Creates a latitude from degrees
    ///
    /// Fails with `InvalidArgument` outside [-90, 90].
    pub fn new(degrees: f64) -> Result<Self> {
        Latitude::from_angle(Angle::from_degrees(degrees))
    }

    pub fn from_dms(degrees: f64, minutes: f64, seconds: f64) -> Result<Self> {
        Latitude::from_angle(Angle::from_dms(degrees, minutes, seconds))
    }

    pub fn from_angle(angle: Angle) -> Result<Self> {
        let degrees = angle.to_degrees();
        if degrees > LATITUDE_MAX {
            return Err(CoordsError::invalid_argument("maximum exceeded"));
        }
        if degrees < LATITUDE_MIN {
            return Err(CoordsError::invalid_argument("minimum exceeded"));
        }
        if degrees.is_nan() {
            return Err(CoordsError::invalid_argument("latitude is not a number"));
        }
        Ok(Latitude { angle })
    }

    pub fn angle(&self) -> Angle {
        self.angle
    }

    /// Angle from the pole, i.e. 90° minus the latitude
    pub fn colatitude(&self) -> Angle {
        self.angle.complement()
    }
}

impl From<Latitude> for Angle {
    fn from(latitude: Latitude) -> Angle {
        latitude.angle
    }
}

/// Sums of latitudes are plain angles; they may leave the latitude range.
impl Add for Latitude {
    type Output = Angle;

    fn add(self, other: Latitude) -> Angle {
        self.angle + other.angle
    }
}

impl fmt::Display for Latitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.angle.fmt(f)
    }
}

fn parse_field(text: &str) -> Result<f64> {
    text.trim().parse::<f64>().map_err(|_| {
        CoordsError::invalid_argument(format!("'{}' is not a number", text))
    })
}

/// Wraps `value` into [0, period)
fn wrap(value: f64, period: f64) -> f64 {
    let wrapped = value.rem_euclid(period);
    // rem_euclid rounds up to `period` for tiny negative inputs
    if wrapped >= period {
        0.0
    } else {
        wrapped
    }
}

/// Significant digits printed for the seconds field
const SECONDS_PRECISION: i32 = 6;

/// Finite degrees split into whole degrees, whole minutes and seconds
struct Sexagesimal {
    negative: bool,
    degrees: f64,
    minutes: u64,
    seconds: f64,
}

impl Sexagesimal {
    fn from_degrees(value: f64) -> Self {
        let magnitude = value.abs();
        let whole_degrees = magnitude.floor();
        let minutes = ARCMIN_PER_DEG * (magnitude - whole_degrees);
        let whole_minutes = minutes.floor();
        let seconds = round_significant(ARCMIN_PER_DEG * (minutes - whole_minutes));

        let mut parts = Sexagesimal {
            negative: value < 0.0,
            degrees: whole_degrees,
            minutes: whole_minutes as u64,
            seconds,
        };

        // 59.9999999 seconds rounds up into the next minute
        if parts.seconds >= ARCMIN_PER_DEG {
            parts.seconds = 0.0;
            parts.minutes += 1;
        }
        if parts.minutes >= 60 {
            parts.minutes = 0;
            parts.degrees += 1.0;
        }
        parts
    }

    fn sign(&self) -> &'static str {
        if self.negative {
            "-"
        } else {
            ""
        }
    }
}

fn decimals_for(seconds: f64) -> usize {
    let integer_digits = if seconds >= 10.0 { 2 } else { 1 };
    (SECONDS_PRECISION - integer_digits) as usize
}

fn round_significant(seconds: f64) -> f64 {
    let factor = 10f64.powi(decimals_for(seconds) as i32);
    (seconds * factor).round() / factor
}

fn format_seconds(seconds: f64) -> String {
    let text = format!("{:.*}", decimals_for(seconds), seconds);
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    }
}
