//! Spherical coordinates: radius, inclination and azimuth
//!
//! `theta` is the inclination measured from the +Z polar axis and `phi` the
//! azimuth measured around it from +X. Conversion to and from [`Cartesian`]
//! uses the standard trigonometric formulas; arithmetic is done by converting
//! to Cartesian and back.

use crate::coordinates::angle::{Angle, Latitude};
use crate::coordinates::cartesian::Cartesian;
use crate::coordinates::operand::Operand;
use crate::errors::{CoordsError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

/// A point in spherical coordinates
///
/// The radius may be negative, which reflects the point through the origin
/// when it is converted to Cartesian.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Spherical {
    /// Distance from the origin
    pub r: f64,
    /// Inclination from the polar (+Z) axis
    pub theta: Angle,
    /// Azimuth around the polar axis, from +X
    pub phi: Angle,
}

impl Spherical {
    pub fn new(r: f64, theta: Angle, phi: Angle) -> Self {
        Spherical { r, theta, phi }
    }

    /// A point on the polar axis at distance `r`
    pub fn from_r(r: f64) -> Self {
        Spherical::new(r, Angle::default(), Angle::default())
    }

    pub fn from_r_theta(r: f64, theta: Angle) -> Self {
        Spherical::new(r, theta, Angle::default())
    }

    /// Creates a point from a latitude measured from the equatorial plane
    ///
    /// The inclination is the latitude's complement.
    ///
    /// ```rust
    /// use coords::coordinates::angle::{Angle, Latitude};
    /// use coords::coordinates::spherical::Spherical;
    ///
    /// let north_pole = Spherical::from_latitude(1.0, Latitude::new(90.0).unwrap(), Angle::default());
    /// assert_eq!(north_pole.theta.to_degrees(), 0.0);
    /// ```
    pub fn from_latitude(r: f64, latitude: Latitude, phi: Angle) -> Self {
        Spherical::new(r, latitude.colatitude(), phi)
    }

    /// Converts a runtime-typed operand
    ///
    /// A spherical operand is copied and a vector converted; any other
    /// operand fails with `InvalidArgument`.
    pub fn from_operand(operand: &Operand) -> Result<Self> {
        match operand {
            Operand::Spherical(spherical) => Ok(*spherical),
            Operand::Vector(vector) => Ok(vector.to_spherical()),
            other => Err(CoordsError::invalid_argument(format!(
                "cannot convert {} to Spherical",
                other.kind()
            ))),
        }
    }

    /// The origin
    pub fn zero() -> Self {
        Spherical::default()
    }

    pub fn to_cartesian(&self) -> Cartesian {
        Cartesian::from_spherical(self)
    }

    /// Divides the Cartesian form by a scalar and converts back
    ///
    /// The result always has a non-negative radius, so a negative divisor or
    /// radius shows up as changed angles. Fails with `DivideByZero` when
    /// `divisor` is zero.
    pub fn checked_div(&self, divisor: f64) -> Result<Spherical> {
        Ok(self.to_cartesian().checked_div(divisor)?.to_spherical())
    }
}

impl From<Spherical> for Cartesian {
    fn from(spherical: Spherical) -> Self {
        Cartesian::from_spherical(&spherical)
    }
}

impl From<&Spherical> for Cartesian {
    fn from(spherical: &Spherical) -> Self {
        Cartesian::from_spherical(spherical)
    }
}

impl From<Cartesian> for Spherical {
    fn from(cartesian: Cartesian) -> Self {
        cartesian.to_spherical()
    }
}

impl From<&Cartesian> for Spherical {
    fn from(cartesian: &Cartesian) -> Self {
        cartesian.to_spherical()
    }
}

impl Add for Spherical {
    type Output = Spherical;

    fn add(self, other: Spherical) -> Spherical {
        (self.to_cartesian() + other.to_cartesian()).to_spherical()
    }
}

impl Sub for Spherical {
    type Output = Spherical;

    fn sub(self, other: Spherical) -> Spherical {
        (self.to_cartesian() - other.to_cartesian()).to_spherical()
    }
}

impl Mul<f64> for Spherical {
    type Output = Spherical;

    fn mul(self, scalar: f64) -> Spherical {
        (self.to_cartesian() * scalar).to_spherical()
    }
}

impl Mul<Spherical> for f64 {
    type Output = Spherical;

    fn mul(self, spherical: Spherical) -> Spherical {
        spherical * self
    }
}

impl Div<f64> for Spherical {
    type Output = Result<Spherical>;

    fn div(self, divisor: f64) -> Result<Spherical> {
        self.checked_div(divisor)
    }
}

/// Renders `<Spherical><r>R</r><theta>T</theta><phi>P</phi></Spherical>`
///
/// Angles are written in decimal degrees.
impl fmt::Display for Spherical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Spherical><r>{}</r><theta>{}</theta><phi>{}</phi></Spherical>",
            self.r,
            self.theta.to_degrees(),
            self.phi.to_degrees()
        )
    }
}
