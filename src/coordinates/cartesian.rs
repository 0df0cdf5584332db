//! # Cartesian Coordinate System Module
//!
//! This module provides the 3D Cartesian vector that every other
//! representation in the crate converts through.
//!
//! ## Coordinate System Convention
//!
//! A right-handed system: `cross(UX, UY) == UZ`, `cross(UY, UZ) == UX` and
//! `cross(UZ, UX) == UY`. The Z axis is the polar axis of [`Spherical`].
//!
//! ## Value Semantics
//!
//! `Cartesian` is `Copy`. Assignment and pass-by-value always produce an
//! independent vector; two names never alias the same components. The
//! components are public and may hold any `f64`, including NaN and infinity,
//! which propagate through arithmetic like they do for plain floats.
//!
//! ## Operators
//!
//! | expression          | result                                   |
//! |---------------------|------------------------------------------|
//! | `a + b`, `a - b`    | component-wise sum / difference          |
//! | `-a`                | component-wise negation                  |
//! | `a * s`, `s * a`    | vector scaled by `s`                     |
//! | `a * b`             | dot product (`f64`)                      |
//! | `a / s`             | `Result`: scaled vector or `DivideByZero`|
//! | `a += b`, `a -= b`  | in-place sum / difference                |
//! | `a *= s`            | in-place scale                           |
//!
//! There is no in-place vector product and no ordering between vectors.
//! Host bindings that receive operands of unknown kind go through
//! [`crate::coordinates::operand`], which reports those cases as errors.
//!
//! ## Text Forms
//!
//! ```rust
//! use coords::coordinates::cartesian::Cartesian;
//!
//! let p = Cartesian::new(1.23, -4.56, 7.89);
//! assert_eq!(p.to_string(), "<Cartesian><x>1.23</x><y>-4.56</y><z>7.89</z></Cartesian>");
//! assert_eq!(p.tuple_string(), "(1.23, -4.56, 7.89)");
//! assert_eq!("(1.23, -4.56, 7.89)".parse::<Cartesian>().unwrap(), p);
//! ```

use crate::coordinates::angle::Angle;
use crate::coordinates::spherical::Spherical;
use crate::errors::{CoordsError, Result};
use approx::{AbsDiffEq, RelativeEq};
use lazy_static::lazy_static;
use nalgebra::Vector3;
use num_traits::ToPrimitive;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

/// The origin, (0, 0, 0)
pub const UO: Cartesian = Cartesian::UO;
/// Unit vector along X, (1, 0, 0)
pub const UX: Cartesian = Cartesian::UX;
/// Unit vector along Y, (0, 1, 0)
pub const UY: Cartesian = Cartesian::UY;
/// Unit vector along Z, (0, 0, 1)
pub const UZ: Cartesian = Cartesian::UZ;

/// Three-dimensional Cartesian vector
///
/// Represents a point or a direction in 3D space. The interpretation
/// depends on context: positions, directions and rotation axes all use this
/// type.
///
/// Equality is exact and component-wise. Compare with a tolerance through
/// [`Cartesian::approx_eq`] or the `approx` macros.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Cartesian {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Cartesian {
    pub const UO: Cartesian = Cartesian::new(0.0, 0.0, 0.0);
    pub const UX: Cartesian = Cartesian::new(1.0, 0.0, 0.0);
    pub const UY: Cartesian = Cartesian::new(0.0, 1.0, 0.0);
    pub const UZ: Cartesian = Cartesian::new(0.0, 0.0, 1.0);

    /// Creates a new Cartesian vector
    ///
    /// # Examples
    ///
    /// ```rust
    /// use coords::coordinates::cartesian::Cartesian;
    ///
    /// let coord = Cartesian::new(1.0, 0.0, 0.0);
    /// assert_eq!(coord.x, 1.0);
    /// assert_eq!(coord.y, 0.0);
    /// assert_eq!(coord.z, 0.0);
    /// ```
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Cartesian { x, y, z }
    }

    pub const fn origin() -> Self {
        Cartesian::UO
    }

    /// Creates (x, 0, 0)
    pub const fn from_x(x: f64) -> Self {
        Cartesian::new(x, 0.0, 0.0)
    }

    /// Creates (x, y, 0)
    pub const fn from_xy(x: f64, y: f64) -> Self {
        Cartesian::new(x, y, 0.0)
    }

    /// Creates a vector from any primitive numeric components
    ///
    /// Fails with `InvalidArgument` when a component has no `f64`
    /// representation.
    ///
    /// ```rust
    /// use coords::coordinates::cartesian::Cartesian;
    ///
    /// let p = Cartesian::try_new(1u8, -2i64, 3.5f32).unwrap();
    /// assert_eq!(p, Cartesian::new(1.0, -2.0, 3.5));
    /// ```
    pub fn try_new<X, Y, Z>(x: X, y: Y, z: Z) -> Result<Self>
    where
        X: ToPrimitive,
        Y: ToPrimitive,
        Z: ToPrimitive,
    {
        Ok(Cartesian::new(
            component("x", x.to_f64())?,
            component("y", y.to_f64())?,
            component("z", z.to_f64())?,
        ))
    }

    /// Converts spherical coordinates to Cartesian
    ///
    /// # Mathematical Conversion
    ///
    /// - `x = r * sin(theta) * cos(phi)`
    /// - `y = r * sin(theta) * sin(phi)`
    /// - `z = r * cos(theta)`
    ///
    /// A negative radius reflects the point through the origin.
    pub fn from_spherical(spherical: &Spherical) -> Self {
        let r = spherical.r;
        let sin_theta = spherical.theta.sin();
        Cartesian {
            x: r * sin_theta * spherical.phi.cos(),
            y: r * sin_theta * spherical.phi.sin(),
            z: r * spherical.theta.cos(),
        }
    }

    /// Converts to spherical coordinates
    ///
    /// The radius is the magnitude, the inclination is in [0°, 180°] and the
    /// azimuth in (-180°, 180°]. The origin maps to the zero spherical value,
    /// and points on the polar axis get an azimuth of zero.
    pub fn to_spherical(&self) -> Spherical {
        let r = self.magnitude();

        if r == 0.0 {
            return Spherical::default();
        }

        let theta = (self.z / r).clamp(-1.0, 1.0).acos();
        let phi = if self.x == 0.0 && self.y == 0.0 {
            0.0
        } else {
            self.y.atan2(self.x)
        };

        Spherical::new(r, Angle::from_radians(theta), Angle::from_radians(phi))
    }

    /// Calculates the magnitude (length) of the vector
    ///
    /// `magnitude = sqrt(x² + y² + z²)`
    ///
    /// ```rust
    /// use coords::coordinates::cartesian::Cartesian;
    ///
    /// assert_eq!(Cartesian::new(3.0, 4.0, 0.0).magnitude(), 5.0);
    /// ```
    ///
    /// Components whose squares overflow or underflow are rescaled by the
    /// largest component first, so `1e200` has magnitude `1e200`.
    pub fn magnitude(&self) -> f64 {
        let squared = self.x * self.x + self.y * self.y + self.z * self.z;
        if squared.is_normal() {
            return squared.sqrt();
        }
        let largest = self.largest_component();
        if largest == 0.0 || !largest.is_finite() {
            return squared.sqrt();
        }
        let (x, y, z) = (self.x / largest, self.y / largest, self.z / largest);
        largest * (x * x + y * y + z * z).sqrt()
    }

    fn largest_component(&self) -> f64 {
        self.x.abs().max(self.y.abs()).max(self.z.abs())
    }

    /// Returns a unit vector in the same direction
    ///
    /// Fails with `DivideByZero` when the magnitude is exactly zero.
    ///
    /// ```rust
    /// use coords::coordinates::cartesian::Cartesian;
    ///
    /// let unit = Cartesian::new(3.0, 4.0, 0.0).normalized().unwrap();
    /// assert_eq!(unit, Cartesian::new(0.6, 0.8, 0.0));
    /// assert!(Cartesian::origin().normalized().is_err());
    /// ```
    pub fn normalized(&self) -> Result<Cartesian> {
        let mag = self.magnitude();
        if mag == 0.0 {
            return Err(CoordsError::divide_by_zero());
        }
        if mag.is_infinite() && self.is_finite() {
            // Finite components near f64::MAX
            let largest = self.largest_component();
            return Cartesian::new(self.x / largest, self.y / largest, self.z / largest)
                .normalized();
        }
        Ok(Cartesian {
            x: self.x / mag,
            y: self.y / mag,
            z: self.z / mag,
        })
    }

    /// Calculates the dot product with another vector
    ///
    /// `dot = x₁*x₂ + y₁*y₂ + z₁*z₂`
    pub fn dot(&self, other: &Cartesian) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Calculates the cross product with another vector
    ///
    /// ```text
    /// cross = (y₁*z₂ - z₁*y₂, z₁*x₂ - x₁*z₂, x₁*y₂ - y₁*x₂)
    /// ```
    pub fn cross(&self, other: &Cartesian) -> Cartesian {
        Cartesian {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Angle between two vectors, in [0°, 180°]
    ///
    /// Zero when either vector has zero length.
    pub fn angle_between(&self, other: &Cartesian) -> Angle {
        let mag_product = self.magnitude() * other.magnitude();

        if mag_product == 0.0 {
            return Angle::from_radians(0.0);
        }

        let cos_angle = self.dot(other) / mag_product;

        // Handle numerical precision issues
        let radians = if cos_angle >= 1.0 {
            0.0
        } else if cos_angle <= -1.0 {
            PI
        } else {
            cos_angle.acos()
        };
        Angle::from_radians(radians)
    }

    /// Divides every component by `divisor`
    ///
    /// Fails with `DivideByZero` when `divisor` is zero.
    pub fn checked_div(&self, divisor: f64) -> Result<Cartesian> {
        if divisor == 0.0 {
            return Err(CoordsError::divide_by_zero());
        }
        Ok(Cartesian {
            x: self.x / divisor,
            y: self.y / divisor,
            z: self.z / divisor,
        })
    }

    /// In-place form of [`Cartesian::checked_div`]
    ///
    /// The vector is left unchanged when the division fails.
    pub fn try_div_assign(&mut self, divisor: f64) -> Result<()> {
        *self = self.checked_div(divisor)?;
        Ok(())
    }

    /// Compares component-wise within an absolute tolerance
    pub fn approx_eq(&self, other: &Cartesian, tolerance: f64) -> bool {
        self.abs_diff_eq(other, tolerance)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Renders the compact `(x, y, z)` form
    ///
    /// Integral components keep their `.0`, so `(1.0, 2.0, 3.0)` is not
    /// confused with the structured form's `1`.
    pub fn tuple_string(&self) -> String {
        format!("({:?}, {:?}, {:?})", self.x, self.y, self.z)
    }

    /// Converts to nalgebra Vector3 for linear algebra operations
    pub fn to_vector3(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Creates from nalgebra Vector3
    pub fn from_vector3(vec: Vector3<f64>) -> Self {
        Cartesian {
            x: vec.x,
            y: vec.y,
            z: vec.z,
        }
    }
}

/// Dot product of two vectors
pub fn dot(a: &Cartesian, b: &Cartesian) -> f64 {
    a.dot(b)
}

/// Cross product of two vectors (right-handed)
///
/// ```rust
/// use coords::coordinates::cartesian::{cross, UX, UY, UZ};
///
/// assert_eq!(cross(&UX, &UY), UZ);
/// ```
pub fn cross(a: &Cartesian, b: &Cartesian) -> Cartesian {
    a.cross(b)
}

/// Vector-by-vector multiplication: the dot product
///
/// This is what `a * b` means for two vectors.
pub fn multiply(a: &Cartesian, b: &Cartesian) -> f64 {
    a.dot(b)
}

/// Vector-by-scalar multiplication
///
/// This is what `a * s` and `s * a` mean.
pub fn scale(a: &Cartesian, s: f64) -> Cartesian {
    Cartesian {
        x: a.x * s,
        y: a.y * s,
        z: a.z * s,
    }
}

fn component(name: &str, value: Option<f64>) -> Result<f64> {
    value.ok_or_else(|| {
        CoordsError::invalid_argument(format!("{} component is not representable as f64", name))
    })
}

impl Add for Cartesian {
    type Output = Cartesian;

    fn add(self, other: Cartesian) -> Cartesian {
        Cartesian {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl AddAssign for Cartesian {
    fn add_assign(&mut self, other: Cartesian) {
        *self = *self + other;
    }
}

impl Sub for Cartesian {
    type Output = Cartesian;

    fn sub(self, other: Cartesian) -> Cartesian {
        Cartesian {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl SubAssign for Cartesian {
    fn sub_assign(&mut self, other: Cartesian) {
        *self = *self - other;
    }
}

impl Neg for Cartesian {
    type Output = Cartesian;

    fn neg(self) -> Cartesian {
        Cartesian {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl Mul<f64> for Cartesian {
    type Output = Cartesian;

    fn mul(self, scalar: f64) -> Cartesian {
        scale(&self, scalar)
    }
}

impl Mul<Cartesian> for f64 {
    type Output = Cartesian;

    fn mul(self, vector: Cartesian) -> Cartesian {
        scale(&vector, self)
    }
}

/// `a * b` between two vectors is the dot product
impl Mul for Cartesian {
    type Output = f64;

    fn mul(self, other: Cartesian) -> f64 {
        multiply(&self, &other)
    }
}

impl MulAssign<f64> for Cartesian {
    fn mul_assign(&mut self, scalar: f64) {
        *self = scale(self, scalar);
    }
}

impl Div<f64> for Cartesian {
    type Output = Result<Cartesian>;

    fn div(self, divisor: f64) -> Result<Cartesian> {
        self.checked_div(divisor)
    }
}

impl From<Vector3<f64>> for Cartesian {
    fn from(vec: Vector3<f64>) -> Self {
        Cartesian::from_vector3(vec)
    }
}

impl From<Cartesian> for Vector3<f64> {
    fn from(coord: Cartesian) -> Self {
        coord.to_vector3()
    }
}

impl From<[f64; 3]> for Cartesian {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Cartesian::new(x, y, z)
    }
}

impl AbsDiffEq for Cartesian {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl RelativeEq for Cartesian {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}

/// Renders `<Cartesian><x>V</x><y>V</y><z>V</z></Cartesian>`
///
/// Each V is the shortest decimal that reads back to the same `f64`.
impl fmt::Display for Cartesian {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Cartesian><x>{}</x><y>{}</y><z>{}</z></Cartesian>",
            self.x, self.y, self.z
        )
    }
}

lazy_static! {
    static ref TUPLE_FORM: Regex =
        Regex::new(r"^\s*\(\s*([^,()]*?)\s*,\s*([^,()]*?)\s*,\s*([^,()]*?)\s*\)\s*$")
            .expect("tuple pattern is valid");
    static ref STRUCTURED_FORM: Regex = Regex::new(
        r"^\s*<Cartesian>\s*<x>\s*([^<]*?)\s*</x>\s*<y>\s*([^<]*?)\s*</y>\s*<z>\s*([^<]*?)\s*</z>\s*</Cartesian>\s*$"
    )
    .expect("structured pattern is valid");
}

/// Parses either text form produced by this type
impl FromStr for Cartesian {
    type Err = CoordsError;

    fn from_str(s: &str) -> Result<Self> {
        let captures = TUPLE_FORM
            .captures(s)
            .or_else(|| STRUCTURED_FORM.captures(s))
            .ok_or_else(|| {
                CoordsError::invalid_argument(format!("'{}' is not a Cartesian vector", s))
            })?;

        let field = |index: usize| -> Result<f64> {
            let text = captures.get(index).map_or("", |m| m.as_str());
            text.parse::<f64>().map_err(|_| {
                CoordsError::invalid_argument(format!("'{}' is not a number", text))
            })
        };

        Ok(Cartesian::new(field(1)?, field(2)?, field(3)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_TOLERANCE;

    #[test]
    fn test_cartesian_creation() {
        let coord = Cartesian::new(1.0, 2.0, 3.0);
        assert_eq!(coord.x, 1.0);
        assert_eq!(coord.y, 2.0);
        assert_eq!(coord.z, 3.0);

        assert_eq!(Cartesian::default(), UO);
        assert_eq!(Cartesian::from_x(4.0), Cartesian::new(4.0, 0.0, 0.0));
        assert_eq!(Cartesian::from_xy(4.0, 5.0), Cartesian::new(4.0, 5.0, 0.0));
    }

    #[test]
    fn test_try_new_numeric_components() {
        let p = Cartesian::try_new(1i32, 2u64, 0.5f32).unwrap();
        assert_eq!(p, Cartesian::new(1.0, 2.0, 0.5));
    }

    #[test]
    fn test_copies_are_independent() {
        let a = Cartesian::new(1.0, 2.0, 3.0);
        let mut b = a;
        b.x = 4.0;
        assert_eq!(a.x, 1.0);
        assert_eq!(b.x, 4.0);
    }

    #[test]
    fn test_basis_constants() {
        assert_eq!(UO, Cartesian::new(0.0, 0.0, 0.0));
        assert_eq!(UX, Cartesian::new(1.0, 0.0, 0.0));
        assert_eq!(UY, Cartesian::new(0.0, 1.0, 0.0));
        assert_eq!(UZ, Cartesian::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_magnitude_calculation() {
        assert_eq!(Cartesian::new(3.0, 4.0, 0.0).magnitude(), 5.0);
        assert_eq!(UX.magnitude(), 1.0);
        assert_eq!(UO.magnitude(), 0.0);
    }

    #[test]
    fn test_normalized() {
        let normalized = Cartesian::new(3.0, 4.0, 0.0).normalized().unwrap();
        assert!((normalized.magnitude() - 1.0).abs() < 1e-15);
        assert!((normalized.x - 0.6).abs() < 1e-15);
        assert!((normalized.y - 0.8).abs() < 1e-15);
        assert_eq!(normalized.z, 0.0);

        let err = UO.normalized().unwrap_err();
        assert!(err.is_divide_by_zero());

        let tiny = Cartesian::new(1e-15, 1e-15, 1e-15).normalized().unwrap();
        assert!((tiny.magnitude() - 1.0).abs() < 1e-14);
    }

    #[test]
    fn test_magnitude_of_extreme_components() {
        assert_eq!(Cartesian::new(1e200, 0.0, 0.0).magnitude(), 1e200);
        let large = Cartesian::new(3e200, 4e200, 0.0).magnitude();
        assert!((large / 5e200 - 1.0).abs() < 1e-15);
        let small = Cartesian::new(3e-200, 0.0, 4e-200).magnitude();
        assert!((small / 5e-200 - 1.0).abs() < 1e-15);
        let huge = Cartesian::new(f64::MAX, f64::MAX, f64::MAX).magnitude();
        assert_eq!(huge, f64::INFINITY);
        assert_eq!(Cartesian::new(f64::INFINITY, 1.0, 0.0).magnitude(), f64::INFINITY);
    }

    #[test]
    fn test_normalized_extreme_components() {
        let unit = Cartesian::new(1e200, 0.0, 0.0).normalized().unwrap();
        assert_eq!(unit, UX);

        let unit = Cartesian::new(1e200, -1e200, 0.0).normalized().unwrap();
        assert!((unit.magnitude() - 1.0).abs() < 1e-15);
        assert!((unit.x - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-15);

        let unit = Cartesian::new(f64::MAX, f64::MAX, -f64::MAX).normalized().unwrap();
        assert!((unit.magnitude() - 1.0).abs() < 1e-15);
        assert!(unit.z < 0.0);

        let unit = Cartesian::new(0.0, 3e-200, 4e-200).normalized().unwrap();
        assert!((unit.y - 0.6).abs() < 1e-15);
        assert!((unit.z - 0.8).abs() < 1e-15);
    }

    #[test]
    fn test_dot_product() {
        assert_eq!(dot(&UX, &UY), 0.0);
        assert_eq!(dot(&UX, &UZ), 0.0);
        assert_eq!(dot(&UY, &UZ), 0.0);
        assert_eq!(UX.dot(&Cartesian::new(2.0, 0.0, 0.0)), 2.0);
        assert_eq!(UX.dot(&Cartesian::new(-1.0, 0.0, 0.0)), -1.0);
    }

    #[test]
    fn test_vector_times_vector_is_dot_product() {
        let product: f64 = Cartesian::new(1.0, 2.0, 3.0) * Cartesian::new(-1.0, 2.0, 3.0);
        assert_eq!(product, 12.0);
        assert_eq!(
            multiply(&Cartesian::new(1.0, 2.0, 3.0), &Cartesian::new(-1.0, 2.0, 3.0)),
            12.0
        );
    }

    #[test]
    fn test_cross_product() {
        assert_eq!(cross(&UX, &UY), UZ);
        assert_eq!(cross(&UY, &UZ), UX);
        assert_eq!(cross(&UZ, &UX), UY);

        let c = cross(&Cartesian::new(1.0, 1.0, 1.0), &Cartesian::new(0.0, 0.0, 0.5));
        assert_eq!(c, Cartesian::new(0.5, -0.5, 0.0));

        let a = Cartesian::new(1.5, -2.0, 0.25);
        let b = Cartesian::new(-3.0, 0.5, 4.0);
        assert_eq!(cross(&a, &b), -cross(&b, &a));
    }

    #[test]
    fn test_angle_between() {
        let angle_xy = UX.angle_between(&UY);
        assert!((angle_xy.to_degrees() - 90.0).abs() < 1e-12);

        let opposite = UX.angle_between(&Cartesian::new(-1.0, 0.0, 0.0));
        assert!((opposite.to_radians() - PI).abs() < 1e-15);

        let same = UX.angle_between(&Cartesian::new(2.0, 0.0, 0.0));
        assert_eq!(same.to_radians(), 0.0);

        assert_eq!(UO.angle_between(&UX).to_radians(), 0.0);
    }

    #[test]
    fn test_arithmetic_operations() {
        let a = Cartesian::new(1.0, 2.0, 3.0);
        let b = Cartesian::new(4.0, 5.0, 6.0);

        assert_eq!(a + b, Cartesian::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Cartesian::new(3.0, 3.0, 3.0));
        assert_eq!(-a, Cartesian::new(-1.0, -2.0, -3.0));
        assert_eq!(a * 2.0, Cartesian::new(2.0, 4.0, 6.0));
        assert_eq!(0.5 * Cartesian::new(1.0, 1.0, 1.0), Cartesian::new(0.5, 0.5, 0.5));
        assert_eq!((a / 2.0).unwrap(), Cartesian::new(0.5, 1.0, 1.5));
    }

    #[test]
    fn test_in_place_operations() {
        let mut a = Cartesian::new(1.0, 2.0, 3.0);
        a += Cartesian::new(1.0, 1.0, 1.0);
        assert_eq!(a, Cartesian::new(2.0, 3.0, 4.0));

        a -= Cartesian::new(2.0, 2.0, 2.0);
        assert_eq!(a, Cartesian::new(0.0, 1.0, 2.0));

        a *= 0.5;
        assert_eq!(a, Cartesian::new(0.0, 0.5, 1.0));

        a.try_div_assign(0.5).unwrap();
        assert_eq!(a, Cartesian::new(0.0, 1.0, 2.0));
    }

    #[test]
    fn test_divide_by_zero_leaves_vector_unchanged() {
        let mut a = Cartesian::new(1.0, 2.0, 3.0);
        assert!((a / 0.0).unwrap_err().is_divide_by_zero());
        assert!(a.try_div_assign(0.0).unwrap_err().is_divide_by_zero());
        assert_eq!(a, Cartesian::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_non_finite_components_propagate() {
        let a = Cartesian::new(f64::NAN, 1.0, f64::INFINITY);
        let sum = a + UX;
        assert!(sum.x.is_nan());
        assert_eq!(sum.z, f64::INFINITY);
        assert!(!a.is_finite());
        assert_ne!(a, a);
    }

    #[test]
    fn test_structured_string() {
        let a = Cartesian::new(1.23, -4.56, 7.89);
        assert_eq!(
            a.to_string(),
            "<Cartesian><x>1.23</x><y>-4.56</y><z>7.89</z></Cartesian>"
        );
        assert_eq!(
            Cartesian::new(1.0, 0.0, -2.5).to_string(),
            "<Cartesian><x>1</x><y>0</y><z>-2.5</z></Cartesian>"
        );
    }

    #[test]
    fn test_tuple_string() {
        assert_eq!(Cartesian::new(1.23, -4.56, 7.89).tuple_string(), "(1.23, -4.56, 7.89)");
        assert_eq!(Cartesian::new(1.0, 2.0, 3.0).tuple_string(), "(1.0, 2.0, 3.0)");
    }

    #[test]
    fn test_parse_both_forms() {
        let expected = Cartesian::new(1.23, -4.56, 7.89);
        assert_eq!("(1.23, -4.56, 7.89)".parse::<Cartesian>().unwrap(), expected);
        assert_eq!("  (1.23,-4.56,7.89) ".parse::<Cartesian>().unwrap(), expected);
        assert_eq!(
            "<Cartesian><x>1.23</x><y>-4.56</y><z>7.89</z></Cartesian>"
                .parse::<Cartesian>()
                .unwrap(),
            expected
        );
    }

    #[test]
    fn test_parse_rejects_text() {
        assert!("some_string".parse::<Cartesian>().unwrap_err().is_invalid_argument());
        assert!("(1, two, 3)".parse::<Cartesian>().unwrap_err().is_invalid_argument());
        assert!("(1, 2)".parse::<Cartesian>().unwrap_err().is_invalid_argument());
        assert!("<Cartesian><x>1</x><y>a</y><z>3</z></Cartesian>"
            .parse::<Cartesian>()
            .unwrap_err()
            .is_invalid_argument());
    }

    #[test]
    fn test_approx_eq() {
        let a = Cartesian::new(0.1 + 0.2, 1.0, 1.0);
        let b = Cartesian::new(0.3, 1.0, 1.0);
        assert_ne!(a, b);
        assert!(a.approx_eq(&b, DEFAULT_TOLERANCE));
        assert!(!a.approx_eq(&Cartesian::new(0.31, 1.0, 1.0), DEFAULT_TOLERANCE));
        approx::assert_relative_eq!(a, b);
    }

    #[test]
    fn test_vector3_conversions() {
        let coord = Cartesian::new(1.0, 2.0, 3.0);
        let vec = coord.to_vector3();

        assert_eq!(vec.x, 1.0);
        assert_eq!(vec.y, 2.0);
        assert_eq!(vec.z, 3.0);

        let coord_back = Cartesian::from_vector3(vec);
        assert_eq!(coord, coord_back);

        let via_into: Vector3<f64> = coord.into();
        assert_eq!(Cartesian::from(via_into), coord);
    }

    #[test]
    fn test_to_spherical_special_cases() {
        let zero = UO.to_spherical();
        assert_eq!(zero.r, 0.0);
        assert_eq!(zero.theta.to_radians(), 0.0);
        assert_eq!(zero.phi.to_radians(), 0.0);

        let pole = Cartesian::new(0.0, 0.0, 2.0).to_spherical();
        assert_eq!(pole.r, 2.0);
        assert_eq!(pole.theta.to_radians(), 0.0);
        assert_eq!(pole.phi.to_radians(), 0.0);

        let equator = UY.to_spherical();
        assert!((equator.theta.to_degrees() - 90.0).abs() < 1e-12);
        assert!((equator.phi.to_degrees() - 90.0).abs() < 1e-12);
    }
}
