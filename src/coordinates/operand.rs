//! Runtime-typed operands for host-language bindings
//!
//! The typed API makes most misuse a compile error: there is no
//! `Cartesian + f64`, no `Cartesian *= Cartesian` and no `Cartesian < Cartesian`.
//! A binding layer that hands over values of unknown kind cannot rely on
//! that, so this module dispatches on the operand kind at runtime and reports
//! the same misuse as [`CoordsError`] values:
//!
//! - a wrong operand kind is `InvalidArgument`
//! - a zero divisor is `DivideByZero`
//! - ordering comparisons between vectors are `UnsupportedOperation`
//!
//! Failed in-place operations leave the target vector unchanged.

use crate::coordinates::angle::Angle;
use crate::coordinates::cartesian::Cartesian;
use crate::coordinates::spherical::Spherical;
use crate::errors::{CoordsError, Result};
use log::trace;

/// A value handed over by a host caller
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Scalar(f64),
    Vector(Cartesian),
    Spherical(Spherical),
    Angle(Angle),
    Text(String),
}

/// Result of a multiplication whose kind depends on the right-hand operand
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Product {
    /// Vector times vector: the dot product
    Scalar(f64),
    /// Vector times scalar: the scaled vector
    Vector(Cartesian),
}

/// Comparison operators a host may request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

/// Component selector for [`Cartesian::set`] and [`Cartesian::get`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Operand {
    /// Name of the operand kind, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Operand::Scalar(_) => "scalar",
            Operand::Vector(_) => "vector",
            Operand::Spherical(_) => "spherical",
            Operand::Angle(_) => "angle",
            Operand::Text(_) => "text",
        }
    }

    pub fn as_scalar(&self) -> Result<f64> {
        match self {
            Operand::Scalar(value) => Ok(*value),
            other => Err(mismatch("a scalar", other)),
        }
    }

    pub fn as_vector(&self) -> Result<Cartesian> {
        match self {
            Operand::Vector(vector) => Ok(*vector),
            other => Err(mismatch("a vector", other)),
        }
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand::Scalar(value)
    }
}

impl From<i32> for Operand {
    fn from(value: i32) -> Self {
        Operand::Scalar(f64::from(value))
    }
}

impl From<Cartesian> for Operand {
    fn from(vector: Cartesian) -> Self {
        Operand::Vector(vector)
    }
}

impl From<Spherical> for Operand {
    fn from(spherical: Spherical) -> Self {
        Operand::Spherical(spherical)
    }
}

impl From<Angle> for Operand {
    fn from(angle: Angle) -> Self {
        Operand::Angle(angle)
    }
}

impl From<&str> for Operand {
    fn from(text: &str) -> Self {
        Operand::Text(text.to_string())
    }
}

impl From<String> for Operand {
    fn from(text: String) -> Self {
        Operand::Text(text)
    }
}

fn mismatch(expected: &str, found: &Operand) -> CoordsError {
    trace!("operand dispatch rejected {:?}, expected {}", found, expected);
    CoordsError::invalid_argument(format!("expected {}, got {}", expected, found.kind()))
}

/// Dot product of two operands that must both be vectors
pub fn try_dot(a: &Operand, b: &Operand) -> Result<f64> {
    Ok(a.as_vector()?.dot(&b.as_vector()?))
}

/// Cross product of two operands that must both be vectors
pub fn try_cross(a: &Operand, b: &Operand) -> Result<Cartesian> {
    Ok(a.as_vector()?.cross(&b.as_vector()?))
}

impl Cartesian {
    /// Builds a vector from up to three host arguments
    ///
    /// No arguments give the origin; one, two or three scalars fill x, y
    /// and z in order; a single vector is copied and a single spherical
    /// point converted. Anything else fails with `InvalidArgument`.
    pub fn from_operands(args: &[Operand]) -> Result<Cartesian> {
        match args {
            [Operand::Vector(vector)] => Ok(*vector),
            [Operand::Spherical(spherical)] => Ok(spherical.to_cartesian()),
            [] => Ok(Cartesian::origin()),
            [x] => Ok(Cartesian::from_x(x.as_scalar()?)),
            [x, y] => Ok(Cartesian::from_xy(x.as_scalar()?, y.as_scalar()?)),
            [x, y, z] => Ok(Cartesian::new(
                x.as_scalar()?,
                y.as_scalar()?,
                z.as_scalar()?,
            )),
            _ => Err(CoordsError::invalid_argument(format!(
                "expected at most 3 arguments, got {}",
                args.len()
            ))),
        }
    }

    pub fn get(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Assigns one component from a host value, which must be a scalar
    pub fn set(&mut self, axis: Axis, value: &Operand) -> Result<()> {
        let value = value.as_scalar()?;
        match axis {
            Axis::X => self.x = value,
            Axis::Y => self.y = value,
            Axis::Z => self.z = value,
        }
        Ok(())
    }

    /// `self + rhs`; `rhs` must be a vector
    pub fn try_add(&self, rhs: &Operand) -> Result<Cartesian> {
        Ok(*self + rhs.as_vector()?)
    }

    /// `self - rhs`; `rhs` must be a vector
    pub fn try_sub(&self, rhs: &Operand) -> Result<Cartesian> {
        Ok(*self - rhs.as_vector()?)
    }

    /// `self * rhs`: dot product for a vector, scaling for a scalar
    pub fn try_mul(&self, rhs: &Operand) -> Result<Product> {
        match rhs {
            Operand::Vector(vector) => Ok(Product::Scalar(*self * *vector)),
            Operand::Scalar(scalar) => Ok(Product::Vector(*self * *scalar)),
            other => Err(mismatch("a vector or a scalar", other)),
        }
    }

    /// `self / rhs`; `rhs` must be a non-zero scalar
    pub fn try_div(&self, rhs: &Operand) -> Result<Cartesian> {
        self.checked_div(rhs.as_scalar()?)
    }

    pub fn try_add_assign(&mut self, rhs: &Operand) -> Result<()> {
        *self = self.try_add(rhs)?;
        Ok(())
    }

    pub fn try_sub_assign(&mut self, rhs: &Operand) -> Result<()> {
        *self = self.try_sub(rhs)?;
        Ok(())
    }

    /// `self *= rhs`; only a scalar is accepted
    ///
    /// A vector operand is rejected: the dot product would turn this vector
    /// into a scalar.
    pub fn try_mul_assign(&mut self, rhs: &Operand) -> Result<()> {
        *self *= rhs.as_scalar()?;
        Ok(())
    }

    /// `self /= rhs`; `rhs` must be a non-zero scalar
    pub fn try_div_assign_operand(&mut self, rhs: &Operand) -> Result<()> {
        self.try_div_assign(rhs.as_scalar()?)
    }

    /// Evaluates `self <op> other`
    ///
    /// Only `Eq` and `Ne` are defined; vectors have no ordering, so the other
    /// comparisons fail with `UnsupportedOperation`.
    pub fn compare(&self, op: Comparison, other: &Cartesian) -> Result<bool> {
        match op {
            Comparison::Eq => Ok(self == other),
            Comparison::Ne => Ok(self != other),
            Comparison::Lt | Comparison::Le | Comparison::Gt | Comparison::Ge => {
                Err(CoordsError::unsupported_operation(format!(
                    "{:?} comparison between Cartesian vectors",
                    op
                )))
            }
        }
    }
}
