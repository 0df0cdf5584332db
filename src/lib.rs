//! Coords: Cartesian and spherical coordinates, angles and axis-angle rotation
//!
//! This crate provides a small 3D vector algebra engine: a [`Cartesian`]
//! value type with the usual vector operators, a [`Spherical`]
//! representation convertible to and from it, an [`Angle`] type with exact
//! degree/radian storage, and a [`Rotator`] that rotates vectors about a fixed
//! axis.
//!
//! ```rust
//! use coords::{cross, Angle, Cartesian, Rotator, Spherical, UX, UY, UZ};
//!
//! assert_eq!(cross(&UX, &UY), UZ);
//!
//! let p = Cartesian::from(Spherical::new(1.0, Angle::from_degrees(45.0), Angle::from_degrees(45.0)));
//! assert!((p.x - 0.5).abs() < 1e-7);
//!
//! let rotated = Rotator::new(UZ).rotate(&UX, Angle::from_degrees(45.0)).unwrap();
//! assert!((rotated.y - 0.7071067811865476).abs() < 1e-7);
//! ```

pub mod constants;
pub mod coordinates;
pub mod errors;

// Re-export commonly used types
pub use coordinates::{
    cross, dot, multiply, scale, Angle, AngleFormat, Axis, Cartesian, Comparison, Latitude,
    Operand, Product, Rotator, Spherical, UO, UX, UY, UZ,
};
pub use errors::{CoordsError, Result};
