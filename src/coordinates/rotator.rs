//! Axis-angle rotation of Cartesian vectors
//!
//! A [`Rotator`] is built from an axis direction and rotates vectors about
//! that axis with Rodrigues' formula:
//!
//! ```text
//! v_rot = v·cos(θ) + (â×v)·sin(θ) + â·(â·v)·(1−cos(θ))
//! ```
//!
//! where `â` is the normalized axis. Positive angles rotate counter-clockwise
//! when looking down the axis towards the origin.

use crate::coordinates::angle::Angle;
use crate::coordinates::cartesian::Cartesian;
use crate::errors::{CoordsError, Result};
use log::{debug, warn};
use nalgebra::Matrix3;

/// Rotates vectors about a fixed axis
///
/// A rotator is either configured, holding a unit axis, or unconfigured.
/// `Rotator::default()` is unconfigured, and so is a rotator built from a
/// zero-length or non-finite axis. Rotating with an unconfigured rotator
/// fails with `UnsupportedOperation`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rotator {
    axis: Option<Cartesian>,
}

impl Rotator {
    /// Creates a rotator about `axis`
    ///
    /// The axis need not be normalized.
    ///
    /// ```rust
    /// use coords::coordinates::angle::Angle;
    /// use coords::coordinates::cartesian::{UX, UZ};
    /// use coords::coordinates::rotator::Rotator;
    ///
    /// let rotator = Rotator::new(UZ);
    /// let rotated = rotator.rotate(&UX, Angle::from_degrees(90.0)).unwrap();
    /// assert!((rotated.y - 1.0).abs() < 1e-15);
    /// ```
    pub fn new(axis: Cartesian) -> Self {
        if !axis.is_finite() {
            warn!("rotation axis {} is not finite, rotator left unconfigured", axis.tuple_string());
            return Rotator::default();
        }
        match axis.normalized() {
            Ok(unit) => {
                debug!("rotator configured about {}", unit.tuple_string());
                Rotator { axis: Some(unit) }
            }
            Err(_) => {
                warn!("rotation axis has zero length, rotator left unconfigured");
                Rotator::default()
            }
        }
    }

    pub fn is_configured(&self) -> bool {
        self.axis.is_some()
    }

    /// The unit rotation axis, if configured
    pub fn axis(&self) -> Option<Cartesian> {
        self.axis
    }

    /// Rotates `vector` by `angle` about the axis
    pub fn rotate(&self, vector: &Cartesian, angle: Angle) -> Result<Cartesian> {
        let axis = self.configured_axis()?;
        let (sin, cos) = angle.to_radians().sin_cos();

        let parallel = axis * (axis.dot(vector) * (1.0 - cos));
        Ok(*vector * cos + axis.cross(vector) * sin + parallel)
    }

    /// The rotation matrix equivalent to `rotate` for `angle`
    ///
    /// `R = I + sin(θ)·K + (1 − cos(θ))·K²`, with `K` the cross-product
    /// matrix of the unit axis.
    pub fn matrix(&self, angle: Angle) -> Result<Matrix3<f64>> {
        let axis = self.configured_axis()?;
        let (sin, cos) = angle.to_radians().sin_cos();

        let k = axis.to_vector3().cross_matrix();
        Ok(Matrix3::identity() + k * sin + k * k * (1.0 - cos))
    }

    fn configured_axis(&self) -> Result<Cartesian> {
        self.axis.ok_or_else(|| {
            CoordsError::unsupported_operation("rotator has no rotation axis configured")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinates::cartesian::{UO, UX, UY, UZ};
    use approx::assert_abs_diff_eq;

    const PLACES: f64 = 1e-7;

    #[test]
    fn test_rotate_about_default_fails() {
        let rotator = Rotator::default();
        assert!(!rotator.is_configured());
        assert_eq!(rotator.axis(), None);

        let err = rotator.rotate(&UX, Angle::from_degrees(90.0)).unwrap_err();
        assert!(err.is_unsupported_operation());
        assert!(rotator.matrix(Angle::from_degrees(90.0)).unwrap_err().is_unsupported_operation());
    }

    #[test]
    fn test_degenerate_axis_is_unconfigured() {
        assert!(!Rotator::new(UO).is_configured());
        assert!(!Rotator::new(Cartesian::new(f64::NAN, 0.0, 1.0)).is_configured());
        assert!(!Rotator::new(Cartesian::new(0.0, f64::INFINITY, 0.0)).is_configured());
    }

    #[test]
    fn test_large_axis_is_configured() {
        let rotator = Rotator::new(Cartesian::new(0.0, 0.0, 1e200));
        assert_eq!(rotator.axis(), Some(UZ));

        let b = rotator.rotate(&UX, Angle::from_degrees(90.0)).unwrap();
        assert_abs_diff_eq!(b, UY, epsilon = 1e-15);

        let rotator = Rotator::new(Cartesian::new(f64::MAX, f64::MAX, 0.0));
        let axis = rotator.axis().unwrap();
        assert!((axis.magnitude() - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_rotate_about_z_45() {
        let rotator = Rotator::new(UZ);
        let b = rotator.rotate(&UX, Angle::from_degrees(45.0)).unwrap();

        assert!((b.x - 0.7071067811865476).abs() < PLACES);
        assert!((b.y - 0.7071067811865476).abs() < PLACES);
        assert!(b.z.abs() < PLACES);
    }

    #[test]
    fn test_axis_is_normalized() {
        let rotator = Rotator::new(Cartesian::new(0.0, 0.0, 5.0));
        assert_eq!(rotator.axis(), Some(UZ));

        let b = rotator.rotate(&UX, Angle::from_degrees(90.0)).unwrap();
        assert_abs_diff_eq!(b, UY, epsilon = 1e-15);
    }

    #[test]
    fn test_periodic_angles_rotate_alike() {
        let rotator = Rotator::new(Cartesian::new(1.0, 1.0, 1.0));
        let v = Cartesian::new(0.3, -2.0, 4.5);

        let a = rotator.rotate(&v, Angle::from_degrees(45.0)).unwrap();
        let b = rotator.rotate(&v, Angle::from_degrees(405.0)).unwrap();
        let c = rotator.rotate(&v, Angle::from_degrees(-315.0)).unwrap();
        assert_abs_diff_eq!(a, b, epsilon = 1e-12);
        assert_abs_diff_eq!(a, c, epsilon = 1e-12);
    }

    #[test]
    fn test_rotation_preserves_length_and_axis_component() {
        let axis = Cartesian::new(1.0, -2.0, 0.5);
        let rotator = Rotator::new(axis);
        let unit = rotator.axis().unwrap();
        let v = Cartesian::new(3.0, 1.0, -1.0);

        let rotated = rotator.rotate(&v, Angle::from_degrees(73.0)).unwrap();
        assert!((rotated.magnitude() - v.magnitude()).abs() < 1e-12);
        assert!((rotated.dot(&unit) - v.dot(&unit)).abs() < 1e-12);

        // A vector along the axis does not move
        let along = rotator.rotate(&(axis * 2.0), Angle::from_degrees(73.0)).unwrap();
        assert_abs_diff_eq!(along, axis * 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_matrix_matches_rotate() {
        let rotator = Rotator::new(Cartesian::new(-0.2, 0.7, 1.3));
        let angle = Angle::from_degrees(121.0);
        let v = Cartesian::new(2.0, -1.0, 0.25);

        let by_formula = rotator.rotate(&v, angle).unwrap();
        let by_matrix = Cartesian::from(rotator.matrix(angle).unwrap() * v.to_vector3());
        assert_abs_diff_eq!(by_formula, by_matrix, epsilon = 1e-12);
    }

    #[test]
    fn test_matrix_matches_nalgebra_rotation() {
        let axis = Cartesian::new(0.0, 3.0, 4.0);
        let rotator = Rotator::new(axis);
        let angle = Angle::from_degrees(30.0);

        let unit = nalgebra::Unit::new_normalize(axis.to_vector3());
        let expected = nalgebra::Rotation3::from_axis_angle(&unit, angle.to_radians());
        let ours = rotator.matrix(angle).unwrap();

        for (a, b) in ours.iter().zip(expected.matrix().iter()) {
            assert!((a - b).abs() < 1e-12);
        }
    }
}
