//! Coordinate representations and the operations between them
//!
//! - `angle`: angles with exact degree/radian storage, plus `Latitude`
//! - `cartesian`: the 3D vector type, its operators and basis constants
//! - `spherical`: radius/inclination/azimuth, converting through Cartesian
//! - `rotator`: axis-angle rotation
//! - `operand`: runtime-typed dispatch for host bindings

pub mod angle;
pub mod cartesian;
pub mod operand;
pub mod rotator;
pub mod spherical;

pub use angle::{Angle, AngleFormat, Latitude};
pub use cartesian::{cross, dot, multiply, scale, Cartesian, UO, UX, UY, UZ};
pub use operand::{try_cross, try_dot, Axis, Comparison, Operand, Product};
pub use rotator::Rotator;
pub use spherical::Spherical;
