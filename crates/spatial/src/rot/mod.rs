//! Rotation algebra: three interconvertible representations.
//!
//! Purpose
//! - `Quaternion`, `Euler`, and `AxisAngle` describe the same rotation
//!   group; each offers `from_*`/`to_*` conversions to the others and to
//!   `nalgebra` rotation/affine matrices.
//! - Round-trip conversions agree within ~1e-6 for any valid rotation,
//!   away from the Euler gimbal-lock band.
//!
//! Conventions
//! - Euler order is heading → attitude → bank (right-hand rule), angles in
//!   radians.
//! - Quaternion composition `q1 * q2` applies `q2` first.
//! - Matrix conversions require unit quaternions and enforce that
//!   precondition, returning [`GeomError::NotNormalized`] otherwise.
//!
//! [`GeomError::NotNormalized`]: crate::GeomError::NotNormalized

mod axis_angle;
mod euler;
mod quaternion;
pub mod rand;

pub use axis_angle::AxisAngle;
pub use euler::Euler;
pub use quaternion::{Quaternion, UNIT_NORM_EPS};

#[cfg(test)]
mod tests;
