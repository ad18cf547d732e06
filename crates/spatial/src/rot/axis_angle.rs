//! Axis-angle rotation representation.

use nalgebra::Vector3;

use crate::error::{GeomError, Result};

use super::Quaternion;

/// Squared vector norm below which a quaternion is treated as the
/// identity rotation (no extractable axis).
const IDENTITY_NORM_EPS: f64 = 1e-12;

/// Rotation of `angle` radians about `axis` (right-hand rule).
///
/// Invariants:
/// - `axis` has non-zero finite length; it need not be unit length and is
///   normalized on conversion.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisAngle {
    pub axis: Vector3<f64>,
    pub angle: f64,
}

impl AxisAngle {
    /// Fails with [`GeomError::ZeroAxis`] when `axis` has zero or
    /// non-finite length.
    pub fn new(axis: Vector3<f64>, angle: f64) -> Result<Self> {
        let n = axis.norm();
        if !n.is_finite() || n <= 0.0 {
            return Err(GeomError::ZeroAxis);
        }
        Ok(Self { axis, angle })
    }

    /// Axis-angle decomposition of `q`.
    ///
    /// A (numerically) pure identity rotation has no well-defined axis;
    /// that case returns angle `2·acos(w)` about the default axis
    /// `(1, 0, 0)`.
    pub fn from_quaternion(q: Quaternion) -> AxisAngle {
        let angle = 2.0 * q.w.clamp(-1.0, 1.0).acos();
        let norm_sq = q.x * q.x + q.y * q.y + q.z * q.z;
        if norm_sq < IDENTITY_NORM_EPS {
            return AxisAngle {
                axis: Vector3::new(1.0, 0.0, 0.0),
                angle,
            };
        }
        let n = norm_sq.sqrt();
        AxisAngle {
            axis: Vector3::new(q.x / n, q.y / n, q.z / n),
            angle,
        }
    }

    /// Equivalent unit quaternion (`angle/2` half-angle construction; the
    /// axis is normalized here).
    pub fn to_quaternion(&self) -> Quaternion {
        let axis = self.axis / self.axis.norm();
        let half = self.angle / 2.0;
        let s = half.sin();
        Quaternion::new(half.cos(), axis.x * s, axis.y * s, axis.z * s)
    }
}
