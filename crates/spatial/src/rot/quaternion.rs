//! Quaternion rotation representation (w, x, y, z).

use nalgebra::{Matrix3, Matrix4, Vector3};

use crate::error::{GeomError, Result};

use super::{AxisAngle, Euler};

/// Tolerance on `|1 - ||q|||` accepted by the matrix conversions.
pub const UNIT_NORM_EPS: f64 = 1e-3;

/// Rotation quaternion `w + xi + yj + zk`.
///
/// Invariants:
/// - Components are finite; no normalization is imposed at construction.
/// - Matrix conversions require unit norm within [`UNIT_NORM_EPS`] and
///   report a violation as [`GeomError::NotNormalized`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quaternion {
    pub w: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Quaternion {
    /// Identity rotation.
    pub const IDENTITY: Quaternion = Quaternion {
        w: 1.0,
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    #[inline]
    pub fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self { w, x, y, z }
    }

    /// Quaternion equivalent to `e` (heading → attitude → bank order).
    #[inline]
    pub fn from_euler(e: Euler) -> Self {
        e.to_quaternion()
    }

    /// Quaternion equivalent to `aa` (axis normalized internally).
    #[inline]
    pub fn from_axis_angle(aa: AxisAngle) -> Self {
        aa.to_quaternion()
    }

    #[inline]
    pub fn norm_squared(&self) -> f64 {
        self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z
    }

    #[inline]
    pub fn norm(&self) -> f64 {
        self.norm_squared().sqrt()
    }

    #[inline]
    pub fn dot(&self, other: &Quaternion) -> f64 {
        self.w * other.w + self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[inline]
    pub fn conjugate(&self) -> Quaternion {
        Quaternion::new(self.w, -self.x, -self.y, -self.z)
    }

    /// Unit quaternion with the same orientation, or `None` when the norm
    /// is zero or non-finite.
    pub fn normalize(&self) -> Option<Quaternion> {
        let n = self.norm();
        if !n.is_finite() || n <= 0.0 {
            return None;
        }
        Some(Quaternion::new(
            self.w / n,
            self.x / n,
            self.y / n,
            self.z / n,
        ))
    }

    /// Hamilton product. `self * rhs` composes rotations with `rhs`
    /// applied first.
    #[inline]
    pub fn mul(&self, rhs: &Quaternion) -> Quaternion {
        Quaternion::new(
            self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
            self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
        )
    }

    /// Rotate `v` by the sandwich product `q v q*`. Assumes unit norm; a
    /// non-unit quaternion scales the result by its squared norm.
    pub fn rotate_vector(&self, v: Vector3<f64>) -> Vector3<f64> {
        let p = Quaternion::new(0.0, v.x, v.y, v.z);
        let r = self.mul(&p).mul(&self.conjugate());
        Vector3::new(r.x, r.y, r.z)
    }

    /// Euler decomposition of `self` (gimbal-lock aware).
    #[inline]
    pub fn to_euler(&self) -> Euler {
        Euler::from_quaternion(*self)
    }

    /// Axis-angle decomposition of `self`.
    #[inline]
    pub fn to_axis_angle(&self) -> AxisAngle {
        AxisAngle::from_quaternion(*self)
    }

    /// 3x3 rotation matrix. Requires `self` to be unit norm within
    /// [`UNIT_NORM_EPS`].
    pub fn to_matrix3(&self) -> Result<Matrix3<f64>> {
        self.check_unit()?;
        Ok(self.matrix3_unchecked())
    }

    /// 4x4 affine rotation matrix (zero translation). Requires unit norm
    /// within [`UNIT_NORM_EPS`].
    pub fn to_affine4(&self) -> Result<Matrix4<f64>> {
        self.check_unit()?;
        let m = self.matrix3_unchecked();
        Ok(Matrix4::new(
            m[(0, 0)],
            m[(0, 1)],
            m[(0, 2)],
            0.0,
            m[(1, 0)],
            m[(1, 1)],
            m[(1, 2)],
            0.0,
            m[(2, 0)],
            m[(2, 1)],
            m[(2, 2)],
            0.0,
            0.0,
            0.0,
            0.0,
            1.0,
        ))
    }

    #[inline]
    fn check_unit(&self) -> Result<()> {
        let n = self.norm();
        if (n - 1.0).abs() > UNIT_NORM_EPS {
            return Err(GeomError::NotNormalized { norm: n });
        }
        Ok(())
    }

    /// Rotation matrix without the unit-norm check. Callers guarantee the
    /// quaternion was produced by a normalizing constructor.
    pub(crate) fn matrix3_unchecked(&self) -> Matrix3<f64> {
        let (w, x, y, z) = (self.w, self.x, self.y, self.z);
        Matrix3::new(
            1.0 - 2.0 * (y * y + z * z),
            2.0 * (x * y - z * w),
            2.0 * (x * z + y * w),
            2.0 * (x * y + z * w),
            1.0 - 2.0 * (x * x + z * z),
            2.0 * (y * z - x * w),
            2.0 * (x * z - y * w),
            2.0 * (y * z + x * w),
            1.0 - 2.0 * (x * x + y * y),
        )
    }
}

impl std::ops::Mul for Quaternion {
    type Output = Quaternion;
    #[inline]
    fn mul(self, rhs: Quaternion) -> Quaternion {
        Quaternion::mul(&self, &rhs)
    }
}

impl std::ops::Neg for Quaternion {
    type Output = Quaternion;
    #[inline]
    fn neg(self) -> Quaternion {
        Quaternion::new(-self.w, -self.x, -self.y, -self.z)
    }
}
