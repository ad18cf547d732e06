//! Euler-angle rotation representation (bank, heading, attitude).

use nalgebra::Matrix3;

use super::Quaternion;

/// `x*y + z*w` magnitude above which the decomposition collapses to the
/// singular (gimbal-lock) solution.
const GIMBAL_LOCK_THRESHOLD: f64 = 0.499;

/// Euler angles in radians, applied heading → attitude → bank
/// (right-hand rule).
///
/// - `heading`: rotation about the vertical (y) axis.
/// - `attitude`: rotation about the lateral (z) axis.
/// - `bank`: rotation about the longitudinal (x) axis.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Euler {
    pub bank: f64,
    pub heading: f64,
    pub attitude: f64,
}

impl Euler {
    #[inline]
    pub fn new(bank: f64, heading: f64, attitude: f64) -> Self {
        Self {
            bank,
            heading,
            attitude,
        }
    }

    /// Euler decomposition of `q`.
    ///
    /// Near the poles (`|x*y + z*w| > 0.499`) the heading/attitude pair
    /// loses a degree of freedom; the singular branch returns
    /// `heading = ±2·atan2(x, w)`, `attitude = ±pi/2`, `bank = 0`.
    pub fn from_quaternion(q: Quaternion) -> Euler {
        let test = q.x * q.y + q.z * q.w;
        if test > GIMBAL_LOCK_THRESHOLD {
            return Euler::new(0.0, 2.0 * q.x.atan2(q.w), std::f64::consts::FRAC_PI_2);
        }
        if test < -GIMBAL_LOCK_THRESHOLD {
            return Euler::new(0.0, -2.0 * q.x.atan2(q.w), -std::f64::consts::FRAC_PI_2);
        }
        let sqx = q.x * q.x;
        let sqy = q.y * q.y;
        let sqz = q.z * q.z;
        let heading = (2.0 * q.y * q.w - 2.0 * q.x * q.z).atan2(1.0 - 2.0 * sqy - 2.0 * sqz);
        let attitude = (2.0 * test).asin();
        let bank = (2.0 * q.x * q.w - 2.0 * q.y * q.z).atan2(1.0 - 2.0 * sqx - 2.0 * sqz);
        Euler::new(bank, heading, attitude)
    }

    /// Equivalent unit quaternion (half-angle trig per axis).
    pub fn to_quaternion(&self) -> Quaternion {
        let c1 = (self.heading / 2.0).cos();
        let s1 = (self.heading / 2.0).sin();
        let c2 = (self.attitude / 2.0).cos();
        let s2 = (self.attitude / 2.0).sin();
        let c3 = (self.bank / 2.0).cos();
        let s3 = (self.bank / 2.0).sin();
        Quaternion::new(
            c1 * c2 * c3 - s1 * s2 * s3,
            s1 * s2 * c3 + c1 * c2 * s3,
            s1 * c2 * c3 + c1 * s2 * s3,
            c1 * s2 * c3 - s1 * c2 * s3,
        )
    }

    /// 3x3 rotation matrix. The intermediate quaternion is unit by
    /// construction, so no normalization check is needed.
    pub fn to_matrix3(&self) -> Matrix3<f64> {
        self.to_quaternion().matrix3_unchecked()
    }
}
