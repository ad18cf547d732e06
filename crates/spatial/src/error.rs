//! Error taxonomy for constructions and solvers.
//!
//! Policy
//! - Invalid construction fails fast with a typed error, never a deferred
//!   panic or a silently-clamped value.
//! - Degenerate geometry (parallel ray, zero-area triangle, coincident
//!   geodesic endpoints) is not an error; those paths return `Option::None`
//!   or a documented degenerate value instead.
//! - Nothing here is transient: every failure is fully determined by the
//!   input values, so no operation retries.

use thiserror::Error;

/// Crate-wide error type.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum GeomError {
    /// Geodetic latitude outside [-pi/2, pi/2] radians.
    #[error("latitude {0} rad outside [-pi/2, pi/2]")]
    Latitude(f64),

    /// Geodetic longitude outside [-pi, pi] radians.
    #[error("longitude {0} rad outside [-pi, pi]")]
    Longitude(f64),

    /// Sphere constructed with a negative radius.
    #[error("negative radius {0}")]
    NegativeRadius(f64),

    /// Spheroid constructed with a negative semi-axis.
    #[error("negative semi-axis {0}")]
    NegativeSemiAxis(f64),

    /// Axis-angle axis with zero (or non-finite) length.
    #[error("rotation axis has zero length")]
    ZeroAxis,

    /// Quaternion passed to a matrix conversion without unit norm.
    #[error("quaternion norm {norm} not within tolerance of 1")]
    NotNormalized { norm: f64 },

    /// Iterative geodesic solver exhausted its iteration budget.
    #[error("geodesic solver did not converge within {iterations} iterations")]
    NoConvergence { iterations: u32 },
}

pub type Result<T> = std::result::Result<T, GeomError>;
