//! Computational geometry and geodesy core.
//!
//! Purpose
//! - Immutable 2D/3D geometric value types, rotation representations, and
//!   WGS84 geodetic coordinates, plus the containment, distance,
//!   intersection, clipping, and culling queries that operate on them.
//! - Every operation is a pure function over immutable inputs; absence of a
//!   result (no intersection, parallel, degenerate) is `None`, never a NaN
//!   or sentinel value.
//!
//! API Policy
//! - `nalgebra` is the linear-algebra substrate; vectors and matrices in
//!   signatures are `nalgebra` types over `f64`.
//! - Invalid construction (out-of-range latitude, negative radius, null
//!   axis) and non-convergence of the geodesic solver are typed errors
//!   ([`GeomError`]); degenerate geometry is `Option::None`.

pub mod curve;
pub mod error;
pub mod geodesy;
pub mod geom2;
pub mod geom3;
pub mod rot;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{GeomError, Result};

// Convenience aliases so call sites read like the 2D/3D math they implement.
pub use nalgebra::{Matrix3 as Mat3, Matrix4 as Mat4, Vector2 as Vec2, Vector3 as Vec3};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::curve::{CubicBezier2, QuadBezier2};
    pub use crate::error::{GeomError, Result};
    pub use crate::geodesy::{
        haversine, vincenty, Ecef, Enu, Geodesic, Geodetic, GeodeticBounds,
    };
    pub use crate::geom2::{Line2, Polygon2, Rect2, Segment2, Triangle2};
    pub use crate::geom3::{
        Aabb, Containment, Cuboid3, Frustum3, Line3, Plane3, Ray3, RayHit, Rect3, Segment3,
        Sphere3, Spheroid3, Triangle3,
    };
    pub use crate::rot::{AxisAngle, Euler, Quaternion};
    pub use nalgebra::{Matrix3 as Mat3, Matrix4 as Mat4, Vector2 as Vec2, Vector3 as Vec3};
}
