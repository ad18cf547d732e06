//! 3D primitives, bounding volumes, and spatial queries.
//!
//! Purpose
//! - Immutable value types (`Line3`, `Segment3`, `Ray3`, `Plane3`,
//!   `Triangle3`, `Rect3`, `Aabb`, `Sphere3`, `Cuboid3`, `Spheroid3`,
//!   `Frustum3`) with containment, distance, intersection, and culling
//!   operations.
//! - Ray casts live on [`Ray3`]; the AABB/cuboid paths use the slab method
//!   and report an origin-inside hit as a distinct [`RayHit`] variant.
//! - `Frustum3` precomputes its six bounding planes and near/far
//!   rectangles at construction and classifies volumes as
//!   `Outside`/`Intersect`/`Inside` for coarse-to-fine visibility.

mod frustum;
mod ray;
mod tri_tri;
mod types;
mod volumes;

pub use frustum::{Containment, Frustum3};
pub use ray::RayHit;
pub use types::{Line3, Plane3, Ray3, Rect3, Segment3, Triangle3};
pub use volumes::{Aabb, Cuboid3, Sphere3, Spheroid3};
