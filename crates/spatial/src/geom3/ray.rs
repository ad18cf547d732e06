//! Ray casts against planes, spheres, triangles, boxes, and spheroids.
//!
//! Conventions
//! - Ray parameters are in units of the ray direction's length; hits
//!   behind the origin are `None` on every path.
//! - The box paths (slab method) distinguish an origin-inside start with
//!   [`RayHit::Inside`]; the signed-distance convenience methods keep the
//!   negative-exit-distance convention for that case, so a negative return
//!   can only mean "origin inside", never "behind the ray".

use nalgebra::Vector3;

use super::types::{Plane3, Ray3, Triangle3, DEGENERATE_EPS};
use super::volumes::{Aabb, Cuboid3, Sphere3, Spheroid3};

/// Determinant band within which a ray counts as parallel to a triangle
/// plane (Möller–Trumbore).
const MOLLER_EPS: f64 = 1e-12;

/// Outcome of a ray/box cast.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RayHit {
    /// Ray starts outside and enters at parameter `t >= 0`.
    Entry(f64),
    /// Ray starts inside; the value is the (positive) exit parameter.
    Inside(f64),
}

impl Ray3 {
    /// Ray/plane intersection parameter; `None` when parallel (within
    /// [`DEGENERATE_EPS`]) or when the plane lies behind the origin.
    pub fn intersect_plane(&self, plane: &Plane3) -> Option<f64> {
        let denom = plane.normal().dot(&self.dir);
        if denom.abs() <= DEGENERATE_EPS {
            return None;
        }
        let t = plane.normal().dot(&(plane.point() - self.origin)) / denom;
        if t < 0.0 {
            return None;
        }
        Some(t)
    }

    /// Nearest non-negative ray/sphere intersection parameter. An
    /// origin-inside ray hits the far surface.
    pub fn intersect_sphere(&self, sphere: &Sphere3) -> Option<f64> {
        let oc = self.origin - sphere.center;
        let a = self.dir.norm_squared();
        if a <= DEGENERATE_EPS {
            return None;
        }
        let half_b = oc.dot(&self.dir);
        let c = oc.norm_squared() - sphere.radius * sphere.radius;
        let disc = half_b * half_b - a * c;
        if disc < 0.0 {
            return None;
        }
        let sq = disc.sqrt();
        let t_near = (-half_b - sq) / a;
        if t_near >= 0.0 {
            return Some(t_near);
        }
        let t_far = (-half_b + sq) / a;
        if t_far >= 0.0 {
            return Some(t_far);
        }
        None
    }

    /// Möller–Trumbore ray/triangle intersection parameter.
    ///
    /// A determinant within ±1e-12 means the ray is parallel to the
    /// triangle plane: no intersection. Barycentric coordinates must
    /// satisfy `u ∈ [0,1]`, `v ∈ [0,1]`, `u + v <= 1`.
    pub fn intersect_triangle(&self, tri: &Triangle3) -> Option<f64> {
        let e1 = tri.b - tri.a;
        let e2 = tri.c - tri.a;
        let pvec = self.dir.cross(&e2);
        let det = e1.dot(&pvec);
        if det.abs() <= MOLLER_EPS {
            return None;
        }
        let inv_det = 1.0 / det;
        let tvec = self.origin - tri.a;
        let u = tvec.dot(&pvec) * inv_det;
        if !(0.0..=1.0).contains(&u) {
            return None;
        }
        let qvec = tvec.cross(&e1);
        let v = self.dir.dot(&qvec) * inv_det;
        if v < 0.0 || u + v > 1.0 {
            return None;
        }
        let t = e2.dot(&qvec) * inv_det;
        if t < 0.0 {
            return None;
        }
        Some(t)
    }

    /// Slab-method ray/AABB cast.
    ///
    /// Returns `RayHit::Entry(t)` when the origin is outside and the ray
    /// enters the box, `RayHit::Inside(exit)` when the origin starts
    /// inside, and `None` when the box is missed or entirely behind.
    pub fn intersect_aabb(&self, aabb: &Aabb) -> Option<RayHit> {
        // A null direction has no parameterization, even from inside.
        if self.dir.norm_squared() <= DEGENERATE_EPS {
            return None;
        }
        let mut t_min = f64::NEG_INFINITY;
        let mut t_max = f64::INFINITY;
        for axis in 0..3 {
            let o = self.origin[axis];
            let d = self.dir[axis];
            if d == 0.0 {
                // Parallel to this slab: miss unless the origin is inside it.
                if o < aabb.min[axis] || o > aabb.max[axis] {
                    return None;
                }
                continue;
            }
            let inv = 1.0 / d;
            let t1 = (aabb.min[axis] - o) * inv;
            let t2 = (aabb.max[axis] - o) * inv;
            let (lo, hi) = if t1 <= t2 { (t1, t2) } else { (t2, t1) };
            t_min = t_min.max(lo);
            t_max = t_max.min(hi);
            if t_min > t_max {
                return None;
            }
        }
        if t_max < 0.0 {
            // Entirely behind the origin.
            return None;
        }
        if t_min < 0.0 {
            return Some(RayHit::Inside(t_max));
        }
        Some(RayHit::Entry(t_min))
    }

    /// Signed ray/AABB distance preserving the historical convention: a
    /// negative value is the negated exit distance of an origin-inside ray.
    pub fn signed_distance_aabb(&self, aabb: &Aabb) -> Option<f64> {
        match self.intersect_aabb(aabb)? {
            RayHit::Entry(t) => Some(t),
            RayHit::Inside(exit) => Some(-exit),
        }
    }

    /// True only for an outside-in hit; an origin-inside ray does not
    /// "intersect" the box surface in this sense.
    pub fn intersects_aabb(&self, aabb: &Aabb) -> bool {
        matches!(self.intersect_aabb(aabb), Some(RayHit::Entry(_)))
    }

    /// Ray/cuboid cast: the ray is mapped into box-local space via the
    /// inverse orientation quaternion, then the AABB slab path applies.
    /// Parameters are valid in world space because the rotation preserves
    /// lengths.
    pub fn intersect_cuboid(&self, cuboid: &Cuboid3) -> Option<RayHit> {
        let inv = cuboid.orientation().conjugate();
        let local = Ray3::new(
            inv.rotate_vector(self.origin - cuboid.center()),
            inv.rotate_vector(self.dir),
        );
        local.intersect_aabb(&cuboid.local_aabb())
    }

    /// Signed-distance counterpart of [`Ray3::intersect_cuboid`].
    pub fn signed_distance_cuboid(&self, cuboid: &Cuboid3) -> Option<f64> {
        match self.intersect_cuboid(cuboid)? {
            RayHit::Entry(t) => Some(t),
            RayHit::Inside(exit) => Some(-exit),
        }
    }

    /// Nearest non-negative ray/spheroid intersection parameter, by
    /// scaling the problem onto the unit sphere (the parameter is
    /// preserved by the per-axis scaling).
    pub fn intersect_spheroid(&self, spheroid: &Spheroid3) -> Option<f64> {
        let ax = spheroid.semi_axes;
        if ax.x <= 0.0 || ax.y <= 0.0 || ax.z <= 0.0 {
            return None;
        }
        let o = self.origin - spheroid.center;
        let scaled = Ray3::new(
            Vector3::new(o.x / ax.x, o.y / ax.y, o.z / ax.z),
            Vector3::new(self.dir.x / ax.x, self.dir.y / ax.y, self.dir.z / ax.z),
        );
        let unit = Sphere3 {
            center: Vector3::zeros(),
            radius: 1.0,
        };
        scaled.intersect_sphere(&unit)
    }
}
