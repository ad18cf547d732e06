//! Bounding volumes: axis-aligned boxes, spheres, oriented cuboids, and
//! axis-aligned spheroids.

use nalgebra::Vector3;

use crate::error::{GeomError, Result};
use crate::rot::{Quaternion, UNIT_NORM_EPS};

/// Axis-aligned bounding box spanning `min`..`max` (closed).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb {
    pub min: Vector3<f64>,
    pub max: Vector3<f64>,
}

impl Aabb {
    /// Box spanning two arbitrary corners (per-axis order normalized).
    pub fn new(a: Vector3<f64>, b: Vector3<f64>) -> Self {
        Self {
            min: Vector3::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)),
            max: Vector3::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)),
        }
    }

    /// Tight box over a point set; `None` for an empty set.
    pub fn from_points(points: &[Vector3<f64>]) -> Option<Self> {
        let first = *points.first()?;
        let mut min = first;
        let mut max = first;
        for p in &points[1..] {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            min.z = min.z.min(p.z);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
            max.z = max.z.max(p.z);
        }
        Some(Self { min, max })
    }

    #[inline]
    pub fn center(&self) -> Vector3<f64> {
        (self.min + self.max) * 0.5
    }

    #[inline]
    pub fn extent(&self) -> Vector3<f64> {
        self.max - self.min
    }

    pub fn contains(&self, p: Vector3<f64>) -> bool {
        p.x >= self.min.x
            && p.x <= self.max.x
            && p.y >= self.min.y
            && p.y <= self.max.y
            && p.z >= self.min.z
            && p.z <= self.max.z
    }

    pub fn contains_aabb(&self, other: &Aabb) -> bool {
        self.contains(other.min) && self.contains(other.max)
    }

    /// Closest point of the (closed) box to `p`: per-axis clamp.
    pub fn closest_point(&self, p: Vector3<f64>) -> Vector3<f64> {
        Vector3::new(
            p.x.clamp(self.min.x, self.max.x),
            p.y.clamp(self.min.y, self.max.y),
            p.z.clamp(self.min.z, self.max.z),
        )
    }

    /// Distance from `p` to the box; zero when contained.
    pub fn distance(&self, p: Vector3<f64>) -> f64 {
        (p - self.closest_point(p)).norm()
    }

    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
            && self.min.z <= other.max.z
            && other.min.z <= self.max.z
    }

    pub fn union(&self, other: &Aabb) -> Aabb {
        Aabb {
            min: Vector3::new(
                self.min.x.min(other.min.x),
                self.min.y.min(other.min.y),
                self.min.z.min(other.min.z),
            ),
            max: Vector3::new(
                self.max.x.max(other.max.x),
                self.max.y.max(other.max.y),
                self.max.z.max(other.max.z),
            ),
        }
    }

    /// All eight corners.
    pub fn corners(&self) -> [Vector3<f64>; 8] {
        let (lo, hi) = (self.min, self.max);
        [
            Vector3::new(lo.x, lo.y, lo.z),
            Vector3::new(hi.x, lo.y, lo.z),
            Vector3::new(lo.x, hi.y, lo.z),
            Vector3::new(hi.x, hi.y, lo.z),
            Vector3::new(lo.x, lo.y, hi.z),
            Vector3::new(hi.x, lo.y, hi.z),
            Vector3::new(lo.x, hi.y, hi.z),
            Vector3::new(hi.x, hi.y, hi.z),
        ]
    }
}

/// Sphere with non-negative radius.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sphere3 {
    pub center: Vector3<f64>,
    pub radius: f64,
}

impl Sphere3 {
    /// Fails with [`GeomError::NegativeRadius`] for `radius < 0`.
    pub fn new(center: Vector3<f64>, radius: f64) -> Result<Self> {
        if !(radius >= 0.0) {
            return Err(GeomError::NegativeRadius(radius));
        }
        Ok(Self { center, radius })
    }

    pub fn contains(&self, p: Vector3<f64>) -> bool {
        (p - self.center).norm_squared() <= self.radius * self.radius
    }

    /// Distance from `p` to the sphere surface; zero when contained.
    pub fn distance(&self, p: Vector3<f64>) -> f64 {
        ((p - self.center).norm() - self.radius).max(0.0)
    }

    pub fn intersects_sphere(&self, other: &Sphere3) -> bool {
        let r = self.radius + other.radius;
        (other.center - self.center).norm_squared() <= r * r
    }
}

/// Oriented box: `orientation` rotates box-local axes into world space.
///
/// Invariants:
/// - `half_extents` are non-negative.
/// - `orientation` is unit norm within the quaternion tolerance. The
///   fields are private so a struct literal cannot bypass the check; the
///   ray/containment paths invert the orientation by conjugation, which
///   is only valid for a unit quaternion.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cuboid3 {
    center: Vector3<f64>,
    half_extents: Vector3<f64>,
    orientation: Quaternion,
}

impl Cuboid3 {
    pub fn new(
        center: Vector3<f64>,
        half_extents: Vector3<f64>,
        orientation: Quaternion,
    ) -> Result<Self> {
        for h in [half_extents.x, half_extents.y, half_extents.z] {
            if !(h >= 0.0) {
                return Err(GeomError::NegativeSemiAxis(h));
            }
        }
        let n = orientation.norm();
        if (n - 1.0).abs() > UNIT_NORM_EPS {
            return Err(GeomError::NotNormalized { norm: n });
        }
        Ok(Self {
            center,
            half_extents,
            orientation,
        })
    }

    #[inline]
    pub fn center(&self) -> Vector3<f64> {
        self.center
    }

    #[inline]
    pub fn half_extents(&self) -> Vector3<f64> {
        self.half_extents
    }

    #[inline]
    pub fn orientation(&self) -> Quaternion {
        self.orientation
    }

    /// World point mapped into box-local coordinates (inverse rotation).
    #[inline]
    pub fn to_local(&self, p: Vector3<f64>) -> Vector3<f64> {
        self.orientation.conjugate().rotate_vector(p - self.center)
    }

    /// Box-local axis-aligned equivalent, for slab intersection.
    #[inline]
    pub(crate) fn local_aabb(&self) -> Aabb {
        Aabb {
            min: -self.half_extents,
            max: self.half_extents,
        }
    }

    pub fn contains(&self, p: Vector3<f64>) -> bool {
        self.local_aabb().contains(self.to_local(p))
    }

    /// Distance from `p` to the box; zero when contained. The rotation
    /// into box-local space preserves lengths, so the local clamp
    /// distance is the world distance.
    pub fn distance(&self, p: Vector3<f64>) -> f64 {
        self.local_aabb().distance(self.to_local(p))
    }

    /// The eight corners in world space.
    pub fn corners(&self) -> [Vector3<f64>; 8] {
        self.local_aabb()
            .corners()
            .map(|c| self.center + self.orientation.rotate_vector(c))
    }
}

/// Axis-aligned spheroid (ellipsoid of revolution or general tri-axial).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spheroid3 {
    pub center: Vector3<f64>,
    pub semi_axes: Vector3<f64>,
}

impl Spheroid3 {
    /// Fails with [`GeomError::NegativeSemiAxis`] for any negative axis.
    pub fn new(center: Vector3<f64>, semi_axes: Vector3<f64>) -> Result<Self> {
        for a in [semi_axes.x, semi_axes.y, semi_axes.z] {
            if !(a >= 0.0) {
                return Err(GeomError::NegativeSemiAxis(a));
            }
        }
        Ok(Self { center, semi_axes })
    }

    /// Containment via the normalized ellipsoid equation. A zero semi-axis
    /// flattens the spheroid; points off that coordinate plane are outside.
    pub fn contains(&self, p: Vector3<f64>) -> bool {
        let d = p - self.center;
        let mut acc = 0.0;
        for (num, den) in [
            (d.x, self.semi_axes.x),
            (d.y, self.semi_axes.y),
            (d.z, self.semi_axes.z),
        ] {
            if den <= 0.0 {
                if num != 0.0 {
                    return false;
                }
            } else {
                let r = num / den;
                acc += r * r;
            }
        }
        acc <= 1.0
    }
}
