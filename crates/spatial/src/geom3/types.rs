//! Lines, segments, rays, planes, triangles, and rectangles in R³.

use nalgebra::{Vector2, Vector3};

use crate::geom2::Triangle2;

/// Norm below which a direction or normal counts as degenerate.
pub(crate) const DEGENERATE_EPS: f64 = 1e-12;

/// Infinite line through `point` along `dir`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line3 {
    pub point: Vector3<f64>,
    pub dir: Vector3<f64>,
}

impl Line3 {
    #[inline]
    pub fn new(point: Vector3<f64>, dir: Vector3<f64>) -> Self {
        Self { point, dir }
    }

    #[inline]
    pub fn through(a: Vector3<f64>, b: Vector3<f64>) -> Self {
        Self::new(a, b - a)
    }

    pub fn closest_point(&self, p: Vector3<f64>) -> Vector3<f64> {
        let d2 = self.dir.norm_squared();
        if d2 <= DEGENERATE_EPS {
            return self.point;
        }
        let t = (p - self.point).dot(&self.dir) / d2;
        self.point + self.dir * t
    }

    pub fn distance(&self, p: Vector3<f64>) -> f64 {
        (p - self.closest_point(p)).norm()
    }
}

/// Closed segment from `a` to `b`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment3 {
    pub a: Vector3<f64>,
    pub b: Vector3<f64>,
}

impl Segment3 {
    #[inline]
    pub fn new(a: Vector3<f64>, b: Vector3<f64>) -> Self {
        Self { a, b }
    }

    #[inline]
    pub fn length(&self) -> f64 {
        (self.b - self.a).norm()
    }

    pub fn closest_point(&self, p: Vector3<f64>) -> Vector3<f64> {
        let d = self.b - self.a;
        let d2 = d.norm_squared();
        if d2 <= DEGENERATE_EPS {
            return self.a;
        }
        let t = ((p - self.a).dot(&d) / d2).clamp(0.0, 1.0);
        self.a + d * t
    }

    pub fn distance(&self, p: Vector3<f64>) -> f64 {
        (p - self.closest_point(p)).norm()
    }
}

/// Half-line from `origin` along `dir`. Intersection queries are in
/// `ray.rs`; `dir` need not be unit length, distances are in units of
/// `dir`'s length.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ray3 {
    pub origin: Vector3<f64>,
    pub dir: Vector3<f64>,
}

impl Ray3 {
    #[inline]
    pub fn new(origin: Vector3<f64>, dir: Vector3<f64>) -> Self {
        Self { origin, dir }
    }

    #[inline]
    pub fn point_at(&self, t: f64) -> Vector3<f64> {
        self.origin + self.dir * t
    }
}

/// Plane through `point` with unit `normal`.
///
/// Invariants:
/// - `normal` is unit length. The fields are private so the invariant
///   cannot be bypassed with a struct literal; constructors normalize,
///   and a null input normal is a degenerate plane yielding `None`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plane3 {
    point: Vector3<f64>,
    normal: Vector3<f64>,
}

impl Plane3 {
    /// `None` when `normal` has zero or non-finite length.
    pub fn new(point: Vector3<f64>, normal: Vector3<f64>) -> Option<Self> {
        let n = normal.norm();
        if !n.is_finite() || n <= DEGENERATE_EPS {
            return None;
        }
        Some(Self {
            point,
            normal: normal / n,
        })
    }

    /// Anchor point supplied at construction.
    #[inline]
    pub fn point(&self) -> Vector3<f64> {
        self.point
    }

    /// Unit normal.
    #[inline]
    pub fn normal(&self) -> Vector3<f64> {
        self.normal
    }

    /// Plane through three points; `None` when they are (near) collinear.
    pub fn from_points(a: Vector3<f64>, b: Vector3<f64>, c: Vector3<f64>) -> Option<Self> {
        Self::new(a, (b - a).cross(&(c - a)))
    }

    /// Signed distance: positive on the side the normal points to.
    #[inline]
    pub fn signed_distance(&self, p: Vector3<f64>) -> f64 {
        self.normal.dot(&(p - self.point))
    }

    /// Orthogonal projection of `p` onto the plane.
    #[inline]
    pub fn project(&self, p: Vector3<f64>) -> Vector3<f64> {
        p - self.normal * self.signed_distance(p)
    }

    /// Flip orientation.
    #[inline]
    pub fn flipped(&self) -> Plane3 {
        Plane3 {
            point: self.point,
            normal: -self.normal,
        }
    }
}

/// Triangle with vertices in caller order.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Triangle3 {
    pub a: Vector3<f64>,
    pub b: Vector3<f64>,
    pub c: Vector3<f64>,
}

impl Triangle3 {
    #[inline]
    pub fn new(a: Vector3<f64>, b: Vector3<f64>, c: Vector3<f64>) -> Self {
        Self { a, b, c }
    }

    /// Unnormalized normal `(b-a) × (c-a)`; its length is twice the area.
    #[inline]
    pub fn scaled_normal(&self) -> Vector3<f64> {
        (self.b - self.a).cross(&(self.c - self.a))
    }

    /// Unit normal; `None` for a zero-area triangle.
    pub fn normal(&self) -> Option<Vector3<f64>> {
        let n = self.scaled_normal();
        let len = n.norm();
        if len <= DEGENERATE_EPS {
            return None;
        }
        Some(n / len)
    }

    #[inline]
    pub fn area(&self) -> f64 {
        0.5 * self.scaled_normal().norm()
    }

    /// Supporting plane; `None` for a zero-area triangle.
    pub fn plane(&self) -> Option<Plane3> {
        Plane3::new(self.a, self.scaled_normal())
    }

    /// True when `p` lies on the triangle: within [`DEGENERATE_EPS`] of
    /// the supporting plane and inside the projected 2D triangle. A
    /// zero-area triangle contains nothing.
    pub fn contains(&self, p: Vector3<f64>) -> bool {
        let n = match self.normal() {
            Some(n) => n,
            None => return false,
        };
        if n.dot(&(p - self.a)).abs() > DEGENERATE_EPS {
            return false;
        }
        let axis = dominant_axis(n);
        Triangle2::new(
            drop_axis(self.a, axis),
            drop_axis(self.b, axis),
            drop_axis(self.c, axis),
        )
        .contains(drop_axis(p, axis))
    }

    /// Closest point on the triangle (interior, edge, or vertex) to `p`.
    /// Barycentric region walk; works for degenerate triangles too, where
    /// it collapses to the closest point on the surviving edge/vertex.
    pub fn closest_point(&self, p: Vector3<f64>) -> Vector3<f64> {
        let ab = self.b - self.a;
        let ac = self.c - self.a;
        let ap = p - self.a;
        let d1 = ab.dot(&ap);
        let d2 = ac.dot(&ap);
        if d1 <= 0.0 && d2 <= 0.0 {
            return self.a;
        }
        let bp = p - self.b;
        let d3 = ab.dot(&bp);
        let d4 = ac.dot(&bp);
        if d3 >= 0.0 && d4 <= d3 {
            return self.b;
        }
        let vc = d1 * d4 - d3 * d2;
        if vc <= 0.0 && d1 >= 0.0 && d3 <= 0.0 {
            let v = d1 / (d1 - d3);
            return self.a + ab * v;
        }
        let cp = p - self.c;
        let d5 = ab.dot(&cp);
        let d6 = ac.dot(&cp);
        if d6 >= 0.0 && d5 <= d6 {
            return self.c;
        }
        let vb = d5 * d2 - d1 * d6;
        if vb <= 0.0 && d2 >= 0.0 && d6 <= 0.0 {
            let w = d2 / (d2 - d6);
            return self.a + ac * w;
        }
        let va = d3 * d6 - d5 * d4;
        if va <= 0.0 && (d4 - d3) >= 0.0 && (d5 - d6) >= 0.0 {
            let w = (d4 - d3) / ((d4 - d3) + (d5 - d6));
            return self.b + (self.c - self.b) * w;
        }
        let denom = 1.0 / (va + vb + vc);
        let v = vb * denom;
        let w = vc * denom;
        self.a + ab * v + ac * w
    }

    /// Distance from `p` to the triangle (zero when on it).
    pub fn distance(&self, p: Vector3<f64>) -> f64 {
        (p - self.closest_point(p)).norm()
    }
}

/// Planar rectangle given by four corners in winding order.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect3 {
    pub corners: [Vector3<f64>; 4],
}

impl Rect3 {
    #[inline]
    pub fn new(corners: [Vector3<f64>; 4]) -> Self {
        Self { corners }
    }

    pub fn center(&self) -> Vector3<f64> {
        (self.corners[0] + self.corners[1] + self.corners[2] + self.corners[3]) * 0.25
    }

    /// Closest point on the rectangle to `p`: project onto the two edge
    /// directions at corner 0 and clamp both coordinates. A degenerate
    /// edge collapses its coordinate to the corner.
    pub fn closest_point(&self, p: Vector3<f64>) -> Vector3<f64> {
        let o = self.corners[0];
        let u = self.corners[1] - o;
        let v = self.corners[3] - o;
        let d = p - o;
        let s = clamped_coord(d, u);
        let t = clamped_coord(d, v);
        o + u * s + v * t
    }

    /// Distance from `p` to the rectangle (zero when on it).
    pub fn distance(&self, p: Vector3<f64>) -> f64 {
        (p - self.closest_point(p)).norm()
    }

    /// True when `p` lies on the rectangle, within [`DEGENERATE_EPS`] of
    /// its closest point (squared).
    pub fn contains(&self, p: Vector3<f64>) -> bool {
        (p - self.closest_point(p)).norm_squared() <= DEGENERATE_EPS
    }
}

#[inline]
fn clamped_coord(d: Vector3<f64>, edge: Vector3<f64>) -> f64 {
    let len_sq = edge.norm_squared();
    if len_sq <= DEGENERATE_EPS {
        return 0.0;
    }
    (d.dot(&edge) / len_sq).clamp(0.0, 1.0)
}

/// Index of the component of `v` with the largest magnitude.
#[inline]
pub(crate) fn dominant_axis(v: Vector3<f64>) -> usize {
    let (ax, ay, az) = (v.x.abs(), v.y.abs(), v.z.abs());
    if ax >= ay && ax >= az {
        0
    } else if ay >= az {
        1
    } else {
        2
    }
}

/// Project out the given axis, keeping the other two components.
#[inline]
pub(crate) fn drop_axis(v: Vector3<f64>, axis: usize) -> Vector2<f64> {
    match axis {
        0 => Vector2::new(v.y, v.z),
        1 => Vector2::new(v.x, v.z),
        _ => Vector2::new(v.x, v.y),
    }
}
