//! Lines, segments, triangles, and axis-aligned rectangles in R².

use nalgebra::Vector2;

/// Cross-product magnitude below which two directions count as parallel.
pub(crate) const PARALLEL_EPS: f64 = 1e-12;

#[inline]
pub(crate) fn perp_dot(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Infinite line through `point` along `dir`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line2 {
    pub point: Vector2<f64>,
    pub dir: Vector2<f64>,
}

impl Line2 {
    #[inline]
    pub fn new(point: Vector2<f64>, dir: Vector2<f64>) -> Self {
        Self { point, dir }
    }

    /// Line through two points.
    #[inline]
    pub fn through(a: Vector2<f64>, b: Vector2<f64>) -> Self {
        Self::new(a, b - a)
    }

    /// Orthogonal projection of `p` onto the line.
    pub fn closest_point(&self, p: Vector2<f64>) -> Vector2<f64> {
        let d2 = self.dir.norm_squared();
        if d2 <= PARALLEL_EPS {
            return self.point;
        }
        let t = (p - self.point).dot(&self.dir) / d2;
        self.point + self.dir * t
    }

    /// Perpendicular distance from `p` to the line.
    pub fn distance(&self, p: Vector2<f64>) -> f64 {
        (p - self.closest_point(p)).norm()
    }

    /// Intersection with `other`; `None` when the lines are parallel
    /// (including collinear).
    pub fn intersection(&self, other: &Line2) -> Option<Vector2<f64>> {
        let denom = perp_dot(self.dir, other.dir);
        if denom.abs() <= PARALLEL_EPS {
            return None;
        }
        let t = perp_dot(other.point - self.point, other.dir) / denom;
        Some(self.point + self.dir * t)
    }
}

/// Closed segment from `a` to `b`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment2 {
    pub a: Vector2<f64>,
    pub b: Vector2<f64>,
}

impl Segment2 {
    #[inline]
    pub fn new(a: Vector2<f64>, b: Vector2<f64>) -> Self {
        Self { a, b }
    }

    #[inline]
    pub fn length(&self) -> f64 {
        (self.b - self.a).norm()
    }

    /// Closest point on the segment to `p` (clamped projection).
    pub fn closest_point(&self, p: Vector2<f64>) -> Vector2<f64> {
        let d = self.b - self.a;
        let d2 = d.norm_squared();
        if d2 <= PARALLEL_EPS {
            return self.a;
        }
        let t = ((p - self.a).dot(&d) / d2).clamp(0.0, 1.0);
        self.a + d * t
    }

    pub fn distance(&self, p: Vector2<f64>) -> f64 {
        (p - self.closest_point(p)).norm()
    }

    /// Proper intersection point of two segments; `None` for parallel or
    /// disjoint pairs. Endpoint touching counts as intersecting.
    pub fn intersection(&self, other: &Segment2) -> Option<Vector2<f64>> {
        let d1 = self.b - self.a;
        let d2 = other.b - other.a;
        let denom = perp_dot(d1, d2);
        if denom.abs() <= PARALLEL_EPS {
            return None;
        }
        let delta = other.a - self.a;
        let t = perp_dot(delta, d2) / denom;
        let u = perp_dot(delta, d1) / denom;
        if !(0.0..=1.0).contains(&t) || !(0.0..=1.0).contains(&u) {
            return None;
        }
        Some(self.a + d1 * t)
    }

    #[inline]
    pub fn intersects(&self, other: &Segment2) -> bool {
        self.intersection(other).is_some()
    }
}

/// Triangle with vertices in caller order.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Triangle2 {
    pub a: Vector2<f64>,
    pub b: Vector2<f64>,
    pub c: Vector2<f64>,
}

impl Triangle2 {
    #[inline]
    pub fn new(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> Self {
        Self { a, b, c }
    }

    /// Signed area (positive for counterclockwise vertex order).
    #[inline]
    pub fn signed_area(&self) -> f64 {
        0.5 * perp_dot(self.b - self.a, self.c - self.a)
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Point containment by same-side sign tests; boundary points count as
    /// inside. Works for either winding. A degenerate (zero-area) triangle
    /// contains only the points on its collapsed vertex/segment.
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        let s1 = perp_dot(self.b - self.a, p - self.a);
        let s2 = perp_dot(self.c - self.b, p - self.b);
        let s3 = perp_dot(self.a - self.c, p - self.c);
        if s1 == 0.0 && s2 == 0.0 && s3 == 0.0 {
            // All edge signs vanish only in a collinear configuration; the
            // sign test would be vacuously true for every point.
            return Segment2::new(self.a, self.b).distance(p) <= PARALLEL_EPS
                || Segment2::new(self.b, self.c).distance(p) <= PARALLEL_EPS
                || Segment2::new(self.c, self.a).distance(p) <= PARALLEL_EPS;
        }
        let has_neg = s1 < 0.0 || s2 < 0.0 || s3 < 0.0;
        let has_pos = s1 > 0.0 || s2 > 0.0 || s3 > 0.0;
        !(has_neg && has_pos)
    }

    /// Distance from `p` to the triangle (zero when contained).
    pub fn distance(&self, p: Vector2<f64>) -> f64 {
        if self.contains(p) {
            return 0.0;
        }
        let e1 = Segment2::new(self.a, self.b).distance(p);
        let e2 = Segment2::new(self.b, self.c).distance(p);
        let e3 = Segment2::new(self.c, self.a).distance(p);
        e1.min(e2).min(e3)
    }
}

/// Axis-aligned rectangle: `origin` is the min corner, `size` is
/// non-negative width/height.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect2 {
    pub origin: Vector2<f64>,
    pub size: Vector2<f64>,
}

impl Rect2 {
    #[inline]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Vector2::new(x, y),
            size: Vector2::new(width, height),
        }
    }

    /// Rectangle spanning two arbitrary corners.
    pub fn from_corners(a: Vector2<f64>, b: Vector2<f64>) -> Self {
        let min = Vector2::new(a.x.min(b.x), a.y.min(b.y));
        let max = Vector2::new(a.x.max(b.x), a.y.max(b.y));
        Self {
            origin: min,
            size: max - min,
        }
    }

    #[inline]
    pub fn min(&self) -> Vector2<f64> {
        self.origin
    }

    #[inline]
    pub fn max(&self) -> Vector2<f64> {
        self.origin + self.size
    }

    #[inline]
    pub fn center(&self) -> Vector2<f64> {
        self.origin + self.size * 0.5
    }

    /// Closed containment (boundary included).
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        let max = self.max();
        p.x >= self.origin.x && p.x <= max.x && p.y >= self.origin.y && p.y <= max.y
    }

    pub fn contains_rect(&self, other: &Rect2) -> bool {
        self.contains(other.min()) && self.contains(other.max())
    }

    pub fn intersects(&self, other: &Rect2) -> bool {
        let (amin, amax) = (self.min(), self.max());
        let (bmin, bmax) = (other.min(), other.max());
        amin.x <= bmax.x && bmin.x <= amax.x && amin.y <= bmax.y && bmin.y <= amax.y
    }

    /// Overlapping region; `None` when disjoint (a shared edge yields a
    /// zero-area rectangle, not `None`).
    pub fn intersection(&self, other: &Rect2) -> Option<Rect2> {
        if !self.intersects(other) {
            return None;
        }
        let min = Vector2::new(
            self.min().x.max(other.min().x),
            self.min().y.max(other.min().y),
        );
        let max = Vector2::new(
            self.max().x.min(other.max().x),
            self.max().y.min(other.max().y),
        );
        Some(Rect2::from_corners(min, max))
    }

    /// Smallest rectangle covering both.
    pub fn union(&self, other: &Rect2) -> Rect2 {
        let min = Vector2::new(
            self.min().x.min(other.min().x),
            self.min().y.min(other.min().y),
        );
        let max = Vector2::new(
            self.max().x.max(other.max().x),
            self.max().y.max(other.max().y),
        );
        Rect2::from_corners(min, max)
    }
}
