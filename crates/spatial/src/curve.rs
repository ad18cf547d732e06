//! Quadratic and cubic Bézier curves with adaptive flattening.
//!
//! Purpose: turn parametric curves into polylines for path animation and
//! hit-testing, spending subdivision only where the curve actually bends.
//!
//! Invariants:
//! - Flattening always emits both endpoints, in order; a straight-line
//!   control polygon flattens to exactly the two endpoints.
//! - The stop condition compares the squared deviation of the chord
//!   midpoint from the true curve midpoint against the caller-supplied
//!   squared tolerance, so callers pick units once and never take roots.
//! - Subdivision splits at `t = 1/2` via de Casteljau, so every emitted
//!   vertex lies exactly on the curve (at a dyadic parameter).

use nalgebra::Vector2;

/// Hard cap on recursion so a zero or denormal tolerance cannot blow the
/// stack; 32 halvings take segment length below f64 resolution anyway.
const MAX_SUBDIVISION_DEPTH: u32 = 32;

/// A quadratic Bézier curve `(1-t)²·p0 + 2(1-t)t·p1 + t²·p2`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuadBezier2 {
    pub p0: Vector2<f64>,
    pub p1: Vector2<f64>,
    pub p2: Vector2<f64>,
}

impl QuadBezier2 {
    #[inline]
    pub fn new(p0: Vector2<f64>, p1: Vector2<f64>, p2: Vector2<f64>) -> Self {
        QuadBezier2 { p0, p1, p2 }
    }

    /// Point on the curve at parameter `t` in `[0, 1]`.
    #[inline]
    pub fn point_at(&self, t: f64) -> Vector2<f64> {
        let s = 1.0 - t;
        self.p0 * (s * s) + self.p1 * (2.0 * s * t) + self.p2 * (t * t)
    }

    /// De Casteljau split at `t = 1/2` into two halves covering
    /// `[0, 1/2]` and `[1/2, 1]` of the original parameter range.
    pub fn split(&self) -> (QuadBezier2, QuadBezier2) {
        let q0 = (self.p0 + self.p1) * 0.5;
        let q1 = (self.p1 + self.p2) * 0.5;
        let mid = (q0 + q1) * 0.5;
        (
            QuadBezier2::new(self.p0, q0, mid),
            QuadBezier2::new(mid, q1, self.p2),
        )
    }

    /// Flattens the curve into a polyline, subdividing until the squared
    /// chord-midpoint deviation drops to `tolerance_sq` or below.
    pub fn flatten(&self, tolerance_sq: f64) -> Vec<Vector2<f64>> {
        let mut out = vec![self.p0];
        self.flatten_tail(tolerance_sq, 0, &mut out);
        out
    }

    fn flatten_tail(&self, tolerance_sq: f64, depth: u32, out: &mut Vec<Vector2<f64>>) {
        let chord_mid = (self.p0 + self.p2) * 0.5;
        let curve_mid = self.point_at(0.5);
        let deviation_sq = (curve_mid - chord_mid).norm_squared();
        if deviation_sq <= tolerance_sq || depth >= MAX_SUBDIVISION_DEPTH {
            out.push(self.p2);
            return;
        }
        let (head, tail) = self.split();
        head.flatten_tail(tolerance_sq, depth + 1, out);
        tail.flatten_tail(tolerance_sq, depth + 1, out);
    }
}

/// A cubic Bézier curve `(1-t)³·p0 + 3(1-t)²t·p1 + 3(1-t)t²·p2 + t³·p3`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubicBezier2 {
    pub p0: Vector2<f64>,
    pub p1: Vector2<f64>,
    pub p2: Vector2<f64>,
    pub p3: Vector2<f64>,
}

impl CubicBezier2 {
    #[inline]
    pub fn new(
        p0: Vector2<f64>,
        p1: Vector2<f64>,
        p2: Vector2<f64>,
        p3: Vector2<f64>,
    ) -> Self {
        CubicBezier2 { p0, p1, p2, p3 }
    }

    /// Point on the curve at parameter `t` in `[0, 1]`.
    #[inline]
    pub fn point_at(&self, t: f64) -> Vector2<f64> {
        let s = 1.0 - t;
        self.p0 * (s * s * s)
            + self.p1 * (3.0 * s * s * t)
            + self.p2 * (3.0 * s * t * t)
            + self.p3 * (t * t * t)
    }

    /// De Casteljau split at `t = 1/2`.
    pub fn split(&self) -> (CubicBezier2, CubicBezier2) {
        let q0 = (self.p0 + self.p1) * 0.5;
        let q1 = (self.p1 + self.p2) * 0.5;
        let q2 = (self.p2 + self.p3) * 0.5;
        let r0 = (q0 + q1) * 0.5;
        let r1 = (q1 + q2) * 0.5;
        let mid = (r0 + r1) * 0.5;
        (
            CubicBezier2::new(self.p0, q0, r0, mid),
            CubicBezier2::new(mid, r1, q2, self.p3),
        )
    }

    /// Flattens the curve into a polyline, subdividing until the squared
    /// chord-midpoint deviation drops to `tolerance_sq` or below.
    pub fn flatten(&self, tolerance_sq: f64) -> Vec<Vector2<f64>> {
        let mut out = vec![self.p0];
        self.flatten_tail(tolerance_sq, 0, &mut out);
        out
    }

    fn flatten_tail(&self, tolerance_sq: f64, depth: u32, out: &mut Vec<Vector2<f64>>) {
        let chord_mid = (self.p0 + self.p3) * 0.5;
        let curve_mid = self.point_at(0.5);
        let deviation_sq = (curve_mid - chord_mid).norm_squared();
        if deviation_sq <= tolerance_sq || depth >= MAX_SUBDIVISION_DEPTH {
            out.push(self.p3);
            return;
        }
        let (head, tail) = self.split();
        head.flatten_tail(tolerance_sq, depth + 1, out);
        tail.flatten_tail(tolerance_sq, depth + 1, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use nalgebra::Vector2;

    fn v(x: f64, y: f64) -> Vector2<f64> {
        Vector2::new(x, y)
    }

    #[test]
    fn quad_point_at_endpoints_and_midpoint() {
        let c = QuadBezier2::new(v(0.0, 0.0), v(1.0, 1.0), v(2.0, 0.0));
        assert_eq!(c.point_at(0.0), c.p0);
        assert_eq!(c.point_at(1.0), c.p2);
        assert_abs_diff_eq!(c.point_at(0.5), v(1.0, 0.5), epsilon = 1e-15);
    }

    #[test]
    fn quad_split_halves_agree_with_parent() {
        let c = QuadBezier2::new(v(0.0, 0.0), v(1.0, 2.0), v(3.0, 1.0));
        let (head, tail) = c.split();
        assert_abs_diff_eq!(head.point_at(0.5), c.point_at(0.25), epsilon = 1e-12);
        assert_abs_diff_eq!(tail.point_at(0.5), c.point_at(0.75), epsilon = 1e-12);
        assert_eq!(head.p2, tail.p0);
    }

    #[test]
    fn quad_collinear_controls_flatten_to_endpoints() {
        let c = QuadBezier2::new(v(0.0, 0.0), v(1.0, 0.0), v(2.0, 0.0));
        let pts = c.flatten(1e-18);
        assert_eq!(pts, vec![v(0.0, 0.0), v(2.0, 0.0)]);
    }

    #[test]
    fn quad_flatten_emits_curve_points_in_order() {
        // x(t) = 2t is linear, so t is recoverable from x and every
        // emitted vertex must satisfy y = 2t(1 - t).
        let c = QuadBezier2::new(v(0.0, 0.0), v(1.0, 1.0), v(2.0, 0.0));
        let pts = c.flatten(1e-6);
        assert_eq!(pts[0], c.p0);
        assert_eq!(*pts.last().unwrap(), c.p2);
        assert!(pts.len() > 2);
        assert!(pts.contains(&v(1.0, 0.5)));
        for w in pts.windows(2) {
            assert!(w[1].x > w[0].x);
        }
        for p in &pts {
            let t = p.x / 2.0;
            assert_abs_diff_eq!(p.y, 2.0 * t * (1.0 - t), epsilon = 1e-12);
        }
    }

    #[test]
    fn quad_tighter_tolerance_never_drops_points() {
        let c = QuadBezier2::new(v(0.0, 0.0), v(1.0, 1.0), v(2.0, 0.0));
        let coarse = c.flatten(1e-2).len();
        let fine = c.flatten(1e-8).len();
        assert!(fine >= coarse);
    }

    #[test]
    fn cubic_point_at_endpoints() {
        let c = CubicBezier2::new(v(0.0, 0.0), v(1.0, 0.0), v(2.0, 3.0), v(3.0, 3.0));
        assert_eq!(c.point_at(0.0), c.p0);
        assert_eq!(c.point_at(1.0), c.p3);
    }

    #[test]
    fn cubic_split_halves_agree_with_parent() {
        let c = CubicBezier2::new(v(0.0, 0.0), v(0.0, 2.0), v(3.0, 2.0), v(3.0, 0.0));
        let (head, tail) = c.split();
        assert_abs_diff_eq!(head.point_at(1.0), c.point_at(0.5), epsilon = 1e-12);
        assert_abs_diff_eq!(head.point_at(0.5), c.point_at(0.25), epsilon = 1e-12);
        assert_abs_diff_eq!(tail.point_at(0.5), c.point_at(0.75), epsilon = 1e-12);
    }

    #[test]
    fn cubic_collinear_controls_flatten_to_endpoints() {
        let c = CubicBezier2::new(v(0.0, 0.0), v(1.0, 1.0), v(2.0, 2.0), v(3.0, 3.0));
        let pts = c.flatten(1e-18);
        assert_eq!(pts, vec![v(0.0, 0.0), v(3.0, 3.0)]);
    }

    #[test]
    fn cubic_flatten_emits_curve_points() {
        // Uniform x spacing makes x(t) = 3t exact, so t is recoverable
        // from x and vertices must satisfy y = 9t² - 6t³.
        let c = CubicBezier2::new(v(0.0, 0.0), v(1.0, 0.0), v(2.0, 3.0), v(3.0, 3.0));
        let pts = c.flatten(1e-6);
        assert_eq!(pts[0], c.p0);
        assert_eq!(*pts.last().unwrap(), c.p3);
        assert!(pts.len() > 2);
        for p in &pts {
            let t = p.x / 3.0;
            assert_abs_diff_eq!(p.y, 9.0 * t * t - 6.0 * t * t * t, epsilon = 1e-12);
        }
    }

    #[test]
    fn cubic_flatten_stays_within_tolerance_of_chords() {
        let c = CubicBezier2::new(v(0.0, 0.0), v(0.0, 4.0), v(4.0, 4.0), v(4.0, 0.0));
        let tol_sq = 1e-4;
        let pts = c.flatten(tol_sq);
        // Re-sample the curve densely and check every sample sits close
        // to the polyline.
        for i in 0..=256 {
            let p = c.point_at(f64::from(i) / 256.0);
            let d_sq = pts
                .windows(2)
                .map(|w| {
                    let seg = crate::geom2::Segment2::new(w[0], w[1]);
                    let d = seg.distance(p);
                    d * d
                })
                .fold(f64::INFINITY, f64::min);
            assert!(d_sq < 25.0 * tol_sq, "sample {i} strays: {d_sq}");
        }
    }
}
