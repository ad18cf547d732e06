//! Triangle/triangle intersection (Möller separating-plane test).
//!
//! Structure
//! - Reject early when all of one triangle's signed distances to the
//!   other's supporting plane share a sign.
//! - Otherwise project onto the dominant axis of the cross product of the
//!   two normals and test overlap of the 1D parameter intervals.
//! - The fully coplanar case falls back to 2D edge-against-edge and
//!   point-in-triangle tests.

use nalgebra::Vector3;

use super::types::{dominant_axis, drop_axis, Triangle3};
use crate::geom2::{Segment2, Triangle2};

/// Signed distances within this band snap to the supporting plane.
const COPLANAR_EPS: f64 = 1e-12;

impl Triangle3 {
    /// True when the triangles touch or overlap. Zero-area triangles never
    /// intersect (degenerate input, explicit absence).
    pub fn intersects(&self, other: &Triangle3) -> bool {
        tri_tri_intersects(self, other)
    }
}

pub(crate) fn tri_tri_intersects(t1: &Triangle3, t2: &Triangle3) -> bool {
    let n1 = t1.scaled_normal();
    let n2 = t2.scaled_normal();
    if n1.norm_squared() <= COPLANAR_EPS || n2.norm_squared() <= COPLANAR_EPS {
        return false;
    }

    // Signed distances of t2's vertices to t1's supporting plane.
    let d1 = -n1.dot(&t1.a);
    let dv2 = [
        snap(n1.dot(&t2.a) + d1),
        snap(n1.dot(&t2.b) + d1),
        snap(n1.dot(&t2.c) + d1),
    ];
    if same_sign(&dv2) {
        return false;
    }

    let d2 = -n2.dot(&t2.a);
    let dv1 = [
        snap(n2.dot(&t1.a) + d2),
        snap(n2.dot(&t1.b) + d2),
        snap(n2.dot(&t1.c) + d2),
    ];
    if same_sign(&dv1) {
        return false;
    }

    if dv1 == [0.0; 3] {
        // Both triangles lie in the same plane.
        return coplanar_tri_tri(n1, t1, t2);
    }

    // Project onto the dominant axis of the plane-intersection direction.
    let dir = n1.cross(&n2);
    let axis = dominant_axis(dir);
    let pv1 = [t1.a[axis], t1.b[axis], t1.c[axis]];
    let pv2 = [t2.a[axis], t2.b[axis], t2.c[axis]];

    let (a1, b1) = match interval(pv1, dv1) {
        Some(iv) => iv,
        None => return coplanar_tri_tri(n1, t1, t2),
    };
    let (a2, b2) = match interval(pv2, dv2) {
        Some(iv) => iv,
        None => return coplanar_tri_tri(n1, t1, t2),
    };

    let (lo1, hi1) = if a1 <= b1 { (a1, b1) } else { (b1, a1) };
    let (lo2, hi2) = if a2 <= b2 { (a2, b2) } else { (b2, a2) };
    lo1 <= hi2 && lo2 <= hi1
}

#[inline]
fn snap(d: f64) -> f64 {
    if d.abs() < COPLANAR_EPS {
        0.0
    } else {
        d
    }
}

#[inline]
fn same_sign(d: &[f64; 3]) -> bool {
    (d[0] > 0.0 && d[1] > 0.0 && d[2] > 0.0) || (d[0] < 0.0 && d[1] < 0.0 && d[2] < 0.0)
}

/// 1D interval swept by the triangle along the intersection line, from the
/// two edges that cross the other plane. `None` means no lone vertex
/// exists (coplanar).
fn interval(pv: [f64; 3], dv: [f64; 3]) -> Option<(f64, f64)> {
    // Pick the vertex alone on its side of the plane.
    let lone = if dv[0] * dv[1] > 0.0 {
        2
    } else if dv[0] * dv[2] > 0.0 {
        1
    } else if dv[1] * dv[2] > 0.0 || dv[0] != 0.0 {
        0
    } else if dv[1] != 0.0 {
        1
    } else if dv[2] != 0.0 {
        2
    } else {
        return None;
    };
    let i = lone;
    let j = (lone + 1) % 3;
    let k = (lone + 2) % 3;
    let t1 = pv[i] + (pv[j] - pv[i]) * dv[i] / (dv[i] - dv[j]);
    let t2 = pv[i] + (pv[k] - pv[i]) * dv[i] / (dv[i] - dv[k]);
    Some((t1, t2))
}

/// Coplanar fallback: project to the dominant plane of the shared normal,
/// then test edge pairs and mutual containment in 2D.
fn coplanar_tri_tri(n: Vector3<f64>, t1: &Triangle3, t2: &Triangle3) -> bool {
    let axis = dominant_axis(n);
    let p1 = Triangle2::new(
        drop_axis(t1.a, axis),
        drop_axis(t1.b, axis),
        drop_axis(t1.c, axis),
    );
    let p2 = Triangle2::new(
        drop_axis(t2.a, axis),
        drop_axis(t2.b, axis),
        drop_axis(t2.c, axis),
    );
    let edges1 = [
        Segment2::new(p1.a, p1.b),
        Segment2::new(p1.b, p1.c),
        Segment2::new(p1.c, p1.a),
    ];
    let edges2 = [
        Segment2::new(p2.a, p2.b),
        Segment2::new(p2.b, p2.c),
        Segment2::new(p2.c, p2.a),
    ];
    for e1 in &edges1 {
        for e2 in &edges2 {
            if e1.intersects(e2) {
                return true;
            }
        }
    }
    // No edge crossing: one triangle may still contain the other.
    p1.contains(p2.a) || p2.contains(p1.a)
}
