//! View frustum culling.
//!
//! The frustum precomputes its six inward-facing planes and its near/far
//! rectangles at construction; classification is the usual coarse-to-fine
//! visibility test (short-circuit `Outside`, else `Intersect`/`Inside`).

use nalgebra::Vector3;

use super::types::{Plane3, Rect3, DEGENERATE_EPS};
use super::volumes::{Aabb, Sphere3};

/// Placement of a volume relative to the frustum.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Containment {
    Outside,
    Intersect,
    Inside,
}

/// Perspective view frustum.
///
/// Invariants:
/// - All six planes face inward: a point is inside iff every signed
///   distance is non-negative.
/// - `near_rect`/`far_rect` hold the corner rectangles of the near and far
///   clip planes, eagerly computed at construction.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frustum3 {
    planes: [Plane3; 6],
    near_rect: Rect3,
    far_rect: Rect3,
}

impl Frustum3 {
    /// Build from camera parameters: `fovy` is the full vertical field of
    /// view in radians, `aspect` = width/height, `0 < near < far`.
    ///
    /// `None` when the basis degenerates (`look` parallel to `up`, null
    /// vectors) or the clip distances are out of order.
    pub fn new(
        eye: Vector3<f64>,
        look: Vector3<f64>,
        up: Vector3<f64>,
        fovy: f64,
        aspect: f64,
        near: f64,
        far: f64,
    ) -> Option<Frustum3> {
        if !(near > 0.0 && far > near && fovy > 0.0 && aspect > 0.0) {
            return None;
        }
        let f_len = look.norm();
        if !f_len.is_finite() || f_len <= DEGENERATE_EPS {
            return None;
        }
        let forward = look / f_len;
        let right_raw = forward.cross(&up);
        let r_len = right_raw.norm();
        if !r_len.is_finite() || r_len <= DEGENERATE_EPS {
            return None;
        }
        let right = right_raw / r_len;
        let cam_up = right.cross(&forward);

        let half_h_near = near * (fovy / 2.0).tan();
        let half_w_near = half_h_near * aspect;
        let half_h_far = far * (fovy / 2.0).tan();
        let half_w_far = half_h_far * aspect;

        let nc = eye + forward * near;
        let fc = eye + forward * far;

        let near_rect = Rect3::new([
            nc - right * half_w_near - cam_up * half_h_near,
            nc + right * half_w_near - cam_up * half_h_near,
            nc + right * half_w_near + cam_up * half_h_near,
            nc - right * half_w_near + cam_up * half_h_near,
        ]);
        let far_rect = Rect3::new([
            fc - right * half_w_far - cam_up * half_h_far,
            fc + right * half_w_far - cam_up * half_h_far,
            fc + right * half_w_far + cam_up * half_h_far,
            fc - right * half_w_far + cam_up * half_h_far,
        ]);

        // Side planes pass through the eye and a far-rect edge; the normal
        // is oriented inward (towards the axis point fc).
        let fr = far_rect.corners;
        let side = |a: Vector3<f64>, b: Vector3<f64>| -> Option<Plane3> {
            let plane = Plane3::from_points(eye, a, b)?;
            if plane.signed_distance(fc) < 0.0 {
                Some(plane.flipped())
            } else {
                Some(plane)
            }
        };

        let planes = [
            Plane3::new(nc, forward)?,           // near
            Plane3::new(fc, -forward)?,          // far
            side(fr[0], fr[3])?,                 // left
            side(fr[1], fr[2])?,                 // right
            side(fr[3], fr[2])?,                 // top
            side(fr[0], fr[1])?,                 // bottom
        ];

        Some(Frustum3 {
            planes,
            near_rect,
            far_rect,
        })
    }

    /// The six inward-facing planes: near, far, left, right, top, bottom.
    #[inline]
    pub fn planes(&self) -> &[Plane3; 6] {
        &self.planes
    }

    #[inline]
    pub fn near_rect(&self) -> &Rect3 {
        &self.near_rect
    }

    #[inline]
    pub fn far_rect(&self) -> &Rect3 {
        &self.far_rect
    }

    pub fn contains_point(&self, p: Vector3<f64>) -> bool {
        self.planes.iter().all(|pl| pl.signed_distance(p) >= 0.0)
    }

    /// Classify an AABB by testing, per plane, the corner most along the
    /// plane normal (p-vertex) and the opposite corner (n-vertex).
    pub fn classify_aabb(&self, aabb: &Aabb) -> Containment {
        let mut intersecting = false;
        for plane in &self.planes {
            let (p_vertex, n_vertex) = box_extremes(aabb, plane.normal());
            if plane.signed_distance(p_vertex) < 0.0 {
                return Containment::Outside;
            }
            if plane.signed_distance(n_vertex) < 0.0 {
                intersecting = true;
            }
        }
        if intersecting {
            Containment::Intersect
        } else {
            Containment::Inside
        }
    }

    /// Classify a sphere by its center's signed distance per plane.
    pub fn classify_sphere(&self, sphere: &Sphere3) -> Containment {
        let mut intersecting = false;
        for plane in &self.planes {
            let d = plane.signed_distance(sphere.center);
            if d < -sphere.radius {
                return Containment::Outside;
            }
            if d < sphere.radius {
                intersecting = true;
            }
        }
        if intersecting {
            Containment::Intersect
        } else {
            Containment::Inside
        }
    }
}

/// Most-positive and most-negative box corners along `normal`.
#[inline]
fn box_extremes(aabb: &Aabb, normal: Vector3<f64>) -> (Vector3<f64>, Vector3<f64>) {
    let mut p = aabb.min;
    let mut n = aabb.max;
    for axis in 0..3 {
        if normal[axis] >= 0.0 {
            p[axis] = aabb.max[axis];
            n[axis] = aabb.min[axis];
        }
    }
    (p, n)
}
