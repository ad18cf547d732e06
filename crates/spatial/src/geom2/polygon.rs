//! Simple polygons with cached bounds and rectangle clipping.

use nalgebra::Vector2;

use super::types::Rect2;

/// Squared distance below which consecutive clip vertices coalesce.
const DUP_EPS_SQ: f64 = 1e-24;

/// Simple polygon over an ordered vertex list.
///
/// Invariants:
/// - At least 3 vertices (the constructor rejects fewer).
/// - `bounds` is the axis-aligned hull of the vertices, computed once at
///   construction for fast rejection.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polygon2 {
    vertices: Vec<Vector2<f64>>,
    bounds: Rect2,
}

impl Polygon2 {
    /// `None` when fewer than 3 vertices are supplied.
    pub fn new(vertices: Vec<Vector2<f64>>) -> Option<Self> {
        if vertices.len() < 3 {
            return None;
        }
        let mut min = vertices[0];
        let mut max = vertices[0];
        for v in &vertices[1..] {
            min.x = min.x.min(v.x);
            min.y = min.y.min(v.y);
            max.x = max.x.max(v.x);
            max.y = max.y.max(v.y);
        }
        Some(Self {
            vertices,
            bounds: Rect2::from_corners(min, max),
        })
    }

    #[inline]
    pub fn vertices(&self) -> &[Vector2<f64>] {
        &self.vertices
    }

    /// Cached axis-aligned bounds.
    #[inline]
    pub fn bounds(&self) -> Rect2 {
        self.bounds
    }

    /// Signed area via the shoelace formula (positive for counterclockwise
    /// winding).
    pub fn signed_area(&self) -> f64 {
        let n = self.vertices.len();
        let mut acc = 0.0;
        for i in 0..n {
            let p = self.vertices[i];
            let q = self.vertices[(i + 1) % n];
            acc += p.x * q.y - q.x * p.y;
        }
        0.5 * acc
    }

    /// Point containment by the crossing-number test, with a cached-bounds
    /// fast reject. Points exactly on an edge may land on either side.
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        if !self.bounds.contains(p) {
            return false;
        }
        let n = self.vertices.len();
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let a = self.vertices[i];
            let b = self.vertices[j];
            if (a.y > p.y) != (b.y > p.y) {
                let x_cross = a.x + (p.y - a.y) / (b.y - a.y) * (b.x - a.x);
                if p.x < x_cross {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }

    /// Sutherland–Hodgman clip against an axis-aligned rectangle: four
    /// sequential half-plane passes (right, left, top, bottom), coalescing
    /// consecutive duplicate vertices after each pass.
    ///
    /// `None` when the visible part degenerates below 3 vertices.
    pub fn clip_to_rect(&self, rect: &Rect2) -> Option<Polygon2> {
        // Fast reject on the cached bounds.
        if !self.bounds.intersects(rect) {
            return None;
        }
        let min = rect.min();
        let max = rect.max();
        let mut verts = self.vertices.clone();
        for boundary in [
            Boundary::Right(max.x),
            Boundary::Left(min.x),
            Boundary::Top(max.y),
            Boundary::Bottom(min.y),
        ] {
            verts = clip_half_plane(&verts, boundary);
            dedup_consecutive(&mut verts);
            if verts.len() < 3 {
                return None;
            }
        }
        Polygon2::new(verts)
    }
}

/// One axis-aligned clip boundary; the value is the kept half-plane edge.
#[derive(Clone, Copy)]
enum Boundary {
    Right(f64),
    Left(f64),
    Top(f64),
    Bottom(f64),
}

impl Boundary {
    #[inline]
    fn inside(self, p: Vector2<f64>) -> bool {
        match self {
            Boundary::Right(x) => p.x <= x,
            Boundary::Left(x) => p.x >= x,
            Boundary::Top(y) => p.y <= y,
            Boundary::Bottom(y) => p.y >= y,
        }
    }

    /// Intersection of edge `a`→`b` with the boundary line. Only called on
    /// in/out transitions, so the edge is never parallel to the boundary.
    fn cross(self, a: Vector2<f64>, b: Vector2<f64>) -> Vector2<f64> {
        match self {
            Boundary::Right(x) | Boundary::Left(x) => {
                let t = (x - a.x) / (b.x - a.x);
                Vector2::new(x, a.y + (b.y - a.y) * t)
            }
            Boundary::Top(y) | Boundary::Bottom(y) => {
                let t = (y - a.y) / (b.y - a.y);
                Vector2::new(a.x + (b.x - a.x) * t, y)
            }
        }
    }
}

fn clip_half_plane(verts: &[Vector2<f64>], boundary: Boundary) -> Vec<Vector2<f64>> {
    let mut out = Vec::with_capacity(verts.len() + 4);
    let n = verts.len();
    for i in 0..n {
        let cur = verts[i];
        let next = verts[(i + 1) % n];
        let cur_in = boundary.inside(cur);
        let next_in = boundary.inside(next);
        if cur_in {
            out.push(cur);
        }
        if cur_in != next_in {
            out.push(boundary.cross(cur, next));
        }
    }
    out
}

/// Remove consecutive duplicates, including the wrap-around pair.
fn dedup_consecutive(verts: &mut Vec<Vector2<f64>>) {
    verts.dedup_by(|a, b| (*a - *b).norm_squared() < DUP_EPS_SQ);
    while verts.len() > 1 {
        let first = verts[0];
        let last = *verts.last().unwrap();
        if (first - last).norm_squared() < DUP_EPS_SQ {
            verts.pop();
        } else {
            break;
        }
    }
}
