use super::*;
use approx::assert_relative_eq;
use nalgebra::{vector, Vector2};
use proptest::prelude::*;

#[test]
fn line_intersection_and_parallel() {
    let a = Line2::through(vector![0.0, 0.0], vector![2.0, 2.0]);
    let b = Line2::new(vector![0.0, 2.0], vector![1.0, -1.0]);
    let p = a.intersection(&b).unwrap();
    assert_relative_eq!(p, vector![1.0, 1.0], epsilon = 1e-12);

    let parallel = Line2::new(vector![0.0, 1.0], vector![1.0, 1.0]);
    assert!(a.intersection(&parallel).is_none());
    // Collinear is also "parallel": no single intersection point.
    let collinear = Line2::new(vector![5.0, 5.0], vector![-1.0, -1.0]);
    assert!(a.intersection(&collinear).is_none());
}

#[test]
fn line_distance_is_perpendicular() {
    let l = Line2::new(vector![0.0, 0.0], vector![1.0, 0.0]);
    assert_relative_eq!(l.distance(vector![3.0, 4.0]), 4.0, epsilon = 1e-12);
    assert_relative_eq!(
        l.closest_point(vector![3.0, 4.0]),
        vector![3.0, 0.0],
        epsilon = 1e-12
    );
}

#[test]
fn segment_intersection_cases() {
    let s1 = Segment2::new(vector![0.0, 0.0], vector![2.0, 2.0]);
    let s2 = Segment2::new(vector![0.0, 2.0], vector![2.0, 0.0]);
    let p = s1.intersection(&s2).unwrap();
    assert_relative_eq!(p, vector![1.0, 1.0], epsilon = 1e-12);

    // Crossing lines but disjoint segments.
    let s3 = Segment2::new(vector![3.0, 0.0], vector![3.0, 5.0]);
    assert!(!s1.intersects(&s3));
    // Parallel.
    let s4 = Segment2::new(vector![0.0, 1.0], vector![2.0, 3.0]);
    assert!(s1.intersection(&s4).is_none());
    // Endpoint touching counts.
    let s5 = Segment2::new(vector![2.0, 2.0], vector![3.0, 0.0]);
    assert!(s1.intersects(&s5));
}

#[test]
fn segment_distance_clamps_to_endpoints() {
    let s = Segment2::new(vector![0.0, 0.0], vector![1.0, 0.0]);
    assert_relative_eq!(s.distance(vector![0.5, 2.0]), 2.0, epsilon = 1e-12);
    assert_relative_eq!(s.distance(vector![-3.0, 4.0]), 5.0, epsilon = 1e-12);
    assert_relative_eq!(s.length(), 1.0, epsilon = 1e-15);
}

#[test]
fn triangle_contains_and_area() {
    let t = Triangle2::new(vector![0.0, 0.0], vector![2.0, 0.0], vector![0.0, 2.0]);
    assert!(t.contains(vector![0.5, 0.5]));
    assert!(t.contains(vector![0.0, 0.0])); // vertex
    assert!(t.contains(vector![1.0, 1.0])); // hypotenuse boundary
    assert!(!t.contains(vector![1.5, 1.5]));
    assert_relative_eq!(t.signed_area(), 2.0, epsilon = 1e-12);
    // Clockwise winding flips the sign, containment still works.
    let tc = Triangle2::new(vector![0.0, 0.0], vector![0.0, 2.0], vector![2.0, 0.0]);
    assert_relative_eq!(tc.signed_area(), -2.0, epsilon = 1e-12);
    assert!(tc.contains(vector![0.5, 0.5]));
}

#[test]
fn degenerate_triangle_contains_only_its_segment() {
    // All three vertices coincide: only that point is inside.
    let point = Triangle2::new(vector![0.0, 0.0], vector![0.0, 0.0], vector![0.0, 0.0]);
    assert!(point.contains(vector![0.0, 0.0]));
    assert!(!point.contains(vector![100.0, 100.0]));
    assert!(!point.contains(vector![0.0, 1.0]));

    // Collinear vertices: containment collapses to the covering segment.
    let line = Triangle2::new(vector![0.0, 0.0], vector![1.0, 0.0], vector![2.0, 0.0]);
    assert!(line.contains(vector![1.5, 0.0]));
    assert!(line.contains(vector![0.0, 0.0]));
    assert!(!line.contains(vector![3.0, 0.0]));
    assert!(!line.contains(vector![1.0, 0.5]));
}

#[test]
fn triangle_distance_zero_inside_positive_outside() {
    let t = Triangle2::new(vector![0.0, 0.0], vector![2.0, 0.0], vector![0.0, 2.0]);
    assert_eq!(t.distance(vector![0.5, 0.5]), 0.0);
    assert_relative_eq!(t.distance(vector![1.0, -1.0]), 1.0, epsilon = 1e-12);
}

#[test]
fn rect_queries() {
    let r = Rect2::new(0.0, 0.0, 2.0, 1.0);
    assert!(r.contains(vector![2.0, 1.0]));
    assert!(!r.contains(vector![2.1, 0.5]));
    assert_relative_eq!(r.center(), vector![1.0, 0.5], epsilon = 1e-15);

    let s = Rect2::new(1.0, 0.5, 2.0, 2.0);
    assert!(r.intersects(&s));
    let overlap = r.intersection(&s).unwrap();
    assert_relative_eq!(overlap.min(), vector![1.0, 0.5], epsilon = 1e-15);
    assert_relative_eq!(overlap.max(), vector![2.0, 1.0], epsilon = 1e-15);
    let u = r.union(&s);
    assert_relative_eq!(u.min(), vector![0.0, 0.0], epsilon = 1e-15);
    assert_relative_eq!(u.max(), vector![3.0, 2.5], epsilon = 1e-15);

    let far = Rect2::new(10.0, 10.0, 1.0, 1.0);
    assert!(far.intersection(&r).is_none());
    assert!(r.contains_rect(&Rect2::new(0.5, 0.25, 1.0, 0.5)));
    assert!(!r.contains_rect(&s));
}

fn unit_square() -> Polygon2 {
    Polygon2::new(vec![
        vector![0.0, 0.0],
        vector![1.0, 0.0],
        vector![1.0, 1.0],
        vector![0.0, 1.0],
    ])
    .unwrap()
}

#[test]
fn polygon_rejects_degenerate_vertex_list() {
    assert!(Polygon2::new(vec![vector![0.0, 0.0], vector![1.0, 0.0]]).is_none());
}

#[test]
fn polygon_bounds_are_cached_at_construction() {
    let p = Polygon2::new(vec![
        vector![0.0, -1.0],
        vector![3.0, 0.5],
        vector![1.0, 2.0],
    ])
    .unwrap();
    let b = p.bounds();
    assert_relative_eq!(b.min(), vector![0.0, -1.0], epsilon = 1e-15);
    assert_relative_eq!(b.max(), vector![3.0, 2.0], epsilon = 1e-15);
}

#[test]
fn polygon_contains_crossing_number() {
    let p = unit_square();
    assert!(p.contains(vector![0.5, 0.5]));
    assert!(!p.contains(vector![1.5, 0.5]));
    assert!(!p.contains(vector![0.5, -0.1]));

    // Concave "L" shape.
    let l = Polygon2::new(vec![
        vector![0.0, 0.0],
        vector![2.0, 0.0],
        vector![2.0, 1.0],
        vector![1.0, 1.0],
        vector![1.0, 2.0],
        vector![0.0, 2.0],
    ])
    .unwrap();
    assert!(l.contains(vector![0.5, 1.5]));
    assert!(!l.contains(vector![1.5, 1.5]));
}

#[test]
fn clip_unit_square_against_offset_rect() {
    let p = unit_square();
    let clipped = p.clip_to_rect(&Rect2::new(0.5, 0.5, 1.0, 1.0)).unwrap();
    assert_eq!(clipped.vertices().len(), 4);
    let expected = [
        vector![0.5, 0.5],
        vector![1.0, 0.5],
        vector![1.0, 1.0],
        vector![0.5, 1.0],
    ];
    for e in expected {
        assert!(
            clipped.vertices().iter().any(|v| (v - e).norm() < 1e-12),
            "missing vertex {e:?}"
        );
    }
    assert_relative_eq!(clipped.signed_area().abs(), 0.25, epsilon = 1e-12);
}

#[test]
fn clip_disjoint_rect_is_absence() {
    let p = unit_square();
    assert!(p.clip_to_rect(&Rect2::new(5.0, 5.0, 1.0, 1.0)).is_none());
}

#[test]
fn clip_collapsing_to_edge_is_absence() {
    // Triangle dips below y=0; the visible part against a rect starting at
    // y=0 is a line segment, which is "no polygon", not an empty polygon.
    let t = Polygon2::new(vec![
        vector![0.0, 0.0],
        vector![1.0, 0.0],
        vector![0.5, -1.0],
    ])
    .unwrap();
    assert!(t.clip_to_rect(&Rect2::new(0.0, 0.0, 2.0, 2.0)).is_none());
}

#[test]
fn clip_contained_polygon_is_unchanged() {
    let p = unit_square();
    let clipped = p.clip_to_rect(&Rect2::new(-1.0, -1.0, 3.0, 3.0)).unwrap();
    assert_eq!(clipped.vertices(), p.vertices());
}

proptest! {
    /// Segment/segment intersection is symmetric.
    #[test]
    fn prop_segment_intersects_symmetric(
        ax in -10.0..10.0f64, ay in -10.0..10.0f64,
        bx in -10.0..10.0f64, by in -10.0..10.0f64,
        cx in -10.0..10.0f64, cy in -10.0..10.0f64,
        dx in -10.0..10.0f64, dy in -10.0..10.0f64,
    ) {
        let s1 = Segment2::new(Vector2::new(ax, ay), Vector2::new(bx, by));
        let s2 = Segment2::new(Vector2::new(cx, cy), Vector2::new(dx, dy));
        prop_assert_eq!(s1.intersects(&s2), s2.intersects(&s1));
    }

    /// Clipping never grows the polygon outside the clip rectangle.
    #[test]
    fn prop_clip_result_within_rect(
        ox in -2.0..2.0f64, oy in -2.0..2.0f64,
        w in 0.1..3.0f64, h in 0.1..3.0f64,
    ) {
        let p = unit_square();
        let rect = Rect2::new(ox, oy, w, h);
        if let Some(clipped) = p.clip_to_rect(&rect) {
            for v in clipped.vertices() {
                prop_assert!(v.x >= rect.min().x - 1e-9 && v.x <= rect.max().x + 1e-9);
                prop_assert!(v.y >= rect.min().y - 1e-9 && v.y <= rect.max().y + 1e-9);
            }
        }
    }
}
