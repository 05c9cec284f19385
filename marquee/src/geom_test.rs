use super::*;

const EPSILON: f64 = 1e-10;

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Bounds {
    Bounds::from_corners(p(x0, y0), p(x1, y1))
}

fn square(x: f64, y: f64, size: f64) -> Vec<Point> {
    vec![p(x, y), p(x + size, y), p(x + size, y + size), p(x, y + size)]
}

// =============================================================
// orientation
// =============================================================

#[test]
fn orientation_signs() {
    assert!(orientation(p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0)) > 0.0);
    assert!(orientation(p(0.0, 0.0), p(1.0, 0.0), p(0.0, -1.0)) < 0.0);
    assert!(orientation(p(0.0, 0.0), p(1.0, 0.0), p(5.0, 0.0)).abs() < EPSILON);
}

#[test]
fn side_is_scale_independent() {
    for scale in [1e-6, 1.0, 1e6] {
        let (a, b) = (p(0.0, 0.0), p(scale, scale));
        assert_eq!(side(a, b, p(scale, 0.0)), Ordering::Less);
        assert_eq!(side(a, b, p(0.0, scale)), Ordering::Greater);
        assert_eq!(side(a, b, p(2.0 * scale, 2.0 * scale)), Ordering::Equal);
    }
}

// =============================================================
// segments_intersect
// =============================================================

#[test]
fn segments_cross_in_the_middle() {
    assert!(segments_intersect(p(0.0, 0.0), p(10.0, 10.0), p(0.0, 10.0), p(10.0, 0.0)));
}

#[test]
fn segments_parallel_do_not_intersect() {
    assert!(!segments_intersect(p(0.0, 0.0), p(10.0, 0.0), p(0.0, 1.0), p(10.0, 1.0)));
}

#[test]
fn segments_disjoint_on_same_line_do_not_intersect() {
    assert!(!segments_intersect(p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0), p(3.0, 0.0)));
}

#[test]
fn segments_collinear_overlap_counts() {
    assert!(segments_intersect(p(0.0, 0.0), p(5.0, 0.0), p(3.0, 0.0), p(8.0, 0.0)));
}

#[test]
fn segments_touching_at_endpoint_count() {
    assert!(segments_intersect(p(0.0, 0.0), p(5.0, 5.0), p(5.0, 5.0), p(10.0, 0.0)));
}

#[test]
fn segments_t_junction_counts() {
    // Endpoint of the second segment lies on the first.
    assert!(segments_intersect(p(0.0, 0.0), p(10.0, 0.0), p(5.0, 0.0), p(5.0, 5.0)));
}

#[test]
fn segments_near_miss() {
    assert!(!segments_intersect(p(0.0, 0.0), p(10.0, 0.0), p(5.0, 0.1), p(5.0, 5.0)));
}

#[test]
fn segments_intersect_is_symmetric() {
    let segs = [
        (p(0.0, 0.0), p(10.0, 10.0)),
        (p(0.0, 10.0), p(10.0, 0.0)),
        (p(5.0, 0.0), p(5.0, 3.0)),
        (p(20.0, 20.0), p(30.0, 20.0)),
    ];
    for &(a1, a2) in &segs {
        for &(b1, b2) in &segs {
            assert_eq!(segments_intersect(a1, a2, b1, b2), segments_intersect(b1, b2, a1, a2));
        }
    }
}

// =============================================================
// distance_to_segment
// =============================================================

#[test]
fn distance_to_segment_perpendicular() {
    assert!((distance_to_segment(p(5.0, 3.0), p(0.0, 0.0), p(10.0, 0.0)) - 3.0).abs() < EPSILON);
}

#[test]
fn distance_to_segment_clamps_to_endpoint() {
    assert!((distance_to_segment(p(13.0, 4.0), p(0.0, 0.0), p(10.0, 0.0)) - 5.0).abs() < EPSILON);
}

#[test]
fn distance_to_degenerate_segment_is_point_distance() {
    assert!((distance_to_segment(p(3.0, 4.0), p(0.0, 0.0), p(0.0, 0.0)) - 5.0).abs() < EPSILON);
}

// =============================================================
// point_in_polygon
// =============================================================

#[test]
fn point_in_polygon_square() {
    let sq = square(0.0, 0.0, 10.0);
    assert!(point_in_polygon(p(5.0, 5.0), &sq));
    assert!(!point_in_polygon(p(15.0, 5.0), &sq));
    assert!(!point_in_polygon(p(-1.0, 5.0), &sq));
}

#[test]
fn point_in_polygon_concave() {
    // U shape opening upward: the notch between x=3..7 above y=3 is outside.
    let u = vec![p(0.0, 0.0), p(10.0, 0.0), p(10.0, 10.0), p(7.0, 10.0), p(7.0, 3.0), p(3.0, 3.0), p(3.0, 10.0), p(0.0, 10.0)];
    assert!(point_in_polygon(p(1.5, 8.0), &u));
    assert!(!point_in_polygon(p(5.0, 8.0), &u));
    assert!(point_in_polygon(p(5.0, 1.0), &u));
}

#[test]
fn point_in_polygon_needs_three_vertices() {
    assert!(!point_in_polygon(p(0.0, 0.0), &[]));
    assert!(!point_in_polygon(p(0.5, 0.0), &[p(0.0, 0.0), p(1.0, 0.0)]));
}

// =============================================================
// edges
// =============================================================

#[test]
fn edges_open_and_closed() {
    let sq = square(0.0, 0.0, 1.0);
    assert_eq!(edges(&sq, false).count(), 3);
    assert_eq!(edges(&sq, true).count(), 4);
    assert_eq!(edges(&sq, true).last(), Some((p(0.0, 1.0), p(0.0, 0.0))));
}

#[test]
fn edges_two_vertices_closed_has_no_duplicate() {
    assert_eq!(edges(&[p(0.0, 0.0), p(1.0, 0.0)], true).count(), 1);
    assert_eq!(edges(&[], true).count(), 0);
}

// =============================================================
// segment vs rect
// =============================================================

#[test]
fn segment_passing_through_rect_intersects() {
    let r = rect(4.0, 4.0, 6.0, 6.0);
    assert!(segment_intersects_rect(p(0.0, 5.0), p(10.0, 5.0), &r));
    assert!(!segment_crosses_rect_edge(p(4.5, 5.0), p(5.5, 5.0), &r));
    assert!(segment_intersects_rect(p(4.5, 5.0), p(5.5, 5.0), &r));
}

#[test]
fn segment_beside_rect_misses() {
    let r = rect(4.0, 4.0, 6.0, 6.0);
    assert!(!segment_intersects_rect(p(0.0, 0.0), p(10.0, 3.0), &r));
}

#[test]
fn diagonal_segment_missing_corner_with_overlapping_bbox() {
    // The segment's bbox overlaps the rect but the segment passes below its corner.
    let r = rect(4.0, 4.0, 6.0, 6.0);
    assert!(!segment_intersects_rect(p(0.0, 7.0), p(7.0, 0.0), &r));
}

#[test]
fn tiny_diagonal_beside_tiny_rect_misses() {
    // y = x never enters a box where y <= 0.3e-5 < x, however small the units.
    let r = rect(0.6e-5, 0.0, 1e-5, 0.3e-5);
    assert!(!segment_intersects_rect(p(0.0, 0.0), p(1e-5, 1e-5), &r));
    assert!(segment_intersects_rect(p(0.0, 0.0), p(1e-5, 0.2e-5), &r));
}

#[test]
fn tiny_segments_cross_and_miss_like_large_ones() {
    assert!(segments_intersect(p(0.0, 0.0), p(1e-6, 1e-6), p(0.0, 1e-6), p(1e-6, 0.0)));
    assert!(!segments_intersect(p(0.0, 0.0), p(1e-5, 0.0), p(0.5e-5, 1e-7), p(0.5e-5, 1e-5)));
}

// =============================================================
// polyline vs rect
// =============================================================

#[test]
fn polyline_single_vertex_is_a_point() {
    let r = rect(0.0, 0.0, 1.0, 1.0);
    assert!(polyline_intersects_rect(&[p(0.5, 0.5)], false, &r));
    assert!(!polyline_intersects_rect(&[p(2.0, 0.5)], false, &r));
    assert!(!polyline_intersects_rect(&[], true, &r));
}

#[test]
fn polyline_closing_edge_only_counts_when_closed() {
    // Open L from (0,10) to (0,0) to (10,0); the closing edge would cross (4,4)-(6,6).
    let pts = vec![p(0.0, 10.0), p(0.0, 0.0), p(10.0, 0.0)];
    let r = rect(4.0, 4.0, 6.0, 6.0);
    assert!(!polyline_intersects_rect(&pts, false, &r));
    assert!(polyline_intersects_rect(&pts, true, &r));
}

// =============================================================
// polygon vs rect
// =============================================================

#[test]
fn polygon_fully_inside_rect_intersects() {
    let poly = square(2.0, 2.0, 1.0);
    assert!(polygon_intersects_rect(&poly, &rect(0.0, 0.0, 10.0, 10.0)));
}

#[test]
fn polygon_fully_containing_rect_intersects() {
    // Unit square scaled 10x contains [4,4]-[6,6]: no vertex inside, no edge
    // crossing, so only the center test catches it.
    let poly = square(0.0, 0.0, 10.0);
    let r = rect(4.0, 4.0, 6.0, 6.0);
    assert!(!poly.iter().any(|&v| point_in_rect(v, &r)));
    assert!(!edges(&poly, true).any(|(a, b)| segment_crosses_rect_edge(a, b, &r)));
    assert!(polygon_intersects_rect(&poly, &r));
}

#[test]
fn polygon_edge_crossing_rect_intersects() {
    // A thin band crossing the rect with no vertex inside it.
    let poly = vec![p(-10.0, 4.5), p(20.0, 4.5), p(20.0, 5.5), p(-10.0, 5.5)];
    assert!(polygon_intersects_rect(&poly, &rect(4.0, 4.0, 6.0, 6.0)));
}

#[test]
fn polygon_with_overlapping_bbox_but_no_overlap() {
    // Triangle in the lower-left; its bbox covers the rect in the upper-right.
    let tri = vec![p(0.0, 0.0), p(10.0, 0.0), p(0.0, 10.0)];
    assert!(!polygon_intersects_rect(&tri, &rect(8.0, 8.0, 9.0, 9.0)));
}

#[test]
fn polygon_far_away_misses() {
    assert!(!polygon_intersects_rect(&square(100.0, 100.0, 5.0), &rect(0.0, 0.0, 10.0, 10.0)));
}

#[test]
fn polygon_with_too_few_vertices_never_intersects() {
    let r = rect(0.0, 0.0, 10.0, 10.0);
    assert!(!polygon_intersects_rect(&[p(5.0, 5.0)], &r));
    assert!(!polygon_intersects_rect(&[p(5.0, 5.0), p(6.0, 6.0)], &r));
}

// =============================================================
// circle vs rect
// =============================================================

#[test]
fn circle_overlapping_rect_edge() {
    assert!(circle_intersects_rect(p(12.0, 5.0), 3.0, &rect(0.0, 0.0, 10.0, 10.0)));
}

#[test]
fn circle_near_corner_misses() {
    // Distance from (13,13) to corner (10,10) is ~4.24.
    assert!(!circle_intersects_rect(p(13.0, 13.0), 4.0, &rect(0.0, 0.0, 10.0, 10.0)));
    assert!(circle_intersects_rect(p(13.0, 13.0), 4.5, &rect(0.0, 0.0, 10.0, 10.0)));
}

#[test]
fn circle_containing_rect_intersects() {
    assert!(circle_intersects_rect(p(5.0, 5.0), 100.0, &rect(4.0, 4.0, 6.0, 6.0)));
}
