use super::*;

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

// =============================================================
// Geometry bounds
// =============================================================

#[test]
fn line_bounds_normalized() {
    let g = EntityGeometry::Line { start: p(10.0, 0.0), end: p(0.0, 5.0) };
    assert_eq!(g.bounds(), Some(Bounds::from_corners(p(0.0, 0.0), p(10.0, 5.0))));
}

#[test]
fn circle_bounds_span_diameter() {
    let g = EntityGeometry::Circle { center: p(5.0, 5.0), radius: 2.0 };
    assert_eq!(g.bounds(), Some(Bounds::from_corners(p(3.0, 3.0), p(7.0, 7.0))));
}

#[test]
fn empty_polyline_has_no_bounds() {
    let g = EntityGeometry::Polyline { vertices: vec![], closed: false };
    assert!(g.bounds().is_none());
}

#[test]
fn rectangle_bounds_from_opposite_corners() {
    let g = EntityGeometry::Rectangle { corner1: p(4.0, 8.0), corner2: p(1.0, 2.0) };
    assert_eq!(g.bounds(), Some(Bounds::from_corners(p(1.0, 2.0), p(4.0, 8.0))));
}

#[test]
fn angle_measurement_bounds_cover_all_three_points() {
    let g = EntityGeometry::AngleMeasurement { vertex: p(0.0, 0.0), point1: p(10.0, 0.0), point2: p(0.0, -3.0) };
    assert_eq!(g.bounds(), Some(Bounds::from_corners(p(0.0, -3.0), p(10.0, 0.0))));
}

#[test]
fn kind_names() {
    assert_eq!(EntityGeometry::Circle { center: p(0.0, 0.0), radius: 1.0 }.kind_name(), "circle");
    assert_eq!(
        EntityGeometry::AngleMeasurement { vertex: p(0.0, 0.0), point1: p(0.0, 0.0), point2: p(0.0, 0.0) }.kind_name(),
        "angle_measurement"
    );
}

// =============================================================
// Serde
// =============================================================

#[test]
fn entity_deserializes_with_defaults() {
    let e: Entity = serde_json::from_str(r#"{"id": "L1", "type": "line", "start": {"x": 0, "y": 0}, "end": {"x": 1, "y": 1}}"#)
        .expect("entity");
    assert_eq!(e.id, "L1");
    assert_eq!(e.layer, "0");
    assert!(e.visible);
    assert_eq!(e.geometry, EntityGeometry::Line { start: p(0.0, 0.0), end: p(1.0, 1.0) });
}

#[test]
fn polyline_closed_defaults_to_false() {
    let e: Entity =
        serde_json::from_str(r#"{"id": "P1", "type": "polyline", "layer": "walls", "vertices": [{"x": 0, "y": 0}]}"#)
            .expect("entity");
    assert_eq!(e.layer, "walls");
    assert!(matches!(e.geometry, EntityGeometry::Polyline { closed: false, .. }));
}

#[test]
fn entity_rejects_unknown_type() {
    let err = serde_json::from_str::<Entity>(r#"{"id": "X", "type": "spline"}"#);
    assert!(err.is_err());
}

#[test]
fn entity_serializes_type_tag() {
    let e = Entity::new("C1", EntityGeometry::Circle { center: p(1.0, 2.0), radius: 3.0 });
    let json = serde_json::to_value(&e).expect("serialize");
    assert_eq!(json["type"], "circle");
    assert_eq!(json["radius"], 3.0);
    assert_eq!(json["layer"], "0");
}

#[test]
fn color_layer_visible_defaults_true() {
    let layer: ColorLayer = serde_json::from_str(r#"{"id": "zone-a"}"#).expect("layer");
    assert!(layer.visible);
    assert!(layer.polygons.is_empty());
    assert!(layer.bounds().is_none());
}

// =============================================================
// ColorLayer bounds
// =============================================================

#[test]
fn color_layer_bounds_union_of_polygons() {
    let layer = ColorLayer::new(
        "zone",
        vec![vec![p(0.0, 0.0), p(1.0, 1.0)], vec![], vec![p(5.0, -2.0), p(6.0, 0.0)]],
    );
    assert_eq!(layer.bounds(), Some(Bounds::from_corners(p(0.0, -2.0), p(6.0, 1.0))));
}
