#![allow(clippy::unwrap_used)]

use std::f64::consts::FRAC_PI_4;

use approx::assert_abs_diff_eq;
use orifold::foldability::{RawEdge, RawVertex, VertexHint};
use orifold::operations::NearestSegment;
use orifold::{
    analyze_local_flat_foldability, intersect_ray_segment, intersect_segments, CreaseType, Edge,
    FoldabilitySummary, IntersectOptions, LineSegment, Ray, Vector2,
};
use serde::Deserialize;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn v(x: f64, y: f64) -> Vector2 {
    Vector2::new(x, y).unwrap()
}

/// Eight creases meeting at the centre of a bordered square: mountain
/// diagonals, three valley midlines and one mountain midline.
fn square_base() -> Vec<Edge> {
    use CreaseType::{Border, Mountain, Valley};
    let corners = [(1.0, 1.0), (-1.0, 1.0), (-1.0, -1.0), (1.0, -1.0)];
    let midpoints = [
        ((1.0, 0.0), Mountain),
        ((0.0, 1.0), Valley),
        ((-1.0, 0.0), Valley),
        ((0.0, -1.0), Valley),
    ];

    let mut edges = Vec::new();
    for (i, &(x, y)) in corners.iter().enumerate() {
        let (nx, ny) = corners[(i + 1) % corners.len()];
        edges.push(Edge::new(v(x, y), v(nx, ny), Border).with_id(format!("border-{i}")));
        edges.push(Edge::new(v(0.0, 0.0), v(x, y), Mountain).with_id(format!("diag-{i}")));
    }
    for (i, &((x, y), t)) in midpoints.iter().enumerate() {
        edges.push(Edge::new(v(0.0, 0.0), v(x, y), t).with_id(format!("mid-{i}")));
    }
    edges
}

#[test]
fn square_base_centre_is_locally_flat_foldable() {
    init_tracing();
    let hints = [RawVertex::from(&VertexHint::new("centre", v(0.0, 0.0)))];
    let edges: Vec<RawEdge> = square_base().iter().map(RawEdge::from).collect();
    let reports = analyze_local_flat_foldability(&hints, &edges);

    let centre = reports.iter().find(|r| r.vertex_id == "centre").unwrap();
    assert_eq!(centre.degree, 8);
    for sector in &centre.sectors {
        assert_abs_diff_eq!(*sector, FRAC_PI_4, epsilon = 1e-12);
    }
    assert!(centre.kawasaki.satisfied);
    assert!(centre.maekawa.satisfied);
    assert_eq!((centre.maekawa.mountain_count, centre.maekawa.valley_count), (5, 3));

    // Corners have two border lines and a diagonal: degree 3, never checked.
    let corner = reports.iter().find(|r| r.vertex_id == "1.0000:1.0000").unwrap();
    assert_eq!(corner.degree, 3);
    assert!(!corner.is_checked());

    let summary = FoldabilitySummary::from_reports(&reports);
    assert_eq!(summary.vertex_count, 5);
    assert_eq!(summary.applicable_count, 1);
    assert_eq!(summary.satisfied_count, 1);
    assert!(summary.is_locally_flat_foldable());
}

#[derive(Deserialize)]
struct Document {
    #[serde(default)]
    vertices: Vec<RawVertex>,
    #[serde(default)]
    edges: Vec<RawEdge>,
}

#[test]
fn imported_document_with_noise_is_analyzed() {
    init_tracing();
    let doc: Document = serde_json::from_str(
        r#"{
            "vertices": [
                {"id": "hub", "position": {"x": 0, "y": 0}},
                {"id": "ghost", "position": {"x": "far", "y": 0}},
                {"id": "lonely"}
            ],
            "edges": [
                {"id": "a", "start": {"x": 0, "y": 0}, "end": {"x": 2, "y": 0}, "type": "mountain"},
                {"id": "b", "start": {"x": 0, "y": 0.00001}, "end": {"x": 0, "y": 2}, "type": "valley"},
                {"id": "c", "start": {"x": 0, "y": 0}, "end": {"x": -2, "y": 0}, "type": "mountain"},
                {"id": "d", "start": {"x": 0, "y": 0}, "end": {"x": 0, "y": -2}, "type": "crease"},
                {"id": "e", "start": null, "end": {"x": 1, "y": 1}, "type": "valley"},
                {"id": "f", "start": {"x": 0, "y": 0}, "end": {"x": 0, "y": 0}, "type": "valley"},
                {"start": {"x": 0, "y": 0}}
            ]
        }"#,
    )
    .unwrap();

    let reports = analyze_local_flat_foldability(&doc.vertices, &doc.edges);
    assert_eq!(reports.len(), 1);

    let hub = &reports[0];
    assert_eq!(hub.vertex_id, "hub");
    assert_eq!(hub.degree, 4);
    assert!(hub.kawasaki.satisfied);
    // "crease" is not a known type, so only three folds remain.
    assert!(!hub.maekawa.applicable);
    assert_eq!((hub.maekawa.mountain_count, hub.maekawa.valley_count), (2, 1));
}

#[test]
fn reports_serialize_for_the_diagnostics_panel() {
    let edges: Vec<RawEdge> = square_base().iter().map(RawEdge::from).collect();
    let reports = analyze_local_flat_foldability(&[], &edges);
    let json = serde_json::to_value(&reports).unwrap();
    let centre = json
        .as_array()
        .unwrap()
        .iter()
        .find(|r| r["vertexId"] == "0.0000:0.0000")
        .unwrap();
    assert_eq!(centre["degree"], 8);
    assert_eq!(centre["kawasaki"]["applicable"], true);
    assert_eq!(centre["maekawa"]["valleyCount"], 3);
    let corner = json.as_array().unwrap().first().unwrap();
    assert!(corner["kawasaki"]["deviation"].is_null());
}

#[test]
fn picking_and_intersection_through_the_public_api() {
    let horizontal = LineSegment::new(v(0.0, 0.0), v(10.0, 0.0));
    let vertical = LineSegment::new(v(5.0, -5.0), v(5.0, 5.0));
    let hit = intersect_segments(&horizontal, &vertical, IntersectOptions::default()).unwrap();
    assert_eq!(hit.point, v(5.0, 0.0));

    let ray = Ray::new(v(0.0, 0.0), v(1.0, 0.0));
    let ahead = LineSegment::new(v(2.0, 0.0), v(5.0, 0.0));
    let behind = LineSegment::new(v(-4.0, 0.0), v(-2.0, 0.0));
    assert_eq!(
        intersect_ray_segment(&ray, &ahead, IntersectOptions::default()).unwrap().point,
        v(2.0, 0.0)
    );
    assert!(intersect_ray_segment(&ray, &behind, IntersectOptions::default()).is_none());

    assert_eq!(horizontal.reflect_point(v(4.0, 5.0)), Some(v(4.0, -5.0)));
    assert_abs_diff_eq!(
        LineSegment::new(v(2.0, 2.0), v(2.0, 2.0)).distance_to_point(v(5.0, 6.0)),
        5.0
    );
}

#[test]
fn picking_a_crease_by_proximity() {
    let edges = square_base();
    let segments: Vec<LineSegment> = edges.iter().map(Edge::segment).collect();

    let picked = NearestSegment::new(v(0.5, 0.52), 0.05).execute(&segments).unwrap();
    assert_eq!(edges[picked.index].id.as_deref(), Some("diag-0"));
    assert_abs_diff_eq!(picked.distance, 0.02 / 2.0_f64.sqrt(), epsilon = 1e-12);

    assert!(NearestSegment::new(v(0.5, 0.75), 0.05).execute(&segments).is_none());
}
