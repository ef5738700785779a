//! End-to-end plotting scenarios, snapshotted with insta

mod common;

use glam::dvec2;
use pcbplot::plot::{plot_shape, shape_bbox};
use pcbplot::{
    ArcDirection, BBox, HoleShape, ImageNode, InterpolateMode, Offsets, PathSegment, PlotBuilder,
    PlotOptions, QuadrantMode, Shape, Stroke, Tool, ToolShape,
};

fn kinds(builder: PlotBuilder) -> Vec<&'static str> {
    builder
        .finish()
        .iter()
        .map(|node| match node {
            ImageNode::Path(_) => "path",
            ImageNode::Region(region) if region.region_mode => "region",
            ImageNode::Region(_) => "stroke-region",
            ImageNode::Shape(_) => "shape",
        })
        .collect()
}

#[test]
fn circle_tool_line_stroke() {
    common::init_tracing();
    let tool = Tool::circle(10.0);
    let mut builder = PlotBuilder::new();
    builder
        .stroke(&Stroke::line(dvec2(0.0, 0.0), dvec2(10.0, 0.0), Some(&tool)))
        .unwrap();
    let tree = builder.finish();

    let ImageNode::Path(path) = &tree.children[0] else {
        panic!("expected a path, got {:?}", tree.children[0]);
    };
    assert_eq!(path.width, 10.0);
    assert!(matches!(path.segments.as_slice(), [PathSegment::Line(_)]));

    let bbox = tree.bbox();
    insta::assert_debug_snapshot!("circle_tool_line_stroke", bbox);
}

#[test]
fn counter_clockwise_quarter_arc() {
    common::init_tracing();
    let mut builder = PlotBuilder::new();
    let arc = Stroke::line(dvec2(10.0, 0.0), dvec2(0.0, 10.0), None)
        .with_interpolation(InterpolateMode::CcwArc, Offsets::new(-10.0, 0.0))
        .with_region_mode(true);
    builder.stroke(&arc).unwrap();

    let bbox = builder.finish().bbox();
    insta::assert_debug_snapshot!("counter_clockwise_quarter_arc", bbox);
}

#[test]
fn clockwise_arc_between_the_same_points() {
    common::init_tracing();
    // clockwise from +x to +y around the origin is three quarters of a turn
    let mut builder = PlotBuilder::new();
    let arc = Stroke::line(dvec2(10.0, 0.0), dvec2(0.0, 10.0), None)
        .with_interpolation(InterpolateMode::CwArc, Offsets::new(-10.0, 0.0))
        .with_region_mode(true);
    builder.stroke(&arc).unwrap();

    let tree = builder.finish();
    let ImageNode::Region(region) = &tree.children[0] else {
        panic!("expected a region");
    };
    let [PathSegment::Arc(segment)] = region.segments.as_slice() else {
        panic!("expected a single arc");
    };
    assert_eq!(segment.direction, ArcDirection::Cw);
    assert_eq!(segment.center, dvec2(0.0, 0.0));

    let bbox = tree.bbox();
    insta::assert_debug_snapshot!("clockwise_three_quarter_arc", bbox);
}

#[test]
fn single_quadrant_clockwise_quarter() {
    common::init_tracing();
    let mut builder = PlotBuilder::new();
    let arc = Stroke::line(dvec2(10.0, 0.0), dvec2(0.0, 10.0), None)
        .with_interpolation(InterpolateMode::CwArc, Offsets::new(0.0, 10.0))
        .with_quadrant_mode(QuadrantMode::Single)
        .with_region_mode(true);
    builder.stroke(&arc).unwrap();

    assert_eq!(
        builder.finish().bbox(),
        BBox::new(0.0, 0.0, 10.0, 10.0)
    );
}

#[test]
fn hexagon_flash() {
    common::init_tracing();
    let tool = ToolShape::Polygon { diameter: 10.0, vertices: 6, rotation: None };
    let shape = plot_shape(&tool, None, dvec2(0.0, 0.0), &PlotOptions::default());
    let Shape::Polygon(polygon) = &shape else {
        panic!("expected a polygon");
    };

    let points: Vec<(f64, f64)> = polygon.points.iter().map(|p| (p.x, p.y)).collect();
    insta::assert_debug_snapshot!("hexagon_flash_points", points);

    let bbox = shape_bbox(&shape);
    insta::assert_debug_snapshot!("hexagon_flash_bbox", bbox);
}

#[test]
fn rectangular_tool_strokes() {
    common::init_tracing();
    let tool = Tool::rectangle(2.0, 1.0);
    let mut builder = PlotBuilder::new();
    builder
        .stroke(&Stroke::line(dvec2(0.0, 0.0), dvec2(4.0, 3.0), Some(&tool)))
        .unwrap();
    builder
        .stroke(&Stroke::line(dvec2(4.0, 3.0), dvec2(4.0, -3.0), Some(&tool)))
        .unwrap();
    let tree = builder.finish();

    assert_eq!(tree.len(), 2);
    let bbox = tree.bbox();
    insta::assert_debug_snapshot!("rectangular_tool_strokes", bbox);
}

#[test]
fn mixed_layer_node_order() {
    common::init_tracing();
    let round = Tool::circle(0.5);
    let square = Tool::rectangle(1.0, 1.0);
    let pad = Tool::obround(2.0, 1.0).with_hole(HoleShape::Circle { diameter: 0.4 });

    let mut builder = PlotBuilder::new();
    builder
        .stroke(&Stroke::line(dvec2(0.0, 0.0), dvec2(5.0, 0.0), Some(&round)))
        .unwrap();
    builder
        .stroke(&Stroke::line(dvec2(5.0, 0.0), dvec2(5.0, 5.0), Some(&round)))
        .unwrap();
    builder.flash(&pad, dvec2(5.0, 5.0));
    builder
        .stroke(&Stroke::line(dvec2(5.0, 5.0), dvec2(8.0, 5.0), Some(&square)))
        .unwrap();
    for (start, end) in [
        (dvec2(10.0, 0.0), dvec2(12.0, 0.0)),
        (dvec2(12.0, 0.0), dvec2(12.0, 2.0)),
        (dvec2(12.0, 2.0), dvec2(10.0, 0.0)),
    ] {
        builder
            .stroke(&Stroke::line(start, end, None).with_region_mode(true))
            .unwrap();
    }
    builder
        .stroke(&Stroke::line(dvec2(10.0, 0.0), dvec2(0.0, 0.0), Some(&round)))
        .unwrap();

    insta::assert_debug_snapshot!("mixed_layer_node_order", kinds(builder));
}

#[test]
fn unresolvable_single_quadrant_arc_is_reported() {
    common::init_tracing();
    let mut builder = PlotBuilder::new();
    let arc = Stroke::line(dvec2(0.0, 0.0), dvec2(3.0, 0.0), None)
        .with_interpolation(InterpolateMode::CcwArc, Offsets::new(1.0, 1.0))
        .with_quadrant_mode(QuadrantMode::Single);
    let err = builder.stroke(&arc).unwrap_err();

    let message = err.to_string();
    assert!(message.contains("counter-clockwise"), "{message}");
    assert!(message.contains("(i: 1, j: 1)"), "{message}");
    assert!(builder.finish().is_empty());
}
