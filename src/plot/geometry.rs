//! Geometry primitives: segment and shape constructors, and the boundary
//! of every closed shape as path segments (used for hole punching).

use glam::dvec2;

use crate::tree::{
    ArcDirection, ArcSegment, CircleShape, ClearOutlineShape, LayeredShape, LineSegment,
    OutlineShape, PathSegment, PolygonShape, RectangleShape, Shape, ShapeGeometry,
};
use crate::types::Position;

use super::math::{HALF_PI, TWO_PI, polar_angle, positions_equal};

/// Straight segment, or `None` when both ends coincide
pub fn line(start: Position, end: Position) -> Option<PathSegment> {
    if positions_equal(start, end) {
        None
    } else {
        Some(PathSegment::Line(LineSegment { start, end }))
    }
}

/// Arc segment with endpoint angles derived from `center`
pub fn arc(
    start: Position,
    end: Position,
    center: Position,
    radius: f64,
    sweep: f64,
    direction: ArcDirection,
) -> PathSegment {
    PathSegment::Arc(ArcSegment {
        start,
        end,
        center,
        radius,
        sweep,
        direction,
        start_angle: polar_angle(center, start),
        end_angle: polar_angle(center, end),
    })
}

pub fn circle(cx: f64, cy: f64, r: f64) -> Shape {
    CircleShape { cx, cy, r }.into()
}

pub fn rectangle(x: f64, y: f64, x_size: f64, y_size: f64, r: Option<f64>) -> Shape {
    RectangleShape { x, y, x_size, y_size, r }.into()
}

pub fn polygon(points: Vec<Position>) -> Shape {
    PolygonShape { points }.into()
}

pub fn outline(segments: Vec<PathSegment>) -> Shape {
    OutlineShape { segments }.into()
}

pub fn clear_outline(segments: Vec<PathSegment>) -> Shape {
    ClearOutlineShape { segments }.into()
}

pub fn layered(shapes: Vec<Shape>) -> Shape {
    LayeredShape { shapes }.into()
}

/// Boundary of any shape as path segments
pub fn shape_to_segments(shape: &Shape) -> Vec<PathSegment> {
    shape.to_segments()
}

/// One full counter-clockwise turn starting on the positive x axis
pub(crate) fn circle_segments(circle: &CircleShape) -> Vec<PathSegment> {
    let center = dvec2(circle.cx, circle.cy);
    let start = dvec2(circle.cx + circle.r, circle.cy);
    vec![arc(start, start, center, circle.r, TWO_PI, ArcDirection::Ccw)]
}

pub(crate) fn rectangle_segments(rect: &RectangleShape) -> Vec<PathSegment> {
    let (x0, y0) = (rect.x, rect.y);
    let (x1, y1) = (rect.x + rect.x_size, rect.y + rect.y_size);
    let r = rect
        .r
        .unwrap_or(0.0)
        .min(rect.x_size.abs() / 2.0)
        .min(rect.y_size.abs() / 2.0);

    if r <= 0.0 {
        let corners = [dvec2(x0, y0), dvec2(x1, y0), dvec2(x1, y1), dvec2(x0, y1)];
        return ring(&corners);
    }

    // Bottom edge first, then each corner arc after the edge leading into it
    let corner = |center: Position, start: Position, end: Position| {
        arc(start, end, center, r, HALF_PI, ArcDirection::Ccw)
    };
    [
        line(dvec2(x0 + r, y0), dvec2(x1 - r, y0)),
        Some(corner(dvec2(x1 - r, y0 + r), dvec2(x1 - r, y0), dvec2(x1, y0 + r))),
        line(dvec2(x1, y0 + r), dvec2(x1, y1 - r)),
        Some(corner(dvec2(x1 - r, y1 - r), dvec2(x1, y1 - r), dvec2(x1 - r, y1))),
        line(dvec2(x1 - r, y1), dvec2(x0 + r, y1)),
        Some(corner(dvec2(x0 + r, y1 - r), dvec2(x0 + r, y1), dvec2(x0, y1 - r))),
        line(dvec2(x0, y1 - r), dvec2(x0, y0 + r)),
        Some(corner(dvec2(x0 + r, y0 + r), dvec2(x0, y0 + r), dvec2(x0 + r, y0))),
    ]
    .into_iter()
    .flatten()
    .collect()
}

pub(crate) fn polygon_segments(polygon: &PolygonShape) -> Vec<PathSegment> {
    ring(&polygon.points)
}

/// Closed ring of lines through `points`, skipping zero-length edges
pub(crate) fn ring(points: &[Position]) -> Vec<PathSegment> {
    points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .filter_map(|(&start, &end)| line(start, end))
        .collect()
}
