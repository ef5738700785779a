//! Flashed apertures and shape bounding boxes

use glam::dvec2;

use crate::log;
use crate::tool::{HoleShape, Tool, ToolShape};
use crate::tree::{
    CircleShape, ClearOutlineShape, LayeredShape, OutlineShape, PathSegment, PolygonShape,
    RectangleShape, Shape, ShapeGeometry,
};
use crate::types::{BBox, Position};

use super::geometry;
use super::math::{TWO_PI, degrees_to_radians, round_to_precision};
use super::options::PlotOptions;
use super::path::segments_bbox;

/// Place an aperture at `position`.
///
/// With a hole, the result is an outline whose segments trace the outer
/// boundary followed by the hole boundary; renderers cut the hole out via
/// the fill rule.
pub fn plot_shape(
    shape: &ToolShape,
    hole: Option<&HoleShape>,
    position: Position,
    options: &PlotOptions,
) -> Shape {
    let outer = plot_aperture(shape, position, options);

    let Some(hole) = hole else {
        return outer;
    };

    let hole = plot_aperture(&ToolShape::from(*hole), position, options);
    log::debug!(%position, "punching hole");

    let mut segments = outer.to_segments();
    segments.extend(hole.to_segments());
    geometry::outline(segments)
}

/// Flash a tool at `position`
pub fn plot_tool(tool: &Tool, position: Position, options: &PlotOptions) -> Shape {
    plot_shape(&tool.shape, tool.hole.as_ref(), position, options)
}

/// Bounding box of any shape
pub fn shape_bbox(shape: &Shape) -> BBox {
    shape.bbox()
}

fn plot_aperture(shape: &ToolShape, position: Position, options: &PlotOptions) -> Shape {
    let (x, y) = (position.x, position.y);

    match *shape {
        ToolShape::Circle { diameter } => geometry::circle(x, y, diameter / 2.0),

        ToolShape::Rectangle { x_size, y_size } => {
            geometry::rectangle(x - x_size / 2.0, y - y_size / 2.0, x_size, y_size, None)
        }

        ToolShape::Obround { x_size, y_size } => {
            let (x_half, y_half) = (x_size / 2.0, y_size / 2.0);
            geometry::rectangle(x - x_half, y - y_half, x_size, y_size, Some(x_half.min(y_half)))
        }

        ToolShape::Polygon { diameter, vertices, rotation } => {
            let r = diameter / 2.0;
            let offset = degrees_to_radians(rotation.unwrap_or(0.0));
            let step = TWO_PI / f64::from(vertices);
            let precision = options.precision();

            let points = (0..vertices)
                .map(|i| {
                    let theta = step * f64::from(i) + offset;
                    dvec2(
                        round_to_precision(x + r * theta.cos(), precision),
                        round_to_precision(y + r * theta.sin(), precision),
                    )
                })
                .collect();
            geometry::polygon(points)
        }
    }
}

impl ShapeGeometry for CircleShape {
    fn bbox(&self) -> BBox {
        BBox::from_circle(self.cx, self.cy, self.r)
    }

    fn to_segments(&self) -> Vec<PathSegment> {
        geometry::circle_segments(self)
    }
}

impl ShapeGeometry for RectangleShape {
    fn bbox(&self) -> BBox {
        BBox::from_rectangle(self.x, self.y, self.x_size, self.y_size)
    }

    fn to_segments(&self) -> Vec<PathSegment> {
        geometry::rectangle_segments(self)
    }
}

impl ShapeGeometry for PolygonShape {
    fn bbox(&self) -> BBox {
        self.points.iter().copied().map(BBox::from_position).collect()
    }

    fn to_segments(&self) -> Vec<PathSegment> {
        geometry::polygon_segments(self)
    }
}

impl ShapeGeometry for OutlineShape {
    fn bbox(&self) -> BBox {
        segments_bbox(&self.segments, 0.0)
    }

    fn to_segments(&self) -> Vec<PathSegment> {
        self.segments.clone()
    }
}

impl ShapeGeometry for ClearOutlineShape {
    fn bbox(&self) -> BBox {
        segments_bbox(&self.segments, 0.0)
    }

    fn to_segments(&self) -> Vec<PathSegment> {
        self.segments.clone()
    }
}

impl ShapeGeometry for LayeredShape {
    fn bbox(&self) -> BBox {
        self.shapes.iter().map(Shape::bbox).collect()
    }

    fn to_segments(&self) -> Vec<PathSegment> {
        self.shapes.iter().flat_map(Shape::to_segments).collect()
    }
}
