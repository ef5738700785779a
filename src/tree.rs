//! Plot tree node types
//!
//! The tree is the resolution-independent output of the plotter: an ordered
//! list of stroked paths, filled regions and flashed shapes. Every node is a
//! plain value; nothing points back at its container.

use std::fmt;

use enum_dispatch::enum_dispatch;

use crate::types::{BBox, Position};

/// Travel direction of an arc
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArcDirection {
    Cw,
    Ccw,
}

impl fmt::Display for ArcDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArcDirection::Cw => f.write_str("clockwise"),
            ArcDirection::Ccw => f.write_str("counter-clockwise"),
        }
    }
}

// ============================================================================
// Path segments
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct LineSegment {
    pub start: Position,
    pub end: Position,
}

/// A circular arc.
///
/// `start_angle` and `end_angle` are the polar angles of the endpoints
/// around `center`, as returned by `atan2`. `sweep` is the angle travelled
/// in `direction`, in `(0, 2π]`; a full circle has `start == end` and a
/// sweep of exactly `2π`.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcSegment {
    pub start: Position,
    pub end: Position,
    pub center: Position,
    pub radius: f64,
    pub sweep: f64,
    pub direction: ArcDirection,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl ArcSegment {
    pub fn is_full_circle(&self) -> bool {
        self.sweep >= std::f64::consts::TAU
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PathSegment {
    Line(LineSegment),
    Arc(ArcSegment),
}

impl PathSegment {
    pub fn start(&self) -> Position {
        match self {
            PathSegment::Line(line) => line.start,
            PathSegment::Arc(arc) => arc.start,
        }
    }

    pub fn end(&self) -> Position {
        match self {
            PathSegment::Line(line) => line.end,
            PathSegment::Arc(arc) => arc.end,
        }
    }
}

// ============================================================================
// Paths and regions
// ============================================================================

/// A tool-width stroke along a centerline
#[derive(Debug, Clone, PartialEq)]
pub struct ImagePath {
    pub width: f64,
    pub segments: Vec<PathSegment>,
}

impl ImagePath {
    pub fn stroke_radius(&self) -> f64 {
        self.width / 2.0
    }
}

/// A filled boundary.
///
/// `region_mode` is false for convenience regions synthesized outside
/// region mode, such as the outline swept by a rectangular aperture.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageRegion {
    pub segments: Vec<PathSegment>,
    pub region_mode: bool,
}

/// The geometry that stays open between consecutive moves
#[derive(Debug, Clone, PartialEq)]
pub enum PathNode {
    Path(ImagePath),
    Region(ImageRegion),
}

impl PathNode {
    pub fn segments(&self) -> &[PathSegment] {
        match self {
            PathNode::Path(path) => &path.segments,
            PathNode::Region(region) => &region.segments,
        }
    }

    pub(crate) fn segments_mut(&mut self) -> &mut Vec<PathSegment> {
        match self {
            PathNode::Path(path) => &mut path.segments,
            PathNode::Region(region) => &mut region.segments,
        }
    }

    /// Half the stroke width; regions are filled, not stroked
    pub fn stroke_radius(&self) -> f64 {
        match self {
            PathNode::Path(path) => path.stroke_radius(),
            PathNode::Region(_) => 0.0,
        }
    }
}

// ============================================================================
// Shapes
// ============================================================================

/// Geometry every shape variant provides
#[enum_dispatch]
pub trait ShapeGeometry {
    /// Exact axis-aligned bounding box
    fn bbox(&self) -> BBox;

    /// Closed boundary as path segments, counter-clockwise where the shape
    /// defines an orientation
    fn to_segments(&self) -> Vec<PathSegment>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct CircleShape {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
}

/// Axis-aligned rectangle given by its lower-left corner
#[derive(Debug, Clone, PartialEq)]
pub struct RectangleShape {
    pub x: f64,
    pub y: f64,
    pub x_size: f64,
    pub y_size: f64,
    pub r: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PolygonShape {
    pub points: Vec<Position>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutlineShape {
    pub segments: Vec<PathSegment>,
}

/// Outline that clears whatever lies beneath it
#[derive(Debug, Clone, PartialEq)]
pub struct ClearOutlineShape {
    pub segments: Vec<PathSegment>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayeredShape {
    pub shapes: Vec<Shape>,
}

#[enum_dispatch(ShapeGeometry)]
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Circle(CircleShape),
    Rectangle(RectangleShape),
    Polygon(PolygonShape),
    Outline(OutlineShape),
    ClearOutline(ClearOutlineShape),
    Layered(LayeredShape),
}

// ============================================================================
// Tree
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum ImageNode {
    Path(ImagePath),
    Region(ImageRegion),
    Shape(Shape),
}

impl From<PathNode> for ImageNode {
    fn from(node: PathNode) -> Self {
        match node {
            PathNode::Path(path) => ImageNode::Path(path),
            PathNode::Region(region) => ImageNode::Region(region),
        }
    }
}

impl From<Shape> for ImageNode {
    fn from(shape: Shape) -> Self {
        ImageNode::Shape(shape)
    }
}

/// The plot tree of one layer
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImageTree {
    pub children: Vec<ImageNode>,
}

impl ImageTree {
    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ImageNode> {
        self.children.iter()
    }
}

impl<'a> IntoIterator for &'a ImageTree {
    type Item = &'a ImageNode;
    type IntoIter = std::slice::Iter<'a, ImageNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.iter()
    }
}
