//! Tool definitions and interpolation state handed over by the directive
//! parser.

use std::fmt;

use crate::log;
use crate::tree::ArcDirection;

/// Aperture shape of a tool
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToolShape {
    Circle { diameter: f64 },
    Rectangle { x_size: f64, y_size: f64 },
    /// Rectangle whose corner radius is the smaller half-dimension
    Obround { x_size: f64, y_size: f64 },
    /// Regular polygon; `rotation` is in degrees
    Polygon { diameter: f64, vertices: u32, rotation: Option<f64> },
}

impl ToolShape {
    fn kind(&self) -> &'static str {
        match self {
            ToolShape::Circle { .. } => "circle",
            ToolShape::Rectangle { .. } => "rectangle",
            ToolShape::Obround { .. } => "obround",
            ToolShape::Polygon { .. } => "polygon",
        }
    }
}

impl fmt::Display for ToolShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind())
    }
}

/// A hole punched through a flashed aperture.
///
/// Holes never carry holes of their own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HoleShape {
    Circle { diameter: f64 },
    Rectangle { x_size: f64, y_size: f64 },
}

impl TryFrom<ToolShape> for HoleShape {
    /// The rejected shape is handed back
    type Error = ToolShape;

    fn try_from(shape: ToolShape) -> Result<Self, Self::Error> {
        match shape {
            ToolShape::Circle { diameter } => Ok(HoleShape::Circle { diameter }),
            ToolShape::Rectangle { x_size, y_size } => Ok(HoleShape::Rectangle { x_size, y_size }),
            other => Err(other),
        }
    }
}

impl From<HoleShape> for ToolShape {
    fn from(hole: HoleShape) -> Self {
        match hole {
            HoleShape::Circle { diameter } => ToolShape::Circle { diameter },
            HoleShape::Rectangle { x_size, y_size } => ToolShape::Rectangle { x_size, y_size },
        }
    }
}

/// The active tool: an aperture plus an optional hole
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tool {
    pub shape: ToolShape,
    pub hole: Option<HoleShape>,
}

impl Tool {
    /// Create a tool from parsed shapes.
    ///
    /// A hole that is neither a circle nor a rectangle is dropped and the
    /// tool behaves as if no hole had been given.
    pub fn new(shape: ToolShape, hole: Option<ToolShape>) -> Self {
        let hole = hole.and_then(|h| match HoleShape::try_from(h) {
            Ok(hole) => Some(hole),
            Err(rejected) => {
                log::warn!(%rejected, "ignoring hole that is not a circle or rectangle");
                None
            }
        });
        Self { shape, hole }
    }

    pub fn circle(diameter: f64) -> Self {
        Self::new(ToolShape::Circle { diameter }, None)
    }

    pub fn rectangle(x_size: f64, y_size: f64) -> Self {
        Self::new(ToolShape::Rectangle { x_size, y_size }, None)
    }

    pub fn obround(x_size: f64, y_size: f64) -> Self {
        Self::new(ToolShape::Obround { x_size, y_size }, None)
    }

    pub fn polygon(diameter: f64, vertices: u32, rotation: Option<f64>) -> Self {
        Self::new(ToolShape::Polygon { diameter, vertices, rotation }, None)
    }

    pub fn with_hole(mut self, hole: HoleShape) -> Self {
        self.hole = Some(hole);
        self
    }

    /// Stroke width of a circular tool, `None` for every other aperture
    pub fn circle_diameter(&self) -> Option<f64> {
        match self.shape {
            ToolShape::Circle { diameter } => Some(diameter),
            _ => None,
        }
    }

    /// Size of a plain rectangular aperture
    pub fn rectangle_size(&self) -> Option<(f64, f64)> {
        match self.shape {
            ToolShape::Rectangle { x_size, y_size } => Some((x_size, y_size)),
            _ => None,
        }
    }
}

/// Interpolation mode of a move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterpolateMode {
    Line,
    CwArc,
    CcwArc,
}

impl InterpolateMode {
    /// Arc direction, or `None` for linear moves
    pub fn arc_direction(self) -> Option<ArcDirection> {
        match self {
            InterpolateMode::Line => None,
            InterpolateMode::CwArc => Some(ArcDirection::Cw),
            InterpolateMode::CcwArc => Some(ArcDirection::Ccw),
        }
    }
}

/// Convention for interpreting arc center offsets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuadrantMode {
    /// Unsigned offsets, arcs span at most a quarter turn
    Single,
    /// Signed offsets from the arc start
    #[default]
    Multi,
}
