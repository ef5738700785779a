//! Value types shared by the plotter: positions, arc offsets and boxes.
//!
//! Coordinates are already-resolved real-world units. Nothing here knows
//! about file formats or scaling.

use std::fmt;

use glam::DVec2;

/// A point in the plane.
///
/// Arc endpoints additionally carry their polar angle around the arc
/// center, stored next to the position on [`crate::tree::ArcSegment`].
pub type Position = DVec2;

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is negative when non-negative required
    Negative,
    /// Value exceeds the supported maximum
    TooLarge { max: f64 },
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Negative => write!(f, "value is negative"),
            NumericError::TooLarge { max } => write!(f, "value is larger than {}", max),
        }
    }
}

impl std::error::Error for NumericError {}

/// Validate a finite, non-negative value
pub(crate) fn check_non_negative(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else if val < 0.0 {
        Err(NumericError::Negative)
    } else {
        Ok(val)
    }
}

/// Arc center displacement `(i, j)` as given by the directive stream.
///
/// In multi-quadrant mode this is the signed offset from the arc start to
/// its center. In single-quadrant mode only the magnitudes are meaningful.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Offsets {
    pub i: f64,
    pub j: f64,
}

impl Offsets {
    pub fn new(i: f64, j: f64) -> Self {
        Offsets { i, j }
    }

    /// The offset as a displacement vector
    pub fn to_vec(self) -> DVec2 {
        DVec2::new(self.i, self.j)
    }
}

impl fmt::Display for Offsets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(i: {}, j: {})", self.i, self.j)
    }
}

/// Axis-aligned bounding box.
///
/// The empty box has inverted infinite bounds, so it absorbs into any union
/// and never contributes extent of its own.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BBox {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl BBox {
    pub const EMPTY: BBox = BBox {
        x_min: f64::INFINITY,
        y_min: f64::INFINITY,
        x_max: f64::NEG_INFINITY,
        y_max: f64::NEG_INFINITY,
    };

    pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Self {
        BBox { x_min, y_min, x_max, y_max }
    }

    /// Create an empty bounding box (will expand on first union)
    pub fn empty() -> Self {
        Self::EMPTY
    }

    /// Box of a circle of radius `r` centered at `(cx, cy)`
    pub fn from_circle(cx: f64, cy: f64, r: f64) -> Self {
        BBox {
            x_min: cx - r,
            y_min: cy - r,
            x_max: cx + r,
            y_max: cy + r,
        }
    }

    /// Box of a rectangle given by its lower-left corner and size
    pub fn from_rectangle(x: f64, y: f64, x_size: f64, y_size: f64) -> Self {
        BBox {
            x_min: x.min(x + x_size),
            y_min: y.min(y + y_size),
            x_max: x.max(x + x_size),
            y_max: y.max(y + y_size),
        }
    }

    /// Zero-area box at a single position
    pub fn from_position(p: Position) -> Self {
        BBox {
            x_min: p.x,
            y_min: p.y,
            x_max: p.x,
            y_max: p.y,
        }
    }

    /// Check if the bbox is empty (never expanded)
    pub fn is_empty(&self) -> bool {
        self.x_min > self.x_max || self.y_min > self.y_max
    }

    /// Smallest box containing both boxes
    pub fn union(self, other: BBox) -> BBox {
        BBox {
            x_min: self.x_min.min(other.x_min),
            y_min: self.y_min.min(other.y_min),
            x_max: self.x_max.max(other.x_max),
            y_max: self.y_max.max(other.y_max),
        }
    }

    /// Expand to include a position
    pub fn add_position(self, p: Position) -> BBox {
        self.union(BBox::from_position(p))
    }

    pub fn width(&self) -> f64 {
        if self.is_empty() { 0.0 } else { self.x_max - self.x_min }
    }

    pub fn height(&self) -> f64 {
        if self.is_empty() { 0.0 } else { self.y_max - self.y_min }
    }

    /// Get the center point, or `None` for the empty box
    pub fn center(&self) -> Option<Position> {
        if self.is_empty() {
            None
        } else {
            Some(DVec2::new(
                (self.x_min + self.x_max) / 2.0,
                (self.y_min + self.y_max) / 2.0,
            ))
        }
    }

    /// Compare two boxes component-wise within `epsilon`.
    /// Two empty boxes are equal regardless of representation.
    pub fn approx_eq(&self, other: &BBox, epsilon: f64) -> bool {
        if self.is_empty() || other.is_empty() {
            return self.is_empty() && other.is_empty();
        }
        (self.x_min - other.x_min).abs() <= epsilon
            && (self.y_min - other.y_min).abs() <= epsilon
            && (self.x_max - other.x_max).abs() <= epsilon
            && (self.y_max - other.y_max).abs() <= epsilon
    }
}

impl Default for BBox {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl FromIterator<BBox> for BBox {
    fn from_iter<I: IntoIterator<Item = BBox>>(iter: I) -> Self {
        iter.into_iter().fold(BBox::EMPTY, BBox::union)
    }
}
