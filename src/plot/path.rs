//! Path plotting: when to break a stroke, how to extend it, and its box.
//!
//! The open path lives in a caller-owned slot: [`add_segment_to_path`]
//! extends it in place and returns any path the move forced closed.

use crate::errors::{PlotError, PlotWarning};
use crate::log;
use crate::tool::{InterpolateMode, QuadrantMode, Tool};
use crate::tree::{ArcDirection, ImagePath, ImageRegion, PathNode, PathSegment};
use crate::types::{BBox, Offsets, Position};

use super::arc_segment::{make_arc_segment, radius_mismatch};
use super::geometry;
use super::math::{limit_angle, rotate_quadrant};
use super::options::PlotOptions;
use super::rect_path::plot_rect_path;

/// One interpolation move and the plotter state it happens in
#[derive(Debug, Clone, Copy)]
pub struct Stroke<'a> {
    pub start: Position,
    pub end: Position,
    pub offsets: Offsets,
    pub tool: Option<&'a Tool>,
    /// `None` when no interpolation mode has been set; such moves draw nothing
    pub interpolate_mode: Option<InterpolateMode>,
    pub region_mode: bool,
    pub quadrant_mode: QuadrantMode,
}

impl<'a> Stroke<'a> {
    /// Linear move with a tool, outside region mode
    pub fn line(start: Position, end: Position, tool: Option<&'a Tool>) -> Self {
        Self {
            start,
            end,
            offsets: Offsets::default(),
            tool,
            interpolate_mode: Some(InterpolateMode::Line),
            region_mode: false,
            quadrant_mode: QuadrantMode::default(),
        }
    }

    pub fn with_interpolation(mut self, mode: InterpolateMode, offsets: Offsets) -> Self {
        self.interpolate_mode = Some(mode);
        self.offsets = offsets;
        self
    }

    pub fn with_region_mode(mut self, region_mode: bool) -> Self {
        self.region_mode = region_mode;
        self
    }

    pub fn with_quadrant_mode(mut self, quadrant_mode: QuadrantMode) -> Self {
        self.quadrant_mode = quadrant_mode;
        self
    }
}

/// Why an open path has to be sealed before the next move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakReason {
    /// Region mode switched off under an open region, or on under a path
    RegionModeChanged,
    /// A convenience region is open but a real region is starting
    RealRegionStarted,
    /// The circular tool's diameter differs from the path width
    WidthChanged,
    /// Rectangular strokes are never accumulated
    RectangularTool,
}

/// The first rule that forces `path` to close, if any
pub fn break_reason(path: &PathNode, tool: Option<&Tool>, region_mode: bool) -> Option<BreakReason> {
    match path {
        PathNode::Region(_) if !region_mode => return Some(BreakReason::RegionModeChanged),
        PathNode::Path(_) if region_mode => return Some(BreakReason::RegionModeChanged),
        PathNode::Region(region) if !region.region_mode => {
            return Some(BreakReason::RealRegionStarted);
        }
        _ => {}
    }

    if let (PathNode::Path(open), Some(diameter)) = (path, tool.and_then(Tool::circle_diameter)) {
        if diameter != open.width {
            return Some(BreakReason::WidthChanged);
        }
    }

    if !region_mode && tool.and_then(Tool::rectangle_size).is_some() {
        return Some(BreakReason::RectangularTool);
    }

    None
}

/// Whether `path` must be closed before more geometry is added
pub fn path_finished(path: &PathNode, tool: Option<&Tool>, region_mode: bool) -> bool {
    break_reason(path, tool, region_mode).is_some()
}

/// Standalone region swept by a rectangular tool outside region mode
pub fn rect_stroke(stroke: &Stroke<'_>) -> Option<ImageRegion> {
    if stroke.region_mode {
        return None;
    }
    let (x_size, y_size) = stroke.tool.and_then(Tool::rectangle_size)?;
    log::debug!(start = %stroke.start, end = %stroke.end, x_size, y_size, "rectangular stroke");
    Some(plot_rect_path(stroke.start, stroke.end, x_size, y_size))
}

/// The segment drawn by a move, or `None` when it draws nothing
pub fn stroke_segment(stroke: &Stroke<'_>, options: &PlotOptions) -> Result<Option<PathSegment>, PlotError> {
    let Some(mode) = stroke.interpolate_mode else {
        log::debug!("move without interpolation mode draws nothing");
        return Ok(None);
    };

    let segment = match mode.arc_direction() {
        None => geometry::line(stroke.start, stroke.end),
        Some(direction) => make_arc_segment(
            stroke.start,
            stroke.end,
            stroke.offsets,
            direction,
            stroke.quadrant_mode,
            options,
        )?,
    };

    if segment.is_none() {
        log::debug!(start = %stroke.start, end = %stroke.end, "degenerate move draws nothing");
    }
    Ok(segment)
}

/// Append `segment` to `path`, opening a new path or region when there is
/// none. A new path takes the circular tool's diameter as its width, or zero.
pub fn append_segment(path: Option<PathNode>, segment: Option<PathSegment>, stroke: &Stroke<'_>) -> PathNode {
    let mut path = path.unwrap_or_else(|| {
        if stroke.region_mode {
            PathNode::Region(ImageRegion { segments: Vec::new(), region_mode: true })
        } else {
            let width = stroke.tool.and_then(Tool::circle_diameter).unwrap_or(0.0);
            PathNode::Path(ImagePath { width, segments: Vec::new() })
        }
    });

    if let Some(segment) = segment {
        path.segments_mut().push(segment);
    }
    path
}

/// What one move did to the open path
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathStep {
    /// The previously open path, when the move forced it to close
    pub sealed: Option<PathNode>,
    /// Absorbed anomalies in the move's geometry
    pub warnings: Vec<PlotWarning>,
}

/// Plot one move into the `open` path slot.
///
/// Seals the open path when [`break_reason`] demands it and hands it back
/// in [`PathStep::sealed`], then extends or replaces the slot. Rectangular
/// tools outside region mode never accumulate: the slot receives a fresh
/// convenience region, which the next move seals. On error `open` is left
/// untouched.
pub fn add_segment_to_path(
    open: &mut Option<PathNode>,
    stroke: &Stroke<'_>,
    options: &PlotOptions,
) -> Result<PathStep, PlotError> {
    // Compute before sealing so a failed arc leaves the slot untouched
    let rect = rect_stroke(stroke);
    let segment = match rect {
        Some(_) => None,
        None => stroke_segment(stroke, options)?,
    };

    let mut step = PathStep::default();
    if let Some(PathSegment::Arc(arc)) = &segment {
        step.warnings.extend(radius_mismatch(arc, options));
    }

    let reason = open
        .as_ref()
        .and_then(|path| break_reason(path, stroke.tool, stroke.region_mode));
    if let Some(reason) = reason {
        log::debug!(?reason, "sealing open path");
        step.sealed = open.take();
    }

    *open = Some(match rect {
        Some(region) => PathNode::Region(region),
        None => append_segment(open.take(), segment, stroke),
    });
    Ok(step)
}

/// Bounding box of a path or region, including half the stroke width
pub fn path_bbox(path: &PathNode) -> BBox {
    match path {
        PathNode::Path(path) => path.bbox(),
        PathNode::Region(region) => region.bbox(),
    }
}

impl ImagePath {
    pub fn bbox(&self) -> BBox {
        segments_bbox(&self.segments, self.stroke_radius())
    }
}

impl ImageRegion {
    pub fn bbox(&self) -> BBox {
        segments_bbox(&self.segments, 0.0)
    }
}

impl PathNode {
    pub fn bbox(&self) -> BBox {
        path_bbox(self)
    }
}

/// Union of circles of `stroke_radius` around every extremal point of the
/// segments: their endpoints, plus each axis crossing an arc passes.
pub fn segments_bbox(segments: &[PathSegment], stroke_radius: f64) -> BBox {
    segments
        .iter()
        .flat_map(key_points)
        .map(|p| BBox::from_circle(p.x, p.y, stroke_radius))
        .collect()
}

fn key_points(segment: &PathSegment) -> Vec<Position> {
    let mut points = vec![segment.start(), segment.end()];

    let PathSegment::Arc(arc) = segment else {
        return points;
    };

    let full_circle = arc.is_full_circle();
    let (center, r) = (arc.center, arc.radius);

    // Walk the span counter-clockwise from its first endpoint
    let (mut theta_start, mut theta_end) = match arc.direction {
        ArcDirection::Ccw => (arc.start_angle, arc.end_angle),
        ArcDirection::Cw => (arc.end_angle, arc.start_angle),
    };
    theta_start = limit_angle(theta_start);
    theta_end = limit_angle(theta_end);

    // +x, +y, -x, -y; each rotation brings the next axis to angle zero,
    // and a span that wraps past zero crosses it
    let axis_points = [
        Position::new(center.x + r, center.y),
        Position::new(center.x, center.y + r),
        Position::new(center.x - r, center.y),
        Position::new(center.x, center.y - r),
    ];
    for axis_point in axis_points {
        if full_circle || theta_start > theta_end {
            points.push(axis_point);
        }
        theta_start = rotate_quadrant(theta_start);
        theta_end = rotate_quadrant(theta_end);
    }

    points
}
