//! Plot tree geometry engine
//!
//! This module is organized into submodules:
//! - `defaults`: Default tolerances and precision
//! - `options`: Validated plotter configuration
//! - `math`: Angle normalization and rounding
//! - `geometry`: Segment and shape constructors, shape boundaries
//! - `arc_segment`: Arc center resolution in both quadrant modes
//! - `rect_path`: Strokes of rectangular apertures
//! - `path`: Path breaking, accumulation and path boxes
//! - `shape`: Flashed apertures and shape boxes
//! - `builder`: Plot tree construction

pub mod arc_segment;
pub mod builder;
pub mod defaults;
pub mod geometry;
pub mod math;
pub mod options;
pub mod path;
pub mod rect_path;
pub mod shape;

// Re-export commonly used items
pub use arc_segment::{make_arc_segment, radius_mismatch};
pub use builder::PlotBuilder;
pub use geometry::shape_to_segments;
pub use options::PlotOptions;
pub use path::{
    BreakReason, PathStep, Stroke, add_segment_to_path, path_bbox, path_finished, segments_bbox,
};
pub use rect_path::plot_rect_path;
pub use shape::{plot_shape, plot_tool, shape_bbox};
