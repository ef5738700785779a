//! Plot tree geometry for PCB fabrication layers.
//!
//! Typed photoplotter directives (tool selection, linear and circular
//! interpolation, region fills, flashes) go in; an [`ImageTree`] of stroked
//! paths, filled regions and flashed shapes comes out, with exact
//! axis-aligned bounding boxes for every node.
//!
//! ```
//! use glam::dvec2;
//! use pcbplot::{PlotBuilder, Stroke, Tool};
//!
//! let tool = Tool::circle(1.0);
//! let mut builder = PlotBuilder::new();
//! builder.stroke(&Stroke::line(dvec2(0.0, 0.0), dvec2(10.0, 0.0), Some(&tool)))?;
//! builder.flash(&tool, dvec2(10.0, 0.0));
//!
//! let tree = builder.finish();
//! assert_eq!(tree.len(), 2);
//! assert_eq!(tree.bbox().width(), 11.0);
//! # Ok::<(), pcbplot::PlotError>(())
//! ```

pub mod errors;
mod log;
pub mod plot;
pub mod tool;
pub mod tree;
pub mod types;

pub use errors::{PlotError, PlotWarning};
pub use plot::{PlotBuilder, PlotOptions, Stroke};
pub use tool::{HoleShape, InterpolateMode, QuadrantMode, Tool, ToolShape};
pub use tree::{
    ArcDirection, ArcSegment, ImageNode, ImagePath, ImageRegion, ImageTree, LineSegment,
    PathNode, PathSegment, Shape, ShapeGeometry,
};
pub use types::{BBox, NumericError, Offsets, Position};
