//! Plot tree construction.
//!
//! [`PlotBuilder`] is driven by the directive interpreter: one call per
//! interpolation move or flash, in order. It owns the node list and the one
//! path that may still be growing.

use crate::errors::{PlotError, PlotWarning};
use crate::tool::Tool;
use crate::tree::{ImageNode, ImageTree, PathNode, Shape, ShapeGeometry};
use crate::types::{BBox, Position};

use super::options::PlotOptions;
use super::path::{Stroke, add_segment_to_path};
use super::shape::plot_tool;

#[derive(Debug, Default)]
pub struct PlotBuilder {
    options: PlotOptions,
    children: Vec<ImageNode>,
    open: Option<PathNode>,
    warnings: Vec<PlotWarning>,
}

impl PlotBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: PlotOptions) -> Self {
        Self { options, ..Self::default() }
    }

    pub fn options(&self) -> &PlotOptions {
        &self.options
    }

    /// The path or region still accepting segments
    pub fn open_path(&self) -> Option<&PathNode> {
        self.open.as_ref()
    }

    /// Nodes sealed so far, excluding the open path
    pub fn children(&self) -> &[ImageNode] {
        &self.children
    }

    /// Anomalies absorbed while plotting, in directive order
    pub fn warnings(&self) -> &[PlotWarning] {
        &self.warnings
    }

    /// Plot one interpolation move.
    ///
    /// On error nothing changes: the open path stays open and the failed
    /// move adds no geometry.
    pub fn stroke(&mut self, stroke: &Stroke<'_>) -> Result<(), PlotError> {
        let step = add_segment_to_path(&mut self.open, stroke, &self.options)?;
        self.children.extend(step.sealed.map(ImageNode::from));
        self.warnings.extend(step.warnings);
        Ok(())
    }

    /// Flash `tool` at `position`, sealing any open path first
    pub fn flash(&mut self, tool: &Tool, position: Position) {
        self.close_path();
        let shape = plot_tool(tool, position, &self.options);
        self.children.push(shape.into());
    }

    /// Append an already plotted shape, sealing any open path first
    pub fn add_shape(&mut self, shape: Shape) {
        self.close_path();
        self.children.push(shape.into());
    }

    /// Seal the open path, if any
    pub fn close_path(&mut self) {
        if let Some(open) = self.open.take() {
            self.children.push(open.into());
        }
    }

    pub fn finish(mut self) -> ImageTree {
        self.close_path();
        ImageTree { children: self.children }
    }
}

impl ImageNode {
    pub fn bbox(&self) -> BBox {
        match self {
            ImageNode::Path(path) => path.bbox(),
            ImageNode::Region(region) => region.bbox(),
            ImageNode::Shape(shape) => shape.bbox(),
        }
    }
}

impl ImageTree {
    /// Union of every node's box; empty for an empty tree
    pub fn bbox(&self) -> BBox {
        self.iter().map(ImageNode::bbox).collect()
    }
}
