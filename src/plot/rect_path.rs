//! Strokes of rectangular apertures.
//!
//! A rectangle dragged along a line sweeps the convex hull of the aperture
//! placed at both ends. That hull is emitted as a standalone convenience
//! region, one per move, rather than accumulated into a stroked path.

use glam::dvec2;

use crate::tree::ImageRegion;
use crate::types::Position;

use super::geometry::ring;
use super::math::{HALF_PI, PI};

/// Outline swept by an `x_size` by `y_size` rectangle moving from `start`
/// to `end`, counter-clockwise. Axis-aligned moves give collinear hull
/// vertices; zero-length moves give the plain rectangle.
pub fn plot_rect_path(start: Position, end: Position, x_size: f64, y_size: f64) -> ImageRegion {
    let (x_half, y_half) = (x_size / 2.0, y_size / 2.0);
    let (sx_min, sx_max) = (start.x - x_half, start.x + x_half);
    let (sy_min, sy_max) = (start.y - y_half, start.y + y_half);
    let (ex_min, ex_max) = (end.x - x_half, end.x + x_half);
    let (ey_min, ey_max) = (end.y - y_half, end.y + y_half);

    let delta = end - start;
    let theta = delta.y.atan2(delta.x);

    // The two corners of the start rectangle facing away from the travel
    // direction and the opposite two of the end rectangle stay on the hull
    let points = if (0.0..HALF_PI).contains(&theta) {
        [
            dvec2(sx_min, sy_min),
            dvec2(sx_max, sy_min),
            dvec2(ex_max, ey_min),
            dvec2(ex_max, ey_max),
            dvec2(ex_min, ey_max),
            dvec2(sx_min, sy_max),
        ]
    } else if (HALF_PI..=PI).contains(&theta) {
        [
            dvec2(sx_max, sy_min),
            dvec2(sx_max, sy_max),
            dvec2(ex_max, ey_max),
            dvec2(ex_min, ey_max),
            dvec2(ex_min, ey_min),
            dvec2(sx_min, sy_min),
        ]
    } else if (-PI..-HALF_PI).contains(&theta) {
        [
            dvec2(sx_max, sy_max),
            dvec2(sx_min, sy_max),
            dvec2(ex_min, ey_max),
            dvec2(ex_min, ey_min),
            dvec2(ex_max, ey_min),
            dvec2(sx_max, sy_min),
        ]
    } else {
        [
            dvec2(sx_min, sy_max),
            dvec2(sx_min, sy_min),
            dvec2(ex_min, ey_min),
            dvec2(ex_max, ey_min),
            dvec2(ex_max, ey_max),
            dvec2(sx_max, sy_max),
        ]
    };

    ImageRegion {
        segments: ring(&points),
        region_mode: false,
    }
}
