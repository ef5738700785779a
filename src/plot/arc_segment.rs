//! Arc segment construction from interpolation moves.
//!
//! Multi-quadrant offsets are signed and locate the center directly.
//! Single-quadrant offsets are unsigned, so the center is one of up to four
//! candidates; the candidate must be equidistant from both endpoints and
//! reach the end within a quarter turn in the stated direction.

use glam::{DVec2, dvec2};

use crate::errors::{PlotError, PlotWarning};
use crate::log;
use crate::tool::QuadrantMode;
use crate::tree::{ArcDirection, ArcSegment, PathSegment};
use crate::types::{Offsets, Position};

use super::defaults::POINT_EPSILON;
use super::geometry;
use super::math::{HALF_PI, TWO_PI, polar_angle, positions_equal, sweep_angle};
use super::options::PlotOptions;

/// Build the arc travelled from `start` to `end`.
///
/// Returns `Ok(None)` for degenerate arcs that draw nothing: a zero radius,
/// or coincident endpoints in single-quadrant mode. Coincident endpoints in
/// multi-quadrant mode are a full circle.
pub fn make_arc_segment(
    start: Position,
    end: Position,
    offsets: Offsets,
    direction: ArcDirection,
    quadrant_mode: QuadrantMode,
    options: &PlotOptions,
) -> Result<Option<PathSegment>, PlotError> {
    match quadrant_mode {
        QuadrantMode::Multi => Ok(multi_quadrant_arc(start, end, offsets, direction, options)),
        QuadrantMode::Single => single_quadrant_arc(start, end, offsets, direction, options),
    }
}

fn multi_quadrant_arc(
    start: Position,
    end: Position,
    offsets: Offsets,
    direction: ArcDirection,
    options: &PlotOptions,
) -> Option<PathSegment> {
    let center = start + offsets.to_vec();
    let radius = start.distance(center);
    if radius <= POINT_EPSILON {
        log::debug!(%start, %end, "dropping arc with zero radius");
        return None;
    }

    if positions_equal(start, end) {
        return Some(geometry::arc(start, end, center, radius, TWO_PI, direction));
    }

    let sweep = sweep_angle(polar_angle(center, start), polar_angle(center, end), direction);
    let segment = geometry::arc(start, end, center, radius, sweep, direction);
    if let PathSegment::Arc(arc) = &segment {
        if let Some(warning) = radius_mismatch(arc, options) {
            log::warn!(%warning, "using the start radius");
        }
    }
    Some(segment)
}

/// Report an arc whose end lies off the circle through its start
pub fn radius_mismatch(arc: &ArcSegment, options: &PlotOptions) -> Option<PlotWarning> {
    let end_radius = arc.end.distance(arc.center);
    if (arc.radius - end_radius).abs() <= options.arc_tolerance_for(arc.radius) {
        return None;
    }
    Some(PlotWarning::ArcRadiusMismatch {
        start: arc.start,
        end: arc.end,
        center: arc.center,
        start_radius: arc.radius,
        end_radius,
    })
}

/// A center that fits both endpoints
struct Candidate {
    center: DVec2,
    radius: f64,
    sweep: f64,
    mismatch: f64,
}

fn single_quadrant_arc(
    start: Position,
    end: Position,
    offsets: Offsets,
    direction: ArcDirection,
    options: &PlotOptions,
) -> Result<Option<PathSegment>, PlotError> {
    if positions_equal(start, end) {
        log::debug!(%start, "dropping zero-length single-quadrant arc");
        return Ok(None);
    }

    let (i, j) = (offsets.i.abs(), offsets.j.abs());
    if i <= POINT_EPSILON && j <= POINT_EPSILON {
        log::debug!(%start, %end, "dropping arc with zero radius");
        return Ok(None);
    }

    let candidates = [dvec2(i, j), dvec2(-i, j), dvec2(i, -j), dvec2(-i, -j)];
    let mut best: Option<Candidate> = None;

    for offset in candidates {
        let center = start + offset;
        let radius = start.distance(center);
        let tolerance = options.arc_tolerance_for(radius);

        let mismatch = (radius - end.distance(center)).abs();
        if mismatch > tolerance {
            continue;
        }

        let sweep = sweep_angle(polar_angle(center, start), polar_angle(center, end), direction);
        if sweep > HALF_PI + tolerance / radius {
            continue;
        }

        if best.as_ref().is_none_or(|b| mismatch < b.mismatch) {
            best = Some(Candidate { center, radius, sweep, mismatch });
        }
    }

    match best {
        Some(Candidate { center, radius, sweep, .. }) => {
            log::debug!(%center, radius, sweep, "single-quadrant arc center selected");
            Ok(Some(geometry::arc(start, end, center, radius, sweep, direction)))
        }
        None => Err(PlotError::ArcCenterNotFound { start, end, offsets, direction }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn build(
        start: Position,
        end: Position,
        offsets: Offsets,
        direction: ArcDirection,
        mode: QuadrantMode,
    ) -> Result<Option<ArcSegment>, PlotError> {
        make_arc_segment(start, end, offsets, direction, mode, &PlotOptions::default()).map(
            |segment| {
                segment.map(|s| match s {
                    PathSegment::Arc(arc) => arc,
                    PathSegment::Line(_) => panic!("expected an arc"),
                })
            },
        )
    }

    #[test]
    fn multi_quadrant_center_is_start_plus_offset() {
        let arc = build(
            dvec2(10.0, 0.0),
            dvec2(0.0, 10.0),
            Offsets::new(-10.0, 0.0),
            ArcDirection::Ccw,
            QuadrantMode::Multi,
        )
        .unwrap()
        .unwrap();
        assert_eq!(arc.center, dvec2(0.0, 0.0));
        assert_eq!(arc.radius, 10.0);
        assert!((arc.sweep - HALF_PI).abs() < EPS);
        assert_eq!(arc.start_angle, 0.0);
        assert!((arc.end_angle - HALF_PI).abs() < EPS);
    }

    #[test]
    fn multi_quadrant_clockwise_takes_the_long_way() {
        let arc = build(
            dvec2(10.0, 0.0),
            dvec2(0.0, 10.0),
            Offsets::new(-10.0, 0.0),
            ArcDirection::Cw,
            QuadrantMode::Multi,
        )
        .unwrap()
        .unwrap();
        assert!((arc.sweep - 3.0 * HALF_PI).abs() < EPS);
        assert_eq!(arc.direction, ArcDirection::Cw);
    }

    #[test]
    fn multi_quadrant_coincident_endpoints_make_a_full_circle() {
        let arc = build(
            dvec2(5.0, 0.0),
            dvec2(5.0, 0.0),
            Offsets::new(-5.0, 0.0),
            ArcDirection::Cw,
            QuadrantMode::Multi,
        )
        .unwrap()
        .unwrap();
        assert_eq!(arc.sweep, TWO_PI);
        assert!(arc.is_full_circle());
    }

    #[test]
    fn multi_quadrant_zero_radius_draws_nothing() {
        let arc = build(
            dvec2(1.0, 1.0),
            dvec2(1.0, 1.0),
            Offsets::new(0.0, 0.0),
            ArcDirection::Ccw,
            QuadrantMode::Multi,
        )
        .unwrap();
        assert!(arc.is_none());
    }

    #[test]
    fn multi_quadrant_radius_mismatch_keeps_start_radius() {
        let arc = build(
            dvec2(10.0, 0.0),
            dvec2(0.0, 11.0),
            Offsets::new(-10.0, 0.0),
            ArcDirection::Ccw,
            QuadrantMode::Multi,
        )
        .unwrap()
        .unwrap();
        assert_eq!(arc.radius, 10.0);
        assert_eq!(
            radius_mismatch(&arc, &PlotOptions::default()),
            Some(PlotWarning::ArcRadiusMismatch {
                start: dvec2(10.0, 0.0),
                end: dvec2(0.0, 11.0),
                center: dvec2(0.0, 0.0),
                start_radius: 10.0,
                end_radius: 11.0,
            })
        );
    }

    #[test]
    fn radius_within_tolerance_is_not_reported() {
        let arc = build(
            dvec2(10.0, 0.0),
            dvec2(0.0, 10.005),
            Offsets::new(-10.0, 0.0),
            ArcDirection::Ccw,
            QuadrantMode::Multi,
        )
        .unwrap()
        .unwrap();
        assert_eq!(radius_mismatch(&arc, &PlotOptions::default()), None);
    }

    #[test]
    fn single_quadrant_picks_center_for_ccw_quarter() {
        // offsets are unsigned; the real center is start + (-10, 0)
        let arc = build(
            dvec2(10.0, 0.0),
            dvec2(0.0, 10.0),
            Offsets::new(10.0, 0.0),
            ArcDirection::Ccw,
            QuadrantMode::Single,
        )
        .unwrap()
        .unwrap();
        assert_eq!(arc.center, dvec2(0.0, 0.0));
        assert!((arc.sweep - HALF_PI).abs() < EPS);
    }

    #[test]
    fn single_quadrant_picks_center_for_cw_quarter() {
        let arc = build(
            dvec2(10.0, 0.0),
            dvec2(0.0, 10.0),
            Offsets::new(0.0, 10.0),
            ArcDirection::Cw,
            QuadrantMode::Single,
        )
        .unwrap()
        .unwrap();
        assert_eq!(arc.center, dvec2(10.0, 10.0));
        assert!((arc.sweep - HALF_PI).abs() < EPS);
    }

    #[test]
    fn single_quadrant_ignores_offset_signs() {
        let positive = build(
            dvec2(0.0, 5.0),
            dvec2(5.0, 0.0),
            Offsets::new(0.0, 5.0),
            ArcDirection::Cw,
            QuadrantMode::Single,
        )
        .unwrap()
        .unwrap();
        let negative = build(
            dvec2(0.0, 5.0),
            dvec2(5.0, 0.0),
            Offsets::new(-0.0, -5.0),
            ArcDirection::Cw,
            QuadrantMode::Single,
        )
        .unwrap()
        .unwrap();
        assert_eq!(positive.center, dvec2(0.0, 0.0));
        assert_eq!(positive, negative);
    }

    #[test]
    fn single_quadrant_rejects_more_than_a_quarter_turn() {
        // the only equidistant center needs a three-quarter clockwise sweep
        let err = build(
            dvec2(10.0, 0.0),
            dvec2(0.0, 10.0),
            Offsets::new(10.0, 0.0),
            ArcDirection::Cw,
            QuadrantMode::Single,
        )
        .unwrap_err();
        assert!(matches!(err, PlotError::ArcCenterNotFound { direction: ArcDirection::Cw, .. }));
    }

    #[test]
    fn single_quadrant_reports_the_move_when_no_center_fits() {
        let err = build(
            dvec2(0.0, 0.0),
            dvec2(3.0, 0.0),
            Offsets::new(1.0, 1.0),
            ArcDirection::Ccw,
            QuadrantMode::Single,
        )
        .unwrap_err();
        assert_eq!(
            err,
            PlotError::ArcCenterNotFound {
                start: dvec2(0.0, 0.0),
                end: dvec2(3.0, 0.0),
                offsets: Offsets::new(1.0, 1.0),
                direction: ArcDirection::Ccw,
            }
        );
    }

    #[test]
    fn single_quadrant_coincident_endpoints_draw_nothing() {
        let arc = build(
            dvec2(1.0, 0.0),
            dvec2(1.0, 0.0),
            Offsets::new(1.0, 0.0),
            ArcDirection::Ccw,
            QuadrantMode::Single,
        )
        .unwrap();
        assert!(arc.is_none());
    }
}
