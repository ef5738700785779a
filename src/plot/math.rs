//! Angle bookkeeping and rounding helpers

use crate::tree::ArcDirection;
use crate::types::Position;

use super::defaults::POINT_EPSILON;

pub use std::f64::consts::{FRAC_PI_2 as HALF_PI, PI, TAU as TWO_PI};

pub const THREE_HALF_PI: f64 = 3.0 * HALF_PI;

/// Bring an angle into `[0, 2π]`. Both bounds are kept as given so a full
/// turn stays distinguishable from no turn.
pub fn limit_angle(theta: f64) -> f64 {
    if (0.0..=TWO_PI).contains(&theta) {
        theta
    } else {
        theta.rem_euclid(TWO_PI)
    }
}

/// Rotate an angle in `[0, 2π]` clockwise by a quarter turn, staying in
/// range. After one rotation the positive y axis sits at angle zero.
pub fn rotate_quadrant(theta: f64) -> f64 {
    if theta >= HALF_PI {
        theta - HALF_PI
    } else {
        theta + THREE_HALF_PI
    }
}

pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

pub fn radians_to_degrees(radians: f64) -> f64 {
    radians.to_degrees()
}

/// Round to `decimals` places, normalizing negative zero
pub fn round_to_precision(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    let rounded = (value * factor).round() / factor;
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Polar angle of `point` around `center`, in `(-π, π]`
pub fn polar_angle(center: Position, point: Position) -> f64 {
    let d = point - center;
    d.y.atan2(d.x)
}

pub fn positions_equal(a: Position, b: Position) -> bool {
    (a.x - b.x).abs() <= POINT_EPSILON && (a.y - b.y).abs() <= POINT_EPSILON
}

/// Angle travelled from `start_angle` to `end_angle` in `direction`,
/// in `(0, 2π]`. Coincident angles mean a full turn.
pub fn sweep_angle(start_angle: f64, end_angle: f64, direction: ArcDirection) -> f64 {
    let delta = match direction {
        ArcDirection::Ccw => end_angle - start_angle,
        ArcDirection::Cw => start_angle - end_angle,
    };
    let sweep = delta.rem_euclid(TWO_PI);
    if sweep <= 0.0 { TWO_PI } else { sweep }
}
