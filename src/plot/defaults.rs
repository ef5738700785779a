//! Default tolerances and precision

/// Absolute tolerance for arc radius comparisons
pub const ARC_TOLERANCE: f64 = 1e-4;
/// Radius-relative tolerance for arc radius comparisons
pub const ARC_RELATIVE_TOLERANCE: f64 = 1e-3;
/// Decimal places kept on computed polygon vertices
pub const PRECISION: u32 = 10;
/// Largest precision an f64 can honor
pub const MAX_PRECISION: u32 = 15;
/// Positions closer than this are the same point
pub const POINT_EPSILON: f64 = 1e-9;
