//! Plotter configuration

use crate::errors::PlotError;
use crate::types::{NumericError, check_non_negative};

use super::defaults;

/// Tolerances and precision used while plotting
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotOptions {
    arc_tolerance: f64,
    arc_relative_tolerance: f64,
    precision: u32,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            arc_tolerance: defaults::ARC_TOLERANCE,
            arc_relative_tolerance: defaults::ARC_RELATIVE_TOLERANCE,
            precision: defaults::PRECISION,
        }
    }
}

impl PlotOptions {
    /// Create options with validation
    pub fn try_new(
        arc_tolerance: f64,
        arc_relative_tolerance: f64,
        precision: u32,
    ) -> Result<Self, PlotError> {
        Self::default()
            .with_arc_tolerance(arc_tolerance)?
            .with_arc_relative_tolerance(arc_relative_tolerance)?
            .with_precision(precision)
    }

    pub fn with_arc_tolerance(mut self, tolerance: f64) -> Result<Self, PlotError> {
        self.arc_tolerance = check_non_negative(tolerance).map_err(|source| {
            PlotError::InvalidOption { name: "arc_tolerance", source }
        })?;
        Ok(self)
    }

    pub fn with_arc_relative_tolerance(mut self, tolerance: f64) -> Result<Self, PlotError> {
        self.arc_relative_tolerance = check_non_negative(tolerance).map_err(|source| {
            PlotError::InvalidOption { name: "arc_relative_tolerance", source }
        })?;
        Ok(self)
    }

    pub fn with_precision(mut self, precision: u32) -> Result<Self, PlotError> {
        if precision > defaults::MAX_PRECISION {
            return Err(PlotError::InvalidOption {
                name: "precision",
                source: NumericError::TooLarge { max: f64::from(defaults::MAX_PRECISION) },
            });
        }
        self.precision = precision;
        Ok(self)
    }

    pub fn arc_tolerance(&self) -> f64 {
        self.arc_tolerance
    }

    pub fn arc_relative_tolerance(&self) -> f64 {
        self.arc_relative_tolerance
    }

    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Allowed difference between the start and end radius of an arc
    pub fn arc_tolerance_for(&self, radius: f64) -> f64 {
        self.arc_tolerance.max(radius.abs() * self.arc_relative_tolerance)
    }
}
