//! Error types with diagnostics using miette
//!
//! Only conditions that would silently produce a wrong board image are
//! errors. Everything else is absorbed by the plotter with a safe default.

use miette::Diagnostic;
use thiserror::Error;

use crate::tree::ArcDirection;
use crate::types::{NumericError, Offsets, Position};

/// Errors raised while building a plot tree
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum PlotError {
    /// No sign combination of a single-quadrant offset puts the center
    /// equidistant from both endpoints within a quarter turn.
    #[error("no single-quadrant arc center fits {direction} move from {start} to {end} with offsets {offsets}")]
    #[diagnostic(
        code(pcbplot::arc::center_not_found),
        help("the offsets do not describe a quarter arc; check the quadrant mode and the arc tolerance")
    )]
    ArcCenterNotFound {
        start: Position,
        end: Position,
        offsets: Offsets,
        direction: ArcDirection,
    },

    #[error("invalid plot option `{name}`: {source}")]
    #[diagnostic(code(pcbplot::options::invalid))]
    InvalidOption {
        name: &'static str,
        #[source]
        source: NumericError,
    },
}

/// Anomalies the plotter absorbs with a safe default but reports to the
/// caller, since the resulting geometry may not match the intent
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum PlotWarning {
    #[error("arc from {start} to {end} around {center} starts at radius {start_radius} but ends at radius {end_radius}")]
    #[diagnostic(
        code(pcbplot::arc::radius_mismatch),
        severity(Warning),
        help("the start radius was used; check the arc offsets")
    )]
    ArcRadiusMismatch {
        start: Position,
        end: Position,
        center: Position,
        start_radius: f64,
        end_radius: f64,
    },
}
