//! Conditional logging macros for plot-tree construction.
//!
//! With the `tracing` feature the plotter emits `debug`/`warn` events through
//! `tracing`. Without it these macros expand to nothing, so geometry code can
//! log unconditionally at no runtime cost.

#[cfg(feature = "tracing")]
pub use tracing::{debug, warn};

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::{debug, warn};
