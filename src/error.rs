//! Error types for geomext conversions.

use thiserror::Error;

/// Errors raised at the construction seams of the geometric types.
///
/// The point-set operations themselves are total and never return these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeomError {
    /// A coordinate slice had the wrong number of components.
    #[error("expected {expected} coordinates, found {found}")]
    CoordinateCount {
        /// Number of coordinates required.
        expected: usize,
        /// Number of coordinates supplied.
        found: usize,
    },

    /// A width or height was negative, NaN, or infinite.
    #[error("extent must be finite and non-negative")]
    InvalidExtent,
}
