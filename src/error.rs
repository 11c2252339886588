//! Contract failures reported by the plane tests.

use thiserror::Error;

/// Errors returned when an input violates the unit-length contract of the plane tests.
///
/// Geometric outcomes (a miss, a box behind a plane) are never errors; those are reported
/// through [`AabbValue::NO_INTERSECTION`] and [`PlaneSide`].
///
/// [`AabbValue::NO_INTERSECTION`]: crate::scalar::AabbValue::NO_INTERSECTION
/// [`PlaneSide`]: crate::plane::PlaneSide
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum AabbError {
    /// A plane normal was not unit length.
    #[error("plane normal must be unit length, but n·n = {length_squared}")]
    NonUnitNormal {
        /// Squared length of the rejected normal.
        length_squared: f64,
    },

    /// A sweep direction was not unit length.
    #[error("sweep direction must be unit length, but dir·dir = {length_squared}")]
    NonUnitDirection {
        /// Squared length of the rejected direction.
        length_squared: f64,
    },
}

/// Type alias for results of fallible operations in this crate.
pub type Result<T> = std::result::Result<T, AabbError>;
