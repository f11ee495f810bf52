//! Error types for distance computation.

use thiserror::Error;

/// Errors reported by the distance engine.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EditError {
    /// An argument was unusable before any computation started.
    ///
    /// Raised for an absent source or target sequence and for a NaN
    /// threshold.
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// Which argument was rejected.
        reason: &'static str,
    },

    /// Every cell of a completed row reached the threshold.
    ///
    /// No partial alignment is returned. Callers running a bounded search
    /// should read this as "no alignment within budget".
    #[error("threshold {threshold} exceeded at row {row} (cheapest cell {min_cost})")]
    ThresholdExceeded {
        /// The configured threshold.
        threshold: f64,
        /// 1-based source index of the row that triggered the abort.
        row: usize,
        /// Cheapest accumulated cost found in that row.
        min_cost: f64,
    },

    /// The live part of the trace no longer fits in the cell id space.
    #[error("trace needs more than {cells} live cells")]
    CapacityExceeded {
        /// Number of cells held when the limit was hit.
        cells: usize,
    },
}

impl EditError {
    /// Returns true for [`EditError::ThresholdExceeded`].
    #[inline]
    pub fn is_threshold_exceeded(&self) -> bool {
        matches!(self, EditError::ThresholdExceeded { .. })
    }
}

/// A specialized `Result` type for distance computation.
pub type Result<T> = std::result::Result<T, EditError>;
