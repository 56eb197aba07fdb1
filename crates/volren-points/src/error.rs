//! Point cloud error types.

use thiserror::Error;

/// Result type for point cloud operations.
pub type PointsResult<T> = Result<T, PointsError>;

/// Errors that can occur while generating or writing points.
#[derive(Debug, Error)]
pub enum PointsError {
    /// Box minimum exceeds its maximum on some axis.
    #[error("invalid bounds on {axis}: min {min} > max {max}")]
    InvalidBounds {
        /// Axis name
        axis: char,
        /// Minimum value
        min: f64,
        /// Maximum value
        max: f64,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
