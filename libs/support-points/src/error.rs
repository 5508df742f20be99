//! # Support Errors
//!
//! Error types for support point detection.
//!
//! Graph construction and anchor selection are pure numeric passes and never
//! fail. Errors come from the edges of the core: configuration that the
//! algorithms cannot use, and intersection data that breaks the column
//! ordering precondition.

use config::ConfigError;
use thiserror::Error;

/// Errors that can occur before the graph is built.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SupportError {
    /// Configuration rejected by validation
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// A column's crossings are not sorted ascending by z
    #[error("Unsorted column ({row}, {col}): intersection {index} lies below its predecessor")]
    UnsortedColumn { row: usize, col: usize, index: usize },

    /// Number of supplied columns does not match the grid dimensions
    #[error("Grid shape mismatch: {rows}x{cols} grid needs {expected} columns, got {actual}")]
    ShapeMismatch {
        rows: usize,
        cols: usize,
        expected: usize,
        actual: usize,
    },

    /// Anchor reach is negative or not finite
    #[error("Invalid coverage: {0}")]
    InvalidCoverage(f64),

    /// A crossing has a non-finite coordinate
    #[error("Non-finite intersection in column ({row}, {col}) at index {index}")]
    NonFiniteIntersection { row: usize, col: usize, index: usize },

    /// The grid holds more intersections than vertex ids can address
    #[error("Too many intersections: {count} (max: {max})")]
    TooManyIntersections { count: usize, max: usize },
}

/// Result type alias for support point operations.
pub type SupportResult<T> = Result<T, SupportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SupportError::UnsortedColumn {
            row: 2,
            col: 3,
            index: 1,
        };
        assert!(err.to_string().contains("(2, 3)"));

        let err: SupportError = ConfigError::InvalidDpi(0).into();
        assert!(err.to_string().contains("Invalid configuration"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SupportError>();
    }
}
