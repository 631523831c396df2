//! Error types for pattern construction and output

use std::fmt;

/// Main error type for all pattern operations
#[derive(Debug)]
pub enum PatternError {
    /// Construction parameter validation failed
    ///
    /// Raised for non-positive dimensions or precision, and for injected
    /// digit buffers that are empty or hold values outside 0-9
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Direct cell access outside the lattice
    CellOutOfBounds {
        /// Requested row
        row: usize,
        /// Requested column
        col: usize,
        /// Lattice dimensions (height, width)
        dimensions: (usize, usize),
    },

    /// A power series did not reach its convergence threshold
    ConvergenceExhausted {
        /// Name of the series being summed
        series: &'static str,
        /// Number of terms evaluated before giving up
        terms: usize,
    },

    /// Writing rendered output failed
    Output {
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::CellOutOfBounds {
                row,
                col,
                dimensions,
            } => {
                write!(
                    f,
                    "Cell ({row}, {col}) is outside the {}x{} lattice",
                    dimensions.0, dimensions.1
                )
            }
            Self::ConvergenceExhausted { series, terms } => {
                write!(f, "Series {series} did not converge within {terms} terms")
            }
            Self::Output { operation, source } => {
                write!(f, "Output error during {operation}: {source}")
            }
        }
    }
}

impl std::error::Error for PatternError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Output { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PatternError {
    fn from(err: std::io::Error) -> Self {
        Self::Output {
            operation: "write",
            source: err,
        }
    }
}

/// Convenience type alias for pattern results
pub type Result<T> = std::result::Result<T, PatternError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PatternError {
    PatternError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Reject a zero-valued size parameter
///
/// # Errors
///
/// Returns `InvalidParameter` if `value` is zero
pub fn require_positive(parameter: &'static str, value: usize) -> Result<usize> {
    if value == 0 {
        Err(invalid_parameter(parameter, &value, &"must be positive"))
    } else {
        Ok(value)
    }
}
