//! Error types for chart-ta.
//!
//! Errors are reserved for invalid parameters and malformed column input.
//! A series that is merely empty or shorter than an indicator's warm-up is not
//! an error: routines return all-NaN output for it instead.

use thiserror::Error;

/// The main error type for chart-ta operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The period parameter is invalid.
    ///
    /// Returned when a period is zero or otherwise unusable for the
    /// requested routine.
    #[error("invalid period {period}: {reason}")]
    InvalidPeriod {
        /// The invalid period value that was provided.
        period: usize,
        /// Description of why the period is invalid.
        reason: &'static str,
    },

    /// A non-period numeric parameter is out of range.
    ///
    /// Used for multipliers, acceleration factors and percentage thresholds.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// Description of why the value was rejected.
        reason: &'static str,
    },

    /// Input columns that must be aligned have different lengths.
    #[error("length mismatch: {description}")]
    LengthMismatch {
        /// Description of the mismatch.
        description: String,
    },

    /// Failed to convert a numeric value to the target type.
    ///
    /// This occurs when `NumCast::from()` cannot represent a parameter
    /// (for example a period) in the series element type.
    #[error("numeric conversion failed: {context}")]
    NumericConversion {
        /// Description of the conversion that failed.
        context: &'static str,
    },

    /// A chart template name did not match any known preset.
    #[error("unknown chart template `{name}`")]
    UnknownTemplate {
        /// The name that was looked up.
        name: String,
    },
}

/// Convenience type alias for Results using the chart-ta Error type.
pub type Result<T> = std::result::Result<T, Error>;
