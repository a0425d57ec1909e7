//! Core numeric traits and parameter validation.
//!
//! [`SeriesElement`] abstracts over `f32` and `f64` so every column routine in
//! [`crate::indicators`] and [`crate::kernels`] works on either precision.
//!
//! # Example
//!
//! ```
//! use chart_ta::traits::{validate_period, SeriesElement};
//!
//! fn mean_of_head<T: SeriesElement>(data: &[T], period: usize) -> chart_ta::Result<T> {
//!     validate_period(period)?;
//!     let period_t = T::from_usize(period)?;
//!     let sum = data.iter().take(period).fold(T::zero(), |acc, &x| acc + x);
//!     Ok(sum / period_t)
//! }
//!
//! let data = vec![1.0_f64, 2.0, 3.0, 4.0];
//! assert!((mean_of_head(&data, 3).unwrap() - 2.0).abs() < 1e-10);
//! ```

use num_traits::{Float, NumCast};

use crate::error::{Error, Result};

/// A type that can be used as an element of an indicator column.
///
/// The trait requires:
/// - `Float`: standard floating-point operations, including NaN for undefined slots
/// - `NumCast`: conversion of periods and constants into the element type
/// - `Copy + Default`: cheap element handling
pub trait SeriesElement: Float + NumCast + Copy + Default + Send + Sync + 'static {
    /// Creates a series element from a `usize` value.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the value cannot be represented in this type.
    #[inline]
    fn from_usize(value: usize) -> Result<Self> {
        <Self as NumCast>::from(value).ok_or(Error::NumericConversion {
            context: "usize to series element",
        })
    }

    /// Creates a series element from an `f64` value.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the value cannot be represented in this type.
    #[inline]
    fn from_f64(value: f64) -> Result<Self> {
        <Self as NumCast>::from(value).ok_or(Error::NumericConversion {
            context: "f64 to series element",
        })
    }

    /// Returns the constant 2 as this type.
    ///
    /// Used in EMA smoothing: `k = 2 / (period + 1)`.
    #[inline]
    #[must_use]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    /// Returns the constant 100 as this type.
    #[inline]
    #[must_use]
    fn hundred() -> Self {
        <Self as NumCast>::from(100).unwrap_or_else(Self::nan)
    }

    /// Returns the constant 50 as this type (stochastic neutral value).
    #[inline]
    #[must_use]
    fn fifty() -> Self {
        <Self as NumCast>::from(50).unwrap_or_else(Self::nan)
    }
}

impl<T: Float + NumCast + Copy + Default + Send + Sync + 'static> SeriesElement for T {}

/// Validates that a period is usable (non-zero).
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if the period is zero.
#[inline]
pub const fn validate_period(period: usize) -> Result<()> {
    if period == 0 {
        Err(Error::InvalidPeriod {
            period,
            reason: "period must be at least 1",
        })
    } else {
        Ok(())
    }
}

/// Validates that a multiplier-style parameter is finite and strictly positive.
///
/// # Errors
///
/// Returns `Error::InvalidParameter` naming `name` otherwise.
#[inline]
pub fn validate_positive(value: f64, name: &'static str) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidParameter {
            name,
            reason: "must be finite and positive",
        })
    }
}

/// Validates that a threshold-style parameter is finite and not negative.
///
/// # Errors
///
/// Returns `Error::InvalidParameter` naming `name` otherwise.
#[inline]
pub fn validate_non_negative(value: f64, name: &'static str) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidParameter {
            name,
            reason: "must be finite and not negative",
        })
    }
}

/// Validates that all OHLCV columns passed to a routine share one length.
///
/// Returns that length on success.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if any column differs from the first.
pub fn validate_aligned<T>(columns: &[(&'static str, &[T])]) -> Result<usize> {
    let Some(&(first_name, first)) = columns.first() else {
        return Ok(0);
    };
    for &(name, column) in &columns[1..] {
        if column.len() != first.len() {
            return Err(Error::LengthMismatch {
                description: format!(
                    "{first_name} has {} elements, {name} has {}",
                    first.len(),
                    column.len()
                ),
            });
        }
    }
    Ok(first.len())
}
