//! Simple Moving Average (SMA) indicator.
//!
//! The SMA is the arithmetic mean of the trailing `period` values.
//!
//! # Algorithm
//!
//! O(n) rolling sum:
//! 1. Sum the first `period` elements
//! 2. For each later element add the new value and subtract the one leaving the window
//!
//! # Formula
//!
//! ```text
//! SMA[i] = (x[i-period+1] + ... + x[i]) / period
//! ```
//!
//! # Example
//!
//! ```
//! use chart_ta::indicators::sma;
//!
//! let data = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
//! let result = sma(&data, 3).unwrap();
//!
//! assert!(result[0].is_nan());
//! assert!(result[1].is_nan());
//! assert!((result[2] - 2.0).abs() < 1e-10);
//! assert!((result[4] - 4.0).abs() < 1e-10);
//! ```

use crate::error::Result;
use crate::traits::{validate_period, SeriesElement};
use crate::utils::undefined;

/// Number of leading undefined slots of `SMA(period)`.
#[inline]
#[must_use]
pub const fn sma_lookback(period: usize) -> usize {
    period.saturating_sub(1)
}

/// Computes the Simple Moving Average of a data series.
///
/// Returns a vector of the same length as the input where the first
/// `period - 1` values are NaN. A series shorter than `period` (including an
/// empty one) yields an all-NaN vector.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if the period is zero.
///
/// # NaN Handling
///
/// A NaN inside the window propagates to every output whose window holds it
/// and, through the running sum, to all later outputs.
pub fn sma<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    validate_period(period)?;
    let mut result = undefined(data.len());
    if data.len() < period {
        return Ok(result);
    }

    let period_t = T::from_usize(period)?;
    let mut sum = data[..period].iter().fold(T::zero(), |acc, &x| acc + x);
    result[period - 1] = sum / period_t;

    for i in period..data.len() {
        sum = sum + data[i] - data[i - period];
        result[i] = sum / period_t;
    }

    Ok(result)
}
