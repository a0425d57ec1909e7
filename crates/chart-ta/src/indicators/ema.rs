//! Exponential Moving Average (EMA) indicator.
//!
//! The EMA weights recent values more heavily than older ones. It is seeded
//! with the SMA of the first `period` values and then follows the standard
//! recurrence.
//!
//! # Formula
//!
//! ```text
//! k = 2 / (period + 1)
//! EMA[period-1] = SMA(x[0..period])
//! EMA[i] = (x[i] - EMA[i-1]) * k + EMA[i-1]
//! ```
//!
//! # Example
//!
//! ```
//! use chart_ta::indicators::ema;
//!
//! let data = vec![2.0_f64, 4.0, 6.0, 8.0];
//! let result = ema(&data, 3).unwrap();
//!
//! assert!(result[1].is_nan());
//! assert!((result[2] - 4.0).abs() < 1e-10); // seed: (2 + 4 + 6) / 3
//! assert!((result[3] - 6.0).abs() < 1e-10); // (8 - 4) * 0.5 + 4
//! ```

use crate::error::Result;
use crate::traits::{validate_period, SeriesElement};
use crate::utils::undefined;

/// Number of leading undefined slots of `EMA(period)`.
#[inline]
#[must_use]
pub const fn ema_lookback(period: usize) -> usize {
    period.saturating_sub(1)
}

/// Computes the Exponential Moving Average of a data series.
///
/// The first `period - 1` slots are NaN; a series shorter than `period`
/// yields an all-NaN vector.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if the period is zero.
pub fn ema<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    ema_from(data, 0, period)
}

/// Computes an EMA whose seed window starts at `start` instead of index 0.
///
/// Slots before `start + period - 1` are NaN. This lets an EMA run over a
/// derived column whose own warm-up is `start` slots long, such as the MACD
/// line feeding the signal line.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if the period is zero.
pub fn ema_from<T: SeriesElement>(data: &[T], start: usize, period: usize) -> Result<Vec<T>> {
    validate_period(period)?;
    let mut result = undefined(data.len());
    let seed_end = start.saturating_add(period);
    if data.len() < seed_end {
        return Ok(result);
    }

    let period_t = T::from_usize(period)?;
    let k = T::two() / (period_t + T::one());

    let seed = data[start..seed_end]
        .iter()
        .fold(T::zero(), |acc, &x| acc + x)
        / period_t;
    result[seed_end - 1] = seed;

    let mut prev = seed;
    for i in seed_end..data.len() {
        prev = (data[i] - prev) * k + prev;
        result[i] = prev;
    }

    Ok(result)
}
