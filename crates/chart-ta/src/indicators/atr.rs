//! Average True Range (ATR) indicator.
//!
//! ATR measures volatility as the Wilder-smoothed true range.
//!
//! # Formula
//!
//! ```text
//! TR[i]  = max(high[i] - low[i], |high[i] - close[i-1]|, |low[i] - close[i-1]|)
//! ATR[p] = mean(TR[1..=p])
//! ATR[i] = (ATR[i-1] * (p - 1) + TR[i]) / p
//! ```
//!
//! The first bar has no previous close, so its true range is just
//! `high - low` and it does not enter the ATR seed.
//!
//! # Example
//!
//! ```
//! use chart_ta::indicators::atr;
//!
//! let high = vec![10.0_f64, 11.0, 12.0, 11.5, 12.5];
//! let low = vec![9.0_f64, 10.0, 10.5, 10.0, 11.0];
//! let close = vec![9.5_f64, 10.5, 11.5, 10.5, 12.0];
//! let result = atr(&high, &low, &close, 3).unwrap();
//!
//! assert!(result[2].is_nan());
//! assert!(result[3] > 0.0);
//! ```

use crate::error::Result;
use crate::kernels::WilderAverage;
use crate::traits::{validate_aligned, validate_period, SeriesElement};
use crate::utils::undefined;

/// Number of leading undefined slots of `ATR(period)`.
#[inline]
#[must_use]
pub const fn atr_lookback(period: usize) -> usize {
    period
}

/// True range of one bar given the previous close.
#[inline]
#[must_use]
pub fn true_range_bar<T: SeriesElement>(high: T, low: T, prev_close: T) -> T {
    let hl = high - low;
    let hc = (high - prev_close).abs();
    let lc = (low - prev_close).abs();
    hl.max(hc).max(lc)
}

/// Computes the true-range column.
///
/// `TR[0] = high[0] - low[0]`; every later slot uses the previous close.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if the columns differ in length.
pub fn true_range<T: SeriesElement>(high: &[T], low: &[T], close: &[T]) -> Result<Vec<T>> {
    let n = validate_aligned(&[("high", high), ("low", low), ("close", close)])?;
    let mut result = Vec::with_capacity(n);
    if n == 0 {
        return Ok(result);
    }
    result.push(high[0] - low[0]);
    for i in 1..n {
        result.push(true_range_bar(high[i], low[i], close[i - 1]));
    }
    Ok(result)
}

/// Computes the Average True Range with Wilder smoothing.
///
/// The first `period` slots are NaN. A series of `period` bars or fewer
/// yields an all-NaN vector.
///
/// # Errors
///
/// Returns an error if:
/// - The period is zero (`Error::InvalidPeriod`)
/// - The columns have different lengths (`Error::LengthMismatch`)
pub fn atr<T: SeriesElement>(high: &[T], low: &[T], close: &[T], period: usize) -> Result<Vec<T>> {
    validate_period(period)?;
    let tr = true_range(high, low, close)?;
    let mut result = undefined(tr.len());
    if tr.len() <= period {
        return Ok(result);
    }

    let mut state = WilderAverage::seed(&tr[1..=period])?;
    result[period] = state.value();
    for i in (period + 1)..tr.len() {
        state = state.next(tr[i]);
        result[i] = state.value();
    }

    Ok(result)
}
