//! Commodity Channel Index (CCI).
//!
//! # Formula
//!
//! ```text
//! TP  = (high + low + close) / 3
//! CCI = (TP - SMA(TP, p)) / (0.015 * MAD(TP, p))
//! ```
//!
//! where `MAD` is the mean absolute deviation of the window around its mean.
//! A window of identical typical prices yields 0 instead of an infinite ratio.
//!
//! The deviation is recomputed per window, so the routine is O(n * p).

use crate::error::Result;
use crate::traits::{validate_aligned, validate_period, SeriesElement};
use crate::utils::{mean, undefined};

/// Lambert's constant scaling the mean deviation.
const CCI_SCALE: f64 = 0.015;

/// Number of leading undefined slots of `CCI(period)`.
#[inline]
#[must_use]
pub const fn cci_lookback(period: usize) -> usize {
    period.saturating_sub(1)
}

/// Typical price column `(high + low + close) / 3`.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if the columns differ in length.
pub fn typical_price<T: SeriesElement>(high: &[T], low: &[T], close: &[T]) -> Result<Vec<T>> {
    validate_aligned(&[("high", high), ("low", low), ("close", close)])?;
    let three = T::from_usize(3)?;
    Ok(high
        .iter()
        .zip(low)
        .zip(close)
        .map(|((&h, &l), &c)| (h + l + c) / three)
        .collect())
}

/// Computes the Commodity Channel Index.
///
/// # Errors
///
/// Returns an error if:
/// - The period is zero (`Error::InvalidPeriod`)
/// - The columns have different lengths (`Error::LengthMismatch`)
///
/// # Example
///
/// ```
/// use chart_ta::indicators::cci;
///
/// let high = vec![11.0_f64, 12.0, 13.0, 14.0];
/// let low = vec![9.0_f64, 10.0, 11.0, 12.0];
/// let close = vec![10.0_f64, 11.0, 12.0, 13.0];
/// let out = cci(&high, &low, &close, 3).unwrap();
///
/// // TP window [11, 12, 13]: mean 12, MAD 2/3, (13 - 12) / (0.015 * 2/3)
/// assert!((out[3] - 100.0).abs() < 1e-9);
/// ```
pub fn cci<T: SeriesElement>(high: &[T], low: &[T], close: &[T], period: usize) -> Result<Vec<T>> {
    validate_period(period)?;
    let tp = typical_price(high, low, close)?;
    let mut result = undefined(tp.len());
    if tp.len() < period {
        return Ok(result);
    }

    let scale = T::from_f64(CCI_SCALE)?;
    let period_t = T::from_usize(period)?;
    for (offset, window) in tp.windows(period).enumerate() {
        let i = offset + period - 1;
        let (lowest, highest) = window
            .iter()
            .fold((T::infinity(), T::neg_infinity()), |(lo, hi), &x| (lo.min(x), hi.max(x)));
        // identical prices can leave a rounding residue in the deviation
        if highest == lowest {
            result[i] = T::zero();
            continue;
        }
        let avg = mean(window)?;
        let deviation = window.iter().fold(T::zero(), |acc, &x| acc + (x - avg).abs()) / period_t;
        result[i] = (tp[i] - avg) / (scale * deviation);
    }

    Ok(result)
}
