//! Stochastic Oscillator.
//!
//! Locates the close within the trailing high-low range.
//!
//! # Formula
//!
//! ```text
//! %K = (close - lowestLow(k)) / (highestHigh(k) - lowestLow(k)) * 100
//! %D = SMA(%K, d)
//! ```
//!
//! When the window's highest high equals its lowest low, %K is 50.
//! Window extrema come from the monotonic-deque kernel.

use crate::error::Result;
use crate::indicators::sma::sma;
use crate::kernels::{rolling_max, rolling_min};
use crate::traits::{validate_aligned, validate_period, SeriesElement};
use crate::utils::undefined;

/// Output of [`stochastic`].
#[derive(Debug, Clone, PartialEq)]
pub struct StochasticOutput<T> {
    /// Raw %K line.
    pub k: Vec<T>,
    /// %D line, the SMA of %K.
    pub d: Vec<T>,
}

/// Number of leading undefined slots of %K.
#[inline]
#[must_use]
pub const fn stochastic_k_lookback(k_period: usize) -> usize {
    k_period.saturating_sub(1)
}

/// Number of leading undefined slots of %D.
#[inline]
#[must_use]
pub const fn stochastic_d_lookback(k_period: usize, d_period: usize) -> usize {
    stochastic_k_lookback(k_period).saturating_add(d_period.saturating_sub(1))
}

/// Computes the Stochastic Oscillator %K and %D.
///
/// # Errors
///
/// Returns an error if:
/// - Either period is zero (`Error::InvalidPeriod`)
/// - The columns have different lengths (`Error::LengthMismatch`)
///
/// # Example
///
/// ```
/// use chart_ta::indicators::stochastic;
///
/// let high = vec![10.0_f64, 11.0, 12.0, 13.0];
/// let low = vec![9.0_f64, 10.0, 11.0, 12.0];
/// let close = vec![9.5_f64, 10.5, 11.5, 13.0];
/// let out = stochastic(&high, &low, &close, 3, 2).unwrap();
///
/// // window [10, 13]: (13 - 10) / 3 * 100
/// assert!((out.k[3] - 100.0).abs() < 1e-10);
/// assert!(!out.d[3].is_nan());
/// ```
pub fn stochastic<T: SeriesElement>(
    high: &[T],
    low: &[T],
    close: &[T],
    k_period: usize,
    d_period: usize,
) -> Result<StochasticOutput<T>> {
    validate_period(k_period)?;
    validate_period(d_period)?;
    let n = validate_aligned(&[("high", high), ("low", low), ("close", close)])?;

    let highest = rolling_max(high, k_period)?;
    let lowest = rolling_min(low, k_period)?;

    let mut k = undefined(n);
    for i in stochastic_k_lookback(k_period)..n {
        let range = highest[i] - lowest[i];
        k[i] = if range == T::zero() {
            T::fifty()
        } else {
            (close[i] - lowest[i]) / range * T::hundred()
        };
    }

    let mut d = undefined(n);
    let start = stochastic_k_lookback(k_period);
    if n > start {
        let tail = sma(&k[start..], d_period)?;
        d[start..].copy_from_slice(&tail);
    }

    Ok(StochasticOutput { k, d })
}
